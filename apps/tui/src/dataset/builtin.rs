//! Built-in comparison data, taken from published vendor specifications.

use super::models::{Cloud, Cost, Performance, Scalability, System};

pub fn systems() -> Vec<System> {
    vec![netapp_ontap(), dell_powerstore(), pure_flasharray()]
}

fn netapp_ontap() -> System {
    System {
        name: "NetApp ONTAP".into(),
        color: "#00A1E0".into(),
        accent: "#0078A8".into(),
        logo: "N".into(),
        tagline: "Unified Hybrid Cloud Storage".into(),
        performance: Performance {
            score: 88,
            latency: "< 300µs (NVMe)".into(),
            iops: "Up to 11M IOPS".into(),
            throughput: "300+ GB/s".into(),
            protocol: "NFS, SMB, iSCSI, FC, NVMe-oF".into(),
            notes: "ONTAP Select for software-defined; AFF A-Series for all-flash. \
                    Strong mixed workload performance with QoS policies."
                .into(),
            verdict: "Best for mixed workloads with QoS control".into(),
        },
        scalability: Scalability {
            score: 92,
            min_capacity: "2.4 TB".into(),
            max_capacity: "20+ PB (cluster)".into(),
            max_nodes: "24 nodes per cluster".into(),
            architecture: "Scale-up + Scale-out".into(),
            notes: "FlexGroup volumes scale to 20 PB. Snapshots and clones with \
                    near-zero overhead. Multi-tenant via SVMs."
                .into(),
            verdict: "Most scalable for NAS & SAN at petabyte scale".into(),
        },
        cost: Cost {
            score: 62,
            model: "CapEx + Subscription (Keystone)".into(),
            entry_cost: "$$$$".into(),
            opex: "Keystone STaaS available".into(),
            licensing: "Complex tiered licensing".into(),
            notes: "Higher TCO than Pure but extensive feature set. FlexPod validated \
                    with Cisco UCS. Keystone FlexOS offers OPEX model."
                .into(),
            verdict: "Highest TCO but broadest feature set & STaaS option".into(),
        },
        cloud: Cloud {
            score: 94,
            providers: vec!["AWS".into(), "Azure".into(), "GCP".into()],
            services: "Cloud Volumes ONTAP, FSx for ONTAP, ANF".into(),
            data_fabric: "BlueXP unified control plane".into(),
            notes: "Best-in-class hybrid cloud. SnapMirror replicates to any cloud. \
                    CVO runs natively in all 3 hyperscalers. Cloud Tiering to S3/Blob."
                .into(),
            verdict: "Best hybrid cloud with native presence in all 3 hyperscalers".into(),
        },
    }
}

fn dell_powerstore() -> System {
    System {
        name: "Dell EMC PowerStore".into(),
        color: "#007DB8".into(),
        accent: "#005A8C".into(),
        logo: "D".into(),
        tagline: "Intelligent, Adaptable Storage".into(),
        performance: Performance {
            score: 85,
            latency: "< 500µs (NVMe)".into(),
            iops: "Up to 7M IOPS".into(),
            throughput: "100+ GB/s".into(),
            protocol: "iSCSI, FC, NFS, SMB, NVMe-oF".into(),
            notes: "AppsON allows running containerized apps directly on the array. \
                    Inline deduplication and compression. Dynamic resource sharing \
                    across workloads."
                .into(),
            verdict: "Strong with AppsON for converged compute+storage".into(),
        },
        scalability: Scalability {
            score: 87,
            min_capacity: "1.2 TB".into(),
            max_capacity: "4 PB per appliance".into(),
            max_nodes: "Metro clusters supported".into(),
            architecture: "Scale-up with MetroSync".into(),
            notes: "Modular design with PowerStore T (performance) and PowerStore X \
                    (AppsON). Non-disruptive expansion. Active-Active Metro clustering."
                .into(),
            verdict: "Solid for mid-range with Metro clustering".into(),
        },
        cost: Cost {
            score: 74,
            model: "CapEx / APEX Subscription".into(),
            entry_cost: "$$$".into(),
            opex: "APEX Flex on Demand".into(),
            licensing: "Simplified PowerStore Manager".into(),
            notes: "APEX storage services offer pay-per-use. Strong Dell ecosystem \
                    discounts. Bundled data services (Replication, CloudIQ) reduce \
                    add-on cost."
                .into(),
            verdict: "Best value in the Dell ecosystem with APEX".into(),
        },
        cloud: Cloud {
            score: 78,
            providers: vec!["AWS".into(), "Azure".into()],
            services: "PowerStore CloudIQ, APEX Multi-Cloud".into(),
            data_fabric: "CloudIQ AIOps".into(),
            notes: "CloudIQ provides predictive analytics and cloud-connected insights. \
                    APEX extends to public cloud. Less native cloud-first than NetApp \
                    or Pure."
                .into(),
            verdict: "Good cloud telemetry; less native cloud integration".into(),
        },
    }
}

fn pure_flasharray() -> System {
    System {
        name: "Pure Storage FlashArray".into(),
        color: "#FF6D00".into(),
        accent: "#CC5500".into(),
        logo: "P".into(),
        tagline: "Modern All-Flash, Always Simple".into(),
        performance: Performance {
            score: 95,
            latency: "< 100µs (guaranteed)".into(),
            iops: "Up to 15M IOPS".into(),
            throughput: "150+ GB/s".into(),
            protocol: "iSCSI, FC, NVMe-oF, NFS (FlashBlade)".into(),
            notes: "Industry-leading sub-100µs latency SLA. Evergreen//One guarantees \
                    performance. DirectFlash modules bypass controller bottlenecks."
                .into(),
            verdict: "Fastest with guaranteed sub-100µs SLA".into(),
        },
        scalability: Scalability {
            score: 83,
            min_capacity: "17 TB".into(),
            max_capacity: "5+ PB per array".into(),
            max_nodes: "ActiveCluster stretch".into(),
            architecture: "Scale-up + ActiveCluster".into(),
            notes: "Non-disruptive controller upgrades via Evergreen. ActiveCluster \
                    provides active-active HA across sites. FlashBlade//S for \
                    unstructured data at scale."
                .into(),
            verdict: "Best non-disruptive upgrade path (Evergreen)".into(),
        },
        cost: Cost {
            score: 70,
            model: "CapEx / Evergreen//One STaaS".into(),
            entry_cost: "$$$".into(),
            opex: "Evergreen//One consumption".into(),
            licensing: "All-inclusive Purity software".into(),
            notes: "Premium price but no forklift upgrades ever. Evergreen model \
                    replaces controllers/shelves. Evergreen//One STaaS includes \
                    guaranteed performance SLA."
                .into(),
            verdict: "Premium price, zero upgrade costs over time".into(),
        },
        cloud: Cloud {
            score: 85,
            providers: vec!["AWS".into(), "Azure".into(), "GCP".into()],
            services: "Cloud Block Store, Pure Cloud Data Services".into(),
            data_fabric: "Pure1 AI-driven management".into(),
            notes: "Cloud Block Store runs FlashArray in cloud for DR/burst. Pure1 Meta \
                    uses ML for predictive support. Portworx provides cloud-native \
                    storage for Kubernetes."
                .into(),
            verdict: "Strong with Portworx for cloud-native/Kubernetes".into(),
        },
    }
}
