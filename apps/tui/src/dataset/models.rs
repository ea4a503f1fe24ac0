use crate::domain::{Category, FieldKey};
use serde::{Deserialize, Serialize};

/// A storage product and its four category records
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct System {
    pub name: String,
    pub color: String,
    pub accent: String,
    pub logo: String,
    pub tagline: String,
    pub performance: Performance,
    pub scalability: Scalability,
    pub cost: Cost,
    pub cloud: Cloud,
}

/// Performance & latency metrics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Performance {
    pub score: u8,
    pub latency: String,
    pub iops: String,
    pub throughput: String,
    pub protocol: String,
    pub notes: String,
    pub verdict: String,
}

/// Scalability & capacity metrics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scalability {
    pub score: u8,
    pub min_capacity: String,
    pub max_capacity: String,
    pub max_nodes: String,
    pub architecture: String,
    pub notes: String,
    pub verdict: String,
}

/// Cost & licensing metrics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cost {
    pub score: u8,
    pub model: String,
    pub entry_cost: String,
    pub opex: String,
    pub licensing: String,
    pub notes: String,
    pub verdict: String,
}

/// Cloud integration metrics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cloud {
    pub score: u8,
    pub providers: Vec<String>,
    pub services: String,
    pub data_fabric: String,
    pub notes: String,
    pub verdict: String,
}

impl System {
    pub const fn score(&self, category: Category) -> u8 {
        match category {
            Category::Performance => self.performance.score,
            Category::Scalability => self.scalability.score,
            Category::Cost => self.cost.score,
            Category::Cloud => self.cloud.score,
        }
    }

    /// Scores in axis order.
    pub const fn scores(&self) -> [u8; 4] {
        [
            self.performance.score,
            self.scalability.score,
            self.cost.score,
            self.cloud.score,
        ]
    }

    pub fn notes(&self, category: Category) -> &str {
        match category {
            Category::Performance => &self.performance.notes,
            Category::Scalability => &self.scalability.notes,
            Category::Cost => &self.cost.notes,
            Category::Cloud => &self.cloud.notes,
        }
    }

    pub fn verdict(&self, category: Category) -> &str {
        match category {
            Category::Performance => &self.performance.verdict,
            Category::Scalability => &self.scalability.verdict,
            Category::Cost => &self.cost.verdict,
            Category::Cloud => &self.cloud.verdict,
        }
    }

    /// Display value of a detail row. Returns `None` when the field does not
    /// belong to `category`.
    pub fn field_value(&self, category: Category, key: FieldKey) -> Option<String> {
        let value = match (category, key) {
            (_, FieldKey::Notes) => self.notes(category),
            (Category::Performance, FieldKey::Latency) => &self.performance.latency,
            (Category::Performance, FieldKey::Iops) => &self.performance.iops,
            (Category::Performance, FieldKey::Throughput) => &self.performance.throughput,
            (Category::Performance, FieldKey::Protocol) => &self.performance.protocol,
            (Category::Scalability, FieldKey::MinCapacity) => &self.scalability.min_capacity,
            (Category::Scalability, FieldKey::MaxCapacity) => &self.scalability.max_capacity,
            (Category::Scalability, FieldKey::MaxNodes) => &self.scalability.max_nodes,
            (Category::Scalability, FieldKey::Architecture) => &self.scalability.architecture,
            (Category::Cost, FieldKey::Model) => &self.cost.model,
            (Category::Cost, FieldKey::EntryCost) => &self.cost.entry_cost,
            (Category::Cost, FieldKey::Opex) => &self.cost.opex,
            (Category::Cost, FieldKey::Licensing) => &self.cost.licensing,
            (Category::Cloud, FieldKey::Providers) => return Some(self.cloud.providers.join(", ")),
            (Category::Cloud, FieldKey::Services) => &self.cloud.services,
            (Category::Cloud, FieldKey::DataFabric) => &self.cloud.data_fabric,
            _ => return None,
        };
        Some(value.to_string())
    }

    /// Brand colour as RGB components
    pub fn rgb(&self) -> Option<(u8, u8, u8)> {
        parse_hex_color(&self.color)
    }
}

/// Parses `#RRGGBB` into its components
pub fn parse_hex_color(value: &str) -> Option<(u8, u8, u8)> {
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}
