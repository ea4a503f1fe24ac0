use serde::{Deserialize, Serialize};

/// The four comparison dimensions, in axis order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Performance,
    Scalability,
    Cost,
    Cloud,
}

impl Category {
    pub const ALL: [Self; 4] = [
        Self::Performance,
        Self::Scalability,
        Self::Cost,
        Self::Cloud,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Performance => "performance",
            Self::Scalability => "scalability",
            Self::Cost => "cost",
            Self::Cloud => "cloud",
        }
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Performance),
            1 => Some(Self::Scalability),
            2 => Some(Self::Cost),
            3 => Some(Self::Cloud),
            _ => None,
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Self::Performance => 0,
            Self::Scalability => 1,
            Self::Cost => 2,
            Self::Cloud => 3,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "performance" | "perf" => Some(Self::Performance),
            "scalability" | "scale" => Some(Self::Scalability),
            "cost" => Some(Self::Cost),
            "cloud" => Some(Self::Cloud),
            _ => None,
        }
    }

    /// Tab label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Performance => "Performance & Latency",
            Self::Scalability => "Scalability & Capacity",
            Self::Cost => "Cost & Licensing",
            Self::Cloud => "Cloud Integration",
        }
    }

    /// Axis label on the radar chart.
    pub const fn short_label(self) -> &'static str {
        match self {
            Self::Performance => "Perf",
            Self::Scalability => "Scale",
            Self::Cost => "Cost",
            Self::Cloud => "Cloud",
        }
    }

    pub const fn icon(self) -> &'static str {
        match self {
            Self::Performance => "⚡",
            Self::Scalability => "📈",
            Self::Cost => "💰",
            Self::Cloud => "☁",
        }
    }

    /// Display fields shown in the detail view, in row order.
    pub const fn fields(self) -> &'static [FieldKey] {
        match self {
            Self::Performance => &[
                FieldKey::Latency,
                FieldKey::Iops,
                FieldKey::Throughput,
                FieldKey::Protocol,
                FieldKey::Notes,
            ],
            Self::Scalability => &[
                FieldKey::MinCapacity,
                FieldKey::MaxCapacity,
                FieldKey::MaxNodes,
                FieldKey::Architecture,
                FieldKey::Notes,
            ],
            Self::Cost => &[
                FieldKey::Model,
                FieldKey::EntryCost,
                FieldKey::Opex,
                FieldKey::Licensing,
                FieldKey::Notes,
            ],
            Self::Cloud => &[
                FieldKey::Providers,
                FieldKey::Services,
                FieldKey::DataFabric,
                FieldKey::Notes,
            ],
        }
    }

    pub const fn next(self) -> Self {
        match self {
            Self::Performance => Self::Scalability,
            Self::Scalability => Self::Cost,
            Self::Cost => Self::Cloud,
            Self::Cloud => Self::Performance,
        }
    }

    pub const fn prev(self) -> Self {
        match self {
            Self::Performance => Self::Cloud,
            Self::Scalability => Self::Performance,
            Self::Cost => Self::Scalability,
            Self::Cloud => Self::Cost,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Detail,
    Radar,
}

impl ViewMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Detail => "detail",
            Self::Radar => "radar",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "detail" => Some(Self::Detail),
            "radar" => Some(Self::Radar),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Detail => "Detail",
            Self::Radar => "Radar",
        }
    }

    pub const fn toggled(self) -> Self {
        match self {
            Self::Detail => Self::Radar,
            Self::Radar => Self::Detail,
        }
    }
}

/// A labelled row in the detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKey {
    Latency,
    Iops,
    Throughput,
    Protocol,
    MinCapacity,
    MaxCapacity,
    MaxNodes,
    Architecture,
    Model,
    EntryCost,
    Opex,
    Licensing,
    Providers,
    Services,
    DataFabric,
    Notes,
}

impl FieldKey {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Latency => "Latency",
            Self::Iops => "Max IOPS",
            Self::Throughput => "Throughput",
            Self::Protocol => "Protocols",
            Self::MinCapacity => "Min Capacity",
            Self::MaxCapacity => "Max Capacity",
            Self::MaxNodes => "Clustering",
            Self::Architecture => "Architecture",
            Self::Model => "Model",
            Self::EntryCost => "Entry Cost",
            Self::Opex => "OpEx Option",
            Self::Licensing => "Licensing",
            Self::Providers => "Providers",
            Self::Services => "Cloud Services",
            Self::DataFabric => "Management",
            Self::Notes => "Details",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_index_round_trips_in_axis_order() {
        for (index, category) in Category::ALL.iter().enumerate() {
            assert_eq!(category.index(), index);
            assert_eq!(Category::from_index(index), Some(*category));
        }
        assert_eq!(Category::from_index(4), None);
    }

    #[test]
    fn category_parse_accepts_ids_and_axis_labels() {
        assert_eq!(Category::parse(" Cloud "), Some(Category::Cloud));
        assert_eq!(Category::parse("perf"), Some(Category::Performance));
        assert_eq!(Category::parse("scale"), Some(Category::Scalability));
        assert_eq!(Category::parse("latency"), None);
    }

    #[test]
    fn next_and_prev_wrap_around() {
        assert_eq!(Category::Cloud.next(), Category::Performance);
        assert_eq!(Category::Performance.prev(), Category::Cloud);
        let mut category = Category::Cost;
        for _ in 0..Category::ALL.len() {
            category = category.next();
        }
        assert_eq!(category, Category::Cost);
    }

    #[test]
    fn every_category_ends_with_notes_row() {
        for category in Category::ALL {
            assert_eq!(category.fields().last(), Some(&FieldKey::Notes));
        }
        assert_eq!(Category::Cloud.fields().len(), 4);
        assert_eq!(Category::Performance.fields()[1].label(), "Max IOPS");
    }

    #[test]
    fn view_mode_toggles_and_parses() {
        assert_eq!(ViewMode::default(), ViewMode::Detail);
        assert_eq!(ViewMode::Detail.toggled(), ViewMode::Radar);
        assert_eq!(ViewMode::parse("RADAR"), Some(ViewMode::Radar));
        assert_eq!(ViewMode::parse("table"), None);
    }
}
