// Export our modules for use in the binary and tests
pub mod aggregates;
pub mod config;
pub mod dataset;
pub mod domain;
pub mod logging;
pub mod projection;
pub mod selection;
pub mod svg;

pub use dataset::{Dataset, DatasetError, System};
pub use domain::{Category, FieldKey, ViewMode};
pub use selection::{Selection, SelectionError, ToggleOutcome};
