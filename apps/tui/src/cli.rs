use clap::{CommandFactory, Parser};
use std::path::PathBuf;
use storage_compare::config::{DATA_ENV, DEBUG_ENV};
use storage_compare::{Category, ViewMode};

#[derive(Debug, Parser)]
#[command(
    name = "storage-compare",
    version,
    about = "Enterprise storage system comparator"
)]
pub struct CliArgs {
    /// Print a summary of the selection and exit
    #[arg(long)]
    pub headless: bool,

    /// Print the headless summary as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Load the dataset from a JSON file
    #[arg(long, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Write the radar chart as SVG and exit
    #[arg(long, value_name = "PATH")]
    pub svg: Option<PathBuf>,

    /// Initial category tab (performance, scalability, cost, cloud)
    #[arg(long, value_name = "ID", value_parser = parse_category)]
    pub category: Option<Category>,

    /// Initial view (detail, radar)
    #[arg(long, value_name = "MODE", value_parser = parse_view)]
    pub view: Option<ViewMode>,

    /// Comma separated systems to select, in column order
    #[arg(long, value_name = "NAMES", value_delimiter = ',')]
    pub systems: Vec<String>,
}

impl CliArgs {
    pub fn apply_env_overrides(&self) {
        if let Some(data) = &self.data {
            std::env::set_var(DATA_ENV, data);
        }
        if self.debug {
            std::env::set_var(DEBUG_ENV, "1");
        }
    }

    /// Selected names with surrounding whitespace and blanks removed
    pub fn system_names(&self) -> Vec<String> {
        self.systems
            .iter()
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .collect()
    }

    pub fn help_text() -> String {
        let mut command = Self::command();
        let mut buffer = Vec::new();
        command.write_help(&mut buffer).ok();
        String::from_utf8_lossy(&buffer).to_string()
    }
}

fn parse_category(value: &str) -> Result<Category, String> {
    Category::parse(value).ok_or_else(|| {
        format!("unknown category '{value}', expected performance, scalability, cost or cloud")
    })
}

fn parse_view(value: &str) -> Result<ViewMode, String> {
    ViewMode::parse(value).ok_or_else(|| format!("unknown view '{value}', expected detail or radar"))
}
