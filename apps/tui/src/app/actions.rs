use crate::app::state::App;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use std::path::{Path, PathBuf};
use storage_compare::svg::render_radar_svg;
use storage_compare::Dataset;

/// Loads the dataset from `path`, or the built-in one when no path is given
pub async fn load_dataset(path: Option<&Path>) -> Result<Dataset> {
    let Some(path) = path else {
        return Ok(Dataset::builtin());
    };

    let json = tokio::fs::read_to_string(path)
        .await
        .wrap_err_with(|| format!("Failed to read dataset {}", path.display()))?;
    let dataset = Dataset::from_json_str(&json)
        .wrap_err_with(|| format!("Invalid dataset {}", path.display()))?;

    tracing::info!(
        path = %path.display(),
        systems = dataset.systems().len(),
        "loaded dataset"
    );
    Ok(dataset)
}

/// Writes the radar chart for `selected` to `path`
pub async fn write_radar_svg(path: &Path, dataset: &Dataset, selected: &[String]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }

    let svg = render_radar_svg(dataset, selected);
    tokio::fs::write(path, svg)
        .await
        .wrap_err_with(|| format!("Failed to write {}", path.display()))?;

    tracing::info!(path = %path.display(), systems = selected.len(), "wrote radar svg");
    Ok(())
}

pub fn export_file_path(dir: impl AsRef<Path>, timestamp: &str) -> PathBuf {
    dir.as_ref().join(format!("radar-{timestamp}.svg"))
}

impl App {
    /// Exports the current selection as a timestamped SVG in the export
    /// directory
    pub async fn export_svg(&mut self) -> Result<PathBuf> {
        let timestamp = chrono::Local::now().format("%Y%m%d-%H%M%S").to_string();
        let path = export_file_path(&self.export_dir, &timestamp);

        write_radar_svg(&path, &self.dataset, self.selection.selected()).await?;
        self.last_export = Some(path.clone());
        Ok(path)
    }
}
