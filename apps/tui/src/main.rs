mod app;
mod cli;
mod event;
mod terminal;
mod ui;

use app::actions::{load_dataset, write_radar_svg};
use app::App;
use clap::Parser;
use cli::CliArgs;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use storage_compare::config::AppConfig;
use storage_compare::logging::{init_logging, LogTarget};
use storage_compare::{Dataset, Selection};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let args = CliArgs::parse();
    args.apply_env_overrides();
    let config = AppConfig::from_env();

    // The alternate screen owns stdout, so interactive runs log to a file
    let interactive = args.svg.is_none() && !args.headless && is_terminal();
    let log_target = if interactive {
        LogTarget::File(config.log_file.clone())
    } else {
        LogTarget::Stderr
    };
    init_logging(config.debug, &log_target)?;

    let dataset = load_dataset(config.data_path.as_deref()).await?;
    let selection = initial_selection(&dataset, &args)?;
    let mut app = App::new(dataset, selection, config.export_dir.clone());

    if let Some(path) = &args.svg {
        write_radar_svg(path, &app.dataset, app.selection.selected()).await?;
        println!("{}", path.display());
        return Ok(());
    }

    if !interactive {
        return event::run_headless(&app, args.json);
    }

    let mut terminal = terminal::setup_terminal()?;
    let result = event::run(&mut terminal, &mut app).await;
    terminal::cleanup_terminal_state(true, true);

    result
}

/// Selection from `--systems`, `--category` and `--view`
fn initial_selection(dataset: &Dataset, args: &CliArgs) -> Result<Selection> {
    let mut selection = Selection::with_selected(dataset.names(), &args.system_names())
        .wrap_err("Invalid --systems")?;

    if let Some(category) = args.category {
        selection.set_active_category(category);
    }
    if let Some(view) = args.view {
        selection.set_view(view);
    }

    Ok(selection)
}

fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use storage_compare::{Category, ViewMode};

    #[test]
    fn cli_flags_shape_initial_selection() -> Result<()> {
        let args = CliArgs::try_parse_from([
            "storage-compare",
            "--systems",
            "Pure Storage FlashArray,Dell EMC PowerStore",
            "--category",
            "cloud",
            "--view",
            "radar",
        ])?;

        let selection = initial_selection(&Dataset::builtin(), &args)?;
        assert_eq!(
            selection.selected(),
            ["Pure Storage FlashArray", "Dell EMC PowerStore"]
        );
        assert_eq!(selection.active_category(), Category::Cloud);
        assert_eq!(selection.view(), ViewMode::Radar);
        Ok(())
    }

    #[test]
    fn no_systems_flag_selects_everything() -> Result<()> {
        let args = CliArgs::try_parse_from(["storage-compare"])?;
        let selection = initial_selection(&Dataset::builtin(), &args)?;
        assert_eq!(selection.selected().len(), 3);
        assert_eq!(selection.view(), ViewMode::Detail);
        Ok(())
    }

    #[test]
    fn unknown_system_is_rejected() -> Result<()> {
        let args = CliArgs::try_parse_from(["storage-compare", "--systems", "HPE Alletra"])?;
        let error = initial_selection(&Dataset::builtin(), &args).expect_err("unknown system");
        assert!(format!("{error:#}").contains("Invalid --systems"));
        Ok(())
    }
}
