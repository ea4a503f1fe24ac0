use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use serde::Serialize;
use std::io::Stdout;
use storage_compare::aggregates::{average_score, top_scorer};

use crate::app::{handle_input, App};
use crate::ui;

/// Print the selection summary instead of starting the UI
pub fn run_headless(app: &App, json: bool) -> Result<()> {
    let summary = build_summary(app);

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", format_summary(&summary));
    }

    Ok(())
}

#[derive(Debug, Serialize)]
pub struct HeadlessSummary {
    pub category: String,
    pub category_label: String,
    pub view: String,
    pub top: Option<String>,
    pub systems: Vec<HeadlessSystem>,
}

#[derive(Debug, Serialize)]
pub struct HeadlessSystem {
    pub name: String,
    pub score: u8,
    pub average: u32,
    pub top: bool,
    pub verdict: String,
}

pub fn build_summary(app: &App) -> HeadlessSummary {
    let category = app.active_category();
    let top = top_scorer(&app.dataset, app.selection.selected(), category)
        .map(|system| system.name.clone());

    let systems = app
        .selected_systems()
        .into_iter()
        .map(|system| HeadlessSystem {
            name: system.name.clone(),
            score: system.score(category),
            average: average_score(system),
            top: top.as_deref() == Some(system.name.as_str()),
            verdict: system.verdict(category).to_string(),
        })
        .collect();

    HeadlessSummary {
        category: category.as_str().to_string(),
        category_label: category.label().to_string(),
        view: app.view().as_str().to_string(),
        top,
        systems,
    }
}

pub fn format_summary(summary: &HeadlessSummary) -> String {
    let mut out = String::new();
    out.push_str("\nStorage System Comparator\n");
    out.push_str("=========================\n");
    out.push_str(&format!("Category: {}\n", summary.category_label));

    out.push_str("\nScores:\n");
    for system in &summary.systems {
        let marker = if system.top { "  [TOP]" } else { "" };
        out.push_str(&format!(
            "- {}: {} (avg {}){marker}\n",
            system.name, system.score, system.average
        ));
    }

    out.push_str("\nQuick Verdict:\n");
    for system in &summary.systems {
        out.push_str(&format!("- {}: {}\n", system.name, system.verdict));
    }

    out
}

/// Run the main application event loop
pub async fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    // Configure event poll timeout (ms)
    const EVENT_POLL_TIMEOUT: u64 = 50;

    loop {
        app.update();

        if let Err(e) = terminal.draw(|f| ui::ui(app, f)) {
            return Err(color_eyre::eyre::eyre!("Terminal draw error: {e}"));
        }

        if matches!(
            event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT)),
            Ok(true)
        ) {
            match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    handle_input(app, key.code).await;
                    if !app.running {
                        break;
                    }
                }
                Ok(Event::Resize(_, _)) => {
                    if let Err(e) = terminal.draw(|f| ui::ui(app, f)) {
                        tracing::debug!(error = %e, "redraw after resize failed");
                    }
                }
                Ok(_) => {}
                Err(e) => {
                    tracing::warn!(error = %e, "failed to read terminal event");
                }
            }
        }
    }

    tracing::info!("event loop finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use storage_compare::{Category, Selection};

    #[test]
    fn summary_marks_top_scorer_for_active_category() {
        let mut app = App::with_builtin();
        app.set_category(Category::Cost);
        let summary = build_summary(&app);

        assert_eq!(summary.category, "cost");
        assert_eq!(summary.top.as_deref(), Some("Dell EMC PowerStore"));
        let flagged: Vec<&str> = summary
            .systems
            .iter()
            .filter(|system| system.top)
            .map(|system| system.name.as_str())
            .collect();
        assert_eq!(flagged, vec!["Dell EMC PowerStore"]);
    }

    #[test]
    fn summary_follows_selection_order() {
        let mut app = App::with_builtin();
        app.selection = Selection::with_selected(
            app.dataset.names(),
            &["Pure Storage FlashArray".to_string(), "NetApp ONTAP".to_string()],
        )
        .expect("valid selection");

        let summary = build_summary(&app);
        let names: Vec<&str> = summary.systems.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Pure Storage FlashArray", "NetApp ONTAP"]);
        assert_eq!(summary.systems[1].average, 84);
        assert_eq!(summary.systems[0].score, 95);
    }

    #[test]
    fn text_summary_lists_scores_and_verdicts() {
        let app = App::with_builtin();
        let text = format_summary(&build_summary(&app));

        assert!(text.contains("Category: Performance & Latency"));
        assert!(text.contains("- Pure Storage FlashArray: 95 (avg 83)  [TOP]"));
        assert!(text.contains("- NetApp ONTAP: 88 (avg 84)\n"));
        assert!(text.contains("- Dell EMC PowerStore: Strong with AppsON for converged compute+storage"));
    }

    #[test]
    fn json_summary_serializes() -> serde_json::Result<()> {
        let app = App::with_builtin();
        let value = serde_json::to_value(build_summary(&app))?;
        assert_eq!(value["view"], "detail");
        assert_eq!(value["systems"].as_array().map(Vec::len), Some(3));
        assert_eq!(value["top"], "Pure Storage FlashArray");
        Ok(())
    }
}
