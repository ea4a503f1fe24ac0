use crate::app::input::helpers::{wrap_decrement, wrap_increment};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use storage_compare::{Category, Dataset, Selection, System, ToggleOutcome, ViewMode};

/// Score bars grow to their value over this long after a tab change
pub const BAR_TRANSITION: Duration = Duration::from_millis(800);

#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub show_help: bool,
    pub status_message: String,
    pub dataset: Dataset,
    pub selection: Selection,
    /// Index into the dataset's systems for the header toggles
    pub system_cursor: usize,
    pub export_dir: PathBuf,
    pub last_export: Option<PathBuf>,
    pub transition_start: Instant,
    pub bar_progress: f64,
}

impl App {
    pub fn new(dataset: Dataset, selection: Selection, export_dir: PathBuf) -> Self {
        Self {
            running: true,
            show_help: false,
            status_message: String::new(),
            dataset,
            selection,
            system_cursor: 0,
            export_dir,
            last_export: None,
            transition_start: Instant::now(),
            bar_progress: 0.0,
        }
    }

    /// Builtin data, everything selected
    pub fn with_builtin() -> Self {
        let dataset = Dataset::builtin();
        let selection = Selection::new(dataset.names());
        Self::new(dataset, selection, PathBuf::from("./exports"))
    }

    pub fn update(&mut self) {
        let elapsed = self.transition_start.elapsed();
        self.bar_progress = bar_fill(elapsed);
    }

    fn restart_transition(&mut self) {
        self.transition_start = Instant::now();
        self.bar_progress = 0.0;
    }

    pub const fn active_category(&self) -> Category {
        self.selection.active_category()
    }

    pub const fn view(&self) -> ViewMode {
        self.selection.view()
    }

    /// Selected systems in column order
    pub fn selected_systems(&self) -> Vec<&System> {
        self.selection
            .selected()
            .iter()
            .filter_map(|name| self.dataset.get(name))
            .collect()
    }

    pub fn set_category(&mut self, category: Category) {
        if category != self.selection.active_category() {
            self.restart_transition();
        }
        self.selection.set_active_category(category);
        self.status_message.clear();
    }

    pub fn next_category(&mut self) {
        self.set_category(self.selection.active_category().next());
    }

    pub fn prev_category(&mut self) {
        self.set_category(self.selection.active_category().prev());
    }

    pub fn set_view(&mut self, view: ViewMode) {
        if view != self.selection.view() {
            self.restart_transition();
        }
        self.selection.set_view(view);
        self.status_message.clear();
    }

    pub fn toggle_view(&mut self) {
        self.set_view(self.selection.view().toggled());
    }

    pub fn cursor_up(&mut self) {
        self.system_cursor = wrap_decrement(self.system_cursor, self.dataset.systems().len());
    }

    pub fn cursor_down(&mut self) {
        self.system_cursor = wrap_increment(self.system_cursor, self.dataset.systems().len());
    }

    pub fn cursor_system(&self) -> Option<&System> {
        self.dataset.systems().get(self.system_cursor)
    }

    pub fn toggle_cursor_system(&mut self) -> ToggleOutcome {
        let Some(name) = self.cursor_system().map(|system| system.name.clone()) else {
            return ToggleOutcome::Unknown;
        };

        let outcome = self.selection.toggle_system(&name);
        self.status_message = match outcome {
            ToggleOutcome::Added => format!("Showing {name}"),
            ToggleOutcome::Removed => format!("Hiding {name}"),
            ToggleOutcome::KeptLast => "At least one system must stay selected".to_string(),
            ToggleOutcome::Unknown => format!("Unknown system: {name}"),
        };
        tracing::debug!(system = %name, ?outcome, "toggled system");
        outcome
    }
}

/// Ease-out fill fraction for the score bar transition
pub fn bar_fill(elapsed: Duration) -> f64 {
    let t = (elapsed.as_secs_f64() / BAR_TRANSITION.as_secs_f64()).clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}
