use crate::domain::{Category, ViewMode};
use serde::Serialize;
use thiserror::Error;

/// Result of a system toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
    /// Deselecting the only selected system is refused
    KeptLast,
    Unknown,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("unknown system: {0}")]
    UnknownSystem(String),

    #[error("system listed more than once: {0}")]
    DuplicateSystem(String),
}

/// Which systems are visible and how they are shown.
///
/// `selected` is never empty and keeps the order in which systems were
/// selected; it drives the column order of the detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    active_category: Category,
    selected: Vec<String>,
    view: ViewMode,
    #[serde(skip)]
    known: Vec<String>,
}

impl Selection {
    /// All known systems selected, performance tab, detail view.
    pub fn new(known: Vec<String>) -> Self {
        Self {
            active_category: Category::Performance,
            selected: known.clone(),
            view: ViewMode::Detail,
            known,
        }
    }

    /// Starts from an explicit list of names. An empty list selects
    /// everything.
    pub fn with_selected(known: Vec<String>, names: &[String]) -> Result<Self, SelectionError> {
        let mut selection = Self::new(known);
        if names.is_empty() {
            return Ok(selection);
        }

        let mut selected: Vec<String> = Vec::with_capacity(names.len());
        for name in names {
            if !selection.known.contains(name) {
                return Err(SelectionError::UnknownSystem(name.clone()));
            }
            if selected.contains(name) {
                return Err(SelectionError::DuplicateSystem(name.clone()));
            }
            selected.push(name.clone());
        }
        selection.selected = selected;
        Ok(selection)
    }

    pub const fn active_category(&self) -> Category {
        self.active_category
    }

    pub const fn view(&self) -> ViewMode {
        self.view
    }

    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    pub fn known(&self) -> &[String] {
        &self.known
    }

    pub fn is_selected(&self, name: &str) -> bool {
        self.selected.iter().any(|selected| selected == name)
    }

    pub fn set_active_category(&mut self, category: Category) {
        self.active_category = category;
    }

    pub fn next_category(&mut self) {
        self.active_category = self.active_category.next();
    }

    pub fn prev_category(&mut self) {
        self.active_category = self.active_category.prev();
    }

    pub fn set_view(&mut self, view: ViewMode) {
        self.view = view;
    }

    pub fn toggle_view(&mut self) {
        self.view = self.view.toggled();
    }

    /// Removes a selected system unless it is the last one; appends an
    /// unselected system to the end.
    pub fn toggle_system(&mut self, name: &str) -> ToggleOutcome {
        if !self.known.iter().any(|known| known == name) {
            return ToggleOutcome::Unknown;
        }

        if let Some(position) = self.selected.iter().position(|selected| selected == name) {
            if self.selected.len() > 1 {
                self.selected.remove(position);
                ToggleOutcome::Removed
            } else {
                ToggleOutcome::KeptLast
            }
        } else {
            self.selected.push(name.to_string());
            ToggleOutcome::Added
        }
    }
}
