pub mod helpers;

use crate::app::state::App;
use crossterm::event::KeyCode;
use storage_compare::{Category, ViewMode};

pub async fn handle_input(app: &mut App, key: KeyCode) {
    if handle_help_toggle(app, key) {
        return;
    }

    match key {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.running = false;
        }
        KeyCode::Right | KeyCode::Tab => app.next_category(),
        KeyCode::Left | KeyCode::BackTab => app.prev_category(),
        KeyCode::Char(digit @ '1'..='4') => {
            let index = digit as usize - '1' as usize;
            if let Some(category) = Category::from_index(index) {
                app.set_category(category);
            }
        }
        KeyCode::Char('d') => app.set_view(ViewMode::Detail),
        KeyCode::Char('r') => app.set_view(ViewMode::Radar),
        KeyCode::Char('v') => app.toggle_view(),
        KeyCode::Up | KeyCode::Char('k') => app.cursor_up(),
        KeyCode::Down | KeyCode::Char('j') => app.cursor_down(),
        KeyCode::Char(' ') | KeyCode::Enter => {
            app.toggle_cursor_system();
        }
        KeyCode::Char('e') => handle_export(app).await,
        _ => {}
    }
}

fn handle_help_toggle(app: &mut App, key: KeyCode) -> bool {
    if key == KeyCode::F(1) || key == KeyCode::Char('?') {
        app.show_help = !app.show_help;
        return true;
    }

    if app.show_help {
        if key == KeyCode::Esc {
            app.show_help = false;
        }
        return true;
    }

    false
}

async fn handle_export(app: &mut App) {
    match app.export_svg().await {
        Ok(path) => {
            let filename = path
                .file_name()
                .and_then(|name| name.to_str())
                .unwrap_or("unknown");
            app.status_message = format!("Radar exported: {filename}");
        }
        Err(e) => {
            tracing::warn!(error = %e, "radar export failed");
            app.status_message = format!("Export failed: {e}");
        }
    }
}
