use crate::ui::theme::FAINT;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

const FILLED: &str = "█";
const EMPTY: &str = "░";

/// Cells to fill for `score` once `progress` of the transition has elapsed
pub fn filled_cells(score: u8, progress: f64, width: u16) -> u16 {
    let fraction = (f64::from(score.min(100)) / 100.0) * progress.clamp(0.0, 1.0);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let cells = (fraction * f64::from(width)).round() as u16;
    cells.min(width)
}

pub fn score_bar_line(score: u8, progress: f64, width: u16, color: Color) -> Line<'static> {
    let filled = filled_cells(score, progress, width);
    Line::from(vec![
        Span::styled(FILLED.repeat(usize::from(filled)), Style::default().fg(color)),
        Span::styled(
            EMPTY.repeat(usize::from(width - filled)),
            Style::default().fg(FAINT),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_width_tracks_score_and_progress() {
        assert_eq!(filled_cells(100, 1.0, 20), 20);
        assert_eq!(filled_cells(88, 1.0, 10), 9);
        assert_eq!(filled_cells(88, 0.0, 10), 0);
        assert_eq!(filled_cells(50, 0.5, 20), 5);
    }

    #[test]
    fn bar_never_exceeds_width() {
        assert_eq!(filled_cells(255, 3.0, 8), 8);
    }

    #[test]
    fn line_spans_cover_full_width() {
        let line = score_bar_line(62, 1.0, 10, Color::Cyan);
        assert_eq!(line.width(), 10);
        assert_eq!(line.spans[0].content.chars().count(), 6);
    }
}
