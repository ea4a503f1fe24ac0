use crate::app::App;
use crate::ui::theme::{blend, system_color, FAINT, MUTED, TEXT};
use crate::ui::widgets::radar::render_radar_chart;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use storage_compare::aggregates::{average_score, short_name};
use storage_compare::System;

const LEGEND_WIDTH: u16 = 34;
const AVERAGE_CARD_HEIGHT: u16 = 4;

/// Caption naming every plotted system
pub fn caption(systems: &[&System]) -> String {
    let names: Vec<&str> = systems.iter().map(|system| system.name.as_str()).collect();
    format!("All-Category Radar — {}", names.join(" vs "))
}

pub fn render_radar_view(app: &App, f: &mut Frame<'_>, area: Rect) {
    let systems = app.selected_systems();
    if systems.is_empty() || area.height < 2 {
        return;
    }

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(4)])
        .split(area);

    f.render_widget(
        Paragraph::new(Span::styled(
            caption(&systems),
            Style::default().fg(MUTED).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        layout[0],
    );

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(LEGEND_WIDTH)])
        .split(layout[1]);

    render_radar_chart(f, body[0], &systems);
    render_side_panel(f, body[1], &systems);
}

fn render_side_panel(f: &mut Frame<'_>, area: Rect, systems: &[&System]) {
    #[allow(clippy::cast_possible_truncation)]
    let legend_height = systems.len() as u16 + 2;

    let mut constraints = vec![Constraint::Length(legend_height)];
    constraints.extend(systems.iter().map(|_| Constraint::Length(AVERAGE_CARD_HEIGHT)));
    constraints.push(Constraint::Min(0));

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let legend = Paragraph::new(Text::from(legend_lines(systems))).block(
        Block::default()
            .title(" Legend ")
            .title_style(Style::default().fg(MUTED))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(FAINT)),
    );
    f.render_widget(legend, rows[0]);

    for (row, system) in rows[1..].iter().zip(systems) {
        render_average_card(f, *row, system);
    }
}

pub fn legend_lines(systems: &[&System]) -> Vec<TextLine<'static>> {
    systems
        .iter()
        .map(|system| {
            let color = system_color(system);
            TextLine::from(vec![
                Span::styled("━━ ", Style::default().fg(color)),
                Span::styled(system.name.clone(), Style::default().fg(TEXT)),
            ])
        })
        .collect()
}

fn render_average_card(f: &mut Frame<'_>, area: Rect, system: &System) {
    let color = system_color(system);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(blend(color, 0.4)));

    let lines = vec![
        TextLine::from(vec![
            Span::styled(
                format!("{}", average_score(system)),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" avg", Style::default().fg(MUTED)),
        ]),
        TextLine::from(Span::styled(short_name(&system.name), Style::default().fg(TEXT))),
    ];

    f.render_widget(
        Paragraph::new(Text::from(lines))
            .alignment(Alignment::Center)
            .block(block),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::test_support::buffer_text;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use storage_compare::Dataset;

    #[test]
    fn caption_joins_selected_names() {
        let dataset = Dataset::builtin();
        let systems: Vec<&System> = dataset.systems().iter().take(2).collect();
        assert_eq!(
            caption(&systems),
            "All-Category Radar — NetApp ONTAP vs Dell EMC PowerStore"
        );
    }

    #[test]
    fn legend_has_one_line_per_system() {
        let dataset = Dataset::builtin();
        let systems: Vec<&System> = dataset.systems().iter().collect();
        let lines = legend_lines(&systems);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[2].spans[1].content, "Pure Storage FlashArray");
    }

    #[test]
    fn radar_view_shows_averages_with_short_names() {
        let mut app = App::with_builtin();
        app.toggle_view();

        let backend = TestBackend::new(120, 40);
        let mut terminal = Terminal::new(backend).expect("terminal");
        terminal
            .draw(|f| render_radar_view(&app, f, f.area()))
            .expect("draw");
        let screen = buffer_text(terminal.backend().buffer());

        assert!(screen.contains("84 avg"));
        assert!(screen.contains("81 avg"));
        assert!(screen.contains("83 avg"));
        assert!(screen.contains("Dell PowerStore"));
        assert!(screen.contains("Pure FlashArray"));
        assert!(screen.contains("Legend"));
    }
}
