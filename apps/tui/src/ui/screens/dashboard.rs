use crate::app::App;
use crate::ui::screens::{detail, radar};
use crate::ui::theme::{system_color, BACKGROUND, FAINT, MUTED, TEXT};
use crate::ui::widgets::popup::centered_rect;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Tabs, Wrap};
use ratatui::Frame;
use storage_compare::{Category, ViewMode};

pub const FOOTER: &str =
    "ENTERPRISE STORAGE COMPARATOR · DATA BASED ON PUBLISHED VENDOR SPECS · FOR REFERENCE ONLY";

pub fn render_dashboard(app: &App, f: &mut Frame<'_>) {
    f.render_widget(
        Block::default().style(Style::default().bg(BACKGROUND)),
        f.area(),
    );

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Header
            Constraint::Length(3), // Category tabs
            Constraint::Min(8),    // View
            Constraint::Length(3), // Status
            Constraint::Length(1), // Footer
        ])
        .split(f.area().inner(Margin::new(1, 0)));

    render_header(app, f, layout[0]);
    render_tabs(app, f, layout[1]);
    match app.view() {
        ViewMode::Detail => detail::render_detail(app, f, layout[2]),
        ViewMode::Radar => radar::render_radar_view(app, f, layout[2]),
    }
    render_status(app, f, layout[3]);
    render_footer(f, layout[4]);

    if app.show_help {
        render_help_popup(f, f.area());
    }
}

fn render_header(app: &App, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(FAINT));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let lines = vec![
        TextLine::from(Span::styled(
            "ENTERPRISE STORAGE INTELLIGENCE",
            Style::default().fg(MUTED),
        )),
        TextLine::from(Span::styled(
            "Storage System Comparator",
            Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
        )),
        TextLine::from(""),
        system_toggle_line(app),
    ];

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(30), Constraint::Length(22)])
        .split(inner);

    f.render_widget(Paragraph::new(Text::from(lines)), chunks[0]);
    f.render_widget(
        Paragraph::new(view_toggle_line(app.view())).alignment(Alignment::Right),
        chunks[1],
    );
}

/// `[ Detail | Radar ]` with the active view highlighted
pub fn view_toggle_line(view: ViewMode) -> TextLine<'static> {
    let mode = |mode: ViewMode| {
        let style = if mode == view {
            Style::default()
                .fg(Color::Black)
                .bg(TEXT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(MUTED)
        };
        Span::styled(format!(" {} ", mode.label()), style)
    };

    TextLine::from(vec![
        Span::styled("[", Style::default().fg(FAINT)),
        mode(ViewMode::Detail),
        Span::styled("|", Style::default().fg(FAINT)),
        mode(ViewMode::Radar),
        Span::styled("]", Style::default().fg(FAINT)),
    ])
}

/// One toggle per system: filled dot when selected, cursor underlined
pub fn system_toggle_line(app: &App) -> TextLine<'static> {
    let mut spans = Vec::new();
    for (index, system) in app.dataset.systems().iter().enumerate() {
        let selected = app.selection.is_selected(&system.name);
        let color = system_color(system);
        let dot = if selected { "●" } else { "○" };

        let mut style = if selected {
            Style::default().fg(color)
        } else {
            Style::default().fg(MUTED)
        };
        if index == app.system_cursor {
            style = style.add_modifier(Modifier::UNDERLINED | Modifier::BOLD);
        }

        if index > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(format!("{dot} {}", system.name), style));
    }
    TextLine::from(spans)
}

fn render_tabs(app: &App, f: &mut Frame<'_>, area: Rect) {
    let titles = Category::ALL
        .iter()
        .map(|category| TextLine::from(format!(" {} {} ", category.icon(), category.label())))
        .collect::<Vec<_>>();

    let tabs = Tabs::new(titles)
        .select(app.active_category().index())
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(FAINT)),
        )
        .style(Style::default().fg(MUTED))
        .highlight_style(Style::default().fg(TEXT).add_modifier(Modifier::BOLD))
        .divider(Span::styled("|", Style::default().fg(FAINT)));

    f.render_widget(tabs, area);
}

fn render_status(app: &App, f: &mut Frame<'_>, area: Rect) {
    let status_block = Block::default()
        .title(" Status ")
        .title_style(Style::default().fg(Color::Yellow))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(FAINT));

    let status_text = if app.status_message.is_empty() {
        Text::from(Span::styled(
            "←/→ category · d/r view · ↑/↓ + Space toggle system · e export · ? help · q quit",
            Style::default().fg(MUTED),
        ))
    } else {
        let style = if app.status_message.starts_with("Export failed")
            || app.status_message.starts_with("At least one")
        {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::Green)
        };
        Text::from(Span::styled(app.status_message.clone(), style))
    };

    f.render_widget(
        Paragraph::new(status_text)
            .block(status_block)
            .wrap(Wrap { trim: true }),
        area,
    );
}

fn render_footer(f: &mut Frame<'_>, area: Rect) {
    f.render_widget(
        Paragraph::new(Span::styled(FOOTER, Style::default().fg(FAINT)))
            .alignment(Alignment::Center),
        area,
    );
}

fn render_help_popup(f: &mut Frame<'_>, area: Rect) {
    let popup_area = centered_rect(70, 80, area);
    f.render_widget(Clear, popup_area);

    let help_block = Block::default()
        .title("== Help & Keyboard Shortcuts ==")
        .title_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .style(Style::default().bg(BACKGROUND));

    f.render_widget(
        Paragraph::new(Text::from(build_help_lines()))
            .block(help_block)
            .wrap(Wrap { trim: false }),
        popup_area,
    );

    let hint = Paragraph::new(Span::styled(
        "Press ? or Esc to close",
        Style::default().fg(Color::Gray),
    ))
    .alignment(Alignment::Center);

    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(2),
        width: popup_area.width,
        height: 1,
    };
    f.render_widget(hint, hint_area);
}

fn key_line(keys: &'static str, action: &'static str) -> TextLine<'static> {
    TextLine::from(vec![
        Span::styled(
            format!("  {keys:<14}"),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(action),
    ])
}

fn build_help_lines() -> Vec<TextLine<'static>> {
    let mut lines = vec![
        TextLine::from(Span::styled(
            "Storage System Comparator",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        TextLine::from(""),
        TextLine::from(Span::styled(
            "Keyboard Shortcuts:",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        key_line("←/→ Tab", "Previous / next category"),
        key_line("1-4", "Jump to category"),
        key_line("d / r / v", "Detail view / radar view / toggle"),
        key_line("↑/↓ k/j", "Move system cursor"),
        key_line("Space Enter", "Show or hide system under cursor"),
        key_line("e", "Export radar chart as SVG"),
        key_line("? F1", "Toggle this help"),
        key_line("q Esc", "Quit"),
        TextLine::from(""),
        TextLine::from(Span::styled(
            "CLI Options:",
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];

    let help_text = crate::cli::CliArgs::help_text();
    for line in help_text.lines() {
        if line.starts_with("Usage") || line.starts_with("Options") || line.trim().is_empty() {
            continue;
        }
        lines.push(TextLine::from(line.to_string()));
    }

    lines
}
