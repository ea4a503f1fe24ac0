use crate::app::App;
use crate::ui::theme::{accent_color, blend, system_color, FAINT, MUTED, TEXT};
use crate::ui::widgets::score_bar::score_bar_line;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;
use storage_compare::aggregates::top_scorer;
use storage_compare::{Category, FieldKey, System};

const LABEL_WIDTH: u16 = 16;
const CARD_HEIGHT: u16 = 6;
const ROW_HEIGHT: u16 = 3;

pub fn render_detail(app: &App, f: &mut Frame<'_>, area: Rect) {
    let systems = app.selected_systems();
    if systems.is_empty() || area.height < 2 {
        return;
    }

    let category = app.active_category();
    let fields = category.fields();

    let mut constraints = vec![Constraint::Length(CARD_HEIGHT)];
    constraints.extend(fields.iter().map(|_| Constraint::Length(ROW_HEIGHT)));
    constraints.push(Constraint::Length(ROW_HEIGHT)); // Quick Verdict
    constraints.push(Constraint::Min(0));

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let top = top_scorer(&app.dataset, app.selection.selected(), category)
        .map(|system| system.name.as_str());
    render_score_cards(app, f, rows[0], &systems, top);

    for (row, field) in rows[1..].iter().zip(fields) {
        render_field_row(f, *row, field.label(), &systems, |system| {
            field_cell(system, category, *field)
        });
    }

    render_field_row(f, rows[fields.len() + 1], "Quick Verdict", &systems, |system| {
        Span::styled(
            system.verdict(category).to_string(),
            Style::default().fg(system_color(system)),
        )
    });
}

fn columns(area: Rect, count: usize) -> Vec<Rect> {
    #[allow(clippy::cast_possible_truncation)]
    let count = count.max(1) as u32;
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints((0..count).map(|_| Constraint::Ratio(1, count)))
        .split(area)
        .to_vec()
}

fn render_score_cards(
    app: &App,
    f: &mut Frame<'_>,
    area: Rect,
    systems: &[&System],
    top: Option<&str>,
) {
    let category = app.active_category();

    for (column, system) in columns(area, systems.len()).into_iter().zip(systems) {
        let color = system_color(system);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(blend(color, 0.5)));
        let inner = block.inner(column);
        f.render_widget(block, column);

        let bar_width = inner.width.saturating_sub(5);
        let lines = card_lines(
            system,
            category,
            top == Some(system.name.as_str()),
            app.bar_progress,
            bar_width,
        );
        f.render_widget(Paragraph::new(Text::from(lines)), inner);
    }
}

/// Logo, name and badge, then tagline, category and animated score bar
pub fn card_lines(
    system: &System,
    category: Category,
    is_top: bool,
    progress: f64,
    bar_width: u16,
) -> Vec<TextLine<'static>> {
    let color = system_color(system);
    let score = system.score(category);

    let mut title = vec![
        Span::styled(
            format!(" {} ", system.logo),
            Style::default()
                .fg(Color::White)
                .bg(accent_color(system))
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            system.name.clone(),
            Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
        ),
    ];
    if is_top {
        title.push(Span::raw(" "));
        title.push(Span::styled(
            " TOP ",
            Style::default()
                .fg(Color::Black)
                .bg(color)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let mut bar = score_bar_line(score, progress, bar_width, color);
    bar.spans.push(Span::styled(
        format!(" {score:>3}"),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ));

    vec![
        TextLine::from(title),
        TextLine::from(Span::styled(system.tagline.clone(), Style::default().fg(MUTED))),
        TextLine::from(Span::styled(category.label(), Style::default().fg(FAINT))),
        bar,
    ]
}

/// Styled value of `field` for one system
pub fn field_cell(system: &System, category: Category, field: FieldKey) -> Span<'static> {
    let value = system.field_value(category, field).unwrap_or_default();
    let style = match field {
        FieldKey::EntryCost => Style::default()
            .fg(system_color(system))
            .add_modifier(Modifier::BOLD),
        FieldKey::Notes => Style::default().fg(MUTED),
        _ => Style::default().fg(TEXT),
    };
    Span::styled(value, style)
}

fn render_field_row<F>(f: &mut Frame<'_>, area: Rect, label: &str, systems: &[&System], cell: F)
where
    F: Fn(&System) -> Span<'static>,
{
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(FAINT));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let split = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(LABEL_WIDTH), Constraint::Min(0)])
        .split(inner);

    f.render_widget(
        Paragraph::new(Span::styled(
            label.to_uppercase(),
            Style::default().fg(MUTED).add_modifier(Modifier::BOLD),
        )),
        split[0],
    );

    for (column, system) in columns(split[1], systems.len()).into_iter().zip(systems) {
        f.render_widget(
            Paragraph::new(cell(*system)).wrap(Wrap { trim: true }),
            column.inner(ratatui::layout::Margin::new(1, 0)),
        );
    }
}
