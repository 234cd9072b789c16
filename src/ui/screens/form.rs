use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::DATE_FORMAT;
use crate::ui::app::{App, Focus, InputMode};
use crate::ui::theme;
use crate::ui::util::tail;

/// Two rows of bordered fields plus the button row.
pub(crate) const HEIGHT: u16 = 7;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(area);

    let top = split_pair(rows[0]);
    let bottom = split_pair(rows[1]);

    let date = app.form.date.format(DATE_FORMAT).to_string();
    render_selector(f, top[0], "Date", &date, app.focus == Focus::Date);
    render_selector(
        f,
        top[1],
        "Category",
        app.form.category(),
        app.focus == Focus::Category,
    );
    render_text_field(f, bottom[0], "Amount", &app.form.amount, app, Focus::Amount);
    render_text_field(
        f,
        bottom[1],
        "Description",
        &app.form.description,
        app,
        Focus::Description,
    );

    let buttons = Line::from(vec![
        Span::raw(" "),
        Span::styled(" Enter: Add Expense ", theme::button_style(theme::GREEN)),
        Span::raw("  "),
        Span::styled(" D: Delete Expense ", theme::button_style(theme::RED)),
    ]);
    f.render_widget(Paragraph::new(buttons), rows[2]);
}

fn split_pair(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area)
}

fn field_block(label: &str, focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border_style(focused))
        .title(Span::styled(
            format!(" {label} "),
            if focused {
                Style::default().fg(theme::ACCENT)
            } else {
                theme::dim_style()
            },
        ))
}

/// Date and category: values changed with ←/→, shown between arrows when
/// focused.
fn render_selector(f: &mut Frame, area: Rect, label: &str, value: &str, focused: bool) {
    let line = if focused {
        Line::from(vec![
            Span::styled("◀ ", Style::default().fg(theme::ACCENT)),
            Span::styled(value.to_string(), theme::normal_style()),
            Span::styled(" ▶", Style::default().fg(theme::ACCENT)),
        ])
    } else {
        Line::from(Span::styled(value.to_string(), theme::normal_style()))
    };
    f.render_widget(
        Paragraph::new(line).block(field_block(label, focused)),
        area,
    );
}

fn render_text_field(f: &mut Frame, area: Rect, label: &str, value: &str, app: &App, field: Focus) {
    let focused = app.focus == field;
    let inner_width = area.width.saturating_sub(2) as usize;
    // Leave a column for the cursor
    let shown = tail(value, inner_width.saturating_sub(1));

    f.render_widget(
        Paragraph::new(Span::styled(shown.clone(), theme::normal_style()))
            .block(field_block(label, focused)),
        area,
    );

    if focused && app.input_mode == InputMode::Normal && !app.show_help {
        let offset = shown.chars().count() as u16;
        f.set_cursor_position((area.x + 1 + offset, area.y + 1));
    }
}
