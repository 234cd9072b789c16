use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::ui::app::{App, Focus};
use crate::ui::theme;
use crate::ui::util::{display_amount, truncate};

pub(crate) const COLUMNS: [&str; 5] = ["Id", "Date", "Category", "Amount", "Description"];

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus == Focus::Table;
    let title_style = Style::default()
        .fg(if focused { theme::ACCENT } else { theme::TEXT_DIM })
        .add_modifier(Modifier::BOLD);

    if app.expenses.is_empty() {
        let msg = vec![
            Line::from(""),
            Line::from(Span::styled("No expenses recorded yet", theme::dim_style())),
            Line::from(""),
            Line::from(Span::styled(
                "Fill in the amount and description above, then press Enter",
                theme::dim_style(),
            )),
        ];
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme::border_style(focused))
            .title(Span::styled(" Expenses (0) ", title_style));
        f.render_widget(Paragraph::new(msg).centered().block(block), area);
        return;
    }

    let header_cells = COLUMNS
        .iter()
        .map(|h| Cell::from(*h).style(theme::header_style()));
    let header = Row::new(header_cells).height(1);

    let description_width = area.width.saturating_sub(2 + 8 + 12 + 16 + 16) as usize;

    let rows: Vec<Row> = app
        .expenses
        .iter()
        .enumerate()
        .skip(app.expense_scroll)
        .take(area.height.saturating_sub(3) as usize)
        .map(|(i, expense)| {
            let is_cursor = app.selected == Some(i);
            let style = if is_cursor && focused {
                theme::selected_style()
            } else if is_cursor {
                Style::default().fg(theme::YELLOW)
            } else if i % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };

            let id = expense.id.map(|id| id.to_string()).unwrap_or_default();

            Row::new(vec![
                Cell::from(id),
                Cell::from(expense.date.clone()),
                Cell::from(expense.category.clone()),
                Cell::from(Span::styled(display_amount(expense), theme::amount_style())),
                Cell::from(truncate(&expense.description, description_width.max(10))),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(8),
        Constraint::Length(12),
        Constraint::Length(16),
        Constraint::Length(16),
        Constraint::Min(10),
    ];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme::border_style(focused))
            .title(Span::styled(
                format!(" Expenses ({}) ", app.expenses.len()),
                title_style,
            )),
    );

    f.render_widget(table, area);
}
