use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::{
    cursor, execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use crate::db::ExpenseStore;
use crate::ui::app::{today, App, Focus, InputMode};
use crate::ui::commands;

type Term = Terminal<CrosstermBackend<io::Stdout>>;

pub(crate) fn as_tui(store: &dyn ExpenseStore) -> Result<()> {
    let mut app = App::new();
    app.refresh_expenses(store);
    tracing::info!(count = app.expenses.len(), "loaded expenses");

    enable_raw_mode()?;
    with_restore(
        enter_terminal,
        |mut terminal| run_app(&mut terminal, &mut app, store),
        leave_terminal,
    )
}

/// Runs `body` on the result of `setup`, then `restore` no matter which of
/// the two failed. The first error wins.
fn with_restore<T>(
    setup: impl FnOnce() -> Result<T>,
    body: impl FnOnce(T) -> Result<()>,
    restore: impl FnOnce() -> Result<()>,
) -> Result<()> {
    let result = setup().and_then(body);
    let restored = restore();
    if let Err(e) = &restored {
        tracing::error!("failed to restore terminal: {e:#}");
    }
    result.and(restored)
}

fn enter_terminal() -> Result<Term> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn leave_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, cursor::Show)?;
    Ok(())
}

fn run_app(terminal: &mut Term, app: &mut App, store: &dyn ExpenseStore) -> Result<()> {
    while app.running {
        terminal.draw(|f| {
            // Table rows left after title, form, status, command bars and table chrome
            let content_height = f
                .area()
                .height
                .saturating_sub(3 + crate::ui::screens::form::HEIGHT + 3)
                as usize;
            app.visible_rows = content_height.max(1);
            crate::ui::render::render(f, app);
        })?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                handle_key(key, app, store);
            }
        }
    }
    Ok(())
}

pub(crate) fn handle_key(key: KeyEvent, app: &mut App, store: &dyn ExpenseStore) {
    if is_quit(key) {
        app.running = false;
        return;
    }
    if app.show_help {
        app.show_help = false;
        return;
    }
    match app.input_mode {
        InputMode::Normal => handle_normal_input(key, app, store),
        InputMode::Command => handle_command_input(key, app, store),
        InputMode::Confirm => handle_confirm_input(key, app, store),
    }
}

/// Ctrl-Q and Ctrl-C quit from every mode.
fn is_quit(key: KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('q') | KeyCode::Char('c'))
}

// ── Input handlers ───────────────────────────────────────────

fn handle_normal_input(key: KeyEvent, app: &mut App, store: &dyn ExpenseStore) {
    match key.code {
        KeyCode::Tab => app.set_focus(app.focus.next()),
        KeyCode::BackTab => app.set_focus(app.focus.prev()),
        KeyCode::Esc => app.clear_status(),
        _ => match app.focus {
            Focus::Amount | Focus::Description => handle_text_input(key, app, store),
            Focus::Date | Focus::Category => handle_selector_input(key, app, store),
            Focus::Table => handle_table_input(key, app),
        },
    }
}

/// Keys that work wherever the focused widget does not take text.
fn handle_global_key(key: KeyEvent, app: &mut App) -> bool {
    match key.code {
        KeyCode::Char(':') => {
            app.input_mode = InputMode::Command;
            app.command_input.clear();
            true
        }
        KeyCode::Char('?') => {
            app.show_help = true;
            true
        }
        _ => false,
    }
}

fn handle_text_input(key: KeyEvent, app: &mut App, store: &dyn ExpenseStore) {
    if key.code == KeyCode::Enter {
        submit(app, store);
        return;
    }
    let field = match app.focus {
        Focus::Amount => &mut app.form.amount,
        _ => &mut app.form.description,
    };
    match key.code {
        KeyCode::Backspace => {
            field.pop();
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            field.push(c);
        }
        _ => {}
    }
}

fn handle_selector_input(key: KeyEvent, app: &mut App, store: &dyn ExpenseStore) {
    if handle_global_key(key, app) {
        return;
    }
    let forward = match key.code {
        KeyCode::Enter => {
            submit(app, store);
            return;
        }
        KeyCode::Char('t') if app.focus == Focus::Date => {
            app.form.date = today();
            return;
        }
        KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Char('l') => true,
        KeyCode::Left | KeyCode::Char('-') | KeyCode::Char('h') => false,
        _ => return,
    };
    if app.focus == Focus::Date {
        app.form.step_date(forward);
    } else {
        app.form.cycle_category(forward);
    }
}

fn handle_table_input(key: KeyEvent, app: &mut App) {
    if handle_global_key(key, app) {
        return;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('g') | KeyCode::Home => app.move_to_top(),
        KeyCode::Char('G') | KeyCode::End => app.move_to_bottom(),
        KeyCode::Char('d') if ctrl => {
            for _ in 0..app.visible_rows / 2 {
                app.move_down();
            }
        }
        KeyCode::Char('u') if ctrl => {
            for _ in 0..app.visible_rows / 2 {
                app.move_up();
            }
        }
        KeyCode::Char('D') | KeyCode::Delete => app.request_delete(),
        _ => {}
    }
}

fn handle_command_input(key: KeyEvent, app: &mut App, store: &dyn ExpenseStore) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Enter => {
            let input = app.command_input.clone();
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
            commands::handle_command(&input, app, store);
        }
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
        }
        KeyCode::Backspace => {
            app.command_input.pop();
            if app.command_input.is_empty() {
                app.input_mode = InputMode::Normal;
            }
        }
        KeyCode::Char('u') if ctrl => {
            app.command_input.clear();
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Char('w') if ctrl => {
            let trimmed = app.command_input.trim_end();
            match trimmed.rfind(' ') {
                Some(pos) => app.command_input.truncate(pos + 1),
                None => {
                    app.command_input.clear();
                    app.input_mode = InputMode::Normal;
                }
            }
        }
        KeyCode::Char(c) if !ctrl => {
            app.command_input.push(c);
        }
        _ => {}
    }
}

fn handle_confirm_input(key: KeyEvent, app: &mut App, store: &dyn ExpenseStore) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => app.confirm_pending(store),
        // Any other key = cancel
        _ => app.cancel_pending(),
    }
}

fn submit(app: &mut App, store: &dyn ExpenseStore) {
    if app.submit_form(store) {
        app.set_focus(Focus::Amount);
    }
}

#[cfg(test)]
#[path = "tui_tests.rs"]
mod tests;
