use std::collections::HashMap;
use std::sync::LazyLock;

use chrono::NaiveDate;

use super::app::{App, Focus};
use crate::db::ExpenseStore;
use crate::models::{category_index, CATEGORIES, DATE_FORMAT};

pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &mut App, &dyn ExpenseStore),
}

macro_rules! register_command {
    ($name:expr, $desc:expr, $func:expr, $registry:expr) => {{
        $registry.insert(
            $name,
            Command {
                description: $desc,
                run: $func,
            },
        );
    }};
}

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!("q", "Quit", cmd_quit, r);
    register_command!("quit", "Quit", cmd_quit, r);
    register_command!(
        "add",
        "Add expense from the form (e.g. :add 12.50 lunch)",
        cmd_add,
        r
    );
    register_command!(
        "a",
        "Add expense from the form (e.g. :add 12.50 lunch)",
        cmd_add,
        r
    );
    register_command!("delete", "Delete selected expense", cmd_delete, r);
    register_command!("del", "Delete selected expense", cmd_delete, r);
    register_command!("clear", "Clear the form", cmd_clear, r);
    register_command!("today", "Set the form date to today", cmd_today, r);
    register_command!(
        "date",
        "Set the form date (e.g. :date 2024-01-31)",
        cmd_date,
        r
    );
    register_command!(
        "category",
        "Pick a category (e.g. :category Bills)",
        cmd_category,
        r
    );
    register_command!(
        "cat",
        "Pick a category (e.g. :category Bills)",
        cmd_category,
        r
    );
    register_command!("refresh", "Reload expenses", cmd_refresh, r);
    register_command!("r", "Reload expenses", cmd_refresh, r);
    register_command!("help", "Show available commands", cmd_help, r);
    register_command!("h", "Show available commands", cmd_help, r);

    r
});

pub(crate) fn handle_command(input: &str, app: &mut App, store: &dyn ExpenseStore) {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return;
    }
    let mut parts = trimmed.splitn(2, ' ');
    let cmd_name = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();

    if let Some(cmd) = COMMANDS.get(cmd_name) {
        (cmd.run)(args, app, store);
    } else {
        let suggestion = find_closest(cmd_name);
        app.set_warning(format!(
            "Unknown command: :{cmd_name}. Did you mean :{suggestion}?"
        ));
    }
}

fn find_closest(input: &str) -> String {
    COMMANDS
        .keys()
        .filter(|k| k.len() > 1) // skip single-letter aliases for suggestions
        .min_by_key(|k| (levenshtein(input, k), **k))
        .unwrap_or(&"help")
        .to_string()
}

fn levenshtein(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

fn cmd_quit(_args: &str, app: &mut App, _store: &dyn ExpenseStore) {
    app.running = false;
}

/// `:add` submits the form as is; `:add <amount> <description>` fills those
/// two fields first.
fn cmd_add(args: &str, app: &mut App, store: &dyn ExpenseStore) {
    if !args.is_empty() {
        let mut parts = args.splitn(2, ' ');
        app.form.amount = parts.next().unwrap_or("").to_string();
        app.form.description = parts.next().unwrap_or("").trim().to_string();
    }
    app.submit_form(store);
}

fn cmd_delete(_args: &str, app: &mut App, _store: &dyn ExpenseStore) {
    app.request_delete();
}

fn cmd_clear(_args: &str, app: &mut App, _store: &dyn ExpenseStore) {
    app.reset_form();
    app.set_focus(Focus::Amount);
    app.set_status("Form cleared");
}

fn cmd_today(_args: &str, app: &mut App, _store: &dyn ExpenseStore) {
    app.form.date = super::app::today();
}

fn cmd_date(args: &str, app: &mut App, _store: &dyn ExpenseStore) {
    match NaiveDate::parse_from_str(args, DATE_FORMAT) {
        Ok(date) => {
            app.form.date = date;
            app.set_status(format!("Date: {}", date.format(DATE_FORMAT)));
        }
        Err(_) => app.set_warning(format!("Invalid date: '{args}'. Use YYYY-MM-DD")),
    }
}

fn cmd_category(args: &str, app: &mut App, _store: &dyn ExpenseStore) {
    match category_index(args) {
        Some(idx) => {
            app.form.category_index = idx;
            app.set_status(format!("Category: {}", CATEGORIES[idx]));
        }
        None => app.set_warning(format!(
            "Unknown category '{args}'. Choose one of: {}",
            CATEGORIES.join(", ")
        )),
    }
}

fn cmd_refresh(_args: &str, app: &mut App, store: &dyn ExpenseStore) {
    app.refresh_expenses(store);
    app.set_status(format!("{} expenses", app.expenses.len()));
}

fn cmd_help(_args: &str, app: &mut App, _store: &dyn ExpenseStore) {
    app.show_help = true;
}
