use chrono::{Local, NaiveDate};

use crate::db::ExpenseStore;
use crate::models::{Expense, CATEGORIES};
use crate::ui::util::{scroll_down, scroll_to_bottom, scroll_to_top, scroll_up};

pub(crate) const INPUT_ERROR: &str = "Amount and Description cannot be empty!";
pub(crate) const ADD_FAILED: &str = "Failed to add expense";
pub(crate) const DELETE_FAILED: &str = "Failed to delete expense";
pub(crate) const NO_SELECTION: &str = "Please select an expense to delete.";
pub(crate) const CONFIRM_DELETE: &str = "Are you sure you want to delete this expense?";

/// Which widget receives keystrokes. Tab order follows declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Focus {
    Date,
    Category,
    Amount,
    Description,
    Table,
}

impl Focus {
    pub(crate) fn all() -> &'static [Focus] {
        &[
            Self::Date,
            Self::Category,
            Self::Amount,
            Self::Description,
            Self::Table,
        ]
    }

    pub(crate) fn next(self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|f| *f == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }

    pub(crate) fn prev(self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|f| *f == self).unwrap_or(0);
        if idx == 0 {
            all[all.len() - 1]
        } else {
            all[idx - 1]
        }
    }
}

impl std::fmt::Display for Focus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Date => write!(f, "Date"),
            Self::Category => write!(f, "Category"),
            Self::Amount => write!(f, "Amount"),
            Self::Description => write!(f, "Description"),
            Self::Table => write!(f, "Expenses"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Command,
    Confirm,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Command => write!(f, "COMMAND"),
            Self::Confirm => write!(f, "CONFIRM"),
        }
    }
}

/// Pending action that requires user confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PendingAction {
    DeleteExpense { id: i64, description: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StatusKind {
    Info,
    Warning,
    Error,
}

/// Contents of the entry form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ExpenseForm {
    pub(crate) date: NaiveDate,
    pub(crate) category_index: usize,
    pub(crate) amount: String,
    pub(crate) description: String,
}

impl ExpenseForm {
    pub(crate) fn new(today: NaiveDate) -> Self {
        Self {
            date: today,
            category_index: 0,
            amount: String::new(),
            description: String::new(),
        }
    }

    pub(crate) fn category(&self) -> &'static str {
        CATEGORIES.get(self.category_index).copied().unwrap_or("Other")
    }

    pub(crate) fn cycle_category(&mut self, forward: bool) {
        let len = CATEGORIES.len();
        self.category_index = if forward {
            (self.category_index + 1) % len
        } else if self.category_index == 0 {
            len - 1
        } else {
            self.category_index - 1
        };
    }

    /// Move the date one day. Stays put at the ends of the calendar.
    pub(crate) fn step_date(&mut self, forward: bool) {
        let stepped = if forward {
            self.date.succ_opt()
        } else {
            self.date.pred_opt()
        };
        if let Some(date) = stepped {
            self.date = date;
        }
    }

    /// Amount and description must be non-empty. No other checks: the
    /// amount is kept as typed.
    pub(crate) fn validate(&self) -> Option<Expense> {
        if self.amount.is_empty() || self.description.is_empty() {
            return None;
        }
        Some(Expense::new(
            self.date,
            self.category().to_string(),
            self.amount.clone(),
            self.description.clone(),
        ))
    }
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) input_mode: InputMode,
    pub(crate) focus: Focus,
    pub(crate) form: ExpenseForm,
    pub(crate) command_input: String,
    pub(crate) status_message: String,
    pub(crate) status_kind: StatusKind,
    pub(crate) show_help: bool,

    // Table projection of the store, rebuilt after every mutation
    pub(crate) expenses: Vec<Expense>,
    pub(crate) selected: Option<usize>,
    pub(crate) expense_scroll: usize,

    // Confirmation
    pub(crate) pending_action: Option<PendingAction>,
    pub(crate) confirm_message: String,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new() -> Self {
        Self {
            running: true,
            input_mode: InputMode::Normal,
            focus: Focus::Amount,
            form: ExpenseForm::new(today()),
            command_input: String::new(),
            status_message: String::new(),
            status_kind: StatusKind::Info,
            show_help: false,

            expenses: Vec::new(),
            selected: None,
            expense_scroll: 0,

            pending_action: None,
            confirm_message: String::new(),

            visible_rows: 20,
        }
    }

    /// Drop the displayed rows and rebuild them from the store.
    pub(crate) fn refresh_expenses(&mut self, store: &dyn ExpenseStore) {
        self.expenses = store.list();
        self.selected = match self.selected {
            _ if self.expenses.is_empty() => None,
            Some(i) => Some(i.min(self.expenses.len() - 1)),
            None => None,
        };
        let page = self.visible_rows.max(1);
        if let Some(i) = self.selected {
            if i < self.expense_scroll || i >= self.expense_scroll + page {
                self.expense_scroll = i.saturating_sub(page - 1);
            }
        } else {
            self.expense_scroll = 0;
        }
    }

    /// Validate the form and store it. The table is reloaded and the form
    /// cleared only when the store accepted the expense.
    pub(crate) fn submit_form(&mut self, store: &dyn ExpenseStore) -> bool {
        let Some(expense) = self.form.validate() else {
            self.set_warning(INPUT_ERROR);
            return false;
        };

        if !store.add(&expense) {
            self.set_error(ADD_FAILED);
            return false;
        }

        self.refresh_expenses(store);
        self.form = ExpenseForm::new(today());
        self.set_status(format!(
            "Added: {} {} ({})",
            expense.date, expense.description, expense.category
        ));
        true
    }

    pub(crate) fn selected_expense(&self) -> Option<&Expense> {
        self.selected.and_then(|i| self.expenses.get(i))
    }

    /// Ask for confirmation before deleting the selected row.
    pub(crate) fn request_delete(&mut self) {
        let Some((id, description)) = self
            .selected_expense()
            .and_then(|e| e.id.map(|id| (id, e.description.clone())))
        else {
            self.set_warning(NO_SELECTION);
            return;
        };

        self.pending_action = Some(PendingAction::DeleteExpense { id, description });
        self.confirm_message = CONFIRM_DELETE.to_string();
        self.input_mode = InputMode::Confirm;
    }

    pub(crate) fn confirm_pending(&mut self, store: &dyn ExpenseStore) {
        if let Some(action) = self.pending_action.take() {
            match action {
                PendingAction::DeleteExpense { id, description } => {
                    if store.delete(id) {
                        self.refresh_expenses(store);
                        self.set_status(format!("Deleted #{id}: {description}"));
                    } else if store.list().iter().any(|e| e.id == Some(id)) {
                        // Row is still stored, so the store refused the delete
                        self.set_error(DELETE_FAILED);
                    } else {
                        // Already gone: nothing to report, nothing to reload
                        self.clear_status();
                    }
                }
            }
        }
        self.input_mode = InputMode::Normal;
        self.confirm_message.clear();
    }

    pub(crate) fn cancel_pending(&mut self) {
        self.pending_action = None;
        self.input_mode = InputMode::Normal;
        self.confirm_message.clear();
        self.set_status("Cancelled");
    }

    pub(crate) fn reset_form(&mut self) {
        self.form = ExpenseForm::new(today());
    }

    pub(crate) fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        if focus == Focus::Table && self.selected.is_none() && !self.expenses.is_empty() {
            self.selected = Some(0);
            self.expense_scroll = 0;
        }
    }

    // ── Table cursor ──────────────────────────────────────────

    pub(crate) fn move_down(&mut self) {
        let Some(mut index) = self.selected else {
            self.set_focus(Focus::Table);
            return;
        };
        let page = self.visible_rows.max(1);
        scroll_down(&mut index, &mut self.expense_scroll, self.expenses.len(), page);
        self.selected = Some(index);
    }

    pub(crate) fn move_up(&mut self) {
        if let Some(mut index) = self.selected {
            scroll_up(&mut index, &mut self.expense_scroll);
            self.selected = Some(index);
        }
    }

    pub(crate) fn move_to_top(&mut self) {
        if !self.expenses.is_empty() {
            let mut index = 0;
            scroll_to_top(&mut index, &mut self.expense_scroll);
            self.selected = Some(index);
        }
    }

    pub(crate) fn move_to_bottom(&mut self) {
        if !self.expenses.is_empty() {
            let mut index = 0;
            let page = self.visible_rows.max(1);
            scroll_to_bottom(&mut index, &mut self.expense_scroll, self.expenses.len(), page);
            self.selected = Some(index);
        }
    }

    // ── Status line ───────────────────────────────────────────

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
        self.status_kind = StatusKind::Info;
    }

    pub(crate) fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
        self.status_kind = StatusKind::Warning;
    }

    pub(crate) fn set_error(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
        self.status_kind = StatusKind::Error;
    }

    pub(crate) fn clear_status(&mut self) {
        self.status_message.clear();
        self.status_kind = StatusKind::Info;
    }
}

pub(crate) fn today() -> NaiveDate {
    Local::now().date_naive()
}
