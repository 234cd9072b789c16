use crate::models::Expense;

use super::Database;

/// The persistence capability the UI works against.
///
/// Failures never cross this boundary as errors: `list` degrades to an empty
/// sequence and `add`/`delete` report `false`. Causes are logged.
pub(crate) trait ExpenseStore {
    /// All expenses, oldest id first.
    fn list(&self) -> Vec<Expense>;

    /// Store a new expense. Any `id` on the input is ignored.
    fn add(&self, expense: &Expense) -> bool;

    /// Remove the expense with `id`. `false` if it did not exist.
    fn delete(&self, id: i64) -> bool;
}

impl ExpenseStore for Database {
    fn list(&self) -> Vec<Expense> {
        match self.get_expenses() {
            Ok(expenses) => expenses,
            Err(e) => {
                tracing::error!("failed to fetch expenses: {e:#}");
                Vec::new()
            }
        }
    }

    fn add(&self, expense: &Expense) -> bool {
        match self.insert_expense(expense) {
            Ok(id) => {
                tracing::info!(id, date = %expense.date, category = %expense.category, "added expense");
                true
            }
            Err(e) => {
                tracing::error!("failed to add expense: {e:#}");
                false
            }
        }
    }

    fn delete(&self, id: i64) -> bool {
        match self.delete_expense(id) {
            Ok(true) => {
                tracing::info!(id, "deleted expense");
                true
            }
            Ok(false) => {
                tracing::debug!(id, "no expense to delete");
                false
            }
            Err(e) => {
                tracing::error!(id, "failed to delete expense: {e:#}");
                false
            }
        }
    }
}
