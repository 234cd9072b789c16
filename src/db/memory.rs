use std::cell::{Cell, RefCell};

use crate::models::Expense;

use super::ExpenseStore;

/// In-memory `ExpenseStore` for UI tests. Can be told to refuse writes.
#[derive(Default)]
pub(crate) struct MemoryStore {
    rows: RefCell<Vec<Expense>>,
    last_id: Cell<i64>,
    pub(crate) fail_writes: bool,
    pub(crate) add_calls: Cell<usize>,
    pub(crate) delete_calls: Cell<usize>,
}

impl MemoryStore {
    pub(crate) fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    pub(crate) fn with(expenses: &[Expense]) -> Self {
        let store = Self::default();
        for e in expenses {
            store.add(e);
        }
        store.add_calls.set(0);
        store
    }
}

impl ExpenseStore for MemoryStore {
    fn list(&self) -> Vec<Expense> {
        self.rows.borrow().clone()
    }

    fn add(&self, expense: &Expense) -> bool {
        self.add_calls.set(self.add_calls.get() + 1);
        if self.fail_writes {
            return false;
        }
        let id = self.last_id.get() + 1;
        self.last_id.set(id);
        self.rows.borrow_mut().push(Expense {
            id: Some(id),
            ..expense.clone()
        });
        true
    }

    fn delete(&self, id: i64) -> bool {
        self.delete_calls.set(self.delete_calls.get() + 1);
        if self.fail_writes {
            return false;
        }
        let mut rows = self.rows.borrow_mut();
        let before = rows.len();
        rows.retain(|e| e.id != Some(id));
        rows.len() != before
    }
}
