mod category;
mod expense;

pub use category::{category_index, CATEGORIES};
pub use expense::{Expense, DATE_FORMAT};

#[cfg(test)]
mod tests;
