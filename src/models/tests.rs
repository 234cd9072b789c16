#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use super::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ── Expense ───────────────────────────────────────────────────

#[test]
fn test_expense_new_defaults() {
    let expense = Expense::new(
        date(2024, 1, 1),
        "Food".into(),
        "12.50".into(),
        "lunch".into(),
    );
    assert!(expense.id.is_none());
    assert_eq!(expense.date, "2024-01-01");
    assert_eq!(expense.category, "Food");
    assert_eq!(expense.amount, "12.50");
    assert_eq!(expense.description, "lunch");
}

#[test]
fn test_expense_date_is_zero_padded() {
    let expense = Expense::new(date(2024, 3, 7), "Rent".into(), "1".into(), "x".into());
    assert_eq!(expense.date, "2024-03-07");
}

#[test]
fn test_amount_value_decimal() {
    let expense = Expense::new(date(2024, 1, 1), "Food".into(), "12.50".into(), "x".into());
    assert_eq!(expense.amount_value(), Some(dec!(12.50)));
}

#[test]
fn test_amount_value_tolerates_whitespace() {
    let expense = Expense::new(date(2024, 1, 1), "Food".into(), " 7 ".into(), "x".into());
    assert_eq!(expense.amount_value(), Some(dec!(7)));
}

#[test]
fn test_amount_value_non_numeric() {
    let expense = Expense::new(date(2024, 1, 1), "Food".into(), "about ten".into(), "x".into());
    assert_eq!(expense.amount_value(), None);
    // The text itself is kept as entered
    assert_eq!(expense.amount, "about ten");
}

// ── Categories ────────────────────────────────────────────────

#[test]
fn test_categories_order() {
    assert_eq!(
        CATEGORIES,
        &["Food", "Transportation", "Rent", "Shopping", "Entertainment", "Bills", "Other"]
    );
}

#[test]
fn test_category_index_case_insensitive() {
    assert_eq!(category_index("food"), Some(0));
    assert_eq!(category_index("BILLS"), Some(5));
    assert_eq!(category_index("Other"), Some(6));
}

#[test]
fn test_category_index_unknown() {
    assert_eq!(category_index("Groceries"), None);
    assert_eq!(category_index(""), None);
}
