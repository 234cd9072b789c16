use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Storage format for `Expense::date`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expense {
    pub id: Option<i64>,
    /// Format: "YYYY-MM-DD"
    pub date: String,
    pub category: String,
    /// Kept exactly as entered; see `amount_value` for the numeric reading.
    pub amount: String,
    pub description: String,
}

impl Expense {
    pub fn new(date: NaiveDate, category: String, amount: String, description: String) -> Self {
        Self {
            id: None,
            date: date.format(DATE_FORMAT).to_string(),
            category,
            amount,
            description,
        }
    }

    /// The amount as a decimal, if the stored text is one.
    pub fn amount_value(&self) -> Option<Decimal> {
        Decimal::from_str(self.amount.trim()).ok()
    }
}
