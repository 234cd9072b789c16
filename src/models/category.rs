/// Categories offered by the form selector, in display order.
///
/// This is a suggestion list only. Stored expenses may carry any category text.
pub const CATEGORIES: &[&str] = &[
    "Food",
    "Transportation",
    "Rent",
    "Shopping",
    "Entertainment",
    "Bills",
    "Other",
];

/// Position of `name` in `CATEGORIES` (case-insensitive).
pub fn category_index(name: &str) -> Option<usize> {
    let lower = name.to_lowercase();
    CATEGORIES.iter().position(|c| c.to_lowercase() == lower)
}
