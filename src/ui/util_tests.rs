#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use super::util::*;
use crate::models::Expense;

fn expense_with_amount(amount: &str) -> Expense {
    Expense::new(
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        "Food".into(),
        amount.into(),
        "x".into(),
    )
}

// ── truncate / tail ───────────────────────────────────────────

#[test]
fn test_truncate_fits() {
    assert_eq!(truncate("lunch", 10), "lunch");
    assert_eq!(truncate("lunch", 5), "lunch");
}

#[test]
fn test_truncate_cuts_with_ellipsis() {
    assert_eq!(truncate("weekly groceries", 8), "weekly …");
    assert_eq!(truncate("hello", 1), "…");
    assert_eq!(truncate("hello", 0), "");
}

#[test]
fn test_truncate_multibyte() {
    assert_eq!(truncate("café crème", 5), "café…");
}

#[test]
fn test_tail_fits() {
    assert_eq!(tail("12.50", 10), "12.50");
    assert_eq!(tail("", 3), "");
}

#[test]
fn test_tail_keeps_end() {
    assert_eq!(tail("dinner with friends", 8), "…friends");
    assert_eq!(tail("abc", 1), "…");
    assert_eq!(tail("abc", 0), "");
}

#[test]
fn test_tail_multibyte() {
    assert_eq!(tail("日本語テスト", 4), "…テスト");
}

// ── format_amount / display_amount ────────────────────────────

#[test]
fn test_format_amount_thousands() {
    assert_eq!(format_amount(dec!(1234.56)), "$1,234.56");
    assert_eq!(format_amount(dec!(1234567.89)), "$1,234,567.89");
}

#[test]
fn test_format_amount_pads_decimals() {
    assert_eq!(format_amount(dec!(12.5)), "$12.50");
    assert_eq!(format_amount(dec!(0)), "$0.00");
}

#[test]
fn test_format_amount_negative() {
    assert_eq!(format_amount(dec!(-42.50)), "-$42.50");
}

#[test]
fn test_display_amount_numeric() {
    assert_eq!(display_amount(&expense_with_amount("12.50")), "$12.50");
    assert_eq!(display_amount(&expense_with_amount("2500")), "$2,500.00");
}

#[test]
fn test_display_amount_keeps_extra_precision() {
    assert_eq!(display_amount(&expense_with_amount("0.004")), "0.004");
    assert_eq!(display_amount(&expense_with_amount("12.505")), "12.505");
    assert_eq!(display_amount(&expense_with_amount("1.999")), "1.999");
    assert_eq!(display_amount(&expense_with_amount("1.990")), "1.990");
}

#[test]
fn test_display_amount_free_text_verbatim() {
    assert_eq!(display_amount(&expense_with_amount("12,50")), "12,50");
    assert_eq!(display_amount(&expense_with_amount("ten bucks")), "ten bucks");
}

// ── scrolling ─────────────────────────────────────────────────

#[test]
fn test_scroll_down_follows_cursor() {
    let (mut index, mut scroll) = (0, 0);
    for _ in 0..5 {
        scroll_down(&mut index, &mut scroll, 10, 3);
    }
    assert_eq!(index, 5);
    assert_eq!(scroll, 3);
}

#[test]
fn test_scroll_down_stops_at_end() {
    let (mut index, mut scroll) = (2, 0);
    scroll_down(&mut index, &mut scroll, 3, 5);
    assert_eq!(index, 2);
    assert_eq!(scroll, 0);
}

#[test]
fn test_scroll_up_pulls_viewport() {
    let (mut index, mut scroll) = (4, 4);
    scroll_up(&mut index, &mut scroll);
    assert_eq!((index, scroll), (3, 3));

    let (mut index, mut scroll) = (0, 0);
    scroll_up(&mut index, &mut scroll);
    assert_eq!((index, scroll), (0, 0));
}

#[test]
fn test_scroll_to_bottom_and_top() {
    let (mut index, mut scroll) = (0, 0);
    scroll_to_bottom(&mut index, &mut scroll, 10, 4);
    assert_eq!((index, scroll), (9, 6));
    scroll_to_top(&mut index, &mut scroll);
    assert_eq!((index, scroll), (0, 0));
}

#[test]
fn test_scroll_to_bottom_empty_list() {
    let (mut index, mut scroll) = (0, 0);
    scroll_to_bottom(&mut index, &mut scroll, 0, 4);
    assert_eq!((index, scroll), (0, 0));
}
