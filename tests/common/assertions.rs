//! Common assertion helpers for test output validation
//!
//! Provides predicates for page-window command output and error messages.

#![allow(dead_code)]

use predicates::prelude::*;

/// Creates a predicate that checks for the error prefix and message
pub fn has_error(message: &str) -> impl Predicate<str> {
    predicates::str::contains("Error:").and(predicates::str::contains(message.to_string()))
}

/// Creates a predicate that checks for the pager affordances
pub fn has_pager() -> impl Predicate<str> {
    predicates::str::contains("‹ Prev").and(predicates::str::contains("Next ›"))
}

/// Creates a predicate that checks the current page is highlighted
pub fn has_current_page(page: usize) -> impl Predicate<str> {
    predicates::str::contains(format!("[{page}]"))
}

/// Creates a predicate that checks for the page summary line
pub fn has_summary(page: usize, total: usize) -> impl Predicate<str> {
    predicates::str::contains(format!("Page {page} of {total}"))
}

/// Creates a predicate that checks for a numbered list row
pub fn has_item_row(index: usize, item: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("[{index}] {item}"))
}
