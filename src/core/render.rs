//! Terminal rendering for pagers and paged lists.
//!
//! This module turns a [`PageWindow`] into the single pager line a list view
//! shows under its rows, and formats the rows and summary around it.
//!
//! # Public API
//! - [`render_pager`]: Pager line with previous/next affordances and colors
//! - [`render_pager_plain`]: Same line without ANSI codes
//! - [`render_item_line`]: One numbered row of a paged list
//! - [`render_summary`]: "Page X of Y" line with result counts
//! - [`strip_ansi_codes`]: Utility for removing color codes
//!
//! # Layout
//! ```text
//! ‹ Prev  1 ... 4 [5] 6 ... 10  Next ›
//! ```
//! The current page is bracketed. A previous/next label is dimmed when it
//! would not move the page.

use crate::core::page_window::{PageEntry, PageWindow, ELLIPSIS};
use colored::*;
use std::fmt::Write;

pub const PREVIOUS_LABEL: &str = "‹ Prev";
pub const NEXT_LABEL: &str = "Next ›";

/// Render the pager line for `window`, highlighting `current_page`.
///
/// Returns an empty string when the window is empty (a single page needs no pager).
pub fn render_pager(window: &PageWindow, current_page: usize, total_pages: usize) -> String {
    if window.is_empty() {
        return String::new();
    }

    // Each entry is at most a few digits plus brackets and color codes
    let mut result = String::with_capacity(window.len() * 16 + 64);

    let previous = if current_page > 1 {
        PREVIOUS_LABEL.white()
    } else {
        PREVIOUS_LABEL.bright_black()
    };
    let _ = write!(result, "{previous} ");

    for entry in window {
        result.push(' ');
        match entry {
            PageEntry::Page(n) if *n == current_page => {
                let _ = write!(result, "{}", format!("[{n}]").yellow().bold());
            }
            PageEntry::Page(n) => {
                let _ = write!(result, "{}", n.to_string().white());
            }
            PageEntry::Ellipsis => {
                let _ = write!(result, "{}", ELLIPSIS.bright_black());
            }
        }
    }

    let next = if current_page < total_pages {
        NEXT_LABEL.white()
    } else {
        NEXT_LABEL.bright_black()
    };
    let _ = write!(result, "  {next}");

    result
}

/// Render the pager line without colors
pub fn render_pager_plain(window: &PageWindow, current_page: usize, total_pages: usize) -> String {
    strip_ansi_codes(&render_pager(window, current_page, total_pages))
}

/// One numbered list row; `index` is the item's 1-based position in the full list
pub fn render_item_line(index: usize, item: &str) -> String {
    format!(
        "   {}{}{} {}",
        "[".bright_black(),
        index.to_string().white(),
        "]".bright_black(),
        item
    )
}

pub fn render_summary(summary: &str, shown: usize, total_results: usize) -> String {
    format!(
        "{} {}",
        summary.white(),
        format!("(showing {shown} of {total_results} results)").bright_black()
    )
}

/// Strip ANSI color codes for testing
pub fn strip_ansi_codes(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' && chars.peek() == Some(&'[') {
            chars.next(); // consume '['
            for ch in chars.by_ref() {
                if ch.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            result.push(ch);
        }
    }

    result
}
