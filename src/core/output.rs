//! Unified output formatting utilities for consistent CLI presentation.
//!
//! Every page-window command prints through these helpers so errors, notes and
//! confirmations share one color scheme and spacing.
//!
//! # Design Principles
//! - **Consistent color scheme**: Red for errors, green for confirmations
//! - **Standardized spacing**: Newline before each message block

use colored::*;

/// Formats and prints an error message to stderr
///
/// # Format
/// ```text
///
/// ✕ Error: <message>
///
/// ```
pub fn print_error(message: &str) {
    eprintln!("\n{} {}\n", "✕ Error:".red(), message.white());
}

/// Formats and prints a success message
///
/// # Format
/// ```text
///
/// ✓ <message>
/// ```
pub fn print_success(message: &str) {
    println!("\n{} {}", "✓".green(), message.white());
}

/// Formats and prints an informational message
pub fn print_info(message: &str) {
    println!("\n{}\n", message.white());
}

/// Formats and prints a section header
///
/// # Format
/// ```text
///
/// <header>:
///
/// ```
pub fn print_section_header(header: &str) {
    println!("\n{}:\n", header.white());
}
