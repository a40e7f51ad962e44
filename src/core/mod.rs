//! Core functionality for the page-window tool.
//!
//! This module provides the page range calculator and the paging state,
//! search, configuration, and rendering built around it.

pub mod config;
pub mod dirs;
pub mod error;
pub mod filter;
pub mod output;
pub mod page_window;
pub mod paginator;
pub mod render;

// === Error handling ===
pub use error::{PageWindowError, Result};

// === Page range calculator ===
// Pure windowing of page numbers and ellipsis markers
pub use page_window::{compute_range, compute_range_with, PageEntry, PageWindow, WindowOptions};

// === Paging state ===
// Current page, page size, slices and previous/next clamping
pub use paginator::{PageSlice, Paginator};

// === Search ===
pub use filter::filter_items;

// === Configuration ===
pub use config::Config;

// === Rendering ===
pub use render::{render_pager, render_pager_plain, strip_ansi_codes};

// === Output formatting ===
pub use output::{print_error, print_info, print_section_header, print_success};
