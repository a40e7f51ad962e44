//! Page Window - windowed page-number ranges for paged list views.
//!
//! This library computes which page buttons and ellipsis markers a pager should
//! show, and carries the paging state, search filter, configuration and
//! terminal rendering that a paged list needs around it.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module, which provides:
//! - The page range calculator ([`compute_range`], [`compute_range_with`])
//! - Paging state ([`Paginator`])
//! - Case-insensitive search ([`filter_items`])
//! - Persisted pager settings ([`Config`])
//! - Error handling and result types

pub mod commands;
pub mod core;

pub use core::{
    compute_range,
    compute_range_with,
    filter_items,
    render_pager,
    render_pager_plain,
    strip_ansi_codes,

    Config,

    PageEntry,
    PageSlice,
    // Error handling
    PageWindowError,
    PageWindow,
    Paginator,
    Result,
    WindowOptions,
};
