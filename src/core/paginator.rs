//! Paged list state around the page range calculator.
//!
//! A list view keeps a current page and a page size; everything else (page
//! count, visible slice, previous/next affordances) is derived from the total
//! item count. [`Paginator`] holds that state and hands the current page to
//! [`compute_range_with`] when the pager needs drawing.
//!
//! # Public API
//! - [`Paginator`]: Current page, page size and item count
//! - [`PageSlice`]: Half-open range of item indices on the current page

use crate::core::{
    error::{PageWindowError, Result},
    page_window::{compute_range_with, PageWindow, WindowOptions},
};
use std::ops::Range;

/// Half-open range `[start, end)` of item indices shown on one page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSlice {
    pub start: usize,
    pub end: usize,
}

impl PageSlice {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn apply<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[self.range()]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginator {
    current_page: usize,
    items_per_page: usize,
    total_items: usize,
}

impl Paginator {
    /// Create a paginator positioned on page 1
    pub fn new(total_items: usize, items_per_page: usize) -> Result<Self> {
        if items_per_page == 0 {
            return Err(PageWindowError::ZeroItemsPerPage);
        }

        Ok(Self {
            current_page: 1,
            items_per_page,
            total_items,
        })
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.items_per_page)
    }

    /// Clamp a requested page into `[1, total_pages]`; an empty list still has page 1
    pub fn clamp_page(&self, page: usize) -> usize {
        page.clamp(1, self.total_pages().max(1))
    }

    /// Jump to a page, clamping it into range. Returns the page actually selected.
    pub fn set_page(&mut self, page: usize) -> usize {
        let clamped = self.clamp_page(page);
        if clamped != page {
            log::debug!(
                "Requested page {page} clamped to {clamped} ({} pages)",
                self.total_pages()
            );
        }
        self.current_page = clamped;
        clamped
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    pub fn previous(&mut self) -> usize {
        self.set_page(self.current_page.saturating_sub(1))
    }

    pub fn next(&mut self) -> usize {
        self.set_page(self.current_page + 1)
    }

    /// Back to page 1, e.g. after the search term changes
    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Update the item count (after filtering) and re-clamp the current page
    pub fn set_total_items(&mut self, total_items: usize) {
        self.total_items = total_items;
        self.set_page(self.current_page);
    }

    pub fn slice(&self) -> PageSlice {
        let start = ((self.current_page - 1) * self.items_per_page).min(self.total_items);
        let end = (self.current_page * self.items_per_page).min(self.total_items);
        PageSlice { start, end }
    }

    pub fn summary(&self) -> String {
        format!("Page {} of {}", self.current_page, self.total_pages())
    }

    pub fn window(&self, options: &WindowOptions) -> PageWindow {
        compute_range_with(self.current_page, self.total_pages(), options)
    }
}
