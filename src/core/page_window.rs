//! Windowed page-number ranges for paged list views.
//!
//! Given the current page and the total page count, [`compute_range`] decides
//! which page buttons and ellipsis markers a pager should show. The first and
//! last pages are always visible, plus a small side window around the current
//! page.
//!
//! # Public API
//! - [`PageEntry`]: A single pager slot, either a page number or an ellipsis
//! - [`PageWindow`]: Ordered sequence of entries produced by the calculator
//! - [`WindowOptions`]: Windowing constants (maximum buttons, side window)
//! - [`compute_range`]: Calculator with the default side window of 1
//! - [`compute_range_with`]: Calculator with explicit [`WindowOptions`]
//!
//! # Examples
//! ```
//! use page_window::core::page_window::{compute_range, PageEntry};
//!
//! let window = compute_range(5, 10, 7);
//! assert_eq!(window.to_string(), "1 ... 4 5 6 ... 10");
//! assert_eq!(window.pages().collect::<Vec<_>>(), vec![1, 4, 5, 6, 10]);
//! assert_eq!(window.entries()[1], PageEntry::Ellipsis);
//! ```

use serde::{Serialize, Serializer};
use std::fmt;

/// Default number of pager buttons before the window starts eliding pages
pub const DEFAULT_MAX_BUTTONS: usize = 7;

/// Default number of pages shown on each side of the current page
pub const DEFAULT_SIDE_BUTTONS: usize = 1;

/// Text used for an elided run of pages
pub const ELLIPSIS: &str = "...";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageEntry {
    Page(usize),
    Ellipsis,
}

impl PageEntry {
    pub fn page(&self) -> Option<usize> {
        match self {
            PageEntry::Page(n) => Some(*n),
            PageEntry::Ellipsis => None,
        }
    }

    pub fn is_ellipsis(&self) -> bool {
        matches!(self, PageEntry::Ellipsis)
    }
}

impl fmt::Display for PageEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageEntry::Page(n) => write!(f, "{n}"),
            PageEntry::Ellipsis => f.write_str(ELLIPSIS),
        }
    }
}

// Pages serialize as bare numbers and ellipses as "...", so a window reads
// like `[1, "...", 4, 5, 6, "...", 10]` in JSON.
impl Serialize for PageEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PageEntry::Page(n) => serializer.serialize_u64(*n as u64),
            PageEntry::Ellipsis => serializer.serialize_str(ELLIPSIS),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PageWindow(Vec<PageEntry>);

impl PageWindow {
    pub fn entries(&self) -> &[PageEntry] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PageEntry> {
        self.0.iter()
    }

    /// Page numbers in the window, skipping ellipsis markers
    pub fn pages(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().filter_map(PageEntry::page)
    }

    pub fn contains_page(&self, page: usize) -> bool {
        self.pages().any(|p| p == page)
    }

    pub fn ellipsis_count(&self) -> usize {
        self.0.iter().filter(|e| e.is_ellipsis()).count()
    }

    fn push_page(&mut self, page: usize) {
        self.0.push(PageEntry::Page(page));
    }

    fn push_ellipsis(&mut self) {
        self.0.push(PageEntry::Ellipsis);
    }

    fn last_page(&self) -> Option<usize> {
        self.0.last().and_then(PageEntry::page)
    }
}

impl<'a> IntoIterator for &'a PageWindow {
    type Item = &'a PageEntry;
    type IntoIter = std::slice::Iter<'a, PageEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<PageWindow> for Vec<PageEntry> {
    fn from(window: PageWindow) -> Self {
        window.0
    }
}

impl fmt::Display for PageWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{entry}")?;
        }
        Ok(())
    }
}

/// Windowing constants for a pager
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowOptions {
    /// Up to this many pages, every page gets its own button
    pub max_buttons: usize,
    /// Pages shown on each side of the current page once pages are elided
    pub side_buttons: usize,
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self {
            max_buttons: DEFAULT_MAX_BUTTONS,
            side_buttons: DEFAULT_SIDE_BUTTONS,
        }
    }
}

impl WindowOptions {
    pub fn with_max_buttons(max_buttons: usize) -> Self {
        Self {
            max_buttons,
            ..Default::default()
        }
    }
}

/// Compute the pager window with the default side window of one page.
///
/// Out-of-range `current_page` values are the caller's to clamp; the
/// calculator itself is total and never panics.
pub fn compute_range(current_page: usize, total_pages: usize, max_buttons: usize) -> PageWindow {
    compute_range_with(
        current_page,
        total_pages,
        &WindowOptions::with_max_buttons(max_buttons),
    )
}

/// Compute the pager window with explicit windowing constants
pub fn compute_range_with(
    current_page: usize,
    total_pages: usize,
    options: &WindowOptions,
) -> PageWindow {
    let mut window = PageWindow::default();

    if total_pages <= 1 {
        return window;
    }

    if total_pages <= options.max_buttons {
        for page in 1..=total_pages {
            window.push_page(page);
        }
        return window;
    }

    let side = options.side_buttons;
    let start = current_page.saturating_sub(side).max(2);
    let end = current_page.saturating_add(side).min(total_pages - 1);

    window.push_page(1);

    if start > 2 {
        window.push_ellipsis();
    }

    for page in start..=end {
        window.push_page(page);
    }

    if end < total_pages - 1 {
        window.push_ellipsis();
    }

    if window.last_page() != Some(total_pages) {
        window.push_page(total_pages);
    }

    log::trace!("page window for {current_page}/{total_pages}: {window}");
    window
}
