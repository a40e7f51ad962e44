//! Case-insensitive search over list items.
//!
//! A non-empty term keeps only the items that contain it; the caller resets
//! its [`Paginator`](crate::core::paginator::Paginator) to page 1 whenever the
//! term changes.

/// Keep the items whose text contains `term`, ignoring case.
///
/// A blank term keeps every item.
pub fn filter_items<'a, T>(items: &'a [T], term: &str) -> Vec<&'a T>
where
    T: AsRef<str>,
{
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return items.iter().collect();
    }

    let filtered: Vec<&T> = items
        .iter()
        .filter(|item| item.as_ref().to_lowercase().contains(&needle))
        .collect();

    log::debug!(
        "Search '{needle}' kept {} of {} items",
        filtered.len(),
        items.len()
    );
    filtered
}
