//! Search, multi-select and pagination helpers shared by list pages.
//!
//! Every listing in the app is an in-memory array; these helpers keep the
//! filter predicates consistent between the public pages and the admin tables.

#[cfg(test)]
#[path = "listing_test.rs"]
mod listing_test;

/// Case-insensitive substring match of `term` against any of `fields`.
/// An empty term matches everything; whitespace is matched literally.
#[must_use]
pub fn matches_search(term: &str, fields: &[&str]) -> bool {
    let term = term.to_lowercase();
    if term.is_empty() {
        return true;
    }
    fields.iter().any(|f| f.to_lowercase().contains(&term))
}

/// Case-insensitive membership test; an empty filter admits every value.
#[must_use]
pub fn admits(filter: &[String], value: &str) -> bool {
    filter.is_empty() || filter.iter().any(|f| f.eq_ignore_ascii_case(value))
}

/// True when `filter` is empty or shares at least one entry with `values`.
#[must_use]
pub fn overlaps(filter: &[String], values: &[String]) -> bool {
    filter.is_empty() || values.iter().any(|v| admits(filter, v))
}

/// Add `value` when absent, remove it when present.
pub fn toggle_selection(list: &mut Vec<String>, value: &str) {
    if let Some(pos) = list.iter().position(|v| v == value) {
        list.remove(pos);
    } else {
        list.push(value.to_owned());
    }
}

/// One page of a filtered listing.
#[derive(Debug, PartialEq, Eq)]
pub struct PageSlice<'a, T> {
    pub items: &'a [T],
    /// 1-based page actually shown after clamping.
    pub page: usize,
    /// Always at least 1, even for an empty listing.
    pub total_pages: usize,
    pub total_items: usize,
}

impl<T> PageSlice<'_, T> {
    #[must_use]
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

#[must_use]
pub fn total_pages(len: usize, per_page: usize) -> usize {
    len.div_ceil(per_page.max(1)).max(1)
}

/// Slice `items` into page `page` (1-based, clamped into range).
#[must_use]
pub fn paginate<T>(items: &[T], page: usize, per_page: usize) -> PageSlice<'_, T> {
    let per_page = per_page.max(1);
    let total_pages = total_pages(items.len(), per_page);
    let page = page.clamp(1, total_pages);
    let start = (page - 1) * per_page;
    let end = (start + per_page).min(items.len());
    PageSlice { items: &items[start.min(end)..end], page, total_pages, total_items: items.len() }
}
