//! Fixed-size pagination over ordered lists

/// Slice `items` into the page `page_index` of `page_size` elements.
///
/// When the whole list fits on one page any requested index is treated as 0,
/// so a list that shrank (after a ban or unban) never shows an empty page.
/// Out-of-range pages are empty.
pub fn page<T>(items: &[T], page_index: usize, page_size: usize) -> &[T] {
    let index = effective_page_index(items.len(), page_index, page_size);
    let start = index.saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// The page index actually shown for a request
pub fn effective_page_index(total: usize, requested: usize, page_size: usize) -> usize {
    if total <= page_size {
        0
    } else {
        requested
    }
}

/// Page position and navigation availability for one list view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Effective (possibly coerced) page index
    pub index: usize,
    pub size: usize,
    pub total: usize,
}

impl Pagination {
    pub fn new(total: usize, requested: usize, size: usize) -> Self {
        Self {
            index: effective_page_index(total, requested, size),
            size,
            total,
        }
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        page(items, self.index, self.size)
    }

    pub fn has_previous(&self) -> bool {
        self.index > 0
    }

    pub fn has_next(&self) -> bool {
        self.total > self.size.saturating_mul(self.index.saturating_add(1))
    }

    pub fn previous_index(&self) -> Option<usize> {
        self.has_previous().then(|| self.index - 1)
    }

    pub fn next_index(&self) -> Option<usize> {
        self.has_next().then(|| self.index + 1)
    }

    /// Number of pages needed for `total` items (at least one)
    pub fn page_count(&self) -> usize {
        if self.size == 0 {
            return 1;
        }
        self.total.div_ceil(self.size).max(1)
    }
}
