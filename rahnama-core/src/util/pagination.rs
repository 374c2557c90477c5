use std::ops::Range;

/// A single page of a result set.
///
/// Page numbers start at 1. An empty result set
/// consists of a single empty page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub number: usize,
    pub num_pages: usize,
    pub total_count: usize,
    pub per_page: usize,
}

impl Page {
    /// Resolves the requested page number leniently.
    ///
    /// A missing or non-numeric number selects the first page,
    /// a number out of range selects the last page.
    pub fn resolve(total_count: usize, per_page: usize, requested: Option<&str>) -> Self {
        debug_assert!(per_page > 0);
        let num_pages = total_count.div_ceil(per_page).max(1);
        let number = match requested.map(|s| s.trim().parse::<i64>()) {
            None | Some(Err(_)) => 1,
            Some(Ok(n)) if n < 1 => num_pages,
            Some(Ok(n)) => usize::try_from(n).map_or(num_pages, |n| n.min(num_pages)),
        };
        Self {
            number,
            num_pages,
            total_count,
            per_page,
        }
    }

    /// Index range of the items on this page.
    pub fn range(&self) -> Range<usize> {
        let start = ((self.number - 1) * self.per_page).min(self.total_count);
        let end = (start + self.per_page).min(self.total_count);
        start..end
    }

    pub const fn has_previous(&self) -> bool {
        self.number > 1
    }

    pub const fn has_next(&self) -> bool {
        self.number < self.num_pages
    }

    pub const fn previous_number(&self) -> Option<usize> {
        if self.has_previous() {
            Some(self.number - 1)
        } else {
            None
        }
    }

    pub const fn next_number(&self) -> Option<usize> {
        if self.has_next() {
            Some(self.number + 1)
        } else {
            None
        }
    }
}
