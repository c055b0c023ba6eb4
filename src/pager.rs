//! Paginated access to the raw filtered rows.

use crate::models::Trip;

/// Rows shown per page.
pub const PAGE_SIZE: usize = 5;

/// Zero-based cursor over a filtered table, five rows at a time.
#[derive(Debug)]
pub struct Pager<'a> {
    trips: &'a [Trip],
    cursor: usize,
}

impl<'a> Pager<'a> {
    pub fn new(trips: &'a [Trip]) -> Self {
        Self { trips, cursor: 0 }
    }

    /// Next page of up to [`PAGE_SIZE`] rows. Returns `None` once the cursor
    /// has passed the end; the final non-empty page may hold fewer rows.
    pub fn next_page(&mut self) -> Option<&'a [Trip]> {
        if self.cursor >= self.trips.len() {
            return None;
        }
        let end = (self.cursor + PAGE_SIZE).min(self.trips.len());
        let page = &self.trips[self.cursor..end];
        self.cursor = end;
        Some(page)
    }
}
