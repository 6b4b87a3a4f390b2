use serde::Serialize;

/// Rows shown per grid page unless configured otherwise.
pub const DEFAULT_ROWS_PER_PAGE: usize = 10;

/// One page of a snapshot, numbered from 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<R> {
    pub number: usize,
    pub rows_per_page: usize,
    /// Number of records in the whole snapshot.
    pub total: usize,
    pub rows: Vec<R>,
}

impl<R: Clone> Page<R> {
    /// Slices `records[(number - 1) * rows_per_page .. number * rows_per_page]`.
    ///
    /// Page 0 is read as page 1 and a zero page size as 1. Pages past the end
    /// are empty.
    pub fn from_slice(records: &[R], number: usize, rows_per_page: usize) -> Self {
        let number = number.max(1);
        let rows_per_page = rows_per_page.max(1);
        let start = (number - 1).saturating_mul(rows_per_page);
        let rows = records
            .iter()
            .skip(start)
            .take(rows_per_page)
            .cloned()
            .collect();

        Self {
            number,
            rows_per_page,
            total: records.len(),
            rows,
        }
    }
}

impl<R> Page<R> {
    /// Number of pages needed for the whole snapshot; never less than 1.
    pub fn page_count(&self) -> usize {
        self.total.div_ceil(self.rows_per_page.max(1)).max(1)
    }

    pub fn is_last(&self) -> bool {
        self.number >= self.page_count()
    }
}
