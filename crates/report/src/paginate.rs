// crates/report/src/paginate.rs

use itertools::Itertools;

/// Chunks a flat sequence into consecutive pages of at most
/// `page_size` items; only the final page may be shorter.
///
/// Concatenating the pages reproduces the input in order. An empty
/// input yields zero pages. A zero `page_size` is a caller bug and is
/// clamped to 1 so the function stays total.
pub fn paginate<T>(items: Vec<T>, page_size: usize) -> Vec<Vec<T>> {
    if page_size == 0 {
        log::warn!("page size of 0 requested, clamping to 1");
    }
    let size = page_size.max(1);

    let chunks = items.into_iter().chunks(size);
    chunks
        .into_iter()
        .map(|chunk| chunk.collect())
        .collect()
}

/// Splits one page's rows into a left and right print column.
///
/// The left column takes the first `column_rows` rows, the right column
/// whatever remains. Pages shorter than `column_rows` get an empty
/// right column.
pub fn split_columns<T>(page: &[T], column_rows: usize) -> (&[T], &[T]) {
    page.split_at(column_rows.min(page.len()))
}
