//! Fixed-size page windows over ordered result sets.

use crate::names;

/// Slice a page out of `items`, which must already be in the caller's desired
/// order. Pages are 1-based; a page of 0 or below degrades to the first page.
/// A window starting past the end yields an empty slice, which is a valid
/// result — callers decide whether an empty page means "not found".
pub fn paginate<T>(items: &[T], page: i64, page_size: usize) -> &[T] {
    let page = page.max(names::DEFAULT_PAGE) as usize;
    let start = (page - 1).saturating_mul(page_size);

    if start >= items.len() {
        return &[];
    }

    let end = items.len().min(start + page_size);
    &items[start..end]
}
