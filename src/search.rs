//! Case-insensitive substring search over question text.

use color_eyre::eyre::{ensure, Result};

use crate::models::Question;

/// Filter the catalog to questions whose text contains `term`, ignoring case.
/// Catalog order is preserved so the result can be paginated directly.
/// A blank term is a caller error, not "match all".
pub fn search<'a>(catalog: &'a [Question], term: &str) -> Result<Vec<&'a Question>> {
    let term = term.trim();
    ensure!(!term.is_empty(), "search term must not be empty");

    let needle = term.to_lowercase();
    Ok(catalog
        .iter()
        .filter(|q| q.question.to_lowercase().contains(&needle))
        .collect())
}
