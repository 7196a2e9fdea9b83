pub const QUESTIONS_PER_PAGE: usize = 10;
pub const DEFAULT_PAGE: i64 = 1;

/// Wire sentinel for "draw from every category" in quiz requests.
pub const ALL_CATEGORIES_ID: i64 = 0;
