/// Number of items returned when the caller doesn't ask for a count.
pub const DEFAULT_LIMIT: i64 = 5;

/// Upper bound for `get_latest_news`.
pub const LATEST_NEWS_MAX_LIMIT: u32 = 10;

/// Upper bound for `search_news`.
pub const SEARCH_NEWS_MAX_LIMIT: u32 = 5;

/// Clamp a requested item count into `[1, max]`.
///
/// Out-of-range requests are corrected rather than rejected.
pub fn clamp_limit(limit: Option<i64>, max: u32) -> u32 {
    let max = max.max(1);
    limit.unwrap_or(DEFAULT_LIMIT).clamp(1, i64::from(max)) as u32
}
