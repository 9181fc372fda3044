//! Shared utilities (cursor wraparound, list windowing).

/// Wrap `n` into `[lo, hi]` by a single step.
///
/// Above `hi` goes to `lo`, below `lo` goes to `hi`. Overshoot of more than
/// one is not folded back.
pub fn circular_clamp(n: i64, lo: i64, hi: i64) -> i64 {
    if n > hi {
        return lo;
    }
    if n < lo {
        return hi;
    }
    n
}

/// First visible row so that `cursor` stays inside a window of `rows`.
pub fn visible_window(cursor: usize, rows: usize, total: usize) -> usize {
    if rows == 0 || total <= rows {
        return 0;
    }
    cursor.saturating_sub(rows - 1).min(total - rows)
}
