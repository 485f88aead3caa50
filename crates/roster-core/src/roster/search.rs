//! Rounded-average lookup over a ranking.
//!
//! Averages are compared at two decimal places. A ranking is sorted by exact
//! average descending, so the rounded keys are non-increasing and all records
//! sharing a key form one contiguous run.

use tracing::trace;

use crate::config::search::KEY_SCALE;

use super::ranking::Ranked;

/// Integer key of `value` rounded to hundredths, ties to even.
pub fn average_key(value: f64) -> i64 {
    (value * KEY_SCALE).round_ties_even() as i64
}

/// Index range of the run in `ranked` whose rounded average equals `target`'s.
///
/// Returns an empty range when nothing matches or `target` is NaN.
pub fn find_run(ranked: &[Ranked<'_>], target: f64) -> std::ops::Range<usize> {
    if target.is_nan() {
        return 0..0;
    }

    let key = average_key(target);

    // Leftmost index whose key is <= target key
    let start = ranked.partition_point(|r| average_key(r.record.average()) > key);
    let len = ranked[start..]
        .iter()
        .take_while(|r| average_key(r.record.average()) == key)
        .count();

    trace!(average = target, key, start, len, "average search");
    start..start + len
}
