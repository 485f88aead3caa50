//! Ranking order over roster records.
//!
//! Average descending, then name ascending (ordinal), then insertion slot
//! ascending. The last key makes the order total even for duplicate records.

use std::cmp::Ordering;

use crate::student::Record;

/// A record together with its insertion slot in the store.
#[derive(Debug, Clone, Copy)]
pub struct Ranked<'a> {
    pub slot: usize,
    pub record: &'a Record,
}

pub fn compare_ranked(a: &Ranked<'_>, b: &Ranked<'_>) -> Ordering {
    b.record
        .average()
        .total_cmp(&a.record.average())
        .then_with(|| a.record.name.cmp(&b.record.name))
        .then_with(|| a.slot.cmp(&b.slot))
}

/// Rank `records`, treating each element's index as its insertion slot.
pub fn rank(records: &[Record]) -> Vec<Ranked<'_>> {
    let mut ranked: Vec<Ranked<'_>> = records
        .iter()
        .enumerate()
        .map(|(slot, record)| Ranked { slot, record })
        .collect();
    ranked.sort_by(compare_ranked);
    ranked
}

/// First element of the ranking without sorting.
pub fn first(records: &[Record]) -> Option<Ranked<'_>> {
    records
        .iter()
        .enumerate()
        .map(|(slot, record)| Ranked { slot, record })
        .min_by(compare_ranked)
}
