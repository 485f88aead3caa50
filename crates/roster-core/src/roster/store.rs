use serde::Serialize;
use tracing::debug;

use crate::student::Record;

use super::ranking::{self, Ranked};
use super::search;

/// Records in insertion order.
///
/// Queries never reorder the stored sequence; ranked views are rebuilt on every
/// call and hand out shared borrows only. The store has no internal locking.
#[derive(Debug, Clone, Default)]
pub struct RosterStore {
    records: Vec<Record>,
}

impl RosterStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, record: Record) {
        debug!(name = %record.name, slot = self.records.len(), "append record");
        self.records.push(record);
    }

    /// Records in insertion order
    pub fn list(&self) -> &[Record] {
        &self.records
    }

    /// Records by average descending, name ascending, insertion order
    pub fn ranked(&self) -> Vec<&Record> {
        ranking::rank(&self.records)
            .into_iter()
            .map(|r| r.record)
            .collect()
    }

    /// Head of the ranking, found in a single pass
    pub fn top(&self) -> Option<&Record> {
        ranking::first(&self.records).map(|r| r.record)
    }

    /// Records whose average rounds to the same hundredth as `target`, in
    /// ranking order.
    pub fn find_by_average(&self, target: f64) -> Vec<&Record> {
        let ranked: Vec<Ranked<'_>> = ranking::rank(&self.records);
        let run = search::find_run(&ranked, target);
        debug!(target_average = target, matches = run.len(), "find by average");
        ranked[run].iter().map(|r| r.record).collect()
    }

    pub fn summary(&self) -> RosterSummary {
        RosterSummary::collect(&self.records)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<Record> for RosterStore {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut store = Self::new();
        store.extend(iter);
        store
    }
}

impl Extend<Record> for RosterStore {
    fn extend<I: IntoIterator<Item = Record>>(&mut self, iter: I) {
        for record in iter {
            self.append(record);
        }
    }
}

/// Aggregate figures over a roster
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RosterSummary {
    pub count: usize,
    /// Mean of the students' averages
    pub mean_average: Option<f64>,
    pub highest_average: Option<f64>,
    pub lowest_average: Option<f64>,
}

impl RosterSummary {
    fn collect(records: &[Record]) -> Self {
        if records.is_empty() {
            return Self::default();
        }

        let averages: Vec<f64> = records.iter().map(Record::average).collect();
        let sum: f64 = averages.iter().sum();

        Self {
            count: records.len(),
            mean_average: Some(sum / averages.len() as f64),
            highest_average: averages.iter().copied().max_by(f64::total_cmp),
            lowest_average: averages.iter().copied().min_by(f64::total_cmp),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::student::ScoreSet;

    fn store(entries: &[(&str, u32, u32, u32)]) -> RosterStore {
        entries
            .iter()
            .map(|&(name, m, p, c)| Record::new(name, ScoreSet::new(m, p, c)))
            .collect()
    }

    fn names<'a>(records: &[&'a Record]) -> Vec<&'a str> {
        records.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_append_preserves_order() {
        let mut roster = RosterStore::new();
        roster.append(Record::new("Tran Thi B", ScoreSet::uniform(9)));
        roster.append(Record::new("Le Van C", ScoreSet::uniform(8)));

        let list = roster.list();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].name, "Tran Thi B");
        assert_eq!(list[1].name, "Le Van C");
    }

    #[test]
    fn test_ranked_does_not_reorder_list() {
        let roster = store(&[
            ("Pham Thi D", 8, 8, 8),
            ("Tran Thi B", 9, 9, 9),
            ("Le Van C", 7, 7, 7),
        ]);

        let ranked = roster.ranked();
        assert_eq!(names(&ranked), ["Tran Thi B", "Pham Thi D", "Le Van C"]);

        let original: Vec<&str> = roster.list().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(original, ["Pham Thi D", "Tran Thi B", "Le Van C"]);
    }

    #[test]
    fn test_top() {
        let roster = store(&[
            ("Tran Thi B", 7, 7, 7),
            ("Le Van C", 10, 10, 10),
            ("Pham Thi D", 8, 8, 8),
        ]);
        let top = roster.top().unwrap();
        assert_eq!(top.name, "Le Van C");
        assert_eq!(top.average(), 10.0);
    }

    #[test]
    fn test_top_empty() {
        assert!(RosterStore::new().top().is_none());
    }

    #[test]
    fn test_find_by_average_sorted_by_name() {
        let roster = store(&[
            ("Tran Thi E", 8, 8, 8),
            ("Tran Thi B", 8, 8, 8),
            ("Le Van C", 8, 8, 8),
            ("Pham Thi D", 9, 9, 9),
        ]);
        let found = roster.find_by_average(8.0);
        assert_eq!(names(&found), ["Le Van C", "Tran Thi B", "Tran Thi E"]);
    }

    #[test]
    fn test_find_by_average_mixed_grades() {
        let roster = store(&[
            ("Tran Thi B", 8, 8, 9),
            ("Le Van C", 7, 8, 9),
            ("Pham Thi D", 8, 8, 8),
        ]);
        let found = roster.find_by_average(8.0);
        assert_eq!(names(&found), ["Le Van C", "Pham Thi D"]);
    }

    #[test]
    fn test_find_by_average_no_match() {
        let roster = store(&[("Tran Thi B", 8, 8, 8), ("Le Van C", 9, 9, 9)]);
        assert!(roster.find_by_average(10.0).is_empty());
    }

    #[test]
    fn test_summary() {
        let roster = store(&[("A", 10, 10, 10), ("B", 6, 6, 6), ("C", 8, 8, 8)]);
        let summary = roster.summary();
        assert_eq!(summary.count, 3);
        assert_eq!(summary.mean_average, Some(8.0));
        assert_eq!(summary.highest_average, Some(10.0));
        assert_eq!(summary.lowest_average, Some(6.0));
    }

    #[test]
    fn test_summary_empty() {
        assert_eq!(RosterStore::new().summary(), RosterSummary::default());
    }

    #[test]
    fn test_extend() {
        let mut roster = store(&[("A", 8, 8, 8)]);
        roster.extend([Record::new("B", ScoreSet::uniform(9))]);
        assert_eq!(roster.len(), 2);
        assert_eq!(roster.top().unwrap().name, "B");
    }
}
