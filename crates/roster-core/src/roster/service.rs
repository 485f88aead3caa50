use crate::student::Record;

use super::RosterStore;

/// Student roster service.
///
/// Lets front ends work against any roster implementation; `RosterStore` is
/// the in-memory one.
pub trait Roster {
    fn add_student(&mut self, record: Record);

    fn students(&self) -> &[Record];

    fn sorted_by_average(&self) -> Vec<&Record>;

    /// `None` when the roster is empty
    fn highest_average(&self) -> Option<&Record>;

    /// Empty when nothing matches
    fn find_by_average_score(&self, target: f64) -> Vec<&Record>;
}

impl Roster for RosterStore {
    fn add_student(&mut self, record: Record) {
        self.append(record);
    }

    fn students(&self) -> &[Record] {
        self.list()
    }

    fn sorted_by_average(&self) -> Vec<&Record> {
        self.ranked()
    }

    fn highest_average(&self) -> Option<&Record> {
        self.top()
    }

    fn find_by_average_score(&self, target: f64) -> Vec<&Record> {
        self.find_by_average(target)
    }
}
