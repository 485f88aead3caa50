pub mod config;
pub mod error;
pub mod export;
pub mod roster;
pub mod student;

pub use error::{Error, Result};
pub use roster::{Roster, RosterStore, RosterSummary};
pub use student::{Record, ScoreSet, Subject};
