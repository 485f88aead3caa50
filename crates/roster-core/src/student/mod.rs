//! Student record types.
//!
//! - `Subject` - the three graded subjects
//! - `ScoreSet` - one grade per subject, with a derived average
//! - `Record` - a student name paired with a `ScoreSet`

mod record;
mod score;

pub use record::*;
pub use score::*;
