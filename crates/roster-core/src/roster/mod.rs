//! In-memory student roster.
//!
//! - `RosterStore` - owns records in insertion order and answers queries
//! - `ranking` - the total order used by every ranked query
//! - `search` - rounded-average lookup over a ranking
//! - `Roster` - service interface implemented by `RosterStore`

pub mod ranking;
pub mod search;
mod service;
mod store;

pub use service::*;
pub use store::*;
