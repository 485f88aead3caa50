//! Configuration constants.
//!
//! - Grade bounds used by caller-side validation
//! - Search precision for average lookups
//! - Display thresholds for colored console output

/// Grade bounds.
///
/// The store never enforces these; they are applied by callers that opt into
/// validation (see `ScoreSet::validate`).
pub mod grades {
    pub const MIN_GRADE: u32 = 0;
    pub const MAX_GRADE: u32 = 10;
}

/// Average search configuration.
pub mod search {
    /// Number of decimal places averages are rounded to before comparison.
    pub const AVERAGE_DECIMALS: u32 = 2;

    /// Multiplier turning a rounded average into an integer key.
    pub const KEY_SCALE: f64 = 100.0;
}

/// Console display thresholds.
pub mod display {
    /// Averages at or above this are shown green.
    pub const GOOD_AVERAGE: f64 = 8.0;

    /// Averages at or above this (and below `GOOD_AVERAGE`) are shown yellow.
    pub const FAIR_AVERAGE: f64 = 6.5;
}
