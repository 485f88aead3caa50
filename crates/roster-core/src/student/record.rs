use std::fmt;
use std::str::FromStr;

use strum::IntoEnumIterator;

use crate::error::{Error, Result};

use super::{ScoreSet, Subject};

/// A named student with one set of grades.
///
/// Records carry no identity of their own; two records with the same name and
/// grades are distinct entries in a roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub name: String,
    pub scores: ScoreSet,
}

impl Record {
    pub fn new(name: impl Into<String>, scores: ScoreSet) -> Self {
        Self {
            name: name.into(),
            scores,
        }
    }

    pub fn average(&self) -> f64 {
        self.scores.average()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}, Math: {}, Physics: {}, Chemistry: {}, Average: {:.2}",
            self.name,
            self.scores.math,
            self.scores.physics,
            self.scores.chemistry,
            self.average()
        )
    }
}

/// Parses `NAME:MATH,PHYSICS,CHEMISTRY`, e.g. `Le Van C:9,10,9`.
///
/// The name is everything before the last `:`.
impl FromStr for Record {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (name, grades) = s
            .rsplit_once(':')
            .ok_or_else(|| Error::InvalidRecord(format!("missing ':' in {s:?}")))?;

        let name = name.trim();
        if name.is_empty() {
            return Err(Error::InvalidRecord(format!("empty name in {s:?}")));
        }

        let parts: Vec<&str> = grades.split(',').map(str::trim).collect();
        if parts.len() != 3 {
            return Err(Error::InvalidRecord(format!(
                "expected 3 grades, got {} in {s:?}",
                parts.len()
            )));
        }

        let mut values = [0u32; 3];
        for ((slot, part), subject) in values.iter_mut().zip(&parts).zip(Subject::iter()) {
            *slot = part.parse().map_err(|_| Error::InvalidScore {
                subject,
                value: part.to_string(),
            })?;
        }

        Ok(Self::new(
            name,
            ScoreSet::new(values[0], values[1], values[2]),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sets_name_and_scores() {
        let scores = ScoreSet::new(8, 9, 7);
        let record = Record::new("Tran Thi B", scores);
        assert_eq!(record.name, "Tran Thi B");
        assert_eq!(record.scores, scores);
    }

    #[test]
    fn test_display_formats_average_with_two_decimals() {
        let record = Record::new("Tran Thi B", ScoreSet::new(8, 9, 7));
        assert_eq!(
            record.to_string(),
            "Name: Tran Thi B, Math: 8, Physics: 9, Chemistry: 7, Average: 8.00"
        );
    }

    #[test]
    fn test_display_rounds_repeating_average() {
        let record = Record::new("Pham Thi D", ScoreSet::new(8, 8, 9));
        assert!(record.to_string().ends_with("Average: 8.33"));
    }

    #[test]
    fn test_parse_record() {
        let record: Record = "Le Van C:9, 10, 9".parse().unwrap();
        assert_eq!(record.name, "Le Van C");
        assert_eq!(record.scores, ScoreSet::new(9, 10, 9));
    }

    #[test]
    fn test_parse_name_with_colon() {
        let record: Record = "Class 10A: Le Van C:7,8,9".parse().unwrap();
        assert_eq!(record.name, "Class 10A: Le Van C");
    }

    #[test]
    fn test_parse_missing_separator() {
        assert!(matches!(
            "Le Van C 9,10,9".parse::<Record>(),
            Err(Error::InvalidRecord(_))
        ));
    }

    #[test]
    fn test_parse_empty_name() {
        assert!(matches!(
            "  :9,10,9".parse::<Record>(),
            Err(Error::InvalidRecord(_))
        ));
    }

    #[test]
    fn test_parse_wrong_grade_count() {
        assert!(matches!(
            "A:9,10".parse::<Record>(),
            Err(Error::InvalidRecord(_))
        ));
        assert!(matches!(
            "A:9,10,8,7".parse::<Record>(),
            Err(Error::InvalidRecord(_))
        ));
    }

    #[test]
    fn test_parse_non_integer_grade() {
        match "A:9,x,8".parse::<Record>() {
            Err(Error::InvalidScore { subject, value }) => {
                assert_eq!(subject, Subject::Physics);
                assert_eq!(value, "x");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_negative_grade() {
        assert!(matches!(
            "A:-1,5,5".parse::<Record>(),
            Err(Error::InvalidScore { .. })
        ));
    }
}
