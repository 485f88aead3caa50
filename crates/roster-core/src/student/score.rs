use strum::{EnumIter, IntoEnumIterator, IntoStaticStr};

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
pub enum Subject {
    Math,
    Physics,
    Chemistry,
}

impl Subject {
    pub fn label(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Grades for a single student, one per subject.
///
/// The type does not bound the grades; see [`ScoreSet::validate`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ScoreSet {
    pub math: u32,
    pub physics: u32,
    pub chemistry: u32,
}

impl ScoreSet {
    pub fn new(math: u32, physics: u32, chemistry: u32) -> Self {
        Self {
            math,
            physics,
            chemistry,
        }
    }

    /// All three grades set to `grade`
    pub fn uniform(grade: u32) -> Self {
        Self::new(grade, grade, grade)
    }

    pub fn get(&self, subject: Subject) -> u32 {
        match subject {
            Subject::Math => self.math,
            Subject::Physics => self.physics,
            Subject::Chemistry => self.chemistry,
        }
    }

    pub fn total(&self) -> u64 {
        u64::from(self.math) + u64::from(self.physics) + u64::from(self.chemistry)
    }

    /// Arithmetic mean of the three grades (real division)
    pub fn average(&self) -> f64 {
        self.total() as f64 / 3.0
    }

    /// Reject the first grade above `max`
    pub fn validate(&self, max: u32) -> Result<()> {
        for subject in Subject::iter() {
            let value = self.get(subject);
            if value > max {
                return Err(Error::ScoreOutOfRange {
                    subject,
                    value,
                    max,
                });
            }
        }
        Ok(())
    }
}
