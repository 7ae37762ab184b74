//! Scheduled offerings requested for enrollment.

use super::course::Course;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Section number of an offering. Sections start at 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Section(u32);

impl Section {
    pub fn new(number: u32) -> Self {
        Self(number)
    }

    pub fn number(&self) -> u32 {
        self.0
    }
}

impl Default for Section {
    fn default() -> Self {
        Self(1)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One course scheduled with an exam time and a section.
///
/// # Example
///
/// ```rust
/// use registrar::core::{Course, Offering, Section};
/// use chrono::{TimeZone, Utc};
///
/// let prog = Course::new("7", "PROG", 3).unwrap();
/// let exam = Utc.with_ymd_and_hms(2026, 1, 20, 9, 0, 0).unwrap();
///
/// let offering = Offering::new(prog, exam).with_section(Section::new(2));
/// assert_eq!(offering.section().number(), 2);
/// assert_eq!(offering.course().name(), "PROG");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Offering {
    course: Course,
    exam_time: DateTime<Utc>,
    #[serde(default)]
    section: Section,
}

impl Offering {
    /// Offer `course` in the default section.
    pub fn new(course: Course, exam_time: DateTime<Utc>) -> Self {
        Self {
            course,
            exam_time,
            section: Section::default(),
        }
    }

    pub fn with_section(mut self, section: Section) -> Self {
        self.section = section;
        self
    }

    pub fn course(&self) -> &Course {
        &self.course
    }

    pub fn exam_time(&self) -> DateTime<Utc> {
        self.exam_time
    }

    pub fn section(&self) -> Section {
        self.section
    }
}

impl fmt::Display for Offering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} section {} (exam {})",
            self.course.name(),
            self.section,
            self.exam_time.format("%Y-%m-%d %H:%M")
        )
    }
}
