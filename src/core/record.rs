//! The contract enrollment rules need from a student's record.
//!
//! Rule checks only read the transcript and GPA. The single write, `commit`,
//! is issued by the enrollment shell after every rule has passed.

use super::course::Course;
use super::offering::Section;
use super::transcript::Transcript;

/// Read/write contract of a student's academic record.
///
/// # Example
///
/// ```rust
/// use registrar::core::{AcademicRecord, Course, Section, Transcript};
///
/// struct Applicant {
///     transcript: Transcript,
///     taken: Vec<(Course, Section)>,
/// }
///
/// impl AcademicRecord for Applicant {
///     fn transcript(&self) -> &Transcript {
///         &self.transcript
///     }
///
///     fn gpa(&self) -> f64 {
///         17.5
///     }
///
///     fn commit(&mut self, course: &Course, section: Section) {
///         self.taken.push((course.clone(), section));
///     }
/// }
/// ```
pub trait AcademicRecord {
    /// Historical scores keyed by term and course.
    fn transcript(&self) -> &Transcript;

    /// Grade point average used to pick the unit-load tier.
    fn gpa(&self) -> f64;

    /// Add a course to the current term.
    ///
    /// Called once per requested offering, and only after validation found
    /// no violations.
    fn commit(&mut self, course: &Course, section: Section);
}
