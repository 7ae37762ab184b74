//! Per-term score history of a student.
//!
//! A transcript maps each [`Term`] to the courses graded in that term. The
//! same course may appear in several terms (a retake); within a single term a
//! course has at most one score.

use super::course::{Course, CourseId};
use super::term::Term;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Score recorded for one course in one term.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grade {
    pub course: Course,
    pub score: f64,
}

/// Full historical record of `(term, course, score)` entries.
///
/// # Example
///
/// ```rust
/// use registrar::core::{Course, Term, Transcript};
///
/// let math1 = Course::new("4", "MATH1", 3).unwrap();
///
/// let mut transcript = Transcript::new();
/// transcript.record(Term::new("Term1"), math1.clone(), 8.0);
/// assert!(!transcript.has_passed(math1.id(), 10.0));
///
/// transcript.record(Term::new("Term2"), math1.clone(), 14.5);
/// assert!(transcript.has_passed(math1.id(), 10.0));
/// assert_eq!(transcript.len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    terms: BTreeMap<Term, BTreeMap<CourseId, Grade>>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `score` for `course` in `term`, replacing any earlier score for
    /// that course in the same term.
    pub fn record(&mut self, term: Term, course: Course, score: f64) {
        self.terms
            .entry(term)
            .or_default()
            .insert(course.id().clone(), Grade { course, score });
    }

    /// Iterate terms in label order together with their grades.
    pub fn terms(&self) -> impl Iterator<Item = (&Term, impl Iterator<Item = &Grade>)> {
        self.terms.iter().map(|(term, grades)| (term, grades.values()))
    }

    /// Iterate every grade across all terms.
    pub fn grades(&self) -> impl Iterator<Item = (&Term, &Grade)> {
        self.terms
            .iter()
            .flat_map(|(term, grades)| grades.values().map(move |grade| (term, grade)))
    }

    /// Whether any term records a score of at least `min_score` for the course.
    pub fn has_passed(&self, course: &CourseId, min_score: f64) -> bool {
        self.grades()
            .any(|(_, grade)| grade.course.id() == course && grade.score >= min_score)
    }

    /// Ids of every course with at least one score of `min_score` or more.
    pub fn passed_courses(&self, min_score: f64) -> BTreeSet<CourseId> {
        self.grades()
            .filter(|(_, grade)| grade.score >= min_score)
            .map(|(_, grade)| grade.course.id().clone())
            .collect()
    }

    /// Unit-weighted mean of every recorded score, `0.0` for an empty transcript.
    pub fn gpa(&self) -> f64 {
        let (weighted, units) = self
            .grades()
            .fold((0.0, 0.0), |(weighted, units), (_, grade)| {
                let course_units = f64::from(grade.course.units());
                (weighted + grade.score * course_units, units + course_units)
            });

        if units == 0.0 {
            0.0
        } else {
            weighted / units
        }
    }

    /// Number of `(term, course)` records.
    pub fn len(&self) -> usize {
        self.terms.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
