//! Student records.

use super::course::Course;
use super::offering::Section;
use super::record::AcademicRecord;
use super::term::Term;
use super::transcript::Transcript;
use serde::{Deserialize, Serialize};

/// A course taken in the current term.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Enrollment {
    pub course: Course,
    pub section: Section,
}

/// A student with a transcript and a current-term course list.
///
/// The GPA is derived from the transcript unless a stored value is set with
/// [`Student::with_gpa`].
///
/// # Example
///
/// ```rust
/// use registrar::core::{AcademicRecord, Course, Section, Student, Term};
///
/// let prog = Course::new("7", "PROG", 3).unwrap();
/// let mut student = Student::new("1", "Bebe");
/// student.add_transcript_record(prog.clone(), Term::new("Term1"), 15.0);
///
/// assert_eq!(student.gpa(), 15.0);
/// assert!(student.current_term().is_empty());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Student {
    id: String,
    name: String,
    transcript: Transcript,
    current_term: Vec<Enrollment>,
    stored_gpa: Option<f64>,
}

impl Student {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            transcript: Transcript::new(),
            current_term: Vec::new(),
            stored_gpa: None,
        }
    }

    /// Use a stored GPA instead of deriving it from the transcript.
    pub fn with_gpa(mut self, gpa: f64) -> Self {
        self.stored_gpa = Some(gpa);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn add_transcript_record(&mut self, course: Course, term: Term, score: f64) {
        self.transcript.record(term, course, score);
    }

    /// Append a course to the current term. Re-taking the same course in the
    /// same section is a no-op.
    pub fn take_course(&mut self, course: Course, section: Section) {
        let enrollment = Enrollment { course, section };
        if !self.current_term.contains(&enrollment) {
            self.current_term.push(enrollment);
        }
    }

    pub fn current_term(&self) -> &[Enrollment] {
        &self.current_term
    }

    pub fn has_taken(&self, course: &Course) -> bool {
        self.current_term.iter().any(|e| &e.course == course)
    }
}

impl AcademicRecord for Student {
    fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    fn gpa(&self) -> f64 {
        self.stored_gpa.unwrap_or_else(|| self.transcript.gpa())
    }

    fn commit(&mut self, course: &Course, section: Section) {
        self.take_course(course.clone(), section);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_student_has_empty_record() {
        let student = Student::new("1", "Bebe");
        assert_eq!(student.id(), "1");
        assert_eq!(student.name(), "Bebe");
        assert!(student.transcript().is_empty());
        assert!(student.current_term().is_empty());
        assert_eq!(student.gpa(), 0.0);
    }

    #[test]
    fn stored_gpa_overrides_transcript() {
        let course = Course::new("1", "ECO", 3).unwrap();
        let mut student = Student::new("1", "Bebe").with_gpa(17.0);
        student.add_transcript_record(course, Term::new("Term1"), 9.0);

        assert_eq!(student.gpa(), 17.0);
    }

    #[test]
    fn take_course_is_idempotent() {
        let course = Course::new("1", "ECO", 3).unwrap();
        let mut student = Student::new("1", "Bebe");
        student.take_course(course.clone(), Section::default());
        student.take_course(course.clone(), Section::default());

        assert_eq!(student.current_term().len(), 1);
        assert!(student.has_taken(&course));
    }

    #[test]
    fn commit_appends_to_current_term() {
        let eco = Course::new("1", "ECO", 3).unwrap();
        let fa = Course::new("12", "FA", 3).unwrap();
        let mut student = Student::new("1", "Bebe");
        student.commit(&eco, Section::new(2));
        student.commit(&fa, Section::default());

        let taken: Vec<(&str, u32)> = student
            .current_term()
            .iter()
            .map(|e| (e.course.name(), e.section.number()))
            .collect();
        assert_eq!(taken, vec![("ECO", 2), ("FA", 1)]);
    }
}
