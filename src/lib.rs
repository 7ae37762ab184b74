//! Registrar: course enrollment rules for a term
//!
//! Registrar follows a "pure core, imperative shell" layout. Each enrollment
//! rule is a pure function of a student's transcript, GPA and the requested
//! offerings, and all of them run on every request so the caller receives
//! the complete list of problems at once. Only when that list is empty does
//! the shell commit the offerings to the student's current term.
//!
//! # Core Concepts
//!
//! - **Course / Offering**: catalog entries and the scheduled instances requested
//! - **Transcript**: per-term scores, the source of "passed" courses and GPA
//! - **AcademicRecord**: the read/write contract a student record fulfils
//! - **Policy**: passing score, GPA borders and unit ceilings
//! - **Violations**: rule failures returned as data, never raised
//!
//! # Example
//!
//! ```rust
//! use registrar::control::EnrollControl;
//! use registrar::core::{Course, Offering, Student, Term};
//! use chrono::{Duration, Utc};
//!
//! let eco = Course::new("1", "ECO", 3).unwrap();
//! let fa = Course::new("12", "FA", 3).unwrap();
//!
//! let mut student = Student::new("1", "Bebe");
//! student.add_transcript_record(eco.clone(), Term::new("Term1"), 16.0);
//!
//! let exam = Utc::now();
//! let requested = vec![
//!     Offering::new(eco, exam),
//!     Offering::new(fa.clone(), exam),
//!     Offering::new(fa, exam + Duration::days(1)),
//! ];
//!
//! let violations = EnrollControl::new().enroll(&mut student, &requested);
//!
//! // already passed, exam collision, requested twice
//! assert_eq!(violations.len(), 3);
//! assert!(student.current_term().is_empty());
//! ```

pub mod control;
pub mod core;
pub mod enforcement;
pub mod policy;

// Re-export commonly used types
pub use crate::control::{EnrollControl, EnrollmentReport};
pub use crate::core::{AcademicRecord, Course, Offering, Student, Term, Transcript};
pub use crate::enforcement::{EnrollmentRules, EnrollmentRulesBuilder, EnrollmentViolation};
pub use crate::policy::EnrollmentPolicy;
