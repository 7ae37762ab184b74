//! Academic data the enrollment rules read and write.
//!
//! This module contains the plain values of the domain:
//! - Catalog courses and their prerequisites
//! - Terms, transcripts and scores
//! - Offerings requested for enrollment
//! - Student records behind the `AcademicRecord` contract
//!
//! Nothing here evaluates rules; that lives in `enforcement`.

mod course;
mod error;
mod offering;
mod record;
mod student;
mod term;
mod transcript;

pub use course::{Course, CourseBuilder, CourseId};
pub use error::ModelError;
pub use offering::{Offering, Section};
pub use record::AcademicRecord;
pub use student::{Enrollment, Student};
pub use term::Term;
pub use transcript::{Grade, Transcript};
