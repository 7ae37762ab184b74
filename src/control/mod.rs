//! The enrollment shell around the pure rule core.
//!
//! `EnrollControl` is the only place a student's record is written. It
//! evaluates every rule first and commits the requested offerings only when
//! no violation was found, so a rejected request leaves the record exactly as
//! it was.

mod enroll;
mod report;

pub use enroll::EnrollControl;
pub use report::EnrollmentReport;
