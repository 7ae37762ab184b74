//! Context provided to enrollment checks.

use crate::core::{AcademicRecord, Offering, Transcript};

/// Read-only view of one enrollment request
#[derive(Clone, Copy, Debug)]
pub struct EnrollmentContext<'a> {
    pub transcript: &'a Transcript,
    pub gpa: f64,
    pub offerings: &'a [Offering],
}

impl<'a> EnrollmentContext<'a> {
    /// Capture the transcript and GPA of `record` alongside the requested offerings
    pub fn new<R: AcademicRecord + ?Sized>(record: &'a R, offerings: &'a [Offering]) -> Self {
        Self {
            transcript: record.transcript(),
            gpa: record.gpa(),
            offerings,
        }
    }

    /// Total units over every requested offering, saturating at `u32::MAX` (pure)
    pub fn requested_units(&self) -> u32 {
        self.offerings
            .iter()
            .map(|o| o.course().units())
            .fold(0, u32::saturating_add)
    }
}
