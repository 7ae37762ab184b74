//! Structured summary of an enrollment evaluation.

use crate::enforcement::{EnrollmentViolation, ViolationKind};
use crate::policy::GpaTier;
use serde::{Deserialize, Serialize};

/// Everything the rules decided about one request
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnrollmentReport {
    /// Sum of units over the requested offerings
    pub requested_units: u32,

    /// GPA the unit-load tier was picked from
    pub gpa: f64,

    /// Tier the GPA falls into
    pub tier: GpaTier,

    /// Most units the student may take
    pub unit_ceiling: u32,

    /// Every violated rule, empty when the request is accepted
    pub violations: Vec<EnrollmentViolation>,
}

impl EnrollmentReport {
    pub fn is_accepted(&self) -> bool {
        self.violations.is_empty()
    }

    /// Violations of one category
    pub fn of_kind(&self, kind: ViolationKind) -> impl Iterator<Item = &EnrollmentViolation> {
        self.violations.iter().filter(move |v| v.kind() == kind)
    }

    /// Human-readable messages, one per violation
    pub fn messages(&self) -> Vec<String> {
        self.violations.iter().map(ToString::to_string).collect()
    }
}
