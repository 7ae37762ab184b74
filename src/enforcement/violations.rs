//! Enrollment rule violations.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single broken enrollment rule
#[derive(Debug, Clone, Error, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EnrollmentViolation {
    #[error("The student has already passed {course}")]
    AlreadyPassed { course: String },

    #[error("The student has not passed {prerequisite} as a prerequisite of {course}")]
    PrerequisiteMissing {
        prerequisite: String,
        course: String,
    },

    #[error("Two offerings {first} and {second} have the same exam time")]
    ExamTimeCollision { first: String, second: String },

    #[error("{course} is requested to be taken twice")]
    DuplicateCourse { course: String },

    #[error("Number of units ({requested}) requested does not match GPA of {gpa:.2}")]
    UnitOverload { requested: u32, gpa: f64 },

    #[error("Custom check failed: {message}")]
    Custom { message: String },
}

/// Category of a violation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    PassedBefore,
    PrerequisiteMissing,
    ExamTimeCollision,
    DuplicateRequest,
    UnitOverload,
    Custom,
}

impl EnrollmentViolation {
    pub fn kind(&self) -> ViolationKind {
        match self {
            Self::AlreadyPassed { .. } => ViolationKind::PassedBefore,
            Self::PrerequisiteMissing { .. } => ViolationKind::PrerequisiteMissing,
            Self::ExamTimeCollision { .. } => ViolationKind::ExamTimeCollision,
            Self::DuplicateCourse { .. } => ViolationKind::DuplicateRequest,
            Self::UnitOverload { .. } => ViolationKind::UnitOverload,
            Self::Custom { .. } => ViolationKind::Custom,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_courses() {
        let violation = EnrollmentViolation::PrerequisiteMissing {
            prerequisite: "MATH1".to_string(),
            course: "MATH2".to_string(),
        };
        assert_eq!(
            violation.to_string(),
            "The student has not passed MATH1 as a prerequisite of MATH2"
        );

        let violation = EnrollmentViolation::UnitOverload {
            requested: 15,
            gpa: 11.0,
        };
        assert_eq!(
            violation.to_string(),
            "Number of units (15) requested does not match GPA of 11.00"
        );
    }

    #[test]
    fn kind_maps_every_variant() {
        let cases = [
            (
                EnrollmentViolation::AlreadyPassed {
                    course: "ECO".to_string(),
                },
                ViolationKind::PassedBefore,
            ),
            (
                EnrollmentViolation::DuplicateCourse {
                    course: "ECO".to_string(),
                },
                ViolationKind::DuplicateRequest,
            ),
            (
                EnrollmentViolation::ExamTimeCollision {
                    first: "ECO".to_string(),
                    second: "FA".to_string(),
                },
                ViolationKind::ExamTimeCollision,
            ),
            (
                EnrollmentViolation::Custom {
                    message: "closed".to_string(),
                },
                ViolationKind::Custom,
            ),
        ];

        for (violation, kind) in cases {
            assert_eq!(violation.kind(), kind);
        }
    }

    #[test]
    fn violation_serializes_with_kind_tag() {
        let violation = EnrollmentViolation::DuplicateCourse {
            course: "ECO".to_string(),
        };
        let json = serde_json::to_value(&violation).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "kind": "duplicate_course", "course": "ECO" })
        );
    }
}
