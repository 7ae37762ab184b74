//! Errors raised while constructing catalog data.

use thiserror::Error;

/// Errors that can occur when building courses.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ModelError {
    #[error("Course id not specified. Call .id(id) before .build()")]
    MissingCourseId,

    #[error("Course name not specified for {id}. Call .name(name) before .build()")]
    MissingCourseName { id: String },

    #[error("Course {id} must carry a positive number of units")]
    ZeroUnits { id: String },
}
