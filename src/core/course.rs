//! Catalog courses and their identities.
//!
//! A course is an immutable value compared by its [`CourseId`]. Two `Course`
//! values reconstructed from different sources are the same course as long as
//! their ids match, regardless of name, units or prerequisites.

use super::error::ModelError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Unique identifier of a catalog course.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseId(String);

impl CourseId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CourseId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A course from the catalog.
///
/// # Example
///
/// ```rust
/// use registrar::core::Course;
///
/// let math1 = Course::new("4", "MATH1", 3).unwrap();
/// let math2 = Course::new("6", "MATH2", 3)
///     .unwrap()
///     .with_prerequisites([math1.clone()]);
///
/// assert_eq!(math2.units(), 3);
/// assert_eq!(math2.prerequisites(), &[math1]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Course {
    id: CourseId,
    name: String,
    units: u32,
    #[serde(default)]
    prerequisites: Vec<Course>,
}

impl Course {
    /// Create a course without prerequisites.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        units: u32,
    ) -> Result<Self, ModelError> {
        Self::builder().id(id).name(name).units(units).build()
    }

    pub fn builder() -> CourseBuilder {
        CourseBuilder::new()
    }

    /// Return a copy of this course that also requires `prerequisites`.
    ///
    /// Prerequisites already present (by id) are not added twice.
    pub fn with_prerequisites(mut self, prerequisites: impl IntoIterator<Item = Course>) -> Self {
        for course in prerequisites {
            if !self.prerequisites.contains(&course) {
                self.prerequisites.push(course);
            }
        }
        self
    }

    pub fn id(&self) -> &CourseId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn units(&self) -> u32 {
        self.units
    }

    pub fn prerequisites(&self) -> &[Course] {
        &self.prerequisites
    }
}

impl PartialEq for Course {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Course {}

impl Hash for Course {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

/// Builder for constructing courses with a fluent API.
#[derive(Default)]
pub struct CourseBuilder {
    id: Option<String>,
    name: Option<String>,
    units: u32,
    prerequisites: Vec<Course>,
}

impl CourseBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the catalog id (required).
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the display name (required).
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the unit count (required, positive).
    pub fn units(mut self, units: u32) -> Self {
        self.units = units;
        self
    }

    /// Add a prerequisite course (optional).
    pub fn prerequisite(mut self, course: Course) -> Self {
        self.prerequisites.push(course);
        self
    }

    /// Build the course.
    pub fn build(self) -> Result<Course, ModelError> {
        let id = self
            .id
            .filter(|id| !id.is_empty())
            .ok_or(ModelError::MissingCourseId)?;
        let name = self
            .name
            .filter(|name| !name.is_empty())
            .ok_or_else(|| ModelError::MissingCourseName { id: id.clone() })?;
        if self.units == 0 {
            return Err(ModelError::ZeroUnits { id });
        }

        Ok(Course {
            id: CourseId(id),
            name,
            units: self.units,
            prerequisites: Vec::new(),
        }
        .with_prerequisites(self.prerequisites))
    }
}
