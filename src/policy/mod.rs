//! Tunable thresholds of the enrollment rules.
//!
//! The passing score, GPA borders and unit ceilings are configuration values
//! rather than constants baked into the checks. A policy can be built in code,
//! taken from [`EnrollmentPolicy::default`], or parsed from JSON where any
//! omitted field keeps its default.
//!
//! # Example
//!
//! ```rust
//! use registrar::policy::{EnrollmentPolicy, GpaTier};
//!
//! let policy = EnrollmentPolicy::from_json(r#"{ "privileged_max_units": 24 }"#).unwrap();
//!
//! assert_eq!(policy.min_passed_score, 10.0);
//! assert_eq!(policy.tier(17.0), GpaTier::Privileged);
//! assert_eq!(policy.unit_ceiling(17.0), 24);
//! ```

use serde::{Deserialize, Serialize};

pub mod error;

pub use error::PolicyError;

pub const MIN_PASSED_SCORE: f64 = 10.0;
pub const UNQUALIFIED_GPA_BORDER: f64 = 12.0;
pub const UNQUALIFIED_MAX_UNITS: u32 = 14;
pub const PRIVILEGED_GPA_BORDER: f64 = 16.0;
pub const GENERAL_MAX_UNITS: u32 = 16;
pub const PRIVILEGED_MAX_UNITS: u32 = 20;

/// Unit-load bracket a student falls into based on GPA.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GpaTier {
    /// GPA below the unqualified border
    Unqualified,

    /// GPA between the two borders
    General,

    /// GPA at or above the privileged border
    Privileged,
}

/// Thresholds used by the enrollment checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnrollmentPolicy {
    /// Lowest score that counts a course as passed
    pub min_passed_score: f64,

    /// GPA below which a student is unqualified
    pub unqualified_gpa_border: f64,

    /// Unit ceiling of unqualified students
    pub unqualified_max_units: u32,

    /// GPA at or above which a student is privileged
    pub privileged_gpa_border: f64,

    /// Unit ceiling of general students
    pub general_max_units: u32,

    /// Unit ceiling of privileged students, and the hard ceiling for everyone
    pub privileged_max_units: u32,
}

impl Default for EnrollmentPolicy {
    fn default() -> Self {
        Self {
            min_passed_score: MIN_PASSED_SCORE,
            unqualified_gpa_border: UNQUALIFIED_GPA_BORDER,
            unqualified_max_units: UNQUALIFIED_MAX_UNITS,
            privileged_gpa_border: PRIVILEGED_GPA_BORDER,
            general_max_units: GENERAL_MAX_UNITS,
            privileged_max_units: PRIVILEGED_MAX_UNITS,
        }
    }
}

impl EnrollmentPolicy {
    /// Parse a policy from JSON and validate it.
    pub fn from_json(json: &str) -> Result<Self, PolicyError> {
        let policy: Self =
            serde_json::from_str(json).map_err(|e| PolicyError::Parse(e.to_string()))?;
        policy.validate()?;
        Ok(policy)
    }

    /// Check that the thresholds are consistent with each other.
    pub fn validate(&self) -> Result<(), PolicyError> {
        if !self.min_passed_score.is_finite() || self.min_passed_score < 0.0 {
            return Err(PolicyError::InvalidMinScore(self.min_passed_score));
        }

        let borders_ok = self.unqualified_gpa_border >= 0.0
            && self.unqualified_gpa_border <= self.privileged_gpa_border;
        if !borders_ok {
            return Err(PolicyError::InvalidBorders {
                unqualified: self.unqualified_gpa_border,
                privileged: self.privileged_gpa_border,
            });
        }

        if self.unqualified_max_units > self.general_max_units
            || self.general_max_units > self.privileged_max_units
        {
            return Err(PolicyError::InvalidCeilings {
                unqualified: self.unqualified_max_units,
                general: self.general_max_units,
                privileged: self.privileged_max_units,
            });
        }

        Ok(())
    }

    /// Tier for `gpa`. Borders are exclusive on the upper side.
    ///
    /// A NaN or infinite GPA is unqualified.
    pub fn tier(&self, gpa: f64) -> GpaTier {
        if !gpa.is_finite() || gpa < self.unqualified_gpa_border {
            GpaTier::Unqualified
        } else if gpa < self.privileged_gpa_border {
            GpaTier::General
        } else {
            GpaTier::Privileged
        }
    }

    /// Most units a student with `gpa` may request, capped by the hard ceiling.
    pub fn unit_ceiling(&self, gpa: f64) -> u32 {
        let tier_ceiling = match self.tier(gpa) {
            GpaTier::Unqualified => self.unqualified_max_units,
            GpaTier::General => self.general_max_units,
            GpaTier::Privileged => self.privileged_max_units,
        };
        tier_ceiling.min(self.privileged_max_units)
    }
}
