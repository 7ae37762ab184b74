//! Validation-based enforcement of enrollment rules.
//!
//! This module evaluates an enrollment request using Stillwater's
//! `Validation` type to accumulate ALL violations instead of fail-fast
//! behavior.
//!
//! # Philosophy
//!
//! "Don't stop at first error - collect them all!"
//!
//! A student who requests a course they already passed, misses a
//! prerequisite and overloads their units should hear about all three at
//! once, not one per attempt. Each built-in check is an independent pure
//! function over the request context; `EnrollmentRules` unions their results
//! with any custom checks registered on the builder.
//!
//! # Example
//!
//! ```rust
//! use registrar::enforcement::{EnrollmentContext, EnrollmentRulesBuilder};
//! use registrar::core::{Course, Offering, Student};
//! use chrono::Utc;
//!
//! let rules = EnrollmentRulesBuilder::new()
//!     .min_passed_score(10.0)
//!     .require_pred(|ctx| ctx.offerings.len() <= 8, "At most 8 offerings".to_string())
//!     .build()
//!     .unwrap();
//!
//! let student = Student::new("1", "Bebe");
//! let requested = vec![Offering::new(Course::new("1", "ECO", 3).unwrap(), Utc::now())];
//! let context = EnrollmentContext::new(&student, &requested);
//!
//! assert!(rules.enforce(&context).is_success());
//! ```

pub mod builder;
pub mod checks;
pub mod context;
pub mod rules;
pub mod violations;

// Re-export commonly used types
pub use builder::EnrollmentRulesBuilder;
pub use checks::CheckResult;
pub use context::EnrollmentContext;
pub use rules::EnrollmentRules;
pub use violations::{EnrollmentViolation, ViolationKind};
