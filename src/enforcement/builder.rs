//! Builder API for creating enrollment rules.

use crate::enforcement::checks::{accumulate, CheckResult};
use crate::enforcement::context::EnrollmentContext;
use crate::enforcement::rules::{EnrollmentRules, ValidationCheck};
use crate::enforcement::violations::EnrollmentViolation;
use crate::policy::{EnrollmentPolicy, PolicyError};
use stillwater::validation::Validation;

/// Builder for creating enrollment rules
pub struct EnrollmentRulesBuilder {
    policy: EnrollmentPolicy,
    required_checks: Vec<ValidationCheck>,
}

impl EnrollmentRulesBuilder {
    pub fn new() -> Self {
        Self {
            policy: EnrollmentPolicy::default(),
            required_checks: Vec::new(),
        }
    }

    /// Replace the whole policy
    pub fn policy(mut self, policy: EnrollmentPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set the lowest score that counts as passed
    pub fn min_passed_score(mut self, score: f64) -> Self {
        self.policy.min_passed_score = score;
        self
    }

    /// Set the GPA borders of the unqualified and privileged tiers
    pub fn gpa_borders(mut self, unqualified: f64, privileged: f64) -> Self {
        self.policy.unqualified_gpa_border = unqualified;
        self.policy.privileged_gpa_border = privileged;
        self
    }

    /// Set the unit ceilings of the three tiers
    pub fn unit_ceilings(mut self, unqualified: u32, general: u32, privileged: u32) -> Self {
        self.policy.unqualified_max_units = unqualified;
        self.policy.general_max_units = general;
        self.policy.privileged_max_units = privileged;
        self
    }

    /// Add a custom validation check
    pub fn require<F>(mut self, check: F) -> Self
    where
        F: Fn(&EnrollmentContext<'_>) -> CheckResult + Send + Sync + 'static,
    {
        self.required_checks.push(Box::new(check));
        self
    }

    /// Add a simple predicate check with error message
    pub fn require_pred<F>(mut self, predicate: F, error_msg: String) -> Self
    where
        F: Fn(&EnrollmentContext<'_>) -> bool + Send + Sync + 'static,
    {
        let check = move |ctx: &EnrollmentContext<'_>| {
            if predicate(ctx) {
                Validation::success(())
            } else {
                accumulate([EnrollmentViolation::Custom {
                    message: error_msg.clone(),
                }])
            }
        };
        self.required_checks.push(Box::new(check));
        self
    }

    /// Build the enrollment rules.
    ///
    /// Fails if the policy assembled by the setters is inconsistent.
    pub fn build(self) -> Result<EnrollmentRules, PolicyError> {
        self.policy.validate()?;

        Ok(EnrollmentRules {
            policy: self.policy,
            required_checks: self.required_checks,
        })
    }
}

impl Default for EnrollmentRulesBuilder {
    fn default() -> Self {
        Self::new()
    }
}
