//! Enrollment rules evaluated using Validation.

use crate::enforcement::checks::{self, CheckResult};
use crate::enforcement::context::EnrollmentContext;
use crate::enforcement::violations::EnrollmentViolation;
use crate::policy::EnrollmentPolicy;
use stillwater::validation::Validation;

/// Type alias for custom validation check functions
pub type ValidationCheck = Box<dyn Fn(&EnrollmentContext<'_>) -> CheckResult + Send + Sync>;

/// Enrollment rules for a term.
/// Uses Validation to accumulate ALL violations.
pub struct EnrollmentRules {
    pub(crate) policy: EnrollmentPolicy,
    pub(crate) required_checks: Vec<ValidationCheck>,
}

impl EnrollmentRules {
    /// Rules with the default policy and no custom checks.
    pub fn new() -> Self {
        Self::with_policy(EnrollmentPolicy::default())
    }

    /// Rules using `policy` as given. Use [`EnrollmentRulesBuilder::build`] or
    /// [`EnrollmentPolicy::from_json`] to get a validated policy.
    ///
    /// [`EnrollmentRulesBuilder::build`]: crate::enforcement::EnrollmentRulesBuilder::build
    pub fn with_policy(policy: EnrollmentPolicy) -> Self {
        Self {
            policy,
            required_checks: Vec::new(),
        }
    }

    /// Enforce all rules, accumulating ALL violations.
    /// Returns Validation::Success(()) if all checks pass.
    /// Returns Validation::Failure with ALL violations if any fail.
    pub fn enforce(&self, context: &EnrollmentContext<'_>) -> CheckResult {
        let policy = &self.policy;
        let mut results = vec![
            checks::already_passed(context, policy),
            checks::prerequisites_passed(context, policy),
            checks::exam_times_distinct(context),
            checks::courses_distinct(context),
            checks::unit_load_within_limit(context, policy),
        ];

        for check_fn in &self.required_checks {
            results.push(check_fn(context));
        }

        Validation::all_vec(results).map(|_| ())
    }

    /// Enforce all rules and flatten the outcome into a list, empty on success.
    pub fn violations(&self, context: &EnrollmentContext<'_>) -> Vec<EnrollmentViolation> {
        match self.enforce(context) {
            Validation::Success(()) => Vec::new(),
            Validation::Failure(errors) => errors.iter().cloned().collect(),
        }
    }

    pub fn policy(&self) -> &EnrollmentPolicy {
        &self.policy
    }
}

impl Default for EnrollmentRules {
    fn default() -> Self {
        Self::new()
    }
}
