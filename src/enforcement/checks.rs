//! The built-in enrollment checks.
//!
//! Every check is a pure function of the request context and the policy. None
//! of them stop early: each reports all of the violations it finds, and
//! [`EnrollmentRules`](crate::enforcement::EnrollmentRules) unions their
//! results.

use crate::enforcement::context::EnrollmentContext;
use crate::enforcement::violations::EnrollmentViolation;
use crate::policy::EnrollmentPolicy;
use std::collections::BTreeSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Outcome of a single check
pub type CheckResult = Validation<(), NonEmptyVec<EnrollmentViolation>>;

/// Turn a list of violations into a check outcome, success when empty.
pub(crate) fn accumulate<I>(violations: I) -> CheckResult
where
    I: IntoIterator<Item = EnrollmentViolation>,
{
    let checks: Vec<CheckResult> = violations
        .into_iter()
        .map(|violation| Validation::fail(violation))
        .collect();
    Validation::all_vec(checks).map(|_| ())
}

/// A requested course must not have a passing score in any term.
///
/// Each passed course is reported once even if requested more than once.
pub fn already_passed(ctx: &EnrollmentContext<'_>, policy: &EnrollmentPolicy) -> CheckResult {
    let mut reported = BTreeSet::new();
    let violations: Vec<_> = ctx
        .offerings
        .iter()
        .map(|offering| offering.course())
        .filter(|course| {
            ctx.transcript
                .has_passed(course.id(), policy.min_passed_score)
        })
        .filter(|course| reported.insert(course.id().clone()))
        .map(|course| EnrollmentViolation::AlreadyPassed {
            course: course.name().to_string(),
        })
        .collect();
    accumulate(violations)
}

/// Every prerequisite of a requested course must be passed in some term.
pub fn prerequisites_passed(
    ctx: &EnrollmentContext<'_>,
    policy: &EnrollmentPolicy,
) -> CheckResult {
    let passed = ctx.transcript.passed_courses(policy.min_passed_score);
    let mut reported = BTreeSet::new();
    let mut violations = Vec::new();

    for offering in ctx.offerings {
        let course = offering.course();
        for prerequisite in course.prerequisites() {
            if passed.contains(prerequisite.id()) {
                continue;
            }
            if reported.insert((prerequisite.id().clone(), course.id().clone())) {
                violations.push(EnrollmentViolation::PrerequisiteMissing {
                    prerequisite: prerequisite.name().to_string(),
                    course: course.name().to_string(),
                });
            }
        }
    }

    accumulate(violations)
}

/// No two requested offerings may share an exam time. Reports each pair.
pub fn exam_times_distinct(ctx: &EnrollmentContext<'_>) -> CheckResult {
    let offerings = ctx.offerings;
    let mut violations = Vec::new();

    for (i, first) in offerings.iter().enumerate() {
        for second in &offerings[i + 1..] {
            if first.exam_time() == second.exam_time() {
                violations.push(EnrollmentViolation::ExamTimeCollision {
                    first: first.to_string(),
                    second: second.to_string(),
                });
            }
        }
    }

    accumulate(violations)
}

/// A course may be requested only once. Reports each duplicated course once.
pub fn courses_distinct(ctx: &EnrollmentContext<'_>) -> CheckResult {
    let offerings = ctx.offerings;
    let mut reported = BTreeSet::new();
    let mut violations = Vec::new();

    for (i, offering) in offerings.iter().enumerate() {
        let course = offering.course();
        let seen_before = offerings[..i].iter().any(|o| o.course() == course);
        if seen_before && reported.insert(course.id().clone()) {
            violations.push(EnrollmentViolation::DuplicateCourse {
                course: course.name().to_string(),
            });
        }
    }

    accumulate(violations)
}

/// Requested units must fit the ceiling of the student's GPA tier and the
/// hard ceiling. Exactly-at-ceiling is allowed.
pub fn unit_load_within_limit(
    ctx: &EnrollmentContext<'_>,
    policy: &EnrollmentPolicy,
) -> CheckResult {
    let requested = ctx.requested_units();
    let overloaded =
        requested > policy.unit_ceiling(ctx.gpa) || requested > policy.privileged_max_units;

    if overloaded {
        accumulate([EnrollmentViolation::UnitOverload {
            requested,
            gpa: ctx.gpa,
        }])
    } else {
        Validation::success(())
    }
}
