//! Evaluate enrollment requests and commit accepted ones.

use crate::control::report::EnrollmentReport;
use crate::core::{AcademicRecord, Offering};
use crate::enforcement::{EnrollmentContext, EnrollmentRules, EnrollmentViolation};

/// Runs the enrollment rules against a record and commits on success.
///
/// # Example
///
/// ```rust
/// use registrar::control::EnrollControl;
/// use registrar::core::{Course, Offering, Student, Term};
/// use chrono::Utc;
///
/// let math1 = Course::new("4", "MATH1", 3).unwrap();
/// let math2 = Course::new("6", "MATH2", 3).unwrap().with_prerequisites([math1.clone()]);
///
/// let mut student = Student::new("1", "Bebe");
/// let control = EnrollControl::new();
///
/// let requested = vec![Offering::new(math2.clone(), Utc::now())];
/// let violations = control.enroll(&mut student, &requested);
/// assert_eq!(violations.len(), 1);
/// assert!(student.current_term().is_empty());
///
/// student.add_transcript_record(math1, Term::new("Term1"), 14.0);
/// let violations = control.enroll(&mut student, &requested);
/// assert!(violations.is_empty());
/// assert!(student.has_taken(&math2));
/// ```
#[derive(Default)]
pub struct EnrollControl {
    rules: EnrollmentRules,
}

impl EnrollControl {
    /// Control with the default policy and no custom checks
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rules(rules: EnrollmentRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &EnrollmentRules {
        &self.rules
    }

    /// Every violation the request would trigger (pure)
    pub fn evaluate<R>(&self, record: &R, offerings: &[Offering]) -> Vec<EnrollmentViolation>
    where
        R: AcademicRecord + ?Sized,
    {
        let context = EnrollmentContext::new(record, offerings);
        self.rules.violations(&context)
    }

    /// Evaluate the request and, only if nothing is violated, commit every
    /// offering to the record's current term in request order.
    ///
    /// Returns the violations; an empty list means the offerings were committed.
    pub fn enroll<R>(&self, record: &mut R, offerings: &[Offering]) -> Vec<EnrollmentViolation>
    where
        R: AcademicRecord + ?Sized,
    {
        let violations = self.evaluate(&*record, offerings);
        if violations.is_empty() {
            for offering in offerings {
                record.commit(offering.course(), offering.section());
            }
        }
        violations
    }

    /// Summarize how the rules see the request (pure)
    pub fn report<R>(&self, record: &R, offerings: &[Offering]) -> EnrollmentReport
    where
        R: AcademicRecord + ?Sized,
    {
        let context = EnrollmentContext::new(record, offerings);
        let policy = self.rules.policy();

        EnrollmentReport {
            requested_units: context.requested_units(),
            gpa: context.gpa,
            tier: policy.tier(context.gpa),
            unit_ceiling: policy.unit_ceiling(context.gpa),
            violations: self.rules.violations(&context),
        }
    }
}
