//! Property-based tests for the enrollment rules.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated catalogs, transcripts and requests.

use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;
use registrar::control::EnrollControl;
use registrar::core::{AcademicRecord, Course, Offering, Student, Term};
use registrar::enforcement::ViolationKind;
use registrar::policy::EnrollmentPolicy;

fn exam_slot(slot: u8) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 1, 9, 0, 0).unwrap() + Duration::hours(i64::from(slot))
}

prop_compose! {
    fn arbitrary_course()(id in 0..12u8, units in 1..5u32) -> Course {
        Course::new(format!("c{id}"), format!("COURSE{id}"), units).unwrap()
    }
}

prop_compose! {
    fn arbitrary_offering()(course in arbitrary_course(), slot in 0..8u8) -> Offering {
        Offering::new(course, exam_slot(slot))
    }
}

prop_compose! {
    fn arbitrary_student()(
        records in prop::collection::vec((arbitrary_course(), 0..4u8, 0.0..20.0f64), 0..8)
    ) -> Student {
        let mut student = Student::new("1", "Bebe");
        for (course, term, score) in records {
            student.add_transcript_record(course, Term::new(format!("Term{term}")), score);
        }
        student
    }
}

fn kind_counts(violations: &[registrar::EnrollmentViolation]) -> Vec<(ViolationKind, usize)> {
    let kinds = [
        ViolationKind::PassedBefore,
        ViolationKind::PrerequisiteMissing,
        ViolationKind::ExamTimeCollision,
        ViolationKind::DuplicateRequest,
        ViolationKind::UnitOverload,
    ];
    kinds
        .iter()
        .map(|kind| (*kind, violations.iter().filter(|v| v.kind() == *kind).count()))
        .collect()
}

proptest! {
    #[test]
    fn rejected_request_leaves_record_unchanged(
        student in arbitrary_student(),
        offerings in prop::collection::vec(arbitrary_offering(), 0..8)
    ) {
        let mut record = student.clone();
        let violations = EnrollControl::new().enroll(&mut record, &offerings);

        if !violations.is_empty() {
            prop_assert_eq!(record, student);
        }
    }

    #[test]
    fn accepted_request_commits_exactly_the_offerings(
        student in arbitrary_student(),
        offerings in prop::collection::vec(arbitrary_offering(), 0..8)
    ) {
        let mut record = student.clone();
        let violations = EnrollControl::new().enroll(&mut record, &offerings);

        if violations.is_empty() {
            prop_assert_eq!(record.current_term().len(), offerings.len());
            for (enrollment, offering) in record.current_term().iter().zip(&offerings) {
                prop_assert_eq!(&enrollment.course, offering.course());
                prop_assert_eq!(enrollment.section, offering.section());
            }
            prop_assert_eq!(record.transcript(), student.transcript());
        }
    }

    #[test]
    fn evaluate_is_deterministic(
        student in arbitrary_student(),
        offerings in prop::collection::vec(arbitrary_offering(), 0..8)
    ) {
        let control = EnrollControl::new();
        let first = control.evaluate(&student, &offerings);
        let second = control.evaluate(&student, &offerings);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn passed_course_is_always_rejected(
        student in arbitrary_student(),
        course in arbitrary_course(),
        term in 0..4u8,
        score in 10.0..20.0f64,
        others in prop::collection::vec(arbitrary_offering(), 0..5)
    ) {
        let mut student = student;
        student.add_transcript_record(course.clone(), Term::new(format!("Term{term}")), score);

        let mut offerings = others;
        offerings.push(Offering::new(course, exam_slot(200)));

        let violations = EnrollControl::new().evaluate(&student, &offerings);
        prop_assert!(violations.iter().any(|v| v.kind() == ViolationKind::PassedBefore));
    }

    #[test]
    fn every_missing_prerequisite_is_named(
        passed_mask in prop::collection::vec(any::<bool>(), 1..5)
    ) {
        let prerequisites: Vec<Course> = (0..passed_mask.len())
            .map(|i| Course::new(format!("p{i}"), format!("PRE{i}"), 1).unwrap())
            .collect();
        let target = Course::new("t", "TARGET", 3)
            .unwrap()
            .with_prerequisites(prerequisites.clone());

        let mut student = Student::new("1", "Bebe");
        for (course, passed) in prerequisites.iter().zip(&passed_mask) {
            let score = if *passed { 15.0 } else { 5.0 };
            student.add_transcript_record(course.clone(), Term::new("Term1"), score);
        }

        let violations = EnrollControl::new()
            .evaluate(&student, &[Offering::new(target, exam_slot(0))]);
        let missing = passed_mask.iter().filter(|passed| !**passed).count();

        prop_assert_eq!(violations.len(), missing);
        for (course, passed) in prerequisites.iter().zip(&passed_mask) {
            let named = violations
                .iter()
                .any(|v| v.to_string().contains(&format!("passed {} as", course.name())));
            prop_assert_eq!(named, !*passed);
        }
    }

    #[test]
    fn pairwise_checks_ignore_request_order(
        offerings in prop::collection::vec(arbitrary_offering(), 0..8),
        seed in any::<u64>()
    ) {
        let student = Student::new("1", "Bebe");
        let mut shuffled = offerings.clone();
        if !shuffled.is_empty() {
            let len = shuffled.len();
            shuffled.rotate_left((seed as usize) % len);
            shuffled.reverse();
        }

        let control = EnrollControl::new();
        let original = control.evaluate(&student, &offerings);
        let permuted = control.evaluate(&student, &shuffled);

        prop_assert_eq!(kind_counts(&original), kind_counts(&permuted));
    }

    #[test]
    fn unit_overload_matches_ceiling(
        units in prop::collection::vec(1..5u32, 0..8),
        gpa in 0.0..20.0f64
    ) {
        let offerings: Vec<Offering> = units
            .iter()
            .enumerate()
            .map(|(i, units)| {
                let course = Course::new(format!("u{i}"), format!("U{i}"), *units).unwrap();
                Offering::new(course, exam_slot(i as u8))
            })
            .collect();
        let student = Student::new("1", "Bebe").with_gpa(gpa);

        let total: u32 = units.iter().sum();
        let ceiling = EnrollmentPolicy::default().unit_ceiling(gpa);
        let violations = EnrollControl::new().evaluate(&student, &offerings);

        prop_assert_eq!(violations.is_empty(), total <= ceiling);
    }
}
