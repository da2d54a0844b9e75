use academy_dashboard::error::DashboardError;
use academy_dashboard::usecase::student::{
    CreateStudentInput, CreateStudentUseCase, GetStudentEnrollmentsUseCase,
    SampleStudentsUseCase, SearchStudentsUseCase,
};
use academy_domain::enrollment::EnrollmentStatus;

use crate::helpers::{date, seeded_academy};

fn new_student(email: &str, course_ids: Vec<i32>) -> CreateStudentInput {
    CreateStudentInput {
        first_name: "Dana".into(),
        last_name: "Scully".into(),
        email: email.into(),
        registration_date: None,
        course_ids,
    }
}

// ── Student search ───────────────────────────────────────────────────────────

#[tokio::test]
async fn should_find_full_name_regardless_of_case() {
    let usecase = SearchStudentsUseCase {
        repo: seeded_academy(),
    };
    let found = usecase.execute("aMANDA gIL").await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].email, "amanda.gill1@student.example.com");
}

#[tokio::test]
async fn should_order_matches_by_last_then_first_name() {
    let usecase = SearchStudentsUseCase {
        repo: seeded_academy(),
    };
    let names: Vec<String> = usecase
        .execute("gill")
        .await
        .unwrap()
        .iter()
        .map(|s| s.last_name.clone())
        .collect();
    assert_eq!(names, vec!["Gill", "Gillespie"]);
}

#[tokio::test]
async fn should_match_on_email() {
    let usecase = SearchStudentsUseCase {
        repo: seeded_academy(),
    };
    let found = usecase.execute("ng3@student").await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].first_name, "Chloe");
}

#[tokio::test]
async fn should_sample_students_by_id() {
    let usecase = SampleStudentsUseCase {
        repo: seeded_academy(),
    };
    let ids: Vec<i32> = usecase.execute().await.unwrap().iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[tokio::test]
async fn should_list_enrollments_newest_first() {
    let usecase = GetStudentEnrollmentsUseCase {
        repo: seeded_academy(),
    };
    let enrollments = usecase.execute(1).await.unwrap();
    assert_eq!(enrollments.len(), 2);
    assert!(enrollments[0].enrollment_date > enrollments[1].enrollment_date);
    assert_eq!(enrollments[1].status, EnrollmentStatus::Completed);
    assert!(enrollments[1].final_grade.is_some());
    assert!(enrollments[0].final_grade.is_none());
}

// ── Record writer ────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_reject_empty_email_and_create_nothing() {
    let academy = seeded_academy();
    let usecase = CreateStudentUseCase {
        repo: academy.clone(),
    };
    let result = usecase
        .execute(new_student("", vec![1, 2]), date(2025, 1, 15))
        .await;
    assert!(matches!(result, Err(DashboardError::Validation { .. })));
    assert_eq!(academy.student_count(), 3);
    assert_eq!(academy.enrollment_count(), 6);
}

#[tokio::test]
async fn should_reject_duplicate_email_and_create_nothing() {
    let academy = seeded_academy();
    let usecase = CreateStudentUseCase {
        repo: academy.clone(),
    };
    let result = usecase
        .execute(
            new_student("chloe.ng3@student.example.com", vec![1, 2]),
            date(2025, 1, 15),
        )
        .await;
    assert!(matches!(result, Err(DashboardError::DuplicateEmail)));
    assert_eq!(academy.student_count(), 3);
    assert_eq!(academy.enrollment_count(), 6);
}

#[tokio::test]
async fn should_create_student_with_active_enrollments_dated_today() {
    let academy = seeded_academy();
    let usecase = CreateStudentUseCase {
        repo: academy.clone(),
    };
    let today = date(2025, 1, 15);
    let created = usecase
        .execute(new_student("dana.scully@example.com", vec![2, 6, 2]), today)
        .await
        .unwrap();
    assert_eq!(created.student_id, 4);
    assert_eq!(created.enrollment_count, 2);

    let enrollments = academy.enrollments_of(4);
    assert_eq!(enrollments.len(), 2);
    assert!(enrollments.iter().all(|e| e.status == EnrollmentStatus::Active));
    assert!(enrollments.iter().all(|e| e.enrollment_date == today));
    assert!(enrollments.iter().all(|e| e.final_grade.is_none()));
}

#[tokio::test]
async fn should_create_student_without_enrollments() {
    let academy = seeded_academy();
    let usecase = CreateStudentUseCase {
        repo: academy.clone(),
    };
    let created = usecase
        .execute(new_student("dana@example.com", vec![]), date(2025, 1, 15))
        .await
        .unwrap();
    assert_eq!(created.enrollment_count, 0);
    assert_eq!(academy.student_count(), 4);
    assert!(academy.enrollments_of(created.student_id).is_empty());
}

#[tokio::test]
async fn should_surface_write_failure_message_and_create_nothing() {
    let academy = seeded_academy();
    let usecase = CreateStudentUseCase {
        repo: academy.clone(),
    };
    let result = usecase
        .execute(new_student("dana@example.com", vec![99]), date(2025, 1, 15))
        .await;
    match result {
        Err(DashboardError::WriteFailed(message)) => assert!(message.contains("99")),
        other => panic!("expected WriteFailed, got {other:?}"),
    }
    assert_eq!(academy.student_count(), 3);
}
