use academy_dashboard::domain::types::CourseFilter;
use academy_dashboard::usecase::course_overview::GetCourseOverviewUseCase;
use academy_dashboard::usecase::lookup::{GetDateBoundsUseCase, ListTeachersUseCase};
use academy_domain::course::Level;

use crate::helpers::{InMemoryAcademy, date, seeded_academy};

// ── Course overview filters ──────────────────────────────────────────────────

#[tokio::test]
async fn should_return_only_beginner_courses_in_first_half_of_2023() {
    let usecase = GetCourseOverviewUseCase {
        repo: seeded_academy(),
    };
    let filter = CourseFilter {
        teacher_id: None,
        levels: [Level::Beginner].into_iter().collect(),
        start_from: Some(date(2023, 1, 1)),
        start_to: Some(date(2023, 6, 30)),
    };
    let overview = usecase.execute(&filter).await.unwrap();

    let ids: Vec<i32> = overview.courses.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![1, 2, 4]);
    for course in &overview.courses {
        assert_eq!(course.level, Level::Beginner);
        assert!(course.start_date >= date(2023, 1, 1));
        assert!(course.start_date <= date(2023, 6, 30));
    }
    assert!(
        overview
            .courses
            .windows(2)
            .all(|w| w[0].start_date <= w[1].start_date)
    );
}

#[tokio::test]
async fn should_list_courses_without_enrollments_with_zero_counts() {
    let usecase = GetCourseOverviewUseCase {
        repo: seeded_academy(),
    };
    let overview = usecase.execute(&CourseFilter::default()).await.unwrap();

    let empty = overview.courses.iter().find(|c| c.id == 5).unwrap();
    assert_eq!(empty.total_enrollments, 0);
    assert_eq!(empty.active_count, 0);
    assert_eq!(empty.completed_count, 0);
    assert_eq!(empty.dropped_count, 0);

    let busy = overview.courses.iter().find(|c| c.id == 1).unwrap();
    assert_eq!(busy.total_enrollments, 3);
    assert_eq!(
        (busy.active_count, busy.completed_count, busy.dropped_count),
        (1, 1, 1)
    );
}

#[tokio::test]
async fn should_restrict_overview_to_selected_teacher() {
    let usecase = GetCourseOverviewUseCase {
        repo: seeded_academy(),
    };
    let filter = CourseFilter {
        teacher_id: Some(2),
        ..Default::default()
    };
    let overview = usecase.execute(&filter).await.unwrap();
    assert!(
        overview
            .courses
            .iter()
            .all(|c| c.teacher_name == "Alan Turing")
    );
    assert_eq!(overview.courses.len(), 2);
}

#[tokio::test]
async fn should_match_nothing_for_reversed_date_range() {
    let usecase = GetCourseOverviewUseCase {
        repo: seeded_academy(),
    };
    let filter = CourseFilter {
        start_from: Some(date(2023, 6, 30)),
        start_to: Some(date(2023, 1, 1)),
        ..Default::default()
    };
    let overview = usecase.execute(&filter).await.unwrap();
    assert!(overview.courses.is_empty());
    assert_eq!(overview.chart.height, 200);
}

#[tokio::test]
async fn should_chart_busiest_course_first() {
    let usecase = GetCourseOverviewUseCase {
        repo: seeded_academy(),
    };
    let overview = usecase.execute(&CourseFilter::default()).await.unwrap();
    assert_eq!(overview.top_courses[0].id, 1);
    assert_eq!(overview.chart.tooltip.len(), 7);
}

// ── Lookups ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_order_teacher_options_by_name() {
    let usecase = ListTeachersUseCase {
        repo: seeded_academy(),
    };
    let names: Vec<String> = usecase
        .execute()
        .await
        .unwrap()
        .into_iter()
        .map(|t| t.name)
        .collect();
    assert_eq!(names, vec!["Alan Turing", "Grace Hopper"]);
}

#[tokio::test]
async fn should_bound_dates_by_course_start_dates() {
    let usecase = GetDateBoundsUseCase {
        repo: seeded_academy(),
    };
    let bounds = usecase.execute().await.unwrap().unwrap();
    assert_eq!(bounds.min, date(2023, 1, 1));
    assert_eq!(bounds.max, date(2024, 1, 8));
}

#[tokio::test]
async fn should_have_no_date_bounds_without_courses() {
    let usecase = GetDateBoundsUseCase {
        repo: InMemoryAcademy::default(),
    };
    assert!(usecase.execute().await.unwrap().is_none());
}
