use anyhow::Context as _;
use chrono::NaiveDate;
use sea_orm::sea_query::{Alias, Asterisk, Expr, Func, Order, Query, SelectStatement, SimpleExpr};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, Condition, ConnectionTrait,
    DatabaseConnection, DbErr, EntityTrait, FromQueryResult, JoinType, QueryFilter, QueryOrder,
    QuerySelect, QueryTrait, RelationTrait, Select, SqlErr, TransactionError, TransactionTrait,
};

use academy_core::sea_ext::contains_ignore_case;
use academy_dashboard_schema::{course, enrollment, student, teacher};
use academy_domain::course::Level;
use academy_domain::enrollment::{EnrollmentStatus, Grade};

use crate::domain::insight::{InsightRow, NamedQuery};
use crate::domain::repository::{
    CourseRepository, InsightRepository, StudentRepository, TeacherRepository,
};
use crate::domain::types::{
    CourseFilter, CourseOption, CoursePredicate, CourseStats, DateBounds, NewStudent, Student,
    StudentEnrollment, TeacherOption,
};
use crate::error::DashboardError;

// ── Error classification ─────────────────────────────────────────────────────

fn is_connectivity(err: &DbErr) -> bool {
    matches!(err, DbErr::Conn(_) | DbErr::ConnectionAcquire(_))
}

/// Read failures: lost connectivity becomes `StorageUnavailable`, anything
/// else `Internal`.
fn read_error(context: &'static str) -> impl FnOnce(DbErr) -> DashboardError {
    move |err| {
        if is_connectivity(&err) {
            DashboardError::StorageUnavailable(anyhow::Error::new(err).context(context))
        } else {
            DashboardError::Internal(anyhow::Error::new(err).context(context))
        }
    }
}

fn is_duplicate_email(err: &DbErr) -> bool {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(message)) => message.contains("email"),
        _ => {
            let message = err.to_string();
            message.contains("duplicate key value violates unique constraint")
                && message.contains("email")
        }
    }
}

fn classify_write_error(err: TransactionError<DbErr>) -> DashboardError {
    let err = match err {
        TransactionError::Connection(e) | TransactionError::Transaction(e) => e,
    };
    if is_connectivity(&err) {
        DashboardError::StorageUnavailable(anyhow::Error::new(err).context("create student"))
    } else if is_duplicate_email(&err) {
        DashboardError::DuplicateEmail
    } else {
        DashboardError::WriteFailed(err.to_string())
    }
}

// ── Shared expressions ───────────────────────────────────────────────────────

/// `first_name || ' ' || last_name` over the given columns.
fn full_name(first: SimpleExpr, last: SimpleExpr) -> SimpleExpr {
    Expr::cust_with_exprs("$1 || ' ' || $2", [first, last])
}

fn teacher_name() -> SimpleExpr {
    full_name(
        Expr::col((teacher::Entity, teacher::Column::FirstName)).into(),
        Expr::col((teacher::Entity, teacher::Column::LastName)).into(),
    )
}

/// `SUM(CASE WHEN enrollment.status = '<status>' THEN 1 ELSE 0 END)`
fn status_count(status: EnrollmentStatus) -> SimpleExpr {
    Func::sum(
        Expr::case(
            Expr::col((enrollment::Entity, enrollment::Column::Status)).eq(status.as_str()),
            Expr::cust("1"),
        )
        .finally(Expr::cust("0")),
    )
    .into()
}

fn parse_level(raw: &str) -> Result<Level, DashboardError> {
    Ok(raw.parse::<Level>().context("decode course level")?)
}

// ── Course repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbCourseRepository {
    pub db: DatabaseConnection,
}

fn predicate_expr(predicate: &CoursePredicate) -> SimpleExpr {
    match predicate {
        CoursePredicate::Teacher(id) => course::Column::TeacherId.eq(*id),
        CoursePredicate::LevelIn(levels) => {
            course::Column::Level.is_in(levels.iter().map(Level::as_str))
        }
        CoursePredicate::StartOnOrAfter(from) => course::Column::StartDate.gte(*from),
        CoursePredicate::StartOnOrBefore(to) => course::Column::StartDate.lte(*to),
    }
}

/// Courses joined to their teacher and (left) to their enrollments, one row
/// per course with conditional counts.
fn course_stats_select(filter: &CourseFilter) -> Select<course::Entity> {
    let predicates = filter.predicates();
    let mut select = course::Entity::find()
        .select_only()
        .column(course::Column::Id)
        .column(course::Column::Title)
        .column(course::Column::Level)
        .column(course::Column::StartDate)
        .column(course::Column::EndDate)
        .column_as(teacher_name(), "teacher_name")
        .column_as(
            Expr::col((enrollment::Entity, enrollment::Column::Id)).count(),
            "total_enrollments",
        )
        .column_as(status_count(EnrollmentStatus::Active), "active_count")
        .column_as(status_count(EnrollmentStatus::Completed), "completed_count")
        .column_as(status_count(EnrollmentStatus::Dropped), "dropped_count")
        .join(JoinType::InnerJoin, course::Relation::Teacher.def())
        .join(JoinType::LeftJoin, course::Relation::Enrollments.def());
    if !predicates.is_empty() {
        let condition = predicates
            .iter()
            .fold(Condition::all(), |cond, p| cond.add(predicate_expr(p)));
        select = select.filter(condition);
    }
    select
        .group_by(course::Column::Id)
        .group_by(teacher::Column::Id)
        .order_by_asc(course::Column::StartDate)
        .order_by_asc(course::Column::Id)
}

#[derive(Debug, FromQueryResult)]
struct CourseStatsRow {
    id: i32,
    title: String,
    level: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    teacher_name: String,
    total_enrollments: i64,
    active_count: i64,
    completed_count: i64,
    dropped_count: i64,
}

#[derive(Debug, FromQueryResult)]
struct DateBoundsRow {
    min_start: Option<NaiveDate>,
    max_start: Option<NaiveDate>,
}

impl CourseRepository for DbCourseRepository {
    async fn course_stats(
        &self,
        filter: &CourseFilter,
    ) -> Result<Vec<CourseStats>, DashboardError> {
        let rows = course_stats_select(filter)
            .into_model::<CourseStatsRow>()
            .all(&self.db)
            .await
            .map_err(read_error("course overview"))?;
        rows.into_iter()
            .map(|row| {
                Ok(CourseStats {
                    id: row.id,
                    title: row.title,
                    level: parse_level(&row.level)?,
                    start_date: row.start_date,
                    end_date: row.end_date,
                    teacher_name: row.teacher_name,
                    total_enrollments: row.total_enrollments,
                    active_count: row.active_count,
                    completed_count: row.completed_count,
                    dropped_count: row.dropped_count,
                })
            })
            .collect()
    }

    async fn list_options(&self) -> Result<Vec<CourseOption>, DashboardError> {
        let models = course::Entity::find()
            .order_by_asc(course::Column::StartDate)
            .order_by_asc(course::Column::Id)
            .all(&self.db)
            .await
            .map_err(read_error("list courses"))?;
        models
            .into_iter()
            .map(|m| {
                Ok(CourseOption {
                    id: m.id,
                    level: parse_level(&m.level)?,
                    title: m.title,
                    start_date: m.start_date,
                    end_date: m.end_date,
                    teacher_id: m.teacher_id,
                })
            })
            .collect()
    }

    async fn start_date_bounds(&self) -> Result<Option<DateBounds>, DashboardError> {
        let row = course::Entity::find()
            .select_only()
            .column_as(course::Column::StartDate.min(), "min_start")
            .column_as(course::Column::StartDate.max(), "max_start")
            .into_model::<DateBoundsRow>()
            .one(&self.db)
            .await
            .map_err(read_error("course date bounds"))?;
        Ok(match row {
            Some(DateBoundsRow {
                min_start: Some(min),
                max_start: Some(max),
            }) => Some(DateBounds { min, max }),
            _ => None,
        })
    }
}

// ── Teacher repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbTeacherRepository {
    pub db: DatabaseConnection,
}

#[derive(Debug, FromQueryResult)]
struct TeacherOptionRow {
    id: i32,
    name: String,
}

impl TeacherRepository for DbTeacherRepository {
    async fn list_options(&self) -> Result<Vec<TeacherOption>, DashboardError> {
        let rows = teacher::Entity::find()
            .select_only()
            .column(teacher::Column::Id)
            .column_as(teacher_name(), "name")
            .order_by(teacher_name(), Order::Asc)
            .order_by_asc(teacher::Column::Id)
            .into_model::<TeacherOptionRow>()
            .all(&self.db)
            .await
            .map_err(read_error("list teachers"))?;
        Ok(rows
            .into_iter()
            .map(|r| TeacherOption {
                id: r.id,
                name: r.name,
            })
            .collect())
    }
}

// ── Student repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbStudentRepository {
    pub db: DatabaseConnection,
}

fn student_search_condition(term: &str) -> Condition {
    let col = |c: student::Column| -> SimpleExpr { Expr::col((student::Entity, c)).into() };
    Condition::any()
        .add(contains_ignore_case(col(student::Column::FirstName), term))
        .add(contains_ignore_case(col(student::Column::LastName), term))
        .add(contains_ignore_case(
            full_name(col(student::Column::FirstName), col(student::Column::LastName)),
            term,
        ))
        .add(contains_ignore_case(col(student::Column::Email), term))
}

fn student_from_model(model: student::Model) -> Student {
    Student {
        id: model.id,
        first_name: model.first_name,
        last_name: model.last_name,
        email: model.email,
        registration_date: model.registration_date,
    }
}

#[derive(Debug, FromQueryResult)]
struct StudentEnrollmentRow {
    id: i32,
    course_title: String,
    level: String,
    enrollment_date: NaiveDate,
    status: String,
    final_grade: Option<String>,
}

impl StudentRepository for DbStudentRepository {
    async fn search(&self, term: &str, limit: u64) -> Result<Vec<Student>, DashboardError> {
        let models = student::Entity::find()
            .filter(student_search_condition(term))
            .order_by_asc(student::Column::LastName)
            .order_by_asc(student::Column::FirstName)
            .order_by_asc(student::Column::Id)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(read_error("search students"))?;
        Ok(models.into_iter().map(student_from_model).collect())
    }

    async fn sample(&self, limit: u64) -> Result<Vec<Student>, DashboardError> {
        let models = student::Entity::find()
            .order_by_asc(student::Column::Id)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(read_error("sample students"))?;
        Ok(models.into_iter().map(student_from_model).collect())
    }

    async fn enrollments(
        &self,
        student_id: i32,
    ) -> Result<Vec<StudentEnrollment>, DashboardError> {
        let rows = enrollment::Entity::find()
            .select_only()
            .column(enrollment::Column::Id)
            .column_as(course::Column::Title, "course_title")
            .column(course::Column::Level)
            .column(enrollment::Column::EnrollmentDate)
            .column(enrollment::Column::Status)
            .column(enrollment::Column::FinalGrade)
            .join(JoinType::InnerJoin, enrollment::Relation::Course.def())
            .filter(enrollment::Column::StudentId.eq(student_id))
            .order_by_desc(enrollment::Column::EnrollmentDate)
            .order_by_desc(enrollment::Column::Id)
            .into_model::<StudentEnrollmentRow>()
            .all(&self.db)
            .await
            .map_err(read_error("list student enrollments"))?;
        rows.into_iter()
            .map(|row| {
                let final_grade = match row.final_grade.as_deref().map(str::trim) {
                    None | Some("") => None,
                    Some(raw) => Some(raw.parse::<Grade>().context("decode final grade")?),
                };
                Ok(StudentEnrollment {
                    id: row.id,
                    course_title: row.course_title,
                    level: parse_level(&row.level)?,
                    enrollment_date: row.enrollment_date,
                    status: row
                        .status
                        .parse::<EnrollmentStatus>()
                        .context("decode enrollment status")?,
                    final_grade,
                })
            })
            .collect()
    }

    async fn create_with_enrollments(
        &self,
        new_student: &NewStudent,
        course_ids: &[i32],
        enrollment_date: NaiveDate,
    ) -> Result<i32, DashboardError> {
        let new_student = new_student.clone();
        let course_ids = course_ids.to_vec();
        self.db
            .transaction::<_, i32, DbErr>(|txn| {
                Box::pin(async move {
                    let created = student::ActiveModel {
                        first_name: Set(new_student.first_name),
                        last_name: Set(new_student.last_name),
                        email: Set(new_student.email),
                        registration_date: Set(new_student.registration_date),
                        ..Default::default()
                    }
                    .insert(txn)
                    .await?;

                    if !course_ids.is_empty() {
                        let rows = course_ids.iter().map(|&course_id| enrollment::ActiveModel {
                            student_id: Set(created.id),
                            course_id: Set(course_id),
                            enrollment_date: Set(enrollment_date),
                            status: Set(EnrollmentStatus::Active.as_str().to_owned()),
                            final_grade: Set(None),
                            ..Default::default()
                        });
                        enrollment::Entity::insert_many(rows)
                            .exec_without_returning(txn)
                            .await?;
                    }
                    Ok(created.id)
                })
            })
            .await
            .map_err(classify_write_error)
    }
}

// ── Insight repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbInsightRepository {
    pub db: DatabaseConnection,
}

/// The statement behind each named query. Column aliases match
/// [`NamedQuery::category_column`] and [`NamedQuery::value_column`]; keyed
/// queries also select `id`.
fn insight_select(query: NamedQuery) -> SelectStatement {
    let category = Alias::new(query.category_column());
    let value = Alias::new(query.value_column());
    match query {
        NamedQuery::StudentsPerCourse => Query::select()
            .expr_as(Expr::col((course::Entity, course::Column::Id)), Alias::new("id"))
            .expr_as(Expr::col((course::Entity, course::Column::Title)), category)
            .expr_as(
                Expr::col((enrollment::Entity, enrollment::Column::StudentId)).count(),
                value.clone(),
            )
            .from(course::Entity)
            .left_join(
                enrollment::Entity,
                Expr::col((enrollment::Entity, enrollment::Column::CourseId))
                    .equals((course::Entity, course::Column::Id)),
            )
            .group_by_col((course::Entity, course::Column::Id))
            .order_by(value, Order::Desc)
            .order_by((course::Entity, course::Column::Title), Order::Asc)
            .to_owned(),
        NamedQuery::StatusDistribution => Query::select()
            .expr_as(
                Expr::col((enrollment::Entity, enrollment::Column::Status)),
                category,
            )
            .expr_as(Expr::col(Asterisk).count(), value.clone())
            .from(enrollment::Entity)
            .group_by_col((enrollment::Entity, enrollment::Column::Status))
            .order_by(value, Order::Desc)
            .to_owned(),
        NamedQuery::ActiveEnrollmentsPerLevel => Query::select()
            .expr_as(Expr::col((course::Entity, course::Column::Level)), category)
            .expr_as(
                Expr::col((enrollment::Entity, enrollment::Column::Id)).count(),
                value.clone(),
            )
            .from(enrollment::Entity)
            .inner_join(
                course::Entity,
                Expr::col((course::Entity, course::Column::Id))
                    .equals((enrollment::Entity, enrollment::Column::CourseId)),
            )
            .and_where(
                Expr::col((enrollment::Entity, enrollment::Column::Status))
                    .eq(EnrollmentStatus::Active.as_str()),
            )
            .group_by_col((course::Entity, course::Column::Level))
            .order_by(value, Order::Desc)
            .to_owned(),
        NamedQuery::CoursesPerTeacher => Query::select()
            .expr_as(Expr::col((teacher::Entity, teacher::Column::Id)), Alias::new("id"))
            .expr_as(teacher_name(), category.clone())
            .expr_as(
                Expr::col((course::Entity, course::Column::Id)).count(),
                value.clone(),
            )
            .from(teacher::Entity)
            .left_join(
                course::Entity,
                Expr::col((course::Entity, course::Column::TeacherId))
                    .equals((teacher::Entity, teacher::Column::Id)),
            )
            .group_by_col((teacher::Entity, teacher::Column::Id))
            .order_by(value, Order::Desc)
            .order_by(category, Order::Asc)
            .to_owned(),
    }
}

impl InsightRepository for DbInsightRepository {
    async fn run(&self, query: NamedQuery) -> Result<Vec<InsightRow>, DashboardError> {
        let backend = self.db.get_database_backend();
        let rows = self
            .db
            .query_all(backend.build(&insight_select(query)))
            .await
            .map_err(read_error("run named query"))?;
        rows.iter()
            .map(|row| {
                let key = if query.is_keyed() {
                    Some(row.try_get::<i32>("", "id").context("read insight key")?)
                } else {
                    None
                };
                Ok(InsightRow {
                    key,
                    category: row
                        .try_get::<String>("", query.category_column())
                        .context("read insight category")?,
                    value: row
                        .try_get::<i64>("", query.value_column())
                        .context("read insight value")?,
                })
            })
            .collect()
    }

    fn sql(&self, query: NamedQuery) -> String {
        self.db
            .get_database_backend()
            .build(&insight_select(query))
            .to_string()
    }
}
