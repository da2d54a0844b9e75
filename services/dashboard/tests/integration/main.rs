mod course_overview_test;
mod helpers;
mod router_test;
mod student_test;
