//! Dashboard read operations.
//!
//! Every dashboard endpoint wraps its payload in the conventional
//! `{success, message, data}` envelope; the employee directory is the
//! one exception, carrying its rows and pagination block at the top
//! level.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use campus_core::Error;

use crate::endpoints::{
    COURSE_CATEGORIES, COURSE_MANAGEMENT, COURSE_PERFORMANCE, DASHBOARD_METRICS, EMPLOYEE_LIST,
    FRANCHISE_STUDENT_COUNT, RECENT_COURSES, RECENT_STUDENTS, TOP_COURSES,
};
use crate::http::ApiClient;

/// Response envelope for dashboard read endpoints.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// The payload, when the backend reported success and included one.
    pub fn into_data(self) -> Option<T> {
        if self.success { self.data } else { None }
    }
}

/// KPI counters shown as dashboard tiles.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardMetrics {
    pub total_student_enrolments: u64,
    pub total_trainers: u64,
    pub total_franchises: u64,
    pub total_courses: u64,
    pub ongoing_courses: u64,
}

/// Per-course enrolment and placement numbers (bar chart data).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoursePerformance {
    pub course_name: String,
    pub total_students: u64,
    pub students_with_jobs: u64,
}

/// Student count for one franchise (pie chart data).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FranchiseStudents {
    pub franchise_name: String,
    pub student_count: u64,
}

/// A category reference nested in a course row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRef {
    pub name: String,
}

/// A trainer reference nested in a course row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainerRef {
    pub name: String,
}

/// One row of the course management table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseOverview {
    pub title: String,
    #[serde(default)]
    pub category: Option<CategoryRef>,
    #[serde(default)]
    pub duration: Option<String>,
    pub completion_status: String,
    pub total_students: u64,
    #[serde(default)]
    pub trainer: Option<TrainerRef>,
}

/// A course category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseCategory {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
}

/// Query parameters for the employee directory.
#[derive(Debug, Clone, Serialize)]
pub struct EmployeeListQuery {
    pub page: u32,
    pub page_size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl Default for EmployeeListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 10,
            search: None,
        }
    }
}

/// One row of the employee directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeSummary {
    #[serde(default)]
    pub employee_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub designation: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub contact_number: Option<String>,
    #[serde(default)]
    pub country_code: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub joining_date: Option<NaiveDate>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Pagination block returned with the employee directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pagination {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_count: u64,
    pub page_size: u32,
    pub has_next: bool,
    pub has_previous: bool,
}

/// One page of the employee directory.
#[derive(Debug, Deserialize)]
pub struct EmployeeListPage {
    pub success: bool,
    #[serde(default)]
    pub employees: Vec<EmployeeSummary>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

impl ApiClient {
    /// Fetch the KPI tile counters.
    #[instrument(skip(self), fields(server = %self.server()))]
    pub async fn dashboard_metrics(&self) -> Result<Envelope<DashboardMetrics>, Error> {
        debug!("Fetching dashboard metrics");
        self.get(DASHBOARD_METRICS).await
    }

    /// Fetch per-course enrolment and placement numbers.
    #[instrument(skip(self), fields(server = %self.server()))]
    pub async fn course_performance(&self) -> Result<Envelope<Vec<CoursePerformance>>, Error> {
        debug!("Fetching course performance");
        self.get(COURSE_PERFORMANCE).await
    }

    /// Fetch student counts per franchise.
    #[instrument(skip(self), fields(server = %self.server()))]
    pub async fn franchise_student_count(&self) -> Result<Envelope<Vec<FranchiseStudents>>, Error> {
        debug!("Fetching franchise student counts");
        self.get(FRANCHISE_STUDENT_COUNT).await
    }

    /// Fetch the course management table rows.
    #[instrument(skip(self), fields(server = %self.server()))]
    pub async fn course_management(&self) -> Result<Envelope<Vec<CourseOverview>>, Error> {
        debug!("Fetching course management rows");
        self.get(COURSE_MANAGEMENT).await
    }

    /// Fetch one page of the employee directory.
    #[instrument(skip(self), fields(server = %self.server(), page = query.page))]
    pub async fn employee_list(&self, query: &EmployeeListQuery) -> Result<EmployeeListPage, Error> {
        debug!("Fetching employee directory page");
        self.get_with(EMPLOYEE_LIST, query).await
    }

    /// Fetch the course category list.
    #[instrument(skip(self), fields(server = %self.server()))]
    pub async fn course_categories(&self) -> Result<Envelope<Vec<CourseCategory>>, Error> {
        debug!("Fetching course categories");
        self.get(COURSE_CATEGORIES).await
    }

    /// Fetch the most recently added courses.
    ///
    /// The payload shape is not contractual; it is passed through as
    /// raw JSON.
    #[instrument(skip(self), fields(server = %self.server()))]
    pub async fn recent_courses(&self) -> Result<Envelope<serde_json::Value>, Error> {
        debug!("Fetching recent courses");
        self.get(RECENT_COURSES).await
    }

    /// Fetch the most recently enrolled students.
    ///
    /// The payload shape is not contractual; it is passed through as
    /// raw JSON.
    #[instrument(skip(self), fields(server = %self.server()))]
    pub async fn recent_students(&self) -> Result<Envelope<serde_json::Value>, Error> {
        debug!("Fetching recent students");
        self.get(RECENT_STUDENTS).await
    }

    /// Fetch the highest-enrolment courses.
    ///
    /// The payload shape is not contractual; it is passed through as
    /// raw JSON.
    #[instrument(skip(self), fields(server = %self.server()))]
    pub async fn top_courses(&self) -> Result<Envelope<serde_json::Value>, Error> {
        debug!("Fetching top courses");
        self.get(TOP_COURSES).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn envelope_decodes_with_data() {
        let envelope: Envelope<DashboardMetrics> = serde_json::from_value(json!({
            "success": true,
            "message": "ok",
            "data": {
                "total_student_enrolments": 1250,
                "total_trainers": 42,
                "total_franchises": 6,
                "total_courses": 31,
                "ongoing_courses": 12
            }
        }))
        .unwrap();

        let data = envelope.into_data().unwrap();
        assert_eq!(data.total_student_enrolments, 1250);
        assert_eq!(data.ongoing_courses, 12);
    }

    #[test]
    fn envelope_failure_discards_payload() {
        let envelope: Envelope<DashboardMetrics> = serde_json::from_value(json!({
            "success": false,
            "message": "API failed",
            "data": null
        }))
        .unwrap();

        assert_eq!(envelope.message, "API failed");
        assert!(envelope.into_data().is_none());
    }

    #[test]
    fn envelope_tolerates_missing_fields() {
        let envelope: Envelope<Vec<CoursePerformance>> =
            serde_json::from_value(json!({ "success": true })).unwrap();
        assert!(envelope.message.is_empty());
        assert!(envelope.data.is_none());
    }

    #[test]
    fn employee_page_decodes_pagination() {
        let page: EmployeeListPage = serde_json::from_value(json!({
            "success": true,
            "employees": [
                {
                    "employee_id": "EMP001",
                    "name": "Alice Kumar",
                    "designation": "Trainer",
                    "department": "Engineering",
                    "joining_date": "2023-04-01",
                    "created_at": "2023-04-01T09:30:00Z"
                }
            ],
            "pagination": {
                "current_page": 1,
                "total_pages": 3,
                "total_count": 25,
                "page_size": 10,
                "has_next": true,
                "has_previous": false
            }
        }))
        .unwrap();

        assert_eq!(page.employees.len(), 1);
        assert_eq!(page.employees[0].name.as_deref(), Some("Alice Kumar"));
        let pagination = page.pagination.unwrap();
        assert_eq!(pagination.total_pages, 3);
        assert!(pagination.has_next);
    }

    #[test]
    fn course_row_tolerates_missing_trainer_and_category() {
        let row: CourseOverview = serde_json::from_value(json!({
            "title": "Web Development",
            "completion_status": "Active",
            "total_students": 40
        }))
        .unwrap();
        assert!(row.trainer.is_none());
        assert!(row.category.is_none());
        assert!(row.duration.is_none());
    }
}
