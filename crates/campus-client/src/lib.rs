//! campus-client - HTTP client for the campus LMS backend.
//!
//! All calls flow through an [`ApiClient`], which attaches the bearer
//! credential held by the injected credential store and transparently
//! repairs an expired access token with a one-shot refresh before
//! retrying the failed call.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use campus_client::ApiClient;
//! use campus_core::{ApiUrl, Credentials, MemoryStore};
//!
//! # async fn example() -> Result<(), campus_core::Error> {
//! let server = ApiUrl::new("https://lms.example.com")?;
//! let client = ApiClient::new(server, Arc::new(MemoryStore::new()));
//!
//! let credentials = Credentials::new("admin@lms.example.com", "password");
//! let user = client.login(&credentials).await?;
//! println!("Signed in as {}", user.name.as_deref().unwrap_or("unknown"));
//!
//! let metrics = client.dashboard_metrics().await?;
//! if let Some(data) = metrics.data {
//!     println!("{} students enrolled", data.total_student_enrolments);
//! }
//! # Ok(())
//! # }
//! ```

mod auth;
mod dashboard;
mod endpoints;
mod http;

pub use dashboard::{
    CategoryRef, CourseCategory, CourseOverview, CoursePerformance, DashboardMetrics,
    EmployeeListPage, EmployeeListQuery, EmployeeSummary, Envelope, FranchiseStudents, Pagination,
    TrainerRef,
};
pub use endpoints::RegisterRequest;
pub use http::ApiClient;
