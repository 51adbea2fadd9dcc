//! Backend endpoint paths and request/response types.

#![allow(dead_code)]

use serde::{Deserialize, Serialize};

use campus_core::UserProfile;

// ============================================================================
// Endpoint Paths
// ============================================================================

/// POST - obtain a token pair from email + password.
pub const LOGIN: &str = "auth/login/";

/// POST - create an account and obtain a token pair.
pub const REGISTER: &str = "auth/register/";

/// POST - exchange a refresh token for a new access token.
pub const REFRESH: &str = "auth/refresh/";

/// POST - revoke a refresh token.
pub const LOGOUT: &str = "auth/logout/";

/// POST - identity-provider sign-in (cookie-session transport).
pub const GOOGLE_LOGIN: &str = "auth/google/";

/// GET - details for the authenticated user; doubles as a session probe.
pub const USER_DETAILS: &str = "user/details/";

/// GET - dashboard KPI counters.
pub const DASHBOARD_METRICS: &str = "dashboard-metrics/";

/// GET - per-course enrolment and placement numbers.
pub const COURSE_PERFORMANCE: &str = "course-performance/";

/// GET - student counts grouped by franchise.
pub const FRANCHISE_STUDENT_COUNT: &str = "franchise-student-count/";

/// GET - course management table rows.
pub const COURSE_MANAGEMENT: &str = "course-management/";

/// GET - paged employee directory.
pub const EMPLOYEE_LIST: &str = "employee/list/";

/// GET - course category list.
pub const COURSE_CATEGORIES: &str = "course-categories/";

/// GET - most recently added courses.
pub const RECENT_COURSES: &str = "recent-courses/";

/// GET - most recently enrolled students.
pub const RECENT_STUDENTS: &str = "recent-students/";

/// GET - highest-enrolment courses.
pub const TOP_COURSES: &str = "top-courses/";

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for login.
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Request body for registration.
///
/// Mirrors the backend's registration serializer; optional fields are
/// omitted from the payload when unset.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
    /// Originating platform; the backend defaults to "web".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
}

/// Response from login, registration, and identity-provider sign-in.
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub access: String,
    pub refresh: String,
    pub user: UserProfile,
}

/// Request body for the token refresh endpoint.
#[derive(Debug, Serialize)]
pub struct RefreshRequest<'a> {
    pub refresh: &'a str,
}

/// Response from the token refresh endpoint.
///
/// Only a new access token is issued; the refresh token stays valid.
#[derive(Debug, Deserialize)]
pub struct RefreshResponse {
    pub access: String,
}

/// Request body for logout.
#[derive(Debug, Serialize)]
pub struct LogoutRequest<'a> {
    pub refresh: &'a str,
}

/// Request body for identity-provider sign-in.
#[derive(Debug, Serialize)]
pub struct GoogleLoginRequest<'a> {
    pub credential: &'a str,
}

/// Error payload shape used across backend endpoints.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub message: Option<String>,
    pub detail: Option<String>,
}
