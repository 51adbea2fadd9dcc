//! Dashboard command implementation.

use anyhow::Result;
use clap::{Args, Subcommand};

use campus_client::{ApiClient, EmployeeListQuery, Envelope};
use campus_core::Error;

use crate::commands::describe;
use crate::output;
use crate::render;

#[derive(Args, Debug)]
pub struct DashboardCommand {
    #[command(subcommand)]
    pub command: DashboardSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum DashboardSubcommand {
    /// KPI tiles plus the main panels, fetched concurrently
    Summary,
    /// KPI tile counters
    Metrics,
    /// Enrolment and placement numbers per course
    CoursePerformance,
    /// Student counts per franchise
    Franchises,
    /// Course management table
    Courses,
    /// Employee directory
    Employees(EmployeeArgs),
    /// Course categories
    Categories,
    /// Most recently added courses
    RecentCourses,
    /// Most recently enrolled students
    RecentStudents,
    /// Highest-enrolment courses
    TopCourses,
}

#[derive(Args, Debug)]
pub struct EmployeeArgs {
    /// Page number
    #[arg(long, default_value_t = 1)]
    pub page: u32,

    /// Rows per page
    #[arg(long, default_value_t = 10)]
    pub page_size: u32,

    /// Filter by name, designation, department, or email
    #[arg(long)]
    pub search: Option<String>,
}

pub async fn run(client: &ApiClient, cmd: DashboardCommand) -> Result<()> {
    match cmd.command {
        DashboardSubcommand::Summary => summary(client).await,
        DashboardSubcommand::Metrics => {
            let data = panel(client.dashboard_metrics().await, "metrics")?;
            render::metrics(data.as_ref());
            Ok(())
        }
        DashboardSubcommand::CoursePerformance => {
            let data = panel(client.course_performance().await, "course performance")?;
            render::course_performance(data.as_deref());
            Ok(())
        }
        DashboardSubcommand::Franchises => {
            let data = panel(client.franchise_student_count().await, "franchises")?;
            render::franchises(data.as_deref());
            Ok(())
        }
        DashboardSubcommand::Courses => {
            let data = panel(client.course_management().await, "courses")?;
            render::courses(data.as_deref());
            Ok(())
        }
        DashboardSubcommand::Employees(args) => {
            let query = EmployeeListQuery {
                page: args.page,
                page_size: args.page_size,
                search: args.search,
            };
            let page = client.employee_list(&query).await.map_err(describe)?;
            render::employees(&page);
            Ok(())
        }
        DashboardSubcommand::Categories => {
            let data = panel(client.course_categories().await, "categories")?;
            match data {
                Some(categories) => {
                    for category in categories {
                        println!("{}", category.name);
                    }
                }
                None => println!("data unavailable"),
            }
            Ok(())
        }
        DashboardSubcommand::RecentCourses => {
            raw_panel(client.recent_courses().await, "recent courses")
        }
        DashboardSubcommand::RecentStudents => {
            raw_panel(client.recent_students().await, "recent students")
        }
        DashboardSubcommand::TopCourses => raw_panel(client.top_courses().await, "top courses"),
    }
}

/// Fetch the four main panels concurrently and render each one,
/// degrading any failed panel to its placeholder.
async fn summary(client: &ApiClient) -> Result<()> {
    let (metrics, performance, franchises, courses) = tokio::join!(
        client.dashboard_metrics(),
        client.course_performance(),
        client.franchise_student_count(),
        client.course_management(),
    );

    let metrics = panel(metrics, "metrics")?;
    let performance = panel(performance, "course performance")?;
    let franchises = panel(franchises, "franchises")?;
    let courses = panel(courses, "courses")?;

    render::metrics(metrics.as_ref());
    render::course_performance(performance.as_deref());
    render::franchises(franchises.as_deref());
    render::courses(courses.as_deref());

    Ok(())
}

/// Unwrap a panel fetch for rendering.
///
/// A failed fetch or an unsuccessful envelope degrades to `None` (the
/// renderers show placeholders), with the reason reported as a warning.
/// Only the fatal session-expired outcome aborts the command.
fn panel<T>(result: Result<Envelope<T>, Error>, what: &str) -> Result<Option<T>> {
    match result {
        Ok(envelope) => {
            if !envelope.success && !envelope.message.is_empty() {
                output::warning(&format!("{}: {}", what, envelope.message));
            }
            Ok(envelope.into_data())
        }
        Err(err) if err.is_session_expired() => Err(describe(err)),
        Err(err) => {
            output::warning(&format!("{}: {}", what, err.user_message()));
            Ok(None)
        }
    }
}

/// Print an untyped panel payload as JSON.
fn raw_panel(result: Result<Envelope<serde_json::Value>, Error>, what: &str) -> Result<()> {
    match panel(result, what)? {
        Some(data) => output::json_pretty(&data),
        None => {
            println!("data unavailable");
            Ok(())
        }
    }
}
