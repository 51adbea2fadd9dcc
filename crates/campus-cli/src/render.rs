//! Dashboard rendering: KPI tiles, tables, and the formatting helpers
//! behind them.
//!
//! A failed fetch never aborts a dashboard view; the affected panel
//! degrades to `-` tiles or a "data unavailable" row.

use colored::{Color, Colorize};
use comfy_table::{ContentArrangement, Table};

use campus_client::{
    CourseOverview, CoursePerformance, DashboardMetrics, EmployeeListPage, FranchiseStudents,
};

use crate::output;

/// Placeholder shown when a metric could not be fetched.
const DASH: &str = "-";

/// Compact display form of a counter: `1500` -> `1.5K`, `2000000` -> `2.0M`.
pub fn format_count(value: u64) -> String {
    if value >= 1_000_000 {
        format!("{:.1}M", value as f64 / 1_000_000.0)
    } else if value >= 1_000 {
        format!("{:.1}K", value as f64 / 1_000.0)
    } else {
        value.to_string()
    }
}

/// Initials for an avatar: first letters of up to two words, uppercased.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .collect::<String>()
        .to_uppercase()
}

/// Accent colors cycled through for trainer initials.
const ACCENT_COLORS: [Color; 8] = [
    Color::Blue,
    Color::Green,
    Color::Magenta,
    Color::Yellow,
    Color::Red,
    Color::Cyan,
    Color::BrightBlue,
    Color::BrightMagenta,
];

/// Pick a stable accent color for a name.
pub fn accent_color(name: &str) -> Color {
    let mut hash: u32 = 0;
    for c in name.chars() {
        hash = (c as u32).wrapping_add(hash.wrapping_shl(5).wrapping_sub(hash));
    }
    ACCENT_COLORS[(hash as usize) % ACCENT_COLORS.len()]
}

/// Color a course completion status like the dashboard's badges.
pub fn status_badge(status: &str) -> String {
    let colored = match status {
        "Active" => status.green(),
        "Upcoming" => status.yellow(),
        "Completed" => status.blue(),
        _ => status.dimmed(),
    };
    colored.to_string()
}

/// Render the KPI tiles.
pub fn metrics(data: Option<&DashboardMetrics>) {
    output::heading("Overview");

    let tile = |value: Option<u64>| value.map_or_else(|| DASH.to_string(), format_count);

    output::field(
        "Student enrolments",
        &tile(data.map(|d| d.total_student_enrolments)),
    );
    output::field("Trainers", &tile(data.map(|d| d.total_trainers)));
    output::field("Franchises", &tile(data.map(|d| d.total_franchises)));
    output::field("Courses", &tile(data.map(|d| d.total_courses)));
    output::field("Ongoing courses", &tile(data.map(|d| d.ongoing_courses)));
}

/// Render the per-course performance table.
pub fn course_performance(data: Option<&[CoursePerformance]>) {
    output::heading("Course performance");

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(["Course", "Students", "Placed"]);

    match data {
        Some(rows) if !rows.is_empty() => {
            for row in rows {
                table.add_row([
                    row.course_name.clone(),
                    format_count(row.total_students),
                    format_count(row.students_with_jobs),
                ]);
            }
        }
        Some(_) => {
            table.add_row(["No courses found", DASH, DASH]);
        }
        None => {
            table.add_row(["data unavailable", DASH, DASH]);
        }
    }

    println!("{table}");
}

/// Render student counts per franchise.
pub fn franchises(data: Option<&[FranchiseStudents]>) {
    output::heading("Students per franchise");

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(["Franchise", "Students"]);

    match data {
        Some(rows) if !rows.is_empty() => {
            for row in rows {
                table.add_row([row.franchise_name.clone(), format_count(row.student_count)]);
            }
        }
        Some(_) => {
            table.add_row(["No franchises found", DASH]);
        }
        None => {
            table.add_row(["data unavailable", DASH]);
        }
    }

    println!("{table}");
}

/// Render the course management table.
pub fn courses(data: Option<&[CourseOverview]>) {
    output::heading("Course management");

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(["Course", "Category", "Duration", "Status", "Students", "Trainer"]);

    match data {
        Some(rows) if !rows.is_empty() => {
            for row in rows {
                let category = row
                    .category
                    .as_ref()
                    .map_or("No Category", |c| c.name.as_str());
                let duration = row.duration.as_deref().unwrap_or("Not specified");
                let trainer = match &row.trainer {
                    Some(trainer) => {
                        let avatar = initials(&trainer.name);
                        let avatar = avatar.as_str().color(accent_color(&trainer.name));
                        format!("{} {}", avatar, trainer.name)
                    }
                    None => "Not Assigned".to_string(),
                };

                table.add_row([
                    row.title.clone(),
                    category.to_string(),
                    duration.to_string(),
                    status_badge(&row.completion_status),
                    row.total_students.to_string(),
                    trainer,
                ]);
            }
        }
        Some(_) => {
            table.add_row(["No courses found", DASH, DASH, DASH, DASH, DASH]);
        }
        None => {
            table.add_row([
                "Unable to load course data. Please try again later.",
                DASH,
                DASH,
                DASH,
                DASH,
                DASH,
            ]);
        }
    }

    println!("{table}");
}

/// Render one page of the employee directory.
pub fn employees(page: &EmployeeListPage) {
    output::heading("Employees");

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(["ID", "Name", "Designation", "Department", "Joined"]);

    if page.employees.is_empty() {
        table.add_row(["No employees found", DASH, DASH, DASH, DASH]);
    } else {
        for employee in &page.employees {
            table.add_row([
                employee.employee_id.as_deref().unwrap_or(DASH).to_string(),
                employee.name.as_deref().unwrap_or(DASH).to_string(),
                employee.designation.as_deref().unwrap_or(DASH).to_string(),
                employee.department.as_deref().unwrap_or(DASH).to_string(),
                employee
                    .joining_date
                    .map_or_else(|| DASH.to_string(), |d| d.to_string()),
            ]);
        }
    }

    println!("{table}");

    if let Some(pagination) = &page.pagination {
        output::field(
            "Page",
            &format!(
                "{} of {} ({} total)",
                pagination.current_page, pagination.total_pages, pagination.total_count
            ),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_count_small_values_verbatim() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
    }

    #[test]
    fn format_count_thousands() {
        assert_eq!(format_count(1_000), "1.0K");
        assert_eq!(format_count(1_500), "1.5K");
        assert_eq!(format_count(999_999), "1000.0K");
    }

    #[test]
    fn format_count_millions() {
        assert_eq!(format_count(1_000_000), "1.0M");
        assert_eq!(format_count(2_500_000), "2.5M");
    }

    #[test]
    fn initials_takes_first_two_words() {
        assert_eq!(initials("Alice Kumar"), "AK");
        assert_eq!(initials("Alice Bea Kumar"), "AB");
        assert_eq!(initials("alice"), "A");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn accent_color_is_stable() {
        assert_eq!(accent_color("Alice Kumar"), accent_color("Alice Kumar"));
    }
}
