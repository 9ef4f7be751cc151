// src/client/course.rs

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseStatus {
    Pending,
    Completed,
}

/// A course as shown on the student dashboard. Client-side only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: i64,
    pub name: String,
    pub instructor: String,
    /// `None` until the course has been rated.
    pub rating: Option<f64>,
    pub status: CourseStatus,
}

impl Course {
    fn new(id: i64, name: &str, instructor: &str, rating: Option<f64>, status: CourseStatus) -> Self {
        Self {
            id,
            name: name.to_string(),
            instructor: instructor.to_string(),
            rating,
            status,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.status == CourseStatus::Pending
    }
}

/// Demo catalog loaded when a dashboard is entered.
pub fn mock_courses() -> Vec<Course> {
    vec![
        Course::new(1, "Mathematics 101", "Dr. Smith", Some(4.2), CourseStatus::Pending),
        Course::new(2, "Physics 201", "Dr. Johnson", Some(4.5), CourseStatus::Completed),
        Course::new(3, "Chemistry 101", "Dr. Williams", None, CourseStatus::Pending),
        Course::new(4, "Computer Science 301", "Dr. Brown", Some(4.8), CourseStatus::Completed),
    ]
}

/// Summary cards of the student dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentStats {
    pub pending: usize,
    pub completed: usize,
    /// Mean over rated courses; `None` when nothing is rated yet.
    pub average_rating: Option<f64>,
}

pub fn student_stats(courses: &[Course]) -> StudentStats {
    let pending = courses.iter().filter(|c| c.is_pending()).count();
    let completed = courses.len() - pending;

    let ratings: Vec<f64> = courses.iter().filter_map(|c| c.rating).collect();
    let average_rating = if ratings.is_empty() {
        None
    } else {
        Some(ratings.iter().sum::<f64>() / ratings.len() as f64)
    };

    StudentStats {
        pending,
        completed,
        average_rating,
    }
}

/// A course rating as plotted on the admin dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseRating {
    pub name: String,
    pub rating: f64,
}

/// Dataset of the admin "Course Ratings" chart.
/// Independent of the student catalog: it carries its own short names and
/// courses the student view does not list.
pub fn admin_course_ratings() -> Vec<CourseRating> {
    [
        ("Math 101", 4.2),
        ("Physics 201", 4.5),
        ("Chemistry 101", 3.8),
        ("CS 301", 4.8),
        ("Biology 101", 4.0),
    ]
    .into_iter()
    .map(|(name, rating)| CourseRating {
        name: name.to_string(),
        rating,
    })
    .collect()
}

/// One bar of the admin "Course Ratings" chart.
#[derive(Debug, Clone, PartialEq)]
pub struct RatingBar {
    pub name: String,
    pub rating: f64,
    /// Fill width in percent of the 5-point scale.
    pub width_percent: f64,
}

pub fn rating_bars(ratings: &[CourseRating]) -> Vec<RatingBar> {
    ratings
        .iter()
        .map(|r| RatingBar {
            name: r.name.clone(),
            rating: r.rating,
            width_percent: r.rating / 5.0 * 100.0,
        })
        .collect()
}

/// One entry of the "Rating Trends" panel.
#[derive(Debug, Clone, PartialEq)]
pub struct RatingTrend {
    pub label: String,
    /// Signed change in percent, e.g. `12` for "+12%".
    pub change_percent: i32,
    /// Highlighted as an upward trend.
    pub highlighted: bool,
}

impl RatingTrend {
    /// Display form, e.g. "+12%".
    pub fn display_change(&self) -> String {
        format!("{:+}%", self.change_percent)
    }
}

/// Trend indicators, most recent first. Only the two latest periods are
/// highlighted.
pub fn rating_trends() -> Vec<RatingTrend> {
    [("This Month", 12, true), ("Last Month", 8, true), ("3 Months Ago", 5, false)]
        .into_iter()
        .map(|(label, change_percent, highlighted)| RatingTrend {
            label: label.to_string(),
            change_percent,
            highlighted,
        })
        .collect()
}

/// Chart panels of the admin dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminCharts {
    pub rating_bars: Vec<RatingBar>,
    pub trends: Vec<RatingTrend>,
}

pub fn admin_charts() -> AdminCharts {
    AdminCharts {
        rating_bars: rating_bars(&admin_course_ratings()),
        trends: rating_trends(),
    }
}

/// Read-only aggregates of the admin reports page.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseReport {
    pub total_courses: usize,
    /// Percentage of completed courses, 0.0 for an empty list.
    pub completion_rate: f64,
    pub highest_rated: Option<Course>,
}

pub fn course_report(courses: &[Course]) -> CourseReport {
    let total_courses = courses.len();
    let completed = courses.iter().filter(|c| !c.is_pending()).count();
    let completion_rate = if total_courses == 0 {
        0.0
    } else {
        completed as f64 / total_courses as f64 * 100.0
    };

    // First course wins ties.
    let highest_rated = courses
        .iter()
        .filter(|c| c.rating.is_some())
        .fold(None::<&Course>, |best, c| match best {
            Some(b) if b.rating >= c.rating => Some(b),
            _ => Some(c),
        })
        .cloned();

    CourseReport {
        total_courses,
        completion_rate,
        highest_rated,
    }
}
