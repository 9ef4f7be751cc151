// src/client/session.rs

use std::fmt;

use crate::{
    client::course::{
        AdminCharts, Course, CourseReport, CourseStatus, StudentStats, admin_charts,
        course_report, mock_courses, student_stats,
    },
    models::{
        analytics::{AnalyticsSummary, PartialAnalytics},
        feedback::FeedbackRecord,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Role {
    #[default]
    Student,
    Admin,
}

/// Screens of the client application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Login,
    Student,
    Admin,
    Settings,
    Help,
    /// Admin only.
    Reports,
    /// Student feedback form for the selected course.
    FeedbackForm,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionError {
    InvalidTransition { from: View, to: View },
    UnknownCourse(i64),
    CourseAlreadyCompleted(i64),
    NoCourseSelected,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::InvalidTransition { from, to } => {
                write!(f, "cannot move from {:?} to {:?}", from, to)
            }
            SessionError::UnknownCourse(id) => write!(f, "unknown course {}", id),
            SessionError::CourseAlreadyCompleted(id) => {
                write!(f, "feedback for course {} was already submitted", id)
            }
            SessionError::NoCourseSelected => write!(f, "no course selected"),
        }
    }
}

impl std::error::Error for SessionError {}

/// View-state of a single client session.
///
/// Starts at `Login` with the `Student` role preselected. Credentials are not
/// checked: logging in always succeeds for the selected role.
#[derive(Debug, Clone)]
pub struct Session {
    view: View,
    role: Role,
    courses: Vec<Course>,
    analytics: Option<PartialAnalytics>,
    selected_course: Option<i64>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            view: View::Login,
            role: Role::Student,
            courses: Vec::new(),
            analytics: None,
            selected_course: None,
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn selected_course(&self) -> Option<&Course> {
        self.selected_course
            .and_then(|id| self.courses.iter().find(|c| c.id == id))
    }

    /// Role toggle on the login page.
    pub fn select_role(&mut self, role: Role) -> Result<(), SessionError> {
        self.expect_view(View::Login, View::Login)?;
        self.role = role;
        Ok(())
    }

    /// Enters the dashboard of the selected role and loads the course catalog.
    pub fn login(&mut self) -> Result<View, SessionError> {
        let target = self.dashboard();
        self.expect_view(View::Login, target)?;

        self.courses = mock_courses();
        self.view = target;
        tracing::debug!("Logged in as {:?}", self.role);
        Ok(target)
    }

    /// Returns to the login page from any view and resets the role.
    pub fn logout(&mut self) {
        *self = Self::new();
    }

    /// Opens a sub-page from the current dashboard.
    pub fn open(&mut self, target: View) -> Result<(), SessionError> {
        let allowed = match target {
            View::Settings | View::Help => matches!(self.view, View::Student | View::Admin),
            View::Reports => self.view == View::Admin,
            _ => false,
        };
        if !allowed {
            return Err(SessionError::InvalidTransition {
                from: self.view,
                to: target,
            });
        }
        self.view = target;
        Ok(())
    }

    /// Leaves a sub-page (or the feedback form) for the role's dashboard.
    pub fn back(&mut self) -> Result<(), SessionError> {
        let dashboard = self.dashboard();
        match self.view {
            View::Settings | View::Help | View::Reports | View::FeedbackForm => {
                self.selected_course = None;
                self.view = dashboard;
                Ok(())
            }
            from => Err(SessionError::InvalidTransition { from, to: dashboard }),
        }
    }

    /// Opens the feedback form for a pending course.
    pub fn select_course(&mut self, course_id: i64) -> Result<&Course, SessionError> {
        self.expect_view(View::Student, View::FeedbackForm)?;

        let course = self
            .courses
            .iter()
            .find(|c| c.id == course_id)
            .ok_or(SessionError::UnknownCourse(course_id))?;
        if !course.is_pending() {
            return Err(SessionError::CourseAlreadyCompleted(course_id));
        }

        self.selected_course = Some(course_id);
        self.view = View::FeedbackForm;
        Ok(course)
    }

    /// Marks the selected course completed with `rating` and returns to the
    /// student dashboard.
    ///
    /// Returns the record to send to `POST /api/feedback`.
    pub fn submit_feedback(
        &mut self,
        rating: u8,
        comments: &str,
    ) -> Result<FeedbackRecord, SessionError> {
        self.expect_view(View::FeedbackForm, View::Student)?;
        let course_id = self.selected_course.ok_or(SessionError::NoCourseSelected)?;

        let course = self
            .courses
            .iter_mut()
            .find(|c| c.id == course_id)
            .ok_or(SessionError::UnknownCourse(course_id))?;
        course.status = CourseStatus::Completed;
        course.rating = Some(f64::from(rating));

        self.selected_course = None;
        self.view = View::Student;

        Ok(FeedbackRecord::new()
            .with("courseId", course_id)
            .with("rating", rating)
            .with("comments", comments))
    }

    pub fn set_analytics(&mut self, analytics: impl Into<PartialAnalytics>) {
        self.analytics = Some(analytics.into());
    }

    /// Summary shown on the admin dashboard. Each field missing from the
    /// loaded analytics (or all of them, before loading) shows its fallback.
    pub fn admin_summary(&self) -> AnalyticsSummary {
        self.analytics
            .as_ref()
            .map(PartialAnalytics::with_fallbacks)
            .unwrap_or_else(AnalyticsSummary::fallback)
    }

    pub fn student_stats(&self) -> StudentStats {
        student_stats(&self.courses)
    }

    /// Course-rating bars and trend indicators of the admin dashboard.
    pub fn admin_charts(&self) -> Result<AdminCharts, SessionError> {
        self.expect_view(View::Admin, View::Admin)?;
        Ok(admin_charts())
    }

    /// Aggregates for the admin reports page.
    pub fn report(&self) -> Result<CourseReport, SessionError> {
        if self.view != View::Reports {
            return Err(SessionError::InvalidTransition {
                from: self.view,
                to: View::Reports,
            });
        }
        Ok(course_report(&self.courses))
    }

    fn dashboard(&self) -> View {
        match self.role {
            Role::Student => View::Student,
            Role::Admin => View::Admin,
        }
    }

    fn expect_view(&self, expected: View, to: View) -> Result<(), SessionError> {
        if self.view != expected {
            return Err(SessionError::InvalidTransition { from: self.view, to });
        }
        Ok(())
    }
}
