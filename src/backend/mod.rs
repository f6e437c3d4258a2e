use crate::backend::error::ApiError;
use crate::environment::Environment;
use crate::models::{AttentionReport, ClassReport, ClassStatistics, Student};

pub(crate) mod client;
pub use client::ApiClient;
pub mod error;

#[cfg(test)]
use mockall::{automock, predicate::*};

#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait ClassApi: Send + Sync {
    fn environment(&self) -> &Environment;

    /// List all tracked students.
    async fn list_students(&self) -> Result<Vec<Student>, ApiError>;

    /// Fetch a single student by name.
    async fn get_student(&self, name: &str) -> Result<Student, ApiError>;

    /// Class-wide averages, overall and per subject.
    async fn class_statistics(&self) -> Result<ClassStatistics, ApiError>;

    /// Students the backend flags as needing attention, with reasons.
    async fn attention_report(&self) -> Result<AttentionReport, ApiError>;

    /// Full class report: totals, averages, and the complete roster.
    async fn class_report(&self) -> Result<ClassReport, ApiError>;

    /// Create a new student with zeroed grades and attendance.
    async fn add_student(&self, name: &str) -> Result<(), ApiError>;

    /// Delete a student.
    async fn remove_student(&self, name: &str) -> Result<(), ApiError>;

    /// Replace a student's five subject grades.
    async fn update_grades(&self, name: &str, grades: Vec<f64>) -> Result<(), ApiError>;

    /// Replace a student's attendance percentage.
    async fn update_attendance(&self, name: &str, attendance: f64) -> Result<(), ApiError>;
}
