//! Local form validation.
//!
//! Everything here runs before any network call; a violation short-circuits
//! the mutation and is surfaced on the status channel.

use crate::consts::cli_consts::{ATTENDANCE_MAX, ATTENDANCE_MIN, GRADE_MAX, GRADE_MIN};
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Enter the student name")]
    EmptyName,

    #[error("Grades must be between 0 and 10")]
    GradeOutOfRange,

    #[error("Attendance must be between 0 and 100")]
    InvalidAttendance,
}

/// Check that a student name has visible characters.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(())
}

/// Parse a single grade input field. Non-numeric input counts as zero.
pub fn parse_grade(input: &str) -> f64 {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Parse the grade form fields, rejecting any value outside the grade range.
pub fn parse_grades(inputs: &[String]) -> Result<Vec<f64>, ValidationError> {
    let grades: Vec<f64> = inputs.iter().map(|s| parse_grade(s)).collect();
    if grades.iter().any(|&g| !(GRADE_MIN..=GRADE_MAX).contains(&g)) {
        return Err(ValidationError::GradeOutOfRange);
    }
    Ok(grades)
}

/// Parse the attendance form field. Unlike grades, non-numeric input is
/// rejected rather than zeroed.
pub fn parse_attendance(input: &str) -> Result<f64, ValidationError> {
    let value = input
        .trim()
        .parse::<f64>()
        .map_err(|_| ValidationError::InvalidAttendance)?;
    if !value.is_finite() || !(ATTENDANCE_MIN..=ATTENDANCE_MAX).contains(&value) {
        return Err(ValidationError::InvalidAttendance);
    }
    Ok(value)
}

/// Render a stored number back into an editable string, the way the form
/// fields expect it: `7.0 -> "7"`, `7.5 -> "7.5"`.
pub fn format_score(value: f64) -> String {
    value.to_string()
}
