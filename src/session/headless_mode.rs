//! Headless report execution
//!
//! One-shot console mode: fetch the full class report plus the attention
//! list, print them, and exit. Used by the `report` subcommand.

use super::messages::print_session_starting;
use crate::backend::error::ApiError;
use crate::backend::{ApiClient, ClassApi};
use crate::environment::Environment;
use crate::models::{AttentionReport, ClassReport};
use crate::{print_cmd_error, print_cmd_info, print_cmd_warn};
use log::info;
use std::error::Error;

/// Runs the application in report mode
///
/// # Returns
/// * `Ok(())` - The report was printed (or the class is empty)
/// * `Err` - The backend could not be reached or rejected the request
pub async fn run_report(environment: Environment) -> Result<(), Box<dyn Error>> {
    print_session_starting("report", &environment.base_url());

    let client = ApiClient::new(environment);

    let report = match client.class_report().await {
        Ok(report) => report,
        // The backend answers 404 while no students are registered.
        Err(ApiError::Http { status: 404, .. }) => {
            print_cmd_info!("Class report", "No students registered yet");
            return Ok(());
        }
        Err(error) => {
            print_cmd_error!("Could not fetch the class report", &error.to_string());
            return Err(error.into());
        }
    };

    // The attention list is best-effort here: the report already printed.
    let attention = match client.attention_report().await {
        Ok(attention) => attention,
        Err(error) => {
            print_cmd_warn!("Attention list unavailable", "{}", error);
            AttentionReport { students: vec![] }
        }
    };

    info!("report fetched: {} students", report.total_students);
    print_report(&report, &attention);

    Ok(())
}

fn print_report(report: &ClassReport, attention: &AttentionReport) {
    print_cmd_info!("Class report", "{} students", report.total_students);
    println!("  Class average:      {:.2}", report.class_average);
    println!("  Average attendance: {:.1}%", report.average_attendance);

    let subjects: Vec<String> = report
        .subject_averages
        .iter()
        .enumerate()
        .map(|(i, avg)| format!("{}: {:.2}", i + 1, avg))
        .collect();
    println!("  Subject averages:   {}", subjects.join("  "));

    println!();
    for student in &report.students {
        let grades: Vec<String> = student.grades.iter().map(|g| g.to_string()).collect();
        println!(
            "  {:<20} avg {:>5.2}  att {:>5.1}%  grades [{}]",
            student.name,
            student.average,
            student.attendance,
            grades.join(", ")
        );
    }

    if !attention.students.is_empty() {
        println!();
        print_cmd_warn!("Needs attention", "{} students", attention.students.len());
        for entry in &attention.students {
            println!("  {:<20} {}", entry.name, entry.reasons.join("; "));
        }
    }
}
