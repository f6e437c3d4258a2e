//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::events::EventKind;
use ratatui::prelude::Color;

/// Get a ratatui color for an activity entry or status kind
pub fn kind_color(kind: EventKind) -> Color {
    match kind {
        EventKind::Success => Color::Green,
        EventKind::Error => Color::Red,
        EventKind::Info => Color::Cyan,
    }
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract from "YYYY-MM-DD HH:MM:SS" format
    if let Some(date_part) = timestamp.split(' ').next() {
        if let Some(time_part) = timestamp.split(' ').nth(1) {
            if let Some(month_day) = date_part.get(5..10) {
                if let Some(hour_min) = time_part.get(0..5) {
                    return format!("{} {}", month_day, hour_min);
                }
            }
        }
    }
    // Fallback to original timestamp if parsing fails
    timestamp.to_string()
}

/// Two-decimal rendering for server-computed averages.
pub fn format_average(value: f64) -> String {
    format!("{:.2}", value)
}

/// One-decimal rendering for attendance percentages.
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Display label for a subject column (1-based).
pub fn subject_label(index: usize) -> String {
    format!("Subject {}", index + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_timestamp_strips_year_and_seconds() {
        assert_eq!(format_compact_timestamp("2026-08-05 14:03:59"), "08-05 14:03");
    }

    #[test]
    fn compact_timestamp_falls_back_on_unknown_shapes() {
        assert_eq!(format_compact_timestamp("just now"), "just now");
    }

    #[test]
    fn number_formats() {
        assert_eq!(format_average(6.5), "6.50");
        assert_eq!(format_percent(80.0), "80.0%");
        assert_eq!(subject_label(0), "Subject 1");
    }
}
