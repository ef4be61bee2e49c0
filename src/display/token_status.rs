//! Token status display for temporal claims.
//!
//! Renders human-readable status information for JWT temporal claims
//! (`exp`, `iat`, `nbf`) including expiry status with color coding:
//! - Expired tokens: red "EXPIRED (X ago)"
//! - Valid tokens: green "VALID (expires in X)"
//! - Not-yet-valid tokens: yellow "NOT YET VALID (valid in X)"

use std::fmt::Write;

use chrono::DateTime;
use jwt_peek::{ClaimsReport, Direction, RelativeTime};

use super::{Style, paint};

/// Render the status block for a claims report, one line per fact.
pub fn render_token_status(report: &ClaimsReport, color: bool) -> String {
    let mut out = String::new();

    let status = match (report.is_expired, report.time_remaining) {
        (true, Some(elapsed)) => paint(
            &format!("EXPIRED ({} ago)", format_relative(&elapsed)),
            Style::Red,
            color,
        ),
        (_, Some(remaining)) => paint(
            &format!("VALID (expires in {})", format_relative(&remaining)),
            Style::Green,
            color,
        ),
        (_, None) => paint("VALID (no expiry)", Style::Green, color),
    };
    let _ = writeln!(out, "Status:       {status}");

    if let Some(valid_in) = report.valid_in.filter(|_| report.not_yet_valid) {
        let line = format!("NOT YET VALID (valid in {})", format_relative(&valid_in));
        let _ = writeln!(out, "              {}", paint(&line, Style::Yellow, color));
    }

    if let Some(exp) = report.expires_at {
        let _ = writeln!(out, "Expires at:   {}", format_timestamp(exp));
    }
    if let Some(iat) = report.issued_at {
        let age = RelativeTime::between(iat, report.evaluated_at);
        let _ = writeln!(
            out,
            "Issued at:    {} ({})",
            format_timestamp(iat),
            describe(&age)
        );
    }
    if let Some(nbf) = report.not_before {
        let _ = writeln!(out, "Not before:   {}", format_timestamp(nbf));
    }
    let _ = writeln!(
        out,
        "Evaluated at: {}",
        format_timestamp(report.evaluated_at)
    );

    out
}

/// Format a breakdown as e.g. `1d 2h 3m 4s`, omitting leading zero units.
pub fn format_relative(time: &RelativeTime) -> String {
    let units = [
        (time.days, "d"),
        (time.hours, "h"),
        (time.minutes, "m"),
        (time.seconds, "s"),
    ];
    let parts: Vec<String> = units
        .iter()
        .skip_while(|(value, _)| *value == 0)
        .map(|(value, unit)| format!("{value}{unit}"))
        .collect();

    if parts.is_empty() {
        "0s".to_string()
    } else {
        parts.join(" ")
    }
}

fn describe(time: &RelativeTime) -> String {
    match time.direction {
        Direction::Remaining if time.total_seconds() == 0 => "just now".to_string(),
        Direction::Remaining => format!("in {}", format_relative(time)),
        Direction::Elapsed => format!("{} ago", format_relative(time)),
    }
}

/// RFC 3339 rendering of Unix seconds, falling back to the raw number.
fn format_timestamp(seconds: i64) -> String {
    DateTime::from_timestamp(seconds, 0)
        .map(|dt| format!("{} ({seconds})", dt.to_rfc3339()))
        .unwrap_or_else(|| seconds.to_string())
}
