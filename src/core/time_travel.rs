//! Time-travel evaluation of JWT temporal claims.
//!
//! Parses time expressions (relative like "+7d" or absolute like ISO 8601)
//! into the instant the pipeline should treat as "now".

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeDelta, Utc};

use crate::error::JwtPeekError;

/// A parsed time target for time-travel evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeTarget {
    /// The resolved absolute timestamp.
    pub timestamp: DateTime<Utc>,
    /// The original expression provided by the user.
    pub expression: String,
}

impl TimeTarget {
    /// The target as Unix seconds.
    pub fn unix_seconds(&self) -> i64 {
        self.timestamp.timestamp()
    }
}

/// Parse a time-travel expression relative to the current time.
///
/// See [`parse_time_expression_at`] for the accepted formats.
///
/// # Errors
///
/// Returns an error if the expression doesn't match any known format.
pub fn parse_time_expression(expression: &str) -> Result<TimeTarget, JwtPeekError> {
    parse_time_expression_at(expression, Utc::now())
}

/// Parse a time-travel expression, resolving relative offsets from `now`.
///
/// Supports the following formats:
/// - Relative: `+7d`, `-1h`, `+30m`, `+1y`, `-5s`, `+2w`
/// - Absolute RFC 3339 / ISO 8601: `2024-01-15T14:30:00Z`,
///   `2024-01-15T14:30:00` (UTC), `2024-01-15` (midnight UTC)
/// - Absolute Unix epoch: `1705312200`
///
/// # Errors
///
/// Returns an error if the expression doesn't match any known format or
/// resolves outside the representable range.
pub fn parse_time_expression_at(
    expression: &str,
    now: DateTime<Utc>,
) -> Result<TimeTarget, JwtPeekError> {
    let trimmed = expression.trim();
    let invalid = |reason: &str| JwtPeekError::InvalidTimeExpression {
        expression: expression.to_string(),
        reason: reason.to_string(),
    };

    if trimmed.is_empty() {
        return Err(invalid("expression is empty"));
    }

    let timestamp = if let Some(rest) = trimmed.strip_prefix('+') {
        let delta = parse_offset(rest, expression)?;
        now.checked_add_signed(delta)
            .ok_or_else(|| invalid("offset moves outside the supported date range"))?
    } else if let Some(rest) = trimmed.strip_prefix('-') {
        let delta = parse_offset(rest, expression)?;
        now.checked_sub_signed(delta)
            .ok_or_else(|| invalid("offset moves outside the supported date range"))?
    } else if trimmed.bytes().all(|b| b.is_ascii_digit()) {
        let seconds: i64 = trimmed
            .parse()
            .map_err(|_| invalid("epoch seconds out of range"))?;
        DateTime::from_timestamp(seconds, 0).ok_or_else(|| invalid("epoch seconds out of range"))?
    } else {
        parse_absolute(trimmed).ok_or_else(|| {
            invalid("expected a relative offset (+7d), an ISO 8601 date, or Unix seconds")
        })?
    };

    Ok(TimeTarget {
        timestamp,
        expression: expression.to_string(),
    })
}

/// Parse the `<amount><unit>` body of a relative expression.
fn parse_offset(body: &str, expression: &str) -> Result<TimeDelta, JwtPeekError> {
    let invalid = |reason: String| JwtPeekError::InvalidTimeExpression {
        expression: expression.to_string(),
        reason,
    };

    let split = body
        .find(|c: char| !c.is_ascii_digit())
        .ok_or_else(|| invalid("missing unit (use s, m, h, d, w, or y)".to_string()))?;
    let (amount, unit) = body.split_at(split);
    if amount.is_empty() {
        return Err(invalid("missing amount before unit".to_string()));
    }
    let amount: i64 = amount
        .parse()
        .map_err(|_| invalid("amount out of range".to_string()))?;

    let delta = match unit {
        "s" => TimeDelta::try_seconds(amount),
        "m" => TimeDelta::try_minutes(amount),
        "h" => TimeDelta::try_hours(amount),
        "d" => TimeDelta::try_days(amount),
        "w" => TimeDelta::try_weeks(amount),
        "y" => amount.checked_mul(365).and_then(TimeDelta::try_days),
        other => return Err(invalid(format!("unknown unit '{other}'"))),
    };
    delta.ok_or_else(|| invalid("amount out of range".to_string()))
}

fn parse_absolute(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_now() -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000, 0).unwrap()
    }

    fn resolve(expression: &str) -> i64 {
        parse_time_expression_at(expression, fixed_now())
            .unwrap()
            .unix_seconds()
    }

    #[test]
    fn test_relative_offsets() {
        let now = 1_700_000_000;
        assert_eq!(resolve("+7d"), now + 7 * 86_400);
        assert_eq!(resolve("-1h"), now - 3_600);
        assert_eq!(resolve("+30m"), now + 1_800);
        assert_eq!(resolve("-5s"), now - 5);
        assert_eq!(resolve("+2w"), now + 14 * 86_400);
        assert_eq!(resolve("+1y"), now + 365 * 86_400);
        assert_eq!(resolve("+0s"), now);
    }

    #[test]
    fn test_unix_epoch() {
        assert_eq!(resolve("1705312200"), 1_705_312_200);
        assert_eq!(resolve("0"), 0);
    }

    #[test]
    fn test_iso_8601_forms() {
        assert_eq!(resolve("2024-01-15T10:30:00Z"), 1_705_314_600);
        assert_eq!(resolve("2024-01-15T12:30:00+02:00"), 1_705_314_600);
        assert_eq!(resolve("2024-01-15T10:30:00"), 1_705_314_600);
        assert_eq!(resolve("2024-01-15"), 1_705_276_800);
    }

    #[test]
    fn test_expression_is_preserved() {
        let target = parse_time_expression_at(" +1d ", fixed_now()).unwrap();
        assert_eq!(target.expression, " +1d ");
    }

    #[test]
    fn test_unknown_unit_fails() {
        let err = parse_time_expression_at("+7x", fixed_now()).unwrap_err();
        assert!(err.to_string().contains("unknown unit 'x'"));
    }

    #[test]
    fn test_malformed_expressions_fail() {
        for expression in ["", "  ", "+", "+d", "-7", "tomorrow", "2024-13-45", "+1.5h"] {
            assert!(
                matches!(
                    parse_time_expression_at(expression, fixed_now()),
                    Err(JwtPeekError::InvalidTimeExpression { .. })
                ),
                "expression: {expression:?}"
            );
        }
    }

    #[test]
    fn test_overflowing_offsets_fail() {
        for expression in ["+99999999999999999999d", "+9223372036854775807y", "99999999999999999999"] {
            assert!(
                parse_time_expression_at(expression, fixed_now()).is_err(),
                "expression: {expression:?}"
            );
        }
    }

    #[test]
    fn test_parse_time_expression_uses_clock() {
        let before = Utc::now().timestamp();
        let target = parse_time_expression("+1h").unwrap();
        assert!(target.unix_seconds() >= before + 3_600);
    }
}
