//! Time-claim evaluation for decoded payloads.
//!
//! Reads the registered `exp`, `iat`, and `nbf` claims from a payload and
//! evaluates them against a caller-supplied "now". Nothing here reads the
//! clock, so every result is reproducible from its inputs.

use serde::Serialize;
use serde_json::{Map, Value};

const SECONDS_PER_DAY: u64 = 86_400;
const SECONDS_PER_HOUR: u64 = 3_600;
const SECONDS_PER_MINUTE: u64 = 60;

/// Which side of "now" a relative time falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// The instant is now or in the future.
    Remaining,
    /// The instant is in the past.
    Elapsed,
}

/// A signed offset from "now" broken down for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RelativeTime {
    pub direction: Direction,
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl RelativeTime {
    /// Break `target - now` into days, hours, minutes, and seconds.
    ///
    /// A zero offset counts as [`Direction::Remaining`].
    pub fn between(target: i64, now: i64) -> Self {
        let delta = i128::from(target) - i128::from(now);
        let direction = if delta >= 0 {
            Direction::Remaining
        } else {
            Direction::Elapsed
        };
        // |i64 - i64| fits in u64.
        let total = u64::try_from(delta.unsigned_abs()).unwrap_or(u64::MAX);

        Self {
            direction,
            days: total / SECONDS_PER_DAY,
            hours: total % SECONDS_PER_DAY / SECONDS_PER_HOUR,
            minutes: total % SECONDS_PER_HOUR / SECONDS_PER_MINUTE,
            seconds: total % SECONDS_PER_MINUTE,
        }
    }

    /// Total magnitude in seconds.
    pub fn total_seconds(&self) -> u64 {
        self.days * SECONDS_PER_DAY
            + self.hours * SECONDS_PER_HOUR
            + self.minutes * SECONDS_PER_MINUTE
            + self.seconds
    }
}

/// The result of evaluating a payload's time claims at one instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClaimsReport {
    /// The instant the claims were evaluated against (Unix seconds).
    pub evaluated_at: i64,
    /// `exp`, when present as an integer.
    pub expires_at: Option<i64>,
    /// `iat`, when present as an integer.
    pub issued_at: Option<i64>,
    /// `nbf`, when present as an integer.
    pub not_before: Option<i64>,
    /// `exp < now`; false when there is no `exp`.
    pub is_expired: bool,
    /// `nbf > now`; informational only, never folded into `is_expired`.
    pub not_yet_valid: bool,
    /// Offset from now to `exp`.
    pub time_remaining: Option<RelativeTime>,
    /// Offset from now to `nbf`, while the token is not yet valid.
    pub valid_in: Option<RelativeTime>,
}

/// Evaluate the time claims of `payload` at `now` (Unix seconds).
///
/// A claim that is missing, or not an integer that fits in an `i64`, is
/// treated as absent. A token without `exp` never expires.
pub fn validate(payload: &Map<String, Value>, now: i64) -> ClaimsReport {
    let expires_at = integer_claim(payload, "exp");
    let issued_at = integer_claim(payload, "iat");
    let not_before = integer_claim(payload, "nbf");

    let not_yet_valid = not_before.is_some_and(|nbf| now < nbf);

    ClaimsReport {
        evaluated_at: now,
        expires_at,
        issued_at,
        not_before,
        is_expired: is_expired(payload, now),
        not_yet_valid,
        time_remaining: expires_at.map(|exp| RelativeTime::between(exp, now)),
        valid_in: not_before
            .filter(|_| not_yet_valid)
            .map(|nbf| RelativeTime::between(nbf, now)),
    }
}

/// Whether `payload` carries an integer `exp` strictly before `now`.
pub fn is_expired(payload: &Map<String, Value>, now: i64) -> bool {
    integer_claim(payload, "exp").is_some_and(|exp| exp < now)
}

/// Look up a claim and read it as an integer.
fn integer_claim(payload: &Map<String, Value>, name: &str) -> Option<i64> {
    payload.get(name).and_then(Value::as_i64)
}
