//! Countdown breakdown toward the campaign deadline.
//!
//! The hero section shows days/hours/minutes/seconds remaining until
//! `countdownTargetDate`, recomputed once per second by the embedding
//! UI loop. Only the pure computation lives here. The breakdown clamps
//! to all-zero once the target has passed and never goes negative; an
//! unparseable target also reads as all-zero rather than failing.

use chrono::NaiveDateTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeLeft {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl TimeLeft {
    pub const ZERO: TimeLeft = TimeLeft {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// Breaks down the remaining time from `now` to `target`.
    pub fn until(target: NaiveDateTime, now: NaiveDateTime) -> TimeLeft {
        let remaining = (target - now).num_seconds();
        if remaining <= 0 {
            return TimeLeft::ZERO;
        }
        TimeLeft {
            days: remaining / 86_400,
            hours: (remaining / 3_600) % 24,
            minutes: (remaining / 60) % 60,
            seconds: remaining % 60,
        }
    }

    pub fn is_over(&self) -> bool {
        *self == TimeLeft::ZERO
    }
}

/// Parses the content's target string (`YYYY-MM-DDTHH:MM`, seconds
/// optional — the datetime-local input format).
pub fn parse_target(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M"))
        .ok()
}

/// Breakdown for a raw target string; unparseable targets read as zero.
pub fn time_left_at(raw: &str, now: NaiveDateTime) -> TimeLeft {
    match parse_target(raw) {
        Some(target) => TimeLeft::until(target, now),
        None => TimeLeft::ZERO,
    }
}
