use std::collections::HashSet;

use chrono::{Duration, NaiveDate, TimeZone};
use serde::Serialize;

use super::MeditationSession;

/// Days looked back when counting a streak.
const STREAK_WINDOW_DAYS: i64 = 30;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MeditationStats {
    pub total_sessions: usize,
    pub total_secs: u64,
    /// Consecutive calendar days with at least one session, counting back
    /// from `today`. A day without a session yet does not break the streak on
    /// `today` itself.
    pub streak_days: u32,
}

impl MeditationStats {
    /// Sessions are bucketed by their calendar day in `tz`, which should be
    /// the zone `today` was taken in.
    pub fn from_sessions<Tz: TimeZone>(
        sessions: &[MeditationSession],
        today: NaiveDate,
        tz: &Tz,
    ) -> Self {
        let days: HashSet<NaiveDate> = sessions
            .iter()
            .map(|s| s.date.with_timezone(tz).date_naive())
            .collect();

        let mut streak_days = 0;
        for offset in 0..STREAK_WINDOW_DAYS {
            let day = today - Duration::days(offset);
            if days.contains(&day) {
                streak_days += 1;
            } else if offset > 0 {
                break;
            }
        }

        Self {
            total_sessions: sessions.len(),
            total_secs: sessions.iter().map(|s| u64::from(s.duration_secs)).sum(),
            streak_days,
        }
    }

    /// `"1h 5m"` or `"12m"`.
    pub fn total_time_label(&self) -> String {
        let hours = self.total_secs / 3600;
        let minutes = (self.total_secs % 3600) / 60;
        if hours > 0 {
            format!("{hours}h {minutes}m")
        } else {
            format!("{minutes}m")
        }
    }
}
