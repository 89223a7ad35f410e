//! Session cadence inference from the access log: per-user chronological
//! gaps under a plausibility threshold, averaged into a single statistic.

use crate::models::access_event::AccessEvent;
use std::collections::HashMap;

/// Gaps at or above this many minutes are treated as separate sittings
/// (cross-day or idle) and excluded from the average.
pub const SESSION_GAP_LIMIT_MIN: f64 = 120.0;

#[derive(Debug, Default, Clone, Copy)]
pub struct SessionStats {
    /// Average accepted gap in minutes, rounded to the nearest integer;
    /// 0 when no gap passed the plausibility filter.
    pub average_gap_minutes: i64,
    /// Number of gaps that entered the average.
    pub counted_gaps: usize,
}

pub fn session_stats(events: &[AccessEvent]) -> SessionStats {
    if events.len() < 2 {
        return SessionStats::default();
    }

    // Bucket timestamps per user, then sort each bucket ascending.
    let mut per_user: HashMap<&str, Vec<_>> = HashMap::new();
    for ev in events {
        per_user
            .entry(ev.user_email.as_str())
            .or_default()
            .push(ev.accessed_at);
    }

    let mut sum = 0.0;
    let mut count = 0usize;

    for timestamps in per_user.values_mut() {
        timestamps.sort();

        for pair in timestamps.windows(2) {
            let minutes = (pair[1] - pair[0]).num_seconds() as f64 / 60.0;
            if minutes < SESSION_GAP_LIMIT_MIN {
                sum += minutes;
                count += 1;
            }
        }
    }

    if count == 0 {
        return SessionStats::default();
    }

    SessionStats {
        average_gap_minutes: (sum / count as f64).round() as i64,
        counted_gaps: count,
    }
}
