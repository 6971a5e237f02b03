use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

const MS_PER_DAY: i64 = 86_400_000;

/// Elapsed time since a repository was created, split into fixed-length
/// units: 365-day years and 30-day months, not a calendar-aware diff. The
/// approximation is the published behavior and is kept as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RepoAge {
    pub years: i64,
    pub months: i64,
    pub days: i64,
    pub total_days: i64,
}

impl RepoAge {
    /// Age of something created at `created_at`, measured at `now`.
    /// Whole days only; partial days are floored away.
    pub fn since(created_at: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let total_days = now
            .signed_duration_since(created_at)
            .num_milliseconds()
            .div_euclid(MS_PER_DAY);

        Self {
            years: total_days / 365,
            months: (total_days % 365) / 30,
            days: total_days % 30,
            total_days,
        }
    }
}

impl fmt::Display for RepoAge {
    /// Comma-joined nonzero components ("1 year, 1 month, 10 days"). A zero
    /// age still renders as "0 days" so the output is never empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<String> = Vec::new();
        if self.years > 0 {
            parts.push(unit(self.years, "year"));
        }
        if self.months > 0 {
            parts.push(unit(self.months, "month"));
        }
        if self.days > 0 || parts.is_empty() {
            parts.push(unit(self.days, "day"));
        }
        f.write_str(&parts.join(", "))
    }
}

fn unit(n: i64, name: &str) -> String {
    if n == 1 {
        format!("1 {}", name)
    } else {
        format!("{} {}s", n, name)
    }
}
