// src/portal/stats.rs — Headline counters shown on the home page

use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: u64,
}

impl Stat {
    pub fn new(label: impl Into<String>, value: u64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Default count-up duration for the counters.
pub const COUNT_UP: Duration = Duration::from_millis(2000);

/// Value of a counter counting up from 0 to `end` over `duration`.
pub fn animated_count(end: u64, elapsed: Duration, duration: Duration) -> u64 {
    if duration.is_zero() {
        return end;
    }
    let progress = (elapsed.as_secs_f64() / duration.as_secs_f64()).min(1.0);
    (progress * end as f64).floor() as u64
}

/// `15432` -> `"15,432"`.
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_up_endpoints() {
        assert_eq!(animated_count(127, Duration::ZERO, COUNT_UP), 0);
        assert_eq!(animated_count(127, COUNT_UP, COUNT_UP), 127);
        assert_eq!(animated_count(127, Duration::from_secs(10), COUNT_UP), 127);
    }

    #[test]
    fn test_count_up_floors() {
        // halfway through 2847 is 1423.5
        assert_eq!(animated_count(2847, Duration::from_millis(1000), COUNT_UP), 1423);
    }

    #[test]
    fn test_zero_duration_is_done() {
        assert_eq!(animated_count(42, Duration::ZERO, Duration::ZERO), 42);
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(127), "127");
        assert_eq!(format_thousands(2847), "2,847");
        assert_eq!(format_thousands(15432), "15,432");
        assert_eq!(format_thousands(1_000_000), "1,000,000");
    }
}
