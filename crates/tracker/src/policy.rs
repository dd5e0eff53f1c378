//! Pure reminder eligibility and elapsed-time formatting.
//!
//! Eligibility is a predicate over `(now, stored instants)` with no side
//! effects, so the UI can evaluate "can I show the remind button?" on every
//! render without touching the ledger. Recording a reminder is a separate
//! explicit action on the service.

use chrono::{DateTime, Duration, Utc};

use campusfix_store::MaintenanceRecord;

/// Minimum gap between reminders on a track: 2 days. Both tracks use the
/// same interval.
pub const REMINDER_INTERVAL_MS: i64 = 2 * 24 * 60 * 60 * 1000;

/// Eligibility rules for both reminder tracks.
#[derive(Debug, Clone, Copy)]
pub struct ReminderPolicy {
    interval: Duration,
}

impl Default for ReminderPolicy {
    fn default() -> Self {
        Self {
            interval: Duration::milliseconds(REMINDER_INTERVAL_MS),
        }
    }
}

impl ReminderPolicy {
    /// Policy with a non-default interval (config override).
    pub fn with_interval(interval: Duration) -> Self {
        Self { interval }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Whether a pending-track reminder may be sent.
    ///
    /// Never reminded: eligible once the complaint itself is a full
    /// interval old. Reminded before: eligible once a full interval has
    /// passed since the last reminder.
    pub fn pending_eligible(
        &self,
        created_at: DateTime<Utc>,
        last_reminder_at: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> bool {
        match last_reminder_at {
            None => now - created_at >= self.interval,
            Some(last) => now - last >= self.interval,
        }
    }

    /// Whether a maintenance-track reminder may be sent.
    ///
    /// A complaint never tracked as assigned is never eligible. Otherwise
    /// the gap is measured from the assignment instant until the first
    /// reminder, and from the last reminder thereafter.
    pub fn maintenance_eligible(
        &self,
        record: Option<&MaintenanceRecord>,
        now: DateTime<Utc>,
    ) -> bool {
        let record = match record {
            Some(r) => r,
            None => return false,
        };
        match record.last_reminder_at {
            None => now - record.assigned_at >= self.interval,
            Some(last) => now - last >= self.interval,
        }
    }
}

/// Coarse "time since" label for a last-reminder instant.
///
/// Picks the largest whole unit >= 1 among days and hours, falling back to
/// `"Just now"`. Returns `None` when there is no prior instant.
pub fn humanize_elapsed(last: Option<DateTime<Utc>>, now: DateTime<Utc>) -> Option<String> {
    let last = last?;
    let elapsed = (now - last).max(Duration::zero());

    let days = elapsed.num_days();
    if days > 0 {
        return Some(format!("{} day{} ago", days, plural(days)));
    }
    let hours = elapsed.num_hours();
    if hours > 0 {
        return Some(format!("{} hour{} ago", hours, plural(hours)));
    }
    Some("Just now".to_string())
}

fn plural(n: i64) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap()
    }

    fn interval() -> Duration {
        Duration::milliseconds(REMINDER_INTERVAL_MS)
    }

    #[test]
    fn interval_constant_is_two_days() {
        assert_eq!(REMINDER_INTERVAL_MS, 172_800_000);
        assert_eq!(ReminderPolicy::default().interval(), Duration::days(2));
    }

    // ── pending_eligible ───────────────────────────────────────

    #[test]
    fn pending_never_reminded_measures_from_creation() {
        let policy = ReminderPolicy::default();
        assert!(!policy.pending_eligible(t0(), None, t0() + Duration::days(1)));
        assert!(policy.pending_eligible(t0(), None, t0() + interval()));
    }

    #[test]
    fn pending_reminded_measures_from_last_reminder() {
        let policy = ReminderPolicy::default();
        let last = t0() + Duration::days(3);
        assert!(!policy.pending_eligible(t0(), Some(last), last + Duration::hours(47)));
        assert!(policy.pending_eligible(t0(), Some(last), last + interval()));
    }

    // ── maintenance_eligible ───────────────────────────────────

    #[test]
    fn maintenance_unassigned_is_never_eligible() {
        let policy = ReminderPolicy::default();
        assert!(!policy.maintenance_eligible(None, t0() + Duration::days(365)));
    }

    #[test]
    fn maintenance_never_reminded_measures_from_assignment() {
        let policy = ReminderPolicy::default();
        let record = MaintenanceRecord {
            assigned_at: t0(),
            last_reminder_at: None,
        };
        assert!(!policy.maintenance_eligible(Some(&record), t0() + Duration::days(1)));
        assert!(policy.maintenance_eligible(Some(&record), t0() + Duration::days(2)));
    }

    #[test]
    fn maintenance_reminded_measures_from_last_reminder() {
        let policy = ReminderPolicy::default();
        let record = MaintenanceRecord {
            assigned_at: t0(),
            last_reminder_at: Some(t0() + Duration::days(2)),
        };
        assert!(!policy.maintenance_eligible(Some(&record), t0() + Duration::days(3)));
        assert!(policy.maintenance_eligible(Some(&record), t0() + Duration::days(4)));
    }

    // ── humanize_elapsed ───────────────────────────────────────

    #[test]
    fn humanize_no_instant_is_none() {
        assert_eq!(humanize_elapsed(None, t0()), None);
    }

    #[test]
    fn humanize_fixed_points() {
        let cases = [
            (Duration::zero(), "Just now"),
            (Duration::minutes(59), "Just now"),
            (Duration::hours(1), "1 hour ago"),
            (Duration::hours(5), "5 hours ago"),
            (Duration::hours(23), "23 hours ago"),
            (Duration::days(1), "1 day ago"),
            (Duration::milliseconds(REMINDER_INTERVAL_MS), "2 days ago"),
            (Duration::days(10), "10 days ago"),
        ];
        for (elapsed, expected) in cases {
            assert_eq!(
                humanize_elapsed(Some(t0()), t0() + elapsed).as_deref(),
                Some(expected),
                "elapsed {:?}",
                elapsed
            );
        }
    }

    #[test]
    fn humanize_clock_skew_degrades_to_just_now() {
        // Instant in the future (skewed store) reads as "Just now".
        assert_eq!(
            humanize_elapsed(Some(t0() + Duration::hours(2)), t0()).as_deref(),
            Some("Just now")
        );
    }
}
