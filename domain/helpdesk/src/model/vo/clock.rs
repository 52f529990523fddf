use chrono::{DateTime, Duration, SubsecRound, Utc};

/// Current time at the millisecond precision every supported store keeps.
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

/// The `updated_at` to write for a mutation at `now` of a row last touched at
/// `previous`. Strictly later than `previous` even when the clock has not moved
/// (or moved backwards).
pub fn advance_timestamp(previous: DateTime<Utc>, now: DateTime<Utc>) -> DateTime<Utc> {
    if now > previous {
        now
    } else {
        previous + Duration::milliseconds(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn advance_uses_clock_when_it_moved_forward() {
        let previous = Utc.with_ymd_and_hms(2024, 3, 20, 10, 0, 0).unwrap();
        let later = previous + Duration::seconds(5);
        assert_eq!(advance_timestamp(previous, later), later);
    }

    #[test]
    fn advance_is_strict_when_clock_stalls_or_rewinds() {
        let previous = Utc.with_ymd_and_hms(2024, 3, 20, 10, 0, 0).unwrap();
        assert!(advance_timestamp(previous, previous) > previous);
        assert!(advance_timestamp(previous, previous - Duration::hours(1)) > previous);
    }
}
