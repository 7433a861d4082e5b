use chrono::{DateTime, Timelike, Utc};

/// Whole-hour bias added to the UTC hour.
///
/// Not a timezone: no DST, no fractional-hour zones.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct TimeOffset(pub i32);

impl TimeOffset {
    #[inline]
    pub const fn hours(self) -> i32 {
        self.0
    }

    /// Applies the offset to a UTC hour, wrapping into `[0, 24)`.
    ///
    /// Uses the Euclidean remainder, so negative sums wrap backwards
    /// (`2 - 5` is 21, not -3).
    #[inline]
    pub fn apply(self, utc_hour: u32) -> u32 {
        (utc_hour as i64 + self.0 as i64).rem_euclid(24) as u32
    }
}

/// Hand positions for one frame.
///
/// `seconds` carries the sub-second fraction quantized down to 0.2s steps.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ClockTime {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: f32,
}

impl ClockTime {
    /// Step the fractional second is floored to.
    pub const FRACTION_STEP_MS: u32 = 200;

    pub const fn new(hours: u32, minutes: u32, seconds: f32) -> Self {
        Self { hours, minutes, seconds }
    }

    /// Derives the displayed time from a UTC instant and an hour offset.
    pub fn sample(now: DateTime<Utc>, offset: TimeOffset) -> Self {
        // nanosecond() exceeds 1e9 during a leap second; clamp into the last step.
        let millis = (now.nanosecond() / 1_000_000).min(999);
        Self {
            hours: offset.apply(now.hour()),
            minutes: now.minute(),
            seconds: now.second() as f32 + quantize_fraction(millis),
        }
    }
}

/// `floor(millis / 200) * 0.2`
#[inline]
fn quantize_fraction(millis: u32) -> f32 {
    (millis / ClockTime::FRACTION_STEP_MS) as f32 * 0.2
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};

    fn at(h: u32, m: u32, s: u32, ms: u32) -> DateTime<Utc> {
        let naive = NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_milli_opt(h, m, s, ms)
            .unwrap();
        Utc.from_utc_datetime(&naive)
    }

    // ── offset ────────────────────────────────────────────────────────────

    #[test]
    fn positive_offset_wraps_past_midnight() {
        assert_eq!(TimeOffset(5).apply(22), 3);
    }

    #[test]
    fn negative_offset_wraps_backwards() {
        assert_eq!(TimeOffset(-5).apply(2), 21);
        assert_eq!(TimeOffset(-24).apply(0), 0);
    }

    #[test]
    fn large_offsets_stay_in_range() {
        assert_eq!(TimeOffset(49).apply(23), 0);
        assert!(TimeOffset(i32::MIN).apply(23) < 24);
    }

    // ── sampling ──────────────────────────────────────────────────────────

    #[test]
    fn sample_applies_offset_and_copies_minutes() {
        let t = ClockTime::sample(at(22, 41, 7, 0), TimeOffset(5));
        assert_eq!(t, ClockTime::new(3, 41, 7.0));
    }

    #[test]
    fn fraction_is_floored_to_fifths() {
        let t = ClockTime::sample(at(1, 2, 3, 999), TimeOffset::default());
        assert!((t.seconds - 3.8).abs() < 1e-5);

        let t = ClockTime::sample(at(1, 2, 3, 199), TimeOffset::default());
        assert_eq!(t.seconds, 3.0);

        let t = ClockTime::sample(at(1, 2, 3, 400), TimeOffset::default());
        assert!((t.seconds - 3.4).abs() < 1e-5);
    }
}
