use std::cell::Cell;
use std::rc::Rc;

use chrono::{DateTime, TimeDelta, Utc};

/// Wall-clock provider.
///
/// The animation samples this once per tick. Inject [`ManualTimeSource`] for
/// deterministic rendering.
pub trait TimeSource {
    fn now_utc(&self) -> DateTime<Utc>;
}

/// Reads the operating system clock.
#[derive(Debug, Copy, Clone, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Time source that only moves when told to.
#[derive(Debug, Clone)]
pub struct ManualTimeSource {
    now: Cell<DateTime<Utc>>,
}

impl ManualTimeSource {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self { now: Cell::new(start) }
    }

    pub fn set(&self, now: DateTime<Utc>) {
        self.now.set(now);
    }

    pub fn advance(&self, by: TimeDelta) {
        self.now.set(self.now.get() + by);
    }
}

impl TimeSource for ManualTimeSource {
    fn now_utc(&self) -> DateTime<Utc> {
        self.now.get()
    }
}

impl<T: TimeSource + ?Sized> TimeSource for Rc<T> {
    fn now_utc(&self) -> DateTime<Utc> {
        (**self).now_utc()
    }
}

impl<T: TimeSource + ?Sized> TimeSource for Box<T> {
    fn now_utc(&self) -> DateTime<Utc> {
        (**self).now_utc()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn manual_source_advances() {
        let start = Utc.with_ymd_and_hms(2024, 3, 1, 23, 59, 59).unwrap();
        let src = ManualTimeSource::new(start);
        src.advance(TimeDelta::seconds(2));
        assert_eq!(src.now_utc(), Utc.with_ymd_and_hms(2024, 3, 2, 0, 0, 1).unwrap());
    }

    #[test]
    fn shared_manual_source_is_observed_through_rc() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let src = Rc::new(ManualTimeSource::new(start));
        let boxed: Box<dyn TimeSource> = Box::new(Rc::clone(&src));
        src.advance(TimeDelta::minutes(5));
        assert_eq!(boxed.now_utc(), start + TimeDelta::minutes(5));
    }
}
