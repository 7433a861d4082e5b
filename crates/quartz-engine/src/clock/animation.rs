use crate::surface::RasterError;
use crate::time::{ClockTime, SystemTimeSource, TimeSource};

use super::ClockRenderer;

/// Start/stop-able render loop around a [`ClockRenderer`].
///
/// The host calls [`tick`](Self::tick) from its display-refresh callback;
/// while stopped, ticks paint nothing.
pub struct AnimationHandle {
    renderer: ClockRenderer,
    source: Box<dyn TimeSource>,
    running: bool,
    frames: u64,
}

impl AnimationHandle {
    pub fn new(renderer: ClockRenderer, source: impl TimeSource + 'static) -> Self {
        Self {
            renderer,
            source: Box::new(source),
            running: false,
            frames: 0,
        }
    }

    pub fn with_system_clock(renderer: ClockRenderer) -> Self {
        Self::new(renderer, SystemTimeSource)
    }

    /// Starts the loop and paints the first frame immediately.
    ///
    /// Starting a running handle is a no-op.
    pub fn start(&mut self) -> Result<(), RasterError> {
        if self.running {
            return Ok(());
        }
        self.running = true;
        log::debug!("clock animation started");
        self.tick().map(|_| ())
    }

    pub fn stop(&mut self) {
        if self.running {
            log::debug!("clock animation stopped after {} frames", self.frames);
        }
        self.running = false;
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Paints one frame at the source's current time.
    ///
    /// Returns the time painted, or `None` when stopped.
    pub fn tick(&mut self) -> Result<Option<ClockTime>, RasterError> {
        if !self.running {
            return Ok(None);
        }
        let t = self.renderer.render_at(self.source.now_utc())?;
        self.frames += 1;
        Ok(Some(t))
    }

    /// Frames painted since construction.
    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    #[inline]
    pub fn renderer(&self) -> &ClockRenderer {
        &self.renderer
    }

    pub fn into_renderer(self) -> ClockRenderer {
        self.renderer
    }
}

impl std::fmt::Debug for AnimationHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnimationHandle")
            .field("renderer", &self.renderer)
            .field("running", &self.running)
            .field("frames", &self.frames)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use chrono::{DateTime, NaiveDate, TimeDelta, TimeZone, Utc};

    use super::*;
    use crate::clock::ClockOptions;
    use crate::time::ManualTimeSource;

    fn utc(h: u32, m: u32, s: u32) -> DateTime<Utc> {
        let naive = NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap();
        Utc.from_utc_datetime(&naive)
    }

    fn handle(start: DateTime<Utc>) -> (AnimationHandle, Rc<ManualTimeSource>) {
        let source = Rc::new(ManualTimeSource::new(start));
        let renderer = ClockRenderer::new(ClockOptions::new().size(160, 160)).unwrap();
        (AnimationHandle::new(renderer, Rc::clone(&source)), source)
    }

    #[test]
    fn new_handle_is_stopped_and_idle() {
        let (mut h, _) = handle(utc(1, 2, 3));
        assert!(!h.is_running());
        assert_eq!(h.tick().unwrap(), None);
        assert_eq!(h.frames(), 0);
        assert_eq!(h.renderer().surface().snapshot(), *h.renderer().face());
    }

    #[test]
    fn start_paints_first_frame() {
        let (mut h, _) = handle(utc(7, 45, 30));
        h.start().unwrap();
        assert!(h.is_running());
        assert_eq!(h.frames(), 1);
        assert_ne!(h.renderer().surface().snapshot(), *h.renderer().face());

        h.start().unwrap();
        assert_eq!(h.frames(), 1);
    }

    #[test]
    fn tick_follows_the_time_source() {
        let (mut h, source) = handle(utc(22, 0, 0));
        h.start().unwrap();
        source.advance(TimeDelta::milliseconds(1_400));
        let t = h.tick().unwrap().unwrap();
        assert_eq!((t.hours, t.minutes), (22, 0));
        assert!((t.seconds - 1.4).abs() < 1e-4);
    }

    #[test]
    fn stopped_handle_does_not_repaint() {
        let (mut h, source) = handle(utc(3, 0, 0));
        h.start().unwrap();
        let painted = h.renderer().surface().snapshot();

        h.stop();
        source.set(utc(9, 30, 0));
        assert_eq!(h.tick().unwrap(), None);
        assert_eq!(h.renderer().surface().snapshot(), painted);
        assert_eq!(h.frames(), 1);
    }

    #[test]
    fn restart_resumes_painting() {
        let (mut h, source) = handle(utc(3, 0, 0));
        h.start().unwrap();
        h.stop();
        let painted = h.renderer().surface().snapshot();

        source.set(utc(9, 30, 0));
        h.start().unwrap();
        assert_ne!(h.renderer().surface().snapshot(), painted);
        assert_eq!(h.tick().unwrap().map(|t| t.hours), Some(9));
        assert_eq!(h.frames(), 3);
    }
}
