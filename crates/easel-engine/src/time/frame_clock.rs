use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Milliseconds elapsed since the previous tick (after clamping).
    pub dt_ms: f64,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

#[derive(Debug, Clone)]
enum Step {
    /// Wall-clock delta clamped to `[min, max]`.
    Variable { last: Instant, min: Duration, max: Duration },
    /// Constant delta regardless of wall time.
    Fixed(Duration),
}

/// Produces one `FrameTime` per presented frame.
///
/// The variable-step clock clamps its delta so a debugger pause or a
/// minimized window does not hand the UI a multi-second step. The fixed-step
/// clock is deterministic and is what tests and replays use.
#[derive(Debug, Clone)]
pub struct FrameClock {
    step: Step,
    frame_index: u64,
}

impl FrameClock {
    pub const DEFAULT_MIN_DT: Duration = Duration::from_micros(100);
    pub const DEFAULT_MAX_DT: Duration = Duration::from_millis(250);

    pub fn new() -> Self {
        Self::with_clamps(Self::DEFAULT_MIN_DT, Self::DEFAULT_MAX_DT)
    }

    /// Creates a variable-step clock with custom delta-time clamps.
    pub fn with_clamps(dt_min: Duration, dt_max: Duration) -> Self {
        debug_assert!(dt_min <= dt_max);
        Self {
            step: Step::Variable { last: Instant::now(), min: dt_min, max: dt_max },
            frame_index: 0,
        }
    }

    /// Creates a clock that advances by exactly `1 / fps` seconds per tick.
    pub fn fixed(fps: u32) -> Self {
        debug_assert!(fps > 0, "fixed clock needs a positive rate");
        Self {
            step: Step::Fixed(Duration::from_secs_f64(1.0 / fps.max(1) as f64)),
            frame_index: 0,
        }
    }

    #[inline]
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    /// Resets the wall-clock baseline (e.g. when resuming from suspension).
    pub fn reset(&mut self) {
        if let Step::Variable { last, .. } = &mut self.step {
            *last = Instant::now();
        }
    }

    /// Advances the clock and returns a new `FrameTime`.
    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let dt = match &mut self.step {
            Step::Variable { last, min, max } => {
                let dt = now.saturating_duration_since(*last).clamp(*min, *max);
                *last = now;
                dt
            }
            Step::Fixed(dt) => *dt,
        };

        let ft = FrameTime {
            dt_ms: dt.as_secs_f64() * 1000.0,
            now,
            frame_index: self.frame_index,
        };
        self.frame_index = self.frame_index.wrapping_add(1);
        ft
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
