//! Fixed-step clock and tick countdowns.
//!
//! `draw_web()` fires at the browser's frame rate with a variable delta.
//! `FrameClock` turns that into whole ticks so every simulated delay in the
//! app is a deterministic number of ticks and can be tested without a browser.

pub struct FrameClock {
    ms_per_tick: f64,
    /// Milliseconds carried over to the next frame.
    carry: f64,
    pub total_ticks: u64,
    last_frame_ms: Option<f64>,
}

/// Largest frame delta accepted. A backgrounded tab resumes with a huge gap;
/// it is treated as a short stall instead.
const MAX_FRAME_DELTA_MS: f64 = 500.0;

impl FrameClock {
    pub fn new(ticks_per_sec: u32) -> Self {
        Self {
            ms_per_tick: 1000.0 / ticks_per_sec.max(1) as f64,
            carry: 0.0,
            total_ticks: 0,
            last_frame_ms: None,
        }
    }

    /// Feed the current timestamp and get the number of ticks that elapsed
    /// since the previous frame. The first frame yields no ticks.
    pub fn update(&mut self, now_ms: f64) -> u32 {
        let delta = self
            .last_frame_ms
            .map(|prev| (now_ms - prev).clamp(0.0, MAX_FRAME_DELTA_MS))
            .unwrap_or(0.0);
        self.last_frame_ms = Some(now_ms);

        self.carry += delta;
        let ticks = (self.carry / self.ms_per_tick) as u32;
        self.carry -= ticks as f64 * self.ms_per_tick;
        self.total_ticks += ticks as u64;
        ticks
    }
}

/// A one-shot timer measured in ticks.
///
/// Dropping a `Countdown` cancels it; views own their countdowns so leaving a
/// view stops every timer it armed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Countdown {
    total: u32,
    remaining: u32,
}

impl Countdown {
    pub fn new(ticks: u32) -> Self {
        Self {
            total: ticks,
            remaining: ticks,
        }
    }

    /// Advance by `ticks`. Returns true exactly once, on the call that
    /// brings the countdown to zero.
    pub fn advance(&mut self, ticks: u32) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining = self.remaining.saturating_sub(ticks);
        self.remaining == 0
    }

    pub fn is_done(&self) -> bool {
        self.remaining == 0
    }

    pub fn elapsed(&self) -> u32 {
        self.total - self.remaining
    }

    pub fn total(&self) -> u32 {
        self.total
    }
}
