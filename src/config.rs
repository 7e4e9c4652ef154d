//! Timing and storage settings.
//!
//! Every simulated delay is expressed in milliseconds here and converted to
//! clock ticks once, when a view arms its countdown.

/// Session storage key holding the JSON list of resume skills.
pub const SKILLS_STORAGE_KEY: &str = "resumeSkills";

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// Clock resolution (ticks per real-time second).
    pub ticks_per_sec: u32,
    /// Delay between picking an option and the Next control appearing.
    pub selection_confirm_ms: u32,
    /// Simulated scoring time on the results screen.
    pub results_delay_ms: u32,
    /// Stagger between the analysis step bars while results load.
    pub analysis_stagger_ms: u32,
    /// How long each upload progress value is held.
    pub upload_step_ms: u32,
    /// Progress added per upload step.
    pub upload_step_percent: u8,
    /// Simulated resume analysis time after the upload reaches 100%.
    pub processing_ms: u32,
    /// Lifetime of a toast notice.
    pub notice_ms: u32,
    pub skills_key: &'static str,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ticks_per_sec: 20,
            selection_confirm_ms: 400,
            results_delay_ms: 1_500,
            analysis_stagger_ms: 500,
            upload_step_ms: 150,
            upload_step_percent: 10,
            processing_ms: 1_500,
            notice_ms: 4_000,
            skills_key: SKILLS_STORAGE_KEY,
        }
    }
}

impl AppConfig {
    /// Milliseconds per tick.
    pub fn ms_per_tick(&self) -> f64 {
        1000.0 / self.ticks_per_sec.max(1) as f64
    }

    /// Convert a delay to whole ticks, rounding up. Never returns 0 so that a
    /// delay always spans at least one frame.
    pub fn ticks(&self, ms: u32) -> u32 {
        let ticks = (ms as f64 / self.ms_per_tick()).ceil() as u32;
        ticks.max(1)
    }
}
