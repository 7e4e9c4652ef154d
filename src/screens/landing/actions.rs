//! Click ids for the landing screen.

pub const START_ASSESSMENT: u16 = 10;
pub const VIEW_RECOMMENDATIONS: u16 = 11;
pub const BROWSE_FILES: u16 = 20;
pub const PROCESS_RESUME: u16 = 21;
pub const REMOVE_FILE: u16 = 22;
pub const REMOVE_SKILL_BASE: u16 = 30; // +index 0..8
