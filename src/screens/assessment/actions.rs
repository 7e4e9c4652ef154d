//! Click ids for the assessment screen.

pub const OPTION_BASE: u16 = 10; // +index 0..3
pub const NEXT: u16 = 20;
pub const BACK: u16 = 21;
pub const VIEW_RESULTS: u16 = 22;
