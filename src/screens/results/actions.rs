//! Click ids for the results screen.

pub const TAB_RECOMMENDED: u16 = 10;
pub const TAB_ALL: u16 = 11;
pub const TAB_SAVED: u16 = 12;
pub const RETAKE: u16 = 20;
pub const EXPLORE: u16 = 21;
pub const SCROLL_UP: u16 = 30;
pub const SCROLL_DOWN: u16 = 31;
