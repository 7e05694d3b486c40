use log::Level;

use crate::layout::breakpoint::BreakpointThresholds;
use crate::scroll::progress::TransitionWindow;
use crate::scroll::reveal::RevealConfig;

pub const BREAKPOINTS: BreakpointThresholds = BreakpointThresholds {
    mobile_medium: 375.0,
    tablet: 768.0,
    desktop: 1024.0,
};

pub const RESIZE_DEBOUNCE_MS: u32 = 150;

pub const CAROUSEL_INTERVAL_MS: u32 = 5000;

pub fn reading_window() -> TransitionWindow {
    TransitionWindow::default()
}

pub fn reveal() -> RevealConfig {
    RevealConfig::default()
}

// Missing layout entries panic in development builds
#[cfg(debug_assertions)]
pub fn strict_layouts() -> bool {
    true
}

#[cfg(not(debug_assertions))]
pub fn strict_layouts() -> bool {
    false
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
