use log::Level;

use crate::tracking::SectionId;

/// Distance below the scroll offset used as the active-section probe.
pub const PROBE_OFFSET_PX: f64 = 100.0;

/// Fraction of a section that must be on screen before it animates in.
pub const DEFAULT_VISIBILITY_THRESHOLD: f64 = 0.1;

/// Duration of the simulated contact form submission.
pub const SUBMIT_DELAY_MS: u32 = 2_000;

pub const SECTION_ORDER: [SectionId; 5] = [
    SectionId::Home,
    SectionId::About,
    SectionId::Experience,
    SectionId::Projects,
    SectionId::Contact,
];

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Local trunk serve
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
