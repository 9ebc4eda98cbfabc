//! Scroll-driven tracking: entrance visibility, active section, progress.
//!
//! The trackers themselves are plain state machines fed through the
//! [`subscription`] traits; [`dom`] supplies browser-backed sources and
//! [`hooks`] wires the two together for components.

pub mod active_section;
pub mod dom;
pub mod error;
pub mod hooks;
pub mod progress;
pub mod section;
pub mod subscription;
pub mod visibility;

#[cfg(test)]
pub mod testing;

pub use error::TrackError;
pub use section::SectionId;
