//! Signal sources the trackers subscribe to.
//!
//! Every source hands back a [`Subscription`]. Dropping it releases the
//! underlying listener or observer, so a tracker that is torn down early
//! (before any event fires) still leaves nothing registered behind.

use std::fmt;

use super::error::TrackError;
use super::section::{SectionDescriptor, SectionId};

/// Releases a listener or observer exactly once, on `unsubscribe` or drop.
#[must_use = "dropping a Subscription immediately unsubscribes"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    #[cfg(test)]
    pub fn unsubscribe(mut self) {
        self.release_now();
    }

    fn release_now(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release_now();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}

/// Page geometry at the moment of a scroll tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    pub scroll_offset: f64,
    pub document_height: f64,
    pub viewport_height: f64,
}

impl ScrollMetrics {
    pub fn scrollable_distance(&self) -> f64 {
        self.document_height - self.viewport_height
    }
}

/// One intersection notification for an observed element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionReading {
    pub is_intersecting: bool,
    pub ratio: f64,
    /// The visible part covers the whole viewport height.
    pub fills_viewport: bool,
}

/// Emits a tick whenever the page scrolls.
pub trait ScrollSource {
    fn subscribe(&self, on_scroll: Box<dyn FnMut()>) -> Result<Subscription, TrackError>;
}

/// Live layout measurements. `measure` returns `None` for a section that is
/// not mounted or cannot be measured yet.
pub trait LayoutProvider {
    fn metrics(&self) -> ScrollMetrics;
    fn measure(&self, id: SectionId) -> Option<SectionDescriptor>;
}

/// Reports how much of one element overlaps the viewport.
pub trait IntersectionSource {
    fn observe(
        &self,
        threshold: f64,
        on_change: Box<dyn FnMut(IntersectionReading)>,
    ) -> Result<Subscription, TrackError>;
}
