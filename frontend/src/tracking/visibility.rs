//! One-way "has this section been seen" flag driving entrance animations.

use std::cell::Cell;
use std::rc::{Rc, Weak};

use log::debug;

use super::error::TrackError;
use super::subscription::{IntersectionReading, IntersectionSource, Subscription};

/// `Hidden -> Visible` is the only transition; there is no way back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Hidden,
    Visible,
}

impl Visibility {
    pub fn is_visible(self) -> bool {
        self == Visibility::Visible
    }

    /// Folds one intersection reading into the state.
    ///
    /// A section taller than `viewport / threshold` never reaches the
    /// threshold ratio, so filling the viewport also counts as seen.
    pub fn observe(self, reading: IntersectionReading, threshold: f64) -> Self {
        match self {
            Visibility::Visible => Visibility::Visible,
            Visibility::Hidden
                if reading.is_intersecting
                    && (reading.ratio >= threshold || reading.fills_viewport) =>
            {
                Visibility::Visible
            }
            Visibility::Hidden => Visibility::Hidden,
        }
    }
}

/// Keeps a [`Visibility`] in step with an intersection source until dropped.
///
/// The observer callback only holds a weak handle to the state, so a
/// notification delivered after the tracker is gone does nothing.
#[derive(Debug)]
pub struct VisibilityTracker {
    state: Rc<Cell<Visibility>>,
    _subscription: Subscription,
}

impl VisibilityTracker {
    /// Starts observing. `on_visible` runs once, on the flip to visible.
    pub fn mount(
        source: &dyn IntersectionSource,
        threshold: f64,
        on_visible: impl Fn() + 'static,
    ) -> Result<Self, TrackError> {
        let threshold = clamp_threshold(threshold);
        let state = Rc::new(Cell::new(Visibility::Hidden));
        let weak: Weak<Cell<Visibility>> = Rc::downgrade(&state);

        let subscription = source.observe(
            threshold,
            Box::new(move |reading| {
                let Some(state) = weak.upgrade() else {
                    return;
                };
                let before = state.get();
                let after = before.observe(reading, threshold);
                if before != after {
                    state.set(after);
                    debug!("section became visible at ratio {:.2}", reading.ratio);
                    on_visible();
                }
            }),
        )?;

        Ok(Self {
            state,
            _subscription: subscription,
        })
    }

    #[cfg(test)]
    pub fn visibility(&self) -> Visibility {
        self.state.get()
    }

    pub fn is_visible(&self) -> bool {
        self.state.get().is_visible()
    }
}

fn clamp_threshold(threshold: f64) -> f64 {
    if threshold.is_nan() {
        crate::config::DEFAULT_VISIBILITY_THRESHOLD
    } else {
        threshold.clamp(0.0, 1.0)
    }
}
