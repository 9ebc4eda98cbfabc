//! Percentage of the scrollable distance already traversed.

use std::cell::Cell;
use std::rc::{Rc, Weak};

use super::error::TrackError;
use super::subscription::{LayoutProvider, ScrollMetrics, ScrollSource, Subscription};

/// `None` when the page cannot scroll, i.e. content fits in the viewport.
pub fn scroll_progress(metrics: ScrollMetrics) -> Option<f64> {
    let total = metrics.scrollable_distance();
    if total.is_nan() || total <= 0.0 {
        return None;
    }
    let raw = metrics.scroll_offset / total * 100.0;
    if raw.is_nan() {
        return None;
    }
    Some(raw.clamp(0.0, 100.0))
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollProgressTracker {
    percent: f64,
}

impl ScrollProgressTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn percent(&self) -> f64 {
        self.percent
    }

    /// On a degenerate page the last value is held. Returns `true` on change.
    pub fn update(&mut self, metrics: ScrollMetrics) -> bool {
        match scroll_progress(metrics) {
            Some(percent) if percent != self.percent => {
                self.percent = percent;
                true
            }
            _ => false,
        }
    }
}

#[derive(Debug)]
pub struct ScrollProgressWatch {
    tracker: Rc<Cell<ScrollProgressTracker>>,
    _subscription: Subscription,
}

impl ScrollProgressWatch {
    pub fn percent(&self) -> f64 {
        self.tracker.get().percent()
    }
}

/// Computes once immediately, then again on every scroll tick.
pub fn watch(
    source: &dyn ScrollSource,
    layout: Rc<dyn LayoutProvider>,
    on_change: impl Fn(f64) + 'static,
) -> Result<ScrollProgressWatch, TrackError> {
    let mut initial = ScrollProgressTracker::new();
    if initial.update(layout.metrics()) {
        on_change(initial.percent());
    }

    let tracker = Rc::new(Cell::new(initial));
    let weak: Weak<Cell<ScrollProgressTracker>> = Rc::downgrade(&tracker);

    let subscription = source.subscribe(Box::new(move || {
        let Some(tracker) = weak.upgrade() else {
            return;
        };
        let mut next = tracker.get();
        if next.update(layout.metrics()) {
            tracker.set(next);
            on_change(next.percent());
        }
    }))?;

    Ok(ScrollProgressWatch {
        tracker,
        _subscription: subscription,
    })
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use proptest::prelude::*;

    use super::*;
    use crate::tracking::testing::{FixedLayout, ManualScroll};

    fn metrics(scroll_offset: f64, document_height: f64, viewport_height: f64) -> ScrollMetrics {
        ScrollMetrics {
            scroll_offset,
            document_height,
            viewport_height,
        }
    }

    #[test]
    fn endpoints_are_zero_and_hundred() {
        assert_eq!(scroll_progress(metrics(0.0, 3_000.0, 1_000.0)), Some(0.0));
        assert_eq!(scroll_progress(metrics(2_000.0, 3_000.0, 1_000.0)), Some(100.0));
        assert_eq!(scroll_progress(metrics(500.0, 3_000.0, 1_000.0)), Some(25.0));
    }

    #[test]
    fn overscroll_is_clamped() {
        assert_eq!(scroll_progress(metrics(2_400.0, 3_000.0, 1_000.0)), Some(100.0));
        assert_eq!(scroll_progress(metrics(-40.0, 3_000.0, 1_000.0)), Some(0.0));
    }

    #[test]
    fn page_that_fits_has_no_progress() {
        assert_eq!(scroll_progress(metrics(0.0, 800.0, 800.0)), None);
        assert_eq!(scroll_progress(metrics(10.0, 600.0, 800.0)), None);
    }

    #[test]
    fn degenerate_page_holds_the_last_value() {
        let mut tracker = ScrollProgressTracker::new();
        tracker.update(metrics(1_000.0, 3_000.0, 1_000.0));
        assert_eq!(tracker.percent(), 50.0);

        assert!(!tracker.update(metrics(0.0, 1_000.0, 1_000.0)));
        assert_eq!(tracker.percent(), 50.0);
    }

    #[test]
    fn degenerate_page_stays_at_zero_across_scrolls() {
        let source = ManualScroll::new();
        let layout = Rc::new(FixedLayout::new(900.0, 900.0));
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = calls.clone();
        let watch = watch(&source, layout.clone(), move |p| sink.borrow_mut().push(p)).unwrap();

        for offset in [0.0, 15.0, 300.0] {
            layout.scroll_to(offset);
            source.scroll();
        }

        assert_eq!(watch.percent(), 0.0);
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn initial_value_is_computed_at_mount() {
        let source = ManualScroll::new();
        let layout = Rc::new(FixedLayout::new(2_000.0, 1_000.0));
        layout.scroll_to(250.0);
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = calls.clone();

        let watch = watch(&source, layout, move |p| sink.borrow_mut().push(p)).unwrap();

        assert_eq!(watch.percent(), 25.0);
        assert_eq!(*calls.borrow(), vec![25.0]);
    }

    #[test]
    fn scroll_ticks_update_until_dropped() {
        let source = ManualScroll::new();
        let layout = Rc::new(FixedLayout::new(2_000.0, 1_000.0));
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = calls.clone();
        let watch = watch(&source, layout.clone(), move |p| sink.borrow_mut().push(p)).unwrap();

        layout.scroll_to(500.0);
        source.scroll();
        layout.scroll_to(1_000.0);
        source.scroll();
        drop(watch);
        layout.scroll_to(0.0);
        source.scroll();

        assert_eq!(*calls.borrow(), vec![50.0, 100.0]);
        assert_eq!(source.listener_count(), 0);
    }

    proptest! {
        #[test]
        fn progress_stays_in_range(
            offset in 0.0f64..1.0e7,
            document in 0.0f64..1.0e7,
            viewport in 0.0f64..1.0e5,
        ) {
            if let Some(percent) = scroll_progress(metrics(offset, document, viewport)) {
                prop_assert!((0.0..=100.0).contains(&percent));
            }
        }
    }
}
