//! Which section the reader is currently in.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::debug;

use super::error::TrackError;
use super::section::{SectionDescriptor, SectionId};
use super::subscription::{LayoutProvider, ScrollSource, Subscription};
use crate::config::PROBE_OFFSET_PX;

pub fn probe_point(scroll_offset: f64) -> f64 {
    scroll_offset + PROBE_OFFSET_PX
}

/// First section, in iteration order, whose span contains `probe`.
pub fn resolve_active<I>(probe: f64, sections: I) -> Option<SectionId>
where
    I: IntoIterator<Item = SectionDescriptor>,
{
    sections
        .into_iter()
        .find(|section| section.contains(probe))
        .map(|section| section.id)
}

#[derive(Debug, Clone)]
pub struct ActiveSectionTracker {
    order: Vec<SectionId>,
    current: SectionId,
}

impl ActiveSectionTracker {
    pub fn new(order: &[SectionId]) -> Self {
        Self {
            order: order.to_vec(),
            current: SectionId::default(),
        }
    }

    pub fn current(&self) -> SectionId {
        self.current
    }

    /// Re-resolves against live layout. Sections that cannot be measured
    /// are skipped; when nothing matches, the previous id is kept.
    /// Returns `true` when the active id changed.
    pub fn update(&mut self, layout: &dyn LayoutProvider) -> bool {
        let probe = probe_point(layout.metrics().scroll_offset);
        let measured = self.order.iter().filter_map(|id| layout.measure(*id));
        match resolve_active(probe, measured) {
            Some(id) if id != self.current => {
                debug!("active section {} -> {}", self.current, id);
                self.current = id;
                true
            }
            _ => false,
        }
    }
}

/// An [`ActiveSectionTracker`] bound to a scroll source.
#[derive(Debug)]
pub struct ActiveSectionWatch {
    tracker: Rc<RefCell<ActiveSectionTracker>>,
    _subscription: Subscription,
}

impl ActiveSectionWatch {
    pub fn current(&self) -> SectionId {
        self.tracker.borrow().current()
    }
}

/// Recomputes on every scroll tick and reports changes through `on_change`.
pub fn watch(
    source: &dyn ScrollSource,
    layout: Rc<dyn LayoutProvider>,
    order: &[SectionId],
    on_change: impl Fn(SectionId) + 'static,
) -> Result<ActiveSectionWatch, TrackError> {
    let tracker = Rc::new(RefCell::new(ActiveSectionTracker::new(order)));
    let weak: Weak<RefCell<ActiveSectionTracker>> = Rc::downgrade(&tracker);

    let subscription = source.subscribe(Box::new(move || {
        let Some(tracker) = weak.upgrade() else {
            return;
        };
        let changed = {
            let mut tracker = tracker.borrow_mut();
            tracker.update(layout.as_ref()).then(|| tracker.current())
        };
        if let Some(id) = changed {
            on_change(id);
        }
    }))?;

    Ok(ActiveSectionWatch {
        tracker,
        _subscription: subscription,
    })
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::config::SECTION_ORDER;
    use crate::tracking::testing::{BrokenSource, FixedLayout, ManualScroll};

    fn stacked_page() -> Rc<FixedLayout> {
        let layout = Rc::new(FixedLayout::new(4_000.0, 800.0));
        layout.place(SectionId::Home, 0.0, 800.0);
        layout.place(SectionId::About, 800.0, 700.0);
        layout.place(SectionId::Experience, 1_500.0, 900.0);
        layout.place(SectionId::Projects, 2_400.0, 1_000.0);
        layout.place(SectionId::Contact, 3_400.0, 600.0);
        layout
    }

    #[test]
    fn probe_sits_below_the_scroll_offset() {
        assert_eq!(probe_point(0.0), 100.0);
        assert_eq!(probe_point(1_250.0), 1_350.0);
    }

    #[test]
    fn overlapping_spans_resolve_to_first_in_order() {
        let sections = [
            SectionDescriptor::new(SectionId::About, 0.0, 1_000.0),
            SectionDescriptor::new(SectionId::Experience, 500.0, 1_000.0),
        ];
        assert_eq!(resolve_active(600.0, sections), Some(SectionId::About));

        let reversed = [sections[1], sections[0]];
        assert_eq!(resolve_active(600.0, reversed), Some(SectionId::Experience));
    }

    #[test]
    fn boundary_belongs_to_the_lower_section() {
        let layout = stacked_page();
        let mut tracker = ActiveSectionTracker::new(&SECTION_ORDER);

        layout.scroll_to(700.0);
        assert!(tracker.update(layout.as_ref()));
        assert_eq!(tracker.current(), SectionId::About);
    }

    #[test]
    fn no_match_keeps_previous_id() {
        let layout = stacked_page();
        let mut tracker = ActiveSectionTracker::new(&SECTION_ORDER);

        layout.scroll_to(2_500.0);
        tracker.update(layout.as_ref());
        assert_eq!(tracker.current(), SectionId::Projects);

        layout.scroll_to(9_000.0);
        assert!(!tracker.update(layout.as_ref()));
        assert_eq!(tracker.current(), SectionId::Projects);
    }

    #[test]
    fn unmeasurable_section_is_skipped() {
        let layout = stacked_page();
        layout.remove(SectionId::About);
        let mut tracker = ActiveSectionTracker::new(&SECTION_ORDER);

        layout.scroll_to(900.0);
        tracker.update(layout.as_ref());
        assert_eq!(tracker.current(), SectionId::Home);

        layout.scroll_to(1_600.0);
        tracker.update(layout.as_ref());
        assert_eq!(tracker.current(), SectionId::Experience);
    }

    #[test]
    fn watch_reports_changes_only() {
        let source = ManualScroll::new();
        let layout = stacked_page();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let watch = watch(&source, layout.clone(), &SECTION_ORDER, move |id| {
            sink.borrow_mut().push(id)
        })
        .unwrap();

        for offset in [0.0, 50.0, 900.0, 950.0, 3_500.0] {
            layout.scroll_to(offset);
            source.scroll();
        }

        assert_eq!(
            *seen.borrow(),
            vec![SectionId::About, SectionId::Contact]
        );
        assert_eq!(watch.current(), SectionId::Contact);
    }

    #[test]
    fn dropping_the_watch_removes_the_listener() {
        let source = ManualScroll::new();
        let watch = watch(&source, stacked_page(), &SECTION_ORDER, |_| {}).unwrap();
        assert_eq!(source.listener_count(), 1);
        drop(watch);
        assert_eq!(source.listener_count(), 0);
    }

    #[test]
    fn listener_failure_is_reported() {
        let result = watch(&BrokenSource, stacked_page(), &SECTION_ORDER, |_| {});
        assert!(matches!(result, Err(TrackError::NoWindow)));
    }
}
