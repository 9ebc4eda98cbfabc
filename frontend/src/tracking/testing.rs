//! In-memory signal sources for driving trackers without a browser.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use super::error::TrackError;
use super::section::{SectionDescriptor, SectionId};
use super::subscription::{
    IntersectionReading, IntersectionSource, LayoutProvider, ScrollMetrics, ScrollSource,
    Subscription,
};

type Registry<T> = Rc<RefCell<Vec<(usize, Rc<RefCell<T>>)>>>;

fn register<T: 'static + ?Sized>(
    registry: &Registry<Box<T>>,
    next_id: &Cell<usize>,
    callback: Box<T>,
) -> (Subscription, Rc<RefCell<Box<T>>>) {
    let id = next_id.get();
    next_id.set(id + 1);
    let callback = Rc::new(RefCell::new(callback));
    registry.borrow_mut().push((id, callback.clone()));
    let registry = registry.clone();
    let subscription = Subscription::new(move || {
        registry.borrow_mut().retain(|(entry, _)| *entry != id);
    });
    (subscription, callback)
}

#[derive(Default)]
pub struct ManualScroll {
    listeners: Registry<Box<dyn FnMut()>>,
    next_id: Cell<usize>,
}

impl ManualScroll {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    pub fn scroll(&self) {
        let listeners: Vec<_> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, callback)| callback.clone())
            .collect();
        for callback in listeners {
            let mut callback = callback.borrow_mut();
            (*callback)();
        }
    }
}

impl ScrollSource for ManualScroll {
    fn subscribe(&self, on_scroll: Box<dyn FnMut()>) -> Result<Subscription, TrackError> {
        Ok(register(&self.listeners, &self.next_id, on_scroll).0)
    }
}

/// Always refuses to hand out a listener.
pub struct BrokenSource;

impl ScrollSource for BrokenSource {
    fn subscribe(&self, _on_scroll: Box<dyn FnMut()>) -> Result<Subscription, TrackError> {
        Err(TrackError::NoWindow)
    }
}

impl IntersectionSource for BrokenSource {
    fn observe(
        &self,
        _threshold: f64,
        _on_change: Box<dyn FnMut(IntersectionReading)>,
    ) -> Result<Subscription, TrackError> {
        Err(TrackError::Observer("not supported".into()))
    }
}

#[derive(Default)]
pub struct FixedLayout {
    metrics: Cell<ScrollMetrics>,
    sections: RefCell<HashMap<SectionId, SectionDescriptor>>,
}

impl FixedLayout {
    pub fn new(document_height: f64, viewport_height: f64) -> Self {
        let layout = Self::default();
        layout.metrics.set(ScrollMetrics {
            scroll_offset: 0.0,
            document_height,
            viewport_height,
        });
        layout
    }

    pub fn place(&self, id: SectionId, top_offset: f64, height: f64) {
        self.sections
            .borrow_mut()
            .insert(id, SectionDescriptor::new(id, top_offset, height));
    }

    pub fn remove(&self, id: SectionId) {
        self.sections.borrow_mut().remove(&id);
    }

    pub fn scroll_to(&self, offset: f64) {
        let mut metrics = self.metrics.get();
        metrics.scroll_offset = offset;
        self.metrics.set(metrics);
    }
}

impl LayoutProvider for FixedLayout {
    fn metrics(&self) -> ScrollMetrics {
        self.metrics.get()
    }

    fn measure(&self, id: SectionId) -> Option<SectionDescriptor> {
        self.sections.borrow().get(&id).copied()
    }
}

#[derive(Default)]
pub struct ManualIntersections {
    observers: Registry<Box<dyn FnMut(IntersectionReading)>>,
    next_id: Cell<usize>,
    thresholds: RefCell<Vec<f64>>,
    // Every callback ever registered, including released ones.
    history: RefCell<Vec<Rc<RefCell<Box<dyn FnMut(IntersectionReading)>>>>>,
}

impl ManualIntersections {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observer_count(&self) -> usize {
        self.observers.borrow().len()
    }

    pub fn thresholds(&self) -> Vec<f64> {
        self.thresholds.borrow().clone()
    }

    pub fn emit(&self, is_intersecting: bool, ratio: f64) {
        self.emit_reading(IntersectionReading {
            is_intersecting,
            ratio,
            fills_viewport: false,
        });
    }

    pub fn emit_reading(&self, reading: IntersectionReading) {
        let observers: Vec<_> = self
            .observers
            .borrow()
            .iter()
            .map(|(_, callback)| callback.clone())
            .collect();
        for callback in observers {
            let mut callback = callback.borrow_mut();
            (*callback)(reading);
        }
    }

    /// Delivers to every callback, registered or not, the way a queued
    /// browser notification can arrive after its observer was disconnected.
    pub fn emit_late(&self, is_intersecting: bool, ratio: f64) {
        for callback in self.history.borrow().iter() {
            let mut callback = callback.borrow_mut();
            (*callback)(IntersectionReading {
                is_intersecting,
                ratio,
                fills_viewport: false,
            });
        }
    }
}

impl IntersectionSource for ManualIntersections {
    fn observe(
        &self,
        threshold: f64,
        on_change: Box<dyn FnMut(IntersectionReading)>,
    ) -> Result<Subscription, TrackError> {
        self.thresholds.borrow_mut().push(threshold);
        let (subscription, callback) = register(&self.observers, &self.next_id, on_change);
        self.history.borrow_mut().push(callback);
        Ok(subscription)
    }
}
