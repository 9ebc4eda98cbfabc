use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, ScrollBehavior, ScrollIntoViewOptions, Window,
};

use super::error::TrackError;
use super::section::{SectionDescriptor, SectionId};
use super::subscription::{
    IntersectionReading, IntersectionSource, LayoutProvider, ScrollMetrics, ScrollSource,
    Subscription,
};

// Layout can change on resize without any scroll, so both count as ticks.
const SCROLL_EVENTS: [&str; 2] = ["scroll", "resize"];

fn js_reason(value: JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}

/// Removes a listener per event, logging each failure. Returns how many failed.
fn detach_each<E>(
    events: &[&'static str],
    mut remove: impl FnMut(&'static str) -> Result<(), E>,
    describe: impl Fn(E) -> String,
) -> usize {
    let mut failed = 0;
    for &event in events {
        if let Err(err) = remove(event) {
            warn!("failed to remove {} listener: {}", event, describe(err));
            failed += 1;
        }
    }
    failed
}

/// The visible part of the element is at least as tall as the viewport.
fn covers_viewport(visible_height: f64, root_height: Option<f64>) -> bool {
    root_height.map_or(false, |root| root > 0.0 && visible_height >= root)
}

/// The browser window as both a scroll source and a layout provider.
#[derive(Clone)]
pub struct WindowSource {
    window: Window,
}

impl WindowSource {
    pub fn new() -> Result<Self, TrackError> {
        let window = web_sys::window().ok_or(TrackError::NoWindow)?;
        if window.document().is_none() {
            return Err(TrackError::NoDocument);
        }
        Ok(Self { window })
    }

    fn section_element(&self, id: SectionId) -> Option<HtmlElement> {
        self.window
            .document()?
            .get_element_by_id(id.as_str())?
            .dyn_into::<HtmlElement>()
            .ok()
    }
}

impl ScrollSource for WindowSource {
    fn subscribe(&self, on_scroll: Box<dyn FnMut()>) -> Result<Subscription, TrackError> {
        let callback = Closure::wrap(on_scroll);

        for (attached, &event) in SCROLL_EVENTS.iter().enumerate() {
            if let Err(err) = self
                .window
                .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            {
                detach_each(
                    &SCROLL_EVENTS[..attached],
                    |earlier| {
                        self.window.remove_event_listener_with_callback(
                            earlier,
                            callback.as_ref().unchecked_ref(),
                        )
                    },
                    js_reason,
                );
                return Err(TrackError::Listener {
                    event,
                    reason: js_reason(err),
                });
            }
        }

        let window = self.window.clone();
        Ok(Subscription::new(move || {
            detach_each(
                &SCROLL_EVENTS,
                |event| {
                    window.remove_event_listener_with_callback(
                        event,
                        callback.as_ref().unchecked_ref(),
                    )
                },
                js_reason,
            );
            drop(callback);
        }))
    }
}

impl LayoutProvider for WindowSource {
    fn metrics(&self) -> ScrollMetrics {
        let scroll_offset = self.window.scroll_y().unwrap_or(0.0);
        let viewport_height = self
            .window
            .inner_height()
            .ok()
            .and_then(|height| height.as_f64())
            .unwrap_or(0.0);
        let document_height = self
            .window
            .document()
            .and_then(|document| document.document_element())
            .map(|root| root.scroll_height() as f64)
            .unwrap_or(0.0);

        ScrollMetrics {
            scroll_offset,
            document_height,
            viewport_height,
        }
    }

    fn measure(&self, id: SectionId) -> Option<SectionDescriptor> {
        let element = self.section_element(id)?;
        Some(SectionDescriptor::new(
            id,
            element.offset_top() as f64,
            element.offset_height() as f64,
        ))
    }
}

/// One element observed through `IntersectionObserver`.
pub struct ElementIntersections {
    element: Element,
}

impl ElementIntersections {
    pub fn new(element: Element) -> Self {
        Self { element }
    }
}

impl IntersectionSource for ElementIntersections {
    fn observe(
        &self,
        threshold: f64,
        mut on_change: Box<dyn FnMut(IntersectionReading)>,
    ) -> Result<Subscription, TrackError> {
        let callback = Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                    on_change(IntersectionReading {
                        is_intersecting: entry.is_intersecting(),
                        ratio: entry.intersection_ratio(),
                        fills_viewport: covers_viewport(
                            entry.intersection_rect().height(),
                            entry.root_bounds().map(|root| root.height()),
                        ),
                    });
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let mut options = IntersectionObserverInit::new();
        options.threshold(&JsValue::from_f64(threshold));

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .map_err(|err| TrackError::Observer(js_reason(err)))?;
        observer.observe(&self.element);

        Ok(Subscription::new(move || {
            observer.disconnect();
            drop(callback);
        }))
    }
}

/// Smooth-scrolls the page so the section's top is in view.
pub fn scroll_to_section(id: SectionId) {
    let Some(element) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id.as_str()))
    else {
        warn!("cannot scroll to missing section {}", id);
        return;
    };
    let mut options = ScrollIntoViewOptions::new();
    options.behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}
