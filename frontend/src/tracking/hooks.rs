use std::rc::Rc;

use log::{debug, warn};
use web_sys::Element;
use yew::prelude::*;

use super::active_section::{self, ActiveSectionWatch};
use super::dom::{ElementIntersections, WindowSource};
use super::progress::{self, ScrollProgressWatch};
use super::section::SectionId;
use super::subscription::LayoutProvider;
use super::visibility::VisibilityTracker;
use super::TrackError;
use crate::config;

/// `true` once the referenced section has scrolled into view.
///
/// If the element is missing or no observer can be created the section is
/// shown right away instead of staying hidden forever.
#[hook]
pub fn use_section_visibility(node_ref: NodeRef, threshold: f64) -> bool {
    let visible = use_state_eq(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |node_ref| {
                let tracker = node_ref
                    .cast::<Element>()
                    .ok_or(TrackError::NotMounted)
                    .and_then(|element| {
                        let source = ElementIntersections::new(element);
                        let setter = visible.setter();
                        VisibilityTracker::mount(&source, threshold, move || setter.set(true))
                    });

                let tracker = match tracker {
                    Ok(tracker) => Some(tracker),
                    Err(err) => {
                        warn!("showing section without entrance animation: {}", err);
                        visible.set(true);
                        None
                    }
                };

                move || {
                    if let Some(tracker) = tracker {
                        debug!("visibility observer released, visible={}", tracker.is_visible());
                    }
                }
            },
            node_ref,
        );
    }

    *visible
}

/// The section under the probe point, `home` until the first scroll resolves.
#[hook]
pub fn use_active_section() -> SectionId {
    let active = use_state_eq(SectionId::default);

    {
        let active = active.clone();
        use_effect_with_deps(
            move |_| {
                let watch: Result<ActiveSectionWatch, TrackError> =
                    WindowSource::new().and_then(|window| {
                        let layout: Rc<dyn LayoutProvider> = Rc::new(window.clone());
                        let setter = active.setter();
                        active_section::watch(&window, layout, &config::SECTION_ORDER, move |id| {
                            setter.set(id)
                        })
                    });

                let watch = watch
                    .map_err(|err| warn!("active section tracking disabled: {}", err))
                    .ok();

                move || {
                    if let Some(watch) = watch {
                        debug!("active section tracking stopped at {}", watch.current());
                    }
                }
            },
            (),
        );
    }

    *active
}

/// Scroll progress in percent, computed at mount and on every scroll.
#[hook]
pub fn use_scroll_progress() -> f64 {
    let percent = use_state_eq(|| 0.0_f64);

    {
        let percent = percent.clone();
        use_effect_with_deps(
            move |_| {
                let watch: Result<ScrollProgressWatch, TrackError> =
                    WindowSource::new().and_then(|window| {
                        let layout: Rc<dyn LayoutProvider> = Rc::new(window.clone());
                        let setter = percent.setter();
                        progress::watch(&window, layout, move |value| setter.set(value))
                    });

                let watch = watch
                    .map_err(|err| warn!("scroll progress tracking disabled: {}", err))
                    .ok();

                move || {
                    if let Some(watch) = watch {
                        debug!("scroll progress tracking stopped at {:.0}%", watch.percent());
                    }
                }
            },
            (),
        );
    }

    *percent
}
