use leptos::{ev, prelude::*};
use leptos_use::{use_event_listener, use_window};

use crate::config::ScrollConfig;
use crate::dom::BrowserViewport;
use crate::nav::{SectionId, SectionRegistry, Viewport};

#[derive(Debug, Clone, Copy)]
pub struct ScrollState {
    pub active: RwSignal<SectionId>,
    pub scrolled: RwSignal<bool>,
}

/// Tracks the active section and scrolled flag from the window scroll offset.
///
/// Recomputes on mount and on every scroll event. The listener is owned by
/// the calling component and removed when it is cleaned up.
pub fn use_scroll_tracker(registry: SectionRegistry, config: ScrollConfig) -> ScrollState {
    let active = RwSignal::new(registry.first().id);
    let scrolled = RwSignal::new(false);

    let refresh = move || {
        let viewport = match BrowserViewport::new() {
            Ok(v) => v,
            Err(err) => {
                log::warn!("scroll tracking unavailable: {err}");
                return;
            }
        };
        let scroll_y = viewport.scroll_y();
        let now_scrolled = config.is_scrolled(scroll_y);
        if scrolled.get_untracked() != now_scrolled {
            scrolled.set(now_scrolled);
        }
        let section = registry.active_section(&viewport, scroll_y, &config);
        if active.get_untracked() != section {
            active.set(section);
        }
    };

    _ = use_event_listener(use_window(), ev::scroll, move |_| refresh());
    // effects only run in the browser, after the sections are mounted
    Effect::new(move |_| refresh());

    ScrollState { active, scrolled }
}

/// Callback that smooth-scrolls to a section and marks it active right away.
pub fn use_navigator(
    registry: SectionRegistry,
    config: ScrollConfig,
    active: RwSignal<SectionId>,
) -> Callback<SectionId> {
    Callback::new(move |target: SectionId| {
        let viewport = match BrowserViewport::new() {
            Ok(v) => v,
            Err(err) => {
                log::warn!("can't navigate to {target}: {err}");
                return;
            }
        };
        match registry.navigate(&viewport, target.as_str(), &config) {
            Some(id) => active.set(id),
            None => log::debug!("no section to navigate to: {target}"),
        }
    })
}
