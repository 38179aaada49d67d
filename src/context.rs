//! Application Context
//!
//! Shared navigation state provided via Leptos Context API.

use leptos::prelude::*;

use crate::nav;

/// Active-section signals provided via context.
///
/// Holding an `Option` of a single canonical id makes "at most one visible
/// section, at most one active trigger" true by construction.
#[derive(Clone, Copy)]
pub struct NavContext {
    active_section: ReadSignal<Option<&'static str>>,
    set_active_section: WriteSignal<Option<&'static str>>,
}

impl NavContext {
    pub fn new(active_section: (ReadSignal<Option<&'static str>>, WriteSignal<Option<&'static str>>)) -> Self {
        Self {
            active_section: active_section.0,
            set_active_section: active_section.1,
        }
    }

    /// Show the section named by `target`. An unknown id hides every
    /// section and deactivates every trigger.
    pub fn show(&self, target: &str) {
        self.set_active_section.set(nav::show_target(target));
    }

    /// Whether the section with `id` is the visible one.
    pub fn is_visible(&self, id: &str) -> bool {
        self.active_section.get() == Some(id)
    }

    /// Whether the trigger pointing at `target` is the active one.
    pub fn is_active_trigger(&self, target: &str) -> bool {
        self.active_section.get() == Some(target)
    }
}

/// Get the navigation context from a component below `App`.
pub fn use_nav() -> NavContext {
    use_context::<NavContext>().expect("NavContext should be provided")
}
