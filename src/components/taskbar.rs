//! Taskbar Component
//!
//! Navigation triggers for the content sections.

use leptos::prelude::*;

use crate::context::use_nav;
use crate::nav;

/// Taskbar component: one trigger per section, generated from the section
/// table. Clicks bypass the default anchor jump and go through the
/// navigation context instead.
#[component]
pub fn Taskbar() -> impl IntoView {
    let nav_ctx = use_nav();

    view! {
        <nav class="taskbar">
            {nav::SECTIONS.iter().map(|section| {
                let id = section.id;
                let item_class = move || {
                    if nav_ctx.is_active_trigger(id) { "taskbar-item active" } else { "taskbar-item" }
                };

                view! {
                    <a
                        class=item_class
                        href=format!("#{id}")
                        data-target=id
                        on:click=move |ev| {
                            ev.prevent_default();
                            nav_ctx.show(id);
                        }
                    >
                        {section.label}
                    </a>
                }
            }).collect_view()}
        </nav>
    }
}
