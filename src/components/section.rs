//! Content Section Component
//!
//! Generic show/hide wrapper for one content block.

use leptos::prelude::*;

use crate::context::use_nav;

/// One content block, visible only while it is the active section.
#[component]
pub fn ContentSection(id: &'static str, children: Children) -> impl IntoView {
    let nav_ctx = use_nav();

    view! {
        <section
            id=id
            class="content-section"
            style=move || if nav_ctx.is_visible(id) { "display: block;" } else { "display: none;" }
        >
            {children()}
        </section>
    }
}
