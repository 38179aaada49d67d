//! About Section Component

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::use_nav;

/// Default section content. Its in-page links navigate through the section
/// controller instead of the default anchor jump; the target comes from the
/// fragment of the link's own destination.
#[component]
pub fn AboutSection() -> impl IntoView {
    let nav_ctx = use_nav();

    let follow_fragment = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        let Some(anchor) = ev
            .current_target()
            .and_then(|target| target.dyn_into::<web_sys::HtmlAnchorElement>().ok())
        else {
            return;
        };
        let hash = anchor.hash();
        nav_ctx.show(hash.trim_start_matches('#'));
    };

    view! {
        <div class="about-content">
            <h1>"Hi, I am Mayicu."</h1>
            <p>
                "Welcome to my corner of the web. I write short posts about the
                things I build; the latest ones are collected under "
                <a href="#settings-section" on:click=follow_fragment>"Settings"</a>
                "."
            </p>
            <p>
                "If you want to reach out, head over to "
                <a href="#contact-section" on:click=follow_fragment>"Contact"</a>
                "."
            </p>
        </div>
    }
}
