//! Contact Section Component

use leptos::prelude::*;

/// Static contact content, no behavior.
#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <div class="contact-content">
            <h1>"Contact"</h1>
            <p>
                "The fastest way to reach me is email: "
                <a href="mailto:hello@mayicu.id">"hello@mayicu.id"</a>
            </p>
        </div>
    }
}
