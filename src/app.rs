//! Homepage App
//!
//! Root component: provides the navigation context, resolves the initial
//! section from the URL fragment and lays out the taskbar and sections.

use leptos::prelude::*;

use crate::components::{AboutSection, ContactSection, ContentSection, PostList, Taskbar};
use crate::context::NavContext;
use crate::nav;

#[component]
pub fn App() -> impl IntoView {
    let (active_section, set_active_section) = signal::<Option<&'static str>>(None);

    // Provide navigation state to all children
    let nav_ctx = NavContext::new((active_section, set_active_section));
    provide_context(nav_ctx);

    // A non-empty URL fragment deep-links to its section; otherwise the
    // default section opens.
    let hash = web_sys::window()
        .map(|w| w.location().hash().unwrap_or_default())
        .unwrap_or_default();
    nav_ctx.show(nav::initial_target(&hash));

    view! {
        <Taskbar />

        <main class="content">
            <ContentSection id=nav::ABOUT_SECTION>
                <AboutSection />
            </ContentSection>
            <ContentSection id=nav::CONTACT_SECTION>
                <ContactSection />
            </ContentSection>
            <ContentSection id=nav::SETTINGS_SECTION>
                <PostList />
            </ContentSection>
        </main>
    }
}
