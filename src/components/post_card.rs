//! Post Card Component

use leptos::prelude::*;

use crate::models::Post;

/// One rendered post: heading, description and a link back to the site.
#[component]
pub fn PostCardView(post: Post) -> impl IntoView {
    let card = post.card();

    view! {
        <div class="post">
            <h2>{card.heading}</h2>
            <p>{card.body}</p>
            <br/>
            <a href=card.link_href>"Read More"</a>
        </div>
    }
}
