//! Post List Component
//!
//! Fetches the remote feed once on mount and renders it into the posts
//! container, or a fixed error paragraph when the load fails.

use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::console;

use crate::api;
use crate::components::PostCardView;
use crate::models::Post;

/// Container content over the load's lifetime. `Empty` covers both "not
/// loaded yet" and the cleared state right before a fetch.
#[derive(Clone)]
enum PostsState {
    Empty,
    Loaded(Vec<Post>),
    Failed,
}

/// Posts container. The load runs exactly once, at mount; nothing in the
/// app re-triggers it.
#[component]
pub fn PostList() -> impl IntoView {
    let (posts_state, set_posts_state) = signal(PostsState::Empty);

    Effect::new(move |_| {
        // Clear whatever is in the container before fetching.
        set_posts_state.set(PostsState::Empty);
        spawn_local(async move {
            match api::fetch_posts().await {
                Ok(posts) => set_posts_state.set(PostsState::Loaded(posts)),
                Err(err) => {
                    console::error_1(&format!("Error fetching posts: {err}").into());
                    set_posts_state.set(PostsState::Failed);
                }
            }
        });
    });

    view! {
        <div id="posts-container">
            {move || match posts_state.get() {
                PostsState::Empty => ().into_any(),
                PostsState::Loaded(posts) => posts
                    .into_iter()
                    .map(|post| view! { <PostCardView post=post /> })
                    .collect_view()
                    .into_any(),
                PostsState::Failed => view! {
                    <p>"Error loading posts. Please try again later."</p>
                }.into_any(),
            }}
        </div>
    }
}
