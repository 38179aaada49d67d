//! Post Feed
//!
//! One-shot fetch of the remote post list. The decode pipeline is kept pure
//! so it can be tested on the host; only `fetch_posts` touches the browser.

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{console, Request, RequestInit, Response};

use crate::models::Post;

/// Endpoint serving the post feed as a JSON array.
pub const POSTS_ENDPOINT: &str = "https://mayicu.id/random";

/// Batch-level failure of a post load. Individual malformed records are
/// skipped during decoding and never produce one of these.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("bad response status: {0}")]
    BadStatus(u16),
    #[error("malformed JSON: {0}")]
    MalformedJson(String),
    #[error("invalid feed shape: expected an array")]
    NotAnArray,
}

/// Outcome of decoding one response body: valid posts in response order,
/// plus the raw values of elements that failed validation.
#[derive(Debug, Default)]
pub struct PostBatch {
    pub posts: Vec<Post>,
    pub skipped: Vec<serde_json::Value>,
}

/// Decode a response body into posts: parse, check the root is an array,
/// then validate each element. A bad element is collected under `skipped`
/// and does not fail the batch.
pub fn decode_posts(body: &str) -> Result<PostBatch, LoadError> {
    let root: serde_json::Value =
        serde_json::from_str(body).map_err(|e| LoadError::MalformedJson(e.to_string()))?;
    let serde_json::Value::Array(entries) = root else {
        return Err(LoadError::NotAnArray);
    };

    let mut batch = PostBatch::default();
    for entry in entries {
        match serde_json::from_value::<Post>(entry.clone()) {
            Ok(post) => batch.posts.push(post),
            Err(_) => batch.skipped.push(entry),
        }
    }
    Ok(batch)
}

/// Fetch the post feed once. No retry, no timeout, no abort.
///
/// Skipped records are reported as console warnings; only transport, status,
/// parse and shape problems surface as errors.
pub async fn fetch_posts() -> Result<Vec<Post>, LoadError> {
    let window = web_sys::window().ok_or_else(|| LoadError::Request("no window".into()))?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    let request = Request::new_with_str_and_init(POSTS_ENDPOINT, &opts)
        .map_err(|e| LoadError::Request(js_error_message(&e)))?;

    let response_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| LoadError::Request(js_error_message(&e)))?;
    let response: Response = response_value
        .dyn_into()
        .map_err(|e| LoadError::Request(js_error_message(&e)))?;

    if !response.ok() {
        return Err(LoadError::BadStatus(response.status()));
    }

    let text_promise = response
        .text()
        .map_err(|e| LoadError::Request(js_error_message(&e)))?;
    let text = JsFuture::from(text_promise)
        .await
        .map_err(|e| LoadError::Request(js_error_message(&e)))?;
    let body = text.as_string().unwrap_or_default();

    let batch = decode_posts(&body)?;
    for entry in &batch.skipped {
        console::warn_1(&format!("Missing fields in post: {entry}").into());
    }
    Ok(batch.posts)
}

fn js_error_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_single_valid_post() {
        let body = r#"[{"post_title":"A","post_description":"B","post_title_seo":"a-slug","post_type":"blog"}]"#;
        let batch = decode_posts(body).unwrap();
        assert_eq!(batch.posts.len(), 1);
        assert!(batch.skipped.is_empty());
        assert_eq!(batch.posts[0].title, "A");
        assert_eq!(batch.posts[0].card().link_href, "https://mayicu.id/blog/a-slug");
    }

    #[test]
    fn test_decode_skips_incomplete_post() {
        // Missing fields skip the record but the batch still succeeds.
        let batch = decode_posts(r#"[{"post_title":"A"}]"#).unwrap();
        assert!(batch.posts.is_empty());
        assert_eq!(batch.skipped.len(), 1);
    }

    #[test]
    fn test_decode_keeps_response_order() {
        let body = r#"[
            {"post_title":"first","post_description":"d","post_title_seo":"s1","post_type":"blog"},
            {"post_title":"broken"},
            {"post_title":"second","post_description":"d","post_title_seo":"s2","post_type":"note"}
        ]"#;
        let batch = decode_posts(body).unwrap();
        assert_eq!(batch.posts.len(), 2);
        assert_eq!(batch.posts[0].title, "first");
        assert_eq!(batch.posts[1].title, "second");
        assert_eq!(batch.skipped.len(), 1);
    }

    #[test]
    fn test_decode_empty_array() {
        let batch = decode_posts("[]").unwrap();
        assert!(batch.posts.is_empty());
        assert!(batch.skipped.is_empty());
    }

    #[test]
    fn test_decode_rejects_non_array_root() {
        assert!(matches!(
            decode_posts(r#"{"not":"an array"}"#),
            Err(LoadError::NotAnArray)
        ));
    }

    #[test]
    fn test_decode_rejects_malformed_json() {
        assert!(matches!(
            decode_posts("not json at all"),
            Err(LoadError::MalformedJson(_))
        ));
    }
}
