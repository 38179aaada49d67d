//! Post Models
//!
//! Data structures for the remote post feed, plus the pure construction of
//! the rendered card so it stays testable without a DOM.

use serde::{Deserialize, Serialize};

/// Base URL that post links point back to.
pub const SITE_BASE_URL: &str = "https://mayicu.id";

/// One post record from the remote feed.
///
/// Every field is required; an element missing any of them fails
/// deserialization and is skipped by the batch decoder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    #[serde(rename = "post_title")]
    pub title: String,
    #[serde(rename = "post_description")]
    pub description: String,
    #[serde(rename = "post_title_seo")]
    pub slug: String,
    #[serde(rename = "post_type")]
    pub kind: String,
}

/// The rendered unit for one post: heading, body and link destination.
#[derive(Debug, Clone, PartialEq)]
pub struct PostCard {
    pub heading: String,
    pub body: String,
    pub link_href: String,
}

impl Post {
    /// Build the rendered card. The link is the exact slash-joined
    /// concatenation of base, type and slug, with no encoding applied.
    pub fn card(&self) -> PostCard {
        PostCard {
            heading: self.title.clone(),
            body: self.description.clone(),
            link_href: format!("{}/{}/{}", SITE_BASE_URL, self.kind, self.slug),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_record() {
        let post: Post = serde_json::from_str(
            r#"{"post_title":"A","post_description":"B","post_title_seo":"a-slug","post_type":"blog"}"#,
        )
        .unwrap();
        assert_eq!(post.title, "A");
        assert_eq!(post.description, "B");
        assert_eq!(post.slug, "a-slug");
        assert_eq!(post.kind, "blog");
    }

    #[test]
    fn test_deserialize_rejects_missing_field() {
        let result = serde_json::from_str::<Post>(r#"{"post_title":"A"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_card_link_destination() {
        let post = Post {
            title: "A".into(),
            description: "B".into(),
            slug: "a-slug".into(),
            kind: "blog".into(),
        };
        let card = post.card();
        assert_eq!(card.heading, "A");
        assert_eq!(card.body, "B");
        assert_eq!(card.link_href, "https://mayicu.id/blog/a-slug");
    }
}
