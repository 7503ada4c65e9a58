//! Frontend Models
//!
//! Data structures matching the tag gateway's wire format.

use serde::{Deserialize, Serialize};

/// Tag data structure (matches gateway)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub id: String,
    pub title: String,
    pub slug: String,
    #[serde(rename = "amountOfVideos")]
    pub amount_of_videos: u32,
}

/// One page of tags plus the gateway's pagination metadata.
///
/// `prev` and `next` are null at the first and last page respectively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagPage {
    pub first: u32,
    pub prev: Option<u32>,
    pub next: Option<u32>,
    pub last: u32,
    pub pages: u32,
    pub items: u32,
    pub data: Vec<Tag>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_tag_page() {
        let body = r#"{
            "first": 1,
            "prev": null,
            "next": 2,
            "last": 5,
            "pages": 5,
            "items": 47,
            "data": [
                {"id": "a1", "title": "Rust", "slug": "rust", "amountOfVideos": 3}
            ]
        }"#;

        let page: TagPage = serde_json::from_str(body).expect("valid page body");
        assert_eq!(page.prev, None);
        assert_eq!(page.next, Some(2));
        assert_eq!(page.pages, 5);
        assert_eq!(page.items, 47);
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].title, "Rust");
        assert_eq!(page.data[0].amount_of_videos, 3);
    }

    #[test]
    fn test_amount_of_videos_keeps_wire_name() {
        let tag = Tag {
            id: "a1".to_string(),
            title: "Rust".to_string(),
            slug: "rust".to_string(),
            amount_of_videos: 0,
        };

        let body = serde_json::to_value(&tag).expect("serializable");
        assert_eq!(body["amountOfVideos"], 0);
    }
}
