//! BookStack page types.

use serde::{Deserialize, Serialize};

/// BookStack page as returned by the API.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Page {
    /// Page ID.
    pub id: u64,
    /// Book the page belongs to.
    pub book_id: u64,
    /// Chapter the page belongs to (0 when directly in a book).
    #[serde(default)]
    pub chapter_id: u64,
    /// Page name.
    pub name: String,
    /// URL slug.
    #[serde(default)]
    pub slug: Option<String>,
}

/// Request body for page create and update calls.
///
/// `slug` is only sent on create: BookStack assigns the page ID, and the
/// deterministic slug is what keeps a fallback-created page addressable.
/// Updates address the page by ID and leave the slug alone.
#[derive(Debug, Clone, Serialize)]
pub struct PagePayload {
    /// Page name (the issue title).
    pub name: String,
    /// Full page HTML.
    pub html: String,
    /// Target book.
    pub book_id: u64,
    /// Target chapter (0 places the page directly in the book).
    pub chapter_id: u64,
    /// URL slug, present on create only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn payload(slug: Option<String>) -> PagePayload {
        PagePayload {
            name: "Printer jam".to_owned(),
            html: "<h1>Printer jam</h1>".to_owned(),
            book_id: 7,
            chapter_id: 12,
            slug,
        }
    }

    #[test]
    fn test_payload_includes_slug_when_present() {
        let json = serde_json::to_value(payload(Some("kcs-issue-42".to_owned()))).unwrap();
        assert_eq!(json["slug"], "kcs-issue-42");
        assert_eq!(json["name"], "Printer jam");
        assert_eq!(json["book_id"], 7);
        assert_eq!(json["chapter_id"], 12);
    }

    #[test]
    fn test_payload_omits_absent_slug() {
        let json = serde_json::to_value(payload(None)).unwrap();
        assert!(json.get("slug").is_none());
    }

    #[test]
    fn test_deserialize_page() {
        let json = r#"{
            "id": 42,
            "book_id": 7,
            "chapter_id": 12,
            "name": "Printer jam",
            "slug": "kcs-issue-42",
            "priority": 9
        }"#;
        let page: Page = serde_json::from_str(json).unwrap();
        assert_eq!(page.id, 42);
        assert_eq!(page.book_id, 7);
        assert_eq!(page.slug.as_deref(), Some("kcs-issue-42"));
    }

    #[test]
    fn test_deserialize_page_without_chapter() {
        let json = r#"{"id": 3, "book_id": 7, "name": "x"}"#;
        let page: Page = serde_json::from_str(json).unwrap();
        assert_eq!(page.chapter_id, 0);
        assert!(page.slug.is_none());
    }
}
