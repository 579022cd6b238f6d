//! Content records and the story document decoder.
//!
//! The story document is a JSON array of loosely-typed records. Decoding is
//! forgiving: fields of the wrong type degrade to absent and entries that are
//! not objects become empty records. Only a document that is not a JSON array
//! at all is rejected.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use thiserror::Error;

/// Kind of media attached to a content record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Map the record's `type` string. Anything unrecognised is no media.
    pub fn from_type_name(name: &str) -> Option<Self> {
        match name {
            "image" => Some(Self::Image),
            "video" => Some(Self::Video),
            _ => None,
        }
    }
}

/// One entry of the story document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ContentItem {
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub text: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "lenient_kind")]
    pub kind: Option<MediaKind>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub src: Option<String>,
}

impl ContentItem {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_media(mut self, kind: MediaKind, src: impl Into<String>) -> Self {
        self.kind = Some(kind);
        self.src = Some(src.into());
        self
    }
}

/// Failure to obtain the story document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    #[error("content request failed with status {status}")]
    Status { status: u16 },
    #[error("network error: {0}")]
    Network(String),
    #[error("malformed story document: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for ContentError {
    fn from(error: serde_json::Error) -> Self {
        Self::Decode(error.to_string())
    }
}

/// Decode the story document into its ordered list of records.
pub fn parse_story(json: &str) -> Result<Vec<ContentItem>, ContentError> {
    let document: Value = serde_json::from_str(json)?;
    let Value::Array(entries) = document else {
        return Err(ContentError::Decode(String::from(
            "top-level value is not an array",
        )));
    };

    Ok(entries.into_iter().map(item_from_value).collect())
}

fn item_from_value(value: Value) -> ContentItem {
    match value {
        Value::Object(_) => ContentItem::deserialize(value).unwrap_or_default(),
        _ => ContentItem::default(),
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

fn lenient_kind<'de, D>(deserializer: D) -> Result<Option<MediaKind>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => MediaKind::from_type_name(&s),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_records() {
        let items = parse_story(
            r#"[
                {"title": "A", "type": "image", "src": "a.jpg", "text": "first"},
                {"title": "B", "type": "video", "src": "b.mp4"}
            ]"#,
        )
        .unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title.as_deref(), Some("A"));
        assert_eq!(items[0].text.as_deref(), Some("first"));
        assert_eq!(items[0].kind, Some(MediaKind::Image));
        assert_eq!(items[1].kind, Some(MediaKind::Video));
        assert_eq!(items[1].src.as_deref(), Some("b.mp4"));
    }

    #[test]
    fn unknown_type_is_treated_as_absent() {
        let items = parse_story(r#"[{"title": "A", "type": "audio", "src": "a.mp3"}]"#).unwrap();
        assert_eq!(items[0].kind, None);
        assert_eq!(items[0].src.as_deref(), Some("a.mp3"));
    }

    #[test]
    fn wrong_field_types_degrade_to_absent() {
        let items = parse_story(r#"[{"title": 7, "text": null, "type": 3, "extra": true}]"#).unwrap();
        assert_eq!(items[0], ContentItem::default());
    }

    #[test]
    fn non_object_entries_become_empty_records() {
        let items = parse_story(r#"[null, 4, "x", {"title": "ok"}]"#).unwrap();
        assert_eq!(items.len(), 4);
        assert_eq!(items[0], ContentItem::default());
        assert_eq!(items[3].title.as_deref(), Some("ok"));
    }

    #[test]
    fn empty_array_is_valid() {
        assert!(parse_story("[]").unwrap().is_empty());
    }

    #[test]
    fn non_array_document_is_rejected() {
        assert!(matches!(
            parse_story(r#"{"title": "A"}"#),
            Err(ContentError::Decode(_))
        ));
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert!(matches!(parse_story("[{"), Err(ContentError::Decode(_))));
    }

    #[test]
    fn status_error_message_names_status() {
        let error = ContentError::Status { status: 404 };
        assert_eq!(error.to_string(), "content request failed with status 404");
    }
}
