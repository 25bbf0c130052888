use serde::{Deserialize, Serialize};

/// The audiobook the player should open.
///
/// Only `id` and `title` are required. The remaining fields belong to the
/// intake and player screens and are carried through untouched. Older
/// records were written with camelCase keys, hence the aliases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentBook {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(
        default,
        alias = "durationSeconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub duration_seconds: Option<u64>,
    #[serde(default, alias = "fileUri", skip_serializing_if = "Option::is_none")]
    pub file_uri: Option<String>,
    #[serde(default, alias = "coverUri", skip_serializing_if = "Option::is_none")]
    pub cover_uri: Option<String>,
}

impl CurrentBook {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: None,
            duration_seconds: None,
            file_uri: None,
            cover_uri: None,
        }
    }

    /// Duration as `h:mm:ss`, if known
    pub fn duration_display(&self) -> Option<String> {
        self.duration_seconds.map(|secs| {
            format!("{}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_display() {
        let mut book = CurrentBook::new("b1", "Dune");
        assert_eq!(book.duration_display(), None);

        book.duration_seconds = Some(75_630);
        assert_eq!(book.duration_display(), Some("21:00:30".to_string()));

        book.duration_seconds = Some(59);
        assert_eq!(book.duration_display(), Some("0:00:59".to_string()));
    }

    #[test]
    fn test_optional_fields_omitted() {
        let json = serde_json::to_string(&CurrentBook::new("b1", "Dune")).unwrap();
        assert_eq!(json, r#"{"id":"b1","title":"Dune"}"#);
    }

    #[test]
    fn test_camel_case_aliases() {
        let book: CurrentBook = serde_json::from_str(
            r#"{"id":"b2","title":"Hyperion","fileUri":"file:///h.m4b","durationSeconds":120}"#,
        )
        .unwrap();
        assert_eq!(book.file_uri.as_deref(), Some("file:///h.m4b"));
        assert_eq!(book.duration_seconds, Some(120));
    }
}
