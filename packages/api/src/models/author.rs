use serde::{Deserialize, Serialize};

use super::{de, first_filled, Book};
use crate::error::ApiError;

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Author {
    #[serde(default, deserialize_with = "de::u64_or_zero")]
    pub id: u64,
    #[serde(default, deserialize_with = "de::string_or_empty")]
    pub name: String,
    #[serde(default)]
    pub biography: Option<String>,
    /// Older records use `bio`.
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default, deserialize_with = "de::opt_u64")]
    pub books_count: Option<u64>,
    #[serde(default)]
    pub books: Vec<Book>,
}

impl Author {
    pub fn biography(&self) -> Option<&str> {
        first_filled([self.biography.as_deref(), self.bio.as_deref()])
    }

    pub fn book_count(&self) -> u64 {
        self.books_count.unwrap_or(self.books.len() as u64)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct AuthorPayload {
    pub name: String,
    pub biography: String,
}

impl AuthorPayload {
    pub fn from_author(author: &Author) -> Self {
        Self {
            name: author.name.clone(),
            biography: author.biography().unwrap_or_default().to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), ApiError> {
        if self.name.trim().is_empty() {
            return Err(ApiError::Invalid("Name is required".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_biography_falls_back_to_bio() {
        let author: Author =
            serde_json::from_str(r#"{"id": 1, "name": "Orwell", "bio": "English novelist"}"#).unwrap();
        assert_eq!(author.biography(), Some("English novelist"));
        assert_eq!(author.book_count(), 0);
    }

    #[test]
    fn test_book_count_prefers_server_count() {
        let author: Author = serde_json::from_str(
            r#"{"id": 1, "name": "Orwell", "books_count": "4", "books": [{"id": 1}]}"#,
        )
        .unwrap();
        assert_eq!(author.book_count(), 4);
    }

    #[test]
    fn test_payload_requires_name() {
        let payload = AuthorPayload {
            name: "  ".into(),
            biography: String::new(),
        };
        assert!(payload.validate().is_err());
    }
}
