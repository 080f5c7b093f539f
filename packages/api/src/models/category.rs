use serde::{Deserialize, Serialize};

use super::{de, Book};
use crate::error::ApiError;

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Category {
    #[serde(default, deserialize_with = "de::u64_or_zero")]
    pub id: u64,
    #[serde(default, deserialize_with = "de::string_or_empty")]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "de::opt_u64", alias = "booksCount")]
    pub books_count: Option<u64>,
    #[serde(default)]
    pub books: Vec<Book>,
}

/// Icon and accent colour for a category card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CategoryStyle {
    pub icon: &'static str,
    pub color: &'static str,
}

const STYLES: &[(&str, CategoryStyle)] = &[
    ("fantasy", CategoryStyle { icon: "🧙", color: "#667eea" }),
    ("romance", CategoryStyle { icon: "💖", color: "#ec4899" }),
    ("classic", CategoryStyle { icon: "📚", color: "#8b5cf6" }),
    ("science fiction", CategoryStyle { icon: "🚀", color: "#3b82f6" }),
    ("mystery", CategoryStyle { icon: "🔍", color: "#f59e0b" }),
    ("biography", CategoryStyle { icon: "👤", color: "#10b981" }),
    ("history", CategoryStyle { icon: "🏛", color: "#ef4444" }),
    ("self-help", CategoryStyle { icon: "💡", color: "#f97316" }),
];

const DEFAULT_STYLE: CategoryStyle = CategoryStyle {
    icon: "📖",
    color: "#6b7280",
};

impl Category {
    pub fn style(&self) -> CategoryStyle {
        let name = self.name.trim().to_lowercase();
        STYLES
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, style)| *style)
            .unwrap_or(DEFAULT_STYLE)
    }

    pub fn book_count(&self) -> u64 {
        self.books_count.unwrap_or(self.books.len() as u64)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct CategoryPayload {
    pub name: String,
    pub description: String,
}

impl CategoryPayload {
    pub fn from_category(category: &Category) -> Self {
        Self {
            name: category.name.clone(),
            description: category.description.clone().unwrap_or_default(),
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
    fn test_style_lookup_is_case_insensitive() {
        let category = Category {
            name: "Science Fiction".into(),
            ..Default::default()
        };
        assert_eq!(category.style().color, "#3b82f6");
        let category = Category {
            name: "Poetry".into(),
            ..Default::default()
        };
        assert_eq!(category.style(), DEFAULT_STYLE);
    }

    #[test]
    fn test_camel_case_count() {
        let category: Category =
            serde_json::from_str(r#"{"id": 3, "name": "Mystery", "booksCount": 12}"#).unwrap();
        assert_eq!(category.book_count(), 12);
    }
}
