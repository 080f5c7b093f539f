use chrono::{Datelike, NaiveDate};
use serde::Deserialize;

use super::{de, first_filled, AuthorRef, CategoryRef};
use crate::error::ApiError;
use crate::transport::FormField;

pub const MAX_TITLE_LEN: usize = 255;
pub const MAX_ISBN_LEN: usize = 13;
pub const MAX_PUBLISHER_LEN: usize = 255;
pub const MIN_YEAR: i64 = 1000;

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Book {
    #[serde(default, deserialize_with = "de::u64_or_zero")]
    pub id: u64,
    #[serde(default, deserialize_with = "de::string_or_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "de::string_or_empty")]
    pub isbn: String,
    #[serde(default, deserialize_with = "de::string_or_empty")]
    pub publisher: String,
    #[serde(default, deserialize_with = "de::opt_i64")]
    pub year: Option<i64>,
    #[serde(default, deserialize_with = "de::i64_or_zero")]
    pub stock: i64,
    #[serde(default, deserialize_with = "de::opt_u64")]
    pub author_id: Option<u64>,
    #[serde(default, deserialize_with = "de::opt_u64")]
    pub category_id: Option<u64>,
    #[serde(default)]
    pub author: Option<AuthorRef>,
    #[serde(default)]
    pub category: Option<CategoryRef>,
    #[serde(default)]
    pub author_name: Option<String>,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub cover_url: Option<String>,
    #[serde(default)]
    pub cover: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Stock badge shown next to every book.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StockLevel {
    Out,
    Low,
    InStock,
}

impl StockLevel {
    pub fn label(&self) -> &'static str {
        match self {
            StockLevel::Out => "Out of stock",
            StockLevel::Low => "Low stock",
            StockLevel::InStock => "In stock",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            StockLevel::Out => "stock-out",
            StockLevel::Low => "stock-low",
            StockLevel::InStock => "stock-ok",
        }
    }
}

impl Book {
    pub fn author_label(&self) -> Option<&str> {
        first_filled([
            self.author.as_ref().map(|a| a.name.as_str()),
            self.author_name.as_deref(),
        ])
    }

    pub fn category_label(&self) -> Option<&str> {
        first_filled([
            self.category.as_ref().map(|c| c.name.as_str()),
            self.category_name.as_deref(),
        ])
    }

    pub fn resolved_author_id(&self) -> Option<u64> {
        self.author_id.or_else(|| self.author.as_ref().and_then(|a| a.id))
    }

    pub fn resolved_category_id(&self) -> Option<u64> {
        self.category_id
            .or_else(|| self.category.as_ref().and_then(|c| c.id))
    }

    pub fn cover_src(&self) -> Option<&str> {
        first_filled([self.cover_url.as_deref(), self.cover.as_deref()])
    }

    pub fn is_available(&self) -> bool {
        self.stock > 0
    }

    pub fn stock_level(&self, low_threshold: i64) -> StockLevel {
        if self.stock <= 0 {
            StockLevel::Out
        } else if self.stock < low_threshold {
            StockLevel::Low
        } else {
            StockLevel::InStock
        }
    }
}

/// A cover image picked in the browser, sent as a multipart file part.
#[derive(Clone, Debug, PartialEq)]
pub struct CoverFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// Create/update body for `/admin/books`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BookPayload {
    pub title: String,
    pub isbn: String,
    pub publisher: String,
    pub year: Option<i64>,
    pub stock: i64,
    pub author_id: Option<u64>,
    pub category_id: Option<u64>,
    pub cover_url: Option<String>,
    pub cover_file: Option<CoverFile>,
}

impl BookPayload {
    /// Pre-fill from an existing record for the edit form.
    pub fn from_book(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            isbn: book.isbn.clone(),
            publisher: book.publisher.clone(),
            year: book.year,
            stock: book.stock,
            author_id: book.resolved_author_id(),
            category_id: book.resolved_category_id(),
            cover_url: book.cover_src().map(str::to_string),
            cover_file: None,
        }
    }

    /// Client-side checks, in form order. The first failure is returned.
    pub fn validate(&self, today: NaiveDate) -> Result<(), ApiError> {
        let current_year = i64::from(today.year());
        let title = self.title.trim();
        if title.is_empty() || title.chars().count() > MAX_TITLE_LEN {
            return Err(ApiError::Invalid(
                "Title is required and must be at most 255 characters".into(),
            ));
        }
        let isbn = self.isbn.trim();
        if isbn.is_empty() || isbn.chars().count() > MAX_ISBN_LEN {
            return Err(ApiError::Invalid(
                "ISBN is required and must be at most 13 characters".into(),
            ));
        }
        let publisher = self.publisher.trim();
        if publisher.is_empty() || publisher.chars().count() > MAX_PUBLISHER_LEN {
            return Err(ApiError::Invalid(
                "Publisher is required and must be at most 255 characters".into(),
            ));
        }
        match self.year {
            Some(year) if (MIN_YEAR..=current_year).contains(&year) => {}
            _ => {
                return Err(ApiError::Invalid(format!(
                    "Year must be between {MIN_YEAR} and {current_year}"
                )))
            }
        }
        if self.stock < 0 {
            return Err(ApiError::Invalid("Stock cannot be negative".into()));
        }
        Ok(())
    }

    /// Multipart fields. A picked file is sent under `cover_url` and wins
    /// over a typed URL.
    pub fn into_form(self, method_override: Option<&str>) -> Vec<FormField> {
        let mut fields = vec![
            FormField::text("title", self.title.trim()),
            FormField::text("isbn", self.isbn.trim()),
            FormField::text("publisher", self.publisher.trim()),
            FormField::text("stock", self.stock.to_string()),
        ];
        if let Some(year) = self.year {
            fields.push(FormField::text("year", year.to_string()));
        }
        if let Some(id) = self.author_id {
            fields.push(FormField::text("author_id", id.to_string()));
        }
        if let Some(id) = self.category_id {
            fields.push(FormField::text("category_id", id.to_string()));
        }
        match self.cover_file {
            Some(file) => fields.push(FormField::File {
                name: "cover_url".into(),
                file_name: file.file_name,
                content_type: file.content_type,
                bytes: file.bytes,
            }),
            None => {
                if let Some(url) = self.cover_url.filter(|u| !u.trim().is_empty()) {
                    fields.push(FormField::text("cover_url", url));
                }
            }
        }
        if let Some(method) = method_override {
            fields.push(FormField::text("_method", method));
        }
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    fn valid() -> BookPayload {
        BookPayload {
            title: "Dune".into(),
            isbn: "9780441013593".into(),
            publisher: "Ace".into(),
            year: Some(1965),
            stock: 3,
            author_id: Some(1),
            category_id: Some(2),
            ..Default::default()
        }
    }

    #[test]
    fn test_decode_with_nested_and_string_fields() {
        let book: Book = serde_json::from_str(
            r#"{"id": "5", "title": "Dune", "stock": "0", "year": 1965,
                "author": {"id": 1, "name": "Frank Herbert"}, "category": null,
                "category_name": "Sci-Fi", "cover_url": ""}"#,
        )
        .unwrap();
        assert_eq!(book.id, 5);
        assert_eq!(book.stock, 0);
        assert_eq!(book.author_label(), Some("Frank Herbert"));
        assert_eq!(book.resolved_author_id(), Some(1));
        assert_eq!(book.category_label(), Some("Sci-Fi"));
        assert_eq!(book.cover_src(), None);
        assert!(!book.is_available());
    }

    #[test]
    fn test_stock_level_thresholds() {
        let mut book = Book::default();
        assert_eq!(book.stock_level(5), StockLevel::Out);
        book.stock = 4;
        assert_eq!(book.stock_level(5), StockLevel::Low);
        book.stock = 5;
        assert_eq!(book.stock_level(5), StockLevel::InStock);
    }

    #[test]
    fn test_validation_rules() {
        assert!(valid().validate(today()).is_ok());

        let mut p = valid();
        p.title = "x".repeat(256);
        assert!(p.validate(today()).is_err());

        let mut p = valid();
        p.isbn = "97804410135930".into();
        assert!(p.validate(today()).is_err());

        let mut p = valid();
        p.publisher = "  ".into();
        assert!(p.validate(today()).is_err());

        let mut p = valid();
        p.year = Some(999);
        assert!(p.validate(today()).is_err());
        p.year = Some(2026);
        assert!(p.validate(today()).is_err());
        p.year = Some(2025);
        assert!(p.validate(today()).is_ok());
        p.year = None;
        assert!(p.validate(today()).is_err());

        let mut p = valid();
        p.stock = -1;
        assert_eq!(
            p.validate(today()),
            Err(ApiError::Invalid("Stock cannot be negative".into()))
        );
    }

    #[test]
    fn test_form_prefers_file_and_adds_method_override() {
        let mut payload = valid();
        payload.cover_url = Some("https://img/dune.png".into());
        payload.cover_file = Some(CoverFile {
            file_name: "dune.png".into(),
            content_type: Some("image/png".into()),
            bytes: vec![1, 2, 3],
        });
        let fields = payload.into_form(Some("PUT"));
        let covers: Vec<_> = fields.iter().filter(|f| f.name() == "cover_url").collect();
        assert_eq!(covers.len(), 1);
        assert!(matches!(covers[0], FormField::File { .. }));
        assert_eq!(fields.last(), Some(&FormField::text("_method", "PUT")));
    }

    #[test]
    fn test_form_sends_cover_url_without_file() {
        let mut payload = valid();
        payload.cover_url = Some("https://img/dune.png".into());
        let fields = payload.into_form(None);
        assert!(fields.contains(&FormField::text("cover_url", "https://img/dune.png")));
        assert!(!fields.iter().any(|f| f.name() == "_method"));
    }
}
