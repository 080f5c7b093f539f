//! Library overview figures, computed from the public catalog.

use std::collections::HashSet;

use api::{Book, Category};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CatalogStats {
    pub titles: usize,
    pub copies: i64,
    pub available_titles: usize,
    pub out_of_stock: usize,
    pub categories: usize,
    pub publishers: usize,
}

impl CatalogStats {
    pub fn compute(books: &[Book], categories: &[Category]) -> Self {
        let publishers: HashSet<String> = books
            .iter()
            .map(|b| b.publisher.trim().to_lowercase())
            .filter(|p| !p.is_empty())
            .collect();
        let available_titles = books.iter().filter(|b| b.is_available()).count();
        Self {
            titles: books.len(),
            copies: books.iter().map(|b| b.stock.max(0)).sum(),
            available_titles,
            out_of_stock: books.len() - available_titles,
            categories: categories.len(),
            publishers: publishers.len(),
        }
    }

    /// `(label, value)` pairs in card order.
    pub fn cards(&self) -> [(&'static str, String); 6] {
        [
            ("Book Titles", self.titles.to_string()),
            ("Copies in Stock", self.copies.to_string()),
            ("Available Titles", self.available_titles.to_string()),
            ("Out of Stock", self.out_of_stock.to_string()),
            ("Categories", self.categories.to_string()),
            ("Publishers", self.publishers.to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(stock: i64, publisher: &str) -> Book {
        Book {
            stock,
            publisher: publisher.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_compute() {
        let books = vec![
            book(3, "Gramedia"),
            book(0, "gramedia "),
            book(-1, "Bentang"),
            book(2, ""),
        ];
        let stats = CatalogStats::compute(&books, &[Category::default()]);
        assert_eq!(
            stats,
            CatalogStats {
                titles: 4,
                copies: 5,
                available_titles: 2,
                out_of_stock: 2,
                categories: 1,
                publishers: 2,
            }
        );
        assert_eq!(stats.cards()[1], ("Copies in Stock", "5".to_string()));
    }

    #[test]
    fn test_empty_catalog() {
        assert_eq!(CatalogStats::compute(&[], &[]), CatalogStats::default());
    }
}
