//! In-memory search over fetched lists.
//!
//! Each entity names the fields a query is matched against. Matching is a
//! case-insensitive substring test on the trimmed query; a blank query keeps
//! everything.

use std::borrow::Cow;

use crate::models::{Author, Book, Category, Fine, Loan, User};

pub trait Searchable {
    fn search_fields(&self) -> Vec<Cow<'_, str>>;

    fn matches(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        needle.is_empty()
            || self
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
    }
}

pub fn filter_by_query<'a, T: Searchable>(items: &'a [T], query: &str) -> Vec<&'a T> {
    items.iter().filter(|item| item.matches(query)).collect()
}

fn some(value: Option<&str>) -> Option<Cow<'_, str>> {
    value.map(Cow::Borrowed)
}

impl Searchable for Book {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        [
            Some(Cow::Borrowed(self.title.as_str())),
            some(self.author_label()),
            some(self.category_label()),
            Some(Cow::Borrowed(self.isbn.as_str())),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

impl Searchable for Author {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        [Some(Cow::Borrowed(self.name.as_str())), some(self.biography())]
            .into_iter()
            .flatten()
            .collect()
    }
}

impl Searchable for Category {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        [
            Some(Cow::Borrowed(self.name.as_str())),
            some(self.description.as_deref()),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

impl Searchable for Loan {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        [some(self.book_title()), some(self.member_name())]
            .into_iter()
            .flatten()
            .collect()
    }
}

impl Searchable for Fine {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        [
            some(self.member_name()),
            some(self.reason()),
            self.resolved_loan_id().map(|id| Cow::Owned(id.to_string())),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

impl Searchable for User {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![Cow::Borrowed(self.name.as_str()), Cow::Borrowed(self.email.as_str())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NamedRef;

    fn books() -> Vec<Book> {
        vec![
            Book {
                id: 1,
                title: "Laskar Pelangi".into(),
                isbn: "9789793062792".into(),
                author: Some(NamedRef {
                    id: Some(1),
                    name: "Andrea Hirata".into(),
                }),
                ..Default::default()
            },
            Book {
                id: 2,
                title: "Dune".into(),
                isbn: "9780441013593".into(),
                category_name: Some("Science Fiction".into()),
                ..Default::default()
            },
        ]
    }

    #[test]
    fn test_blank_query_keeps_all() {
        let books = books();
        assert_eq!(filter_by_query(&books, "").len(), 2);
        assert_eq!(filter_by_query(&books, "   ").len(), 2);
    }

    #[test]
    fn test_matches_any_field_case_insensitive() {
        let books = books();
        assert_eq!(filter_by_query(&books, "HIRATA")[0].id, 1);
        assert_eq!(filter_by_query(&books, " science ")[0].id, 2);
        assert_eq!(filter_by_query(&books, "0441")[0].id, 2);
    }

    #[test]
    fn test_zero_matches() {
        let books = books();
        assert!(filter_by_query(&books, "tolkien").is_empty());
    }

    #[test]
    fn test_fine_matches_loan_id_and_reason() {
        let fines = vec![Fine {
            id: 1,
            loan_id: Some(42),
            note: Some("Late return".into()),
            ..Default::default()
        }];
        assert_eq!(filter_by_query(&fines, "42").len(), 1);
        assert_eq!(filter_by_query(&fines, "late").len(), 1);
        assert!(filter_by_query(&fines, "lost").is_empty());
    }

    #[test]
    fn test_user_by_email() {
        let users = vec![User {
            id: 1,
            name: "Sari".into(),
            email: "sari@lib.io".into(),
            ..Default::default()
        }];
        assert_eq!(filter_by_query(&users, "LIB.IO").len(), 1);
    }
}
