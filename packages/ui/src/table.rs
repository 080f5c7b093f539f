//! State behind every list page.
//!
//! A page fetches its full list once, keeps it in a [`TableState`], narrows it
//! with the search box and drives deletions through a confirm step:
//!
//! 1. [`TableState::request_delete`] marks a row and the confirm dialog opens.
//! 2. Declining calls [`TableState::cancel_delete`]; the list is untouched.
//! 3. Accepting takes the id with [`TableState::take_pending_delete`], calls
//!    the server, and hands the outcome to [`TableState::settle_delete`], which
//!    removes the row only on success.

use api::{filter_by_query, ApiError, Author, Book, Category, Fine, Loan, Searchable, User};

/// Anything with a backend id.
pub trait Record: Clone + PartialEq {
    fn id(&self) -> u64;
}

macro_rules! impl_record {
    ($($ty:ty),*) => {
        $(impl Record for $ty {
            fn id(&self) -> u64 {
                self.id
            }
        })*
    };
}

impl_record!(Book, Author, Category, Loan, Fine, User);

#[derive(Clone, Debug, PartialEq)]
pub struct TableState<T> {
    items: Vec<T>,
    query: String,
    pending_delete: Option<u64>,
}

impl<T> Default for TableState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            query: String::new(),
            pending_delete: None,
        }
    }
}

impl<T: Record + Searchable> TableState<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            ..Default::default()
        }
    }

    /// Replace the list after a (re-)fetch. The query is kept.
    pub fn replace(&mut self, items: Vec<T>) {
        self.items = items;
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn get(&self, id: u64) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn is_searching(&self) -> bool {
        !self.query.trim().is_empty()
    }

    pub fn visible(&self) -> Vec<&T> {
        filter_by_query(&self.items, &self.query)
    }

    /// True when the list has rows but the query hides all of them, or the
    /// list itself is empty.
    pub fn shows_no_results(&self) -> bool {
        self.visible().is_empty()
    }

    /// "Found N item(s)" while a query is active.
    pub fn result_label(&self) -> Option<String> {
        self.is_searching()
            .then(|| format!("Found {} item(s)", self.visible().len()))
    }

    pub fn request_delete(&mut self, id: u64) {
        self.pending_delete = Some(id);
    }

    pub fn pending_delete(&self) -> Option<u64> {
        self.pending_delete
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    pub fn take_pending_delete(&mut self) -> Option<u64> {
        self.pending_delete.take()
    }

    pub fn remove(&mut self, id: u64) {
        self.items.retain(|item| item.id() != id);
    }

    /// Apply the server's answer to a confirmed delete and pass it on.
    pub fn settle_delete(
        &mut self,
        id: u64,
        outcome: Result<(), ApiError>,
    ) -> Result<(), ApiError> {
        if outcome.is_ok() {
            self.remove(id);
        }
        outcome
    }

    /// Patch a record the server returned, or append it if it is new.
    /// Records without an id are ignored; the caller re-fetches instead.
    pub fn upsert(&mut self, record: T) {
        if record.id() == 0 {
            return;
        }
        match self.items.iter_mut().find(|item| item.id() == record.id()) {
            Some(slot) => *slot = record,
            None => self.items.push(record),
        }
    }
}

/// Member catalog filter: books in `category`, or all of them for `None`.
pub fn in_category(books: Vec<&Book>, category: Option<u64>) -> Vec<&Book> {
    match category {
        Some(id) => books
            .into_iter()
            .filter(|book| book.resolved_category_id() == Some(id))
            .collect(),
        None => books,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::{ApiClient, Method, StubTransport};
    use serde_json::{json, Value};
    use store::{MemoryStore, SessionRepository};

    fn authors() -> TableState<Author> {
        TableState::new(vec![
            Author {
                id: 1,
                name: "Pramoedya Ananta Toer".into(),
                ..Default::default()
            },
            Author {
                id: 2,
                name: "Dee Lestari".into(),
                ..Default::default()
            },
        ])
    }

    #[test]
    fn test_declined_delete_leaves_list() {
        let mut table = authors();
        table.request_delete(2);
        assert_eq!(table.pending_delete(), Some(2));
        table.cancel_delete();
        assert_eq!(table.pending_delete(), None);
        assert_eq!(table.items().len(), 2);
    }

    #[test]
    fn test_accepted_delete_removes_after_success() {
        let mut table = authors();
        table.request_delete(2);
        let id = table.take_pending_delete().unwrap();
        // still rendered while the server call is in flight
        assert_eq!(table.items().len(), 2);
        table.remove(id);
        assert_eq!(table.items().len(), 1);
        assert!(table.get(2).is_none());
        assert_eq!(table.take_pending_delete(), None);
    }

    fn admin_client() -> (ApiClient<StubTransport>, StubTransport) {
        let transport = StubTransport::new();
        let session = SessionRepository::new(MemoryStore::new());
        session.save_token("admin-token");
        (ApiClient::new(transport.clone(), "http://api.test", session), transport)
    }

    #[tokio::test]
    async fn test_rejected_delete_keeps_row() {
        let (client, transport) = admin_client();
        transport.respond(409, json!({ "message": "Author still has books" }));
        let mut table = authors();

        table.request_delete(1);
        let id = table.take_pending_delete().unwrap();
        let outcome = client.delete_author(id).await;
        let err = table.settle_delete(id, outcome).unwrap_err();

        assert_eq!(err.user_message("Failed to delete author"), "Author still has books");
        assert!(table.get(1).is_some());
        assert_eq!(table.items().len(), 2);
        assert_eq!(table.pending_delete(), None);
        assert_eq!(transport.last_request().unwrap().url, "http://api.test/admin/authors/1");
    }

    #[tokio::test]
    async fn test_confirmed_delete_removes_row_after_server_ok() {
        let (client, transport) = admin_client();
        transport.respond(204, Value::Null);
        let mut table = authors();

        table.request_delete(2);
        let id = table.take_pending_delete().unwrap();
        let outcome = client.delete_author(id).await;
        table.settle_delete(id, outcome).unwrap();

        assert!(table.get(2).is_none());
        assert_eq!(table.items().len(), 1);
        assert_eq!(transport.last_request().unwrap().method, Method::Delete);
    }

    #[test]
    fn test_zero_match_query_shows_no_results() {
        let mut table = authors();
        table.set_query("tolkien");
        assert!(table.shows_no_results());
        assert_eq!(table.result_label().as_deref(), Some("Found 0 item(s)"));

        table.set_query("dee");
        assert!(!table.shows_no_results());
        assert_eq!(table.result_label().as_deref(), Some("Found 1 item(s)"));

        table.set_query("  ");
        assert_eq!(table.result_label(), None);
        assert_eq!(table.visible().len(), 2);
    }

    #[test]
    fn test_upsert_patches_or_appends() {
        let mut table = authors();
        table.upsert(Author {
            id: 2,
            name: "Dewi Lestari".into(),
            ..Default::default()
        });
        assert_eq!(table.get(2).unwrap().name, "Dewi Lestari");
        table.upsert(Author {
            id: 3,
            name: "Tere Liye".into(),
            ..Default::default()
        });
        assert_eq!(table.items().len(), 3);
        table.upsert(Author::default());
        assert_eq!(table.items().len(), 3);
    }

    #[test]
    fn test_category_filter_combines_with_search() {
        let mut table = TableState::new(vec![
            Book {
                id: 1,
                title: "Bumi".into(),
                category_id: Some(1),
                ..Default::default()
            },
            Book {
                id: 2,
                title: "Bulan".into(),
                category: Some(api::NamedRef {
                    id: Some(2),
                    name: "Fantasy".into(),
                }),
                ..Default::default()
            },
        ]);
        assert_eq!(in_category(table.visible(), None).len(), 2);
        let fantasy = in_category(table.visible(), Some(2));
        assert_eq!(fantasy.len(), 1);
        assert_eq!(fantasy[0].id, 2);

        table.set_query("bumi");
        assert!(in_category(table.visible(), Some(2)).is_empty());
    }

    #[test]
    fn test_replace_keeps_query() {
        let mut table = authors();
        table.set_query("dee");
        table.replace(vec![]);
        assert_eq!(table.query(), "dee");
        assert!(table.shows_no_results());
    }
}
