use crate::client::ApiClient;
use crate::envelope::{self, AUTHORS, BOOKS, CATEGORIES};
use crate::error::ApiError;
use crate::models::{Author, Book, Category};
use crate::transport::Transport;

impl<T: Transport> ApiClient<T> {
    pub async fn books(&self) -> Result<Vec<Book>, ApiError> {
        envelope::list(&self.get("/books").await?, BOOKS)
    }

    pub async fn book(&self, id: u64) -> Result<Book, ApiError> {
        envelope::record(&self.get(&format!("/books/{id}")).await?, BOOKS)
    }

    pub async fn authors(&self) -> Result<Vec<Author>, ApiError> {
        envelope::list(&self.get("/authors").await?, AUTHORS)
    }

    pub async fn author(&self, id: u64) -> Result<Author, ApiError> {
        envelope::record(&self.get(&format!("/authors/{id}")).await?, AUTHORS)
    }

    pub async fn author_books(&self, id: u64) -> Result<Vec<Book>, ApiError> {
        envelope::list(&self.get(&format!("/authors/{id}/books")).await?, BOOKS)
    }

    pub async fn categories(&self) -> Result<Vec<Category>, ApiError> {
        envelope::list(&self.get("/categories").await?, CATEGORIES)
    }

    pub async fn category(&self, id: u64) -> Result<Category, ApiError> {
        envelope::record(&self.get(&format!("/categories/{id}")).await?, CATEGORIES)
    }

    pub async fn category_books(&self, id: u64) -> Result<Vec<Book>, ApiError> {
        envelope::list(&self.get(&format!("/categories/{id}/books")).await?, BOOKS)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use store::{MemoryStore, SessionRepository};

    use super::*;
    use crate::stub::StubTransport;

    fn client() -> (ApiClient<StubTransport>, StubTransport) {
        let transport = StubTransport::new();
        let client = ApiClient::new(
            transport.clone(),
            "http://api.test",
            SessionRepository::new(MemoryStore::new()),
        );
        (client, transport)
    }

    #[tokio::test]
    async fn test_books_in_any_wrapper() {
        let (client, transport) = client();
        transport
            .respond(200, json!([{ "id": 1, "title": "A" }]))
            .respond(200, json!({ "data": [{ "id": 1, "title": "A" }] }))
            .respond(200, json!({ "books": [{ "id": 1, "title": "A" }] }));
        for _ in 0..3 {
            let books = client.books().await.unwrap();
            assert_eq!(books.len(), 1);
            assert_eq!(books[0].title, "A");
        }
    }

    #[tokio::test]
    async fn test_category_books_with_category_wrapper() {
        let (client, transport) = client();
        transport.respond(
            200,
            json!({ "category": { "id": 2, "name": "Mystery" }, "books": [{ "id": 7 }, { "id": 8 }] }),
        );
        let books = client.category_books(2).await.unwrap();
        assert_eq!(books.iter().map(|b| b.id).collect::<Vec<_>>(), vec![7, 8]);
        assert_eq!(transport.last_request().unwrap().url, "http://api.test/categories/2/books");
    }

    #[tokio::test]
    async fn test_author_record_wrapped() {
        let (client, transport) = client();
        transport.respond(200, json!({ "author": { "id": 4, "name": "Pramoedya" } }));
        let author = client.author(4).await.unwrap();
        assert_eq!(author.name, "Pramoedya");
    }
}
