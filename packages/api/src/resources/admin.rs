use serde_json::json;
use store::Role;

use crate::client::ApiClient;
use crate::envelope::{self, AUTHORS, BOOKS, CATEGORIES, FINES, LOANS, PENDING_LOANS, USERS};
use crate::error::ApiError;
use crate::models::{
    Author, AuthorPayload, Book, BookPayload, Category, CategoryPayload, Fine, FinePayload, Loan,
    LoanPayload, User,
};
use crate::transport::Transport;

pub const DEFAULT_EXTENSION_DAYS: u32 = 7;
pub const DEFAULT_REJECTION_REASON: &str = "No reason provided";

/// Mutations answer with the saved record when the backend sends one back;
/// `None` means it succeeded without one and the caller should re-fetch.
impl<T: Transport> ApiClient<T> {
    // Books

    pub async fn admin_books(&self) -> Result<Vec<Book>, ApiError> {
        envelope::list(&self.get("/admin/books").await?, BOOKS)
    }

    /// Create (`id = None`) or update a book as multipart form data.
    ///
    /// Updates are sent as `POST /admin/books/{id}` with `_method=PUT`, since
    /// the backend cannot read multipart bodies on a real PUT.
    pub async fn save_book(&self, id: Option<u64>, payload: BookPayload) -> Result<(), ApiError> {
        match id {
            Some(id) => {
                self.post_form(&format!("/admin/books/{id}"), payload.into_form(Some("PUT")))
                    .await?
            }
            None => self.post_form("/admin/books", payload.into_form(None)).await?,
        };
        Ok(())
    }

    pub async fn delete_book(&self, id: u64) -> Result<(), ApiError> {
        self.delete(&format!("/admin/books/{id}")).await?;
        Ok(())
    }

    // Authors

    pub async fn admin_authors(&self) -> Result<Vec<Author>, ApiError> {
        envelope::list(&self.get("/admin/authors").await?, AUTHORS)
    }

    pub async fn save_author(
        &self,
        id: Option<u64>,
        payload: &AuthorPayload,
    ) -> Result<Option<Author>, ApiError> {
        payload.validate()?;
        let body = match id {
            Some(id) => self.put_json(&format!("/admin/authors/{id}"), payload).await?,
            None => self.post_json("/admin/authors", payload).await?,
        };
        envelope::optional_record(&body, AUTHORS)
    }

    pub async fn delete_author(&self, id: u64) -> Result<(), ApiError> {
        self.delete(&format!("/admin/authors/{id}")).await?;
        Ok(())
    }

    // Categories

    pub async fn admin_categories(&self) -> Result<Vec<Category>, ApiError> {
        envelope::list(&self.get("/admin/categories").await?, CATEGORIES)
    }

    pub async fn save_category(
        &self,
        id: Option<u64>,
        payload: &CategoryPayload,
    ) -> Result<Option<Category>, ApiError> {
        payload.validate()?;
        let body = match id {
            Some(id) => self.put_json(&format!("/admin/categories/{id}"), payload).await?,
            None => self.post_json("/admin/categories", payload).await?,
        };
        envelope::optional_record(&body, CATEGORIES)
    }

    pub async fn delete_category(&self, id: u64) -> Result<(), ApiError> {
        self.delete(&format!("/admin/categories/{id}")).await?;
        Ok(())
    }

    // Loans

    pub async fn admin_loans(&self) -> Result<Vec<Loan>, ApiError> {
        envelope::list(&self.get("/admin/loans").await?, LOANS)
    }

    pub async fn pending_loans(&self) -> Result<Vec<Loan>, ApiError> {
        envelope::list(&self.get("/admin/loans/pending/all").await?, PENDING_LOANS)
    }

    pub async fn save_loan(
        &self,
        id: Option<u64>,
        payload: &LoanPayload,
    ) -> Result<Option<Loan>, ApiError> {
        payload.validate()?;
        let body = match id {
            Some(id) => self.put_json(&format!("/admin/loans/{id}"), payload).await?,
            None => self.post_json("/admin/loans", payload).await?,
        };
        envelope::optional_record(&body, LOANS)
    }

    pub async fn return_loan(&self, id: u64) -> Result<Option<Loan>, ApiError> {
        let body = self.post(&format!("/admin/loans/{id}/return")).await?;
        envelope::optional_record(&body, LOANS)
    }

    pub async fn extend_loan(&self, id: u64, days: u32) -> Result<Option<Loan>, ApiError> {
        if days == 0 {
            return Err(ApiError::Invalid("Extension must be at least one day".into()));
        }
        let body = self
            .post_json(&format!("/admin/loans/{id}/extend"), &json!({ "days": days }))
            .await?;
        envelope::optional_record(&body, LOANS)
    }

    pub async fn approve_loan(&self, id: u64) -> Result<Option<Loan>, ApiError> {
        let body = self.post(&format!("/admin/loans/{id}/approve")).await?;
        envelope::optional_record(&body, LOANS)
    }

    /// Reject a pending request. A blank reason is sent as
    /// [`DEFAULT_REJECTION_REASON`].
    pub async fn reject_loan(&self, id: u64, reason: &str) -> Result<(), ApiError> {
        let reason = match reason.trim() {
            "" => DEFAULT_REJECTION_REASON,
            reason => reason,
        };
        self.post_json(&format!("/admin/loans/{id}/reject"), &json!({ "reason": reason }))
            .await?;
        Ok(())
    }

    pub async fn delete_loan(&self, id: u64) -> Result<(), ApiError> {
        self.delete(&format!("/admin/loans/{id}")).await?;
        Ok(())
    }

    // Fines

    pub async fn admin_fines(&self) -> Result<Vec<Fine>, ApiError> {
        envelope::list(&self.get("/admin/fines").await?, FINES)
    }

    pub async fn save_fine(
        &self,
        id: Option<u64>,
        payload: &FinePayload,
    ) -> Result<Option<Fine>, ApiError> {
        payload.validate()?;
        let body = match id {
            Some(id) => self.put_json(&format!("/admin/fines/{id}"), payload).await?,
            None => self.post_json("/admin/fines", payload).await?,
        };
        envelope::optional_record(&body, FINES)
    }

    pub async fn pay_fine(&self, id: u64) -> Result<Option<Fine>, ApiError> {
        let body = self.post(&format!("/admin/fines/{id}/pay")).await?;
        envelope::optional_record(&body, FINES)
    }

    /// Ask the backend to compute the fine for a loan.
    pub async fn calculate_fine(&self, loan_id: u64) -> Result<Option<Fine>, ApiError> {
        let body = self.post(&format!("/admin/fines/calculate/{loan_id}")).await?;
        envelope::optional_record(&body, FINES)
    }

    pub async fn delete_fine(&self, id: u64) -> Result<(), ApiError> {
        self.delete(&format!("/admin/fines/{id}")).await?;
        Ok(())
    }

    // Users

    pub async fn admin_users(&self) -> Result<Vec<User>, ApiError> {
        envelope::list(&self.get("/admin/users").await?, USERS)
    }

    pub async fn set_user_role(&self, id: u64, role: Role) -> Result<Option<User>, ApiError> {
        let body = self
            .put_json(&format!("/admin/users/{id}"), &json!({ "role": role }))
            .await?;
        envelope::optional_record(&body, USERS)
    }

    pub async fn delete_user(&self, id: u64) -> Result<(), ApiError> {
        self.delete(&format!("/admin/users/{id}")).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::Value;
    use store::{MemoryStore, SessionRepository};

    use super::*;
    use crate::models::LoanStatus;
    use crate::stub::StubTransport;
    use crate::transport::{FormField, Method, Payload};

    fn client() -> (ApiClient<StubTransport>, StubTransport) {
        let transport = StubTransport::new();
        let session = SessionRepository::new(MemoryStore::new());
        session.save_token("admin-token");
        let client = ApiClient::new(transport.clone(), "http://api.test", session);
        (client, transport)
    }

    #[tokio::test]
    async fn test_book_update_uses_method_override() {
        let (client, transport) = client();
        let payload = BookPayload {
            title: "Dune".into(),
            isbn: "123".into(),
            publisher: "Ace".into(),
            year: Some(1965),
            stock: 2,
            ..Default::default()
        };
        client.save_book(Some(4), payload.clone()).await.unwrap();
        client.save_book(None, payload).await.unwrap();

        let requests = transport.requests();
        assert_eq!(requests[0].url, "http://api.test/admin/books/4");
        assert_eq!(requests[0].method, Method::Post);
        let Payload::Multipart(fields) = &requests[0].payload else {
            panic!("expected multipart body");
        };
        assert!(fields.contains(&FormField::text("_method", "PUT")));

        assert_eq!(requests[1].url, "http://api.test/admin/books");
        let Payload::Multipart(fields) = &requests[1].payload else {
            panic!("expected multipart body");
        };
        assert!(!fields.iter().any(|f| f.name() == "_method"));
    }

    #[tokio::test]
    async fn test_pending_loans_key() {
        let (client, transport) = client();
        transport.respond(
            200,
            json!({ "pending_loans": [{ "id": 3, "status": "pending", "book": { "title": "Bumi" } }] }),
        );
        let loans = client.pending_loans().await.unwrap();
        assert_eq!(loans.len(), 1);
        assert_eq!(loans[0].status, LoanStatus::Pending);
        assert_eq!(loans[0].book_title(), Some("Bumi"));
    }

    #[tokio::test]
    async fn test_reject_uses_default_reason() {
        let (client, transport) = client();
        client.reject_loan(3, "   ").await.unwrap();
        assert_eq!(
            transport.last_request().unwrap().payload,
            Payload::Json(json!({ "reason": "No reason provided" }))
        );
    }

    #[tokio::test]
    async fn test_extend_sends_days_and_returns_loan() {
        let (client, transport) = client();
        transport.respond(200, json!({ "loan": { "id": 3, "due_at": "2025-02-11" } }));
        let loan = client.extend_loan(3, 7).await.unwrap().unwrap();
        assert_eq!(loan.id, 3);
        let request = transport.last_request().unwrap();
        assert_eq!(request.url, "http://api.test/admin/loans/3/extend");
        assert_eq!(request.payload, Payload::Json(json!({ "days": 7 })));
        assert!(matches!(client.extend_loan(3, 0).await, Err(ApiError::Invalid(_))));
    }

    #[tokio::test]
    async fn test_empty_mutation_answers_are_success() {
        let (client, transport) = client();
        transport.respond(204, Value::Null);
        transport.respond(200, json!({ "message": "Book returned" }));
        transport.respond(200, json!(""));

        assert_eq!(client.approve_loan(3).await.unwrap(), None);
        assert_eq!(client.return_loan(3).await.unwrap(), None);
        assert_eq!(client.pay_fine(8).await.unwrap(), None);
        assert_eq!(transport.requests().len(), 3);
        assert_eq!(transport.requests()[0].url, "http://api.test/admin/loans/3/approve");
    }

    #[tokio::test]
    async fn test_calculated_fine_is_read() {
        let (client, transport) = client();
        transport.respond(200, json!({ "fine": { "amount": 6000, "reason": "3 days late" } }));
        let fine = client.calculate_fine(5).await.unwrap().unwrap();
        assert_eq!(fine.amount, 6000.0);
        assert_eq!(fine.reason(), Some("3 days late"));
    }

    #[tokio::test]
    async fn test_fines_nested_pagination() {
        let (client, transport) = client();
        transport.respond(
            200,
            json!({ "fines": { "data": [{ "id": 1, "amount": "5000", "status": "unpaid" }], "total": 1 } }),
        );
        let fines = client.admin_fines().await.unwrap();
        assert_eq!(fines[0].amount, 5000.0);
    }

    #[tokio::test]
    async fn test_role_change_body() {
        let (client, transport) = client();
        transport.respond(200, json!({ "user": { "id": 9, "role": "admin" } }));
        let user = client.set_user_role(9, Role::Admin).await.unwrap().unwrap();
        assert_eq!(user.role, Role::Admin);
        let request = transport.last_request().unwrap();
        assert_eq!(request.method, Method::Put);
        assert_eq!(request.payload, Payload::Json(json!({ "role": "admin" })));
    }

    #[tokio::test]
    async fn test_delete_failure_is_reported() {
        let (client, transport) = client();
        transport.respond(409, json!({ "message": "Book has active loans" }));
        let err = client.delete_book(1).await.unwrap_err();
        assert_eq!(err.user_message("Failed to delete book"), "Book has active loans");
    }
}
