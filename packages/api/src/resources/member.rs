use crate::client::ApiClient;
use crate::envelope::{self, FINES, LOANS};
use crate::error::ApiError;
use crate::models::{Fine, FineSummary, Loan, LoanPayload};
use crate::transport::Transport;

impl<T: Transport> ApiClient<T> {
    /// Request a loan for the signed-in member.
    pub async fn borrow(&self, payload: &LoanPayload) -> Result<(), ApiError> {
        payload.validate()?;
        self.post_json("/member/loans", payload).await?;
        Ok(())
    }

    pub async fn my_loans(&self) -> Result<Vec<Loan>, ApiError> {
        envelope::list(&self.get("/member/loans").await?, LOANS)
    }

    pub async fn my_fines(&self) -> Result<Vec<Fine>, ApiError> {
        envelope::list(&self.get("/member/fines").await?, FINES)
    }

    /// Unpaid totals. Falls back to totals computed from `fines` when the
    /// endpoint fails or answers with an unknown shape.
    pub async fn my_fine_summary(&self, fines: &[Fine]) -> FineSummary {
        match self.get("/member/fines/unpaid/summary").await {
            Ok(body) => FineSummary::from_body(&body, fines).unwrap_or_else(|| FineSummary::compute(fines)),
            Err(e) => {
                tracing::warn!("Unpaid summary unavailable, computing locally: {e}");
                FineSummary::compute(fines)
            }
        }
    }

    pub async fn pay_my_fine(&self, id: u64) -> Result<(), ApiError> {
        self.post(&format!("/member/fines/{id}/pay")).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use serde_json::json;
    use store::{MemoryStore, SessionRepository};

    use super::*;
    use crate::models::FineStatus;
    use crate::stub::StubTransport;
    use crate::transport::Payload;

    fn client() -> (ApiClient<StubTransport>, StubTransport) {
        let transport = StubTransport::new();
        let session = SessionRepository::new(MemoryStore::new());
        session.save_token("member-token");
        let client = ApiClient::new(transport.clone(), "http://api.test", session);
        (client, transport)
    }

    #[tokio::test]
    async fn test_borrow_body() {
        let (client, transport) = client();
        let start = NaiveDate::from_ymd_opt(2025, 1, 28).unwrap();
        client.borrow(&LoanPayload::borrow(12, start, 7)).await.unwrap();
        let request = transport.last_request().unwrap();
        assert_eq!(request.url, "http://api.test/member/loans");
        assert_eq!(
            request.payload,
            Payload::Json(json!({ "book_id": 12, "loaned_at": "2025-01-28", "due_at": "2025-02-04" }))
        );
    }

    #[tokio::test]
    async fn test_borrow_rejection_message() {
        let (client, transport) = client();
        transport.respond(422, json!({ "message": "Book is out of stock" }));
        let start = NaiveDate::from_ymd_opt(2025, 1, 28).unwrap();
        let err = client.borrow(&LoanPayload::borrow(12, start, 14)).await.unwrap_err();
        assert_eq!(err.user_message("Failed to borrow book"), "Book is out of stock");
    }

    #[tokio::test]
    async fn test_summary_falls_back_to_local_totals() {
        let (client, transport) = client();
        transport.respond(500, json!({ "message": "boom" }));
        let fines = vec![Fine {
            id: 1,
            amount: 2000.0,
            status: FineStatus::Unpaid,
            ..Default::default()
        }];
        let summary = client.my_fine_summary(&fines).await;
        assert_eq!(summary.unpaid, 1);
        assert_eq!(summary.total_unpaid, 2000.0);
    }

    #[tokio::test]
    async fn test_summary_from_server() {
        let (client, transport) = client();
        transport.respond(200, json!({ "count": 3, "total_unpaid": 7500 }));
        let summary = client.my_fine_summary(&[]).await;
        assert_eq!(summary.unpaid, 3);
        assert_eq!(summary.total_unpaid, 7500.0);
    }
}
