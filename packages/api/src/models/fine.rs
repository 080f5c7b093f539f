use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::{de, first_filled, Loan, UserRef};
use crate::error::ApiError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FineStatus {
    Paid,
    #[default]
    Unpaid,
}

impl FineStatus {
    pub fn label(&self) -> &'static str {
        match self {
            FineStatus::Paid => "Paid",
            FineStatus::Unpaid => "Unpaid",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            FineStatus::Paid => "paid",
            FineStatus::Unpaid => "unpaid",
        }
    }
}

impl<'de> Deserialize<'de> for FineStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(match raw.as_deref().map(|s| s.trim().to_lowercase()) {
            Some(s) if s == "paid" => FineStatus::Paid,
            _ => FineStatus::Unpaid,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Fine {
    #[serde(default, deserialize_with = "de::u64_or_zero")]
    pub id: u64,
    #[serde(default, deserialize_with = "de::opt_u64")]
    pub loan_id: Option<u64>,
    #[serde(default, deserialize_with = "de::opt_u64")]
    pub user_id: Option<u64>,
    #[serde(default, deserialize_with = "de::f64_or_zero")]
    pub amount: f64,
    #[serde(default)]
    pub reason: Option<String>,
    /// Legacy name for `reason`.
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub status: FineStatus,
    #[serde(default, deserialize_with = "de::opt_i64", alias = "days_overdue")]
    pub days: Option<i64>,
    #[serde(default)]
    pub user: Option<UserRef>,
    #[serde(default)]
    pub loan: Option<Loan>,
    #[serde(default)]
    pub member_name: Option<String>,
}

impl Fine {
    pub fn reason(&self) -> Option<&str> {
        first_filled([self.reason.as_deref(), self.note.as_deref()])
    }

    pub fn member_name(&self) -> Option<&str> {
        first_filled([
            self.user.as_ref().map(|u| u.name.as_str()),
            self.loan.as_ref().and_then(Loan::member_name),
            self.member_name.as_deref(),
        ])
    }

    pub fn book_title(&self) -> Option<&str> {
        self.loan.as_ref().and_then(Loan::book_title)
    }

    pub fn resolved_loan_id(&self) -> Option<u64> {
        self.loan_id.or_else(|| self.loan.as_ref().map(|l| l.id))
    }

    pub fn is_paid(&self) -> bool {
        self.status == FineStatus::Paid
    }
}

/// Body for `/admin/fines` create and update.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct FinePayload {
    pub loan_id: Option<u64>,
    pub amount: f64,
    pub reason: String,
}

impl FinePayload {
    pub fn from_fine(fine: &Fine) -> Self {
        Self {
            loan_id: fine.resolved_loan_id(),
            amount: fine.amount,
            reason: fine.reason().unwrap_or_default().to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), ApiError> {
        if self.loan_id.is_none() {
            return Err(ApiError::Invalid("Please select a loan".into()));
        }
        if !self.amount.is_finite() || self.amount < 0.0 {
            return Err(ApiError::Invalid("Amount cannot be negative".into()));
        }
        Ok(())
    }
}

/// Unpaid totals shown above the member's fine list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FineSummary {
    pub total: usize,
    pub unpaid: usize,
    pub total_unpaid: f64,
}

impl FineSummary {
    /// Summary computed locally from a fine list.
    pub fn compute(fines: &[Fine]) -> Self {
        let unpaid: Vec<&Fine> = fines.iter().filter(|f| !f.is_paid()).collect();
        Self {
            total: fines.len(),
            unpaid: unpaid.len(),
            total_unpaid: unpaid.iter().map(|f| f.amount).sum(),
        }
    }

    /// Read `/member/fines/unpaid/summary`, if it has a usable shape.
    ///
    /// Accepts `{ unpaid_fines: [...], total_unpaid, count }` and the
    /// `total_unpaid_amount` spelling, optionally under `data`. `total` always
    /// comes from the loaded list.
    pub fn from_body(body: &Value, fines: &[Fine]) -> Option<Self> {
        let body = body.get("data").filter(|d| d.is_object()).unwrap_or(body);
        let listed = body.get("unpaid_fines").and_then(Value::as_array);
        let amount = body
            .get("total_unpaid")
            .or_else(|| body.get("total_unpaid_amount"))
            .filter(|v| !v.is_null());
        if listed.is_none() && amount.is_none() {
            return None;
        }
        let unpaid = body
            .get("count")
            .and_then(Value::as_u64)
            .map(|c| c as usize)
            .or_else(|| listed.map(Vec::len))
            .unwrap_or_default();
        let total_unpaid = amount
            .and_then(|v| match v {
                Value::Number(n) => n.as_f64(),
                Value::String(s) => s.trim().parse().ok(),
                _ => None,
            })
            .unwrap_or_default();
        Some(Self {
            total: fines.len(),
            unpaid,
            total_unpaid,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fine(amount: f64, status: FineStatus) -> Fine {
        Fine {
            amount,
            status,
            ..Default::default()
        }
    }

    #[test]
    fn test_reason_falls_back_to_note() {
        let f: Fine = serde_json::from_str(r#"{"id": 1, "note": "Late 4 days", "amount": "4000"}"#).unwrap();
        assert_eq!(f.reason(), Some("Late 4 days"));
        assert_eq!(f.amount, 4000.0);
        assert_eq!(f.status, FineStatus::Unpaid);
    }

    #[test]
    fn test_status_is_case_insensitive() {
        let f: Fine = serde_json::from_str(r#"{"id": 1, "status": "PAID"}"#).unwrap();
        assert!(f.is_paid());
    }

    #[test]
    fn test_summary_from_server_shape() {
        let fines = vec![fine(1000.0, FineStatus::Unpaid), fine(500.0, FineStatus::Paid)];
        let body = json!({ "unpaid_fines": [{ "id": 1 }], "total_unpaid": "1000" });
        let summary = FineSummary::from_body(&body, &fines).unwrap();
        assert_eq!(
            summary,
            FineSummary {
                total: 2,
                unpaid: 1,
                total_unpaid: 1000.0
            }
        );
        assert_eq!(FineSummary::from_body(&json!({ "message": "ok" }), &fines), None);
    }

    #[test]
    fn test_summary_computed_locally() {
        let fines = vec![
            fine(1000.0, FineStatus::Unpaid),
            fine(2500.0, FineStatus::Unpaid),
            fine(500.0, FineStatus::Paid),
        ];
        let summary = FineSummary::compute(&fines);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.unpaid, 2);
        assert_eq!(summary.total_unpaid, 3500.0);
    }

    #[test]
    fn test_payload_validation() {
        let mut payload = FinePayload {
            loan_id: Some(3),
            amount: 0.0,
            reason: String::new(),
        };
        assert!(payload.validate().is_ok());
        payload.amount = -1.0;
        assert!(payload.validate().is_err());
        payload.amount = 10.0;
        payload.loan_id = None;
        assert!(payload.validate().is_err());
    }
}
