use chrono::{Days, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};

use super::{de, first_filled, NamedRef, UserRef};
use crate::error::ApiError;

/// Due date for a loan starting on `start`.
///
/// Plain calendar arithmetic: month and year roll over, leap days count.
/// Saturates at `NaiveDate::MAX` instead of overflowing.
pub fn due_date(start: NaiveDate, period_days: u32) -> NaiveDate {
    start
        .checked_add_days(Days::new(u64::from(period_days)))
        .unwrap_or(NaiveDate::MAX)
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoanStatus {
    Pending,
    #[default]
    Borrowed,
    Returned,
    Rejected,
    Other(String),
}

impl LoanStatus {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "pending" => LoanStatus::Pending,
            "borrowed" | "active" | "approved" => LoanStatus::Borrowed,
            "returned" => LoanStatus::Returned,
            "rejected" => LoanStatus::Rejected,
            _ => LoanStatus::Other(raw.trim().to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            LoanStatus::Pending => "Pending",
            LoanStatus::Borrowed => "Borrowed",
            LoanStatus::Returned => "Returned",
            LoanStatus::Rejected => "Rejected",
            LoanStatus::Other(raw) if raw.is_empty() => "Active",
            LoanStatus::Other(raw) => raw,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            LoanStatus::Pending => "pending",
            LoanStatus::Borrowed | LoanStatus::Other(_) => "borrowed",
            LoanStatus::Returned => "returned",
            LoanStatus::Rejected => "rejected",
        }
    }
}

impl<'de> Deserialize<'de> for LoanStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().map(LoanStatus::parse).unwrap_or_default())
    }
}

/// How a loan reads from the member's side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoanStanding {
    Active,
    Overdue,
    Returned,
}

impl LoanStanding {
    pub fn label(&self) -> &'static str {
        match self {
            LoanStanding::Active => "Active",
            LoanStanding::Overdue => "Overdue",
            LoanStanding::Returned => "Returned",
        }
    }
}

/// The book as embedded in a loan.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct BookRef {
    #[serde(default, deserialize_with = "de::opt_u64")]
    pub id: Option<u64>,
    #[serde(default, deserialize_with = "de::string_or_empty")]
    pub title: String,
    #[serde(default)]
    pub cover_url: Option<String>,
    #[serde(default)]
    pub author: Option<NamedRef>,
}

/// `loan.member.user`, an older nesting of the borrower.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct MemberRef {
    #[serde(default)]
    pub user: Option<UserRef>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Loan {
    #[serde(default, deserialize_with = "de::u64_or_zero")]
    pub id: u64,
    #[serde(default, deserialize_with = "de::opt_u64")]
    pub book_id: Option<u64>,
    #[serde(default, deserialize_with = "de::opt_u64")]
    pub user_id: Option<u64>,
    #[serde(default, deserialize_with = "de::opt_date")]
    pub loaned_at: Option<NaiveDate>,
    #[serde(default, deserialize_with = "de::opt_date")]
    pub due_at: Option<NaiveDate>,
    #[serde(default, deserialize_with = "de::opt_date")]
    pub returned_at: Option<NaiveDate>,
    #[serde(default)]
    pub status: LoanStatus,
    #[serde(default)]
    pub book: Option<BookRef>,
    #[serde(default)]
    pub user: Option<UserRef>,
    #[serde(default)]
    pub member: Option<MemberRef>,
    #[serde(default)]
    pub book_title: Option<String>,
    #[serde(default)]
    pub member_name: Option<String>,
    #[serde(default)]
    pub rejection_reason: Option<String>,
}

impl Loan {
    pub fn book_title(&self) -> Option<&str> {
        first_filled([
            self.book.as_ref().map(|b| b.title.as_str()),
            self.book_title.as_deref(),
        ])
    }

    pub fn member_name(&self) -> Option<&str> {
        first_filled([
            self.user.as_ref().map(|u| u.name.as_str()),
            self.member
                .as_ref()
                .and_then(|m| m.user.as_ref())
                .map(|u| u.name.as_str()),
            self.member_name.as_deref(),
        ])
    }

    pub fn book_author(&self) -> Option<&str> {
        first_filled([self
            .book
            .as_ref()
            .and_then(|b| b.author.as_ref())
            .map(|a| a.name.as_str())])
    }

    pub fn cover_src(&self) -> Option<&str> {
        first_filled([self.book.as_ref().and_then(|b| b.cover_url.as_deref())])
    }

    pub fn is_returned(&self) -> bool {
        self.status == LoanStatus::Returned || self.returned_at.is_some()
    }

    pub fn standing(&self, today: NaiveDate) -> LoanStanding {
        if self.is_returned() {
            LoanStanding::Returned
        } else if self.due_at.is_some_and(|due| due < today) {
            LoanStanding::Overdue
        } else {
            LoanStanding::Active
        }
    }

    /// Whole days until the due date; negative once overdue.
    pub fn days_until_due(&self, today: NaiveDate) -> Option<i64> {
        self.due_at.map(|due| (due - today).num_days())
    }
}

/// Body for `POST /member/loans` and the admin create/update calls.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LoanPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
    pub book_id: u64,
    pub loaned_at: NaiveDate,
    pub due_at: NaiveDate,
}

impl LoanPayload {
    /// A member borrowing `book_id` starting on `loaned_at`.
    pub fn borrow(book_id: u64, loaned_at: NaiveDate, period_days: u32) -> Self {
        Self {
            user_id: None,
            book_id,
            loaned_at,
            due_at: due_date(loaned_at, period_days),
        }
    }

    pub fn validate(&self) -> Result<(), ApiError> {
        if self.due_at < self.loaned_at {
            return Err(ApiError::Invalid("Due date cannot be before the loan date".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_due_date_month_rollover() {
        assert_eq!(due_date(day(2025, 1, 28), 7), day(2025, 2, 4));
        assert_eq!(due_date(day(2025, 1, 28), 14), day(2025, 2, 11));
    }

    #[test]
    fn test_due_date_year_and_leap_rollover() {
        assert_eq!(due_date(day(2024, 12, 25), 14), day(2025, 1, 8));
        assert_eq!(due_date(day(2024, 2, 25), 7), day(2024, 3, 3));
        assert_eq!(due_date(day(2025, 2, 25), 7), day(2025, 3, 4));
        assert_eq!(due_date(day(2025, 3, 1), 0), day(2025, 3, 1));
    }

    #[test]
    fn test_status_parsing_is_case_insensitive() {
        assert_eq!(LoanStatus::parse("Returned"), LoanStatus::Returned);
        assert_eq!(LoanStatus::parse("PENDING"), LoanStatus::Pending);
        assert_eq!(LoanStatus::parse("lost"), LoanStatus::Other("lost".into()));
        let loan: Loan = serde_json::from_str(r#"{"id": 1, "status": null}"#).unwrap();
        assert_eq!(loan.status, LoanStatus::Borrowed);
    }

    #[test]
    fn test_standing() {
        let today = day(2025, 3, 10);
        let mut loan = Loan {
            due_at: Some(day(2025, 3, 9)),
            ..Default::default()
        };
        assert_eq!(loan.standing(today), LoanStanding::Overdue);
        assert_eq!(loan.days_until_due(today), Some(-1));

        loan.due_at = Some(today);
        assert_eq!(loan.standing(today), LoanStanding::Active);

        loan.due_at = Some(day(2025, 3, 1));
        loan.status = LoanStatus::Returned;
        assert_eq!(loan.standing(today), LoanStanding::Returned);
    }

    #[test]
    fn test_names_from_any_nesting() {
        let loan: Loan = serde_json::from_str(
            r#"{"id": 2, "member": {"user": {"id": 4, "name": "Sari"}},
                "book_title": "Laskar Pelangi", "due_at": "2025-03-01T00:00:00.000000Z"}"#,
        )
        .unwrap();
        assert_eq!(loan.member_name(), Some("Sari"));
        assert_eq!(loan.book_title(), Some("Laskar Pelangi"));
        assert_eq!(loan.due_at, Some(day(2025, 3, 1)));
    }

    #[test]
    fn test_borrow_payload() {
        let payload = LoanPayload::borrow(9, day(2025, 1, 28), 14);
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"book_id": 9, "loaned_at": "2025-01-28", "due_at": "2025-02-11"})
        );
        assert!(payload.validate().is_ok());
    }
}
