//! Form state for the create/edit modals.
//!
//! Inputs are held as the strings the user typed and converted to request
//! payloads on submit, so a half-typed number never fights the input box.

use api::models::de::parse_date;
use api::resources::admin::DEFAULT_EXTENSION_DAYS;
use api::{due_date, ApiError, Book, BookPayload, CoverFile, Fine, FinePayload, Loan, LoanPayload};
use chrono::NaiveDate;

use crate::format::input_date;

/// A `<select>` value: empty means nothing chosen.
pub fn parse_id(raw: &str) -> Option<u64> {
    raw.trim().parse().ok().filter(|id| *id != 0)
}

pub fn parse_int(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

pub fn parse_amount(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|a| a.is_finite())
}

/// Answer to the "extend by how many days?" prompt. Blank takes the default.
pub fn parse_extension_days(raw: &str) -> Result<u32, ApiError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(DEFAULT_EXTENSION_DAYS);
    }
    match raw.parse::<u32>() {
        Ok(days) if days > 0 => Ok(days),
        _ => Err(ApiError::Invalid("Please enter a valid number of days".into())),
    }
}

/// The member borrow form. The due date is derived and never typed.
#[derive(Clone, Debug, PartialEq)]
pub struct BorrowForm {
    pub book_id: u64,
    loaned_at: NaiveDate,
    period_days: u32,
}

impl BorrowForm {
    pub fn new(book_id: u64, today: NaiveDate, period_days: u32) -> Self {
        Self {
            book_id,
            loaned_at: today,
            period_days,
        }
    }

    pub fn loaned_at(&self) -> NaiveDate {
        self.loaned_at
    }

    pub fn due_at(&self) -> NaiveDate {
        due_date(self.loaned_at, self.period_days)
    }

    pub fn period_days(&self) -> u32 {
        self.period_days
    }

    /// Take the start date from the date input; unparsable input is ignored.
    pub fn set_start(&mut self, raw: &str) {
        if let Some(date) = parse_date(raw) {
            self.loaned_at = date;
        }
    }

    pub fn payload(&self) -> LoanPayload {
        LoanPayload::borrow(self.book_id, self.loaned_at, self.period_days)
    }
}

/// Admin create/edit loan modal.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoanForm {
    pub user_id: String,
    pub book_id: String,
    pub loaned_at: String,
    pub due_at: String,
}

impl LoanForm {
    /// A blank form starting today with the default period pre-filled.
    pub fn new(today: NaiveDate, period_days: u32) -> Self {
        Self {
            loaned_at: input_date(today),
            due_at: input_date(due_date(today, period_days)),
            ..Default::default()
        }
    }

    pub fn from_loan(loan: &Loan) -> Self {
        let id = |v: Option<u64>| v.map(|id| id.to_string()).unwrap_or_default();
        let day = |v: Option<NaiveDate>| v.map(input_date).unwrap_or_default();
        Self {
            user_id: id(loan.user_id.or_else(|| loan.user.as_ref().and_then(|u| u.id))),
            book_id: id(loan.book_id.or_else(|| loan.book.as_ref().and_then(|b| b.id))),
            loaned_at: day(loan.loaned_at),
            due_at: day(loan.due_at),
        }
    }

    pub fn payload(&self) -> Result<LoanPayload, ApiError> {
        let user_id =
            parse_id(&self.user_id).ok_or_else(|| ApiError::Invalid("Please select a member".into()))?;
        let book_id =
            parse_id(&self.book_id).ok_or_else(|| ApiError::Invalid("Please select a book".into()))?;
        let loaned_at = parse_date(&self.loaned_at)
            .ok_or_else(|| ApiError::Invalid("Loan date is required".into()))?;
        let due_at =
            parse_date(&self.due_at).ok_or_else(|| ApiError::Invalid("Due date is required".into()))?;
        let payload = LoanPayload {
            user_id: Some(user_id),
            book_id,
            loaned_at,
            due_at,
        };
        payload.validate()?;
        Ok(payload)
    }
}

/// Admin create/edit book modal.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BookForm {
    pub title: String,
    pub isbn: String,
    pub publisher: String,
    pub year: String,
    pub stock: String,
    pub author_id: String,
    pub category_id: String,
    pub cover_url: String,
    pub cover_file: Option<CoverFile>,
}

impl BookForm {
    pub fn from_book(book: &Book) -> Self {
        let payload = BookPayload::from_book(book);
        Self {
            title: payload.title,
            isbn: payload.isbn,
            publisher: payload.publisher,
            year: payload.year.map(|y| y.to_string()).unwrap_or_default(),
            stock: payload.stock.to_string(),
            author_id: payload.author_id.map(|id| id.to_string()).unwrap_or_default(),
            category_id: payload.category_id.map(|id| id.to_string()).unwrap_or_default(),
            cover_url: payload.cover_url.unwrap_or_default(),
            cover_file: None,
        }
    }

    /// Build and validate the request body.
    pub fn payload(&self, today: NaiveDate) -> Result<BookPayload, ApiError> {
        let stock = if self.stock.trim().is_empty() {
            0
        } else {
            parse_int(&self.stock)
                .ok_or_else(|| ApiError::Invalid("Stock must be a whole number".into()))?
        };
        let payload = BookPayload {
            title: self.title.trim().to_string(),
            isbn: self.isbn.trim().to_string(),
            publisher: self.publisher.trim().to_string(),
            year: parse_int(&self.year),
            stock,
            author_id: parse_id(&self.author_id),
            category_id: parse_id(&self.category_id),
            cover_url: Some(self.cover_url.trim().to_string()).filter(|u| !u.is_empty()),
            cover_file: self.cover_file.clone(),
        };
        payload.validate(today)?;
        Ok(payload)
    }
}

/// Admin create/edit fine modal.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FineForm {
    pub loan_id: String,
    pub amount: String,
    pub reason: String,
}

impl FineForm {
    pub fn from_fine(fine: &Fine) -> Self {
        let payload = FinePayload::from_fine(fine);
        Self {
            loan_id: payload.loan_id.map(|id| id.to_string()).unwrap_or_default(),
            amount: format!("{}", payload.amount),
            reason: payload.reason,
        }
    }

    pub fn payload(&self) -> Result<FinePayload, ApiError> {
        let amount = parse_amount(&self.amount)
            .ok_or_else(|| ApiError::Invalid("Please enter a valid amount".into()))?;
        let payload = FinePayload {
            loan_id: parse_id(&self.loan_id),
            amount,
            reason: self.reason.trim().to_string(),
        };
        payload.validate()?;
        Ok(payload)
    }
}
