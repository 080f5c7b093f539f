//! # Library entities as the backend sends them
//!
//! | Module | Types |
//! |--------|-------|
//! | [`book`] | [`Book`], [`BookPayload`], [`CoverFile`], [`StockLevel`] |
//! | [`author`] | [`Author`], [`AuthorPayload`] |
//! | [`category`] | [`Category`], [`CategoryPayload`] |
//! | [`loan`] | [`Loan`], [`LoanStatus`], [`LoanStanding`], [`LoanPayload`], [`due_date`] |
//! | [`fine`] | [`Fine`], [`FineStatus`], [`FinePayload`], [`FineSummary`] |
//! | [`user`] | [`User`], [`ProfileUpdate`], [`PasswordChange`] |
//! | [`auth`] | [`Credentials`], [`Registration`], [`AuthResponse`] |
//!
//! Every entity decodes leniently (see [`de`]): optional fields default,
//! numbers may be strings, dates may be timestamps. Nested references
//! (`book.author`, `loan.user`, ...) share [`NamedRef`].

pub mod auth;
pub mod author;
pub mod book;
pub mod category;
pub mod de;
pub mod fine;
pub mod loan;
pub mod user;

pub use auth::{AuthResponse, Credentials, Registration};
pub use author::{Author, AuthorPayload};
pub use book::{Book, BookPayload, CoverFile, StockLevel};
pub use category::{Category, CategoryPayload};
pub use fine::{Fine, FinePayload, FineStatus, FineSummary};
pub use loan::{due_date, BookRef, Loan, LoanPayload, LoanStanding, LoanStatus};
pub use user::{ProfileUpdate, PasswordChange, User};

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// A nested `{ id, name }` reference. Also accepts a bare name string.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NamedRef {
    pub id: Option<u64>,
    pub name: String,
}

pub type AuthorRef = NamedRef;
pub type CategoryRef = NamedRef;
pub type UserRef = NamedRef;

impl<'de> Deserialize<'de> for NamedRef {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::String(name) => NamedRef { id: None, name },
            Value::Object(map) => NamedRef {
                id: map.get("id").and_then(|v| match v {
                    Value::Number(n) => n.as_u64(),
                    Value::String(s) => s.parse().ok(),
                    _ => None,
                }),
                name: map
                    .get("name")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
            },
            _ => NamedRef::default(),
        })
    }
}

/// First non-blank string among `candidates`.
pub(crate) fn first_filled<'a>(candidates: impl IntoIterator<Item = Option<&'a str>>) -> Option<&'a str> {
    candidates
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_ref_shapes() {
        let r: NamedRef = serde_json::from_str(r#"{"id": 2, "name": "Tolkien"}"#).unwrap();
        assert_eq!(r, NamedRef { id: Some(2), name: "Tolkien".into() });
        let r: NamedRef = serde_json::from_str(r#""Tolkien""#).unwrap();
        assert_eq!(r.name, "Tolkien");
        assert_eq!(r.id, None);
    }

    #[test]
    fn test_first_filled_skips_blank() {
        assert_eq!(first_filled([None, Some("  "), Some("x")]), Some("x"));
        assert_eq!(first_filled([None, Some("")]), None);
    }
}
