//! # Endpoint groups
//!
//! Each submodule adds methods to [`ApiClient`](crate::ApiClient):
//!
//! | Module | Endpoints |
//! |--------|-----------|
//! | [`account`] | `/login`, `/register`, `/logout`, `/me`, `/profile` |
//! | [`catalog`] | `/books`, `/authors`, `/categories` and their detail/book lists |
//! | [`admin`] | `/admin/{books,authors,categories,loans,fines,users}` and actions |
//! | [`member`] | `/member/loans`, `/member/fines` |
//! | [`reports`] | `/admin/reports/{kind}` |
//!
//! Lists decode through [`crate::envelope::list`], single records through
//! [`crate::envelope::record`].

pub mod account;
pub mod admin;
pub mod catalog;
pub mod member;
pub mod reports;

pub use reports::ReportKind;
