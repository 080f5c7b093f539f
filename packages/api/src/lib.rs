//! # API crate: typed client for the library REST backend
//!
//! Everything the console knows about the backend lives here. Pages never
//! build URLs or parse JSON themselves; they call a method on [`ApiClient`]
//! and get typed models or an [`ApiError`] back.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`]: base URL, bearer token, 401 handling, token persistence |
//! | [`transport`] | [`Transport`] trait and the request/response types it moves |
//! | [`http`] | [`HttpTransport`], the `reqwest` implementation |
//! | [`stub`] | [`StubTransport`], scripted responses for tests |
//! | [`envelope`] | List/record/error-message normalization across response shapes |
//! | [`error`] | [`ApiError`] |
//! | [`models`] | Entities, request payloads, loan date arithmetic |
//! | [`resources`] | Endpoint groups: account, catalog, admin, member, reports |
//! | [`search`] | [`Searchable`] and [`filter_by_query`] |

pub mod client;
pub mod envelope;
pub mod error;
pub mod http;
pub mod models;
pub mod resources;
pub mod search;
pub mod stub;
pub mod transport;

pub use client::ApiClient;
pub use error::ApiError;
pub use http::HttpTransport;
pub use models::*;
pub use resources::reports::ReportData;
pub use resources::ReportKind;
pub use search::{filter_by_query, Searchable};
pub use stub::StubTransport;
pub use transport::{ApiRequest, ApiResponse, FormField, Method, Payload, Transport};

pub use store::{Role, Session, SessionUser};

/// The client the application runs with.
pub type LibraryClient = ApiClient<HttpTransport>;
