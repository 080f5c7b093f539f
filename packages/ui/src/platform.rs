//! Platform constructors for the session repository and API client.
//!
//! - **Web** (WASM + `web` feature): the session lives in `localStorage` via
//!   [`store::LocalStorageStore`].
//! - **Everything else** (tests, native builds): [`store::MemoryStore`].

use api::{HttpTransport, LibraryClient};
use store::{ConsoleConfig, SessionRepository};

pub fn make_session_repo() -> SessionRepository {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        SessionRepository::new(store::LocalStorageStore::new())
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        SessionRepository::new(store::MemoryStore::new())
    }
}

/// A client for the configured backend sharing `session`.
pub fn make_client(config: &ConsoleConfig, session: SessionRepository) -> LibraryClient {
    tracing::debug!("Using library API at {}", config.api.base_url);
    LibraryClient::new(HttpTransport::new(), config.api.base_url.clone(), session)
}
