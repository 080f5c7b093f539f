pub mod config;
pub mod repo;
pub mod session;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorageStore;

pub use config::{ConfigError, ConsoleConfig};
pub use repo::{SessionRepository, SessionStore};
pub use session::{Role, Session, SessionUser};
