//! Pages shared by members and admins.

mod notifications;
pub use notifications::Notifications;

mod profile;
pub use profile::{ChangePassword, Profile};
