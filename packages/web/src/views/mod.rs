mod guard;
pub use guard::{AdminGuard, GuestLayout, MemberGuard, NotFound, Root};

mod sidebar_layout;
pub use sidebar_layout::ConsoleLayout;

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod forgot_password;
pub use forgot_password::ForgotPassword;

mod member;
pub use member::{
    AuthorDetail, Authors, BookDetail, Borrow, Categories, CategoryDetail, Home, MyFines, MyLoans,
    Overview,
};

mod account;
pub use account::{ChangePassword, Notifications, Profile};

mod admin;
pub use admin::{
    AdminDashboard, ManageAuthors, ManageBooks, ManageCategories, ManageFines, ManageLoans,
    ManageUsers, Reports,
};

use std::time::Duration;

pub(crate) async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}
