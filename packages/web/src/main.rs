use dioxus::prelude::*;

use store::ConsoleConfig;
use ui::{AlertHost, ConsoleProvider};
use views::{
    AdminDashboard, AdminGuard, AuthorDetail, Authors, BookDetail, Borrow, Categories,
    CategoryDetail, ChangePassword, ConsoleLayout, ForgotPassword, GuestLayout, Home, Login,
    ManageAuthors, ManageBooks, ManageCategories, ManageFines, ManageLoans, ManageUsers,
    MemberGuard, MyFines, MyLoans, NotFound, Notifications, Overview, Profile, Register, Reports,
    Root,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Root {},
    #[layout(GuestLayout)]
        #[route("/login")]
        Login {},
        #[route("/register")]
        Register {},
        #[route("/forgot-password")]
        ForgotPassword {},
    #[end_layout]
    #[layout(ConsoleLayout)]
        #[layout(MemberGuard)]
            #[route("/home")]
            Home {},
            #[route("/overview")]
            Overview {},
            #[route("/books/:id")]
            BookDetail { id: u64 },
            #[route("/borrow/:id")]
            Borrow { id: u64 },
            #[route("/loans")]
            MyLoans {},
            #[route("/fines")]
            MyFines {},
            #[route("/authors")]
            Authors {},
            #[route("/authors/:id")]
            AuthorDetail { id: u64 },
            #[route("/categories")]
            Categories {},
            #[route("/categories/:id")]
            CategoryDetail { id: u64 },
        #[end_layout]
        #[route("/notifications")]
        Notifications {},
        #[route("/profile")]
        Profile {},
        #[route("/profile/password")]
        ChangePassword {},
        #[layout(AdminGuard)]
            #[route("/admin")]
            AdminDashboard {},
            #[route("/admin/books")]
            ManageBooks {},
            #[route("/admin/authors")]
            ManageAuthors {},
            #[route("/admin/categories")]
            ManageCategories {},
            #[route("/admin/loans")]
            ManageLoans {},
            #[route("/admin/fines")]
            ManageFines {},
            #[route("/admin/users")]
            ManageUsers {},
            #[route("/admin/reports")]
            Reports {},
        #[end_layout]
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Build-time configuration: the embedded `library.toml`, with the API base
/// URL overridable through `LIBRARY_API_URL`.
fn load_config() -> ConsoleConfig {
    let config = match ConsoleConfig::from_toml(include_str!("../library.toml")) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Falling back to default configuration: {e}");
            ConsoleConfig::default()
        }
    };
    match option_env!("LIBRARY_API_URL").filter(|url| !url.trim().is_empty()) {
        Some(url) => config.with_base_url(url.trim()),
        None => config,
    }
}

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);

    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Stylesheet { href: ui::CONSOLE_CSS }
        document::Stylesheet { href: MAIN_CSS }

        ConsoleProvider {
            config,
            Router::<Route> {}
            AlertHost {}
        }
    }
}
