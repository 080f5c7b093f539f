//! Member pages: catalog, borrowing, loans and fines.

mod authors;
pub use authors::{AuthorDetail, Authors};

mod book_detail;
pub use book_detail::BookDetail;

mod borrow;
pub use borrow::Borrow;

mod categories;
pub use categories::{Categories, CategoryDetail};

mod fines;
pub use fines::MyFines;

mod home;
pub use home::Home;

mod loans;
pub use loans::MyLoans;

mod overview;
pub use overview::Overview;

mod book_grid;
