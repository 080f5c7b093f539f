//! Admin management pages.

mod authors;
pub use authors::ManageAuthors;

mod books;
pub use books::ManageBooks;

mod categories;
pub use categories::ManageCategories;

mod dashboard;
pub use dashboard::AdminDashboard;

mod fines;
pub use fines::ManageFines;

mod loans;
pub use loans::ManageLoans;

mod reports;
pub use reports::Reports;

mod users;
pub use users::ManageUsers;

use ui::table::Record;

/// `(value, label)` pairs for a `Select` fed by a loaded list.
fn select_options<T: Record>(items: &[T], label: impl Fn(&T) -> String) -> Vec<(String, String)> {
    items
        .iter()
        .map(|item| (item.id().to_string(), label(item)))
        .collect()
}

/// Which record a create/edit modal is working on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Editing {
    New,
    Existing(u64),
}

impl Editing {
    fn id(self) -> Option<u64> {
        match self {
            Editing::New => None,
            Editing::Existing(id) => Some(id),
        }
    }

    fn title(self, noun: &str) -> String {
        match self {
            Editing::New => format!("Add {noun}"),
            Editing::Existing(_) => format!("Edit {noun}"),
        }
    }
}
