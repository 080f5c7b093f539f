//! Book management. Books are saved as multipart form data so a cover
//! image can ride along with the fields.

use api::{Author, Book, Category, CoverFile};
use dioxus::prelude::*;
use ui::components::{
    BookCover, Button, ButtonVariant, ConfirmDialog, EmptyRow, ErrorBanner, Field, Input, Loading,
    Modal, PageHeader, ResultCount, SearchBox, Select, StockBadge,
};
use ui::format::today;
use ui::forms::BookForm;
use ui::table::TableState;
use ui::{use_console, AlertLevel};

use super::{select_options, Editing};

#[component]
pub fn ManageBooks() -> Element {
    let console = use_console();
    let threshold = console.config().catalog.low_stock_threshold;
    let mut table = use_signal(TableState::<Book>::default);
    let mut authors = use_signal(Vec::<Author>::new);
    let mut categories = use_signal(Vec::<Category>::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut editing = use_signal(|| Option::<Editing>::None);
    let mut form = use_signal(BookForm::default);
    let mut form_error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);
    let mut viewing = use_signal(|| Option::<u64>::None);

    let mut loader = use_resource(move || async move {
        let client = console.client();
        match client.admin_books().await {
            Ok(books) => {
                table.write().replace(books);
                error.set(None);
            }
            Err(e) => {
                error.set(Some(console.load_error(&e, "Failed to load books")));
                return;
            }
        }
        match client.admin_authors().await {
            Ok(list) => authors.set(list),
            Err(e) => tracing::warn!("Author list unavailable: {e}"),
        }
        match client.admin_categories().await {
            Ok(list) => categories.set(list),
            Err(e) => tracing::warn!("Category list unavailable: {e}"),
        }
    });

    let mut open_editor = move |target: Editing| {
        let initial = match target {
            Editing::New => BookForm::default(),
            Editing::Existing(id) => table
                .read()
                .get(id)
                .map(BookForm::from_book)
                .unwrap_or_default(),
        };
        form.set(initial);
        form_error.set(None);
        editing.set(Some(target));
    };

    let handle_save = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(target) = editing() else {
            return;
        };
        let payload = match form.read().payload(today()) {
            Ok(payload) => payload,
            Err(e) => {
                form_error.set(Some(e.user_message("Please check the form")));
                return;
            }
        };
        spawn(async move {
            saving.set(true);
            match console.client().save_book(target.id(), payload).await {
                Ok(()) => {
                    editing.set(None);
                    let message = match target {
                        Editing::New => "Book added successfully.",
                        Editing::Existing(_) => "Book updated successfully.",
                    };
                    console.alert(AlertLevel::Success, message);
                    loader.restart();
                }
                Err(e) => console.report_failure(&e, "Failed to save the book"),
            }
            saving.set(false);
        });
    };

    let handle_cover = move |evt: FormEvent| async move {
        let Some(file) = evt.files().into_iter().next() else {
            form.write().cover_file = None;
            return;
        };
        match file.read_bytes().await {
            Ok(bytes) => {
                form.write().cover_file = Some(CoverFile {
                    file_name: file.name(),
                    content_type: file.content_type(),
                    bytes: bytes.to_vec(),
                });
            }
            Err(e) => {
                tracing::warn!("Could not read cover file: {e}");
                form_error.set(Some("Could not read the selected image".to_string()));
            }
        }
    };

    let confirm_delete = move |_: ()| {
        let Some(id) = table.write().take_pending_delete() else {
            return;
        };
        spawn(async move {
            let outcome = console.client().delete_book(id).await;
            let outcome = table.write().settle_delete(id, outcome);
            match outcome {
                Ok(()) => {
                    console.alert(AlertLevel::Success, "Book deleted successfully.");
                }
                Err(e) => console.report_failure(&e, "Failed to delete the book"),
            }
        });
    };

    let body = if let Some(message) = error() {
        rsx! {
            ErrorBanner { message, on_retry: move |_| loader.restart() }
        }
    } else if loader.read().is_none() {
        rsx! {
            Loading { label: "Loading books..." }
        }
    } else {
        let state = table.read();
        let rows: Vec<Book> = state.visible().into_iter().cloned().collect();
        rsx! {
            ResultCount { label: state.result_label() }
            table {
                class: "data-table",
                thead {
                    tr {
                        th { "Cover" }
                        th { "Title" }
                        th { "Author" }
                        th { "Category" }
                        th { "Year" }
                        th { "Stock" }
                        th { "Actions" }
                    }
                }
                tbody {
                    if rows.is_empty() {
                        EmptyRow { colspan: 7, message: "No books found." }
                    }
                    for book in rows {
                        tr {
                            key: "{book.id}",
                            td {
                                BookCover {
                                    src: book.cover_src().map(str::to_string),
                                    alt: book.title.clone(),
                                    class: "book-cover book-cover-thumb",
                                }
                            }
                            td {
                                strong { "{book.title}" }
                                p { class: "form-hint", "ISBN {book.isbn}" }
                            }
                            td { {book.author_label().unwrap_or("-").to_string()} }
                            td { {book.category_label().unwrap_or("-").to_string()} }
                            td { {book.year.map(|y| y.to_string()).unwrap_or_else(|| "-".into())} }
                            td { StockBadge { level: book.stock_level(threshold), stock: book.stock } }
                            td {
                                class: "row-actions",
                                Button {
                                    variant: ButtonVariant::Ghost,
                                    small: true,
                                    onclick: move |_| viewing.set(Some(book.id)),
                                    "View"
                                }
                                Button {
                                    variant: ButtonVariant::Outline,
                                    small: true,
                                    onclick: move |_| open_editor(Editing::Existing(book.id)),
                                    "Edit"
                                }
                                Button {
                                    variant: ButtonVariant::Danger,
                                    small: true,
                                    onclick: move |_| table.write().request_delete(book.id),
                                    "Delete"
                                }
                            }
                        }
                    }
                }
            }
        }
    };

    let author_options = select_options(&authors.read(), |a| a.name.clone());
    let category_options = select_options(&categories.read(), |c| c.name.clone());
    let pending_title = table
        .read()
        .pending_delete()
        .and_then(|id| table.read().get(id).map(|b| b.title.clone()));

    rsx! {
        PageHeader {
            title: "Manage Books",
            actions: rsx! {
                Button { onclick: move |_| open_editor(Editing::New), "Add Book" }
            },
        }
        div {
            class: "toolbar",
            SearchBox {
                value: table.read().query().to_string(),
                placeholder: "Search by title, author, ISBN...",
                on_search: move |q: String| table.write().set_query(q),
            }
        }
        {body}

        if let Some(target) = editing() {
            Modal {
                title: target.title("Book"),
                wide: true,
                on_close: move |_| editing.set(None),
                form {
                    onsubmit: handle_save,
                    if let Some(message) = form_error() {
                        p { class: "form-error", "{message}" }
                    }
                    Field {
                        id: "book-title",
                        label: "Title",
                        Input {
                            id: "book-title",
                            required: true,
                            value: form.read().title.clone(),
                            oninput: move |v| form.write().title = v,
                        }
                    }
                    div {
                        class: "form-row",
                        Field {
                            id: "book-isbn",
                            label: "ISBN",
                            hint: "Up to 13 characters",
                            Input {
                                id: "book-isbn",
                                required: true,
                                value: form.read().isbn.clone(),
                                oninput: move |v| form.write().isbn = v,
                            }
                        }
                        Field {
                            id: "book-publisher",
                            label: "Publisher",
                            Input {
                                id: "book-publisher",
                                required: true,
                                value: form.read().publisher.clone(),
                                oninput: move |v| form.write().publisher = v,
                            }
                        }
                    }
                    div {
                        class: "form-row",
                        Field {
                            id: "book-year",
                            label: "Year",
                            Input {
                                id: "book-year",
                                r#type: "number",
                                required: true,
                                value: form.read().year.clone(),
                                oninput: move |v| form.write().year = v,
                            }
                        }
                        Field {
                            id: "book-stock",
                            label: "Stock",
                            Input {
                                id: "book-stock",
                                r#type: "number",
                                min: "0",
                                value: form.read().stock.clone(),
                                oninput: move |v| form.write().stock = v,
                            }
                        }
                    }
                    div {
                        class: "form-row",
                        Field {
                            id: "book-author",
                            label: "Author",
                            Select {
                                id: "book-author",
                                value: form.read().author_id.clone(),
                                options: author_options,
                                placeholder: "Select author",
                                onchange: move |v| form.write().author_id = v,
                            }
                        }
                        Field {
                            id: "book-category",
                            label: "Category",
                            Select {
                                id: "book-category",
                                value: form.read().category_id.clone(),
                                options: category_options,
                                placeholder: "Select category",
                                onchange: move |v| form.write().category_id = v,
                            }
                        }
                    }
                    Field {
                        id: "book-cover-url",
                        label: "Cover URL",
                        hint: "Ignored when an image file is chosen",
                        Input {
                            id: "book-cover-url",
                            r#type: "url",
                            value: form.read().cover_url.clone(),
                            oninput: move |v| form.write().cover_url = v,
                        }
                    }
                    div {
                        class: "form-group",
                        label { class: "form-label", r#for: "book-cover-file", "Cover image" }
                        input {
                            id: "book-cover-file",
                            class: "form-control",
                            r#type: "file",
                            accept: "image/*",
                            onchange: handle_cover,
                        }
                    }
                    div {
                        class: "dialog-actions",
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| editing.set(None),
                            "Cancel"
                        }
                        Button {
                            r#type: "submit",
                            disabled: saving(),
                            if saving() { "Saving..." } else { "Save" }
                        }
                    }
                }
            }
        }

        if let Some(book) = viewing().and_then(|id| table.read().get(id).cloned()) {
            BookDetailModal {
                book,
                threshold,
                on_close: move |_| viewing.set(None),
            }
        }

        if let Some(title) = pending_title {
            ConfirmDialog {
                title: "Delete book",
                message: format!("Are you sure you want to delete \"{title}\"?"),
                confirm_label: "Delete",
                danger: true,
                on_confirm: confirm_delete,
                on_cancel: move |_| table.write().cancel_delete(),
            }
        }
    }
}

#[component]
fn BookDetailModal(book: Book, threshold: i64, on_close: EventHandler<()>) -> Element {
    let year = book.year.map(|y| y.to_string()).unwrap_or_else(|| "-".into());
    rsx! {
        Modal {
            title: book.title.clone(),
            on_close,
            div {
                class: "book-detail",
                BookCover { src: book.cover_src().map(str::to_string), alt: book.title.clone() }
                dl {
                    class: "detail-list",
                    dt { "Author" }
                    dd { {book.author_label().unwrap_or("-").to_string()} }
                    dt { "Category" }
                    dd { {book.category_label().unwrap_or("-").to_string()} }
                    dt { "Publisher" }
                    dd { "{book.publisher}" }
                    dt { "Year" }
                    dd { "{year}" }
                    dt { "ISBN" }
                    dd { "{book.isbn}" }
                    dt { "Stock" }
                    dd { StockBadge { level: book.stock_level(threshold), stock: book.stock } }
                }
            }
        }
    }
}
