use api::{Author, AuthorPayload, Book};
use dioxus::prelude::*;
use ui::components::{
    Button, ButtonVariant, ConfirmDialog, EmptyRow, ErrorBanner, Field, Input, Loading, Modal,
    PageHeader, ResultCount, SearchBox, Textarea,
};
use ui::table::TableState;
use ui::{use_console, AlertLevel};

use super::Editing;

#[component]
pub fn ManageAuthors() -> Element {
    let console = use_console();
    let mut table = use_signal(TableState::<Author>::default);
    let mut error = use_signal(|| Option::<String>::None);
    let mut editing = use_signal(|| Option::<Editing>::None);
    let mut form = use_signal(AuthorPayload::default);
    let mut form_error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);
    let mut viewing = use_signal(|| Option::<u64>::None);

    let mut loader = use_resource(move || async move {
        match console.client().admin_authors().await {
            Ok(authors) => {
                table.write().replace(authors);
                error.set(None);
            }
            Err(e) => error.set(Some(console.load_error(&e, "Failed to load authors"))),
        }
    });

    let mut open_editor = move |target: Editing| {
        let initial = match target {
            Editing::New => AuthorPayload::default(),
            Editing::Existing(id) => table
                .read()
                .get(id)
                .map(AuthorPayload::from_author)
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
        let payload = form();
        if let Err(e) = payload.validate() {
            form_error.set(Some(e.user_message("Please check the form")));
            return;
        }
        spawn(async move {
            saving.set(true);
            match console.client().save_author(target.id(), &payload).await {
                Ok(saved) => {
                    editing.set(None);
                    match saved.filter(|record| record.id != 0) {
                        Some(saved) => table.write().upsert(saved),
                        None => loader.restart(),
                    }
                    let message = match target {
                        Editing::New => "Author added successfully.",
                        Editing::Existing(_) => "Author updated successfully.",
                    };
                    console.alert(AlertLevel::Success, message);
                }
                Err(e) => console.report_failure(&e, "Failed to save the author"),
            }
            saving.set(false);
        });
    };

    let confirm_delete = move |_: ()| {
        let Some(id) = table.write().take_pending_delete() else {
            return;
        };
        spawn(async move {
            let outcome = console.client().delete_author(id).await;
            let outcome = table.write().settle_delete(id, outcome);
            match outcome {
                Ok(()) => {
                    console.alert(AlertLevel::Success, "Author deleted successfully.");
                }
                Err(e) => console.report_failure(&e, "Failed to delete the author"),
            }
        });
    };

    let body = if let Some(message) = error() {
        rsx! {
            ErrorBanner { message, on_retry: move |_| loader.restart() }
        }
    } else if loader.read().is_none() {
        rsx! {
            Loading { label: "Loading authors..." }
        }
    } else {
        let state = table.read();
        let rows: Vec<Author> = state.visible().into_iter().cloned().collect();
        rsx! {
            ResultCount { label: state.result_label() }
            table {
                class: "data-table",
                thead {
                    tr {
                        th { "Name" }
                        th { "Biography" }
                        th { "Books" }
                        th { "Actions" }
                    }
                }
                tbody {
                    if rows.is_empty() {
                        EmptyRow { colspan: 4, message: "No authors found." }
                    }
                    for author in rows {
                        tr {
                            key: "{author.id}",
                            td { strong { "{author.name}" } }
                            td { class: "cell-clip", {author.biography().unwrap_or("-").to_string()} }
                            td { "{author.book_count()}" }
                            td {
                                class: "row-actions",
                                Button {
                                    variant: ButtonVariant::Ghost,
                                    small: true,
                                    onclick: move |_| viewing.set(Some(author.id)),
                                    "View"
                                }
                                Button {
                                    variant: ButtonVariant::Outline,
                                    small: true,
                                    onclick: move |_| open_editor(Editing::Existing(author.id)),
                                    "Edit"
                                }
                                Button {
                                    variant: ButtonVariant::Danger,
                                    small: true,
                                    onclick: move |_| table.write().request_delete(author.id),
                                    "Delete"
                                }
                            }
                        }
                    }
                }
            }
        }
    };

    let pending_name = table
        .read()
        .pending_delete()
        .and_then(|id| table.read().get(id).map(|a| a.name.clone()));

    rsx! {
        PageHeader {
            title: "Manage Authors",
            actions: rsx! {
                Button { onclick: move |_| open_editor(Editing::New), "Add Author" }
            },
        }
        div {
            class: "toolbar",
            SearchBox {
                value: table.read().query().to_string(),
                placeholder: "Search authors...",
                on_search: move |q: String| table.write().set_query(q),
            }
        }
        {body}

        if let Some(target) = editing() {
            Modal {
                title: target.title("Author"),
                on_close: move |_| editing.set(None),
                form {
                    onsubmit: handle_save,
                    if let Some(message) = form_error() {
                        p { class: "form-error", "{message}" }
                    }
                    Field {
                        id: "author-name",
                        label: "Name",
                        Input {
                            id: "author-name",
                            required: true,
                            value: form.read().name.clone(),
                            oninput: move |v| form.write().name = v,
                        }
                    }
                    Field {
                        id: "author-bio",
                        label: "Biography",
                        Textarea {
                            id: "author-bio",
                            rows: 5,
                            value: form.read().biography.clone(),
                            oninput: move |v| form.write().biography = v,
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

        if let Some(author) = viewing().and_then(|id| table.read().get(id).cloned()) {
            AuthorDetailModal { author, on_close: move |_| viewing.set(None) }
        }

        if let Some(name) = pending_name {
            ConfirmDialog {
                title: "Delete author",
                message: format!("Are you sure you want to delete {name}?"),
                confirm_label: "Delete",
                danger: true,
                on_confirm: confirm_delete,
                on_cancel: move |_| table.write().cancel_delete(),
            }
        }
    }
}

#[component]
fn AuthorDetailModal(author: Author, on_close: EventHandler<()>) -> Element {
    let console = use_console();
    let id = author.id;
    let embedded = author.books.clone();

    let books = use_resource(use_reactive!(|(id,)| {
        let embedded = embedded.clone();
        async move {
            if !embedded.is_empty() {
                return Ok(embedded);
            }
            console
                .client()
                .author_books(id)
                .await
                .map_err(|e| console.load_error(&e, "Failed to load the author's books"))
        }
    }));

    rsx! {
        Modal {
            title: author.name.clone(),
            on_close,
            if let Some(bio) = author.biography() {
                p { class: "author-bio", "{bio}" }
            }
            h3 { "Books" }
            BookList { books: books.read().clone() }
        }
    }
}

/// Titles inside a detail modal.
#[component]
pub(super) fn BookList(books: Option<Result<Vec<Book>, String>>) -> Element {
    match books {
        None => rsx! {
            Loading { label: "Loading books..." }
        },
        Some(Err(message)) => rsx! {
            p { class: "form-error", "{message}" }
        },
        Some(Ok(books)) if books.is_empty() => rsx! {
            p { class: "book-meta", "No books yet." }
        },
        Some(Ok(books)) => rsx! {
            ul {
                class: "detail-books",
                for book in books {
                    li {
                        key: "{book.id}",
                        strong { "{book.title}" }
                        if let Some(year) = book.year {
                            span { class: "book-meta", " ({year})" }
                        }
                    }
                }
            }
        },
    }
}
