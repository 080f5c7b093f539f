use api::{Category, CategoryPayload};
use dioxus::prelude::*;
use ui::components::{
    Button, ButtonVariant, ConfirmDialog, EmptyRow, ErrorBanner, Field, Input, Loading, Modal,
    PageHeader, ResultCount, SearchBox, Textarea,
};
use ui::table::TableState;
use ui::{use_console, AlertLevel};

use super::authors::BookList;
use super::Editing;

#[component]
pub fn ManageCategories() -> Element {
    let console = use_console();
    let mut table = use_signal(TableState::<Category>::default);
    let mut error = use_signal(|| Option::<String>::None);
    let mut editing = use_signal(|| Option::<Editing>::None);
    let mut form = use_signal(CategoryPayload::default);
    let mut form_error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);
    let mut viewing = use_signal(|| Option::<u64>::None);

    let mut loader = use_resource(move || async move {
        match console.client().admin_categories().await {
            Ok(categories) => {
                table.write().replace(categories);
                error.set(None);
            }
            Err(e) => error.set(Some(console.load_error(&e, "Failed to load categories"))),
        }
    });

    let mut open_editor = move |target: Editing| {
        let initial = match target {
            Editing::New => CategoryPayload::default(),
            Editing::Existing(id) => table
                .read()
                .get(id)
                .map(CategoryPayload::from_category)
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
            match console.client().save_category(target.id(), &payload).await {
                Ok(saved) => {
                    editing.set(None);
                    match saved.filter(|record| record.id != 0) {
                        Some(saved) => table.write().upsert(saved),
                        None => loader.restart(),
                    }
                    let message = match target {
                        Editing::New => "Category added successfully.",
                        Editing::Existing(_) => "Category updated successfully.",
                    };
                    console.alert(AlertLevel::Success, message);
                }
                Err(e) => console.report_failure(&e, "Failed to save the category"),
            }
            saving.set(false);
        });
    };

    let confirm_delete = move |_: ()| {
        let Some(id) = table.write().take_pending_delete() else {
            return;
        };
        spawn(async move {
            let outcome = console.client().delete_category(id).await;
            let outcome = table.write().settle_delete(id, outcome);
            match outcome {
                Ok(()) => {
                    console.alert(AlertLevel::Success, "Category deleted successfully.");
                }
                Err(e) => console.report_failure(&e, "Failed to delete the category"),
            }
        });
    };

    let body = if let Some(message) = error() {
        rsx! {
            ErrorBanner { message, on_retry: move |_| loader.restart() }
        }
    } else if loader.read().is_none() {
        rsx! {
            Loading { label: "Loading categories..." }
        }
    } else {
        let state = table.read();
        let rows: Vec<Category> = state.visible().into_iter().cloned().collect();
        rsx! {
            ResultCount { label: state.result_label() }
            table {
                class: "data-table",
                thead {
                    tr {
                        th { "" }
                        th { "Name" }
                        th { "Description" }
                        th { "Books" }
                        th { "Actions" }
                    }
                }
                tbody {
                    if rows.is_empty() {
                        EmptyRow { colspan: 5, message: "No categories found." }
                    }
                    for category in rows {
                        tr {
                            key: "{category.id}",
                            td {
                                span {
                                    class: "category-icon",
                                    style: "--accent: {category.style().color}",
                                    "{category.style().icon}"
                                }
                            }
                            td { strong { "{category.name}" } }
                            td {
                                class: "cell-clip",
                                {category.description.clone().filter(|d| !d.trim().is_empty()).unwrap_or_else(|| "-".into())}
                            }
                            td { "{category.book_count()}" }
                            td {
                                class: "row-actions",
                                Button {
                                    variant: ButtonVariant::Ghost,
                                    small: true,
                                    onclick: move |_| viewing.set(Some(category.id)),
                                    "View"
                                }
                                Button {
                                    variant: ButtonVariant::Outline,
                                    small: true,
                                    onclick: move |_| open_editor(Editing::Existing(category.id)),
                                    "Edit"
                                }
                                Button {
                                    variant: ButtonVariant::Danger,
                                    small: true,
                                    onclick: move |_| table.write().request_delete(category.id),
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
        .and_then(|id| table.read().get(id).map(|c| c.name.clone()));

    rsx! {
        PageHeader {
            title: "Manage Categories",
            actions: rsx! {
                Button { onclick: move |_| open_editor(Editing::New), "Add Category" }
            },
        }
        div {
            class: "toolbar",
            SearchBox {
                value: table.read().query().to_string(),
                placeholder: "Search categories...",
                on_search: move |q: String| table.write().set_query(q),
            }
        }
        {body}

        if let Some(target) = editing() {
            Modal {
                title: target.title("Category"),
                on_close: move |_| editing.set(None),
                form {
                    onsubmit: handle_save,
                    if let Some(message) = form_error() {
                        p { class: "form-error", "{message}" }
                    }
                    Field {
                        id: "category-name",
                        label: "Name",
                        Input {
                            id: "category-name",
                            required: true,
                            value: form.read().name.clone(),
                            oninput: move |v| form.write().name = v,
                        }
                    }
                    Field {
                        id: "category-description",
                        label: "Description",
                        Textarea {
                            id: "category-description",
                            value: form.read().description.clone(),
                            oninput: move |v| form.write().description = v,
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

        if let Some(category) = viewing().and_then(|id| table.read().get(id).cloned()) {
            CategoryDetailModal { category, on_close: move |_| viewing.set(None) }
        }

        if let Some(name) = pending_name {
            ConfirmDialog {
                title: "Delete category",
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
fn CategoryDetailModal(category: Category, on_close: EventHandler<()>) -> Element {
    let console = use_console();
    let id = category.id;
    let embedded = category.books.clone();

    let books = use_resource(use_reactive!(|(id,)| {
        let embedded = embedded.clone();
        async move {
            if !embedded.is_empty() {
                return Ok(embedded);
            }
            console
                .client()
                .category_books(id)
                .await
                .map_err(|e| console.load_error(&e, "Failed to load the category's books"))
        }
    }));

    rsx! {
        Modal {
            title: category.name.clone(),
            on_close,
            if let Some(description) = category.description.as_ref().filter(|d| !d.trim().is_empty()) {
                p { "{description}" }
            }
            h3 { "Books" }
            BookList { books: books.read().clone() }
        }
    }
}
