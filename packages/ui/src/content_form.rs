//! Add / edit modal for a saved link.

use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaXmark;
use dioxus_free_icons::Icon;
use store::{ContentDraft, SavedContent};

use crate::components::{Button, ButtonVariant, Input, Label, Textarea};
use crate::saved_content::use_saved_content;
use crate::views::ModalOverlay;

/// Modal form for creating a link, or editing `editing` when set.
///
/// Validation happens before any request is sent. On success the shared
/// collection is already updated and `on_close` fires; on failure the modal
/// stays open with an error.
#[component]
pub fn ContentForm(
    #[props(!optional)] editing: Option<SavedContent>,
    on_close: EventHandler<()>,
) -> Element {
    let content = use_saved_content();
    let existing_tags = content.state().collection.tags().to_vec();

    let original = editing.clone();
    let mut draft = use_signal(move || {
        original
            .as_ref()
            .map(ContentDraft::from_content)
            .unwrap_or_default()
    });
    let mut new_tag = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let is_edit = editing.is_some();
    let heading = if is_edit { "Edit Content" } else { "Add New Content" };

    let mut add_new_tag = move || {
        let tag = new_tag();
        if draft.write().add_tag(&tag) || tag.trim().is_empty() {
            new_tag.set(String::new());
        }
    };

    let handle_submit = {
        let content = content.clone();
        let editing = editing.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let content = content.clone();
            let editing = editing.clone();
            spawn(async move {
                error.set(None);
                let current = draft();

                let result = match editing.as_ref() {
                    Some(original) => match current.patch_against(original) {
                        Ok(patch) => {
                            saving.set(true);
                            content.update(&original.id, patch).await
                        }
                        Err(e) => {
                            error.set(Some(e.to_string()));
                            return;
                        }
                    },
                    None => match current.validate() {
                        Ok(new_content) => {
                            saving.set(true);
                            content.save(new_content).await
                        }
                        Err(e) => {
                            error.set(Some(e.to_string()));
                            return;
                        }
                    },
                };

                saving.set(false);
                match result {
                    Ok(()) => on_close.call(()),
                    Err(e) => {
                        tracing::error!("Error saving content: {}", e);
                        error.set(Some("Failed to save content".to_string()));
                    }
                }
            });
        }
    };

    let unused_tags: Vec<String> = existing_tags
        .into_iter()
        .filter(|tag| !draft.read().has_tag(tag))
        .collect();

    rsx! {
        ModalOverlay {
            on_close: move |_| on_close.call(()),
            div {
                class: "modal-header",
                h2 { class: "modal-title", "{heading}" }
                button {
                    class: "icon-button",
                    title: "Close",
                    onclick: move |_| on_close.call(()),
                    Icon { width: 16, height: 16, icon: FaXmark }
                }
            }

            form {
                class: "form-stack modal-body",
                onsubmit: handle_submit,

                div {
                    Label { html_for: "content-url", "URL *" }
                    Input {
                        id: "content-url",
                        r#type: "url",
                        placeholder: "https://example.com",
                        value: draft.read().url.clone(),
                        required: true,
                        oninput: move |evt: FormEvent| draft.write().url = evt.value(),
                    }
                }

                div {
                    Label { html_for: "content-comment", "Comment" }
                    Textarea {
                        id: "content-comment",
                        placeholder: "Add a note about this link...",
                        rows: 3,
                        value: draft.read().comment.clone(),
                        oninput: move |evt: FormEvent| draft.write().comment = evt.value(),
                    }
                }

                div {
                    Label { html_for: "content-cover", "Cover Image URL" }
                    Input {
                        id: "content-cover",
                        r#type: "url",
                        placeholder: "https://example.com/image.jpg",
                        value: draft.read().cover_image.clone(),
                        oninput: move |evt: FormEvent| draft.write().cover_image = evt.value(),
                    }
                }

                if is_edit {
                    div {
                        Label { html_for: "content-title", "Title" }
                        Input {
                            id: "content-title",
                            placeholder: "Optional title",
                            value: draft.read().title.clone(),
                            oninput: move |evt: FormEvent| draft.write().title = evt.value(),
                        }
                    }
                }

                div {
                    Label { html_for: "content-new-tag", "Tags" }

                    if !unused_tags.is_empty() {
                        div {
                            class: "tag-list tag-suggestions",
                            for tag in unused_tags.iter().cloned() {
                                button {
                                    key: "{tag}",
                                    r#type: "button",
                                    class: "tag tag-suggestion",
                                    onclick: {
                                        let tag = tag.clone();
                                        move |_| {
                                            draft.write().add_tag(&tag);
                                        }
                                    },
                                    "+ {tag}"
                                }
                            }
                        }
                    }

                    div {
                        class: "tag-input-row",
                        Input {
                            id: "content-new-tag",
                            placeholder: "Add a new tag",
                            value: new_tag(),
                            oninput: move |evt: FormEvent| new_tag.set(evt.value()),
                            onkeydown: move |evt: KeyboardEvent| {
                                if evt.key() == Key::Enter {
                                    evt.prevent_default();
                                    add_new_tag();
                                }
                            },
                        }
                        Button {
                            variant: ButtonVariant::Secondary,
                            onclick: move |_| add_new_tag(),
                            "Add"
                        }
                    }

                    if !draft.read().tags.is_empty() {
                        div {
                            class: "tag-list",
                            for tag in draft.read().tags.iter().cloned() {
                                span {
                                    key: "{tag}",
                                    class: "tag tag-selected",
                                    "{tag}"
                                    button {
                                        r#type: "button",
                                        class: "tag-remove",
                                        title: "Remove tag",
                                        onclick: {
                                            let tag = tag.clone();
                                            move |_| draft.write().remove_tag(&tag)
                                        },
                                        Icon { width: 10, height: 10, icon: FaXmark }
                                    }
                                }
                            }
                        }
                    }
                }

                if let Some(err) = error() {
                    div { class: "form-error", "{err}" }
                }

                div {
                    class: "modal-footer",
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        r#type: "submit",
                        disabled: saving(),
                        if saving() { "Saving..." } else { "Save Content" }
                    }
                }
            }
        }
    }
}
