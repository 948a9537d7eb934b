use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaMagnifyingGlass, FaPlus, FaRotateRight};
use dioxus_free_icons::Icon;
use store::SavedContent;

use super::{use_delete_confirmation, ConfirmDialog, LoadingScreen};
use crate::components::{Button, ButtonVariant, Input};
use crate::content_card::ContentCard;
use crate::content_form::ContentForm;
use crate::navbar::Navbar;
use crate::saved_content::use_saved_content;
use crate::tag_filter::{use_tag_filter, TagFilter};

/// Which modal, if any, is open over the dashboard.
#[derive(Clone, Debug, PartialEq)]
enum Modal {
    Add,
    Edit(SavedContent),
}

/// The signed-in landing page: navbar, controls and the card grid.
///
/// Must be rendered inside a `SavedContentProvider`.
#[component]
pub fn DashboardView() -> Element {
    let content = use_saved_content();
    let state = content.state();
    let mut filter = use_tag_filter();
    let mut modal = use_signal(|| Option::<Modal>::None);
    let pending_delete = use_delete_confirmation();

    if state.loading {
        return rsx! {
            LoadingScreen { message: "Loading your content..." }
        };
    }

    let total = state.collection.len();
    let tags = state.collection.tags().to_vec();
    let visible: Vec<SavedContent> = state
        .collection
        .filtered(&filter.read())
        .into_iter()
        .cloned()
        .collect();
    let plural = if total == 1 { "" } else { "s" };

    let confirm_delete = {
        let content = content.clone();
        move |_: ()| {
            spawn(pending_delete.confirm(content.clone()));
        }
    };

    let refresh = {
        let content = content.clone();
        move |_: MouseEvent| {
            let content = content.clone();
            spawn(async move {
                if let Err(e) = content.refresh().await {
                    tracing::error!("Error refreshing content: {}", e);
                }
            });
        }
    };

    rsx! {
        div {
            class: "app-shell",
            Navbar {}

            main {
                class: "dashboard",

                div {
                    class: "dashboard-header",
                    div {
                        h2 { class: "dashboard-title", "Your Collection" }
                        p { class: "muted", "{total} item{plural} saved" }
                    }
                    div {
                        class: "dashboard-actions",
                        Button {
                            variant: ButtonVariant::Outline,
                            title: "Refresh",
                            onclick: refresh,
                            Icon { width: 14, height: 14, icon: FaRotateRight }
                        }
                        Button {
                            variant: ButtonVariant::Primary,
                            onclick: move |_| modal.set(Some(Modal::Add)),
                            Icon { width: 14, height: 14, icon: FaPlus }
                            span { "Add Content" }
                        }
                    }
                }

                div {
                    class: "dashboard-controls",
                    div {
                        class: "search-box",
                        span {
                            class: "search-icon",
                            Icon { width: 14, height: 14, icon: FaMagnifyingGlass }
                        }
                        Input {
                            class: "search-input",
                            placeholder: "Search content...",
                            value: filter.read().query.clone(),
                            oninput: move |evt: FormEvent| filter.write().query = evt.value(),
                        }
                    }
                    TagFilter { tags: tags, filter: filter }
                }

                if total == 0 {
                    div {
                        class: "empty-state",
                        h3 { "No content yet" }
                        p { class: "muted", "Start building your collection by adding your first link" }
                        Button {
                            variant: ButtonVariant::Primary,
                            onclick: move |_| modal.set(Some(Modal::Add)),
                            "Add Your First Link"
                        }
                    }
                } else if visible.is_empty() {
                    div {
                        class: "empty-state",
                        h3 { "No matching content" }
                        p { class: "muted", "Try adjusting your search or filter criteria" }
                    }
                } else {
                    div {
                        class: "card-grid",
                        for item in visible {
                            ContentCard {
                                key: "{item.id}",
                                content: item.clone(),
                                on_edit: move |item: SavedContent| modal.set(Some(Modal::Edit(item))),
                                on_delete: move |id: String| pending_delete.request(id),
                            }
                        }
                    }
                }
            }

            {
                match modal() {
                    Some(Modal::Add) => rsx! {
                        ContentForm {
                            editing: None,
                            on_close: move |_| modal.set(None),
                        }
                    },
                    Some(Modal::Edit(item)) => rsx! {
                        ContentForm {
                            key: "{item.id}",
                            editing: Some(item.clone()),
                            on_close: move |_| modal.set(None),
                        }
                    },
                    None => rsx! {},
                }
            }

            if pending_delete.target().is_some() {
                ConfirmDialog {
                    message: "Are you sure you want to delete this content?",
                    error: pending_delete.error(),
                    busy: pending_delete.busy(),
                    on_confirm: confirm_delete,
                    on_cancel: move |_| pending_delete.cancel(),
                }
            }
        }
    }
}
