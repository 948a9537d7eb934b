use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaArrowUpRightFromSquare, FaImage, FaPen, FaTrash};
use dioxus_free_icons::Icon;
use store::SavedContent;

/// A single saved link in the dashboard grid.
///
/// The cover image falls back to a placeholder when it is missing or fails to
/// load. Edit and delete are only requested here; the dashboard owns the modal
/// and the confirmation.
#[component]
pub fn ContentCard(
    content: SavedContent,
    on_edit: EventHandler<SavedContent>,
    on_delete: EventHandler<String>,
) -> Element {
    // Remembered by URL, so a new cover gets its own attempt.
    let mut failed_src = use_signal(|| Option::<String>::None);

    let title = content.display_title();
    let cover = visible_cover(content.cover_image.as_deref(), failed_src.read().as_deref());
    let comment = content.comment.clone().filter(|c| !c.is_empty());
    let url = content.url.clone();
    let edit_target = content.clone();
    let delete_id = content.id.clone();

    rsx! {
        div {
            class: "card",

            div {
                class: "card-cover",
                if let Some(src) = cover {
                    img {
                        src: "{src}",
                        alt: "{title}",
                        onerror: {
                            let src = src.clone();
                            move |_| failed_src.set(Some(src.clone()))
                        },
                    }
                } else {
                    div {
                        class: "card-cover-placeholder",
                        Icon { width: 48, height: 48, icon: FaImage }
                    }
                }

                div {
                    class: "card-actions",
                    button {
                        class: "card-action",
                        title: "Edit",
                        onclick: move |_| on_edit.call(edit_target.clone()),
                        Icon { width: 14, height: 14, icon: FaPen }
                    }
                    button {
                        class: "card-action card-action-danger",
                        title: "Delete",
                        onclick: move |_| on_delete.call(delete_id.clone()),
                        Icon { width: 14, height: 14, icon: FaTrash }
                    }
                }
            }

            div {
                class: "card-body",
                h3 { class: "card-title", "{title}" }

                if let Some(comment) = comment {
                    p { class: "card-comment", "{comment}" }
                }

                if !content.tags.is_empty() {
                    div {
                        class: "tag-list",
                        for tag in content.tags.iter() {
                            span { key: "{tag}", class: "tag", "{tag}" }
                        }
                    }
                }

                a {
                    class: "card-link",
                    href: "{url}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    Icon { width: 12, height: 12, icon: FaArrowUpRightFromSquare }
                    span { "Visit Link" }
                }
            }
        }
    }
}

/// The cover worth trying: set, not blank, and not the URL that last failed.
fn visible_cover(cover: Option<&str>, failed: Option<&str>) -> Option<String> {
    cover
        .filter(|src| !src.trim().is_empty() && Some(*src) != failed)
        .map(str::to_string)
}
