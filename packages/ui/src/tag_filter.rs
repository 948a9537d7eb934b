use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaChevronDown, FaFilter};
use dioxus_free_icons::Icon;
use store::ContentFilter;

use crate::saved_content::use_saved_content;

/// Search and tag selection for the saved-content grid.
///
/// Selected tags that no longer appear on any saved item are dropped, so a
/// tag removed by an edit or delete stops narrowing the grid.
pub fn use_tag_filter() -> Signal<ContentFilter> {
    let content = use_saved_content();
    let mut filter = use_signal(ContentFilter::new);

    use_effect(move || {
        let tags = content.state().collection.tags().to_vec();
        let stale = filter
            .peek()
            .selected_tags
            .iter()
            .any(|tag| !tags.contains(tag));
        if stale {
            filter.write().retain_tags(&tags);
        }
    });

    filter
}

/// Dropdown of checkboxes over every known tag.
///
/// Selection lives in the caller's `filter` signal so the dashboard can combine
/// it with the search box.
#[component]
pub fn TagFilter(tags: Vec<String>, filter: Signal<ContentFilter>) -> Element {
    let mut open = use_signal(|| false);
    let mut filter = filter;
    let selected = filter.read().selected_tags.len();

    rsx! {
        div {
            class: "tag-filter",
            button {
                class: "btn btn-outline tag-filter-toggle",
                onclick: move |_| open.set(!open()),
                Icon { width: 14, height: 14, icon: FaFilter }
                span { "Filter by Tags" }
                if selected > 0 {
                    span { class: "badge", "{selected}" }
                }
                Icon { width: 12, height: 12, icon: FaChevronDown }
            }

            if open() {
                div {
                    class: "tag-filter-menu",
                    div {
                        class: "tag-filter-header",
                        span { class: "tag-filter-title", "Select Tags" }
                        if selected > 0 {
                            button {
                                class: "link-button",
                                onclick: move |_| filter.write().clear_tags(),
                                "Clear All"
                            }
                        }
                    }

                    if tags.is_empty() {
                        p { class: "muted tag-filter-empty", "No tags yet" }
                    }

                    for tag in tags.iter().cloned() {
                        label {
                            key: "{tag}",
                            class: "tag-filter-option",
                            input {
                                r#type: "checkbox",
                                checked: filter.read().is_selected(&tag),
                                onchange: {
                                    let tag = tag.clone();
                                    move |_| filter.write().toggle_tag(&tag)
                                },
                            }
                            span { "{tag}" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use dioxus::prelude::{ReadableExt, WritableExt};

    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::test_support::*;

    fn selected(dom: &dioxus::prelude::VirtualDom, shared: &Shared) -> Vec<String> {
        let filter = filter(shared);
        dom.in_runtime(|| filter.peek().selected_tags.clone())
    }

    #[tokio::test]
    async fn test_deleting_last_tagged_item_drops_selection() {
        let server = MockServer::start().await;
        mock_list_items(
            &server,
            "A",
            vec![
                tagged_item("alice-1", &["rust"]),
                tagged_item("alice-2", &["go"]),
            ],
            Duration::ZERO,
        )
        .await;
        Mock::given(method("DELETE"))
            .and(path("/saved/alice-2"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let (mut dom, shared) = mount(&server, Some("A"));
        run_until(&mut dom, &shared, loaded_for("A")).await;

        let mut tags = filter(&shared);
        dom.in_runtime(|| tags.write().toggle_tag("go"));
        run_for(&mut dom, 5).await;
        assert_eq!(selected(&dom, &shared), vec!["go"]);

        let content = handle(&shared);
        spawn_recorded(&dom, &shared, async move { content.delete("alice-2").await });
        run_until(&mut dom, &shared, |seen| seen.outcome.is_some()).await;
        run_for(&mut dom, 5).await;

        assert!(selected(&dom, &shared).is_empty());
    }

    #[tokio::test]
    async fn test_selection_kept_while_tag_still_present() {
        let server = MockServer::start().await;
        mock_list_items(
            &server,
            "A",
            vec![
                tagged_item("alice-1", &["rust"]),
                tagged_item("alice-2", &["go", "rust"]),
            ],
            Duration::ZERO,
        )
        .await;
        Mock::given(method("DELETE"))
            .and(path("/saved/alice-2"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let (mut dom, shared) = mount(&server, Some("A"));
        run_until(&mut dom, &shared, loaded_for("A")).await;

        let mut tags = filter(&shared);
        dom.in_runtime(|| tags.write().toggle_tag("rust"));

        let content = handle(&shared);
        spawn_recorded(&dom, &shared, async move { content.delete("alice-2").await });
        run_until(&mut dom, &shared, |seen| seen.outcome.is_some()).await;
        run_for(&mut dom, 5).await;

        assert_eq!(selected(&dom, &shared), vec!["rust"]);
    }
}
