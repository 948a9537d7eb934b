//! VirtualDom harness for the saved-content hooks, driven against a wiremock
//! server.

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;
use std::time::Duration;

use api::{ApiClient, ApiError};
use dioxus::dioxus_core::NoOpMutations;
use dioxus::prelude::*;
use serde_json::json;
use store::{ContentFilter, MemoryTokenStore, Session, UserInfo};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::auth::{use_auth, AuthState};
use crate::client::ClientContext;
use crate::saved_content::{use_saved_content, SavedContentHandle, SavedContentProvider};
use crate::tag_filter::use_tag_filter;
use crate::views::{use_delete_confirmation, DeleteConfirmation};

/// What the harness saw, shared between the test body and the dom.
#[derive(Default)]
pub(crate) struct Seen {
    pub handle: Option<SavedContentHandle>,
    pub auth: Option<Signal<AuthState>>,
    pub filter: Option<Signal<ContentFilter>>,
    pub delete: Option<DeleteConfirmation>,
    /// `(token, loading, item ids)` for every render of the dashboard stand-in.
    pub renders: Vec<(Option<String>, bool, Vec<String>)>,
    pub outcome: Option<Result<(), String>>,
}

#[derive(Clone, Default)]
pub(crate) struct Shared(pub Rc<RefCell<Seen>>);

impl PartialEq for Shared {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[derive(Props, Clone, PartialEq)]
pub(crate) struct HarnessProps {
    base_url: String,
    token: Option<String>,
    shared: Shared,
}

#[allow(non_snake_case)]
fn Harness(props: HarnessProps) -> Element {
    let base_url = props.base_url.clone();
    use_context_provider(move || {
        ClientContext::new(
            ApiClient::new(&base_url).expect("mock server url"),
            MemoryTokenStore::new(),
        )
    });
    let token = props.token.clone();
    use_context_provider(move || {
        let session = match token {
            Some(token) => Session::signed_in(user("alice"), token),
            None => Session::signed_out(),
        };
        Signal::new(AuthState::settled(session))
    });

    rsx! {
        SavedContentProvider {
            Recorder { shared: props.shared.clone() }
        }
    }
}

#[component]
fn Recorder(shared: Shared) -> Element {
    let content = use_saved_content();
    let auth = use_auth();
    let filter = use_tag_filter();
    let delete = use_delete_confirmation();
    let state = content.state();
    let token = auth.read().session.token.clone();

    let mut seen = shared.0.borrow_mut();
    if seen.handle.is_none() {
        seen.handle = Some(content.clone());
    }
    if seen.auth.is_none() {
        seen.auth = Some(auth);
    }
    if seen.filter.is_none() {
        seen.filter = Some(filter);
    }
    if seen.delete.is_none() {
        seen.delete = Some(delete);
    }
    seen.renders.push((
        token,
        state.loading,
        state.collection.items().iter().map(|c| c.id.clone()).collect(),
    ));

    rsx! {}
}

pub(crate) fn user(name: &str) -> UserInfo {
    UserInfo {
        id: format!("{name}-id"),
        username: name.to_string(),
        email: format!("{name}@example.com"),
    }
}

pub(crate) fn item(id: &str) -> serde_json::Value {
    tagged_item(id, &[])
}

pub(crate) fn tagged_item(id: &str, tags: &[&str]) -> serde_json::Value {
    json!({
        "id": id,
        "url": format!("https://example.com/{id}"),
        "tags": tags,
        "createdAt": "2024-01-01T00:00:00Z"
    })
}

pub(crate) async fn mock_list(server: &MockServer, token: &str, ids: &[&str], delay: Duration) {
    let items: Vec<_> = ids.iter().map(|id| item(id)).collect();
    mock_list_items(server, token, items, delay).await;
}

pub(crate) async fn mock_list_items(
    server: &MockServer,
    token: &str,
    items: Vec<serde_json::Value>,
    delay: Duration,
) {
    Mock::given(method("GET"))
        .and(path("/saved"))
        .and(header("authorization", format!("Bearer {token}").as_str()))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "content": items }))
                .set_delay(delay),
        )
        .mount(server)
        .await;
}

pub(crate) async fn mock_list_failure(server: &MockServer, token: &str) {
    Mock::given(method("GET"))
        .and(path("/saved"))
        .and(header("authorization", format!("Bearer {token}").as_str()))
        .respond_with(ResponseTemplate::new(500))
        .mount(server)
        .await;
}

pub(crate) fn mount(server: &MockServer, token: Option<&str>) -> (VirtualDom, Shared) {
    let shared = Shared::default();
    let mut dom = VirtualDom::new_with_props(
        Harness,
        HarnessProps {
            base_url: server.uri(),
            token: token.map(str::to_string),
            shared: shared.clone(),
        },
    );
    dom.rebuild_in_place();
    (dom, shared)
}

async fn step(dom: &mut VirtualDom) {
    let _ = tokio::time::timeout(Duration::from_millis(10), dom.wait_for_work()).await;
    dom.render_immediate(&mut NoOpMutations);
}

/// Drive the dom for `ticks` rounds regardless of what happens.
pub(crate) async fn run_for(dom: &mut VirtualDom, ticks: usize) {
    for _ in 0..ticks {
        step(dom).await;
    }
}

/// Drive the dom until `done` holds or two seconds pass.
pub(crate) async fn run_until(dom: &mut VirtualDom, shared: &Shared, done: impl Fn(&Seen) -> bool) {
    for _ in 0..200 {
        if done(&shared.0.borrow()) {
            return;
        }
        step(dom).await;
    }
    panic!("dom did not settle");
}

/// Drive the dom until the mock server has seen a `verb` request sent
/// with `token`.
pub(crate) async fn run_until_request(
    dom: &mut VirtualDom,
    server: &MockServer,
    verb: &str,
    token: &str,
) {
    let bearer = format!("Bearer {token}");
    for _ in 0..200 {
        let requests = server.received_requests().await.unwrap_or_default();
        let sent = requests.iter().any(|r| {
            r.method.as_str() == verb
                && r.headers
                    .get("authorization")
                    .and_then(|v| v.to_str().ok())
                    == Some(bearer.as_str())
        });
        if sent {
            return;
        }
        step(dom).await;
    }
    panic!("{verb} request with token {token} never reached the server");
}

pub(crate) fn latest(seen: &Seen) -> (Option<String>, bool, Vec<String>) {
    seen.renders.last().cloned().expect("rendered at least once")
}

pub(crate) fn loaded_for(token: &'static str) -> impl Fn(&Seen) -> bool {
    move |seen| {
        let (current, loading, _) = latest(seen);
        current.as_deref() == Some(token) && !loading
    }
}

pub(crate) fn switch_session(dom: &VirtualDom, shared: &Shared, session: Session) {
    let mut auth = shared.0.borrow().auth.expect("auth recorded");
    dom.in_runtime(|| auth.set(AuthState::settled(session)));
}

pub(crate) fn handle(shared: &Shared) -> SavedContentHandle {
    shared.0.borrow().handle.clone().expect("handle recorded")
}

pub(crate) fn filter(shared: &Shared) -> Signal<ContentFilter> {
    shared.0.borrow().filter.expect("filter recorded")
}

/// Run `task` on the dom's runtime and record its result in `Seen::outcome`.
pub(crate) fn spawn_recorded<F>(dom: &VirtualDom, shared: &Shared, task: F)
where
    F: Future<Output = Result<(), ApiError>> + 'static,
{
    let shared = shared.clone();
    dom.in_scope(ScopeId::ROOT, || {
        spawn(async move {
            let outcome = task.await.map_err(|e| e.to_string());
            shared.0.borrow_mut().outcome = Some(outcome);
        });
    });
}

/// Ids in the list as the current session sees it.
pub(crate) fn items_now(dom: &VirtualDom, shared: &Shared) -> Vec<String> {
    let handle = handle(shared);
    dom.in_runtime(|| {
        handle
            .state()
            .collection
            .items()
            .iter()
            .map(|c| c.id.clone())
            .collect()
    })
}
