use dioxus::prelude::*;

use super::ModalOverlay;
use crate::components::{Button, ButtonVariant};
use crate::saved_content::SavedContentHandle;

/// An item waiting for delete confirmation, plus the state of the request.
///
/// A failed delete keeps the item pending and records a message, so the
/// dialog stays open for a retry or a cancel.
#[derive(Clone, Copy, PartialEq)]
pub struct DeleteConfirmation {
    target: Signal<Option<String>>,
    busy: Signal<bool>,
    error: Signal<Option<String>>,
}

pub fn use_delete_confirmation() -> DeleteConfirmation {
    DeleteConfirmation {
        target: use_signal(|| None),
        busy: use_signal(|| false),
        error: use_signal(|| None),
    }
}

impl DeleteConfirmation {
    pub fn target(&self) -> Option<String> {
        self.target.cloned()
    }

    pub fn busy(&self) -> bool {
        *self.busy.read()
    }

    pub fn error(&self) -> Option<String> {
        self.error.cloned()
    }

    pub fn request(mut self, id: String) {
        self.error.set(None);
        self.target.set(Some(id));
    }

    pub fn cancel(mut self) {
        self.error.set(None);
        self.target.set(None);
    }

    /// Delete the pending item. Closes on success.
    pub async fn confirm(mut self, content: SavedContentHandle) {
        let Some(id) = (*self.target.peek()).clone() else {
            return;
        };
        self.busy.set(true);
        self.error.set(None);
        match content.delete(&id).await {
            Ok(()) => self.target.set(None),
            Err(e) => {
                tracing::error!("Error deleting content: {}", e);
                self.error.set(Some("Failed to delete content".to_string()));
            }
        }
        self.busy.set(false);
    }
}

/// Yes/no confirmation shown over the current view.
///
/// `error` is shown under the message, so a failed action can be retried or
/// cancelled without losing the dialog.
#[component]
pub fn ConfirmDialog(
    message: String,
    #[props(!optional)] error: Option<String>,
    #[props(default = "Delete".to_string())] confirm_label: String,
    #[props(default)] busy: bool,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        ModalOverlay {
            on_close: move |_| on_cancel.call(()),
            class: "modal-card-small",
            div {
                class: "modal-body",
                p { class: "confirm-message", "{message}" }
                if let Some(err) = error {
                    div { class: "form-error", "{err}" }
                }
            }
            div {
                class: "modal-footer",
                Button {
                    variant: ButtonVariant::Outline,
                    disabled: busy,
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
                Button {
                    variant: ButtonVariant::Danger,
                    disabled: busy,
                    onclick: move |_| on_confirm.call(()),
                    "{confirm_label}"
                }
            }
        }
    }
}
