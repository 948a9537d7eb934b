//! Sign-in / sign-up form.

use dioxus::prelude::*;

use crate::auth::{use_auth, AuthState};
use crate::client::use_client;
use crate::components::{Button, ButtonVariant, Input, Label};

/// Combined login and registration form.
///
/// On success the shared [`AuthState`] is updated; the surrounding route decides
/// where to go next. Any failure shows a single generic message.
#[component]
pub fn AuthForm() -> Element {
    let mut auth = use_auth();
    let ctx = use_client();
    let mut is_login = use_signal(|| true);
    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let ctx = ctx.clone();
        spawn(async move {
            error.set(None);
            loading.set(true);

            let login = is_login();
            let result = if login {
                api::session::login(&ctx.client, ctx.tokens(), &email(), &password()).await
            } else {
                api::session::register(&ctx.client, ctx.tokens(), &username(), &email(), &password())
                    .await
            };

            match result {
                Ok(session) => {
                    auth.set(AuthState::settled(session));
                }
                Err(e) => {
                    tracing::warn!("Authentication failed: {}", e);
                    loading.set(false);
                    error.set(Some(
                        if login {
                            "Invalid credentials"
                        } else {
                            "Registration failed"
                        }
                        .to_string(),
                    ));
                }
            }
        });
    };

    let (heading, subheading, submit_label, toggle_label) = if is_login() {
        (
            "Welcome Back",
            "Sign in to your account",
            "Sign In",
            "Don't have an account? Sign up",
        )
    } else {
        (
            "Create Account",
            "Join our community",
            "Create Account",
            "Already have an account? Sign in",
        )
    };

    rsx! {
        div {
            class: "screen-center",
            div {
                class: "auth-card",
                div {
                    class: "auth-header",
                    h2 { class: "auth-title", "{heading}" }
                    p { class: "muted", "{subheading}" }
                }

                form {
                    onsubmit: handle_submit,
                    class: "form-stack",

                    if !is_login() {
                        div {
                            Label { html_for: "auth-username", "Username" }
                            Input {
                                id: "auth-username",
                                name: "username",
                                placeholder: "Enter your username",
                                value: username(),
                                required: true,
                                oninput: move |evt: FormEvent| username.set(evt.value()),
                            }
                        }
                    }

                    div {
                        Label { html_for: "auth-email", "Email" }
                        Input {
                            id: "auth-email",
                            r#type: "email",
                            name: "email",
                            placeholder: "Enter your email",
                            value: email(),
                            required: true,
                            oninput: move |evt: FormEvent| email.set(evt.value()),
                        }
                    }

                    div {
                        Label { html_for: "auth-password", "Password" }
                        Input {
                            id: "auth-password",
                            r#type: "password",
                            name: "password",
                            placeholder: "Enter your password",
                            value: password(),
                            required: true,
                            oninput: move |evt: FormEvent| password.set(evt.value()),
                        }
                    }

                    if let Some(err) = error() {
                        div { class: "form-error", "{err}" }
                    }

                    Button {
                        variant: ButtonVariant::Primary,
                        class: "w-full",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Loading..." } else { "{submit_label}" }
                    }
                }

                div {
                    class: "auth-toggle",
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| {
                            error.set(None);
                            is_login.set(!is_login());
                        },
                        "{toggle_label}"
                    }
                }
            }
        }
    }
}
