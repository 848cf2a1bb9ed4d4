//! Signup View
//!
//! Anonymous-only page at /signup. Same validation flow as Login plus the
//! username and confirm-password rules; the confirm value never leaves the
//! browser.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::api::{self, SignupPayload};
use crate::guards::ROOT_ROUTE;
use crate::models::User;
use crate::session::use_session;
use crate::validation::{validate_field, AuthErrors, AuthFields};

#[component]
pub fn Signup() -> impl IntoView {
    let session = use_session();
    let (form, set_form) = signal(AuthFields::default());
    let (errors, set_errors) = signal(AuthErrors::default());
    let (loading, set_loading) = signal(false);
    let (submit_error, set_submit_error) = signal(String::new());

    let check_field = move |name: &'static str, value: &str| {
        let message = validate_field(name, value, &form.get_untracked());
        let valid = message.is_empty();
        set_errors.update(|e| e.set(name, message));
        valid
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_submit_error.set(String::new());

        let snapshot = form.get_untracked();
        let username_valid = check_field("username", &snapshot.username);
        let email_valid = check_field("email", &snapshot.email);
        let password_valid = check_field("password", &snapshot.password);
        let confirm_valid = check_field("confirm_password", &snapshot.confirm_password);
        if !username_valid || !email_valid || !password_valid || !confirm_valid {
            return;
        }

        set_loading.set(true);
        spawn_local(async move {
            let payload = SignupPayload {
                username: snapshot.username,
                email: snapshot.email,
                password: snapshot.password,
            };
            match api::signup(&payload).await {
                Ok(data) => {
                    // RequireAnonymous redirects to /home once the session lands
                    session.sign_in(User {
                        user: "User".to_string(),
                        user_id: data.user_id,
                    });
                }
                Err(err) => set_submit_error.set(err.to_string()),
            }
            set_loading.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-slogan">
                <h1>"Organize Your Work"</h1>
                <p>
                    "Create an account and start managing your tasks efficiently. Join thousands of productive users today!"
                </p>
            </div>

            <div class="auth-panel">
                <h2 class="auth-heading">"Create Account"</h2>

                {move || {
                    let message = submit_error.get();
                    (!message.is_empty())
                        .then(|| view! { <div class="submit-error">{message.clone()}</div> })
                }}

                <form class="auth-form" on:submit=on_submit>
                    <div class="form-field">
                        <label>"Username"</label>
                        <input
                            type="text"
                            placeholder="Enter your username"
                            class:invalid=move || !errors.get().username.is_empty()
                            prop:value=move || form.get().username
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                set_form.update(|f| f.username = value.clone());
                                check_field("username", &value);
                            }
                        />
                        {move || {
                            let message = errors.get().username;
                            (!message.is_empty())
                                .then(|| view! { <p class="field-error">{message.clone()}</p> })
                        }}
                    </div>

                    <div class="form-field">
                        <label>"Email"</label>
                        <input
                            type="email"
                            placeholder="Enter your email"
                            class:invalid=move || !errors.get().email.is_empty()
                            prop:value=move || form.get().email
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                set_form.update(|f| f.email = value.clone());
                                check_field("email", &value);
                            }
                        />
                        {move || {
                            let message = errors.get().email;
                            (!message.is_empty())
                                .then(|| view! { <p class="field-error">{message.clone()}</p> })
                        }}
                    </div>

                    <div class="form-field">
                        <label>"Password"</label>
                        <input
                            type="password"
                            placeholder="Create password"
                            class:invalid=move || !errors.get().password.is_empty()
                            prop:value=move || form.get().password
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                set_form.update(|f| f.password = value.clone());
                                check_field("password", &value);
                            }
                        />
                        {move || {
                            let message = errors.get().password;
                            (!message.is_empty())
                                .then(|| view! { <p class="field-error">{message.clone()}</p> })
                        }}
                    </div>

                    <div class="form-field">
                        <label>"Confirm Password"</label>
                        <input
                            type="password"
                            placeholder="Confirm password"
                            class:invalid=move || !errors.get().confirm_password.is_empty()
                            prop:value=move || form.get().confirm_password
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                set_form.update(|f| f.confirm_password = value.clone());
                                check_field("confirm_password", &value);
                            }
                        />
                        {move || {
                            let message = errors.get().confirm_password;
                            (!message.is_empty())
                                .then(|| view! { <p class="field-error">{message.clone()}</p> })
                        }}
                    </div>

                    <button type="submit" class="auth-submit" disabled=move || loading.get()>
                        {move || if loading.get() { "Creating Account..." } else { "Sign Up" }}
                    </button>

                    <p class="auth-switch">
                        "Already have an account? " <A href=ROOT_ROUTE>"Log in here"</A>
                    </p>
                </form>
            </div>
        </div>
    }
}
