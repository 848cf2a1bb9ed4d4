//! Login View
//!
//! Anonymous-only page at /. Validates per keystroke, re-checks everything on
//! submit, and disables the submit button while the call is in flight.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::api::{self, LoginPayload};
use crate::guards::SIGNUP_ROUTE;
use crate::models::User;
use crate::session::use_session;
use crate::validation::{validate_field, AuthErrors, AuthFields};

#[component]
pub fn Login() -> impl IntoView {
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
        let email_valid = check_field("email", &snapshot.email);
        let password_valid = check_field("password", &snapshot.password);
        if !email_valid || !password_valid {
            return;
        }

        set_loading.set(true);
        spawn_local(async move {
            let payload = LoginPayload {
                email: snapshot.email,
                password: snapshot.password,
            };
            match api::login(&payload).await {
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
                <h1>"Welcome Back!"</h1>
                <p>
                    "Sign in to continue managing your tasks and stay productive. Your organized life awaits!"
                </p>
            </div>

            <div class="auth-panel">
                <h2 class="auth-heading">"Login to Continue"</h2>

                {move || {
                    let message = submit_error.get();
                    (!message.is_empty())
                        .then(|| view! { <div class="submit-error">{message.clone()}</div> })
                }}

                <form class="auth-form" on:submit=on_submit>
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
                            placeholder="Enter your password"
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

                    <button type="submit" class="auth-submit" disabled=move || loading.get()>
                        {move || if loading.get() { "Logging In..." } else { "Login" }}
                    </button>

                    <p class="auth-switch">
                        "Don't have an account? " <A href=SIGNUP_ROUTE>"Sign up here"</A>
                    </p>
                </form>
            </div>
        </div>
    }
}
