//! Route Guard Components
//!
//! Wrappers evaluating the guard predicates reactively on every navigation:
//! render children when allowed, otherwise issue a redirect.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::guards::{self, GuardDecision};
use crate::session::use_session;

/// Renders children only for authenticated users; redirects to /signup otherwise
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    move || match guards::require_authenticated(session.user.read().as_ref()) {
        GuardDecision::Allow => children(),
        GuardDecision::Redirect(path) => view! { <Redirect path=path/> }.into_any(),
    }
}

/// Renders children only for anonymous visitors; redirects to /home otherwise
#[component]
pub fn RequireAnonymous(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    move || match guards::require_anonymous(session.user.read().as_ref()) {
        GuardDecision::Allow => children(),
        GuardDecision::Redirect(path) => view! { <Redirect path=path/> }.into_any(),
    }
}
