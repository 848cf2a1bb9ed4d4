//! TaskDeck App
//!
//! Root component: restores the persisted session, provides the session
//! context, and wires the guarded routes.

use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::components::{Login, RequireAnonymous, RequireAuth, Signup, TaskManager};
use crate::guards::ROOT_ROUTE;
use crate::session::{self, SessionContext};

#[component]
pub fn App() -> impl IntoView {
    let session = SessionContext::new(session::load_stored_user());
    provide_context(session);

    view! {
        <Router>
            <Routes fallback=|| view! { <Redirect path=ROOT_ROUTE/> }>
                <Route
                    path=path!("/")
                    view=|| view! { <RequireAnonymous><Login/></RequireAnonymous> }
                />
                <Route
                    path=path!("/signup")
                    view=|| view! { <RequireAnonymous><Signup/></RequireAnonymous> }
                />
                <Route
                    path=path!("/home")
                    view=|| view! { <RequireAuth><TaskManager/></RequireAuth> }
                />
            </Routes>
        </Router>
    }
}
