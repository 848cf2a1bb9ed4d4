//! Navbar Component
//!
//! Fixed top bar with the app title, a logout button, and a collapsible menu
//! for narrow screens.

use leptos::prelude::*;

#[component]
pub fn Navbar(#[prop(into)] on_logout: Callback<()>) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    view! {
        <nav class="navbar">
            <div class="navbar-row">
                <h1 class="navbar-title">"Task Manager"</h1>
                <button
                    class="menu-toggle"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "×" } else { "☰" }}
                </button>
                <button class="logout-btn" on:click=move |_| on_logout.run(())>
                    "Logout"
                </button>
            </div>
            <Show when=move || menu_open.get()>
                <div class="navbar-menu">
                    <button class="logout-btn" on:click=move |_| on_logout.run(())>
                        "Logout"
                    </button>
                </div>
            </Show>
        </nav>
    }
}
