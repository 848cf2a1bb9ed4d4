//! Modal Component
//!
//! Centered dialog with a title bar and close button. Parents render it only
//! while open, so there is no `open` prop to track.

use leptos::prelude::*;

#[component]
pub fn Modal(
    #[prop(into)] title: String,
    #[prop(into)] on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="modal-overlay">
            <div class="modal">
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <button class="modal-close" on:click=move |_| on_close.run(())>
                        "×"
                    </button>
                </div>
                <div class="modal-body">{children()}</div>
            </div>
        </div>
    }
}
