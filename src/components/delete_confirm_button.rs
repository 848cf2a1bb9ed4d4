//! Delete Confirm Button Component
//!
//! Inline delete confirmation: a × button that swaps to "Delete?" with
//! confirm/cancel actions instead of deleting on the first click.

use leptos::prelude::*;

#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (armed, set_armed) = signal(false);

    move || {
        if armed.get() {
            view! {
                <span class="delete-confirm">
                    <span class="delete-confirm-text">"Delete?"</span>
                    <button
                        class="confirm-btn"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            on_confirm.run(());
                        }
                    >
                        "✓"
                    </button>
                    <button
                        class="cancel-btn"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            set_armed.set(false);
                        }
                    >
                        "✗"
                    </button>
                </span>
            }
            .into_any()
        } else {
            view! {
                <button
                    class=button_class.clone()
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_armed.set(true);
                    }
                >
                    "×"
                </button>
            }
            .into_any()
        }
    }
}
