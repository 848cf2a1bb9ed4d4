//! Upcoming Panel Component
//!
//! Tasks due within the next 7 days, shown in a fixed side panel on wide
//! screens and inside a modal on narrow ones.

use leptos::prelude::*;

use crate::models::Task;

/// Side-panel wrapper with heading
#[component]
pub fn UpcomingPanel(#[prop(into)] upcoming: Signal<Vec<Task>>) -> impl IntoView {
    view! {
        <aside class="upcoming-panel">
            <h2 class="upcoming-heading">"Upcoming Tasks"</h2>
            <UpcomingList upcoming=upcoming/>
        </aside>
    }
}

/// Bare list of upcoming tasks, reused by the panel and the mobile modal
#[component]
pub fn UpcomingList(#[prop(into)] upcoming: Signal<Vec<Task>>) -> impl IntoView {
    view! {
        <Show
            when=move || !upcoming.get().is_empty()
            fallback=|| view! { <p class="upcoming-empty">"No upcoming tasks"</p> }
        >
            <div class="upcoming-list">
                <For
                    each=move || upcoming.get()
                    key=|task| task.clone()
                    children=move |task| {
                        let due = task.due_label();
                        view! {
                            <div class="upcoming-card">
                                <h4 class="upcoming-title">{task.title.clone()}</h4>
                                <p class="upcoming-due">{due}</p>
                            </div>
                        }
                    }
                />
            </div>
        </Show>
    }
}
