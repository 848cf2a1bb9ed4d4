//! Task Card Component
//!
//! Single task in the main list with view/edit/delete actions.

use leptos::prelude::*;

use crate::components::DeleteConfirmButton;
use crate::models::Task;

#[component]
pub fn TaskCard(
    task: Task,
    #[prop(into)] on_view: Callback<Task>,
    #[prop(into)] on_edit: Callback<Task>,
    #[prop(into)] on_delete: Callback<u32>,
) -> impl IntoView {
    let id = task.id;
    let view_target = task.clone();
    let edit_target = task.clone();

    view! {
        <div class="task-card">
            <div class="task-card-body">
                <h3 class="task-title">{task.title.clone()}</h3>
                <p class="task-description">{task.description.clone()}</p>
                <div class="task-due">{task.due_label()}</div>
            </div>
            <div class="task-card-side">
                <span class="status-badge">{task.status.label()}</span>
                <div class="task-actions">
                    <button
                        class="action-btn"
                        title="View"
                        on:click=move |_| on_view.run(view_target.clone())
                    >
                        "👁"
                    </button>
                    <button
                        class="action-btn"
                        title="Edit"
                        on:click=move |_| on_edit.run(edit_target.clone())
                    >
                        "✎"
                    </button>
                    <DeleteConfirmButton
                        button_class="action-btn"
                        on_confirm=Callback::new(move |_| on_delete.run(id))
                    />
                </div>
            </div>
        </div>
    }
}
