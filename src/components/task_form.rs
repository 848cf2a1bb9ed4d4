//! Task Form Component
//!
//! Modal body for creating or editing a task, with submit-time validation and
//! inline field errors.

use leptos::prelude::*;

use crate::models::{Task, TaskStatus};
use crate::tasks::TaskDraft;
use crate::validation::{self, TaskFormErrors};

/// What the form is editing: a fresh draft or an existing task
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormTarget {
    New,
    Edit(Task),
}

impl FormTarget {
    pub fn modal_title(&self) -> &'static str {
        match self {
            FormTarget::New => "Add New Task",
            FormTarget::Edit(_) => "Edit Task",
        }
    }
}

#[component]
pub fn TaskForm(
    target: FormTarget,
    #[prop(into)] on_save: Callback<TaskDraft>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let editing = matches!(target, FormTarget::Edit(_));
    let (initial_title, initial_description, initial_due, initial_status) = match &target {
        FormTarget::Edit(task) => (
            task.title.clone(),
            task.description.clone(),
            task.due_date.format("%Y-%m-%d").to_string(),
            task.status,
        ),
        FormTarget::New => (String::new(), String::new(), String::new(), TaskStatus::Pending),
    };

    let (title, set_title) = signal(initial_title);
    let (description, set_description) = signal(initial_description);
    let (due_date, set_due_date) = signal(initial_due);
    let (status, set_status) = signal(initial_status);
    let (errors, set_errors) = signal(TaskFormErrors::default());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let checked = validation::validate_task_form(
            &title.get_untracked(),
            &description.get_untracked(),
            &due_date.get_untracked(),
        );
        if !checked.is_clear() {
            set_errors.set(checked);
            return;
        }
        let Some(due) = validation::parse_due_date(&due_date.get_untracked()) else {
            return;
        };
        set_errors.set(TaskFormErrors::default());
        on_save.run(TaskDraft {
            title: title.get_untracked(),
            description: description.get_untracked(),
            due_date: due,
            status: status.get_untracked(),
        });
    };

    view! {
        <form class="task-form" on:submit=on_submit>
            <div class="form-field">
                <input
                    type="text"
                    placeholder="Task Title"
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                />
                {move || {
                    let message = errors.get().title;
                    (!message.is_empty()).then(|| view! { <p class="field-error">{message.clone()}</p> })
                }}
            </div>

            <div class="form-field">
                <textarea
                    placeholder="Description"
                    rows="4"
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                ></textarea>
                {move || {
                    let message = errors.get().description;
                    (!message.is_empty()).then(|| view! { <p class="field-error">{message.clone()}</p> })
                }}
            </div>

            <div class="form-field">
                <input
                    type="date"
                    prop:value=move || due_date.get()
                    on:input=move |ev| set_due_date.set(event_target_value(&ev))
                />
                {move || {
                    let message = errors.get().due_date;
                    (!message.is_empty()).then(|| view! { <p class="field-error">{message.clone()}</p> })
                }}
            </div>

            <select
                class="status-select"
                prop:value=move || status.get().as_str()
                on:change=move |ev| set_status.set(TaskStatus::from_str(&event_target_value(&ev)))
            >
                <option value="pending">"Pending"</option>
                <option value="in-progress">"In Progress"</option>
                <option value="completed">"Completed"</option>
            </select>

            <div class="form-actions">
                <button type="button" class="cancel-btn" on:click=move |_| on_cancel.run(())>
                    "Cancel"
                </button>
                <button type="submit" class="save-btn">
                    {if editing { "Update Task" } else { "Add Task" }}
                </button>
            </div>
        </form>
    }
}
