//! Task Manager View
//!
//! The /home page: owns the task collection for its lifetime and composes the
//! list, the modal form, the detail modal, and the upcoming panel. Every
//! mutation goes through the `TaskList` snapshot in `tasks`, and both derived
//! views recompute from it.

use chrono::Local;
use leptos::prelude::*;

use crate::components::{FormTarget, Modal, Navbar, TaskCard, TaskForm, UpcomingList, UpcomingPanel};
use crate::models::Task;
use crate::session::use_session;
use crate::tasks::{TaskDraft, TaskList};

#[component]
pub fn TaskManager() -> impl IntoView {
    let session = use_session();
    let tasks = RwSignal::new(TaskList::new());
    let (form_target, set_form_target) = signal::<Option<FormTarget>>(None);
    let (viewing, set_viewing) = signal::<Option<Task>>(None);
    let (show_upcoming, set_show_upcoming) = signal(false);

    let upcoming = Memo::new(move |_| tasks.get().upcoming(Local::now().date_naive()));

    // RequireAuth redirects to /signup once the session clears
    let on_logout = Callback::new(move |_: ()| session.sign_out());

    let open_create = move || set_form_target.set(Some(FormTarget::New));

    let on_save = Callback::new(move |draft: TaskDraft| {
        match form_target.get_untracked() {
            Some(FormTarget::Edit(task)) => {
                let mut outcome = Ok(());
                tasks.update(|list| outcome = list.update(task.id, draft.clone()).map(|_| ()));
                if let Err(err) = outcome {
                    web_sys::console::error_1(&format!("[TASKS] update failed: {err}").into());
                }
            }
            _ => {
                tasks.update(|list| {
                    list.create(draft.clone());
                });
            }
        }
        set_form_target.set(None);
    });

    let on_edit = Callback::new(move |task: Task| set_form_target.set(Some(FormTarget::Edit(task))));
    let on_view = Callback::new(move |task: Task| set_viewing.set(Some(task)));
    let on_delete = Callback::new(move |id: u32| tasks.update(|list| list.remove(id)));

    view! {
        <div class="task-page">
            <Navbar on_logout=on_logout/>

            <div class="task-layout">
                <div class="task-main">
                    <div class="task-toolbar">
                        <button
                            class="show-upcoming-btn"
                            on:click=move |_| set_show_upcoming.set(true)
                        >
                            "Show Upcoming"
                        </button>
                        <button class="add-task-btn" on:click=move |_| open_create()>
                            "+ Add Task"
                        </button>
                    </div>

                    <Show
                        when=move || !tasks.get().is_empty()
                        fallback=move || {
                            view! { <EmptyState on_add=Callback::new(move |_: ()| open_create())/> }
                        }
                    >
                        <div class="task-grid">
                            <For
                                each=move || tasks.get().tasks().to_vec()
                                key=|task| task.clone()
                                children=move |task| {
                                    view! {
                                        <TaskCard
                                            task=task
                                            on_view=on_view
                                            on_edit=on_edit
                                            on_delete=on_delete
                                        />
                                    }
                                }
                            />
                        </div>
                    </Show>
                </div>

                <UpcomingPanel upcoming=upcoming/>
            </div>

            {move || {
                form_target
                    .get()
                    .map(|target| {
                        let title = target.modal_title();
                        view! {
                            <Modal
                                title=title
                                on_close=Callback::new(move |_| set_form_target.set(None))
                            >
                                <TaskForm
                                    target=target.clone()
                                    on_save=on_save
                                    on_cancel=Callback::new(move |_| set_form_target.set(None))
                                />
                            </Modal>
                        }
                    })
            }}

            {move || {
                viewing
                    .get()
                    .map(|task| {
                        view! {
                            <Modal
                                title="Task Details"
                                on_close=Callback::new(move |_| set_viewing.set(None))
                            >
                                <div class="task-detail">
                                    <h3 class="task-title">{task.title.clone()}</h3>
                                    <p class="task-description">{task.description.clone()}</p>
                                    <div class="task-due">{task.due_label()}</div>
                                    <span class="status-badge">{task.status.label()}</span>
                                </div>
                            </Modal>
                        }
                    })
            }}

            {move || {
                show_upcoming
                    .get()
                    .then(|| {
                        view! {
                            <Modal
                                title="Upcoming Tasks"
                                on_close=Callback::new(move |_| set_show_upcoming.set(false))
                            >
                                <UpcomingList upcoming=upcoming/>
                            </Modal>
                        }
                    })
            }}
        </div>
    }
}

/// Shown instead of the list while the collection is empty
#[component]
fn EmptyState(#[prop(into)] on_add: Callback<()>) -> impl IntoView {
    view! {
        <div class="empty-state">
            <h3>"No tasks yet!"</h3>
            <p>"Start organizing your work by adding your first task"</p>
            <button class="add-task-btn" on:click=move |_| on_add.run(())>
                "+ Add Your First Task"
            </button>
        </div>
    }
}
