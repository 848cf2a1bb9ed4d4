//! UI Components
//!
//! Reusable Leptos components and page views.

mod delete_confirm_button;
mod login;
mod modal;
mod navbar;
mod route_guard;
mod signup;
mod task_card;
mod task_form;
mod task_manager;
mod upcoming_panel;

pub use delete_confirm_button::DeleteConfirmButton;
pub use login::Login;
pub use modal::Modal;
pub use navbar::Navbar;
pub use route_guard::{RequireAnonymous, RequireAuth};
pub use signup::Signup;
pub use task_card::TaskCard;
pub use task_form::{FormTarget, TaskForm};
pub use task_manager::TaskManager;
pub use upcoming_panel::{UpcomingList, UpcomingPanel};
