//! Task Store
//!
//! In-memory ordered task collection owned by the task-manager view. All
//! mutations are synchronous; views re-derive their display state from the
//! collection snapshot after each one.

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::{Task, TaskStatus};

/// Window of the upcoming panel, in whole days (closed interval)
const UPCOMING_WINDOW_DAYS: i64 = 7;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaskError {
    #[error("no task with id {0}")]
    NotFound(u32),
}

/// Replacement fields for a create or edit submission. Callers validate the
/// draft (non-empty title/description, parsed due date) before invoking the
/// store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub due_date: NaiveDate,
    pub status: TaskStatus,
}

/// Ordered task collection with a monotonic id counter.
///
/// Append order is display order; the base list is never sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
    next_id: u32,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Append a new task with a fresh unique id
    pub fn create(&mut self, draft: TaskDraft) -> Task {
        let task = Task {
            id: self.next_id,
            title: draft.title,
            description: draft.description,
            due_date: draft.due_date,
            status: draft.status,
        };
        self.next_id += 1;
        self.tasks.push(task.clone());
        task
    }

    /// Replace every field except `id` on an existing task
    pub fn update(&mut self, id: u32, draft: TaskDraft) -> Result<Task, TaskError> {
        let task = self
            .tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or(TaskError::NotFound(id))?;
        task.title = draft.title;
        task.description = draft.description;
        task.due_date = draft.due_date;
        task.status = draft.status;
        Ok(task.clone())
    }

    /// Remove the task with the matching id; no-op when absent
    pub fn remove(&mut self, id: u32) {
        self.tasks.retain(|task| task.id != id);
    }

    /// Tasks due within the next `UPCOMING_WINDOW_DAYS` days inclusive,
    /// relative to `today`, in source order.
    pub fn upcoming(&self, today: NaiveDate) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|task| {
                let days = days_until(task.due_date, today);
                (0..=UPCOMING_WINDOW_DAYS).contains(&days)
            })
            .cloned()
            .collect()
    }
}

/// Whole days between `today` and `due` (negative when overdue)
pub fn days_until(due: NaiveDate, today: NaiveDate) -> i64 {
    (due - today).num_days()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn draft(title: &str, due: NaiveDate) -> TaskDraft {
        TaskDraft {
            title: title.to_string(),
            description: format!("{title} description"),
            due_date: due,
            status: TaskStatus::Pending,
        }
    }

    #[test]
    fn test_create_assigns_fresh_ids_in_append_order() {
        let mut list = TaskList::new();
        let a = list.create(draft("a", date(2026, 9, 1)));
        let b = list.create(draft("b", date(2026, 9, 2)));
        assert_ne!(a.id, b.id);
        assert!(b.id > a.id);
        assert_eq!(list.tasks()[0].title, "a");
        assert_eq!(list.tasks()[1].title, "b");
    }

    #[test]
    fn test_create_then_remove_round_trips() {
        let mut list = TaskList::new();
        list.create(draft("keep", date(2026, 9, 1)));
        let before = list.tasks().to_vec();
        let added = list.create(draft("gone", date(2026, 9, 2)));
        list.remove(added.id);
        assert_eq!(list.tasks(), before.as_slice());
    }

    #[test]
    fn test_update_replaces_fields_and_keeps_id() {
        let mut list = TaskList::new();
        let created = list.create(draft("old", date(2026, 9, 1)));
        let updated = list
            .update(
                created.id,
                TaskDraft {
                    title: "new".to_string(),
                    description: "rewritten".to_string(),
                    due_date: date(2026, 9, 9),
                    status: TaskStatus::Completed,
                },
            )
            .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, "new");
        assert_eq!(updated.status, TaskStatus::Completed);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_update_unknown_id_errors() {
        let mut list = TaskList::new();
        let result = list.update(42, draft("x", date(2026, 9, 1)));
        assert_eq!(result, Err(TaskError::NotFound(42)));
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut list = TaskList::new();
        list.create(draft("only", date(2026, 9, 1)));
        list.remove(99);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_upcoming_inclusive_boundaries() {
        let today = date(2026, 8, 30);
        let mut list = TaskList::new();
        list.create(draft("yesterday", date(2026, 8, 29)));
        list.create(draft("today", today));
        list.create(draft("in seven", date(2026, 9, 6)));
        list.create(draft("in eight", date(2026, 9, 7)));
        let titles: Vec<_> = list.upcoming(today).into_iter().map(|t| t.title).collect();
        assert_eq!(titles, vec!["today", "in seven"]);
    }

    #[test]
    fn test_upcoming_preserves_insertion_order() {
        let today = date(2026, 8, 30);
        let mut list = TaskList::new();
        list.create(draft("later", date(2026, 9, 5)));
        list.create(draft("sooner", date(2026, 8, 31)));
        let titles: Vec<_> = list.upcoming(today).into_iter().map(|t| t.title).collect();
        assert_eq!(titles, vec!["later", "sooner"]);
    }

    #[test]
    fn test_upcoming_today_vs_eight_days_out() {
        let today = date(2026, 8, 30);
        let mut list = TaskList::new();
        let due_today = list.create(draft("due today", today));
        list.create(draft("due in eight", date(2026, 9, 7)));
        let upcoming = list.upcoming(today);
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].id, due_today.id);
    }

    #[test]
    fn test_days_until() {
        let today = date(2026, 8, 30);
        assert_eq!(days_until(today, today), 0);
        assert_eq!(days_until(date(2026, 9, 6), today), 7);
        assert_eq!(days_until(date(2026, 8, 28), today), -2);
    }
}
