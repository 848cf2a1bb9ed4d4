//! Frontend Models
//!
//! Data structures for the session record and task items.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Authenticated user record, persisted to localStorage.
///
/// Either absent entirely or fully populated; the serialized shape
/// (`{"user": .., "userId": ..}`) is the durable-storage contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Display label
    pub user: String,
    /// Backend-assigned identifier
    #[serde(rename = "userId")]
    pub user_id: String,
}

/// Task status, set directly by the user (no workflow enforcement)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Completed => "completed",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "in-progress" => TaskStatus::InProgress,
            "completed" => TaskStatus::Completed,
            _ => TaskStatus::Pending,
        }
    }

    /// Human-readable label for selects and badges
    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Completed => "Completed",
        }
    }
}

/// A user-created work item
///
/// `id` is assigned once at creation and never changes; every other field is
/// replaceable on edit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Task {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub due_date: NaiveDate,
    pub status: TaskStatus,
}

impl Task {
    /// Due date formatted for display
    pub fn due_label(&self) -> String {
        format!("Due: {}", self.due_date.format("%b %-d, %Y"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        for status in [TaskStatus::Pending, TaskStatus::InProgress, TaskStatus::Completed] {
            assert_eq!(TaskStatus::from_str(status.as_str()), status);
        }
    }

    #[test]
    fn test_status_unknown_defaults_to_pending() {
        assert_eq!(TaskStatus::from_str("archived"), TaskStatus::Pending);
        assert_eq!(TaskStatus::from_str(""), TaskStatus::Pending);
    }

    #[test]
    fn test_user_storage_shape() {
        let user = User { user: "User".to_string(), user_id: "abc123".to_string() };
        let json = serde_json::to_string(&user).unwrap();
        assert_eq!(json, r#"{"user":"User","userId":"abc123"}"#);
    }
}
