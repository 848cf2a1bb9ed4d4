//! Field Validation
//!
//! Pure validation rules for the auth and task forms. Each rule maps a field
//! value to an error message, with the empty string meaning valid.

use chrono::NaiveDate;

/// Snapshot of the auth form, passed to `validate_field` so that
/// `confirm_password` can compare against the current password.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthFields {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Per-field error messages for the auth forms (empty string = valid)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthErrors {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl AuthErrors {
    pub fn set(&mut self, name: &str, message: String) {
        match name {
            "username" => self.username = message,
            "email" => self.email = message,
            "password" => self.password = message,
            "confirm_password" => self.confirm_password = message,
            _ => {}
        }
    }

    pub fn is_clear(&self) -> bool {
        self.username.is_empty()
            && self.email.is_empty()
            && self.password.is_empty()
            && self.confirm_password.is_empty()
    }
}

/// Validate a single auth field against the current form snapshot.
///
/// Unknown field names pass through with no error.
pub fn validate_field(name: &str, value: &str, form: &AuthFields) -> String {
    match name {
        "username" if value.trim().chars().count() < 3 => {
            "Username must be at least 3 characters long".to_string()
        }
        "email" if !is_valid_email(value) => {
            "Please enter a valid email address".to_string()
        }
        "password" if value.chars().count() < 8 => {
            "Password must be at least 8 characters long".to_string()
        }
        "confirm_password" if value != form.password => {
            "Passwords do not match".to_string()
        }
        _ => String::new(),
    }
}

/// Email check matching `^[^\s@]+@[^\s@]+\.[^\s@]+$`: no whitespace, exactly
/// one `@` with a non-empty local part, and a `.` inside the domain with at
/// least one character on each side.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = value.splitn(2, '@');
    let local = parts.next().unwrap_or_default();
    let Some(domain) = parts.next() else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .match_indices('.')
        .any(|(i, _)| i > 0 && i + 1 < domain.len())
}

/// Per-field error messages for the task form (empty string = valid)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFormErrors {
    pub title: String,
    pub description: String,
    pub due_date: String,
}

impl TaskFormErrors {
    pub fn is_clear(&self) -> bool {
        self.title.is_empty() && self.description.is_empty() && self.due_date.is_empty()
    }
}

/// Validate the task form at submit time. `due_date` is the raw `YYYY-MM-DD`
/// input value; after a clear result it is guaranteed to parse.
pub fn validate_task_form(title: &str, description: &str, due_date: &str) -> TaskFormErrors {
    let mut errors = TaskFormErrors::default();
    if title.trim().is_empty() {
        errors.title = "Title is required".to_string();
    }
    if description.trim().is_empty() {
        errors.description = "Description is required".to_string();
    }
    if parse_due_date(due_date).is_none() {
        errors.due_date = "Due date is required".to_string();
    }
    errors
}

/// Parse the date input's `YYYY-MM-DD` value
pub fn parse_due_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_accepts_local_at_domain_tld() {
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("first.last@mail.example.com"));
        assert!(is_valid_email("user+tag@sub.domain.org"));
    }

    #[test]
    fn test_email_rejects_malformed() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("plainaddress"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("@b.c"));
        assert!(!is_valid_email("a@.c"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email("a@b c.d"));
        assert!(!is_valid_email("a@@b.c"));
    }

    #[test]
    fn test_username_rule_trims() {
        let form = AuthFields::default();
        assert_eq!(
            validate_field("username", "ab", &form),
            "Username must be at least 3 characters long"
        );
        assert_eq!(
            validate_field("username", "  ab  ", &form),
            "Username must be at least 3 characters long"
        );
        assert_eq!(validate_field("username", "abc", &form), "");
    }

    #[test]
    fn test_password_rule() {
        let form = AuthFields::default();
        assert_eq!(
            validate_field("password", "abc", &form),
            "Password must be at least 8 characters long"
        );
        assert_eq!(validate_field("password", "longenough", &form), "");
    }

    #[test]
    fn test_confirm_password_compares_snapshot() {
        let form = AuthFields {
            password: "hunter2hunter2".to_string(),
            ..Default::default()
        };
        assert_eq!(
            validate_field("confirm_password", "different", &form),
            "Passwords do not match"
        );
        assert_eq!(validate_field("confirm_password", "hunter2hunter2", &form), "");
    }

    #[test]
    fn test_unknown_field_passes_through() {
        let form = AuthFields::default();
        assert_eq!(validate_field("nickname", "", &form), "");
    }

    #[test]
    fn test_task_form_all_missing() {
        let errors = validate_task_form("", "  ", "");
        assert_eq!(errors.title, "Title is required");
        assert_eq!(errors.description, "Description is required");
        assert_eq!(errors.due_date, "Due date is required");
        assert!(!errors.is_clear());
    }

    #[test]
    fn test_task_form_valid() {
        let errors = validate_task_form("Ship it", "Release the build", "2026-09-01");
        assert!(errors.is_clear());
        assert!(parse_due_date("2026-09-01").is_some());
    }

    #[test]
    fn test_task_form_bad_date() {
        let errors = validate_task_form("t", "d", "not-a-date");
        assert_eq!(errors.due_date, "Due date is required");
    }
}
