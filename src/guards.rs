//! Route Guards
//!
//! Stateless predicates gating navigation on session presence. The two
//! redirect targets are mutually exclusive under the two guards, so no
//! redirect loop is possible.

use crate::models::User;

pub const HOME_ROUTE: &str = "/home";
pub const SIGNUP_ROUTE: &str = "/signup";
pub const ROOT_ROUTE: &str = "/";

/// Outcome of evaluating a guard against the current session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(&'static str),
}

/// Protected routes: allow iff a session is present
pub fn require_authenticated(session: Option<&User>) -> GuardDecision {
    if session.is_some() {
        GuardDecision::Allow
    } else {
        GuardDecision::Redirect(SIGNUP_ROUTE)
    }
}

/// Anonymous-only routes: allow iff no session is present
pub fn require_anonymous(session: Option<&User>) -> GuardDecision {
    if session.is_none() {
        GuardDecision::Allow
    } else {
        GuardDecision::Redirect(HOME_ROUTE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn some_user() -> User {
        User {
            user: "User".to_string(),
            user_id: "u-1".to_string(),
        }
    }

    #[test]
    fn test_home_requires_session() {
        assert_eq!(require_authenticated(None), GuardDecision::Redirect(SIGNUP_ROUTE));
        assert_eq!(require_authenticated(Some(&some_user())), GuardDecision::Allow);
    }

    #[test]
    fn test_signup_requires_no_session() {
        assert_eq!(require_anonymous(None), GuardDecision::Allow);
        assert_eq!(require_anonymous(Some(&some_user())), GuardDecision::Redirect(HOME_ROUTE));
    }
}
