use thiserror::Error;
use tracing::{debug, info, warn};

use super::policy::AdminPolicy;
use crate::domain::{Role, User};

#[derive(Debug, Clone, Error, PartialEq)]
pub enum AuthError {
    #[error("Please sign in to continue")]
    NotSignedIn,
    #[error("Admin access required (current role: {0})")]
    Forbidden(Role),
}

/// Who is using the current session.
#[derive(Debug, Clone)]
pub struct AuthContext {
    policy: AdminPolicy,
    user: Option<User>,
}

impl AuthContext {
    pub fn new(policy: AdminPolicy) -> Self {
        Self { policy, user: None }
    }

    pub fn sign_in(&mut self, user: User) {
        info!(user_id = %user.id, "User signed in");
        self.user = Some(user);
    }

    pub fn sign_out(&mut self) {
        if let Some(user) = self.user.take() {
            info!(user_id = %user.id, "User signed out");
        }
    }

    pub fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn current_user_role(&self) -> Role {
        match &self.user {
            None => Role::Guest,
            Some(user) if self.policy.is_admin_email(&user.email) => Role::Admin,
            Some(_) => Role::Customer,
        }
    }

    pub fn require_signed_in(&self) -> Result<&User, AuthError> {
        self.user.as_ref().ok_or_else(|| {
            debug!("Rejected: no signed-in user");
            AuthError::NotSignedIn
        })
    }

    pub fn require_admin(&self) -> Result<&User, AuthError> {
        let user = self.require_signed_in()?;
        match self.current_user_role() {
            Role::Admin => Ok(user),
            role => {
                warn!(user_id = %user.id, %role, "Rejected admin operation");
                Err(AuthError::Forbidden(role))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> AuthContext {
        AuthContext::new(AdminPolicy::new(["Owner@Atelier.test"]))
    }

    #[test]
    fn test_roles_follow_sign_in_state() {
        let mut auth = context();
        assert_eq!(auth.current_user_role(), Role::Guest);
        assert_eq!(auth.require_signed_in().unwrap_err(), AuthError::NotSignedIn);
        assert_eq!(auth.require_admin().unwrap_err(), AuthError::NotSignedIn);

        auth.sign_in(User::new("user_1", "shopper@example.com"));
        assert_eq!(auth.current_user_role(), Role::Customer);
        assert_eq!(auth.require_admin().unwrap_err(), AuthError::Forbidden(Role::Customer));

        auth.sign_out();
        assert_eq!(auth.current_user_role(), Role::Guest);
    }

    #[test]
    fn test_admin_allowlist_ignores_case_and_whitespace() {
        let mut auth = context();
        auth.sign_in(User::new("user_2", "  owner@atelier.TEST "));
        assert_eq!(auth.current_user_role(), Role::Admin);
        assert_eq!(auth.require_admin().unwrap().id, "user_2");
    }

    #[test]
    fn test_blank_allowlist_entries_are_ignored() {
        let policy = AdminPolicy::new(["", "  "]);
        assert_eq!(policy.admin_count(), 0);
        assert!(!policy.is_admin_email(""));
    }
}
