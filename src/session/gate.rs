//! Access control for routed views.
//!
//! Every view declares a condition over the current session identity. The
//! check yields the fallback route when the condition is unmet: sign-in for
//! views that need a user, the dashboard for views that need the admin role
//! (the dashboard then bounces signed-out visitors to the login page).
//! Redirects are silent; there is no flash message.

use tokio::sync::watch;

use crate::models::{Role, User};

/// The session condition a view requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessPolicy {
    Public,
    Authenticated,
    Admin,
}

impl AccessPolicy {
    /// Evaluate against an identity; the error carries the fallback route.
    pub fn check(&self, user: Option<&User>) -> Result<(), &'static str> {
        match self {
            AccessPolicy::Public => Ok(()),
            AccessPolicy::Authenticated => {
                if user.is_some() {
                    Ok(())
                } else {
                    Err("/login")
                }
            }
            AccessPolicy::Admin => match user {
                Some(user) if user.role == Role::Admin => Ok(()),
                _ => Err("/dashboard"),
            },
        }
    }
}

/// The route table: path -> required session condition.
pub fn policy_for_path(path: &str) -> AccessPolicy {
    match path {
        "/dashboard" | "/document-simplifier" | "/profile" => AccessPolicy::Authenticated,
        "/admin" => AccessPolicy::Admin,
        _ => AccessPolicy::Public,
    }
}

/// Outcome of a gate evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Allow,
    Redirect(&'static str),
}

/// A policy coupled to a live identity subscription.
///
/// `evaluate` always reads the latest identity, so a view holding a gate
/// catches a logout on its next check rather than only at mount.
pub struct SessionGate {
    policy: AccessPolicy,
    identity: watch::Receiver<Option<User>>,
}

impl SessionGate {
    pub fn new(policy: AccessPolicy, identity: watch::Receiver<Option<User>>) -> Self {
        Self { policy, identity }
    }

    pub fn policy(&self) -> AccessPolicy {
        self.policy
    }

    /// Re-check the policy against the current identity.
    pub fn evaluate(&self) -> GateDecision {
        match self.policy.check(self.identity.borrow().as_ref()) {
            Ok(()) => GateDecision::Allow,
            Err(fallback) => GateDecision::Redirect(fallback),
        }
    }

    /// Wait until the identity changes, then re-check. Returns the decision
    /// for the new identity; if the channel closes the gate denies.
    pub async fn on_change(&mut self) -> GateDecision {
        if self.identity.changed().await.is_err() {
            return match self.policy {
                AccessPolicy::Public => GateDecision::Allow,
                AccessPolicy::Authenticated => GateDecision::Redirect("/login"),
                AccessPolicy::Admin => GateDecision::Redirect("/dashboard"),
            };
        }
        self.evaluate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member() -> User {
        User {
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            role: Role::User,
        }
    }

    fn admin() -> User {
        User {
            name: "Admin".to_string(),
            email: "admin@lawgorithm.in".to_string(),
            role: Role::Admin,
        }
    }

    #[test]
    fn public_allows_everyone() {
        assert_eq!(AccessPolicy::Public.check(None), Ok(()));
        assert_eq!(AccessPolicy::Public.check(Some(&member())), Ok(()));
    }

    #[test]
    fn authenticated_redirects_visitors_to_login() {
        assert_eq!(AccessPolicy::Authenticated.check(None), Err("/login"));
        assert_eq!(AccessPolicy::Authenticated.check(Some(&member())), Ok(()));
    }

    #[test]
    fn admin_redirects_everyone_else_to_dashboard() {
        assert_eq!(AccessPolicy::Admin.check(None), Err("/dashboard"));
        assert_eq!(AccessPolicy::Admin.check(Some(&member())), Err("/dashboard"));
        assert_eq!(AccessPolicy::Admin.check(Some(&admin())), Ok(()));
    }

    #[test]
    fn route_table_matches_the_navigation_shell() {
        assert_eq!(policy_for_path("/"), AccessPolicy::Public);
        assert_eq!(policy_for_path("/login"), AccessPolicy::Public);
        assert_eq!(policy_for_path("/register"), AccessPolicy::Public);
        assert_eq!(policy_for_path("/lawyer-connect"), AccessPolicy::Public);
        assert_eq!(policy_for_path("/ipc-simplifier"), AccessPolicy::Public);
        assert_eq!(policy_for_path("/case-hierarchy"), AccessPolicy::Public);
        assert_eq!(policy_for_path("/dashboard"), AccessPolicy::Authenticated);
        assert_eq!(policy_for_path("/document-simplifier"), AccessPolicy::Authenticated);
        assert_eq!(policy_for_path("/profile"), AccessPolicy::Authenticated);
        assert_eq!(policy_for_path("/admin"), AccessPolicy::Admin);
    }
}
