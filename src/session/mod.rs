//! Process-wide session identity.
//!
//! The platform serves one interactive session per process, so the identity
//! holder is a single shared value. Changes are published on a watch channel
//! so gates re-evaluate whenever the identity changes, not only when a view
//! first loads. Credentials live in an in-memory registry seeded with demo
//! accounts; nothing is persisted.

pub mod gate;

use std::sync::Mutex;

use thiserror::Error;
use tokio::sync::watch;
use tracing::info;
use uuid::Uuid;

use crate::models::{Role, User};

/// A registered credential set. Internal to the provider; views only ever
/// see the [`User`] identity derived from it.
#[derive(Debug, Clone)]
struct Account {
    id: String,
    name: String,
    email: String,
    password: String,
    role: Role,
}

impl Account {
    fn identity(&self) -> User {
        User {
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role,
        }
    }
}

/// Errors surfaced by the credential boundary.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error("an account with this email already exists")]
    EmailTaken,
}

/// Holds the current identity and the account registry.
pub struct SessionProvider {
    accounts: Mutex<Vec<Account>>,
    current: watch::Sender<Option<User>>,
}

impl SessionProvider {
    /// A provider seeded with the demo accounts (one admin, one member).
    pub fn new() -> Self {
        let accounts = vec![
            Account {
                id: "admin".to_string(),
                name: "Admin".to_string(),
                email: "admin@lawgorithm.in".to_string(),
                password: "admin123".to_string(),
                role: Role::Admin,
            },
            Account {
                id: "demo-user".to_string(),
                name: "John Doe".to_string(),
                email: "john@example.com".to_string(),
                password: "password123".to_string(),
                role: Role::User,
            },
        ];
        let (current, _) = watch::channel(None);
        Self {
            accounts: Mutex::new(accounts),
            current,
        }
    }

    /// The identity of the signed-in user, if any.
    pub fn current_user(&self) -> Option<User> {
        self.current.borrow().clone()
    }

    /// Subscribe to identity changes. The receiver always reflects the
    /// latest value; gates hold one so a logout is seen on the next check.
    pub fn subscribe(&self) -> watch::Receiver<Option<User>> {
        self.current.subscribe()
    }

    /// Sign in with an email and password.
    pub fn login(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let accounts = self.accounts.lock().expect("account registry lock poisoned");
        let account = accounts
            .iter()
            .find(|a| a.email.eq_ignore_ascii_case(email) && a.password == password)
            .ok_or(AuthError::InvalidCredentials)?;
        let user = account.identity();
        drop(accounts);

        info!("signed in {} ({:?})", user.email, user.role);
        self.current.send_replace(Some(user.clone()));
        Ok(user)
    }

    /// Create an account and sign it in. New accounts get the member role.
    pub fn register(&self, name: &str, email: &str, password: &str) -> Result<User, AuthError> {
        let mut accounts = self.accounts.lock().expect("account registry lock poisoned");
        if accounts.iter().any(|a| a.email.eq_ignore_ascii_case(email)) {
            return Err(AuthError::EmailTaken);
        }
        let account = Account {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            role: Role::User,
        };
        let user = account.identity();
        accounts.push(account);
        drop(accounts);

        info!("registered {}", user.email);
        self.current.send_replace(Some(user.clone()));
        Ok(user)
    }

    /// Clear the current identity. Idempotent.
    pub fn logout(&self) {
        if self.current.borrow().is_some() {
            info!("signed out");
        }
        self.current.send_replace(None);
    }
}

impl Default for SessionProvider {
    fn default() -> Self {
        Self::new()
    }
}
