//! Account flows: signup, login, logout and start-up auth state
//!
//! These run against any [`Backend`] and implement the checks a signup or
//! login form performs before and after calling it.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::backend::Backend;
use crate::error::{ShowcaseError, ShowcaseResult};
use crate::models::{User, UserQuery};

/// Bio given to every new account
pub const DEFAULT_BIO: &str = "Just joined Creative Showcase!";

/// Fields collected by the signup form
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SignupForm {
    pub username: String,
    pub email: String,
    /// Required but never stored or verified
    pub password: String,
}

impl SignupForm {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Register a new user and log them in
///
/// The email check and the insert are separate backend calls, so two
/// concurrent signups with the same email can both succeed.
pub async fn signup<B: Backend>(backend: &B, form: &SignupForm) -> ShowcaseResult<User> {
    let username = form.username.trim();
    let email = form.email.trim();
    if username.is_empty() || email.is_empty() || form.password.is_empty() {
        return Err(ShowcaseError::MissingFields);
    }

    if backend
        .find_user(&UserQuery::by_email(email))
        .await?
        .is_some()
    {
        return Err(ShowcaseError::EmailTaken);
    }

    let mut user = User::new(username, email);
    user.set_bio(DEFAULT_BIO);

    let user = backend.insert_user(user).await?;
    backend.login(&user.email).await?;
    info!("Signed up {}", user.username);
    Ok(user)
}

/// Log in by email
pub async fn login<B: Backend>(backend: &B, email: &str) -> ShowcaseResult<User> {
    backend
        .login(email.trim())
        .await?
        .ok_or(ShowcaseError::InvalidCredentials)
}

/// Log out the current user
pub async fn logout<B: Backend>(backend: &B) -> ShowcaseResult<()> {
    backend.logout().await?;
    Ok(())
}

/// Coarse application auth state
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AuthState {
    /// Session not read yet
    #[default]
    Loading,
    Authenticated(User),
    Anonymous,
}

impl AuthState {
    /// Resolve the start-up state from the stored session
    pub async fn restore<B: Backend>(backend: &B) -> ShowcaseResult<Self> {
        Ok(match backend.get_session().await? {
            Some(user) => AuthState::Authenticated(user),
            None => AuthState::Anonymous,
        })
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            AuthState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthState::Authenticated(_))
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, AuthState::Loading)
    }

    /// The logged-in user, or [`ShowcaseError::NotAuthenticated`]
    pub fn require_user(&self) -> ShowcaseResult<&User> {
        self.user().ok_or(ShowcaseError::NotAuthenticated)
    }
}
