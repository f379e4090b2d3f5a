//! Backend capability
//!
//! Everything the application needs from persistence, expressed as async
//! operations. [`DocumentStore`](crate::store::DocumentStore) is the local
//! implementation; an HTTP client exposing the same three resources
//! (users, artworks, session) can replace it without touching callers.

use anyhow::Result;

use crate::models::{Artwork, User, UserQuery};

#[allow(async_fn_in_trait)]
pub trait Backend {
    /// First user matching any field of `query`, or `None`
    async fn find_user(&self, query: &UserQuery) -> Result<Option<User>>;

    /// Append `user` to the users collection
    ///
    /// Username and email uniqueness is NOT checked here.
    async fn insert_user(&self, user: User) -> Result<User>;

    /// All artworks, newest first
    async fn find_artworks(&self) -> Result<Vec<Artwork>>;

    /// Artworks owned by `user_id`, newest first. Empty when none match.
    async fn find_artworks_by_user(&self, user_id: &str) -> Result<Vec<Artwork>>;

    /// Prepend `artwork` to the artworks collection
    async fn insert_artwork(&self, artwork: Artwork) -> Result<Artwork>;

    /// Start a session for the user with `email`
    ///
    /// Returns `None` when no such user exists. There is no password check.
    async fn login(&self, email: &str) -> Result<Option<User>>;

    /// Clear the session. Always succeeds when storage is writable.
    async fn logout(&self) -> Result<()>;

    /// The logged-in user snapshot, if any. Never delayed.
    async fn get_session(&self) -> Result<Option<User>>;
}
