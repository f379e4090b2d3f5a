//! Gallery flows: uploading artworks and building the feeds
//!
//! - `feed`: every artwork, newest first
//! - `discover`: every artwork in random order, for the landing page
//! - `dashboard`: the logged-in user's own artworks
//! - `profile`: a user looked up by username, with their artworks

use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::backend::Backend;
use crate::error::{ShowcaseError, ShowcaseResult};
use crate::models::{push_tag, Artwork, User, UserQuery};

/// An artwork being prepared for upload
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArtworkDraft {
    pub title: String,
    /// Required; uploads with a blank description are rejected
    pub description: String,
    /// Image URI; uploads are rejected without one
    pub image_url: Option<String>,
    tags: Vec<String>,
}

impl ArtworkDraft {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_image(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    /// Add a tag, trimmed; blanks and duplicates are ignored
    pub fn add_tag(&mut self, tag: &str) -> bool {
        push_tag(&mut self.tags, tag)
    }

    pub fn with_tags<'a>(mut self, tags: impl IntoIterator<Item = &'a str>) -> Self {
        for tag in tags {
            self.add_tag(tag);
        }
        self
    }

    pub fn remove_tag(&mut self, tag: &str) {
        self.tags.retain(|t| t != tag);
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }
}

/// Upload a draft as `owner`
///
/// The artwork gets a new id, the owner's id and username, and the current
/// time. It becomes the first entry of every feed that includes it.
pub async fn upload<B: Backend>(
    backend: &B,
    owner: &User,
    draft: ArtworkDraft,
) -> ShowcaseResult<Artwork> {
    let title = draft.title.trim();
    let description = draft.description.trim();
    let image_url = match draft.image_url.as_deref() {
        Some(url) if !url.is_empty() && !title.is_empty() && !description.is_empty() => url,
        _ => return Err(ShowcaseError::IncompleteUpload),
    };

    let mut artwork = Artwork::new(owner, title, image_url);
    artwork.set_description(description);
    artwork.tags = draft.tags;

    let artwork = backend.insert_artwork(artwork).await?;
    info!("{} uploaded '{}'", owner.username, artwork.title);
    Ok(artwork)
}

/// All artworks, newest first
pub async fn feed<B: Backend>(backend: &B) -> ShowcaseResult<Vec<Artwork>> {
    Ok(backend.find_artworks().await?)
}

/// All artworks in random order
pub async fn discover<B: Backend>(backend: &B) -> ShowcaseResult<Vec<Artwork>> {
    let mut artworks = backend.find_artworks().await?;
    artworks.sort_by_cached_key(|_| Uuid::new_v4());
    Ok(artworks)
}

/// The given user's artworks, newest first
pub async fn dashboard<B: Backend>(backend: &B, user: &User) -> ShowcaseResult<Vec<Artwork>> {
    Ok(backend.find_artworks_by_user(&user.id).await?)
}

/// A public profile page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Profile {
    pub user: User,
    pub artworks: Vec<Artwork>,
}

/// Look up a profile by username; `None` when no such user exists
pub async fn profile<B: Backend>(backend: &B, username: &str) -> ShowcaseResult<Option<Profile>> {
    let Some(user) = backend
        .find_user(&UserQuery::by_username(username))
        .await?
    else {
        return Ok(None);
    };
    let artworks = backend.find_artworks_by_user(&user.id).await?;
    Ok(Some(Profile { user, artworks }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accounts::{signup, SignupForm};
    use crate::latency::Latency;
    use crate::seed::DEMO_USER_ID;
    use crate::storage::MemoryKv;
    use crate::store::DocumentStore;

    fn store() -> DocumentStore<MemoryKv> {
        DocumentStore::open(MemoryKv::new(), Latency::none()).unwrap()
    }

    #[test]
    fn test_draft_tags() {
        let mut draft = ArtworkDraft::new("Test").with_tags(["ink", " ink ", "paper", ""]);
        assert_eq!(draft.tags(), ["ink", "paper"]);

        draft.remove_tag("ink");
        assert!(draft.add_tag("ink"));
        assert_eq!(draft.tags(), ["paper", "ink"]);
    }

    #[tokio::test]
    async fn test_upload_appears_first_for_user() {
        let store = store();
        let user = signup(&store, &SignupForm::new("artx", "a@b.com", "pw"))
            .await
            .unwrap();

        upload(
            &store,
            &user,
            ArtworkDraft::new("Earlier")
                .with_description("first")
                .with_image("https://example.com/1.png"),
        )
        .await
        .unwrap();
        let artwork = upload(
            &store,
            &user,
            ArtworkDraft::new("Test")
                .with_description("desc")
                .with_image("data:image/png;base64,AAAA")
                .with_tags(["a", "b"]),
        )
        .await
        .unwrap();

        assert_eq!(artwork.user_id, user.id);
        assert_eq!(artwork.author_name, "artx");
        assert_eq!(artwork.tags, vec!["a", "b"]);

        let mine = dashboard(&store, &user).await.unwrap();
        assert_eq!(mine.len(), 2);
        assert_eq!(mine[0], artwork);
        assert_eq!(feed(&store).await.unwrap()[0], artwork);
    }

    #[tokio::test]
    async fn test_upload_requires_image_and_title() {
        let store = store();
        let user = User::with_id("u1", "artx", "a@b.com");

        let no_image = upload(
            &store,
            &user,
            ArtworkDraft::new("Test").with_description("desc"),
        )
        .await;
        assert!(matches!(no_image, Err(ShowcaseError::IncompleteUpload)));

        let no_title = upload(
            &store,
            &user,
            ArtworkDraft::new("  ").with_description("desc").with_image("x"),
        )
        .await;
        assert!(matches!(no_title, Err(ShowcaseError::IncompleteUpload)));

        assert_eq!(feed(&store).await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_upload_requires_description() {
        let store = store();
        let user = User::with_id("u1", "artx", "a@b.com");

        let empty = upload(&store, &user, ArtworkDraft::new("Test").with_image("x")).await;
        assert!(matches!(empty, Err(ShowcaseError::IncompleteUpload)));

        let blank = upload(
            &store,
            &user,
            ArtworkDraft::new("Test").with_description("   ").with_image("x"),
        )
        .await;
        assert!(matches!(blank, Err(ShowcaseError::IncompleteUpload)));

        assert!(dashboard(&store, &user).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_discover_returns_every_artwork() {
        let store = store();

        let mut ids: Vec<_> = discover(&store)
            .await
            .unwrap()
            .into_iter()
            .map(|a| a.id)
            .collect();
        ids.sort();

        let mut expected: Vec<_> = feed(&store).await.unwrap().into_iter().map(|a| a.id).collect();
        expected.sort();
        assert_eq!(ids, expected);
    }

    #[tokio::test]
    async fn test_profile_lookup() {
        let store = store();

        let profile = profile(&store, "demo_artist").await.unwrap().unwrap();
        assert_eq!(profile.user.id, DEMO_USER_ID);
        assert_eq!(profile.artworks.len(), 3);
    }

    #[tokio::test]
    async fn test_profile_unknown_user() {
        let store = store();
        assert!(profile(&store, "nobody").await.unwrap().is_none());
    }
}
