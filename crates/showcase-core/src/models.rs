//! Data models for Creative Showcase
//!
//! Defines the records held by the document store: User and Artwork.
//! Field names on the wire keep the document-store conventions
//! (`_id`, camelCase) so persisted collections stay interchangeable with a
//! future HTTP backend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Generate a 24-character lowercase hex identifier
///
/// The first 8 digits are the current unix time in seconds, the remaining 16
/// are random.
pub fn object_id() -> String {
    let seconds = Utc::now().timestamp().max(0) as u64;
    let random = Uuid::new_v4().simple().to_string();
    format!("{:08x}{}", seconds, &random[..16])
}

/// A registered account
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// Opaque identifier, immutable once assigned
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    pub email: String,
    /// Avatar image URI
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

impl User {
    /// Create a user with a freshly generated id
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self::with_id(object_id(), username, email)
    }

    /// Create a user with a specific id (seed data, imports)
    pub fn with_id(
        id: impl Into<String>,
        username: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            email: email.into(),
            avatar: None,
            bio: None,
        }
    }

    pub fn set_bio(&mut self, bio: impl Into<String>) {
        self.bio = Some(bio.into());
    }

    pub fn set_avatar(&mut self, avatar: impl Into<String>) {
        self.avatar = Some(avatar.into());
    }
}

/// An uploaded image with its metadata
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Artwork {
    #[serde(rename = "_id")]
    pub id: String,
    /// Owning user's id. Not checked against the users collection.
    pub user_id: String,
    /// Display name copied from the owner at upload time
    pub author_name: String,
    pub title: String,
    pub description: String,
    /// Image URI, possibly a large inline `data:` URI
    pub image_url: String,
    pub created_at: DateTime<Utc>,
    /// Tags in insertion order, without duplicates
    pub tags: Vec<String>,
}

impl Artwork {
    /// Create an artwork owned by `owner`, stamped with a new id and the
    /// current time
    pub fn new(owner: &User, title: impl Into<String>, image_url: impl Into<String>) -> Self {
        Self {
            id: object_id(),
            user_id: owner.id.clone(),
            author_name: owner.username.clone(),
            title: title.into(),
            description: String::new(),
            image_url: image_url.into(),
            created_at: Utc::now(),
            tags: Vec::new(),
        }
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Add a tag
    ///
    /// Surrounding whitespace is trimmed; empty and duplicate tags are
    /// ignored. Returns whether the tag was added.
    pub fn add_tag(&mut self, tag: &str) -> bool {
        push_tag(&mut self.tags, tag)
    }

    /// Remove a tag
    pub fn remove_tag(&mut self, tag: &str) {
        self.tags.retain(|t| t != tag);
    }
}

/// Append `tag` to `tags` unless it is blank or already present
pub(crate) fn push_tag(tags: &mut Vec<String>, tag: &str) -> bool {
    let tag = tag.trim();
    if tag.is_empty() || tags.iter().any(|t| t == tag) {
        return false;
    }
    tags.push(tag.to_string());
    true
}

/// Lookup predicate for the users collection
///
/// A user matches when ANY supplied field equals the corresponding user
/// field. A query with no fields matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl UserQuery {
    pub fn by_email(email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            ..Self::default()
        }
    }

    pub fn by_username(username: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
            ..Self::default()
        }
    }

    pub fn by_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    /// Also match on email
    pub fn or_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Also match on username
    pub fn or_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Check whether `user` satisfies this query
    ///
    /// Empty strings never match, mirroring a falsy field being skipped.
    pub fn matches(&self, user: &User) -> bool {
        field_matches(&self.email, &user.email)
            || field_matches(&self.username, &user.username)
            || field_matches(&self.id, &user.id)
    }
}

fn field_matches(wanted: &Option<String>, actual: &str) -> bool {
    matches!(wanted, Some(w) if !w.is_empty() && w == actual)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        let mut user = User::with_id("u1", "artx", "a@b.com");
        user.set_bio("hello");
        user
    }

    #[test]
    fn test_object_id_shape() {
        let id = object_id();
        assert_eq!(id.len(), 24);
        assert!(id
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));

        let seconds = u64::from_str_radix(&id[..8], 16).unwrap();
        let now = Utc::now().timestamp() as u64;
        assert!(now - seconds < 5);

        assert_ne!(object_id(), object_id());
    }

    #[test]
    fn test_user_serialization_uses_store_field_names() {
        let user = sample_user();
        let json = serde_json::to_value(&user).unwrap();

        assert_eq!(json["_id"], "u1");
        assert_eq!(json["username"], "artx");
        assert_eq!(json["bio"], "hello");
        // Absent optionals are omitted
        assert!(json.get("avatar").is_none());

        let back: User = serde_json::from_value(json).unwrap();
        assert_eq!(back, user);
    }

    #[test]
    fn test_artwork_serialization_uses_camel_case() {
        let user = sample_user();
        let mut artwork = Artwork::new(&user, "Test", "data:image/png;base64,AAAA");
        artwork.add_tag("ink");

        let json = serde_json::to_value(&artwork).unwrap();
        assert_eq!(json["userId"], "u1");
        assert_eq!(json["authorName"], "artx");
        assert_eq!(json["imageUrl"], "data:image/png;base64,AAAA");
        assert!(json["createdAt"].as_str().unwrap().contains('T'));
        assert_eq!(json["tags"], serde_json::json!(["ink"]));
    }

    #[test]
    fn test_artwork_parses_browser_timestamps() {
        let json = r#"{
            "_id": "65f1a2b3c4d5e6f7a8b9c0d1",
            "userId": "u1",
            "authorName": "artx",
            "title": "T",
            "description": "",
            "imageUrl": "https://example.com/a.png",
            "createdAt": "2024-03-13T10:15:30.123Z",
            "tags": []
        }"#;
        let artwork: Artwork = serde_json::from_str(json).unwrap();
        assert_eq!(artwork.created_at.timestamp_subsec_millis(), 123);
    }

    #[test]
    fn test_artwork_tags_dedupe_and_trim() {
        let user = sample_user();
        let mut artwork = Artwork::new(&user, "Test", "x");

        assert!(artwork.add_tag(" neon "));
        assert!(artwork.add_tag("city"));
        assert!(!artwork.add_tag("neon"));
        assert!(!artwork.add_tag("   "));
        assert_eq!(artwork.tags, vec!["neon", "city"]);

        artwork.remove_tag("neon");
        assert_eq!(artwork.tags, vec!["city"]);
    }

    #[test]
    fn test_query_matches_any_field() {
        let user = sample_user();

        assert!(UserQuery::by_email("a@b.com").matches(&user));
        assert!(UserQuery::by_username("artx").matches(&user));
        assert!(UserQuery::by_id("u1").matches(&user));
        assert!(UserQuery::by_email("nobody@x.com")
            .or_username("artx")
            .matches(&user));
        assert!(!UserQuery::by_email("nobody@x.com").matches(&user));
    }

    #[test]
    fn test_empty_query_matches_nothing() {
        let user = sample_user();
        assert!(!UserQuery::default().matches(&user));
        assert!(!UserQuery::by_email("").matches(&user));
    }
}
