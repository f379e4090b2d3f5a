//! Demo data written on first run
//!
//! Each collection is seeded on its own when its key is absent. Artwork
//! timestamps are taken at seeding time.

use chrono::{DateTime, Utc};

use crate::models::{Artwork, User};

/// Id of the demo account every seed artwork belongs to
pub const DEMO_USER_ID: &str = "demo_user_id";

/// Seed users
pub fn users() -> Vec<User> {
    let mut demo = User::with_id(DEMO_USER_ID, "demo_artist", "demo@example.com");
    demo.set_bio("I create digital dreams.");
    demo.set_avatar("https://picsum.photos/200/200?random=10");
    vec![demo]
}

/// Seed artworks, newest first, stamped with `now`
pub fn artworks(now: DateTime<Utc>) -> Vec<Artwork> {
    let artwork = |id: &str, title: &str, description: &str, image_url: &str, tags: [&str; 3]| {
        Artwork {
            id: id.to_string(),
            user_id: DEMO_USER_ID.to_string(),
            author_name: "Demo Artist".to_string(),
            title: title.to_string(),
            description: description.to_string(),
            image_url: image_url.to_string(),
            created_at: now,
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    };

    vec![
        artwork(
            "65f1a2b3c4d5e6f7g8h9i0j1",
            "Neon Dreams",
            "A cyberpunk inspired city street at night.",
            "https://picsum.photos/800/600?random=1",
            ["cyberpunk", "neon", "city"],
        ),
        artwork(
            "65f1a2b3c4d5e6f7g8h9i0j2",
            "Serenity",
            "A calm lake reflecting the mountains.",
            "https://picsum.photos/600/800?random=2",
            ["nature", "calm", "blue"],
        ),
        artwork(
            "65f1a2b3c4d5e6f7g8h9i0j3",
            "Abstract Thoughts",
            "Chaos and order mixed in color.",
            "https://picsum.photos/800/800?random=3",
            ["abstract", "art", "colorful"],
        ),
    ]
}
