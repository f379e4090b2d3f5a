//! Output formatting for CLI
//!
//! Provides consistent output formatting across all commands:
//! - Human-readable default output
//! - JSON output (--json flag)
//! - Quiet mode for scripting (--quiet flag)

use serde::Serialize;

use showcase_core::{Artwork, Profile, User};

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output (default)
    Human,
    /// JSON output
    Json,
    /// Quiet mode - minimal output
    Quiet,
}

impl OutputFormat {
    /// Create format from CLI flags
    pub fn from_flags(json: bool, quiet: bool) -> Self {
        if quiet {
            OutputFormat::Quiet
        } else if json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        }
    }
}

/// Output helper for consistent formatting
pub struct Output {
    /// The output format
    pub format: OutputFormat,
}

impl Output {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Print a user
    pub fn print_user(&self, user: &User) {
        match self.format {
            OutputFormat::Human => {
                println!("ID:       {}", user.id);
                println!("Username: {}", user.username);
                println!("Email:    {}", user.email);
                if let Some(ref bio) = user.bio {
                    println!("Bio:      {}", bio);
                }
                if let Some(ref avatar) = user.avatar {
                    println!("Avatar:   {}", describe_image(avatar));
                }
            }
            OutputFormat::Json => print_json(user),
            OutputFormat::Quiet => println!("{}", user.id),
        }
    }

    /// Print a single artwork
    pub fn print_artwork(&self, artwork: &Artwork) {
        match self.format {
            OutputFormat::Human => {
                println!("ID:          {}", artwork.id);
                println!("Title:       {}", artwork.title);
                println!("Author:      {}", artwork.author_name);
                if !artwork.description.is_empty() {
                    println!("Description: {}", artwork.description);
                }
                println!("Image:       {}", describe_image(&artwork.image_url));
                if !artwork.tags.is_empty() {
                    println!("Tags:        {}", format_tags(&artwork.tags));
                }
                println!(
                    "Created:     {}",
                    artwork.created_at.format("%Y-%m-%d %H:%M")
                );
            }
            OutputFormat::Json => print_json(artwork),
            OutputFormat::Quiet => println!("{}", artwork.id),
        }
    }

    /// Print a list of artworks
    pub fn print_artworks(&self, artworks: &[Artwork]) {
        match self.format {
            OutputFormat::Human => {
                if artworks.is_empty() {
                    println!("No artworks yet.");
                    return;
                }
                for artwork in artworks {
                    println!(
                        "{} | {} | {} | {}",
                        short_id(&artwork.id),
                        truncate(&artwork.title, 30),
                        truncate(&artwork.author_name, 18),
                        truncate(&format_tags(&artwork.tags), 40)
                    );
                }
                println!("\n{} artwork(s)", artworks.len());
            }
            OutputFormat::Json => print_json(artworks),
            OutputFormat::Quiet => {
                for artwork in artworks {
                    println!("{}", artwork.id);
                }
            }
        }
    }

    /// Print a profile: the user followed by their artworks
    pub fn print_profile(&self, profile: &Profile) {
        match self.format {
            OutputFormat::Human => {
                self.print_user(&profile.user);
                println!();
                println!("── Artworks ({}) ──", profile.artworks.len());
                self.print_artworks(&profile.artworks);
            }
            OutputFormat::Json => print_json(profile),
            OutputFormat::Quiet => self.print_artworks(&profile.artworks),
        }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        match self.format {
            OutputFormat::Human => println!("✓ {}", message),
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({"status": "success", "message": message})
                );
            }
            OutputFormat::Quiet => {}
        }
    }

    /// Check if we should prompt for confirmation
    pub fn should_prompt(&self) -> bool {
        self.format == OutputFormat::Human
    }

    /// Print an informational message
    pub fn message(&self, msg: &str) {
        match self.format {
            OutputFormat::Human => println!("{}", msg),
            OutputFormat::Json => {
                println!("{}", serde_json::json!({"message": msg}));
            }
            OutputFormat::Quiet => {}
        }
    }
}

/// Print a value as pretty JSON
pub fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to encode output: {}", e),
    }
}

/// Describe an image URI without dumping inline data
fn describe_image(uri: &str) -> String {
    match uri.strip_prefix("data:") {
        Some(rest) => {
            let mime = rest.split([';', ',']).next().unwrap_or("unknown");
            format!("inline {} ({} KB)", mime, uri.len().div_ceil(1024))
        }
        None => uri.to_string(),
    }
}

fn format_tags(tags: &[String]) -> String {
    tags.iter()
        .map(|t| format!("#{}", t))
        .collect::<Vec<_>>()
        .join(" ")
}

/// First 8 characters of an id
fn short_id(id: &str) -> String {
    id.chars().take(8).collect()
}

/// Truncate a string to max characters, adding "..." if truncated
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
