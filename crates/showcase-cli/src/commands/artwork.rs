//! Artwork command handlers

use std::path::Path;

use anyhow::{bail, Context, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use showcase_core::{gallery, ArtworkDraft, AuthState, Backend};

use crate::output::Output;

/// Upload an artwork as the logged-in user
pub async fn upload<B: Backend>(
    backend: &B,
    image: String,
    title: String,
    description: String,
    tags: Vec<String>,
    output: &Output,
) -> Result<()> {
    let auth = AuthState::restore(backend).await?;
    let user = auth.require_user()?;

    let draft = ArtworkDraft::new(title)
        .with_description(description)
        .with_image(image_uri(&image)?)
        .with_tags(tags.iter().map(String::as_str));

    let artwork = gallery::upload(backend, user, draft).await?;

    output.success(&format!("Uploaded artwork: {}", artwork.id));
    output.print_artwork(&artwork);
    Ok(())
}

/// List every artwork
pub async fn feed<B: Backend>(backend: &B, shuffle: bool, output: &Output) -> Result<()> {
    let artworks = if shuffle {
        gallery::discover(backend).await?
    } else {
        gallery::feed(backend).await?
    };

    output.print_artworks(&artworks);
    Ok(())
}

/// List the logged-in user's artworks
pub async fn dashboard<B: Backend>(backend: &B, output: &Output) -> Result<()> {
    let auth = AuthState::restore(backend).await?;
    let user = auth.require_user()?;

    let artworks = gallery::dashboard(backend, user).await?;
    output.print_artworks(&artworks);
    Ok(())
}

/// Show a user's profile
pub async fn profile<B: Backend>(backend: &B, username: String, output: &Output) -> Result<()> {
    let profile = gallery::profile(backend, &username)
        .await?
        .ok_or_else(|| anyhow::anyhow!("User not found: {}", username))?;

    output.print_profile(&profile);
    Ok(())
}

/// Turn an image argument into a URI
///
/// URIs are passed through; files are read and inlined as a base64 `data:` URI.
fn image_uri(source: &str) -> Result<String> {
    if ["http://", "https://", "data:"]
        .iter()
        .any(|scheme| source.starts_with(scheme))
    {
        return Ok(source.to_string());
    }

    let path = Path::new(source);
    let mime = image_mime(path)?;
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read image {:?}", path))?;

    Ok(format!("data:{};base64,{}", mime, STANDARD.encode(bytes)))
}

/// Guess an image MIME type from the file extension
fn image_mime(path: &Path) -> Result<&'static str> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    Ok(match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "bmp" => "image/bmp",
        _ => bail!("Unsupported image type: {:?}", path),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_uris_pass_through() {
        for uri in [
            "https://picsum.photos/800/600?random=1",
            "http://example.com/a.png",
            "data:image/png;base64,AAAA",
        ] {
            assert_eq!(image_uri(uri).unwrap(), uri);
        }
    }

    #[test]
    fn test_file_becomes_data_uri() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tiny.PNG");
        std::fs::write(&path, b"abc").unwrap();

        let uri = image_uri(path.to_str().unwrap()).unwrap();
        assert_eq!(uri, "data:image/png;base64,YWJj");
    }

    #[test]
    fn test_unsupported_extension() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("notes.txt");
        std::fs::write(&path, b"abc").unwrap();

        assert!(image_uri(path.to_str().unwrap()).is_err());
    }

    #[test]
    fn test_missing_file() {
        assert!(image_uri("/nonexistent/picture.jpg").is_err());
    }
}
