//! Status and reset command handlers

use std::io::{self, Write};

use anyhow::{Context, Result};

use showcase_core::storage::keys;
use showcase_core::{Config, DocumentStore, FileKv, Latency};

use crate::output::{Output, OutputFormat};

/// Show status information
pub fn show(store: &DocumentStore<FileKv>, config: &Config, output: &Output) -> Result<()> {
    let stats = store.stats()?;
    let size = store.kv().size_of(&keys::ALL);
    let session = stats.session.as_ref().map(|u| u.username.as_str());

    match output.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "data_dir": config.data_dir,
                    "session": session,
                    "latency_ms": config.latency_ms,
                    "storage": {
                        "size": size
                    },
                    "counts": {
                        "users": stats.users,
                        "artworks": stats.artworks
                    }
                })
            );
        }
        OutputFormat::Quiet => {
            println!("{}", session.unwrap_or(""));
        }
        OutputFormat::Human => {
            println!("Creative Showcase Status");
            println!("========================");
            println!();
            println!("Session:");
            println!("  User: {}", session.unwrap_or("(not logged in)"));
            println!();
            println!("Storage:");
            println!("  Location: {}", config.data_dir.display());
            println!("  Size:     {}", human_size(size));
            println!("  Latency:  {} ms", config.latency_ms);
            println!();
            println!("Contents:");
            println!("  Users:    {}", stats.users);
            println!("  Artworks: {}", stats.artworks);
        }
    }

    Ok(())
}

/// Restore the demo data
pub fn reset(kv: FileKv, config: &Config, yes: bool, output: &Output) -> Result<()> {
    if !yes && output.should_prompt() {
        println!(
            "This replaces all users, artworks and the session in {} with the demo data.",
            kv.dir().display()
        );
        print!("Continue? [y/N] ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        if !matches!(input.trim(), "y" | "Y" | "yes") {
            println!("Cancelled.");
            return Ok(());
        }
    }

    DocumentStore::reset(kv, Latency::from_config(config)).context("Failed to reset store")?;
    output.success("Store reset to demo data");
    Ok(())
}

fn human_size(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_size() {
        assert_eq!(human_size(512), "512 B");
        assert_eq!(human_size(2048), "2.0 KB");
        assert_eq!(human_size(3 * 1024 * 1024), "3.0 MB");
    }
}
