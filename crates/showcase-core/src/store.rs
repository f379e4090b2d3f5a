//! Document store
//!
//! The `DocumentStore` owns the users and artworks collections and the
//! single-slot session, all persisted through a [`KeyValue`] substrate.
//!
//! ## Consistency
//!
//! Each write operation waits out its simulated latency first, then reads
//! the whole collection, mutates it and writes it back without yielding.
//! Concurrent operations on one store therefore never tear each other, but
//! a check-then-insert spanning two operations (such as signup's email
//! check) is not atomic and can admit duplicates.
//!
//! ## Usage
//!
//! ```ignore
//! let store = DocumentStore::open(MemoryKv::new(), Latency::none())?;
//!
//! let user = store.login("demo@example.com").await?;
//! let artworks = store.find_artworks().await?;
//! ```

use anyhow::{Context, Result};
use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::backend::Backend;
use crate::config::Config;
use crate::latency::Latency;
use crate::models::{Artwork, User, UserQuery};
use crate::seed;
use crate::storage::{keys, FileKv, KeyValue, StorageError, StorageResult};

/// Counts describing the current store contents
#[derive(Debug, Clone, PartialEq)]
pub struct StoreStats {
    pub users: usize,
    pub artworks: usize,
    /// The logged-in user, if any
    pub session: Option<User>,
}

/// Collection store over a key-value substrate
pub struct DocumentStore<K> {
    kv: K,
    latency: Latency,
}

/// Open the file-backed store described by `config`
pub fn open_default(config: &Config) -> Result<DocumentStore<FileKv>> {
    let kv = FileKv::open(&config.data_dir).context("Failed to open data directory")?;
    DocumentStore::open(kv, Latency::from_config(config))
}

impl<K: KeyValue> DocumentStore<K> {
    /// Open the store, seeding absent collections
    ///
    /// Fails with [`StorageError::Corrupt`] when any persisted value cannot
    /// be parsed; see [`DocumentStore::reset`] for recovery.
    pub fn open(kv: K, latency: Latency) -> Result<Self> {
        let store = Self { kv, latency };
        store.seed_missing().context("Failed to seed store")?;
        store.validate().context("Failed to load stored data")?;
        info!("Document store opened");
        Ok(store)
    }

    /// Restore the demo data, discarding current contents
    ///
    /// Any existing value under a store key is copied to its backup key
    /// first. The session is cleared.
    pub fn reset(kv: K, latency: Latency) -> Result<Self> {
        for key in keys::ALL {
            if let Some(existing) = kv.get(key)? {
                kv.set(&keys::backup(key), &existing)
                    .with_context(|| format!("Failed to back up '{}'", key))?;
                debug!("Backed up {} ({} bytes)", key, existing.len());
            }
        }

        kv.remove(keys::SESSION)?;
        kv.remove(keys::USERS)?;
        kv.remove(keys::ARTWORKS)?;
        warn!("Store reset to demo data");

        Self::open(kv, latency)
    }

    /// The underlying substrate
    pub fn kv(&self) -> &K {
        &self.kv
    }

    pub fn latency(&self) -> Latency {
        self.latency
    }

    /// Collection sizes and the current session, without simulated latency
    pub fn stats(&self) -> Result<StoreStats> {
        Ok(StoreStats {
            users: self.read_collection::<User>(keys::USERS)?.len(),
            artworks: self.read_collection::<Artwork>(keys::ARTWORKS)?.len(),
            session: self.read_session()?,
        })
    }

    fn seed_missing(&self) -> StorageResult<()> {
        if is_absent(self.kv.get(keys::ARTWORKS)?) {
            info!("Seeding {}", keys::ARTWORKS);
            self.write_collection(keys::ARTWORKS, &seed::artworks(Utc::now()))?;
        }
        if is_absent(self.kv.get(keys::USERS)?) {
            info!("Seeding {}", keys::USERS);
            self.write_collection(keys::USERS, &seed::users())?;
        }
        Ok(())
    }

    fn validate(&self) -> StorageResult<()> {
        self.read_collection::<User>(keys::USERS)?;
        self.read_collection::<Artwork>(keys::ARTWORKS)?;
        self.read_session()?;
        Ok(())
    }

    fn read_collection<T: DeserializeOwned>(&self, key: &str) -> StorageResult<Vec<T>> {
        match self.kv.get(key)? {
            Some(content) if !content.is_empty() => {
                serde_json::from_str(&content).map_err(|e| StorageError::corrupt(key, &e))
            }
            _ => Ok(Vec::new()),
        }
    }

    fn write_collection<T: Serialize>(&self, key: &str, items: &[T]) -> StorageResult<()> {
        let content = serde_json::to_string(items).map_err(|source| StorageError::Serialize {
            key: key.to_string(),
            source,
        })?;
        self.kv.set(key, &content)
    }

    /// The session slot; empty, absent and a literal `null` all mean logged out
    fn read_session(&self) -> StorageResult<Option<User>> {
        match self.kv.get(keys::SESSION)? {
            Some(content) if !content.is_empty() => {
                serde_json::from_str::<Option<User>>(&content)
                    .map_err(|e| StorageError::corrupt(keys::SESSION, &e))
            }
            _ => Ok(None),
        }
    }

    fn write_session(&self, user: &User) -> StorageResult<()> {
        let content = serde_json::to_string(user).map_err(|source| StorageError::Serialize {
            key: keys::SESSION.to_string(),
            source,
        })?;
        self.kv.set(keys::SESSION, &content)
    }
}

fn is_absent(value: Option<String>) -> bool {
    value.map_or(true, |v| v.is_empty())
}

impl<K: KeyValue> Backend for DocumentStore<K> {
    async fn find_user(&self, query: &UserQuery) -> Result<Option<User>> {
        self.latency.request().await;
        let users: Vec<User> = self
            .read_collection(keys::USERS)
            .context("Failed to read users")?;
        Ok(users.into_iter().find(|u| query.matches(u)))
    }

    async fn insert_user(&self, user: User) -> Result<User> {
        self.latency.request().await;
        let mut users: Vec<User> = self
            .read_collection(keys::USERS)
            .context("Failed to read users")?;
        users.push(user.clone());
        self.write_collection(keys::USERS, &users)
            .context("Failed to save users")?;
        info!("Inserted user {} ({})", user.username, user.id);
        Ok(user)
    }

    async fn find_artworks(&self) -> Result<Vec<Artwork>> {
        self.latency.request().await;
        self.read_collection(keys::ARTWORKS)
            .context("Failed to read artworks")
    }

    async fn find_artworks_by_user(&self, user_id: &str) -> Result<Vec<Artwork>> {
        self.latency.request().await;
        let artworks: Vec<Artwork> = self
            .read_collection(keys::ARTWORKS)
            .context("Failed to read artworks")?;
        Ok(artworks
            .into_iter()
            .filter(|a| a.user_id == user_id)
            .collect())
    }

    async fn insert_artwork(&self, artwork: Artwork) -> Result<Artwork> {
        self.latency.request().await;
        let mut artworks: Vec<Artwork> = self
            .read_collection(keys::ARTWORKS)
            .context("Failed to read artworks")?;
        artworks.insert(0, artwork.clone());
        self.write_collection(keys::ARTWORKS, &artworks)
            .context("Failed to save artworks")?;
        info!("Inserted artwork '{}' ({})", artwork.title, artwork.id);
        Ok(artwork)
    }

    async fn login(&self, email: &str) -> Result<Option<User>> {
        let Some(user) = self.find_user(&UserQuery::by_email(email)).await? else {
            debug!("Login failed: no user with that email");
            return Ok(None);
        };
        self.write_session(&user)
            .context("Failed to save session")?;
        info!("Session started for {}", user.username);
        Ok(Some(user))
    }

    async fn logout(&self) -> Result<()> {
        self.kv
            .remove(keys::SESSION)
            .context("Failed to clear session")?;
        self.latency.logout().await;
        info!("Session cleared");
        Ok(())
    }

    async fn get_session(&self) -> Result<Option<User>> {
        self.read_session().context("Failed to read session")
    }
}
