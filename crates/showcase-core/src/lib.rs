//! Creative Showcase Core Library
//!
//! This crate provides the persistence layer for Creative Showcase, a
//! gallery where users sign up, upload artworks and browse a shared feed.
//!
//! # Architecture
//!
//! - **KeyValue**: durable string store (files on disk, or memory in tests)
//! - **DocumentStore**: users and artworks collections plus a session slot,
//!   with simulated network latency
//! - **Backend**: the async capability the rest of the app codes against
//!
//! # Quick Start
//!
//! ```text
//! let config = Config::load()?;
//! let store = open_default(&config)?;
//!
//! let user = accounts::login(&store, "demo@example.com").await?;
//! let artworks = gallery::dashboard(&store, &user).await?;
//! ```
//!
//! # Modules
//!
//! - `store`: the document store (main entry point)
//! - `backend`: async persistence capability
//! - `accounts`: signup, login, logout, auth state
//! - `gallery`: uploads, feeds, profiles
//! - `models`: User, Artwork, queries and ids
//! - `seed`: first-run demo data
//! - `storage`: key-value substrate
//! - `config`: application configuration

pub mod accounts;
pub mod backend;
pub mod config;
pub mod error;
pub mod gallery;
pub mod latency;
pub mod models;
pub mod seed;
pub mod storage;
pub mod store;

pub use accounts::{AuthState, SignupForm};
pub use backend::Backend;
pub use config::Config;
pub use error::{ShowcaseError, ShowcaseResult};
pub use gallery::{ArtworkDraft, Profile};
pub use latency::Latency;
pub use models::{object_id, Artwork, User, UserQuery};
pub use storage::{FileKv, KeyValue, MemoryKv, StorageError};
pub use store::{open_default, DocumentStore, StoreStats};
