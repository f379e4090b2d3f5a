//! Command handlers

pub mod account;
pub mod artwork;
pub mod config;
pub mod status;
