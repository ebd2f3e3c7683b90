//! Shared configuration, error and logging plumbing for the isochron crates.

pub mod config;
pub mod error;
pub mod logging;
