//! Core library components.
//!
//! This module contains the synchronization engine: fingerprinting, the
//! cipher, the secret store, change detection and the workflows that tie
//! them together. Outer concerns (config files, git) sit behind plain values
//! and traits so the engine can run against temp directories in tests.

pub mod cipher;
pub mod config;
pub mod constants;
pub mod detect;
pub mod digest;
pub mod domain;
mod files;
pub mod store;
pub mod vault;
pub mod vcs;
