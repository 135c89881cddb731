//! i18n-sync: keep JSON translation files in step with a source language
//!
//! Compares each target language against an authoritative source file and
//! merges missing keys while keeping existing translations and source order.

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod render;
pub mod tree;

pub use domain::{Config, TranslationTree};
pub use error::SyncError;
pub use tree::{find_missing_keys, merge};
