//! Configuration module for taglist.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - Default tag substitution options

pub mod loader;

pub use loader::Config;
