//! Core types, configuration, and shared utilities for the slug-repair
//! hooks.

pub mod config;
pub mod constants;
pub mod error;
pub mod types;
pub mod util;
