//! # Configuration Module
//!
//! This module handles application configuration loading and management.
//! Configuration can be loaded from:
//! - Environment variables (prefixed with APP__, plus simple overrides such
//!   as RATE_LIMIT_WINDOW_MS and MAX_HISTORY)
//! - Configuration files (config/default.toml, config/{environment}.toml)

pub mod settings;

pub use settings::{
    CorsSettings, HistorySettings, MessageSettings, RateLimitSettings, ServerSettings, Settings,
};
