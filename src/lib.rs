//! Fun Bun
//!
//! This library provides the logic behind the Fun Bun terminal client:
//! local sign-up and login, a session store, and a multi-select view over a
//! remote entertainment catalog.

pub mod app;
pub mod auth;
pub mod catalog;
pub mod core;

// Re-export commonly used types
pub use crate::core::{Config, FunBunError, Logger};
pub use app::{App, Screen};
pub use auth::SessionStore;
pub use catalog::CatalogClient;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
