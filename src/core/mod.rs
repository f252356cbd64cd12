//! Core application layer
//!
//! This module provides the ambient pieces shared by every screen:
//! - Configuration management
//! - Structured logging system
//! - Error handling and type system

pub mod config;
pub mod error;
pub mod logging;

pub use config::Config;
pub use error::{ErrorContext, FunBunError, Result};
pub use logging::Logger;
