//! Authentication module
//!
//! This module provides authentication functionality including:
//! - The session store (credentials, login flag, catalog selection)
//! - Sign-up form validation
//! - Login against the registered credentials

pub mod login;
pub mod models;
pub mod session;
pub mod validation;

pub use login::{login, LoginError};
pub use models::{Credentials, LoginRequest, SignupForm};
pub use session::{reduce, Action, SessionState, SessionStore};
pub use validation::{validate_signup, FieldOutcome, SignupReport};
