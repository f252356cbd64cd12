//! Login against the locally registered credentials

use super::models::LoginRequest;
use super::session::SessionStore;
use thiserror::Error;

/// Why a login attempt was refused. Both cases leave the store untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("Please fill in all fields")]
    MissingFields,

    /// Deliberately does not say which field was wrong
    #[error("Incorrect username or password")]
    IncorrectCredentials,
}

/// Check `req` against the stored record and mark the session authenticated
pub fn login(store: &mut SessionStore, req: &LoginRequest) -> Result<(), LoginError> {
    if req.username.is_empty() || req.password.is_empty() {
        return Err(LoginError::MissingFields);
    }

    let stored = &store.state().credentials;
    if req.username != stored.username || req.password != stored.password {
        tracing::warn!(username = %req.username, "Login rejected");
        return Err(LoginError::IncorrectCredentials);
    }

    store.set_authentication_status(true);
    tracing::info!(username = %req.username, "Login successful");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_against_empty_store_fails() {
        let mut store = SessionStore::new();

        let result = login(&mut store, &LoginRequest::new("abc", "secret1"));

        assert_eq!(result, Err(LoginError::IncorrectCredentials));
        assert_eq!(
            LoginError::IncorrectCredentials.to_string(),
            "Incorrect username or password"
        );
        assert!(!store.state().is_authenticated);
    }

    #[test]
    fn test_login_requires_both_fields() {
        let mut store = SessionStore::new();
        store.set_credentials("abc", "secret1");

        assert_eq!(
            login(&mut store, &LoginRequest::new("abc", "")),
            Err(LoginError::MissingFields)
        );
        assert_eq!(
            login(&mut store, &LoginRequest::new("", "secret1")),
            Err(LoginError::MissingFields)
        );
        assert!(!store.state().is_authenticated);
    }

    #[test]
    fn test_login_with_wrong_password() {
        let mut store = SessionStore::new();
        store.set_credentials("abc", "secret1");

        let result = login(&mut store, &LoginRequest::new("abc", "secret2"));

        assert_eq!(result, Err(LoginError::IncorrectCredentials));
        assert!(!store.state().is_authenticated);
    }

    #[test]
    fn test_login_success_sets_flag() {
        let mut store = SessionStore::new();
        store.set_credentials("abc", "secret1");

        assert!(login(&mut store, &LoginRequest::new("abc", "secret1")).is_ok());
        assert!(store.state().is_authenticated);
    }
}
