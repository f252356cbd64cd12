//! Screen navigation
//!
//! [`App`] owns the session store and the loaded catalog and moves between the
//! three screens: Login, SignUp and Home. It does no I/O; the runner feeds it
//! user input and catalog results.

pub mod prompt;
pub mod runner;

use crate::auth::{login, validate_signup, LoginError, LoginRequest, SessionStore, SignupForm, SignupReport};
use crate::catalog::{CatalogState, ItemId};

pub use prompt::{DialoguerPrompter, Prompter};
pub use runner::run;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Login,
    SignUp,
    /// Catalog screen, greeting the logged-in user
    Home { username: String },
}

/// Application state shared by all screens
#[derive(Debug)]
pub struct App {
    store: SessionStore,
    screen: Screen,
    catalog: CatalogState,
}

impl App {
    /// Start on the login screen with an empty store
    pub fn new() -> Self {
        Self {
            store: SessionStore::new(),
            screen: Screen::Login,
            catalog: CatalogState::default(),
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    pub fn catalog(&self) -> &CatalogState {
        &self.catalog
    }

    pub fn open_signup(&mut self) {
        self.navigate(Screen::SignUp);
    }

    pub fn open_login(&mut self) {
        self.navigate(Screen::Login);
    }

    /// Validate the form; when it passes, register the credentials and go back to Login
    pub fn submit_signup(&mut self, form: &SignupForm) -> SignupReport {
        let report = validate_signup(form);
        if report.is_valid() {
            self.store.set_credentials(form.username.clone(), form.password.clone());
            tracing::info!(username = %form.username, "Account created");
            self.navigate(Screen::Login);
        }
        report
    }

    /// Log in and enter the catalog screen
    pub fn submit_login(&mut self, req: &LoginRequest) -> Result<(), LoginError> {
        login(&mut self.store, req)?;

        self.store.reset_selection();
        self.catalog = CatalogState::loading();
        self.navigate(Screen::Home {
            username: req.username.clone(),
        });
        Ok(())
    }

    /// Install the result of the catalog fetch
    pub fn catalog_loaded(&mut self, catalog: CatalogState) {
        self.catalog = catalog;
    }

    /// Toggle an item on the catalog screen
    pub fn toggle_item(&mut self, id: ItemId) {
        if !matches!(self.screen, Screen::Home { .. }) {
            tracing::warn!(item = %id, "Ignoring selection outside the catalog screen");
            return;
        }
        self.store.toggle_item(id);
    }

    pub fn is_selected(&self, id: &ItemId) -> bool {
        self.store.state().selection.contains(id)
    }

    /// Forget the account and return to Login
    pub fn logout(&mut self) {
        self.store.logout();
        self.catalog = CatalogState::default();
        self.navigate(Screen::Login);
    }

    fn navigate(&mut self, screen: Screen) {
        tracing::debug!(from = ?self.screen, to = ?screen, "Navigating");
        self.screen = screen;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Credentials;

    fn valid_form() -> SignupForm {
        SignupForm {
            username: "abc".to_string(),
            email: "a@b.com".to_string(),
            phone: "1234567890".to_string(),
            password: "secret1".to_string(),
            confirm_password: "secret1".to_string(),
        }
    }

    #[test]
    fn test_starts_on_login() {
        let app = App::new();
        assert_eq!(app.screen(), &Screen::Login);
        assert!(!app.store().state().is_authenticated);
    }

    #[test]
    fn test_valid_signup_registers_and_returns_to_login() {
        let mut app = App::new();
        app.open_signup();

        let report = app.submit_signup(&valid_form());

        assert!(report.is_valid());
        assert_eq!(app.store().state().credentials, Credentials::new("abc", "secret1"));
        assert_eq!(app.screen(), &Screen::Login);
    }

    #[test]
    fn test_invalid_signup_changes_nothing() {
        let mut app = App::new();
        app.open_signup();
        let mut form = valid_form();
        form.phone = "12345".to_string();

        let report = app.submit_signup(&form);

        assert!(!report.is_valid());
        assert!(app.store().state().credentials.is_empty());
        assert_eq!(app.screen(), &Screen::SignUp);
    }

    #[test]
    fn test_login_enters_home_with_fresh_selection() {
        let mut app = App::new();
        app.submit_signup(&valid_form());

        app.submit_login(&LoginRequest::new("abc", "secret1")).unwrap();

        assert_eq!(
            app.screen(),
            &Screen::Home {
                username: "abc".to_string()
            }
        );
        assert!(app.store().state().is_authenticated);
        assert_eq!(app.store().state().item_count(), 0);
        assert!(app.catalog().loading);
    }

    #[test]
    fn test_failed_login_stays_on_login() {
        let mut app = App::new();

        let err = app.submit_login(&LoginRequest::new("abc", "secret1")).unwrap_err();

        assert_eq!(err, LoginError::IncorrectCredentials);
        assert_eq!(app.screen(), &Screen::Login);
    }

    #[test]
    fn test_toggle_only_on_home() {
        let mut app = App::new();
        app.toggle_item(ItemId::from("1"));
        assert_eq!(app.store().state().item_count(), 0);

        app.submit_signup(&valid_form());
        app.submit_login(&LoginRequest::new("abc", "secret1")).unwrap();
        app.toggle_item(ItemId::from("1"));

        assert!(app.is_selected(&ItemId::from("1")));
        assert_eq!(app.store().state().item_count(), 1);
    }

    #[test]
    fn test_logout_clears_session() {
        let mut app = App::new();
        app.submit_signup(&valid_form());
        app.submit_login(&LoginRequest::new("abc", "secret1")).unwrap();
        app.catalog_loaded(CatalogState::loaded(Vec::new()));

        app.logout();

        assert_eq!(app.screen(), &Screen::Login);
        assert!(!app.store().state().is_authenticated);
        assert!(app.store().state().credentials.is_empty());
        assert_eq!(app.catalog(), &CatalogState::default());
    }

    #[test]
    fn test_reentering_home_resets_selection() {
        let mut app = App::new();
        app.submit_signup(&valid_form());
        app.submit_login(&LoginRequest::new("abc", "secret1")).unwrap();
        app.toggle_item(ItemId::from("1"));
        app.toggle_item(ItemId::from("2"));

        app.submit_login(&LoginRequest::new("abc", "secret1")).unwrap();

        assert_eq!(app.store().state().item_count(), 0);
        assert!(app.store().state().selection.is_empty());
    }
}
