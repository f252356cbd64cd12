//! Session store
//!
//! Single source of truth for the registered credentials, the authentication
//! flag and the catalog selection. The store is an explicit value owned by the
//! application and handed to whatever needs it; every change goes through
//! [`reduce`], a pure function from the old state and an [`Action`] to the new
//! state.

use super::models::Credentials;
use crate::catalog::{ItemId, Selection};

/// Snapshot of everything the screens read
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub credentials: Credentials,
    pub is_authenticated: bool,
    pub selection: Selection,
}

impl SessionState {
    /// Number of selected catalog items, always the size of the selection
    pub fn item_count(&self) -> usize {
        self.selection.len()
    }
}

/// State transitions understood by [`reduce`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Replace the credential record wholesale
    SetUserCredentials(Credentials),
    SetAuthenticationStatus(bool),
    /// Clear credentials and authentication
    Logout,
    /// Set the selected-item count. The count is the size of the selection,
    /// so only `0` (clear) and the current size are accepted.
    SetItemCount(usize),
    ToggleItem(ItemId),
    /// Empty the selection
    ResetSelection,
}

/// Apply `action` to `state`
pub fn reduce(mut state: SessionState, action: Action) -> SessionState {
    match action {
        Action::SetUserCredentials(credentials) => {
            state.credentials = credentials;
        }
        Action::SetAuthenticationStatus(flag) => {
            state.is_authenticated = flag;
        }
        Action::Logout => {
            state.credentials = Credentials::default();
            state.is_authenticated = false;
        }
        Action::SetItemCount(0) => {
            state.selection.clear();
        }
        Action::SetItemCount(count) => {
            if count != state.selection.len() {
                tracing::warn!(
                    requested = count,
                    selected = state.selection.len(),
                    "Ignoring item count that does not match the selection"
                );
            }
        }
        Action::ToggleItem(id) => {
            state.selection.toggle(id);
        }
        Action::ResetSelection => {
            state.selection.clear();
        }
    }
    state
}

/// Owner of the [`SessionState`]
#[derive(Debug, Default)]
pub struct SessionStore {
    state: SessionState,
}

impl SessionStore {
    /// Create a store with empty credentials, logged out, nothing selected
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an action to the current state
    pub fn dispatch(&mut self, action: Action) {
        tracing::debug!(action = action_name(&action), "Dispatching session action");
        self.state = reduce(std::mem::take(&mut self.state), action);
    }

    /// Read-only snapshot of the current state
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn set_credentials(&mut self, username: impl Into<String>, password: impl Into<String>) {
        self.dispatch(Action::SetUserCredentials(Credentials::new(username, password)));
    }

    pub fn set_authentication_status(&mut self, flag: bool) {
        self.dispatch(Action::SetAuthenticationStatus(flag));
    }

    pub fn logout(&mut self) {
        self.dispatch(Action::Logout);
    }

    pub fn set_item_count(&mut self, count: usize) {
        self.dispatch(Action::SetItemCount(count));
    }

    pub fn toggle_item(&mut self, id: ItemId) {
        self.dispatch(Action::ToggleItem(id));
    }

    pub fn reset_selection(&mut self) {
        self.dispatch(Action::ResetSelection);
    }
}

// Credentials never reach the log, only the action kind does.
fn action_name(action: &Action) -> &'static str {
    match action {
        Action::SetUserCredentials(_) => "set_user_credentials",
        Action::SetAuthenticationStatus(_) => "set_authentication_status",
        Action::Logout => "logout",
        Action::SetItemCount(_) => "set_item_count",
        Action::ToggleItem(_) => "toggle_item",
        Action::ResetSelection => "reset_selection",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_initial_state() {
        let store = SessionStore::new();
        let state = store.state();

        assert!(state.credentials.is_empty());
        assert!(!state.is_authenticated);
        assert_eq!(state.item_count(), 0);
        assert!(state.selection.is_empty());
    }

    #[test]
    fn test_set_credentials_replaces_record() {
        let mut store = SessionStore::new();
        store.set_credentials("first", "password1");
        store.set_credentials("second", "password2");

        assert_eq!(store.state().credentials, Credentials::new("second", "password2"));
    }

    #[test]
    fn test_authentication_flag() {
        let mut store = SessionStore::new();
        store.set_authentication_status(true);
        assert!(store.state().is_authenticated);

        store.set_authentication_status(false);
        assert!(!store.state().is_authenticated);
    }

    #[test]
    fn test_logout_clears_credentials_and_flag() {
        let mut store = SessionStore::new();
        store.set_credentials("abc", "secret1");
        store.set_authentication_status(true);
        store.toggle_item(ItemId::from("3"));

        store.logout();

        assert!(store.state().credentials.is_empty());
        assert!(!store.state().is_authenticated);
        // selection is owned by the catalog screen and reset on its entry
        assert_eq!(store.state().item_count(), 1);
    }

    #[test]
    fn test_toggle_twice_restores_count() {
        let mut store = SessionStore::new();
        store.toggle_item(ItemId::from("1"));
        let before = store.state().item_count();

        store.toggle_item(ItemId::from(5u64));
        assert_eq!(store.state().item_count(), before + 1);
        store.toggle_item(ItemId::from(5u64));

        assert_eq!(store.state().item_count(), before);
        assert!(!store.state().selection.contains(&ItemId::from("5")));
    }

    #[test]
    fn test_set_item_count_cannot_desync_selection() {
        let mut store = SessionStore::new();
        store.toggle_item(ItemId::from("1"));

        store.set_item_count(9);
        assert_eq!(store.state().item_count(), 1);
        assert!(store.state().selection.contains(&ItemId::from("1")));

        store.toggle_item(ItemId::from("2"));
        assert_eq!(store.state().item_count(), 2);
    }

    #[test]
    fn test_set_item_count_zero_clears_selection() {
        let mut store = SessionStore::new();
        store.toggle_item(ItemId::from("1"));
        store.toggle_item(ItemId::from("2"));

        store.set_item_count(0);

        assert_eq!(store.state().item_count(), 0);
        assert!(store.state().selection.is_empty());
    }

    #[test]
    fn test_reset_selection() {
        let mut store = SessionStore::new();
        store.toggle_item(ItemId::from("1"));
        store.toggle_item(ItemId::from("2"));

        store.reset_selection();

        assert_eq!(store.state().item_count(), 0);
        assert!(store.state().selection.is_empty());
    }

    #[test]
    fn test_reduce_is_pure() {
        let state = SessionState::default();
        let next = reduce(state.clone(), Action::SetAuthenticationStatus(true));

        assert!(!state.is_authenticated);
        assert!(next.is_authenticated);
    }

    proptest! {
        #[test]
        fn prop_set_credentials_round_trips(username in ".{1,24}", password in ".{1,24}") {
            let mut store = SessionStore::new();
            store.set_credentials(username.clone(), password.clone());

            prop_assert_eq!(&store.state().credentials.username, &username);
            prop_assert_eq!(&store.state().credentials.password, &password);
        }

        #[test]
        fn prop_set_item_count_is_idempotent(
            ids in prop::collection::vec(0u64..16, 0..20),
            count in 0usize..32,
        ) {
            let mut store = SessionStore::new();
            for id in ids {
                store.toggle_item(ItemId::from(id));
            }
            store.set_item_count(count);
            let once = store.state().clone();
            store.set_item_count(count);

            prop_assert_eq!(store.state(), &once);
            prop_assert_eq!(store.state().item_count(), store.state().selection.len());
        }

        #[test]
        fn prop_count_tracks_selection(ids in prop::collection::vec(0u64..16, 0..50)) {
            let mut store = SessionStore::new();
            for id in ids {
                store.toggle_item(ItemId::from(id));
                prop_assert_eq!(store.state().item_count(), store.state().selection.len());
            }
        }
    }
}
