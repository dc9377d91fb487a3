//! Who is signed in, plus the sign-up that is still in progress.
//!
//! Credentials survive reloads through a [`KeyValueStore`]; the pending
//! sign-up (name, email, password and survey answers) only ever lives in
//! memory and is gone once the account is created or the tab is closed.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::api::types::QuestionAnswer;
use crate::config::{TOKEN_KEY, USER_ID_KEY};

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `window.localStorage`.
pub struct BrowserStorage {
    storage: web_sys::Storage,
}

impl BrowserStorage {
    pub fn open() -> Option<Self> {
        let storage = web_sys::window()?.local_storage().ok()??;
        Some(BrowserStorage { storage })
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if self.storage.set_item(key, value).is_err() {
            log::warn!("could not write {key} to local storage");
        }
    }

    fn remove(&self, key: &str) {
        let _ = self.storage.remove_item(key);
    }
}

#[derive(Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PendingSignup {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

#[derive(Default)]
struct State {
    token: Option<String>,
    user_id: Option<String>,
    pending_signup: Option<PendingSignup>,
    pending_answers: Option<Vec<QuestionAnswer>>,
}

/// Shared handle; clones see the same state.
#[derive(Clone)]
pub struct Session {
    store: Rc<dyn KeyValueStore>,
    state: Rc<RefCell<State>>,
}

impl PartialEq for Session {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

impl Session {
    /// Restores credentials saved by an earlier visit.
    pub fn init(store: Rc<dyn KeyValueStore>) -> Self {
        let non_empty = |key: &str| store.get(key).filter(|v| !v.is_empty());
        let state = State {
            token: non_empty(TOKEN_KEY),
            user_id: non_empty(USER_ID_KEY),
            ..State::default()
        };
        Session {
            store,
            state: Rc::new(RefCell::new(state)),
        }
    }

    pub fn browser() -> Self {
        match BrowserStorage::open() {
            Some(storage) => Session::init(Rc::new(storage)),
            None => {
                log::warn!("local storage unavailable, session will not persist");
                Session::init(Rc::new(MemoryStore::default()))
            }
        }
    }

    pub fn token(&self) -> Option<String> {
        self.state.borrow().token.clone()
    }

    pub fn user_id(&self) -> Option<String> {
        self.state.borrow().user_id.clone()
    }

    pub fn is_signed_in(&self) -> bool {
        self.state.borrow().token.is_some()
    }

    pub fn sign_in(&self, token: &str, user_id: &str) {
        self.store.set(TOKEN_KEY, token);
        self.store.set(USER_ID_KEY, user_id);
        let mut state = self.state.borrow_mut();
        state.token = Some(token.to_string());
        state.user_id = Some(user_id.to_string());
        log::info!("signed in as {user_id}");
    }

    /// Forgets the stored credentials. Pending sign-up data is kept.
    pub fn clear(&self) {
        self.store.remove(TOKEN_KEY);
        self.store.remove(USER_ID_KEY);
        let mut state = self.state.borrow_mut();
        state.token = None;
        state.user_id = None;
        log::info!("session cleared");
    }

    pub fn set_pending_signup(&self, signup: PendingSignup) {
        let mut state = self.state.borrow_mut();
        state.pending_signup = Some(signup);
        state.pending_answers = None;
    }

    pub fn has_pending_signup(&self) -> bool {
        self.state.borrow().pending_signup.is_some()
    }

    pub fn set_pending_answers(&self, answers: Vec<QuestionAnswer>) {
        self.state.borrow_mut().pending_answers = Some(answers);
    }

    /// The sign-up and its answers, once both have been collected.
    pub fn pending(&self) -> Option<(PendingSignup, Vec<QuestionAnswer>)> {
        let state = self.state.borrow();
        Some((state.pending_signup.clone()?, state.pending_answers.clone()?))
    }

    pub fn clear_pending(&self) {
        let mut state = self.state.borrow_mut();
        state.pending_signup = None;
        state.pending_answers = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn memory() -> Rc<MemoryStore> {
        Rc::new(MemoryStore::default())
    }

    fn signup() -> PendingSignup {
        PendingSignup {
            full_name: "Asha Rao".to_string(),
            email: "asha@example.com".to_string(),
            password: "secret123".to_string(),
        }
    }

    #[test]
    fn test_init_restores_credentials() {
        let store = memory();
        store.set(TOKEN_KEY, "tok");
        store.set(USER_ID_KEY, "u-1");
        let session = Session::init(store);
        assert_eq!(session.token().as_deref(), Some("tok"));
        assert_eq!(session.user_id().as_deref(), Some("u-1"));
        assert!(session.is_signed_in());
    }

    #[test]
    fn test_empty_token_is_signed_out() {
        let store = memory();
        store.set(TOKEN_KEY, "");
        assert!(!Session::init(store).is_signed_in());
    }

    #[test]
    fn test_sign_in_and_clear_touch_storage() {
        let store = memory();
        let session = Session::init(store.clone());
        session.sign_in("tok", "u-2");
        assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("tok"));
        assert_eq!(store.get(USER_ID_KEY).as_deref(), Some("u-2"));

        let other = session.clone();
        other.clear();
        assert!(!session.is_signed_in());
        assert_eq!(store.get(TOKEN_KEY), None);
        assert_eq!(store.get(USER_ID_KEY), None);
    }

    #[test]
    fn test_pending_signup_stays_in_memory() {
        let store = memory();
        let session = Session::init(store.clone());
        session.set_pending_signup(signup());
        assert!(session.has_pending_signup());
        assert_eq!(session.pending(), None);

        session.set_pending_answers(vec![QuestionAnswer {
            q_id: 1,
            answer: "Build wealth".to_string(),
        }]);
        let (pending, answers) = session.pending().expect("both parts collected");
        assert_eq!(pending, signup());
        assert_eq!(answers.len(), 1);
        assert!(store.items.borrow().is_empty());

        session.clear_pending();
        assert!(!session.has_pending_signup());
    }

    #[test]
    fn test_sessions_compare_by_identity() {
        let a = Session::init(memory());
        let b = Session::init(memory());
        assert!(a == a.clone());
        assert!(a != b);
    }
}
