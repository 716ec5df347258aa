//! Auth Session
//!
//! The bearer token lives in local storage. It is written by a login flow
//! outside this app; we only read it, and drop it on 401.

use gloo_storage::{LocalStorage, Storage};

/// Source of the bearer token, and what to do once the server rejects it
pub trait AuthSession {
    fn token(&self) -> Option<String>;

    /// Forget the token and send the user to log in again
    fn expire(&self);
}

/// Token in browser local storage; expiry redirects to the login page
pub struct BrowserSession {
    token_key: String,
    login_path: String,
}

impl BrowserSession {
    pub fn new(token_key: impl Into<String>, login_path: impl Into<String>) -> Self {
        Self {
            token_key: token_key.into(),
            login_path: login_path.into(),
        }
    }
}

impl AuthSession for BrowserSession {
    fn token(&self) -> Option<String> {
        LocalStorage::raw()
            .get_item(&self.token_key)
            .ok()
            .flatten()
            .filter(|token| !token.is_empty())
    }

    fn expire(&self) {
        LocalStorage::delete(&self.token_key);
        redirect_to(&self.login_path);
    }
}

/// In-memory session for tests
#[cfg(test)]
#[derive(Default)]
pub struct MemorySession {
    token: std::cell::RefCell<Option<String>>,
    expired: std::cell::Cell<bool>,
}

#[cfg(test)]
impl MemorySession {
    pub fn with_token(token: &str) -> Self {
        Self {
            token: std::cell::RefCell::new(Some(token.to_string())),
            ..Self::default()
        }
    }

    pub fn expired(&self) -> bool {
        self.expired.get()
    }
}

#[cfg(test)]
impl AuthSession for MemorySession {
    fn token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn expire(&self) {
        self.token.borrow_mut().take();
        self.expired.set(true);
    }
}

/// Hard navigation, leaving the single-page app
fn redirect_to(path: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(err) = window.location().set_href(path) {
        log::error!("Redirect to {} failed: {:?}", path, err);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_token_round_trip_through_local_storage() {
        let session = BrowserSession::new("leadsTestToken", "/login");
        LocalStorage::delete("leadsTestToken");
        assert_eq!(session.token(), None);

        LocalStorage::raw().set_item("leadsTestToken", "abc").unwrap();
        assert_eq!(session.token().as_deref(), Some("abc"));
        LocalStorage::delete("leadsTestToken");
    }

    #[wasm_bindgen_test]
    fn test_empty_token_is_absent() {
        let session = BrowserSession::new("leadsEmptyToken", "/login");
        LocalStorage::raw().set_item("leadsEmptyToken", "").unwrap();
        assert_eq!(session.token(), None);
        LocalStorage::delete("leadsEmptyToken");
    }
}
