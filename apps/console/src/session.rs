use std::cell::RefCell;
use std::collections::HashSet;
use std::fmt;
use std::rc::Rc;

use thiserror::Error;
use tracing::{info, warn};

pub const SESSION_KEY: &str = "aicrm_login";

const DEMO_USERNAME: &str = "admin";
const DEMO_PASSWORD: &str = "admin";

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("session storage unavailable: {0}")]
    Storage(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("Invalid credentials. Please use admin/admin")]
    InvalidCredentials,
    #[error("{field} is required")]
    MissingField { field: &'static str },
    #[error(transparent)]
    Session(#[from] SessionError),
}

/// Durable "logged in" flag storage.
pub trait SessionStore {
    fn contains(&self, key: &str) -> Result<bool, SessionError>;
    fn mark(&self, key: &str) -> Result<(), SessionError>;
    fn remove(&self, key: &str);
}

/// 浏览器 localStorage；键存在即视为已登录。
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalSessionStore;

#[cfg(target_arch = "wasm32")]
impl SessionStore for LocalSessionStore {
    fn contains(&self, key: &str) -> Result<bool, SessionError> {
        use gloo_storage::{LocalStorage, Storage};

        let raw = LocalStorage::raw();
        raw.get_item(key)
            .map(|value| value.is_some())
            .map_err(|err| SessionError::Storage(format!("{err:?}")))
    }

    fn mark(&self, key: &str) -> Result<(), SessionError> {
        use gloo_storage::{LocalStorage, Storage};

        LocalStorage::set(key, true).map_err(|err| SessionError::Storage(err.to_string()))
    }

    fn remove(&self, key: &str) {
        use gloo_storage::{LocalStorage, Storage};

        LocalStorage::delete(key);
    }
}

#[derive(Clone, Debug, Default)]
pub struct MemorySessionStore {
    keys: Rc<RefCell<HashSet<String>>>,
}

impl SessionStore for MemorySessionStore {
    fn contains(&self, key: &str) -> Result<bool, SessionError> {
        Ok(self.keys.borrow().contains(key))
    }

    fn mark(&self, key: &str) -> Result<(), SessionError> {
        self.keys.borrow_mut().insert(key.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.keys.borrow_mut().remove(key);
    }
}

/// Created once at startup and shared through the Dioxus context.
#[derive(Clone)]
pub struct Session {
    store: Rc<dyn SessionStore>,
    key: String,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session").field("key", &self.key).finish()
    }
}

impl PartialEq for Session {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.store, &other.store) && self.key == other.key
    }
}

impl Session {
    pub fn new(store: Rc<dyn SessionStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// localStorage in the browser, an in-memory store elsewhere.
    pub fn browser(key: impl Into<String>) -> Self {
        #[cfg(target_arch = "wasm32")]
        let store: Rc<dyn SessionStore> = Rc::new(LocalSessionStore);
        #[cfg(not(target_arch = "wasm32"))]
        let store: Rc<dyn SessionStore> = Rc::new(MemorySessionStore::default());
        Self::new(store, key)
    }

    /// 读取失败时按未登录处理。
    pub fn is_logged_in(&self) -> bool {
        match self.store.contains(&self.key) {
            Ok(present) => present,
            Err(err) => {
                warn!(error = %err, "session lookup failed");
                false
            }
        }
    }

    pub fn login(&self, username: &str, password: &str) -> Result<(), LoginError> {
        if username.trim().is_empty() {
            return Err(LoginError::MissingField { field: "username" });
        }
        if password.is_empty() {
            return Err(LoginError::MissingField { field: "password" });
        }
        if username != DEMO_USERNAME || password != DEMO_PASSWORD {
            warn!(%username, "rejected login");
            return Err(LoginError::InvalidCredentials);
        }

        self.store.mark(&self.key)?;
        info!(%username, "logged in");
        Ok(())
    }

    pub fn logout(&self) {
        self.store.remove(&self.key);
        info!("logged out");
    }
}
