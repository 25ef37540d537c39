//! Session snapshot and the store that persists it.
//!
//! ARCHITECTURE
//! ============
//! `Session` is a plain value (token + free-form profile JSON) whose derived
//! flags are pure functions recomputed on every read. `SessionStore` owns a
//! `Session` and a `SessionStorage` and is the only thing that mutates
//! either. `SharedSession` is the cloneable handle injected into the router
//! and the API client.
//!
//! INVARIANTS
//! ==========
//! - An empty token means logged out, whatever the profile holds.
//! - Every mutation writes storage first and updates memory only after the
//!   write succeeded, so the two copies never disagree between reads.

use std::cell::RefCell;
use std::rc::Rc;

use serde_json::{Map, Value};

use super::storage::{MemoryStorage, SessionStorage, TOKEN_KEY, USER_INFO_KEY};
use crate::net::error::ClientError;
use crate::net::types::LoginResponse;

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;

pub const ROLE_TEACHER: &str = "TEACHER";
pub const ROLE_STUDENT: &str = "STUDENT";

// =============================================================================
// SNAPSHOT
// =============================================================================

/// Who is logged in, and with what credential.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: String,
    pub user_info: Value,
}

impl Default for Session {
    fn default() -> Self {
        Self { token: String::new(), user_info: empty_profile() }
    }
}

impl Session {
    pub fn is_logged_in(&self) -> bool {
        !self.token.is_empty()
    }

    /// The bearer credential, if logged in.
    pub fn token(&self) -> Option<&str> {
        if self.token.is_empty() { None } else { Some(&self.token) }
    }

    /// Profile `id`, falling back to `userId` (the login payload's name for it).
    pub fn user_id(&self) -> Option<String> {
        ["id", "userId"]
            .iter()
            .filter_map(|key| self.user_info.get(*key))
            .find_map(render_id)
    }

    /// Role codes listed in the profile. A missing or malformed `roles`
    /// sequence yields no roles.
    pub fn role_codes(&self) -> Vec<&str> {
        self.user_info
            .get("roles")
            .and_then(Value::as_array)
            .map(|roles| {
                roles
                    .iter()
                    .filter_map(|r| r.get("roleCode").and_then(Value::as_str))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn has_role(&self, code: &str) -> bool {
        self.role_codes().contains(&code)
    }

    pub fn is_teacher(&self) -> bool {
        self.has_role(ROLE_TEACHER)
    }

    pub fn is_student(&self) -> bool {
        self.has_role(ROLE_STUDENT)
    }
}

/// Identifiers arrive as numbers or strings. Falsy values (`null`, `false`,
/// zero of any numeric form, `""`) count as absent.
fn render_id(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64().is_some_and(|f| f == 0.0) => None,
        other => Some(other.to_string()),
    }
}

fn empty_profile() -> Value {
    Value::Object(Map::new())
}

// =============================================================================
// STORE
// =============================================================================

/// Owns the session and keeps it mirrored to storage.
pub struct SessionStore<S> {
    storage: S,
    session: Session,
}

impl<S: SessionStorage> SessionStore<S> {
    /// Restore the session from `storage`. Read failures and a malformed
    /// persisted profile fall back to the empty default; this never fails.
    pub fn load(storage: S) -> Self {
        let token = match storage.get(TOKEN_KEY) {
            Ok(token) => token.unwrap_or_default(),
            Err(e) => {
                tracing::warn!(error = %e, "persisted token unreadable; starting logged out");
                String::new()
            }
        };
        let user_info = match storage.get(USER_INFO_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Value>(&raw) {
                Ok(info) => info,
                Err(e) => {
                    tracing::warn!(error = %e, "persisted userInfo malformed; using empty profile");
                    empty_profile()
                }
            },
            Ok(None) => empty_profile(),
            Err(e) => {
                tracing::warn!(error = %e, "persisted userInfo unreadable; using empty profile");
                empty_profile()
            }
        };
        Self { storage, session: Session { token, user_info } }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Replace the bearer token. The value is not validated.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Storage` if persisting fails; the in-memory
    /// token is then unchanged.
    pub fn set_token(&mut self, token: impl Into<String>) -> Result<(), ClientError> {
        let token = token.into();
        self.storage.set(TOKEN_KEY, &token)?;
        self.session.token = token;
        Ok(())
    }

    /// Replace the profile. Any JSON value is accepted.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Storage` if persisting fails; the in-memory
    /// profile is then unchanged.
    pub fn set_user_info(&mut self, info: Value) -> Result<(), ClientError> {
        let raw = serde_json::to_string(&info).map_err(|e| ClientError::Storage(e.to_string()))?;
        self.storage.set(USER_INFO_KEY, &raw)?;
        self.session.user_info = info;
        Ok(())
    }

    /// Store the token and profile from a successful login.
    ///
    /// The profile is the login payload without its token. Both keys land
    /// or neither does: if the profile cannot be persisted, the previously
    /// stored token is put back.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Storage` if persisting either key fails; memory
    /// and storage then still hold the previous session.
    pub fn apply_login(&mut self, login: &LoginResponse) -> Result<(), ClientError> {
        let mut info = serde_json::to_value(login).map_err(|e| ClientError::Storage(e.to_string()))?;
        if let Value::Object(map) = &mut info {
            map.remove("token");
        }
        let raw = serde_json::to_string(&info).map_err(|e| ClientError::Storage(e.to_string()))?;

        let previous = self.storage.get(TOKEN_KEY)?;
        self.storage.set(TOKEN_KEY, &login.token)?;
        if let Err(e) = self.storage.set(USER_INFO_KEY, &raw) {
            let restored = match &previous {
                Some(token) => self.storage.set(TOKEN_KEY, token),
                None => self.storage.remove(TOKEN_KEY),
            };
            if let Err(undo) = restored {
                tracing::warn!(error = %undo, "previous token could not be restored");
            }
            return Err(e);
        }

        self.session = Session { token: login.token.clone(), user_info: info };
        tracing::info!(user_id = login.user_id, username = %login.username, "session started");
        Ok(())
    }

    /// Clear token and profile in memory and storage. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Storage` if the persisted keys cannot be
    /// removed; the in-memory session is then unchanged.
    pub fn logout(&mut self) -> Result<(), ClientError> {
        self.storage.remove_all(&[TOKEN_KEY, USER_INFO_KEY])?;
        let was_logged_in = self.session.is_logged_in();
        self.session = Session::default();
        if was_logged_in {
            tracing::info!("session cleared");
        }
        Ok(())
    }
}

// =============================================================================
// SHARED HANDLE
// =============================================================================

type DynStore = SessionStore<Box<dyn SessionStorage>>;

/// Cloneable handle to one `SessionStore`, passed to the router guard and the
/// API client. Single-threaded: the UI event loop is the only writer.
#[derive(Clone)]
pub struct SharedSession {
    inner: Rc<RefCell<DynStore>>,
}

impl SharedSession {
    pub fn load(storage: impl SessionStorage + 'static) -> Self {
        let boxed: Box<dyn SessionStorage> = Box::new(storage);
        Self { inner: Rc::new(RefCell::new(SessionStore::load(boxed))) }
    }

    /// A logged-out session backed by process memory.
    pub fn in_memory() -> Self {
        Self::load(MemoryStorage::new())
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> Session {
        self.inner.borrow().session().clone()
    }

    pub fn token(&self) -> Option<String> {
        self.inner.borrow().session().token().map(str::to_owned)
    }

    pub fn is_logged_in(&self) -> bool {
        self.inner.borrow().session().is_logged_in()
    }

    /// # Errors
    ///
    /// See [`SessionStore::set_token`].
    pub fn set_token(&self, token: impl Into<String>) -> Result<(), ClientError> {
        self.inner.borrow_mut().set_token(token)
    }

    /// # Errors
    ///
    /// See [`SessionStore::set_user_info`].
    pub fn set_user_info(&self, info: Value) -> Result<(), ClientError> {
        self.inner.borrow_mut().set_user_info(info)
    }

    /// # Errors
    ///
    /// See [`SessionStore::apply_login`].
    pub fn apply_login(&self, login: &LoginResponse) -> Result<(), ClientError> {
        self.inner.borrow_mut().apply_login(login)
    }

    /// # Errors
    ///
    /// See [`SessionStore::logout`].
    pub fn logout(&self) -> Result<(), ClientError> {
        self.inner.borrow_mut().logout()
    }

    /// Run `f` against the underlying storage.
    pub fn with_storage<R>(&self, f: impl FnOnce(&dyn SessionStorage) -> R) -> R {
        let store = self.inner.borrow();
        f(&**store.storage())
    }
}

impl std::fmt::Debug for SharedSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let store = self.inner.borrow();
        f.debug_struct("SharedSession")
            .field("logged_in", &store.session().is_logged_in())
            .field("user_id", &store.session().user_id())
            .finish()
    }
}
