// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Operator session: current user plus API token.
//!
//! The session is held in memory and mirrored to [`Storage`] under two
//! keys. Changes are published on a watch channel so other parts of the
//! process can observe login and logout.

use super::storage::{MemoryStorage, Storage};
use crate::error::{AppError, Result};
use crate::models::User;
use anyhow::Context;
use std::sync::Arc;
use tokio::sync::watch;

/// Storage key for the serialized current user.
pub const CURRENT_USER_KEY: &str = "currentUser";
/// Storage key for the API token.
pub const AUTH_TOKEN_KEY: &str = "authToken";

/// An authenticated operator.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub user: User,
    pub token: String,
}

/// Shared handle to the session. Cloning is cheap.
#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn Storage>,
    current: Arc<watch::Sender<Option<Session>>>,
}

impl SessionStore {
    /// Open the store, restoring a previously persisted session.
    ///
    /// A session is restored only when both entries are present and the
    /// user record parses; anything else starts logged out.
    pub fn open(storage: Arc<dyn Storage>) -> Self {
        let restored = match restore(storage.as_ref()) {
            Ok(session) => session,
            Err(e) => {
                tracing::warn!(error = %e, "Discarding unreadable persisted session");
                None
            }
        };

        if let Some(session) = &restored {
            tracing::info!(username = %session.user.username, "Restored persisted session");
        }

        let (tx, _rx) = watch::channel(restored);
        Self {
            storage,
            current: Arc::new(tx),
        }
    }

    /// Store with no persistence.
    pub fn in_memory() -> Self {
        Self::open(Arc::new(MemoryStorage::new()))
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.borrow().is_some()
    }

    pub fn current_user(&self) -> Option<User> {
        self.current.borrow().as_ref().map(|s| s.user.clone())
    }

    pub fn token(&self) -> Option<String> {
        self.current.borrow().as_ref().map(|s| s.token.clone())
    }

    /// Observe session changes.
    pub fn subscribe(&self) -> watch::Receiver<Option<Session>> {
        self.current.subscribe()
    }

    /// Persist and publish a freshly authenticated session.
    ///
    /// Storage is written first; if that fails the in-memory session is
    /// left untouched.
    pub fn establish(&self, user: User, token: String) -> Result<()> {
        let user_json = serde_json::to_string(&user).context("encode current user")?;

        self.storage.set(CURRENT_USER_KEY, &user_json)?;
        self.storage.set(AUTH_TOKEN_KEY, &token)?;

        tracing::info!(username = %user.username, "Session established");
        self.current.send_replace(Some(Session { user, token }));
        Ok(())
    }

    /// Drop the session. The in-memory session is always cleared; a
    /// storage failure is reported after both removals were attempted.
    pub fn clear(&self) -> Result<()> {
        let previous = self.current.send_replace(None);
        if let Some(session) = previous {
            tracing::info!(username = %session.user.username, "Session cleared");
        }

        let user_result = self.storage.remove(CURRENT_USER_KEY);
        let token_result = self.storage.remove(AUTH_TOKEN_KEY);
        user_result.and(token_result)
    }

    pub fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }
}

fn restore(storage: &dyn Storage) -> Result<Option<Session>> {
    let (Some(user_json), Some(token)) =
        (storage.get(CURRENT_USER_KEY)?, storage.get(AUTH_TOKEN_KEY)?)
    else {
        return Ok(None);
    };

    let user: User = serde_json::from_str(&user_json)
        .map_err(|e| AppError::Storage(format!("decode user: {}", e)))?;

    Ok(Some(Session { user, token }))
}
