// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Operator session state and its persistence.

pub mod storage;
pub mod store;

pub use storage::{FileStorage, MemoryStorage, Storage};
pub use store::{Session, SessionStore, AUTH_TOKEN_KEY, CURRENT_USER_KEY};
