// src/access.rs

//! Index-style access over any [`ConfigRepository`].
//!
//! Pure forwarding: `exists` is `has`, `read` is `get` with a null default,
//! `write` is `set`, and `delete` writes a null.

use serde_json::Value;

use crate::store::ConfigRepository;

#[derive(Debug)]
pub struct OffsetAccess<'a, C: ConfigRepository> {
    repo: &'a mut C,
}

impl<'a, C: ConfigRepository> OffsetAccess<'a, C> {
    pub fn new(repo: &'a mut C) -> Self {
        Self { repo }
    }

    pub fn exists(&mut self, key: &str) -> bool {
        self.repo.has(key)
    }

    pub fn read(&mut self, key: &str) -> Value {
        self.repo.get_or(key, Value::Null)
    }

    pub fn write(&mut self, key: &str, value: impl Into<Value>) {
        self.repo.set(key, value.into());
    }

    /// Leaves a `Null` at `key`; the key itself still exists afterwards.
    pub fn delete(&mut self, key: &str) {
        self.repo.set(key, Value::Null);
    }
}
