//! Identity cache abstraction and its JSON record codec.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser keeps the signed-in identity under one storage key so a reload
//! does not sign the user out. The store only sees raw strings; encoding and
//! validation live here so every backend agrees on the record format.

#[cfg(test)]
#[path = "cache_test.rs"]
mod cache_test;

use std::sync::{Mutex, PoisonError};

use crate::error::AccessError;
use crate::identity::Identity;

/// Storage key for the cached identity record.
pub const CACHE_KEY: &str = "labUser";

/// Single-slot key-value storage for the cached identity record.
pub trait IdentityCache {
    /// Raw stored record, if any.
    fn read(&self) -> Option<String>;
    /// Replace the stored record.
    fn write(&self, raw: &str);
    /// Remove the stored record. Removing an absent record is a no-op.
    fn clear(&self);
}

/// In-process cache used by tests and server-side rendering.
#[derive(Debug, Default)]
pub struct MemoryCache {
    slot: Mutex<Option<String>>,
}

impl MemoryCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cache pre-loaded with a raw record, as if written by an earlier visit.
    #[must_use]
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self { slot: Mutex::new(Some(raw.into())) }
    }
}

impl IdentityCache for MemoryCache {
    fn read(&self) -> Option<String> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn write(&self, raw: &str) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(raw.to_owned());
    }

    fn clear(&self) {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner).take();
    }
}

/// Encode an identity as the cached JSON record.
///
/// # Errors
///
/// Returns [`AccessError::CorruptCache`] if serialization fails.
pub fn encode_identity(identity: &Identity) -> Result<String, AccessError> {
    Ok(serde_json::to_string(identity)?)
}

/// Decode a cached JSON record.
///
/// # Errors
///
/// Returns [`AccessError::CorruptCache`] for malformed JSON, missing fields,
/// or an unknown role name.
pub fn decode_identity(raw: &str) -> Result<Identity, AccessError> {
    Ok(serde_json::from_str(raw)?)
}
