//! Error type shared by the session store and its collaborators.

/// Failures surfaced by [`crate::SessionStore`] and the identity codec.
#[derive(Debug, thiserror::Error)]
pub enum AccessError {
    /// No seeded account matched the submitted email and secret.
    #[error("Invalid credentials")]
    InvalidCredentials,
    /// The session ended while the attempt was in flight; the result was dropped.
    #[error("sign-in attempt superseded by logout")]
    Superseded,
    /// The cached identity record could not be decoded.
    #[error("corrupt identity cache: {0}")]
    CorruptCache(#[from] serde_json::Error),
}
