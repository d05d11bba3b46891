//! Session store: the single writer of "who is signed in".
//!
//! DESIGN
//! ======
//! Sign-in is split into `begin_attempt` and `complete` so callers can await
//! the simulated latency between the two without holding a borrow. Every
//! `end_session` bumps an epoch; an attempt that began under an older epoch
//! is dropped on completion instead of resurrecting a session the user just
//! closed. Concurrent attempts under the same epoch resolve last-completion-wins.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::cache::{IdentityCache, decode_identity, encode_identity};
use crate::error::AccessError;
use crate::identity::{Directory, Identity};
use crate::role::{Role, RoleSet};

/// Token handed out by [`SessionStore::begin_attempt`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Attempt {
    epoch: u64,
}

/// Current session state. Starts in the loading phase until `rehydrate` runs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionStore {
    identity: Option<Identity>,
    rehydrated: bool,
    epoch: u64,
}

impl SessionStore {
    /// A store that has not yet read the identity cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that is already loaded with the given identity (or none).
    #[must_use]
    pub fn loaded(identity: Option<Identity>) -> Self {
        Self { identity, rehydrated: true, epoch: 0 }
    }

    /// Restore the identity saved by an earlier visit. Runs once; later calls are no-ops.
    pub fn rehydrate(&mut self, cache: &impl IdentityCache) {
        if self.rehydrated {
            return;
        }
        self.rehydrated = true;

        let Some(raw) = cache.read() else {
            tracing::debug!("no cached identity");
            return;
        };
        match decode_identity(&raw) {
            Ok(identity) => {
                tracing::info!(user_id = %identity.id, role = %identity.role, "session restored from cache");
                self.identity = Some(identity);
            }
            Err(e) => {
                tracing::warn!(error = %e, "discarding cached identity");
                cache.clear();
            }
        }
    }

    /// Start a sign-in attempt.
    #[must_use]
    pub fn begin_attempt(&self) -> Attempt {
        Attempt { epoch: self.epoch }
    }

    /// Commit the result of a sign-in attempt.
    ///
    /// A successful verdict becomes the current session and is written to
    /// `cache`. A failed verdict leaves the session untouched.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::Superseded`] when the session ended after
    /// `attempt` began, whatever the verdict. Otherwise propagates the
    /// verdict's error.
    pub fn complete(
        &mut self,
        attempt: Attempt,
        verdict: Result<Identity, AccessError>,
        cache: &impl IdentityCache,
    ) -> Result<Identity, AccessError> {
        if attempt.epoch != self.epoch {
            tracing::info!(accepted = verdict.is_ok(), "sign-in finished after logout; dropping");
            return Err(AccessError::Superseded);
        }
        let identity = match verdict {
            Ok(identity) => identity,
            Err(e) => {
                tracing::warn!(error = %e, "sign-in rejected");
                return Err(e);
            }
        };

        match encode_identity(&identity) {
            Ok(raw) => cache.write(&raw),
            Err(e) => tracing::warn!(error = %e, "failed to cache identity"),
        }
        tracing::info!(user_id = %identity.id, role = %identity.role, "session started");
        self.identity = Some(identity.clone());
        self.rehydrated = true;
        Ok(identity)
    }

    /// Verify credentials against `directory` and start a session in one step.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::InvalidCredentials`] when no account matches.
    pub fn authenticate(
        &mut self,
        directory: &Directory,
        cache: &impl IdentityCache,
        email: &str,
        secret: &str,
    ) -> Result<Identity, AccessError> {
        let attempt = self.begin_attempt();
        let verdict = directory.verify(email, secret);
        self.complete(attempt, verdict, cache)
    }

    /// Sign out. Always succeeds, even with no active session.
    pub fn end_session(&mut self, cache: &impl IdentityCache) {
        if let Some(identity) = self.identity.take() {
            tracing::info!(user_id = %identity.id, "session ended");
        }
        self.epoch += 1;
        self.rehydrated = true;
        cache.clear();
    }

    /// Whether the current role is one of `allowed`. False when signed out.
    #[must_use]
    pub fn has_permission(&self, allowed: RoleSet) -> bool {
        self.role().is_some_and(|role| allowed.contains(role))
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    /// True until the identity cache has been read.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        !self.rehydrated
    }

    #[must_use]
    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.identity.as_ref().map(|identity| identity.role)
    }
}
