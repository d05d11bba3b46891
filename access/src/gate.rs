//! Navigation gate: decides what a navigation attempt may show.
//!
//! `decide` is pure and total. Every (request, session) pair maps to exactly
//! one `Outcome`, so callers re-run it on every session change rather than
//! caching decisions.

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

use crate::destination::{Destination, NavigationRequest};
use crate::session::SessionStore;

/// Result of evaluating a navigation request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The session has not been restored yet; show a neutral placeholder.
    Loading,
    /// Show the destination.
    Render(Destination),
    /// No one is signed in.
    RedirectToLogin,
    /// Signed in, but the role is not allowed here.
    RedirectToUnauthorized,
}

impl Outcome {
    /// Router path to replace the current location with, if this is a redirect.
    #[must_use]
    pub fn redirect_path(self) -> Option<String> {
        match self {
            Self::RedirectToLogin => Some(Destination::Login.path()),
            Self::RedirectToUnauthorized => Some(Destination::Unauthorized.path()),
            Self::Loading | Self::Render(_) => None,
        }
    }
}

/// Evaluate `request` against `session`.
#[must_use]
pub fn decide(request: &NavigationRequest, session: &SessionStore) -> Outcome {
    let destination = request.destination;
    // Public screens must stay reachable or redirects would loop.
    if destination.is_public() {
        return Outcome::Render(destination);
    }
    if session.is_loading() {
        return Outcome::Loading;
    }
    if !session.is_authenticated() {
        return Outcome::RedirectToLogin;
    }
    if session.has_permission(request.requirement.roles()) {
        Outcome::Render(destination)
    } else {
        Outcome::RedirectToUnauthorized
    }
}
