//! Session and navigation access control for the lab dashboard.
//!
//! This crate owns everything that decides *who* is signed in and *what* they
//! may open: roles, the seeded account directory, the session store, the
//! identity cache codec, and the navigation gate. It has no UI dependencies so
//! both the `client` (browser + SSR) and the server binary can share it.
//!
//! ARCHITECTURE
//! ============
//! `session::SessionStore` is the single writer of session state. The gate in
//! `gate` is a pure function over a `NavigationRequest` and a borrowed store,
//! so route components can re-evaluate it on every reactive change.

pub mod cache;
pub mod destination;
pub mod error;
pub mod gate;
pub mod identity;
pub mod role;
pub mod session;

pub use cache::{CACHE_KEY, IdentityCache, MemoryCache};
pub use destination::{Destination, NavigationRequest};
pub use error::AccessError;
pub use gate::{Outcome, decide};
pub use identity::{Account, Directory, Identity, SIMULATED_LATENCY};
pub use role::{Requirement, Role, RoleSet};
pub use session::{Attempt, SessionStore};
