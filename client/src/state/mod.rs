//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The session itself is `access::SessionStore`, provided as an
//! `RwSignal<SessionStore>` context. Presentation-only state (notices) lives
//! here so the access crate stays free of UI concerns.

pub mod notice;
