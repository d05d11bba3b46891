//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Public pages (login, unauthorized, not-found) render directly from the
//! router. Protected screens render through `components::guard::Guarded`,
//! which wraps `screen::ScreenPage` in the dashboard layout.

pub mod login;
pub mod not_found;
pub mod screen;
pub mod unauthorized;
