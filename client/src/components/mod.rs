//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the dashboard chrome and apply the navigation gate while
//! reading/writing shared state from Leptos context providers.

pub mod guard;
pub mod layout;
pub mod notice_bar;
