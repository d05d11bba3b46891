//! User-visible notices raised by sign-in and sign-out.
//!
//! SYSTEM CONTEXT
//! ==============
//! Session operations report their outcome here; `NoticeBar` renders the
//! latest one. Only the newest notice is kept.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

use access::{AccessError, Identity};

/// How long a notice stays on screen in the browser.
pub const NOTICE_TTL_MS: u64 = 5_000;

/// Visual tone of a notice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tone {
    #[default]
    Info,
    Error,
}

impl Tone {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Info => "notice notice--info",
            Self::Error => "notice notice--error",
        }
    }
}

/// A single notice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub body: String,
    pub tone: Tone,
}

impl Notice {
    #[must_use]
    pub fn signed_in(identity: &Identity) -> Self {
        Self {
            title: "Login successful".to_owned(),
            body: format!("Welcome back, {}!", identity.display_name),
            tone: Tone::Info,
        }
    }

    #[must_use]
    pub fn sign_in_failed(error: &AccessError) -> Self {
        Self { title: "Login failed".to_owned(), body: error.to_string(), tone: Tone::Error }
    }

    #[must_use]
    pub fn signed_out() -> Self {
        Self {
            title: "Logged out".to_owned(),
            body: "You have been logged out successfully".to_owned(),
            tone: Tone::Info,
        }
    }
}

/// Latest notice plus a sequence number so timers can tell notices apart.
#[derive(Clone, Debug, Default)]
pub struct NoticeState {
    pub current: Option<Notice>,
    pub seq: u64,
}

impl NoticeState {
    /// Show `notice`, replacing any current one. Returns its sequence number.
    pub fn push(&mut self, notice: Notice) -> u64 {
        self.seq += 1;
        self.current = Some(notice);
        self.seq
    }

    /// Hide the current notice.
    pub fn dismiss(&mut self) {
        self.current = None;
    }

    /// Hide the current notice only if it is still the one numbered `seq`.
    pub fn expire(&mut self, seq: u64) {
        if self.seq == seq {
            self.current = None;
        }
    }
}
