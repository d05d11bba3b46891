//! Signed-in identities and the seeded account directory.
//!
//! TRADE-OFFS
//! ==========
//! Secrets are compared as plaintext against a fixed in-memory list. This is a
//! demo directory, not a credential store; anything beyond a local demo needs
//! hashed secrets and a real identity provider.

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::AccessError;
use crate::role::Role;

/// Delay the UI waits before checking credentials, standing in for a network call.
pub const SIMULATED_LATENCY: Duration = Duration::from_millis(800);

/// The signed-in user's profile. Never carries secret material.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "IdentityRecord")]
pub struct Identity {
    pub id: String,
    pub display_name: String,
    pub email: String,
    pub role: Role,
}

/// Wire shape accepted when decoding. Older builds wrote `name`; some records
/// carry both keys, in which case `displayName` wins.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct IdentityRecord {
    id: String,
    display_name: Option<String>,
    name: Option<String>,
    email: String,
    role: Role,
}

impl TryFrom<IdentityRecord> for Identity {
    type Error = &'static str;

    fn try_from(record: IdentityRecord) -> Result<Self, Self::Error> {
        let display_name = record.display_name.or(record.name).ok_or("missing field `displayName`")?;
        Ok(Self { id: record.id, display_name, email: record.email, role: record.role })
    }
}

/// A directory entry: an identity plus the secret that unlocks it.
#[derive(Clone, Debug)]
pub struct Account {
    pub identity: Identity,
    pub secret: String,
}

impl Account {
    fn seed(id: &str, display_name: &str, email: &str, secret: &str, role: Role) -> Self {
        Self {
            identity: Identity {
                id: id.to_owned(),
                display_name: display_name.to_owned(),
                email: email.to_owned(),
                role,
            },
            secret: secret.to_owned(),
        }
    }
}

/// Fixed list of accounts that `verify` matches against.
#[derive(Clone, Debug)]
pub struct Directory {
    accounts: Vec<Account>,
}

impl Directory {
    fn new(accounts: Vec<Account>) -> Self {
        Self { accounts }
    }

    /// The three demo accounts, one per substantive role.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(vec![
            Account::seed("1", "Admin User", "admin@labsystem.com", "admin123", Role::Admin),
            Account::seed("2", "Lab Technician", "tech@labsystem.com", "tech123", Role::LabTechnician),
            Account::seed("3", "Receptionist", "reception@labsystem.com", "reception123", Role::Receptionist),
        ])
    }

    #[must_use]
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Match `email` and `secret` exactly (case-sensitive) and return the identity.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::InvalidCredentials`] when no account matches both.
    pub fn verify(&self, email: &str, secret: &str) -> Result<Identity, AccessError> {
        self.accounts
            .iter()
            .find(|account| account.identity.email == email && account.secret == secret)
            .map(|account| account.identity.clone())
            .ok_or(AccessError::InvalidCredentials)
    }
}

impl Default for Directory {
    fn default() -> Self {
        Self::seeded()
    }
}
