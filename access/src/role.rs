//! Roles, role sets, and per-destination permission requirements.

#[cfg(test)]
#[path = "role_test.rs"]
mod role_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Closed set of roles a signed-in user can hold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Role {
    Admin,
    LabTechnician,
    Receptionist,
    Guest,
}

impl Role {
    /// Every role, in declaration order.
    pub const ALL: [Role; 4] = [Role::Admin, Role::LabTechnician, Role::Receptionist, Role::Guest];

    /// Wire name, matching the serde representation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::LabTechnician => "labTechnician",
            Self::Receptionist => "receptionist",
            Self::Guest => "guest",
        }
    }

    /// Human-readable label for headers and badges.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Admin => "Administrator",
            Self::LabTechnician => "Lab Technician",
            Self::Receptionist => "Receptionist",
            Self::Guest => "Guest",
        }
    }

    fn bit(self) -> u8 {
        match self {
            Self::Admin => 0b0001,
            Self::LabTechnician => 0b0010,
            Self::Receptionist => 0b0100,
            Self::Guest => 0b1000,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A set of roles packed into a bitmask.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RoleSet(u8);

impl RoleSet {
    /// Admin only.
    pub const ADMIN_ONLY: RoleSet = RoleSet(0b0001);
    /// Admin and lab technician.
    pub const CLINICAL: RoleSet = RoleSet(0b0011);
    /// The three substantive (non-guest) roles.
    pub const STAFF: RoleSet = RoleSet(0b0111);
    pub const ALL: RoleSet = RoleSet(0b1111);

    #[must_use]
    pub fn contains(self, role: Role) -> bool {
        self.0 & role.bit() != 0
    }
}

/// Roles allowed to open a destination. Only the named constants exist, so
/// a requirement is never empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Requirement(RoleSet);

impl Requirement {
    pub const STAFF: Requirement = Requirement(RoleSet::STAFF);
    pub const CLINICAL: Requirement = Requirement(RoleSet::CLINICAL);
    pub const ADMIN_ONLY: Requirement = Requirement(RoleSet::ADMIN_ONLY);

    #[must_use]
    pub fn roles(self) -> RoleSet {
        self.0
    }
}

impl Default for Requirement {
    fn default() -> Self {
        Self::STAFF
    }
}
