//! Navigable screens and the permission each one demands.

#[cfg(test)]
#[path = "destination_test.rs"]
mod destination_test;

use crate::role::Requirement;

/// A screen the router can show.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Destination {
    Login,
    Unauthorized,
    Dashboard,
    Patients,
    Tests,
    Reports,
    Search,
    Backup,
    Settings,
    /// Catch-all for paths outside the known set.
    NotFound,
}

impl Destination {
    /// Sidebar entries, in display order.
    pub const NAVIGATION: [Destination; 7] = [
        Destination::Dashboard,
        Destination::Patients,
        Destination::Tests,
        Destination::Reports,
        Destination::Search,
        Destination::Backup,
        Destination::Settings,
    ];

    /// Stable identifier, also the router path segment.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Unauthorized => "unauthorized",
            Self::Dashboard => "dashboard",
            Self::Patients => "patients",
            Self::Tests => "tests",
            Self::Reports => "reports",
            Self::Search => "search",
            Self::Backup => "backup",
            Self::Settings => "settings",
            Self::NotFound => "not-found",
        }
    }

    /// Absolute router path.
    #[must_use]
    pub fn path(self) -> String {
        format!("/{}", self.id())
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Login => "Sign In",
            Self::Unauthorized => "Access Denied",
            Self::Dashboard => "Dashboard",
            Self::Patients => "Patients",
            Self::Tests => "Tests",
            Self::Reports => "Reports",
            Self::Search => "Global Search",
            Self::Backup => "Data Backup",
            Self::Settings => "Settings",
            Self::NotFound => "Page Not Found",
        }
    }

    /// One-line description shown under the screen heading.
    #[must_use]
    pub fn summary(self) -> &'static str {
        match self {
            Self::Login => "Enter your credentials to access the dashboard",
            Self::Unauthorized => "You don't have permission to access this page.",
            Self::Dashboard => "Overview of today's laboratory activity",
            Self::Patients => "Register patients and review their records",
            Self::Tests => "Manage the catalogue of laboratory tests",
            Self::Reports => "Browse and issue test reports",
            Self::Search => "Search across patients, tests, and reports",
            Self::Backup => "Export and restore laboratory data",
            Self::Settings => "System configuration and user management",
            Self::NotFound => "The page you requested does not exist.",
        }
    }

    /// Reachable in every session state, signed in or not.
    #[must_use]
    pub fn is_public(self) -> bool {
        matches!(self, Self::Login | Self::Unauthorized | Self::NotFound)
    }

    /// Roles allowed to open this destination.
    #[must_use]
    pub fn requirement(self) -> Requirement {
        match self {
            Self::Tests | Self::Search => Requirement::CLINICAL,
            Self::Backup | Self::Settings => Requirement::ADMIN_ONLY,
            _ => Requirement::default(),
        }
    }
}

/// A navigation attempt: where to go and which roles may go there.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigationRequest {
    pub destination: Destination,
    pub requirement: Requirement,
}

impl NavigationRequest {
    /// Request `destination` with its declared requirement.
    #[must_use]
    pub fn to(destination: Destination) -> Self {
        Self { destination, requirement: destination.requirement() }
    }
}
