//! Caller context handed to the wizard.
//!
//! The credential itself is owned by the auth layer. The session only
//! records whether one is present and which role the account holds.

use serde::{Deserialize, Serialize};

/// Account role as reported by the auth layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Player,
    VenueOperator,
}

/// Explicit per-call context: credential presence plus the current role.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Session {
    has_credential: bool,
    role: Option<Role>,
}

impl Session {
    /// No credential yet.
    pub const fn anonymous() -> Self {
        Self {
            has_credential: false,
            role: None,
        }
    }

    /// A credential is present; the role may not be known yet.
    pub const fn authenticated(role: Option<Role>) -> Self {
        Self {
            has_credential: true,
            role,
        }
    }

    pub const fn has_credential(&self) -> bool {
        self.has_credential
    }

    pub const fn role(&self) -> Option<Role> {
        self.role
    }

    /// Whether this session may submit operator onboarding steps.
    ///
    /// Accounts whose role is not known yet are allowed.
    pub fn may_onboard_venue(&self) -> bool {
        matches!(self.role, None | Some(Role::VenueOperator))
    }
}
