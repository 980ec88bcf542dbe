//! Grant permissions recognised by the access decision.
//!
//! The permission strings are part of the external contract and must
//! match what the host permission system stores exactly.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A permission consulted by the access decision.
///
/// # Examples
///
/// ```
/// use content_access_core::Permission;
///
/// assert_eq!(Permission::GrantContentAccess.as_str(), "grant-content-access");
/// let parsed: Permission = "grant-own-content-access".parse().unwrap();
/// assert_eq!(parsed, Permission::GrantOwnContentAccess);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Permission {
    /// Manage access settings on any content item.
    #[serde(rename = "grant-content-access")]
    GrantContentAccess,
    /// Manage access settings only on content items the actor owns.
    #[serde(rename = "grant-own-content-access")]
    GrantOwnContentAccess,
}

impl Permission {
    /// Every permission, in declaration order.
    pub const ALL: [Permission; 2] = [
        Permission::GrantContentAccess,
        Permission::GrantOwnContentAccess,
    ];

    /// Returns the contract name of the permission.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GrantContentAccess => "grant-content-access",
            Self::GrantOwnContentAccess => "grant-own-content-access",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Permission {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| Error::UnknownPermission {
                name: s.to_string(),
            })
    }
}
