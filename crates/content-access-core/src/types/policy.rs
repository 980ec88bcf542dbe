//! Per-content-type enablement of fine-grained access control.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether fine-grained access control is active for a content type.
///
/// A content type with no recorded setting is treated as [`Disabled`],
/// exactly like one that was switched off explicitly.
///
/// [`Disabled`]: TypeAccessPolicy::Disabled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeAccessPolicy {
    /// Fine-grained access control is on for the type.
    Enabled,
    /// Fine-grained access control is off, or was never configured.
    #[default]
    Disabled,
}

impl TypeAccessPolicy {
    /// Returns `true` if the policy is enabled.
    pub fn is_enabled(&self) -> bool {
        matches!(self, Self::Enabled)
    }
}

impl From<bool> for TypeAccessPolicy {
    fn from(enabled: bool) -> Self {
        if enabled {
            Self::Enabled
        } else {
            Self::Disabled
        }
    }
}

impl From<Option<bool>> for TypeAccessPolicy {
    fn from(setting: Option<bool>) -> Self {
        setting.unwrap_or(false).into()
    }
}

impl fmt::Display for TypeAccessPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Enabled => write!(f, "enabled"),
            Self::Disabled => write!(f, "disabled"),
        }
    }
}
