//! Per-node access operations.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// An operation whose per-node role grants can be recorded on a content item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessOperation {
    /// View any content.
    View,
    /// View own content.
    ViewOwn,
    /// Edit any content.
    Update,
    /// Edit own content.
    UpdateOwn,
    /// Delete any content.
    Delete,
    /// Delete own content.
    DeleteOwn,
}

impl AccessOperation {
    /// Every operation, in the order an access form lists them.
    pub const ALL: [AccessOperation; 6] = [
        AccessOperation::View,
        AccessOperation::ViewOwn,
        AccessOperation::Update,
        AccessOperation::UpdateOwn,
        AccessOperation::Delete,
        AccessOperation::DeleteOwn,
    ];

    /// Machine name, as used in configuration keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::View => "view",
            Self::ViewOwn => "view_own",
            Self::Update => "update",
            Self::UpdateOwn => "update_own",
            Self::Delete => "delete",
            Self::DeleteOwn => "delete_own",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::View => "View any content",
            Self::ViewOwn => "View own content",
            Self::Update => "Edit any content",
            Self::UpdateOwn => "Edit own content",
            Self::Delete => "Delete any content",
            Self::DeleteOwn => "Delete own content",
        }
    }
}

impl fmt::Display for AccessOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccessOperation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| Error::UnknownOperation {
                name: s.to_string(),
            })
    }
}
