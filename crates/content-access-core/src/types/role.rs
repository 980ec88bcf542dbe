//! Roles and their display labels.

use serde::{Deserialize, Serialize};

use super::ids::RoleId;

/// A role as held by the external role directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    /// Machine name.
    pub id: RoleId,
    /// Human-readable label.
    pub label: String,
}

impl Role {
    /// Creates a role.
    pub fn new(id: impl Into<RoleId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }

    /// Display label.
    pub fn label(&self) -> &str {
        &self.label
    }
}
