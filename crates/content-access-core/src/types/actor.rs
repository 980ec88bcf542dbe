//! Actors requesting an access decision.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::ids::ActorId;
use super::permission::Permission;

/// The identity and held permissions of whoever is asking.
///
/// Permission names are stored verbatim. An actor built directly by the
/// host may carry names the decision never consults (`access content`,
/// ...); they are kept and ignored. Actors loaded from a site
/// configuration only hold the grant permissions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    id: ActorId,
    #[serde(default)]
    permissions: BTreeSet<String>,
}

impl Actor {
    /// Creates an actor holding no permissions.
    pub fn new(id: impl Into<ActorId>) -> Self {
        Self {
            id: id.into(),
            permissions: BTreeSet::new(),
        }
    }

    /// Creates an actor from an identity and an iterator of permission names.
    ///
    /// # Examples
    ///
    /// ```
    /// use content_access_core::{Actor, Permission};
    ///
    /// let actor = Actor::with_permissions("u1", ["grant-own-content-access"]);
    /// assert!(actor.has_permission(Permission::GrantOwnContentAccess));
    /// assert!(!actor.has_permission(Permission::GrantContentAccess));
    /// ```
    pub fn with_permissions<I, S>(id: impl Into<ActorId>, permissions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            permissions: permissions.into_iter().map(Into::into).collect(),
        }
    }

    /// Adds a permission, builder style.
    pub fn grant(mut self, permission: Permission) -> Self {
        self.permissions.insert(permission.as_str().to_string());
        self
    }

    /// Actor identity.
    pub fn id(&self) -> &ActorId {
        &self.id
    }

    /// Held permission names.
    pub fn permissions(&self) -> &BTreeSet<String> {
        &self.permissions
    }

    /// Returns `true` if the actor holds a permission by exact name.
    pub fn holds(&self, name: &str) -> bool {
        self.permissions.contains(name)
    }

    /// Returns `true` if the actor holds `permission`.
    pub fn has_permission(&self, permission: Permission) -> bool {
        self.holds(permission.as_str())
    }
}
