//! In-memory implementations of the collaborator traits.
//!
//! Used by tests and by the CLI after a site configuration file has been
//! loaded. Both types are plain maps populated up front and read-only once
//! handed to an engine.

use std::collections::BTreeMap;

use content_access_core::{
    AccessOperation, ContentItem, ContentType, ItemId, Role, RoleId, TypeAccessPolicy,
};

use crate::traits::{RoleDirectory, SettingsStore};

/// Per-type enablement flags and per-node role grants held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySettings {
    types: BTreeMap<ContentType, bool>,
    nodes: BTreeMap<ItemId, BTreeMap<AccessOperation, Vec<RoleId>>>,
}

impl MemorySettings {
    /// Creates an empty store. Every content type is disabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the per-type flag, builder style.
    pub fn with_type(mut self, content_type: impl Into<ContentType>, enabled: bool) -> Self {
        self.set_type(content_type, enabled);
        self
    }

    /// Sets the per-type flag.
    pub fn set_type(&mut self, content_type: impl Into<ContentType>, enabled: bool) {
        self.types.insert(content_type.into(), enabled);
    }

    /// Records the roles granted `operation` on an item, builder style.
    pub fn with_node_roles<I, R>(
        mut self,
        item: impl Into<ItemId>,
        operation: AccessOperation,
        roles: I,
    ) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<RoleId>,
    {
        self.set_node_roles(item, operation, roles);
        self
    }

    /// Records the roles granted `operation` on an item, replacing any previous list.
    pub fn set_node_roles<I, R>(
        &mut self,
        item: impl Into<ItemId>,
        operation: AccessOperation,
        roles: I,
    ) where
        I: IntoIterator<Item = R>,
        R: Into<RoleId>,
    {
        self.nodes
            .entry(item.into())
            .or_default()
            .insert(operation, roles.into_iter().map(Into::into).collect());
    }

    /// Number of content types with a recorded flag.
    pub fn type_count(&self) -> usize {
        self.types.len()
    }
}

impl SettingsStore for MemorySettings {
    fn per_type_policy(&self, content_type: &ContentType) -> TypeAccessPolicy {
        self.types.get(content_type).copied().into()
    }

    fn per_node_roles(&self, item: &ContentItem, operation: AccessOperation) -> Vec<RoleId> {
        self.nodes
            .get(item.id())
            .and_then(|ops| ops.get(&operation))
            .cloned()
            .unwrap_or_default()
    }
}

/// Role directory held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryRoleDirectory {
    roles: BTreeMap<RoleId, Role>,
}

impl MemoryRoleDirectory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a role, builder style.
    pub fn with_role(mut self, id: impl Into<RoleId>, label: impl Into<String>) -> Self {
        self.register(Role::new(id, label));
        self
    }

    /// Registers a role, returning the one it replaced.
    pub fn register(&mut self, role: Role) -> Option<Role> {
        self.roles.insert(role.id.clone(), role)
    }

    /// Number of registered roles.
    pub fn len(&self) -> usize {
        self.roles.len()
    }

    /// Returns `true` if no roles are registered.
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}

impl RoleDirectory for MemoryRoleDirectory {
    fn load_role(&self, role_id: &RoleId) -> Option<Role> {
        self.roles.get(role_id).cloned()
    }
}
