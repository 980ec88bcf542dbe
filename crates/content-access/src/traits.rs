//! Read-only capabilities the engine consumes from its host.
//!
//! Each trait is a narrow lookup the host environment implements (a
//! settings store, an identity provider, a role directory). The engine
//! never writes through them.
//!
//! # Architecture
//!
//! ```text
//! SettingsStore ──────┐
//! PermissionProvider ─┼──► AccessDecisionEngine::has_access() ──► bool
//! RoleDirectory ──────┘
//! ```

use std::sync::Arc;

use content_access_core::{
    AccessOperation, Actor, ContentItem, ContentType, Permission, Role, RoleId, TypeAccessPolicy,
};

/// Source of administrator-configured access settings.
pub trait SettingsStore: Send + Sync {
    /// Returns whether fine-grained access control is enabled for `content_type`.
    ///
    /// Implementations return [`TypeAccessPolicy::Disabled`] for types they
    /// have no setting for.
    fn per_type_policy(&self, content_type: &ContentType) -> TypeAccessPolicy;

    /// Returns the role IDs recorded for `operation` on a single item.
    ///
    /// Stores that keep no per-node settings can rely on the default,
    /// which records nothing.
    fn per_node_roles(&self, _item: &ContentItem, _operation: AccessOperation) -> Vec<RoleId> {
        Vec::new()
    }
}

/// Answers whether an actor holds a permission.
pub trait PermissionProvider: Send + Sync {
    /// Returns `true` if `actor` holds `permission`.
    fn actor_has_permission(&self, actor: &Actor, permission: Permission) -> bool;
}

/// Directory of roles keyed by machine name.
pub trait RoleDirectory: Send + Sync {
    /// Loads a role, or `None` if no such role exists.
    fn load_role(&self, role_id: &RoleId) -> Option<Role>;
}

/// Permission provider that reads the permission set carried by the actor.
///
/// This is the provider to use when the host resolves permissions before
/// calling the engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeldPermissions;

impl PermissionProvider for HeldPermissions {
    fn actor_has_permission(&self, actor: &Actor, permission: Permission) -> bool {
        actor.has_permission(permission)
    }
}

// ============================================================================
// Forwarding impls
// ============================================================================

impl<T: SettingsStore + ?Sized> SettingsStore for &T {
    fn per_type_policy(&self, content_type: &ContentType) -> TypeAccessPolicy {
        (**self).per_type_policy(content_type)
    }

    fn per_node_roles(&self, item: &ContentItem, operation: AccessOperation) -> Vec<RoleId> {
        (**self).per_node_roles(item, operation)
    }
}

impl<T: SettingsStore + ?Sized> SettingsStore for Arc<T> {
    fn per_type_policy(&self, content_type: &ContentType) -> TypeAccessPolicy {
        (**self).per_type_policy(content_type)
    }

    fn per_node_roles(&self, item: &ContentItem, operation: AccessOperation) -> Vec<RoleId> {
        (**self).per_node_roles(item, operation)
    }
}

impl<T: PermissionProvider + ?Sized> PermissionProvider for &T {
    fn actor_has_permission(&self, actor: &Actor, permission: Permission) -> bool {
        (**self).actor_has_permission(actor, permission)
    }
}

impl<T: PermissionProvider + ?Sized> PermissionProvider for Arc<T> {
    fn actor_has_permission(&self, actor: &Actor, permission: Permission) -> bool {
        (**self).actor_has_permission(actor, permission)
    }
}

impl<T: RoleDirectory + ?Sized> RoleDirectory for &T {
    fn load_role(&self, role_id: &RoleId) -> Option<Role> {
        (**self).load_role(role_id)
    }
}

impl<T: RoleDirectory + ?Sized> RoleDirectory for Arc<T> {
    fn load_role(&self, role_id: &RoleId) -> Option<Role> {
        (**self).load_role(role_id)
    }
}
