//! The access decision engine.
//!
//! [`AccessDecisionEngine`] decides whether an actor may configure or view
//! access restrictions on a content item:
//!
//! 1. If fine-grained access control is disabled for the item's type, deny.
//! 2. Grant if the actor holds `grant-content-access`.
//! 3. Grant if the actor holds `grant-own-content-access` and owns the item.
//! 4. Otherwise deny.
//!
//! The engine keeps no mutable state. Identical inputs always produce the
//! identical result, and one engine may be shared across threads.
//!
//! # Example
//!
//! ```
//! use content_access::{AccessDecisionEngine, MemoryRoleDirectory, MemorySettings};
//! use content_access_core::{Actor, ContentItem, Permission, TypeAccessPolicy};
//!
//! let settings = MemorySettings::new().with_type("article", true);
//! let engine = AccessDecisionEngine::with_held_permissions(settings, MemoryRoleDirectory::new());
//!
//! let item = ContentItem::new("42", "article", "u1");
//! let owner = Actor::new("u1").grant(Permission::GrantOwnContentAccess);
//! let other = Actor::new("u2").grant(Permission::GrantOwnContentAccess);
//!
//! assert!(engine.check(&item, &owner));
//! assert!(!engine.check(&item, &other));
//! assert!(!engine.has_access(&item, &owner, TypeAccessPolicy::Disabled));
//! ```

use content_access_core::{
    AccessOperation, Actor, ContentItem, Permission, RoleId, TypeAccessPolicy,
};

use crate::decision::AccessDecision;
use crate::traits::{HeldPermissions, PermissionProvider, RoleDirectory, SettingsStore};

/// A role recorded against an item, resolved for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleGrant {
    /// Role machine name as recorded in the per-node settings.
    pub role_id: RoleId,
    /// Label from the role directory, or `None` if the role no longer exists.
    pub label: Option<String>,
}

/// Decides access to per-item access settings.
///
/// Generic over its three read-only collaborators so hosts can plug in
/// their settings store, identity provider and role directory.
#[derive(Debug, Clone)]
pub struct AccessDecisionEngine<S, R, P = HeldPermissions> {
    settings: S,
    permissions: P,
    roles: R,
}

impl<S, R> AccessDecisionEngine<S, R, HeldPermissions>
where
    S: SettingsStore,
    R: RoleDirectory,
{
    /// Creates an engine that trusts the permission set carried by each actor.
    pub fn with_held_permissions(settings: S, roles: R) -> Self {
        Self::new(settings, HeldPermissions, roles)
    }
}

impl<S, R, P> AccessDecisionEngine<S, R, P>
where
    S: SettingsStore,
    R: RoleDirectory,
    P: PermissionProvider,
{
    /// Creates an engine from its collaborators.
    pub fn new(settings: S, permissions: P, roles: R) -> Self {
        Self {
            settings,
            permissions,
            roles,
        }
    }

    /// Decides access under an already-resolved `policy` for the item's type.
    pub fn has_access(&self, item: &ContentItem, actor: &Actor, policy: TypeAccessPolicy) -> bool {
        self.decide(item, actor, policy).is_granted()
    }

    /// Looks up the item type's policy in the settings store, then decides.
    pub fn check(&self, item: &ContentItem, actor: &Actor) -> bool {
        self.check_decision(item, actor).is_granted()
    }

    /// Like [`check`](Self::check), but reports which rule applied.
    pub fn check_decision(&self, item: &ContentItem, actor: &Actor) -> AccessDecision {
        let policy = self.settings.per_type_policy(item.content_type());
        self.decide(item, actor, policy)
    }

    /// Like [`has_access`](Self::has_access), but reports which rule applied.
    pub fn decide(
        &self,
        item: &ContentItem,
        actor: &Actor,
        policy: TypeAccessPolicy,
    ) -> AccessDecision {
        let decision = if !policy.is_enabled() {
            AccessDecision::TypeDisabled
        } else if self
            .permissions
            .actor_has_permission(actor, Permission::GrantContentAccess)
        {
            AccessDecision::GlobalGrant
        } else if self
            .permissions
            .actor_has_permission(actor, Permission::GrantOwnContentAccess)
            && item.is_owned_by(actor.id())
        {
            AccessDecision::OwnContentGrant
        } else {
            AccessDecision::NoGrant
        };

        log::debug!(
            "Access to item '{}' ({}) for actor '{}': {decision}",
            item.id(),
            item.content_type(),
            actor.id()
        );
        decision
    }

    /// Returns a role's label, or `None` if the role does not exist.
    pub fn resolve_role_label(&self, role_id: &RoleId) -> Option<String> {
        self.roles.load_role(role_id).map(|role| role.label)
    }

    /// Returns the roles recorded for `operation` on `item`, resolved for display.
    ///
    /// Returns `None` if `actor` may not see the item's access settings.
    /// Role IDs the directory no longer knows are kept with `label: None`.
    pub fn granted_roles(
        &self,
        item: &ContentItem,
        actor: &Actor,
        operation: AccessOperation,
    ) -> Option<Vec<RoleGrant>> {
        if !self.check(item, actor) {
            return None;
        }

        let grants = self
            .settings
            .per_node_roles(item, operation)
            .into_iter()
            .map(|role_id| {
                let label = self.resolve_role_label(&role_id);
                if label.is_none() {
                    log::warn!(
                        "Item '{}' grants '{operation}' to unknown role '{role_id}'",
                        item.id()
                    );
                }
                RoleGrant { role_id, label }
            })
            .collect();
        Some(grants)
    }
}

// ============================================================================
// Tests
// ============================================================================
