//! The engine over host-implemented collaborators instead of the in-memory ones.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use content_access::{AccessDecisionEngine, PermissionProvider, RoleDirectory, SettingsStore};
use content_access_core::{
    AccessOperation, Actor, ActorId, ContentItem, ContentType, Permission, Role, RoleId,
    TypeAccessPolicy,
};

/// Settings store where every type but one is enabled.
struct AllButPages;

impl SettingsStore for AllButPages {
    fn per_type_policy(&self, content_type: &ContentType) -> TypeAccessPolicy {
        (content_type.as_str() != "page").into()
    }
}

/// Identity provider that ignores the actor's carried set and uses its own table.
struct DirectoryPermissions {
    grants: HashMap<ActorId, HashSet<Permission>>,
}

impl PermissionProvider for DirectoryPermissions {
    fn actor_has_permission(&self, actor: &Actor, permission: Permission) -> bool {
        self.grants
            .get(actor.id())
            .is_some_and(|held| held.contains(&permission))
    }
}

/// Role directory that knows exactly one role.
struct OnlyAdmin;

impl RoleDirectory for OnlyAdmin {
    fn load_role(&self, role_id: &RoleId) -> Option<Role> {
        (role_id.as_str() == "administrator").then(|| Role::new("administrator", "Administrator"))
    }
}

fn provider() -> DirectoryPermissions {
    let mut grants = HashMap::new();
    grants.insert(
        ActorId::new("u1"),
        HashSet::from([Permission::GrantOwnContentAccess]),
    );
    grants.insert(ActorId::new("u9"), HashSet::from([Permission::GrantContentAccess]));
    DirectoryPermissions { grants }
}

#[test]
fn test_provider_overrides_carried_permissions() {
    let engine = AccessDecisionEngine::new(AllButPages, provider(), OnlyAdmin);
    let item = ContentItem::new("5", "article", "u2");

    // Carries the global grant, but the provider does not know about it.
    let pretender = Actor::new("u2").grant(Permission::GrantContentAccess);
    assert!(!engine.check(&item, &pretender));

    // Carries nothing, but the provider grants globally.
    assert!(engine.check(&item, &Actor::new("u9")));
}

#[test]
fn test_provider_own_grant() {
    let engine = AccessDecisionEngine::new(AllButPages, provider(), OnlyAdmin);
    let u1 = Actor::new("u1");
    assert!(engine.check(&ContentItem::new("5", "article", "u1"), &u1));
    assert!(!engine.check(&ContentItem::new("6", "article", "u2"), &u1));
    assert!(!engine.check(&ContentItem::new("7", "page", "u1"), &u1));
}

#[test]
fn test_shared_collaborators_through_arc() {
    let settings: Arc<dyn SettingsStore> = Arc::new(AllButPages);
    let roles: Arc<dyn RoleDirectory> = Arc::new(OnlyAdmin);
    let engine = AccessDecisionEngine::new(settings, provider(), roles);

    assert_eq!(
        engine.resolve_role_label(&RoleId::new("administrator")),
        Some("Administrator".to_string())
    );
    assert_eq!(engine.resolve_role_label(&RoleId::new("editor")), None);
}

#[test]
fn test_store_without_node_settings_reports_no_roles() {
    let engine = AccessDecisionEngine::new(AllButPages, provider(), OnlyAdmin);
    let item = ContentItem::new("5", "article", "u1");
    let grants = engine
        .granted_roles(&item, &Actor::new("u1"), AccessOperation::View)
        .unwrap();
    assert!(grants.is_empty());
}
