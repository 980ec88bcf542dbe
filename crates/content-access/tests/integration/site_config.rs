//! Integration tests for decisions driven by a site configuration file.

use content_access::AccessDecision;
use content_access_core::{AccessOperation, RoleId};

use crate::common::TestHarness;

#[test]
fn test_owner_with_own_grant_is_allowed() {
    let config = TestHarness::new().load();
    let engine = config.engine().unwrap();

    let item = config.item("1").unwrap();
    let alice = config.actor("alice").unwrap();

    assert!(engine.check(&item, &alice));
    assert_eq!(
        engine.check_decision(&item, &alice),
        AccessDecision::OwnContentGrant
    );
}

#[test]
fn test_non_owner_with_own_grant_is_denied() {
    let config = TestHarness::new().load();
    let engine = config.engine().unwrap();

    let item = config.item("1").unwrap();
    let bob = config.actor("bob").unwrap();

    assert_eq!(engine.check_decision(&item, &bob), AccessDecision::NoGrant);
}

#[test]
fn test_admin_allowed_on_enabled_type_only() {
    let config = TestHarness::new().load();
    let engine = config.engine().unwrap();
    let admin = config.actor("admin").unwrap();

    assert_eq!(
        engine.check_decision(&config.item("1").unwrap(), &admin),
        AccessDecision::GlobalGrant
    );
    assert_eq!(
        engine.check_decision(&config.item("2").unwrap(), &admin),
        AccessDecision::TypeDisabled
    );
}

#[test]
fn test_actor_without_permissions_is_denied() {
    let config = TestHarness::new().load();
    let engine = config.engine().unwrap();
    let guest = config.actor("guest").unwrap();

    assert!(guest.permissions().is_empty());
    assert!(!engine.check(&config.item("1").unwrap(), &guest));
}

#[test]
fn test_granted_roles_for_owner() {
    let config = TestHarness::new().load();
    let engine = config.engine().unwrap();
    let item = config.item("1").unwrap();
    let alice = config.actor("alice").unwrap();

    let view = engine
        .granted_roles(&item, &alice, AccessOperation::View)
        .expect("owner may see grants");
    let labels: Vec<_> = view.iter().map(|g| g.label.as_deref()).collect();
    assert_eq!(labels, vec![Some("Editor"), Some("Reviewer")]);

    let update = engine
        .granted_roles(&item, &alice, AccessOperation::Update)
        .expect("owner may see grants");
    assert_eq!(update[1].role_id, RoleId::new("deleted-role"));
    assert_eq!(update[1].label, None);
}

#[test]
fn test_granted_roles_hidden_from_non_owner() {
    let config = TestHarness::new().load();
    let engine = config.engine().unwrap();

    let item = config.item("1").unwrap();
    let bob = config.actor("bob").unwrap();
    assert!(
        engine
            .granted_roles(&item, &bob, AccessOperation::View)
            .is_none()
    );
}

#[test]
fn test_role_labels_from_config() {
    let config = TestHarness::new().load();
    let engine = config.engine().unwrap();

    let reviewer = engine.resolve_role_label(&RoleId::new("reviewer"));
    assert_eq!(reviewer.as_deref(), Some("Reviewer"));
    assert_eq!(engine.resolve_role_label(&RoleId::new("deleted-role")), None);
}

#[test]
fn test_invalid_file_fails_to_load() {
    let harness = TestHarness::with_toml("[actors.x]\npermissions = [\"administer nodes\"]\n");
    let err = content_access::SiteConfig::load(&harness.path).unwrap_err();
    assert!(err.to_string().contains("administer nodes"), "got: {err}");
}
