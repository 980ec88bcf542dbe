//! Error paths reachable from the public API.

use content_access::SiteConfig;
use content_access_core::{AccessOperation, Error, Permission};

#[test]
fn test_unknown_permission_name() {
    let err = "grant own content access simple"
        .parse::<Permission>()
        .unwrap_err();
    assert!(matches!(err, Error::UnknownPermission { .. }));
}

#[test]
fn test_unknown_operation_name() {
    let err = "view_any".parse::<AccessOperation>().unwrap_err();
    assert_eq!(err.to_string(), "Unknown operation: view_any");
}

#[test]
fn test_missing_actor() {
    let config = SiteConfig::default();
    let err = config.actor("u1").unwrap_err();
    assert_eq!(err.to_string(), "Actor not found: u1");
    assert!(err.is_not_found());
}

#[test]
fn test_missing_item() {
    let config = SiteConfig::default();
    let err = config.item("42").unwrap_err();
    assert_eq!(err.to_string(), "Content item not found: 42");
}
