//! A single engine shared across threads gives every thread the same answers.

use std::sync::Arc;
use std::thread;

use content_access_core::{Actor, ActorId, ContentItem, Permission};

use crate::common::TestHarness;

fn own_grant(id: impl Into<ActorId>) -> Actor {
    Actor::new(id).grant(Permission::GrantOwnContentAccess)
}

#[test]
fn test_shared_engine_across_threads() {
    let config = TestHarness::new().load();
    let engine = Arc::new(config.engine().unwrap());
    let item = config.item("1").unwrap();

    let handles: Vec<_> = (0..8)
        .map(|n| {
            let engine = Arc::clone(&engine);
            let item = item.clone();
            thread::spawn(move || {
                let owner = own_grant("alice");
                let other = own_grant(format!("user-{n}"));
                (0..100)
                    .map(|_| (engine.check(&item, &owner), engine.check(&item, &other)))
                    .all(|result| result == (true, false))
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}

#[test]
fn test_scoped_threads_borrow_engine() {
    let config = TestHarness::new().load();
    let engine = config.engine().unwrap();
    let page = ContentItem::new("2", "page", "alice");
    let admin = Actor::new("admin").grant(Permission::GrantContentAccess);

    thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| assert!(!engine.check(&page, &admin)));
        }
    });
}
