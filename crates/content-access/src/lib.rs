#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Content Access
//!
//! Decides whether an actor may configure or view the access restrictions
//! of a content item. The decision combines a per-content-type enablement
//! flag, a global grant permission, and an ownership-scoped grant.
//!
//! Provides:
//! - [`AccessDecisionEngine`] — the decision, generic over its collaborators
//! - [`SettingsStore`], [`PermissionProvider`], [`RoleDirectory`] — host lookups
//! - [`MemorySettings`], [`MemoryRoleDirectory`] — in-memory collaborators
//! - [`SiteConfig`] — TOML site configuration feeding the in-memory collaborators

pub mod config;
pub mod decision;
pub mod engine;
pub mod memory;
pub mod traits;

mod proptests;

// Re-exports for convenience
pub use config::SiteConfig;
pub use decision::AccessDecision;
pub use engine::{AccessDecisionEngine, RoleGrant};
pub use memory::{MemoryRoleDirectory, MemorySettings};
pub use traits::{HeldPermissions, PermissionProvider, RoleDirectory, SettingsStore};
