#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Content Access Core
//!
//! Shared types and errors for per-content-type access decisions.
//! It has no internal dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`types`]: Identifiers, content items, actors, permissions, policies

pub mod error;
pub mod types;

// Re-exports for convenience
pub use error::{Error, Result};
pub use types::{
    AccessOperation, Actor, ActorId, ContentItem, ContentType, ItemId, Permission, Role, RoleId,
    TypeAccessPolicy,
};
