//! Core types for content-access decisions.

pub mod actor;
pub mod content;
pub mod ids;
pub mod operation;
pub mod permission;
pub mod policy;
pub mod role;

pub use actor::Actor;
pub use content::ContentItem;
pub use ids::{ActorId, ContentType, ItemId, RoleId};
pub use operation::AccessOperation;
pub use permission::Permission;
pub use policy::TypeAccessPolicy;
pub use role::Role;
