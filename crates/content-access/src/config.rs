//! TOML site configuration.
//!
//! A site configuration declares which content types have fine-grained
//! access control enabled, the roles the site knows, the actors and their
//! permissions, and the content items with their per-node role grants.
//! It is read once and turned into in-memory collaborators for an engine.
//!
//! ```toml
//! [types.article]
//! per_node = true
//!
//! [roles.editor]
//! label = "Editor"
//!
//! [actors.u1]
//! permissions = ["grant-own-content-access"]
//!
//! [items.42]
//! type = "article"
//! owner = "u1"
//!
//! [items.42.grants]
//! view = ["editor"]
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use content_access_core::{
    AccessOperation, Actor, ActorId, ContentItem, ContentType, Error, ItemId, Permission, Result,
    Role, RoleId,
};
use serde::{Deserialize, Serialize};

use crate::engine::AccessDecisionEngine;
use crate::memory::{MemoryRoleDirectory, MemorySettings};

/// Project name, used for the default config directory.
pub const PROJECT_NAME: &str = "content-access";

/// Default config file name inside the project config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Settings for one content type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeSettings {
    /// Whether fine-grained (per-node) access control is enabled.
    #[serde(default)]
    pub per_node: bool,
}

/// A role declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleSettings {
    /// Human-readable label.
    pub label: String,
}

/// An actor declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorSettings {
    /// Permission names held by the actor.
    #[serde(default)]
    pub permissions: Vec<String>,
}

/// A content item declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSettings {
    /// Content type machine name.
    #[serde(rename = "type")]
    pub content_type: ContentType,
    /// Owning actor.
    pub owner: ActorId,
    /// Role IDs granted each operation, keyed by operation name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub grants: BTreeMap<String, Vec<RoleId>>,
}

/// A complete site configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Per-type settings. Types not listed are disabled.
    #[serde(default)]
    pub types: BTreeMap<ContentType, TypeSettings>,
    /// Known roles.
    #[serde(default)]
    pub roles: BTreeMap<RoleId, RoleSettings>,
    /// Known actors.
    #[serde(default)]
    pub actors: BTreeMap<ActorId, ActorSettings>,
    /// Known content items.
    #[serde(default)]
    pub items: BTreeMap<ItemId, ItemSettings>,
}

impl SiteConfig {
    /// Returns the default config path (`<config_dir>/content-access/config.toml`).
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(PROJECT_NAME).join(CONFIG_FILE_NAME))
    }

    /// Resolves the config path: the explicit path if given, else the default.
    pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
        explicit
            .map(Path::to_path_buf)
            .or_else(Self::default_config_path)
    }

    /// Reads and validates a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        let config = Self::from_toml_str(&content)?;
        log::info!(
            "Loaded site configuration from {} ({} types, {} roles, {} actors, {} items)",
            path.display(),
            config.types.len(),
            config.roles.len(),
            config.actors.len(),
            config.items.len()
        );
        Ok(config)
    }

    /// Parses and validates a configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks cross-references and names that TOML parsing cannot.
    pub fn validate(&self) -> Result<()> {
        for (actor_id, actor) in &self.actors {
            for name in &actor.permissions {
                if let Err(e) = name.parse::<Permission>() {
                    return Err(Error::config(format!("actors.{actor_id}: {e}")));
                }
            }
        }

        for (item_id, item) in &self.items {
            if !self.types.contains_key(&item.content_type) {
                return Err(Error::config(format!(
                    "items.{item_id} references undeclared type '{}'",
                    item.content_type
                )));
            }
            for operation in item.grants.keys() {
                if let Err(e) = operation.parse::<AccessOperation>() {
                    return Err(Error::config(format!("items.{item_id}.grants: {e}")));
                }
            }
        }

        Ok(())
    }

    /// Builds the settings store described by this configuration.
    pub fn settings(&self) -> Result<MemorySettings> {
        let mut settings = MemorySettings::new();
        for (content_type, type_settings) in &self.types {
            settings.set_type(content_type.clone(), type_settings.per_node);
        }
        for (item_id, item) in &self.items {
            for (operation, roles) in &item.grants {
                let operation: AccessOperation = operation.parse()?;
                settings.set_node_roles(item_id.clone(), operation, roles.iter().cloned());
            }
        }
        Ok(settings)
    }

    /// Builds the role directory described by this configuration.
    pub fn role_directory(&self) -> MemoryRoleDirectory {
        let mut roles = MemoryRoleDirectory::new();
        for (role_id, role) in &self.roles {
            roles.register(Role::new(role_id.clone(), role.label.clone()));
        }
        roles
    }

    /// Builds an engine over this configuration's settings and roles.
    pub fn engine(&self) -> Result<AccessDecisionEngine<MemorySettings, MemoryRoleDirectory>> {
        Ok(AccessDecisionEngine::with_held_permissions(
            self.settings()?,
            self.role_directory(),
        ))
    }

    /// Looks up a declared actor.
    pub fn actor(&self, id: &str) -> Result<Actor> {
        let actor_id = ActorId::new(id);
        let settings = self
            .actors
            .get(&actor_id)
            .ok_or_else(|| Error::ActorNotFound { id: id.to_string() })?;
        Ok(Actor::with_permissions(
            actor_id,
            settings.permissions.iter().cloned(),
        ))
    }

    /// Looks up a declared content item.
    pub fn item(&self, id: &str) -> Result<ContentItem> {
        let item_id = ItemId::new(id);
        let settings = self
            .items
            .get(&item_id)
            .ok_or_else(|| Error::ItemNotFound { id: id.to_string() })?;
        Ok(ContentItem::new(
            item_id,
            settings.content_type.clone(),
            settings.owner.clone(),
        ))
    }
}
