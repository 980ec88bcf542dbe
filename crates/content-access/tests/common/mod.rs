//! Common test utilities and harness for content-access integration tests.

use content_access::SiteConfig;
use std::path::PathBuf;
use tempfile::TempDir;

/// A small site: one enabled type, one disabled type, two items.
pub const SITE_TOML: &str = r#"
[types.article]
per_node = true

[types.page]
per_node = false

[roles.editor]
label = "Editor"

[roles.reviewer]
label = "Reviewer"

[actors.admin]
permissions = ["grant-content-access"]

[actors.alice]
permissions = ["grant-own-content-access"]

[actors.bob]
permissions = ["grant-own-content-access"]

[actors.guest]

[items.1]
type = "article"
owner = "alice"

[items.1.grants]
view = ["editor", "reviewer"]
update = ["editor", "deleted-role"]

[items.2]
type = "page"
owner = "alice"
"#;

/// Test harness holding a site config written to a temporary directory.
pub struct TestHarness {
    /// Keeps the temporary directory alive for the harness lifetime.
    _dir: TempDir,
    /// Path of the written config file.
    pub path: PathBuf,
}

impl TestHarness {
    /// Writes [`SITE_TOML`] to a fresh temporary directory.
    pub fn new() -> Self {
        Self::with_toml(SITE_TOML)
    }

    /// Writes custom TOML to a fresh temporary directory.
    pub fn with_toml(toml: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("config.toml");
        std::fs::write(&path, toml).expect("write config");
        Self { _dir: dir, path }
    }

    /// Loads the written config.
    pub fn load(&self) -> SiteConfig {
        SiteConfig::load(&self.path).expect("config should load")
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}
