//! # Generator Configuration
//!
//! Settings read from a TOML file (by default `generators.toml` in the
//! working directory):
//!
//! ```toml
//! [generators]
//! pivot_stub = "stubs/pivot.stub"
//! migration_extension = "php"
//! ```
//!
//! Any `<kind>_stub` key names the stub for generator `<kind>`. Relative
//! stub paths resolve against the directory holding the configuration file.

use pivotgen_core::{FileSystem, GenerationError, GenerationResult, StubLocator};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Default configuration file name.
pub const DEFAULT_CONFIG_FILE: &str = "generators.toml";

/// Extension used when `migration_extension` is not configured.
pub const DEFAULT_MIGRATION_EXTENSION: &str = "php";

/// Suffix identifying stub keys in the `[generators]` table.
const STUB_KEY_SUFFIX: &str = "_stub";

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    generators: GeneratorsSection,
}

#[derive(Debug, Default, Deserialize)]
struct GeneratorsSection {
    #[serde(default)]
    migration_extension: Option<String>,

    #[serde(flatten)]
    stubs: BTreeMap<String, PathBuf>,
}

// ============================================================================
// GeneratorsConfig
// ============================================================================

/// Resolved `[generators]` configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratorsConfig {
    /// Stub paths keyed by generator kind (`"pivot"` for `pivot_stub`)
    stubs: BTreeMap<String, PathBuf>,

    /// Extension for generated migration files, without the dot
    migration_extension: Option<String>,
}

impl GeneratorsConfig {
    /// Empty configuration: bundled stubs, default extension
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse configuration text. Relative stub paths resolve against `base_dir`.
    pub fn from_toml_str(content: &str, base_dir: &Path, origin: &Path) -> GenerationResult<Self> {
        let file: ConfigFile =
            toml::from_str(content).map_err(|e| GenerationError::InvalidConfig {
                path: origin.to_path_buf(),
                message: e.to_string(),
            })?;

        let mut stubs = BTreeMap::new();
        for (key, path) in file.generators.stubs {
            let Some(kind) = key.strip_suffix(STUB_KEY_SUFFIX) else {
                tracing::debug!(key = %key, "ignoring unknown generators key");
                continue;
            };
            let resolved = if path.is_relative() {
                base_dir.join(path)
            } else {
                path
            };
            stubs.insert(kind.to_string(), resolved);
        }

        let migration_extension = file
            .generators
            .migration_extension
            .map(|ext| ext.trim_start_matches('.').to_string());
        if migration_extension.as_deref() == Some("") {
            return Err(GenerationError::InvalidConfig {
                path: origin.to_path_buf(),
                message: "migration_extension cannot be empty".to_string(),
            });
        }

        Ok(Self {
            stubs,
            migration_extension,
        })
    }

    /// Load configuration from a file.
    pub fn load(fs: &dyn FileSystem, path: &Path) -> GenerationResult<Self> {
        let content = fs
            .read_to_string(path)
            .map_err(|e| GenerationError::InvalidConfig {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new(""));

        let config = Self::from_toml_str(&content, base_dir, path)?;
        tracing::debug!(path = %path.display(), stubs = config.stubs.len(), "loaded configuration");
        Ok(config)
    }

    /// Load configuration if the file exists, otherwise use defaults.
    pub fn load_or_default(fs: &dyn FileSystem, path: &Path) -> GenerationResult<Self> {
        if fs.exists(path) {
            Self::load(fs, path)
        } else {
            tracing::debug!(path = %path.display(), "no configuration file, using defaults");
            Ok(Self::default())
        }
    }

    /// Override the stub for one generator kind
    pub fn with_stub(mut self, kind: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        self.stubs.insert(kind.into(), path.into());
        self
    }

    /// Override the migration file extension
    pub fn with_migration_extension(mut self, ext: impl Into<String>) -> Self {
        self.migration_extension = Some(ext.into().trim_start_matches('.').to_string());
        self
    }

    /// Extension for generated migration files
    pub fn migration_extension(&self) -> &str {
        self.migration_extension
            .as_deref()
            .unwrap_or(DEFAULT_MIGRATION_EXTENSION)
    }
}

impl StubLocator for GeneratorsConfig {
    fn stub_path(&self, kind: &str) -> Option<PathBuf> {
        self.stubs.get(kind).cloned()
    }
}

// ============================================================================
// Tests
// ============================================================================
