//! # Pivot Migration Generator
//!
//! The `PivotMigrationGenerator` turns two table names into a migration file
//! that creates their pivot table.
//!
//! ## Pipeline
//!
//! ```text
//! (tableOne, tableTwo)
//!         │
//!         ▼
//!   TablePair::parse()         lowercase, validate, sort
//!         │
//!         ▼
//!   PivotContext::new()        singular/plural names, pivot name, class name
//!         │
//!         ▼
//!   migrations::migration_path()
//!         │
//!         ├──► exists && !force → AlreadyExists
//!         │
//!         ▼
//!   create_dir_all → load stub → template::render → write
//!         │
//!         ▼
//!   GeneratedFile { path, class_name, .. }
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pivotgen_codegen::{GeneratorConfig, GeneratorsConfig, LocalFileSystem, PivotMigrationGenerator};
//!
//! let fs = LocalFileSystem;
//! let stubs = GeneratorsConfig::load_or_default(&fs, "generators.toml".as_ref())?;
//! let generator = PivotMigrationGenerator::new(GeneratorConfig::default(), &fs, &stubs);
//!
//! let file = generator.generate("users", "roles", false)?;
//! println!("created {}", file.path.display());
//! ```

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use pivotgen_core::{
    Clock, FileSystem, GenerationError, GenerationResult, Inflector, StubLocator, TablePair,
};

use crate::clock::SystemClock;
use crate::context::PivotContext;
use crate::inflector::EnglishInflector;
use crate::{GeneratedFile, GeneratorConfig, migrations, template};

/// Generator kind, used for the `generators.pivot_stub` configuration key.
pub const PIVOT_KIND: &str = "pivot";

/// Human-readable generator type used in status messages.
pub const PIVOT_LABEL: &str = "Pivot";

/// Stub used when no `pivot_stub` is configured.
pub const BUNDLED_PIVOT_STUB: &str = include_str!("../stubs/pivot.stub");

// ============================================================================
// MigrationPlan
// ============================================================================

/// Everything derived for one invocation before any I/O happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationPlan {
    pub context: PivotContext,
    pub class_name: String,
    pub pivot_table_name: String,
    pub path: PathBuf,
}

// ============================================================================
// PivotMigrationGenerator
// ============================================================================

/// Generates pivot-table migrations.
///
/// Stateless aside from its configuration and collaborators; each call to
/// [`generate`](PivotMigrationGenerator::generate) is independent.
pub struct PivotMigrationGenerator<'a> {
    config: GeneratorConfig,
    fs: &'a dyn FileSystem,
    stubs: &'a dyn StubLocator,
    inflector: &'a dyn Inflector,
    clock: &'a dyn Clock,
}

impl<'a> PivotMigrationGenerator<'a> {
    // ====================================================================
    // Construction
    // ====================================================================

    /// Create a generator using the English inflector and the system clock.
    pub fn new(
        config: GeneratorConfig,
        fs: &'a dyn FileSystem,
        stubs: &'a dyn StubLocator,
    ) -> Self {
        Self {
            config,
            fs,
            stubs,
            inflector: &EnglishInflector,
            clock: &SystemClock,
        }
    }

    /// Use a different inflector.
    pub fn with_inflector(mut self, inflector: &'a dyn Inflector) -> Self {
        self.inflector = inflector;
        self
    }

    /// Use a different clock.
    pub fn with_clock(mut self, clock: &'a dyn Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Get the current configuration.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    // ====================================================================
    // Generation
    // ====================================================================

    /// Derive names and the output path without touching the filesystem.
    pub fn plan(&self, table_one: &str, table_two: &str) -> GenerationResult<MigrationPlan> {
        let pair = TablePair::parse(table_one, table_two)?;
        let context = PivotContext::new(pair, self.inflector);

        let class_name = context.class_name();
        let pivot_table_name = context.pivot_table_name();
        let path = migrations::migration_path(
            &self.config.base_dir,
            self.clock.now(),
            &pivot_table_name,
            &self.config.migration_extension,
        );

        Ok(MigrationPlan {
            context,
            class_name,
            pivot_table_name,
            path,
        })
    }

    /// Generate the pivot migration for two tables.
    ///
    /// # Errors
    ///
    /// - `InvalidTableName` if either name is unusable
    /// - `AlreadyExists` if the target file exists and `force` is false;
    ///   nothing is written
    /// - `StubNotFound` if the configured stub cannot be read
    /// - `DirectoryCreate` / `FileWrite` if the output cannot be persisted
    pub fn generate(
        &self,
        table_one: &str,
        table_two: &str,
        force: bool,
    ) -> GenerationResult<GeneratedFile> {
        let plan = self.plan(table_one, table_two)?;

        if self.fs.exists(&plan.path) {
            if !force {
                tracing::info!(path = %plan.path.display(), "pivot migration already exists");
                return Err(GenerationError::already_exists(PIVOT_LABEL, plan.path));
            }
            tracing::info!(path = %plan.path.display(), "overwriting existing pivot migration");
        }

        if !self.config.dry_run {
            self.make_directory(&plan.path)?;
        }

        let stub = self.load_stub()?;
        let content = template::render(&stub, &plan.context, &plan.class_name);

        if self.config.dry_run {
            tracing::info!(path = %plan.path.display(), "dry run, migration not written");
        } else {
            self.fs
                .write(&plan.path, &content)
                .map_err(|e| GenerationError::FileWrite {
                    path: plan.path.clone(),
                    message: e.to_string(),
                })?;
            tracing::info!(
                path = %plan.path.display(),
                class = %plan.class_name,
                "pivot migration created"
            );
        }

        Ok(GeneratedFile {
            path: plan.path,
            class_name: plan.class_name,
            pivot_table_name: plan.pivot_table_name,
            content,
            written: !self.config.dry_run,
        })
    }

    // ====================================================================
    // Helpers
    // ====================================================================

    fn make_directory(&self, path: &Path) -> GenerationResult<()> {
        let Some(parent) = path.parent() else {
            return Ok(());
        };
        self.fs
            .create_dir_all(parent)
            .map_err(|e| GenerationError::DirectoryCreate {
                path: parent.to_path_buf(),
                message: e.to_string(),
            })
    }

    fn load_stub(&self) -> GenerationResult<Cow<'static, str>> {
        match self.stubs.stub_path(PIVOT_KIND) {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading configured stub");
                self.fs
                    .read_to_string(&path)
                    .map(Cow::Owned)
                    .map_err(|e| GenerationError::stub_not_found(path, e.to_string()))
            }
            None => {
                tracing::debug!("no pivot stub configured, using bundled stub");
                Ok(Cow::Borrowed(BUNDLED_PIVOT_STUB))
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
