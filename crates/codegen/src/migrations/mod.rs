//! # Migration Paths
//!
//! Every pivot migration is written to a fixed directory under the project
//! root, named after the time it was generated:
//!
//! ```text
//! database/migrations/{YYYY_MM_DD_HHMMSS}_create_{pivot_table_name}_pivot_table.{ext}
//! ```

use chrono::NaiveDateTime;
use std::path::{Path, PathBuf};

/// Migrations directory, relative to the project root.
pub const MIGRATIONS_DIR: &str = "database/migrations";

/// Timestamp prefix format (`2024_01_31_235959`).
pub const TIMESTAMP_FORMAT: &str = "%Y_%m_%d_%H%M%S";

/// Format a migration timestamp prefix.
pub fn timestamp_prefix(now: NaiveDateTime) -> String {
    now.format(TIMESTAMP_FORMAT).to_string()
}

/// Migration file name for a pivot table.
pub fn migration_filename(now: NaiveDateTime, pivot_table_name: &str, extension: &str) -> String {
    format!(
        "{}_create_{}_pivot_table.{}",
        timestamp_prefix(now),
        pivot_table_name,
        extension.trim_start_matches('.')
    )
}

/// Full migration path under `base_dir`.
pub fn migration_path(
    base_dir: &Path,
    now: NaiveDateTime,
    pivot_table_name: &str,
    extension: &str,
) -> PathBuf {
    base_dir
        .join(MIGRATIONS_DIR)
        .join(migration_filename(now, pivot_table_name, extension))
}
