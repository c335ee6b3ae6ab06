//! Core types used throughout pivotgen

use crate::error::{GenerationError, GenerationResult};
use crate::traits::Validatable;
use std::fmt;

// ============================================================================
// TablePair
// ============================================================================

/// The two tables joined by a pivot table.
///
/// Names are lowercased on construction and stored in lexicographic order,
/// so the argument order never affects anything derived from the pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TablePair {
    low: String,
    high: String,
}

impl TablePair {
    /// Create a normalized pair from two raw table names
    pub fn new(table_one: impl AsRef<str>, table_two: impl AsRef<str>) -> Self {
        let one = table_one.as_ref().trim().to_lowercase();
        let two = table_two.as_ref().trim().to_lowercase();

        if one <= two {
            Self { low: one, high: two }
        } else {
            Self { low: two, high: one }
        }
    }

    /// Create a pair and validate both names
    pub fn parse(table_one: impl AsRef<str>, table_two: impl AsRef<str>) -> GenerationResult<Self> {
        let pair = Self::new(table_one, table_two);
        pair.validate()?;
        Ok(pair)
    }

    /// The lexicographically smaller table name
    pub fn low(&self) -> &str {
        &self.low
    }

    /// The lexicographically larger table name
    pub fn high(&self) -> &str {
        &self.high
    }

    /// Both names, smaller first
    pub fn as_tuple(&self) -> (&str, &str) {
        (&self.low, &self.high)
    }

    fn validate_name(name: &str) -> GenerationResult<()> {
        if name.is_empty() {
            return Err(GenerationError::invalid_table_name(
                name,
                "table name cannot be empty",
            ));
        }
        if name.contains(['/', '\\']) {
            return Err(GenerationError::invalid_table_name(
                name,
                "table name cannot contain path separators",
            ));
        }
        if name.chars().any(char::is_whitespace) {
            return Err(GenerationError::invalid_table_name(
                name,
                "table name cannot contain whitespace",
            ));
        }
        if let Some(c) = name.chars().find(|c| !Self::is_name_char(*c)) {
            return Err(GenerationError::invalid_table_name(
                name,
                format!("unexpected character '{c}', only a-z, 0-9 and '_' are allowed"),
            ));
        }
        Ok(())
    }

    fn is_name_char(c: char) -> bool {
        c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'
    }
}

impl Validatable for TablePair {
    fn validate(&self) -> GenerationResult<()> {
        Self::validate_name(&self.low)?;
        Self::validate_name(&self.high)
    }
}

impl fmt::Display for TablePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <-> {}", self.low, self.high)
    }
}

// ============================================================================
// Tests
// ============================================================================
