//! # Pivot Context
//!
//! The `PivotContext` holds every name derived from a [`TablePair`]: the
//! singular column stems, the canonical plural table names, the pivot table
//! name, and the migration class name. It is built once per invocation and
//! shared (by reference) with the renderer and path builder.

use pivotgen_core::{Inflector, TablePair};

/// Suffix appended to every generated migration class name.
const CLASS_SUFFIX: &str = "PivotTable";

/// Prefix prepended to every generated migration class name.
const CLASS_PREFIX: &str = "Create";

// ============================================================================
// PivotContext
// ============================================================================

/// Names derived from a table pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PivotContext {
    pair: TablePair,

    /// Singular form of the smaller table name (`{{columnOne}}`)
    column_one: String,

    /// Singular form of the larger table name (`{{columnTwo}}`)
    column_two: String,

    /// `pluralize(singularize(low))` (`{{tableOne}}`)
    table_one: String,

    /// `pluralize(singularize(high))` (`{{tableTwo}}`)
    table_two: String,
}

impl PivotContext {
    // ====================================================================
    // Construction
    // ====================================================================

    /// Derive all names from a pair using the given inflector.
    ///
    /// Table names are pluralized from the already-singularized stems, not
    /// from the raw input, so irregular inputs come out canonical.
    pub fn new(pair: TablePair, inflector: &dyn Inflector) -> Self {
        let column_one = inflector.singularize(pair.low());
        let column_two = inflector.singularize(pair.high());
        let table_one = inflector.pluralize(&column_one);
        let table_two = inflector.pluralize(&column_two);

        tracing::debug!(
            pair = %pair,
            column_one = %column_one,
            column_two = %column_two,
            "derived pivot names"
        );

        Self {
            pair,
            column_one,
            column_two,
            table_one,
            table_two,
        }
    }

    // ====================================================================
    // Accessors
    // ====================================================================

    /// The normalized table pair these names were derived from
    pub fn pair(&self) -> &TablePair {
        &self.pair
    }

    pub fn column_one(&self) -> &str {
        &self.column_one
    }

    pub fn column_two(&self) -> &str {
        &self.column_two
    }

    pub fn table_one(&self) -> &str {
        &self.table_one
    }

    pub fn table_two(&self) -> &str {
        &self.table_two
    }

    /// Pivot table name: singular stems joined by an underscore
    /// (e.g. "roles" + "users" → "role_user").
    pub fn pivot_table_name(&self) -> String {
        format!("{}_{}", self.column_one, self.column_two)
    }

    /// Migration class name (e.g. "CreateRoleUserPivotTable").
    pub fn class_name(&self) -> String {
        format!(
            "{}{}{}{}",
            CLASS_PREFIX,
            capitalize_words(&self.column_one),
            capitalize_words(&self.column_two),
            CLASS_SUFFIX
        )
    }
}

// ============================================================================
// Naming helpers
// ============================================================================

/// Upper-case the first character of each whitespace-separated word.
///
/// Underscores are not word boundaries: "blog_post" → "Blog_post".
pub fn capitalize_words(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut at_word_start = true;

    for c in s.chars() {
        if at_word_start && !c.is_whitespace() {
            result.extend(c.to_uppercase());
            at_word_start = false;
        } else {
            if c.is_whitespace() {
                at_word_start = true;
            }
            result.push(c);
        }
    }

    result
}

/// Strip everything up to and including the last namespace separator.
///
/// Both `\` and `::` are treated as separators, so `App\Migrations\Foo`
/// and `app::migrations::Foo` both yield `Foo`.
pub fn strip_namespace(name: &str) -> &str {
    let backslash = name.rfind('\\').map(|i| i + 1);
    let colons = name.rfind("::").map(|i| i + 2);

    match backslash.max(colons) {
        Some(start) => &name[start..],
        None => name,
    }
}

// ============================================================================
// Tests
// ============================================================================
