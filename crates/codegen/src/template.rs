//! # Stub Rendering
//!
//! Placeholder substitution for pivot migration stubs. Six tokens are
//! recognized:
//!
//! | Token                | Replacement                       |
//! |----------------------|-----------------------------------|
//! | `{{columnOne}}`      | singular form of the first table  |
//! | `{{columnTwo}}`      | singular form of the second table |
//! | `{{tableOne}}`       | plural form of the first table    |
//! | `{{tableTwo}}`       | plural form of the second table   |
//! | `{{class}}`          | class name, namespace stripped    |
//! | `{{pivotTableName}}` | pivot table name                  |
//!
//! Substitution runs in a fixed order: schema tokens (columns then tables),
//! then the class, then the pivot table name. Every occurrence of a token
//! is replaced. Any other `{{...}}` token is left untouched.

use regex::Regex;
use std::sync::LazyLock;

use crate::context::{PivotContext, strip_namespace};

pub const PIVOT_TABLE_NAME: &str = "{{pivotTableName}}";
pub const COLUMN_ONE: &str = "{{columnOne}}";
pub const COLUMN_TWO: &str = "{{columnTwo}}";
pub const TABLE_ONE: &str = "{{tableOne}}";
pub const TABLE_TWO: &str = "{{tableTwo}}";
pub const CLASS: &str = "{{class}}";

/// Every token the renderer substitutes.
pub const RECOGNIZED_PLACEHOLDERS: [&str; 6] = [
    PIVOT_TABLE_NAME,
    COLUMN_ONE,
    COLUMN_TWO,
    TABLE_ONE,
    TABLE_TWO,
    CLASS,
];

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    // Infallible: the pattern is a literal.
    Regex::new(r"\{\{\s*[A-Za-z_][A-Za-z0-9_]*\s*\}\}").unwrap()
});

// ============================================================================
// Stub
// ============================================================================

/// A stub template being rendered.
///
/// Each `replace_*` step consumes and returns the stub so the substitution
/// order is visible at the call site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stub {
    content: String,
}

impl Stub {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Replace column and table tokens.
    pub fn replace_schema(mut self, ctx: &PivotContext) -> Self {
        self.content = self
            .content
            .replace(COLUMN_ONE, ctx.column_one())
            .replace(COLUMN_TWO, ctx.column_two())
            .replace(TABLE_ONE, ctx.table_one())
            .replace(TABLE_TWO, ctx.table_two());
        self
    }

    /// Replace the class token with `name` minus any namespace prefix.
    pub fn replace_class(mut self, name: &str) -> Self {
        self.content = self.content.replace(CLASS, strip_namespace(name));
        self
    }

    /// Replace the pivot table name token.
    pub fn replace_pivot_table_name(mut self, pivot_table_name: &str) -> Self {
        self.content = self.content.replace(PIVOT_TABLE_NAME, pivot_table_name);
        self
    }

    /// `{{...}}` tokens present in the stub that the renderer does not know.
    pub fn unrecognized_placeholders(&self) -> Vec<&str> {
        PLACEHOLDER
            .find_iter(&self.content)
            .map(|m| m.as_str())
            .filter(|token| !RECOGNIZED_PLACEHOLDERS.contains(token))
            .collect()
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }

    pub fn into_string(self) -> String {
        self.content
    }
}

/// Render a stub for the given context in the fixed substitution order.
pub fn render(stub: &str, ctx: &PivotContext, class_name: &str) -> String {
    let stub = Stub::new(stub);

    for token in stub.unrecognized_placeholders() {
        tracing::warn!(token, "unrecognized placeholder left in stub");
    }

    stub.replace_schema(ctx)
        .replace_class(class_name)
        .replace_pivot_table_name(&ctx.pivot_table_name())
        .into_string()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inflector::EnglishInflector;
    use pivotgen_core::TablePair;
    use pretty_assertions::assert_eq;

    fn ctx(a: &str, b: &str) -> PivotContext {
        PivotContext::new(TablePair::new(a, b), &EnglishInflector)
    }

    #[test]
    fn test_render_all_tokens() {
        let ctx = ctx("statuses", "items");
        let stub = "class {{class}} {\n\
                    table({{pivotTableName}});\n\
                    {{columnOne}}_id -> {{tableOne}}.id;\n\
                    {{columnTwo}}_id -> {{tableTwo}}.id;\n\
                    }";

        let rendered = render(stub, &ctx, &ctx.class_name());

        assert_eq!(
            rendered,
            "class CreateItemStatusPivotTable {\n\
             table(item_status);\n\
             item_id -> items.id;\n\
             status_id -> statuses.id;\n\
             }"
        );
    }

    #[test]
    fn test_every_occurrence_replaced() {
        let ctx = ctx("users", "roles");
        let stub = "{{columnOne}} {{columnOne}} {{tableTwo}}{{tableTwo}} {{class}}/{{class}}";
        let rendered = render(stub, &ctx, &ctx.class_name());

        assert_eq!(
            rendered,
            "role role usersusers CreateRoleUserPivotTable/CreateRoleUserPivotTable"
        );
        for token in RECOGNIZED_PLACEHOLDERS {
            assert!(!rendered.contains(token));
        }
    }

    #[test]
    fn test_unknown_tokens_pass_through() {
        let ctx = ctx("users", "roles");
        let rendered = render("{{namespace}} {{class}} {{ other }}", &ctx, "CreateX");
        assert_eq!(rendered, "{{namespace}} CreateX {{ other }}");
    }

    #[test]
    fn test_unrecognized_placeholders() {
        let stub = Stub::new("{{class}} {{namespace}} {{pivotTableName}} {{ timestamp }}");
        assert_eq!(
            stub.unrecognized_placeholders(),
            vec!["{{namespace}}", "{{ timestamp }}"]
        );
    }

    #[test]
    fn test_class_namespace_is_stripped() {
        let stub = Stub::new("class {{class}}").replace_class("Database\\Migrations\\CreateFoo");
        assert_eq!(stub.as_str(), "class CreateFoo");
    }

    #[test]
    fn test_stub_without_tokens_is_unchanged() {
        let ctx = ctx("users", "roles");
        assert_eq!(render("plain text", &ctx, "CreateX"), "plain text");
    }
}
