use std::fmt;

use serde::Serialize;

use crate::Header;

/// A root operation of the schema: `query`, `mutation` or `subscription`, and
/// the (rendered) type that serves it.
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct RootOperation {
    operation: &'static str,
    ty: String,
}

/// The `class Schema` declaration generated from a `schema { ... }` definition.
///
/// ### Example
/// ```rust
/// use sdl_dart::SchemaDef;
/// use indoc::indoc;
///
/// let mut schema_def = SchemaDef::new();
/// schema_def.root_operation("query", "Query".to_string());
/// schema_def.root_operation("mutation", "Mutation".to_string());
///
/// assert_eq!(
///    schema_def.to_string(),
///    indoc! { r#"
///        class Schema {
///          Query query;
///          Mutation mutation;
///        }
///    "#}
/// );
/// ```
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct SchemaDef {
    header: Option<Header>,
    // Root operations in the order they were declared.
    root_operations: Vec<RootOperation>,
}

impl SchemaDef {
    /// Create a new instance of SchemaDef.
    pub fn new() -> Self {
        Self {
            header: None,
            root_operations: Vec::new(),
        }
    }

    /// Set (or clear) the comment header.
    pub fn header(&mut self, header: Option<Header>) {
        self.header = header;
    }

    /// Add a root operation served by `ty`.
    pub fn root_operation(&mut self, operation: &'static str, ty: String) {
        self.root_operations.push(RootOperation { operation, ty });
    }
}

impl Default for SchemaDef {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SchemaDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(header) = &self.header {
            write!(f, "{header}")?;
        }

        write!(f, "class Schema {{")?;
        for root in &self.root_operations {
            write!(f, "\n  {} {};", root.ty, root.operation)?;
        }
        writeln!(f, "\n}}")
    }
}
