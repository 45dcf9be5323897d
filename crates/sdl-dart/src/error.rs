use thiserror::Error;

/// Errors that can occur while generating Dart declarations from a GraphQL
/// document.
///
/// The first three variants are only produced in [strict
/// mode](crate::Config::strict).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// An object type implements an interface that the document does not define.
    #[error("type `{object}` implements `{interface}`, which is not defined in this document")]
    UnresolvedInterface {
        /// The implementing object type.
        object: String,
        /// The missing interface.
        interface: String,
    },
    /// A definition that has no Dart counterpart.
    #[error("{kind}{} cannot be translated to Dart", .name.as_deref().map(|name| format!(" `{name}`")).unwrap_or_default())]
    UnsupportedDefinition {
        /// The AST node kind, e.g. `ObjectTypeExtension`.
        kind: &'static str,
        /// The definition's name, for kinds that have one.
        name: Option<String>,
    },
    /// The document contains more than one `schema` definition.
    #[error("the document contains more than one schema definition")]
    DuplicateSchemaDefinition,
    /// An int literal does not fit a 64-bit integer.
    #[error("invalid int literal")]
    InvalidInt(#[from] std::num::ParseIntError),
    /// A float literal could not be decoded.
    #[error("invalid float literal")]
    InvalidFloat(#[from] std::num::ParseFloatError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn it_formats_unsupported_definitions_with_and_without_names() {
        let named = GenerateError::UnsupportedDefinition {
            kind: "ObjectTypeExtension",
            name: Some("Query".to_string()),
        };
        let unnamed = GenerateError::UnsupportedDefinition {
            kind: "SchemaExtension",
            name: None,
        };

        assert_eq!(
            named.to_string(),
            "ObjectTypeExtension `Query` cannot be translated to Dart"
        );
        assert_eq!(
            unnamed.to_string(),
            "SchemaExtension cannot be translated to Dart"
        );
    }
}
