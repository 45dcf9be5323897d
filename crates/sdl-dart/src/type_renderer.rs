use apollo_compiler::ast;

use crate::{Config, Discovery, Type_};

/// The scalar types every GraphQL schema has without declaring them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinScalar {
    /// `Int`
    Int,
    /// `Float`
    Float,
    /// `String`
    String,
    /// `Boolean`
    Boolean,
    /// `ID`
    Id,
}

impl BuiltinScalar {
    /// All built-in scalars.
    pub const ALL: [BuiltinScalar; 5] = [
        BuiltinScalar::Int,
        BuiltinScalar::Float,
        BuiltinScalar::String,
        BuiltinScalar::Boolean,
        BuiltinScalar::Id,
    ];

    /// Recognise a built-in scalar by its GraphQL name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Int" => Some(BuiltinScalar::Int),
            "Float" => Some(BuiltinScalar::Float),
            "String" => Some(BuiltinScalar::String),
            "Boolean" => Some(BuiltinScalar::Boolean),
            "ID" => Some(BuiltinScalar::Id),
            _ => None,
        }
    }

    /// The name as it appears in GraphQL source.
    pub fn graphql_name(self) -> &'static str {
        match self {
            BuiltinScalar::Int => "Int",
            BuiltinScalar::Float => "Float",
            BuiltinScalar::String => "String",
            BuiltinScalar::Boolean => "Boolean",
            BuiltinScalar::Id => "ID",
        }
    }

    /// The Dart type this scalar is rendered as.
    pub fn dart_name(self) -> &'static str {
        match self {
            BuiltinScalar::Int => "int",
            BuiltinScalar::Float => "double",
            BuiltinScalar::String | BuiltinScalar::Id => "String",
            BuiltinScalar::Boolean => "bool",
        }
    }
}

/// Translates GraphQL type references into Dart.
///
/// Custom scalars known to the [`Discovery`] become the configured dynamic
/// type, built-in scalars map to their Dart equivalent and any other name is
/// kept as-is.
///
/// ### Example
/// ```rust
/// use apollo_compiler::ast::{Document, Type};
/// use apollo_compiler::name;
/// use sdl_dart::{Config, Discovery, TypeRenderer};
///
/// let document = Document::parse("scalar DateTime", "schema.graphql").unwrap();
/// let discovery = Discovery::new(&document);
/// let config = Config::new();
/// let types = TypeRenderer::new(&discovery, &config);
///
/// let ty = Type::NonNullList(Box::new(Type::Named(name!("DateTime"))));
/// assert_eq!(types.ty(&ty).to_string(), "List<dynamic>");
/// assert_eq!(types.name("Boolean"), "bool");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TypeRenderer<'a> {
    discovery: &'a Discovery,
    dynamic_type: &'a str,
}

impl<'a> TypeRenderer<'a> {
    /// Create a renderer backed by a document's discovered scalars.
    pub fn new(discovery: &'a Discovery, config: &'a Config) -> Self {
        Self {
            discovery,
            dynamic_type: &config.dynamic_type,
        }
    }

    /// Render a single type name.
    pub fn name(&self, name: &str) -> String {
        if self.discovery.is_scalar(name) {
            return self.dynamic_type.to_string();
        }

        match BuiltinScalar::from_name(name) {
            Some(scalar) => scalar.dart_name().to_string(),
            None => name.to_string(),
        }
    }

    /// Render a type reference, dropping non-null wrappers.
    pub fn ty(&self, ty: &ast::Type) -> Type_ {
        match ty {
            ast::Type::Named(name) | ast::Type::NonNullNamed(name) => {
                Type_::named_type(&self.name(name))
            }
            ast::Type::List(inner) | ast::Type::NonNullList(inner) => {
                Type_::list(Box::new(self.ty(inner)))
            }
        }
    }
}
