use std::fmt;

use serde::Serialize;

use crate::{ClassDef, EnumDef, SchemaDef};

/// One generated top-level Dart declaration.
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub enum Declaration {
    /// From an object, interface or input object type.
    Class(ClassDef),
    /// From an enum or union type.
    Enum(EnumDef),
    /// From the schema definition.
    Schema(SchemaDef),
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Declaration::Class(class) => write!(f, "{class}"),
            Declaration::Enum(enum_) => write!(f, "{enum_}"),
            Declaration::Schema(schema) => write!(f, "{schema}"),
        }
    }
}
