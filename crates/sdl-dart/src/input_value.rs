use std::fmt;

use serde::Serialize;

use crate::{Deprecated, Type_};

/// A field argument, rendered as a Dart parameter.
///
/// *InputValueDefinition*:
///     Description? Name **:** Type DefaultValue? Directives?
///
/// Descriptions and default values are not carried over.
///
/// ### Example
/// ```rust
/// use sdl_dart::{Deprecated, Parameter, Type_};
///
/// let mut parameter = Parameter::new("first".to_string(), Type_::named_type("int"));
/// parameter.deprecated(Some(Deprecated::Bare));
///
/// assert_eq!(parameter.to_string(), "@deprecated int first");
/// ```
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct Parameter {
    name: String,
    ty: Type_,
    deprecated: Option<Deprecated>,
}

impl Parameter {
    /// Create a new instance of Parameter.
    pub fn new(name: String, ty: Type_) -> Self {
        Self {
            name,
            ty,
            deprecated: None,
        }
    }

    /// Set the Parameter's deprecation annotation.
    pub fn deprecated(&mut self, deprecated: Option<Deprecated>) {
        self.deprecated = deprecated;
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(deprecated) = &self.deprecated {
            write!(f, "{deprecated} ")?;
        }
        write!(f, "{} {}", self.ty, self.name)
    }
}
