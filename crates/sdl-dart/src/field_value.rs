use std::fmt::{self, Display};

use serde::Serialize;

/// A rendered Dart type reference, as used for members and parameters.
///
/// GraphQL's non-null wrapper has no counterpart here: nullability is not
/// represented in the generated code.
///
/// ### Example
/// ```rust
/// use sdl_dart::Type_;
///
/// let named = Type_::named_type("int");
/// let list = Type_::list(Box::new(Type_::list(Box::new(named))));
///
/// assert_eq!(list.to_string(), "List<List<int>>");
/// ```
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub enum Type_ {
    /// `List<ty>`.
    List {
        /// Element type.
        ty: Box<Type_>,
    },
    /// A bare type name, already translated to Dart.
    NamedType {
        /// Dart type name.
        name: String,
    },
}

impl Type_ {
    /// Wrap `ty` in a `List`.
    pub const fn list(ty: Box<Type_>) -> Self {
        Type_::List { ty }
    }

    /// A bare type name.
    pub fn named_type(name: &str) -> Self {
        Type_::NamedType {
            name: name.to_string(),
        }
    }

    /// The innermost type name, below any number of lists.
    pub fn element_name(&self) -> &str {
        match self {
            Type_::List { ty } => ty.element_name(),
            Type_::NamedType { name } => name,
        }
    }
}

impl Display for Type_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type_::List { ty } => write!(f, "List<{ty}>"),
            Type_::NamedType { name } => f.write_str(name),
        }
    }
}
