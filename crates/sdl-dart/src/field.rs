use std::fmt;

use serde::Serialize;

use crate::{Deprecated, Parameter, Type_};

/// One member line of a generated class: an object, interface or input field.
///
/// *FieldDefinition*:
///     Description? Name ArgumentsDefinition? **:** Type Directives?
///
/// A deprecation annotation is written on its own line above the member.
///
/// ### Example
/// ```rust
/// use sdl_dart::{Deprecated, Member, Parameter, Type_};
///
/// let ty = Type_::list(Box::new(Type_::named_type("User")));
/// let mut member = Member::new("followers".to_string(), ty);
/// member.arg(Parameter::new("first".to_string(), Type_::named_type("int")));
/// member.arg(Parameter::new("after".to_string(), Type_::named_type("String")));
/// member.deprecated(Some(Deprecated::Bare));
///
/// assert_eq!(
///     member.to_string(),
///     "  @deprecated\n  List<User> followers(int first, String after);"
/// );
/// ```
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct Member {
    name: String,
    ty: Type_,
    args: Vec<Parameter>,
    deprecated: Option<Deprecated>,
}

impl Member {
    /// Create a new instance of Member.
    pub fn new(name: String, ty: Type_) -> Self {
        Self {
            name,
            ty,
            args: Vec::new(),
            deprecated: None,
        }
    }

    /// The member's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the Member's deprecation annotation.
    pub fn deprecated(&mut self, deprecated: Option<Deprecated>) {
        self.deprecated = deprecated;
    }

    /// Add an argument.
    pub fn arg(&mut self, arg: Parameter) {
        self.args.push(arg);
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(deprecated) = &self.deprecated {
            writeln!(f, "  {deprecated}")?;
        }
        write!(f, "  {} {}", self.ty, self.name)?;

        if !self.args.is_empty() {
            for (i, arg) in self.args.iter().enumerate() {
                match i {
                    0 => write!(f, "({arg}")?,
                    _ => write!(f, ", {arg}")?,
                }
            }
            write!(f, ")")?;
        }

        write!(f, ";")
    }
}
