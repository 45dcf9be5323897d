use std::fmt;

use apollo_compiler::ast;
use serde::Serialize;

use crate::{GenerateError, Value};

/// A Dart deprecation annotation derived from GraphQL's `@deprecated`.
///
/// `@deprecated` without arguments becomes Dart's bare `@deprecated` constant.
/// With arguments, every string-valued argument becomes a quoted reason of a
/// `@Deprecated(...)` annotation; other arguments are ignored.
///
/// ### Example
/// ```rust
/// use sdl_dart::Deprecated;
///
/// assert_eq!(Deprecated::Bare.to_string(), "@deprecated");
/// assert_eq!(
///     Deprecated::Reasons(vec!["use displayName".to_string()]).to_string(),
///     r#"@Deprecated("use displayName")"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Deprecated {
    /// `@deprecated` with no arguments.
    Bare,
    /// `@deprecated(...)` with the decoded string arguments.
    Reasons(Vec<String>),
}

impl Deprecated {
    /// Build the annotation for a field or argument, or `None` if it does not
    /// carry `@deprecated`.
    pub fn from_directives(directives: &ast::DirectiveList) -> Result<Option<Self>, GenerateError> {
        let Some(directive) = directives.get("deprecated") else {
            return Ok(None);
        };

        if directive.arguments.is_empty() {
            return Ok(Some(Self::Bare));
        }

        let mut reasons = Vec::new();
        for argument in &directive.arguments {
            if !matches!(*argument.value, ast::Value::String(_)) {
                continue;
            }
            if let Value::String(reason) = Value::try_from(&*argument.value)? {
                reasons.push(reason);
            }
        }

        Ok(Some(Self::Reasons(reasons)))
    }
}

impl fmt::Display for Deprecated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bare => write!(f, "@deprecated"),
            Self::Reasons(reasons) => {
                write!(f, "@Deprecated(")?;
                for (i, reason) in reasons.iter().enumerate() {
                    match i {
                        0 => write!(f, "\"{}\"", escape(reason))?,
                        _ => write!(f, ", \"{}\"", escape(reason))?,
                    }
                }
                write!(f, ")")
            }
        }
    }
}

/// Escape a string for use inside a double-quoted Dart literal.
fn escape(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '\\' => output.push_str(r"\\"),
            '"' => output.push_str(r#"\""#),
            '$' => output.push_str(r"\$"),
            '\n' => output.push_str(r"\n"),
            '\r' => output.push_str(r"\r"),
            '\t' => output.push_str(r"\t"),
            _ => output.push(c),
        }
    }
    output
}
