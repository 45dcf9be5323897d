use std::fmt;

use serde::Serialize;

use crate::Declaration;

/// The append-only list of declarations produced by a generation run.
///
/// Its [`Display`](fmt::Display) implementation is the generated Dart source:
/// declarations in document order, separated by blank lines. It also
/// serializes (as a list of declarations) for debugging snapshots.
///
/// ### Example
/// ```rust
/// use sdl_dart::{ClassDef, Declaration, EnumDef, Emitter};
///
/// let mut emitter = Emitter::new();
/// emitter.push(Declaration::Class(ClassDef::new("Query".to_string())));
/// emitter.push(Declaration::Enum(EnumDef::new("Empty".to_string())));
///
/// assert_eq!(
///     emitter.to_string(),
///     "abstract class Query {\n}\n\nenum Empty {\n}\n"
/// );
/// ```
#[derive(Debug, Default, PartialEq, Eq, Clone, Serialize)]
#[serde(transparent)]
pub struct Emitter {
    declarations: Vec<Declaration>,
}

impl Emitter {
    /// Create a new, empty instance of Emitter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a declaration.
    pub fn push(&mut self, declaration: Declaration) {
        self.declarations.push(declaration);
    }

    /// The declarations emitted so far.
    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    /// The number of declarations.
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    /// Whether nothing has been emitted.
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

impl fmt::Display for Emitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, declaration) in self.declarations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{declaration}")?;
        }
        Ok(())
    }
}
