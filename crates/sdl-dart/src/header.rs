use std::fmt;

use serde::Serialize;

/// The comment block written above each declaration, naming the GraphQL node
/// kind it came from and, if known, the lines it spans in the schema.
///
/// ```rust
/// use sdl_dart::Header;
///
/// let header = Header::new("EnumTypeDefinition", Some((3, 7)));
/// assert_eq!(
///     header.to_string(),
///     "// Kind: EnumTypeDefinition\n// Schema Lines: 3 - 7\n"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Header {
    kind: &'static str,
    lines: Option<(usize, usize)>,
}

impl Header {
    /// Create a header for a node of `kind`, spanning the 1-based `lines`
    /// (first and last, inclusive).
    pub fn new(kind: &'static str, lines: Option<(usize, usize)>) -> Self {
        Self { kind, lines }
    }

    /// The GraphQL AST node kind.
    pub fn kind(&self) -> &'static str {
        self.kind
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "// Kind: {}", self.kind)?;
        if let Some((start, end)) = self.lines {
            writeln!(f, "// Schema Lines: {start} - {end}")?;
        }
        Ok(())
    }
}
