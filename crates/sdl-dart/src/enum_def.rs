use std::fmt;

use serde::Serialize;

use crate::Header;

/// A Dart `enum`, generated from a GraphQL enum or union.
///
/// Union members are listed as plain enumerators; no tagged-union semantics
/// are generated.
///
/// ### Example
/// ```rust
/// use sdl_dart::EnumDef;
/// use indoc::indoc;
///
/// let mut enum_ = EnumDef::new("Color".to_string());
/// enum_.value("RED".to_string());
/// enum_.value("GREEN".to_string());
///
/// assert_eq!(
///     enum_.to_string(),
///     indoc! { r#"
///         enum Color {
///           RED,
///           GREEN,
///         }
///     "#}
/// );
/// ```
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct EnumDef {
    header: Option<Header>,
    name: String,
    values: Vec<String>,
}

impl EnumDef {
    /// Create a new instance of EnumDef.
    pub fn new(name: String) -> Self {
        Self {
            header: None,
            name,
            values: Vec::new(),
        }
    }

    /// Set (or clear) the comment header.
    pub fn header(&mut self, header: Option<Header>) {
        self.header = header;
    }

    /// Add an enumerator.
    pub fn value(&mut self, value: String) {
        self.values.push(value);
    }

    /// The enum name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The enumerators, in declaration order.
    pub fn values(&self) -> &[String] {
        &self.values
    }
}

impl fmt::Display for EnumDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(header) = &self.header {
            write!(f, "{header}")?;
        }

        write!(f, "enum {} {{", self.name)?;
        for value in &self.values {
            write!(f, "\n  {value},")?;
        }
        writeln!(f, "\n}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    #[test]
    fn it_encodes_an_enum_with_header() {
        let mut enum_ = EnumDef::new("SearchResult".to_string());
        enum_.header(Some(Header::new("UnionTypeDefinition", Some((12, 12)))));
        enum_.value("Issue".to_string());
        enum_.value("PullRequest".to_string());

        assert_eq!(
            enum_.to_string(),
            indoc! { r#"
                // Kind: UnionTypeDefinition
                // Schema Lines: 12 - 12
                enum SearchResult {
                  Issue,
                  PullRequest,
                }
            "#}
        );
    }
}
