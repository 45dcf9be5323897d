use std::fmt;

use serde::Serialize;

use crate::{Header, Member};

/// An `abstract class`, generated from an object, interface or input object
/// type.
///
/// Only object types carry an `implements` clause.
///
/// ### Example
/// ```rust
/// use sdl_dart::{ClassDef, Member, Type_};
/// use indoc::indoc;
///
/// let mut class = ClassDef::new("Repository".to_string());
/// class.interface("Node".to_string());
/// class.interface("Starrable".to_string());
/// class.member(Member::new("name".to_string(), Type_::named_type("String")));
///
/// assert_eq!(
///     class.to_string(),
///     indoc! { r#"
///         abstract class Repository implements Node, Starrable {
///           String name;
///         }
///     "#}
/// );
/// ```
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct ClassDef {
    header: Option<Header>,
    name: String,
    // Interfaces the generated class implements, in declaration order.
    interfaces: Vec<String>,
    members: Vec<Member>,
}

impl ClassDef {
    /// Create a new instance of ClassDef with a name.
    pub fn new(name: String) -> Self {
        Self {
            header: None,
            name,
            interfaces: Vec::new(),
            members: Vec::new(),
        }
    }

    /// Set (or clear) the comment header.
    pub fn header(&mut self, header: Option<Header>) {
        self.header = header;
    }

    /// Add an implemented interface.
    pub fn interface(&mut self, interface: String) {
        self.interfaces.push(interface);
    }

    /// Add a member.
    pub fn member(&mut self, member: Member) {
        self.members.push(member);
    }

    /// The class name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The class members, in declaration order.
    pub fn members(&self) -> &[Member] {
        &self.members
    }
}

impl fmt::Display for ClassDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(header) = &self.header {
            write!(f, "{header}")?;
        }

        write!(f, "abstract class {}", self.name)?;
        for (i, interface) in self.interfaces.iter().enumerate() {
            match i {
                0 => write!(f, " implements {interface}")?,
                _ => write!(f, ", {interface}")?,
            }
        }
        write!(f, " {{")?;

        for member in &self.members {
            write!(f, "\n{member}")?;
        }
        writeln!(f, "\n}}")
    }
}
