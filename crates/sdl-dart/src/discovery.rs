use apollo_compiler::ast;
use apollo_compiler::Node;
use indexmap::{IndexMap, IndexSet};

/// Document-wide facts that generation needs before it can render any single
/// definition: which names are custom scalars, and which interfaces exist.
///
/// Built once per document and read-only afterwards.
///
/// ### Example
/// ```rust
/// use apollo_compiler::ast::Document;
/// use sdl_dart::Discovery;
///
/// let document = Document::parse(
///     "scalar DateTime interface Node { id: ID! }",
///     "schema.graphql",
/// )
/// .unwrap();
/// let discovery = Discovery::new(&document);
///
/// assert!(discovery.is_scalar("DateTime"));
/// assert!(discovery.interface("Node").is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Discovery {
    scalars: IndexSet<String>,
    interfaces: IndexMap<String, Node<ast::InterfaceTypeDefinition>>,
}

impl Discovery {
    /// Collect scalar names and interface definitions from `document`.
    ///
    /// If an interface name is defined twice the later definition wins.
    pub fn new(document: &ast::Document) -> Self {
        let mut discovery = Self::default();

        for definition in &document.definitions {
            match definition {
                ast::Definition::ScalarTypeDefinition(scalar) => {
                    discovery.scalars.insert(scalar.name.to_string());
                }
                ast::Definition::InterfaceTypeDefinition(interface) => {
                    discovery
                        .interfaces
                        .insert(interface.name.to_string(), interface.clone());
                }
                _ => {}
            }
        }

        log::debug!(
            "discovered {} custom scalar(s) and {} interface(s)",
            discovery.scalars.len(),
            discovery.interfaces.len()
        );
        discovery
    }

    /// Whether `name` was declared with a `scalar` definition.
    pub fn is_scalar(&self, name: &str) -> bool {
        self.scalars.contains(name)
    }

    /// Custom scalar names, in declaration order.
    pub fn scalars(&self) -> impl Iterator<Item = &str> {
        self.scalars.iter().map(String::as_str)
    }

    /// Look up an interface definition by name.
    pub fn interface(&self, name: &str) -> Option<&Node<ast::InterfaceTypeDefinition>> {
        self.interfaces.get(name)
    }

    /// Interface names, in declaration order.
    pub fn interfaces(&self) -> impl Iterator<Item = &str> {
        self.interfaces.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn it_collects_scalars_and_interfaces_in_order() {
        let input = r#"
            scalar URI
            interface Node { id: ID! }
            type Repository implements Node { id: ID! url: URI }
            scalar DateTime
            interface Starrable { stargazerCount: Int! }
        "#;
        let document = ast::Document::parse(input, "schema.graphql").unwrap();
        let discovery = Discovery::new(&document);

        assert_eq!(
            discovery.scalars().collect::<Vec<_>>(),
            vec!["URI", "DateTime"]
        );
        assert_eq!(
            discovery.interfaces().collect::<Vec<_>>(),
            vec!["Node", "Starrable"]
        );
        assert!(discovery.interface("Repository").is_none());
    }

    #[test]
    fn it_tolerates_documents_without_scalars_or_interfaces() {
        let document = ast::Document::parse("enum Color { RED }", "schema.graphql").unwrap();
        let discovery = Discovery::new(&document);

        assert_eq!(discovery.scalars().count(), 0);
        assert_eq!(discovery.interfaces().count(), 0);
        assert!(!discovery.is_scalar("Color"));
    }
}
