use std::collections::HashSet;

use apollo_compiler::ast;
use apollo_compiler::Node;

use crate::{
    ClassDef, Config, Declaration, Deprecated, Discovery, Emitter, EnumDef, GenerateError, Header,
    Member, Parameter, SchemaDef, TypeRenderer,
};

/// Generate Dart declarations for every type-system definition in `document`.
///
/// Runs a discovery pass over the whole document first, so that custom
/// scalars and interfaces are known regardless of where they are declared.
///
/// ### Example
/// ```rust
/// use apollo_compiler::ast::Document;
/// use sdl_dart::Config;
///
/// let document = Document::parse("union Result = A | B", "schema.graphql").unwrap();
/// let dart = sdl_dart::generate(&document, &Config::new()).unwrap();
///
/// assert_eq!(
///     dart.to_string(),
///     "// Kind: UnionTypeDefinition\n// Schema Lines: 1 - 1\nenum Result {\n  A,\n  B,\n}\n"
/// );
/// ```
pub fn generate(document: &ast::Document, config: &Config) -> Result<Emitter, GenerateError> {
    let discovery = Discovery::new(document);
    let emitter = Generator::new(document, &discovery, config).run()?;
    log::debug!("generated {} declaration(s)", emitter.len());
    Ok(emitter)
}

struct Generator<'a> {
    document: &'a ast::Document,
    discovery: &'a Discovery,
    config: &'a Config,
    types: TypeRenderer<'a>,
    emitter: Emitter,
    seen_schema: bool,
}

impl<'a> Generator<'a> {
    fn new(document: &'a ast::Document, discovery: &'a Discovery, config: &'a Config) -> Self {
        Self {
            document,
            discovery,
            config,
            types: TypeRenderer::new(discovery, config),
            emitter: Emitter::new(),
            seen_schema: false,
        }
    }

    fn run(mut self) -> Result<Emitter, GenerateError> {
        for definition in &self.document.definitions {
            self.definition(definition)?;
        }
        Ok(self.emitter)
    }

    fn definition(&mut self, definition: &ast::Definition) -> Result<(), GenerateError> {
        let declaration = match definition {
            ast::Definition::ObjectTypeDefinition(node) => Declaration::Class(self.object(node)?),
            ast::Definition::InterfaceTypeDefinition(node) => {
                Declaration::Class(self.interface(node)?)
            }
            ast::Definition::InputObjectTypeDefinition(node) => {
                Declaration::Class(self.input_object(node)?)
            }
            ast::Definition::EnumTypeDefinition(node) => Declaration::Enum(self.enum_(node)),
            ast::Definition::UnionTypeDefinition(node) => Declaration::Enum(self.union(node)),
            ast::Definition::SchemaDefinition(node) => Declaration::Schema(self.schema(node)?),
            // Only feeds discovery.
            ast::Definition::ScalarTypeDefinition(_) => return Ok(()),
            ast::Definition::OperationDefinition(_)
            | ast::Definition::FragmentDefinition(_)
            | ast::Definition::DirectiveDefinition(_)
            | ast::Definition::SchemaExtension(_)
            | ast::Definition::ScalarTypeExtension(_)
            | ast::Definition::ObjectTypeExtension(_)
            | ast::Definition::InterfaceTypeExtension(_)
            | ast::Definition::UnionTypeExtension(_)
            | ast::Definition::EnumTypeExtension(_)
            | ast::Definition::InputObjectTypeExtension(_) => return self.unsupported(definition),
        };

        log::debug!("emitting {}", definition_kind(definition));
        self.emitter.push(declaration);
        Ok(())
    }

    fn unsupported(&self, definition: &ast::Definition) -> Result<(), GenerateError> {
        let error = GenerateError::UnsupportedDefinition {
            kind: definition_kind(definition),
            name: definition_name(definition),
        };
        if self.config.strict {
            return Err(error);
        }
        log::warn!("skipping definition: {error}");
        Ok(())
    }

    fn header<T>(&self, kind: &'static str, node: &Node<T>) -> Option<Header> {
        if !self.config.headers {
            return None;
        }
        let lines = node
            .line_column_range(&self.document.sources)
            .map(|range| (range.start.line, range.end.line));
        Some(Header::new(kind, lines))
    }

    fn object(&self, node: &Node<ast::ObjectTypeDefinition>) -> Result<ClassDef, GenerateError> {
        let inherited = self.inherited_field_names(node)?;

        let mut class = ClassDef::new(node.name.to_string());
        class.header(self.header("ObjectTypeDefinition", node));
        for interface in &node.implements_interfaces {
            class.interface(interface.to_string());
        }
        for field in &node.fields {
            if inherited.contains(field.name.as_str()) {
                continue;
            }
            class.member(self.field(field)?);
        }
        Ok(class)
    }

    fn interface(
        &self,
        node: &Node<ast::InterfaceTypeDefinition>,
    ) -> Result<ClassDef, GenerateError> {
        let mut class = ClassDef::new(node.name.to_string());
        class.header(self.header("InterfaceTypeDefinition", node));
        for field in &node.fields {
            class.member(self.field(field)?);
        }
        Ok(class)
    }

    fn input_object(
        &self,
        node: &Node<ast::InputObjectTypeDefinition>,
    ) -> Result<ClassDef, GenerateError> {
        let mut class = ClassDef::new(node.name.to_string());
        class.header(self.header("InputObjectTypeDefinition", node));
        for field in &node.fields {
            class.member(self.input_field(field)?);
        }
        Ok(class)
    }

    fn enum_(&self, node: &Node<ast::EnumTypeDefinition>) -> EnumDef {
        let mut enum_ = EnumDef::new(node.name.to_string());
        enum_.header(self.header("EnumTypeDefinition", node));
        for value in &node.values {
            enum_.value(value.value.to_string());
        }
        enum_
    }

    fn union(&self, node: &Node<ast::UnionTypeDefinition>) -> EnumDef {
        let mut enum_ = EnumDef::new(node.name.to_string());
        enum_.header(self.header("UnionTypeDefinition", node));
        for member in &node.members {
            enum_.value(member.to_string());
        }
        enum_
    }

    fn schema(&mut self, node: &Node<ast::SchemaDefinition>) -> Result<SchemaDef, GenerateError> {
        if self.seen_schema {
            if self.config.strict {
                return Err(GenerateError::DuplicateSchemaDefinition);
            }
            log::warn!("the document contains more than one schema definition");
        }
        self.seen_schema = true;

        let mut schema = SchemaDef::new();
        schema.header(self.header("SchemaDefinition", node));
        for root in &node.root_operations {
            let (operation_type, named_type) = &**root;
            schema.root_operation(operation_type.name(), self.types.name(named_type));
        }
        Ok(schema)
    }

    fn field(&self, field: &ast::FieldDefinition) -> Result<Member, GenerateError> {
        let mut member = Member::new(field.name.to_string(), self.types.ty(&field.ty));
        member.deprecated(Deprecated::from_directives(&field.directives)?);
        for argument in &field.arguments {
            member.arg(self.parameter(argument)?);
        }
        Ok(member)
    }

    fn input_field(&self, field: &ast::InputValueDefinition) -> Result<Member, GenerateError> {
        let mut member = Member::new(field.name.to_string(), self.types.ty(&field.ty));
        member.deprecated(Deprecated::from_directives(&field.directives)?);
        Ok(member)
    }

    fn parameter(&self, argument: &ast::InputValueDefinition) -> Result<Parameter, GenerateError> {
        let mut parameter = Parameter::new(argument.name.to_string(), self.types.ty(&argument.ty));
        parameter.deprecated(Deprecated::from_directives(&argument.directives)?);
        Ok(parameter)
    }

    /// Names of all fields declared by the interfaces `node` implements.
    fn inherited_field_names(
        &self,
        node: &ast::ObjectTypeDefinition,
    ) -> Result<HashSet<&'a str>, GenerateError> {
        let discovery: &'a Discovery = self.discovery;
        let mut names = HashSet::new();

        for interface in &node.implements_interfaces {
            match discovery.interface(interface) {
                Some(definition) => {
                    names.extend(definition.fields.iter().map(|field| field.name.as_str()));
                }
                None if self.config.strict => {
                    return Err(GenerateError::UnresolvedInterface {
                        object: node.name.to_string(),
                        interface: interface.to_string(),
                    });
                }
                None => log::warn!(
                    "type `{}` implements unknown interface `{interface}`; no fields are inherited from it",
                    node.name
                ),
            }
        }

        Ok(names)
    }
}

fn definition_kind(definition: &ast::Definition) -> &'static str {
    match definition {
        ast::Definition::OperationDefinition(_) => "OperationDefinition",
        ast::Definition::FragmentDefinition(_) => "FragmentDefinition",
        ast::Definition::DirectiveDefinition(_) => "DirectiveDefinition",
        ast::Definition::SchemaDefinition(_) => "SchemaDefinition",
        ast::Definition::ScalarTypeDefinition(_) => "ScalarTypeDefinition",
        ast::Definition::ObjectTypeDefinition(_) => "ObjectTypeDefinition",
        ast::Definition::InterfaceTypeDefinition(_) => "InterfaceTypeDefinition",
        ast::Definition::UnionTypeDefinition(_) => "UnionTypeDefinition",
        ast::Definition::EnumTypeDefinition(_) => "EnumTypeDefinition",
        ast::Definition::InputObjectTypeDefinition(_) => "InputObjectTypeDefinition",
        ast::Definition::SchemaExtension(_) => "SchemaExtension",
        ast::Definition::ScalarTypeExtension(_) => "ScalarTypeExtension",
        ast::Definition::ObjectTypeExtension(_) => "ObjectTypeExtension",
        ast::Definition::InterfaceTypeExtension(_) => "InterfaceTypeExtension",
        ast::Definition::UnionTypeExtension(_) => "UnionTypeExtension",
        ast::Definition::EnumTypeExtension(_) => "EnumTypeExtension",
        ast::Definition::InputObjectTypeExtension(_) => "InputObjectTypeExtension",
    }
}

fn definition_name(definition: &ast::Definition) -> Option<String> {
    let name = match definition {
        ast::Definition::OperationDefinition(def) => def.name.as_ref()?,
        ast::Definition::FragmentDefinition(def) => &def.name,
        ast::Definition::DirectiveDefinition(def) => &def.name,
        ast::Definition::ScalarTypeDefinition(def) => &def.name,
        ast::Definition::ObjectTypeDefinition(def) => &def.name,
        ast::Definition::InterfaceTypeDefinition(def) => &def.name,
        ast::Definition::UnionTypeDefinition(def) => &def.name,
        ast::Definition::EnumTypeDefinition(def) => &def.name,
        ast::Definition::InputObjectTypeDefinition(def) => &def.name,
        ast::Definition::ScalarTypeExtension(def) => &def.name,
        ast::Definition::ObjectTypeExtension(def) => &def.name,
        ast::Definition::InterfaceTypeExtension(def) => &def.name,
        ast::Definition::UnionTypeExtension(def) => &def.name,
        ast::Definition::EnumTypeExtension(def) => &def.name,
        ast::Definition::InputObjectTypeExtension(def) => &def.name,
        ast::Definition::SchemaDefinition(_) | ast::Definition::SchemaExtension(_) => return None,
    };
    Some(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    fn generate_str(input: &str, config: &Config) -> Result<String, GenerateError> {
        let document = ast::Document::parse(input, "schema.graphql").unwrap();
        generate(&document, config).map(|emitter| emitter.to_string())
    }

    fn no_headers() -> Config {
        Config::new().headers(false)
    }

    #[test]
    fn it_excludes_exactly_the_inherited_fields() {
        let input = indoc! {r#"
            interface I { a: Int b: Int }
            type O implements I { a: Int b: Int c: Int }
        "#};

        assert_eq!(
            generate_str(input, &no_headers()).unwrap(),
            indoc! {r#"
                abstract class I {
                  int a;
                  int b;
                }

                abstract class O implements I {
                  int c;
                }
            "#}
        );
    }

    #[test]
    fn it_unions_fields_of_several_interfaces_and_keeps_order() {
        let input = indoc! {r#"
            type Issue implements Closable & Node {
              title: String
              id: ID!
              body: String
              closed: Boolean!
              number: Int!
            }
            interface Node { id: ID! }
            interface Closable { closed: Boolean! }
        "#};

        assert_eq!(
            generate_str(input, &no_headers()).unwrap(),
            indoc! {r#"
                abstract class Issue implements Closable, Node {
                  String title;
                  String body;
                  int number;
                }

                abstract class Node {
                  String id;
                }

                abstract class Closable {
                  bool closed;
                }
            "#}
        );
    }

    #[test]
    fn interfaces_and_inputs_are_never_filtered() {
        let input = indoc! {r#"
            interface Node { id: ID! }
            interface Entity implements Node { id: ID! }
            input Filter { id: ID! }
        "#};

        assert_eq!(
            generate_str(input, &no_headers()).unwrap(),
            indoc! {r#"
                abstract class Node {
                  String id;
                }

                abstract class Entity {
                  String id;
                }

                abstract class Filter {
                  String id;
                }
            "#}
        );
    }

    #[test]
    fn unknown_interfaces_contribute_no_fields() {
        let input = "type User implements Missing { id: ID! }";

        assert_eq!(
            generate_str(input, &no_headers()).unwrap(),
            indoc! {r#"
                abstract class User implements Missing {
                  String id;
                }
            "#}
        );
    }

    #[test]
    fn unknown_interfaces_fail_in_strict_mode() {
        let input = "type User implements Missing { id: ID! }";

        assert_eq!(
            generate_str(input, &no_headers().strict(true)),
            Err(GenerateError::UnresolvedInterface {
                object: "User".to_string(),
                interface: "Missing".to_string(),
            })
        );
    }

    #[test]
    fn it_skips_scalars_and_unsupported_definitions() {
        let input = indoc! {r#"
            scalar DateTime
            directive @cached on FIELD_DEFINITION
            extend type Query { extra: Int }
            query GetViewer { viewer }
            enum Empty { NONE }
        "#};

        assert_eq!(
            generate_str(input, &no_headers()).unwrap(),
            indoc! {r#"
                enum Empty {
                  NONE,
                }
            "#}
        );
    }

    #[test]
    fn unsupported_definitions_fail_in_strict_mode() {
        let input = "extend type Query { extra: Int }";

        assert_eq!(
            generate_str(input, &no_headers().strict(true)),
            Err(GenerateError::UnsupportedDefinition {
                kind: "ObjectTypeExtension",
                name: Some("Query".to_string()),
            })
        );
    }

    #[test]
    fn duplicate_schema_definitions_are_emitted_unless_strict() {
        let input = indoc! {r#"
            schema { query: Query }
            schema { query: Other }
        "#};

        assert_eq!(
            generate_str(input, &no_headers()).unwrap(),
            indoc! {r#"
                class Schema {
                  Query query;
                }

                class Schema {
                  Other query;
                }
            "#}
        );
        assert_eq!(
            generate_str(input, &no_headers().strict(true)),
            Err(GenerateError::DuplicateSchemaDefinition)
        );
    }

    #[test]
    fn it_writes_kind_and_line_headers() {
        let input = indoc! {r#"
            enum Color {
              RED
            }

            input Filter {
              color: Color
            }
        "#};

        assert_eq!(
            generate_str(input, &Config::new()).unwrap(),
            indoc! {r#"
                // Kind: EnumTypeDefinition
                // Schema Lines: 1 - 3
                enum Color {
                  RED,
                }

                // Kind: InputObjectTypeDefinition
                // Schema Lines: 5 - 7
                abstract class Filter {
                  Color color;
                }
            "#}
        );
    }

    #[test]
    fn it_renders_deprecated_arguments_and_input_fields() {
        let input = indoc! {r#"
            input Filter {
              label: String @deprecated
            }
            type Query {
              search(query: String!, first: Int @deprecated(reason: "paging is automatic")): [ID!]!
            }
        "#};

        assert_eq!(
            generate_str(input, &no_headers()).unwrap(),
            indoc! {r#"
                abstract class Filter {
                  @deprecated
                  String label;
                }

                abstract class Query {
                  List<String> search(String query, @Deprecated("paging is automatic") int first);
                }
            "#}
        );
    }
}
