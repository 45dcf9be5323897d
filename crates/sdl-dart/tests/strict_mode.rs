use indoc::indoc;
use pretty_assertions::assert_eq;
use sdl_dart::{Config, GenerateError};

use crate::generate;

const EXTENDED: &str = indoc! {r#"
    type Query {
      me: User
    }

    extend type Query {
      users: [User!]!
    }

    type User implements Node {
      id: ID!
    }
"#};

#[test]
fn lenient_mode_skips_what_it_cannot_translate() {
    let dart = generate(EXTENDED, &Config::new().headers(false))
        .unwrap()
        .to_string();

    assert_eq!(
        dart,
        indoc! {r#"
            abstract class Query {
              User me;
            }

            abstract class User implements Node {
              String id;
            }
        "#}
    );
}

#[test]
fn strict_mode_rejects_extensions() {
    let error = generate(EXTENDED, &Config::new().strict(true)).unwrap_err();

    assert_eq!(
        error,
        GenerateError::UnsupportedDefinition {
            kind: "ObjectTypeExtension",
            name: Some("Query".to_string()),
        }
    );
    assert_eq!(
        error.to_string(),
        "ObjectTypeExtension `Query` cannot be translated to Dart"
    );
}

#[test]
fn strict_mode_rejects_unknown_interfaces() {
    let input = indoc! {r#"
        type User implements Node {
          id: ID!
        }
    "#};

    assert_eq!(
        generate(input, &Config::new().strict(true)),
        Err(GenerateError::UnresolvedInterface {
            object: "User".to_string(),
            interface: "Node".to_string(),
        })
    );
}

#[test]
fn strict_mode_rejects_anonymous_operations() {
    let input = indoc! {r#"
        type Query {
          me: String
        }

        { me }
    "#};

    assert_eq!(
        generate(input, &Config::new().strict(true)),
        Err(GenerateError::UnsupportedDefinition {
            kind: "OperationDefinition",
            name: None,
        })
    );
}

#[test]
fn strict_mode_rejects_a_second_schema_definition() {
    let input = indoc! {r#"
        schema {
          query: Query
        }

        schema {
          mutation: Mutation
        }
    "#};

    assert_eq!(
        generate(input, &Config::new().strict(true)),
        Err(GenerateError::DuplicateSchemaDefinition)
    );
}

#[test]
fn strict_mode_accepts_complete_schemas() {
    let input = indoc! {r#"
        scalar Date

        interface Node {
          id: ID!
        }

        type Post implements Node {
          id: ID!
          publishedAt: Date
        }
    "#};
    let config = Config::new().strict(true).headers(false);

    assert_eq!(
        generate(input, &config).unwrap().to_string(),
        indoc! {r#"
            abstract class Node {
              String id;
            }

            abstract class Post implements Node {
              dynamic publishedAt;
            }
        "#}
    );
}
