//! <div align="center">
//!   <h1><code>sdl-dart</code></h1>
//!
//!   <p>
//!     <strong>Generate Dart declarations from a GraphQL schema.</strong>
//!   </p>
//! </div>
//!
//! `sdl-dart` walks a parsed GraphQL SDL document and produces one Dart
//! declaration per type-system definition:
//!
//! | GraphQL                      | Dart                                     |
//! |------------------------------|------------------------------------------|
//! | `type`, `interface`, `input` | `abstract class`                         |
//! | `enum`, `union`              | `enum`                                   |
//! | `schema`                     | `class Schema` with one member per root  |
//! | `scalar`                     | nothing, references become `dynamic`     |
//!
//! Built-in scalars are mapped to Dart types (`Int` to `int`, `Float` to
//! `double`, `Boolean` to `bool`, `ID` to `String`), lists become `List<T>` and
//! non-null markers are dropped. Fields an object inherits from one of its
//! interfaces are not redeclared, and `@deprecated` turns into a Dart
//! annotation.
//!
//! Parsing is left to [`apollo_compiler`]; this crate only consumes its AST.
//!
//! ## Example
//! ```rust
//! use apollo_compiler::ast::Document;
//! use indoc::indoc;
//! use sdl_dart::Config;
//!
//! let schema = indoc! {r#"
//!     interface Node {
//!       id: ID!
//!     }
//!     type User implements Node {
//!       id: ID!
//!       name: String @deprecated(reason: "use displayName")
//!       friends(first: Int): [User!]!
//!     }
//! "#};
//! let document = Document::parse(schema, "schema.graphql").unwrap();
//! let config = Config::new().headers(false);
//! let dart = sdl_dart::generate(&document, &config).unwrap();
//!
//! assert_eq!(
//!     dart.to_string(),
//!     indoc! {r#"
//!         abstract class Node {
//!           String id;
//!         }
//!
//!         abstract class User implements Node {
//!           @Deprecated("use displayName")
//!           String name;
//!           List<User> friends(int first);
//!         }
//!     "#}
//! );
//! ```
//!
//! ## License
//! Licensed under either of
//!
//! - Apache License, Version 2.0 (<https://www.apache.org/licenses/LICENSE-2.0>)
//! - MIT license (<https://opensource.org/licenses/MIT>)
//!
//! at your option.

#![forbid(unsafe_code)]
#![deny(missing_debug_implementations, nonstandard_style)]
#![warn(missing_docs, future_incompatible, unreachable_pub, rust_2018_idioms)]

mod class_def;
mod config;
mod declaration;
mod deprecated;
mod discovery;
mod emitter;
mod enum_def;
mod error;
mod field;
mod field_value;
mod from_ast;
mod header;
mod input_value;
mod schema_def;
mod type_renderer;
mod value;

pub use class_def::ClassDef;
pub use config::Config;
pub use declaration::Declaration;
pub use deprecated::Deprecated;
pub use discovery::Discovery;
pub use emitter::Emitter;
pub use enum_def::EnumDef;
pub use error::GenerateError;
pub use field::Member;
pub use field_value::Type_;
pub use from_ast::generate;
pub use header::Header;
pub use input_value::Parameter;
pub use schema_def::{RootOperation, SchemaDef};
pub use type_renderer::{BuiltinScalar, TypeRenderer};
pub use value::Value;
