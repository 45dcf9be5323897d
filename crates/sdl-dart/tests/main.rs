mod strict_mode;

use apollo_compiler::ast::Document;
use sdl_dart::{Config, Emitter, GenerateError};

pub(crate) fn generate(input: &str, config: &Config) -> Result<Emitter, GenerateError> {
    let document = Document::parse(input, "schema.graphql").unwrap();
    sdl_dart::generate(&document, config)
}

pub(crate) fn generate_dart(input: &str) -> String {
    generate(input, &Config::new()).unwrap().to_string()
}
