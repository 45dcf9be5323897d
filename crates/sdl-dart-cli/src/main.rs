use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{anyhow, Context, Result};
use apollo_compiler::ast::Document;
use sdl_dart::{Config, Emitter};
use structopt::StructOpt;

fn main() -> Result<()> {
    let app = SdlDart::from_args();
    init_logging(app.verbose);
    app.run()
}

#[derive(Debug, StructOpt)]
#[structopt(
    name = "sdl-dart",
    about = "Generate Dart declarations from a GraphQL schema"
)]
struct SdlDart {
    /// The GraphQL schema to read.
    #[structopt(parse(from_os_str), default_value = "./schema.graphql")]
    schema: PathBuf,

    /// Where to write the generated Dart source.
    #[structopt(
        long = "output",
        short = "o",
        parse(from_os_str),
        default_value = "./out/output.dart"
    )]
    output: PathBuf,

    /// Also write a JSON snapshot of the generated declarations.
    #[structopt(long = "dump-json", parse(from_os_str))]
    dump_json: Option<PathBuf>,

    /// Type name used for custom scalars.
    #[structopt(long = "dynamic-type", default_value = "dynamic")]
    dynamic_type: String,

    /// Don't write `// Kind` and `// Schema Lines` comments.
    #[structopt(long = "no-headers")]
    no_headers: bool,

    /// Fail on definitions that cannot be translated instead of skipping them.
    #[structopt(long = "strict")]
    strict: bool,

    /// Log each generated declaration.
    #[structopt(long = "verbose", short = "v")]
    verbose: bool,
}

impl SdlDart {
    fn run(&self) -> Result<()> {
        let source = fs::read_to_string(&self.schema)
            .with_context(|| format!("could not read schema {}", self.schema.display()))?;
        let document = Document::parse(source, &self.schema).map_err(|invalid| {
            anyhow!(
                "could not parse schema {}\n{}",
                self.schema.display(),
                invalid.errors
            )
        })?;
        log::debug!(
            "parsed {} definition(s) from {}",
            document.definitions.len(),
            self.schema.display()
        );

        let emitter = sdl_dart::generate(&document, &self.config())
            .with_context(|| format!("could not generate Dart for {}", self.schema.display()))?;

        if let Some(path) = &self.dump_json {
            write_json(path, &emitter)?;
        }
        write_file(&self.output, &emitter.to_string())?;
        log::info!(
            "wrote {} declaration(s) to {}",
            emitter.len(),
            self.output.display()
        );

        Ok(())
    }

    fn config(&self) -> Config {
        Config::new()
            .dynamic_type(self.dynamic_type.as_str())
            .headers(!self.no_headers)
            .strict(self.strict)
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn write_json(path: &Path, emitter: &Emitter) -> Result<()> {
    let json = serde_json::to_string_pretty(emitter)
        .context("could not serialize the generated declarations")?;
    write_file(path, &json)
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("could not create directory {}", parent.display()))?;
    }
    fs::write(path, contents).with_context(|| format!("could not write {}", path.display()))
}
