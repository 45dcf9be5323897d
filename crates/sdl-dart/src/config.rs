/// Options for a generation run.
///
/// Setters consume and return the configuration so they can be chained:
///
/// ```rust
/// use sdl_dart::Config;
///
/// let config = Config::new().dynamic_type("Object").headers(false).strict(true);
/// # let _ = config;
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub(crate) dynamic_type: String,
    pub(crate) headers: bool,
    pub(crate) strict: bool,
}

impl Config {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Dart type used wherever a custom scalar is referenced.
    ///
    /// The default is `dynamic`.
    pub fn dynamic_type(mut self, marker: impl Into<String>) -> Self {
        self.dynamic_type = marker.into();
        self
    }

    /// Whether to precede each declaration with a `// Kind:` comment and,
    /// when the source location is known, a `// Schema Lines:` comment.
    ///
    /// Enabled by default.
    pub fn headers(mut self, headers: bool) -> Self {
        self.headers = headers;
        self
    }

    /// Turn silent degradations into errors.
    ///
    /// With strict mode enabled, an object implementing an interface that is
    /// not defined in the document, a definition kind that has no Dart
    /// counterpart (operations, fragments, directive definitions, extensions)
    /// and a second `schema` definition all abort the run. Otherwise they are
    /// logged and skipped. Disabled by default.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dynamic_type: "dynamic".to_string(),
            headers: true,
            strict: false,
        }
    }
}
