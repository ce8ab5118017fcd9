//! Configuration for code generation.

/// Function name used when none is configured.
pub const DEFAULT_FUNCTION_NAME: &str = "format_time";

/// Configuration for one compilation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Wrap the generated items in `pub mod <name> { .. }`
    pub(crate) module_name: Option<String>,
    /// Name of the generated formatting function
    pub(crate) function_name: String,
    /// Accept the non-standard verbs `%1` through `%4`
    pub(crate) allow_extra: bool,
    /// Emit a demo `fn main` that prints a sample timestamp
    pub(crate) emit_main: bool,
    /// Pass the generated source through rustfmt
    pub(crate) pretty_print: bool,
    /// Push every byte instead of writing at indices
    pub(crate) use_append: bool,
    /// Command line recorded in the generated header
    pub(crate) command: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            module_name: None,
            function_name: DEFAULT_FUNCTION_NAME.to_string(),
            allow_extra: false,
            emit_main: false,
            pretty_print: false,
            use_append: false,
            command: None,
        }
    }
}

impl Config {
    /// Create a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap the output in a module with the given name.
    pub fn module_name(mut self, name: impl Into<String>) -> Self {
        self.module_name = Some(name.into());
        self
    }

    /// Set the name of the generated function.
    pub fn function_name(mut self, name: impl Into<String>) -> Self {
        self.function_name = name.into();
        self
    }

    /// Set whether the non-standard verbs are accepted.
    pub fn allow_extra(mut self, value: bool) -> Self {
        self.allow_extra = value;
        self
    }

    /// Set whether to emit a demo entry point.
    pub fn emit_main(mut self, value: bool) -> Self {
        self.emit_main = value;
        self
    }

    /// Set whether to run the finished source through rustfmt.
    pub fn pretty_print(mut self, value: bool) -> Self {
        self.pretty_print = value;
        self
    }

    /// Set whether the generated function appends instead of indexing.
    pub fn use_append(mut self, value: bool) -> Self {
        self.use_append = value;
        self
    }

    /// Record the command that produced the output.
    pub fn command(mut self, command: impl Into<String>) -> Self {
        self.command = Some(command.into());
        self
    }
}
