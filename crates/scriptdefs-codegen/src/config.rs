//! Configuration types for C# emission.

/// Configuration for C# emission.
#[derive(Clone, Debug)]
pub struct Config {
    /// Namespace of the generated classes
    pub(crate) namespace: String,
    /// Class holding constant and function tables
    pub(crate) defs_class: String,
    /// Class holding include-file tables
    pub(crate) library_class: String,
    /// Treat fallback literals as errors
    pub(crate) strict: bool,
    /// Emit the `<auto-generated>` banner
    pub(crate) header: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            namespace: "TSLPatcher.Core.Common.Script".to_string(),
            defs_class: "ScriptDefs".to_string(),
            library_class: "ScriptLib".to_string(),
            strict: false,
            header: true,
        }
    }
}

impl Config {
    /// Create a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the namespace of the generated classes.
    pub fn namespace(mut self, value: impl Into<String>) -> Self {
        self.namespace = value.into();
        self
    }

    /// Set the class name for constant and function tables.
    pub fn defs_class(mut self, value: impl Into<String>) -> Self {
        self.defs_class = value.into();
        self
    }

    /// Set the class name for include-file tables.
    pub fn library_class(mut self, value: impl Into<String>) -> Self {
        self.library_class = value.into();
        self
    }

    /// Set whether fallback literals abort emission.
    pub fn strict(mut self, value: bool) -> Self {
        self.strict = value;
        self
    }

    /// Set whether to emit the auto-generated banner.
    pub fn header(mut self, value: bool) -> Self {
        self.header = value;
        self
    }

    /// Parent of the configured namespace, where `Vector3` lives.
    pub(crate) fn common_namespace(&self) -> Option<&str> {
        self.namespace.rsplit_once('.').map(|(parent, _)| parent)
    }
}
