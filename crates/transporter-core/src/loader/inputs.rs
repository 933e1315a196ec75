//! Raw host inputs

/// Raw command line and environment handed to the loader
///
/// `args` excludes the program name. `env` holds `NAME=value` entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostInputs {
    pub args: Vec<String>,
    pub env: Vec<String>,
}

impl HostInputs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture the current process arguments and environment
    pub fn from_process() -> Self {
        Self {
            args: std::env::args_os()
                .skip(1)
                .map(|arg| arg.to_string_lossy().into_owned())
                .collect(),
            env: std::env::vars_os()
                .map(|(name, value)| {
                    format!("{}={}", name.to_string_lossy(), value.to_string_lossy())
                })
                .collect(),
        }
    }

    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Add raw `NAME=value` entries
    pub fn with_env<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.env.extend(entries.into_iter().map(Into::into));
        self
    }

    /// Add `(name, value)` pairs as `NAME=value` entries
    pub fn with_env_pairs<I, K, V>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.env.extend(
            pairs
                .into_iter()
                .map(|(k, v)| format!("{}={}", k.as_ref(), v.as_ref())),
        );
        self
    }
}
