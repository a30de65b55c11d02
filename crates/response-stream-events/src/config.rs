/// Level of the diagnostic emitted when a document reaches the fallback
/// decoder.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FallbackLog {
    /// No diagnostic.
    Off,
    /// `tracing::debug!` (default).
    #[default]
    Debug,
    /// `tracing::warn!`, useful when hunting upstream schema drift.
    Warn,
}

impl FallbackLog {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "off" | "none" | "0" | "false" => Some(Self::Off),
            "debug" => Some(Self::Debug),
            "warn" | "warning" => Some(Self::Warn),
            _ => None,
        }
    }
}

/// Configuration for a [`crate::Classifier`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassifierConfig {
    /// Diagnostic level on entry to the fallback path.
    pub fallback_log: FallbackLog,
    /// Whether the dedicated MCP call-arguments probe runs before the
    /// fallback decoder.
    ///
    /// The fallback decoder maps the same pair to the same variants, so the
    /// result does not change; the probe works around upstream payloads the
    /// generic schema has historically rejected.
    pub mcp_arguments_probe: bool,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            fallback_log: FallbackLog::Debug,
            mcp_arguments_probe: true,
        }
    }
}

pub(crate) fn parse_bool_env(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" | "enabled" => Some(true),
        "0" | "false" | "no" | "off" | "disabled" => Some(false),
        _ => None,
    }
}

impl ClassifierConfig {
    /// Builds a config from the process environment.
    ///
    /// - `RESPONSE_EVENTS_FALLBACK_LOG`: `off`, `debug` or `warn`.
    /// - `RESPONSE_EVENTS_MCP_ARGUMENTS_PROBE`: boolean flag.
    ///
    /// Unset or unparseable values keep the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(level) =
            lookup("RESPONSE_EVENTS_FALLBACK_LOG").and_then(|v| FallbackLog::parse(&v))
        {
            config.fallback_log = level;
        }
        if let Some(enabled) =
            lookup("RESPONSE_EVENTS_MCP_ARGUMENTS_PROBE").and_then(|v| parse_bool_env(&v))
        {
            config.mcp_arguments_probe = enabled;
        }
        config
    }

    /// Sets the fallback diagnostic level.
    pub fn fallback_log(mut self, level: FallbackLog) -> Self {
        self.fallback_log = level;
        self
    }

    /// Enables or disables the MCP call-arguments probe.
    pub fn mcp_arguments_probe(mut self, enabled: bool) -> Self {
        self.mcp_arguments_probe = enabled;
        self
    }
}
