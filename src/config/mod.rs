use std::env;

/// Runtime settings for the echo service
#[derive(Debug, Clone, Default)]
pub struct Settings {
    /// Verbose logging (default: false)
    pub debug: bool,

    /// Enable the /img-echo/ endpoint (default: false)
    pub echo_active: bool,
}

impl Settings {
    /// Load settings from environment variables.
    ///
    /// Recognized keys: `DEBUG`, `ECHO_ACTIVE`. A set key counts as true
    /// unless its value is `false` or `0` (case-insensitive). Missing keys
    /// fall back to the defaults. Call this once at startup and thread the
    /// value through the application state; settings are immutable for the
    /// process lifetime.
    pub fn from_env() -> Self {
        let default = Self::default();

        Self {
            debug: env::var("DEBUG")
                .map(|v| parse_bool(&v))
                .unwrap_or(default.debug),

            echo_active: env::var("ECHO_ACTIVE")
                .map(|v| parse_bool(&v))
                .unwrap_or(default.echo_active),
        }
    }
}

fn parse_bool(value: &str) -> bool {
    let v = value.to_lowercase();
    v != "false" && v != "0"
}
