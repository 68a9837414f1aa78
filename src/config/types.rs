use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub services: ServiceConfig,
}

/// Settings shared by every store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Buffered effects per store before slow subscribers start lagging (default: 32).
    #[serde(default = "default_effect_capacity")]
    pub effect_capacity: usize,
}

/// Log output settings. `RUST_LOG` takes precedence over `filter`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// EnvFilter directive (default: "info").
    #[serde(default = "default_log_filter")]
    pub filter: String,
    /// Colored output (default: true).
    #[serde(default = "default_ansi")]
    pub ansi: bool,
}

/// Behaviour of the in-memory services used by the demo binary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Simulated latency of every use-case call in milliseconds (default: 150).
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,
    /// Number of save calls that fail before saves start succeeding (default: 0).
    #[serde(default)]
    pub failing_saves: u32,
    /// Whether a session token is present at startup (default: true).
    #[serde(default = "default_true")]
    pub signed_in: bool,
    /// Whether the profile has already been completed (default: false).
    #[serde(default)]
    pub onboarded: bool,
}

/// Upper bound accepted for `services.latency_ms`.
pub const MAX_LATENCY_MS: u64 = 10_000;

fn default_effect_capacity() -> usize {
    32
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_ansi() -> bool {
    true
}

fn default_latency_ms() -> u64 {
    150
}

fn default_true() -> bool {
    true
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            effect_capacity: default_effect_capacity(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            ansi: default_ansi(),
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            latency_ms: default_latency_ms(),
            failing_saves: 0,
            signed_in: true,
            onboarded: false,
        }
    }
}
