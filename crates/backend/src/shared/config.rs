use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub mock: MockConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    /// Directory with the built frontend (`trunk build` output). Empty = API only.
    #[serde(default)]
    pub static_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            static_dir: String::new(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct MockConfig {
    /// JSON file with the records payload. Empty = embedded seed data.
    #[serde(default)]
    pub data_path: String,
    /// Artificial delay applied to every records request
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,
    /// Share of requests answered with 503, 0.0..=1.0
    #[serde(default)]
    pub fail_rate: f64,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            data_path: String::new(),
            latency_ms: default_latency_ms(),
            fail_rate: 0.0,
        }
    }
}

fn default_port() -> u16 {
    3000
}

fn default_latency_ms() -> u64 {
    800
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
port = 3000
static_dir = ""

[mock]
data_path = ""
latency_ms = 800
fail_rate = 0.0
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                return Ok(config);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

/// Resolve a configured path relative to the executable directory.
/// Returns `None` for an empty setting.
pub fn resolve_path(raw: &str) -> Option<PathBuf> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    let path = Path::new(raw);
    if path.is_absolute() {
        return Some(path.to_path_buf());
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return Some(exe_dir.join(path));
        }
    }

    Some(PathBuf::from(raw))
}
