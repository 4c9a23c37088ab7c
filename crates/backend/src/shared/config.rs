use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub wms: WmsConfig,
    pub auth: AuthConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Built frontend (trunk `dist`)
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WmsConfig {
    pub graphql_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    /// HS256 secret shared with the WMS API, it signs the access tokens
    pub jwt_secret: String,
}

fn default_host() -> String {
    "0.0.0.0".into()
}

fn default_port() -> u16 {
    3000
}

fn default_static_dir() -> String {
    "dist".into()
}

fn default_timeout_secs() -> u64 {
    30
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000
static_dir = "dist"

[wms]
graphql_url = "http://localhost:4000/graphql"
timeout_secs = 30

[auth]
jwt_secret = "change-me"
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
                return parse_config(&contents);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    if config.auth.jwt_secret.trim().is_empty() {
        anyhow::bail!("[auth] jwt_secret must not be empty");
    }
    if config.wms.timeout_secs == 0 {
        anyhow::bail!("[wms] timeout_secs must be positive");
    }
    Ok(config)
}

/// Directory of the static files.
/// Relative paths are resolved against the executable directory.
pub fn get_static_dir(config: &Config) -> PathBuf {
    let dir = Path::new(&config.server.static_dir);

    if dir.is_absolute() {
        return dir.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let resolved = exe_dir.join(dir);
            if resolved.exists() {
                return resolved;
            }
        }
    }

    // Fallback: relative to current directory (cargo run)
    dir.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.static_dir, "dist");
        assert_eq!(config.wms.graphql_url, "http://localhost:4000/graphql");
        assert_eq!(config.wms.timeout_secs, 30);
    }

    #[test]
    fn test_optional_keys_have_defaults() {
        let config = parse_config(
            r#"
[server]

[wms]
graphql_url = "https://wms.example.org/graphql"

[auth]
jwt_secret = "s3cret"
"#,
        )
        .unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.wms.timeout_secs, 30);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        assert!(parse_config("[server]\nport = 1").is_err());
        let empty_secret = DEFAULT_CONFIG.replace("change-me", " ");
        assert!(parse_config(&empty_secret).is_err());
    }

    #[test]
    fn test_absolute_static_dir_is_kept() {
        let mut config = parse_config(DEFAULT_CONFIG).unwrap();
        let abs = std::env::temp_dir().join("wms-dist");
        config.server.static_dir = abs.display().to_string();
        assert_eq!(get_static_dir(&config), abs);
    }
}
