//! Configuration module

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

/// Bundle location relative to the directory holding the executable
pub const BUNDLE_RELATIVE_PATH: &str = "model/deployment_bundle.json";

/// Dashboard dev-server origins
pub const DEFAULT_CORS_ORIGINS: [&str; 2] = ["http://localhost:5173", "http://127.0.0.1:5173"];

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Bind address
    pub host: IpAddr,

    /// Server port
    pub port: u16,

    /// Statistical bundle artifact
    pub bundle_path: PathBuf,

    /// Origins allowed by the CORS policy
    pub cors_origins: Vec<String>,

    /// Emit logs as JSON lines
    pub log_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 8000,
            bundle_path: default_bundle_path(),
            cors_origins: DEFAULT_CORS_ORIGINS.iter().map(|o| o.to_string()).collect(),
            log_json: false,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            host: env::var("HOST")
                .ok()
                .and_then(|h| h.parse().ok())
                .unwrap_or(defaults.host),

            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),

            bundle_path: env::var("BUNDLE_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.bundle_path),

            cors_origins: env::var("CORS_ALLOWED_ORIGINS")
                .ok()
                .map(|v| parse_origins(&v))
                .filter(|o| !o.is_empty())
                .unwrap_or(defaults.cors_origins),

            log_json: env::var("LOG_FORMAT")
                .map(|f| f.eq_ignore_ascii_case("json"))
                .unwrap_or(defaults.log_json),
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Resolve the bundle against the install location of the running binary
fn default_bundle_path() -> PathBuf {
    let install_dir = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));

    match install_dir {
        Some(dir) => dir.join(BUNDLE_RELATIVE_PATH),
        None => {
            tracing::warn!("Cannot resolve executable location; bundle path is cwd-relative");
            PathBuf::from(BUNDLE_RELATIVE_PATH)
        }
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect()
}
