use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_MAX_REQUEST_BYTES: usize = 1024;

/// Server settings.
///
/// Resolved from, in increasing priority: built-in defaults, the YAML file
/// named by `SERVER_CONFIG`, then the `LISTEN`, `DOC_ROOT` and
/// `MAX_REQUEST_BYTES` environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub listen_addr: String,
    pub document_root: PathBuf,
    /// Upper bound on bytes read from a client before dispatching
    pub max_request_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            document_root: default_document_root(),
            max_request_bytes: DEFAULT_MAX_REQUEST_BYTES,
        }
    }
}

fn default_document_root() -> PathBuf {
    std::env::current_dir()
        .map(|cwd| cwd.join("www"))
        .unwrap_or_else(|_| PathBuf::from("www"))
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key/value source shaped like the process
    /// environment.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = match lookup("SERVER_CONFIG") {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        if let Some(addr) = lookup("LISTEN") {
            cfg.listen_addr = addr;
        }

        if let Some(root) = lookup("DOC_ROOT") {
            cfg.document_root = PathBuf::from(root);
        }

        if let Some(raw) = lookup("MAX_REQUEST_BYTES") {
            cfg.max_request_bytes = raw
                .trim()
                .parse()
                .with_context(|| format!("MAX_REQUEST_BYTES is not a byte count: {raw}"))?;
        }

        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;

        Self::from_yaml(&raw).with_context(|| format!("invalid config file {}", path.display()))
    }

    pub fn from_yaml(raw: &str) -> anyhow::Result<Self> {
        let cfg: Self = serde_yaml::from_str(raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.max_request_bytes == 0 {
            anyhow::bail!("max_request_bytes must be greater than zero");
        }
        Ok(())
    }
}
