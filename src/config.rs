use anyhow::Context;
use serde::Deserialize;
use std::path::Path;

/// Longest accepted `-p` argument, in characters.
pub const MAX_PORT_LENGTH: usize = 5;

/// Immutable server settings, built once at startup and shared into every
/// connection task.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Base directory static files are served from.
    #[serde(default = "default_document_root")]
    pub document_root: String,
    /// Port to listen on, kept as the raw argument string.
    #[serde(default = "default_port")]
    pub port: String,
    /// Host to bind. `None` means all local interfaces.
    #[serde(default)]
    pub host: Option<String>,
    /// Command invoked to render dynamic content.
    #[serde(default = "default_interpreter")]
    pub interpreter: String,
}

fn default_document_root() -> String {
    std::env::var("PWD").unwrap_or_else(|_| ".".to_string())
}

fn default_port() -> String {
    "10000".to_string()
}

fn default_interpreter() -> String {
    "php".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            document_root: default_document_root(),
            port: default_port(),
            host: None,
            interpreter: default_interpreter(),
        }
    }
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        Self::from_args(std::env::args().skip(1))
    }

    /// Builds the config from CLI arguments: compiled defaults, then the
    /// `-c` YAML file if given, then `-d`/`-p` overrides. Flags the server
    /// does not know are ignored.
    pub fn from_args(args: impl IntoIterator<Item = String>) -> anyhow::Result<Self> {
        let args: Vec<String> = args.into_iter().collect();

        let mut cfg = match flag_value(&args, "-c") {
            Some(path) => Self::from_file(Path::new(path))?,
            None => Self::default(),
        };

        if let Some(dir) = flag_value(&args, "-d") {
            cfg.document_root = dir.to_string();
        }

        if let Some(port) = flag_value(&args, "-p") {
            if port.len() > MAX_PORT_LENGTH {
                anyhow::bail!(
                    "port argument '{}' is longer than {} characters",
                    port,
                    MAX_PORT_LENGTH
                );
            }
            cfg.port = port.to_string();
        }

        Ok(cfg)
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("could not read config file '{}'", path.display()))?;
        serde_yaml::from_str(&raw)
            .with_context(|| format!("could not parse config file '{}'", path.display()))
    }
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .map(|s| s.as_str())
}
