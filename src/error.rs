// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown locale '{0}'")]
    UnknownLocale(String),

    #[error("invalid {field} pattern '{pattern}'")]
    InvalidFormat { field: &'static str, pattern: String },

    #[error("unknown channel '{0}' (expected log, warn, error, group or groupEnd)")]
    UnknownChannel(String),

    #[error("unknown date policy '{0}' (expected per-call-default or auto-reset)")]
    UnknownPolicy(String),

    #[error("unknown timestamp style '{0}' (expected full or short)")]
    UnknownStyle(String),

    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported config extension for {0} (expected .yaml, .yml or .json)")]
    UnsupportedExtension(PathBuf),
}
