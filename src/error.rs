use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building routes, navigating, or loading inputs.
///
/// Store operations never fail and so never produce one of these.
#[derive(Error, Debug)]
pub enum Error {
    #[error("no route matches path `{path}`")]
    NoRoute { path: String },

    #[error("invalid route pattern `{pattern}`: {reason}")]
    InvalidPattern { pattern: String, reason: &'static str },

    #[error("route pattern `{0}` is declared more than once")]
    DuplicatePattern(String),

    #[error("route name `{0}` is declared more than once")]
    DuplicateName(String),

    #[error("unknown route name `{name}`")]
    UnknownRoute { name: String },

    #[error("route `{route}` requires parameter `{param}`")]
    MissingParam { route: String, param: String },

    #[error("failed to read config {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to read dataset {path}: {source}")]
    DatasetIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse dataset {path}: {source}")]
    DatasetParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
