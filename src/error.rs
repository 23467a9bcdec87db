//! Errors raised at the fallible edges: key scripts, configuration and the
//! clipboard. Calculator actions themselves never fail.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unknown key '{token}' at position {position}")]
    UnknownKey { token: String, position: usize },

    #[error("{0}")]
    Clipboard(String),

    #[error("failed to read config file {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
