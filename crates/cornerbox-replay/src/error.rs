use std::path::PathBuf;

use cornerbox_core::ConfigError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ReplayError>;

#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid gesture script: {0}")]
    Script(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("gesture script has no events")]
    EmptyScript,

    #[error("failed to write summary: {0}")]
    Output(#[source] serde_json::Error),
}

impl ReplayError {
    pub fn exit_code(&self) -> i32 {
        match self {
            ReplayError::Io { .. } => 3,
            ReplayError::Script(_) | ReplayError::EmptyScript => 2,
            ReplayError::Config(_) => 4,
            ReplayError::Output(_) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_failure_is_not_a_script_error() {
        let source = serde_json::from_str::<u8>("\"x\"").unwrap_err();
        let error = ReplayError::Output(source);
        assert_eq!(error.exit_code(), 1);
        assert!(error.to_string().starts_with("failed to write summary"));
    }
}
