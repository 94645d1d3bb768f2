use persona_analysis::ProfileError;
use thiserror::Error;

/// CLI errors
#[derive(Error, Debug)]
pub enum CliError {
    #[error("configuration error: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Profile(#[from] ProfileError),

    #[error("failed to render output: {0}")]
    Output(String),
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Output(err.to_string())
    }
}

impl From<serde_yaml::Error> for CliError {
    fn from(err: serde_yaml::Error) -> Self {
        CliError::Output(err.to_string())
    }
}

pub type CliResult<T> = Result<T, CliError>;
