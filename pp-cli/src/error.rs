use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Config error: {0}")]
    Config(#[from] pp_config::ConfigError),

    #[error("{0}")]
    Client(#[from] pp_client::ClientError),

    #[error("{0}")]
    Form(#[from] pp_form::FormError),

    #[error("{0}")]
    Core(#[from] pp_core::CoreError),

    #[error("Output serialization error: {0}")]
    Output(#[from] serde_json::Error),

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("{message}")]
    Aborted { message: String },
}

pub type Result<T> = std::result::Result<T, CliError>;
