use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Config error: {0}")]
    Config(#[from] rg_config::ConfigError),

    #[error("Session error: {0}")]
    Session(#[from] rg_session::SessionError),

    #[error("Generation error: {0}")]
    Generate(#[from] rg_session::GenerateError),

    #[error("Generation client error: {0}")]
    Gen(#[from] rg_gen::GenError),

    #[error("Store error: {0}")]
    Store(#[from] rg_store::StoreError),

    #[error("Database error: {message}")]
    Database { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}

impl From<sqlx::Error> for CliError {
    fn from(e: sqlx::Error) -> Self {
        Self::Database {
            message: e.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
