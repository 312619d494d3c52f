use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse config file. Original error: {0}")]
    ConfigParseError(String),

    #[error("No configuration file found in '{config_dir}'. Tried: {config_files}.")]
    ConfigNotFound { config_dir: String, config_files: String },

    /// The fetch call failed or the response body could not be decoded as text.
    #[error("Failed to retrieve template '{url}'. Original error: {reason}")]
    RetrievalError { url: String, reason: String },

    /// A partial or helper was rejected while registering it with the engine.
    #[error("Failed to register '{name}'. Original error: {reason}")]
    RegistrationError { name: String, reason: String },

    #[error("Failed to render. Original error: {0}")]
    MinijinjaError(#[from] minijinja::Error),

    #[cfg(feature = "handlebars")]
    #[error("Failed to render. Original error: {0}")]
    HandlebarsError(#[from] handlebars::RenderError),

    /// Templates were requested before `install` bound a fetch function.
    #[error("Cannot proceed: the view engine has not been installed.")]
    NotInstalledError,

    #[error("Cannot proceed: the engine lock was poisoned by a panicking render.")]
    EngineLockPoisoned,
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::ConfigParseError(err.to_string())
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Error::ConfigParseError(err.to_string())
    }
}

impl<T> From<std::sync::PoisonError<T>> for Error {
    fn from(_: std::sync::PoisonError<T>) -> Self {
        Error::EngineLockPoisoned
    }
}

/// Convenience type alias for Results with the view engine error as the error type.
///
/// # Type Parameters
/// * `T` - The type of the success value
pub type Result<T, E = Error> = std::result::Result<T, E>;
