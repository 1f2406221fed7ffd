//! Error types for library locating and symbol binding

/// Error type for bring-up of the dynamically loaded library
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Running on a platform with no known Steam library packaging
    #[error("Platform not supported")]
    Unsupported,

    /// No candidate path existed next to the executable
    #[error("Steam library not found near the executable")]
    NotFound,

    /// The library existed but could not be opened
    #[error("Failed to open Steam library: {0}")]
    OpenFailed(#[from] libloading::Error),

    /// A symbol required for the current bring-up step was not exported
    #[error("Missing required symbol: {0}")]
    MissingSymbol(&'static str),
}
