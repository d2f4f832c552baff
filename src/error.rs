//! Error types for game setup and configuration

use thiserror::Error;

/// Scene content or tuning that cannot host a round
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("expecting scene to have exactly one camera, but it has {0}")]
    CameraCount(usize),
    #[error("scene has no transform named {0:?}")]
    MissingNode(String),
    #[error(transparent)]
    Tuning(#[from] TuningError),
}

/// Tuning file could not be turned into a usable `Tuning`
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse tuning: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning value: {0}")]
    Invalid(String),
}
