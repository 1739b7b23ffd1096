use isim_core::CoreError;
use isim_model::ModelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("simulation stopped: {0}")]
    Model(#[from] ModelError),
}

impl From<CoreError> for SimError {
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::Config(msg) => SimError::Config(msg),
        }
    }
}

pub type SimResult<T> = Result<T, SimError>;
