use thiserror::Error;

use crate::alg::UnknownNameError;

#[derive(Debug, Error)]
pub enum JoseError {
    #[error("unknown algorithm {0}")]
    UnknownAlgorithm(String),

    #[error("unsupported algorithm {0}")]
    UnsupportedAlgorithm(String),

    #[error("{0}: key required")]
    MissingKey(&'static str),

    #[error("{0}: invalid key type")]
    InvalidKey(&'static str),

    #[error("{0}: signature mismatch")]
    InvalidSignature(&'static str),

    #[error(transparent)]
    UnknownName(#[from] UnknownNameError),
}
