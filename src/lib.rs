#![warn(clippy::pedantic)]

//! JWS signing algorithms and the registry that looks them up by name.

pub use alg::{Algorithm, Hmac, JwsAlgorithm, Plaintext, UnknownNameError, NONE};
pub use error::JoseError;
pub use registry::{Registry, RegistryBuilder};

pub mod alg;
mod error;
mod registry;
