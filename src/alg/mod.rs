//! JWS signing algorithms
//!
//! [rfc7518](https://tools.ietf.org/html/rfc7518#section-3.1)
use std::any::Any;
use std::fmt;
use std::str::FromStr;

use bytes::Bytes;
use thiserror::Error;

use crate::JoseError;

pub use self::hmac::Hmac;
pub use self::none::{Plaintext, NONE};

mod hmac;
mod none;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown algorithm name {0:?}")]
pub struct UnknownNameError(pub String);

/// JWS `alg` header values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// `HS256`
    Hs256,
    /// `HS384`
    Hs384,
    /// `HS512`
    Hs512,
    /// `RS256`
    Rs256,
    /// `RS384`
    Rs384,
    /// `RS512`
    Rs512,
    /// `ES256`
    Es256,
    /// `ES384`
    Es384,
    /// `ES512`
    Es512,
    /// `PS256`
    Ps256,
    /// `PS384`
    Ps384,
    /// `PS512`
    Ps512,
    /// `none`
    None,
}

impl Algorithm {
    /// Algorithms implemented by this crate.
    pub fn defaults() -> Vec<Self> {
        vec![Self::Hs256, Self::Hs384, Self::Hs512, Self::None]
    }

    pub(crate) fn all() -> &'static [Self] {
        &[
            Self::Hs256,
            Self::Hs384,
            Self::Hs512,
            Self::Rs256,
            Self::Rs384,
            Self::Rs512,
            Self::Es256,
            Self::Es384,
            Self::Es512,
            Self::Ps256,
            Self::Ps384,
            Self::Ps512,
            Self::None,
        ]
    }
}

impl AsRef<str> for Algorithm {
    fn as_ref(&self) -> &str {
        match self {
            Self::Hs256 => "HS256",
            Self::Hs384 => "HS384",
            Self::Hs512 => "HS512",
            Self::Rs256 => "RS256",
            Self::Rs384 => "RS384",
            Self::Rs512 => "RS512",
            Self::Es256 => "ES256",
            Self::Es384 => "ES384",
            Self::Es512 => "ES512",
            Self::Ps256 => "PS256",
            Self::Ps384 => "PS384",
            Self::Ps512 => "PS512",
            Self::None => NONE,
        }
    }
}

impl FromStr for Algorithm {
    type Err = UnknownNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .find(|a| a.as_ref() == s)
            .copied()
            .ok_or_else(|| UnknownNameError(s.into()))
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// Signing capability of a JWS algorithm.
///
/// `secured_input` is the exact byte sequence the signature covers. `key` is
/// untyped; each implementation decides which key values it understands.
pub trait JwsAlgorithm: fmt::Debug + Send + Sync {
    /// Name used as the registry key.
    fn name(&self) -> &'static str;

    fn verify(
        &self,
        secured_input: &[u8],
        signature: &[u8],
        key: Option<&dyn Any>,
    ) -> Result<(), JoseError>;

    fn sign(&self, secured_input: &[u8], key: Option<&dyn Any>) -> Result<Bytes, JoseError>;
}

/// Instantiate a built-in algorithm by name
pub(crate) fn builtin(name: Algorithm) -> Result<Box<dyn JwsAlgorithm>, JoseError> {
    match name {
        Algorithm::Hs256 => Ok(Box::new(Hmac::hs256())),
        Algorithm::Hs384 => Ok(Box::new(Hmac::hs384())),
        Algorithm::Hs512 => Ok(Box::new(Hmac::hs512())),
        Algorithm::None => Ok(Box::new(Plaintext)),
        x => Err(JoseError::UnsupportedAlgorithm(x.to_string())),
    }
}
