//! `none` algorithm
//!
//! [rfc7518](https://tools.ietf.org/html/rfc7518#section-3.6)
use log::trace;

use super::*;

/// Name of the unsecured algorithm.
pub const NONE: &str = "none";

/// `none` algorithm. No digital signature or MAC is performed.
///
/// Both operations succeed for every input and every key. Callers that need
/// integrity protection must reject this algorithm themselves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Plaintext;

impl JwsAlgorithm for Plaintext {
    fn name(&self) -> &'static str {
        NONE
    }

    fn verify(
        &self,
        _secured_input: &[u8],
        _signature: &[u8],
        _key: Option<&dyn Any>,
    ) -> Result<(), JoseError> {
        trace!("none: verify");
        Ok(())
    }

    fn sign(&self, _secured_input: &[u8], _key: Option<&dyn Any>) -> Result<Bytes, JoseError> {
        trace!("none: sign");
        Ok(Bytes::new())
    }
}
