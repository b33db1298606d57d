//! `HS256`, `HS384`, `HS512`
use ring::hmac;

use super::*;

/// HMAC with SHA-2.
///
/// Keys are byte strings: `Vec<u8>`, `&'static [u8]`, `Bytes`, `String` or
/// `&'static str`.
#[derive(Clone, Copy)]
pub struct Hmac {
    name: &'static str,
    algorithm: hmac::Algorithm,
}

impl Hmac {
    pub fn hs256() -> Self {
        Self {
            name: "HS256",
            algorithm: hmac::HMAC_SHA256,
        }
    }

    pub fn hs384() -> Self {
        Self {
            name: "HS384",
            algorithm: hmac::HMAC_SHA384,
        }
    }

    pub fn hs512() -> Self {
        Self {
            name: "HS512",
            algorithm: hmac::HMAC_SHA512,
        }
    }

    fn key(&self, key: Option<&dyn Any>) -> Result<hmac::Key, JoseError> {
        let key = key.ok_or(JoseError::MissingKey(self.name))?;
        let secret: &[u8] = if let Some(k) = key.downcast_ref::<Vec<u8>>() {
            k
        } else if let Some(k) = key.downcast_ref::<&'static [u8]>() {
            k
        } else if let Some(k) = key.downcast_ref::<Bytes>() {
            k
        } else if let Some(k) = key.downcast_ref::<String>() {
            k.as_bytes()
        } else if let Some(k) = key.downcast_ref::<&'static str>() {
            k.as_bytes()
        } else {
            return Err(JoseError::InvalidKey(self.name));
        };
        Ok(hmac::Key::new(self.algorithm, secret))
    }
}

impl fmt::Debug for Hmac {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hmac({})", self.name)
    }
}

impl JwsAlgorithm for Hmac {
    fn name(&self) -> &'static str {
        self.name
    }

    fn verify(
        &self,
        secured_input: &[u8],
        signature: &[u8],
        key: Option<&dyn Any>,
    ) -> Result<(), JoseError> {
        let key = self.key(key)?;
        hmac::verify(&key, secured_input, signature)
            .map_err(|_| JoseError::InvalidSignature(self.name))
    }

    fn sign(&self, secured_input: &[u8], key: Option<&dyn Any>) -> Result<Bytes, JoseError> {
        let key = self.key(key)?;
        let tag = hmac::sign(&key, secured_input);
        Ok(Bytes::copy_from_slice(tag.as_ref()))
    }
}
