//! P-384 (secp384r1) handles as RustCrypto keys

use p384::{PublicKey, SecretKey};

use crate::{EcKeyError, curve::CurveName, engine::EngineKeyHandle, error::Result};

impl TryFrom<&EngineKeyHandle> for PublicKey {
    type Error = EcKeyError;

    fn try_from(handle: &EngineKeyHandle) -> Result<Self> {
        if handle.curve() != CurveName::P384 {
            return Err(EcKeyError::KeyError(format!(
                "Expected a P-384 handle, got {}",
                handle.curve()
            )));
        }
        let sec1 = handle
            .to_sec1_uncompressed()
            .ok_or_else(|| EcKeyError::KeyError("P-384 handle holds no public point".into()))?;

        PublicKey::from_sec1_bytes(&sec1)
            .map_err(|e| EcKeyError::KeyError(format!("P-384 public key isn't valid: {e}")))
    }
}

impl TryFrom<&EngineKeyHandle> for SecretKey {
    type Error = EcKeyError;

    fn try_from(handle: &EngineKeyHandle) -> Result<Self> {
        if handle.curve() != CurveName::P384 {
            return Err(EcKeyError::KeyError(format!(
                "Expected a P-384 handle, got {}",
                handle.curve()
            )));
        }
        let d = handle
            .d_bytes()
            .ok_or_else(|| EcKeyError::KeyError("P-384 handle holds no private scalar".into()))?;

        SecretKey::from_slice(&d).map_err(|e| {
            EcKeyError::KeyError(format!("P-384 secret material isn't valid: {e}"))
        })
    }
}
