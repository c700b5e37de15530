//! P-521 (secp521r1) handles as RustCrypto keys

use p521::{
    NistP521,
    elliptic_curve::{PublicKey, SecretKey},
};

use crate::{EcKeyError, curve::CurveName, engine::EngineKeyHandle, error::Result};

fn check_curve(handle: &EngineKeyHandle) -> Result<()> {
    if handle.curve() != CurveName::P521 {
        return Err(EcKeyError::KeyError(format!(
            "Expected a P-521 handle, got {}",
            handle.curve()
        )));
    }
    Ok(())
}

impl TryFrom<&EngineKeyHandle> for PublicKey<NistP521> {
    type Error = EcKeyError;

    fn try_from(handle: &EngineKeyHandle) -> Result<Self> {
        check_curve(handle)?;
        let sec1 = handle
            .to_sec1_uncompressed()
            .ok_or_else(|| EcKeyError::KeyError("P-521 handle holds no public point".into()))?;

        PublicKey::from_sec1_bytes(&sec1)
            .map_err(|e| EcKeyError::KeyError(format!("P-521 public key isn't valid: {e}")))
    }
}

impl TryFrom<&EngineKeyHandle> for SecretKey<NistP521> {
    type Error = EcKeyError;

    fn try_from(handle: &EngineKeyHandle) -> Result<Self> {
        check_curve(handle)?;
        let d = handle
            .d_bytes()
            .ok_or_else(|| EcKeyError::KeyError("P-521 handle holds no private scalar".into()))?;

        SecretKey::from_slice(&d).map_err(|e| {
            EcKeyError::KeyError(format!("P-521 secret material isn't valid: {e}"))
        })
    }
}
