//! P-256 (secp256r1/prime256v1) handles as RustCrypto keys

use p256::{PublicKey, SecretKey};

use crate::{EcKeyError, curve::CurveName, engine::EngineKeyHandle, error::Result};

impl TryFrom<&EngineKeyHandle> for PublicKey {
    type Error = EcKeyError;

    fn try_from(handle: &EngineKeyHandle) -> Result<Self> {
        if handle.curve() != CurveName::P256 {
            return Err(EcKeyError::KeyError(format!(
                "Expected a P-256 handle, got {}",
                handle.curve()
            )));
        }
        let sec1 = handle
            .to_sec1_uncompressed()
            .ok_or_else(|| EcKeyError::KeyError("P-256 handle holds no public point".into()))?;

        PublicKey::from_sec1_bytes(&sec1)
            .map_err(|e| EcKeyError::KeyError(format!("P-256 public key isn't valid: {e}")))
    }
}

impl TryFrom<&EngineKeyHandle> for SecretKey {
    type Error = EcKeyError;

    fn try_from(handle: &EngineKeyHandle) -> Result<Self> {
        if handle.curve() != CurveName::P256 {
            return Err(EcKeyError::KeyError(format!(
                "Expected a P-256 handle, got {}",
                handle.curve()
            )));
        }
        let d = handle
            .d_bytes()
            .ok_or_else(|| EcKeyError::KeyError("P-256 handle holds no private scalar".into()))?;

        SecretKey::from_slice(&d).map_err(|e| {
            EcKeyError::KeyError(format!("P-256 secret material isn't valid: {e}"))
        })
    }
}

#[cfg(test)]
mod tests {
    use p256::elliptic_curve::sec1::ToEncodedPoint;

    use super::*;
    use crate::{KeyPart, convert::to_engine_handle, jwk::Jwk};

    fn jwk() -> Jwk {
        serde_json::from_value(serde_json::json!({
            "kty": "EC",
            "crv": "P-256",
            "d": "0Dn-Cq97w8lVf0Fe6pQaynM8obOYaouDpRHUQlN9mXw",
            "x": "OqtR8tur0bXp3dpvHg8S4R_bjFEFGBfv4WKYU6o7llc",
            "y": "nPBTM3K9oYq4YyajBb7BTKCOZBWJIqvX0Cbokd03QK8"
        }))
        .unwrap()
    }

    #[test]
    fn handles_convert_to_matching_keys() {
        let jwk = jwk();
        let public = to_engine_handle(&jwk, KeyPart::Public).unwrap();
        let private = to_engine_handle(&jwk, KeyPart::Private).unwrap();

        let public_key = PublicKey::try_from(&public).unwrap();
        let secret_key = SecretKey::try_from(&private).unwrap();

        assert_eq!(secret_key.public_key(), public_key);
        assert_eq!(
            public_key.to_encoded_point(false).as_bytes(),
            public.to_sec1_uncompressed().unwrap().as_slice()
        );
    }

    #[test]
    fn wrong_part_or_curve() {
        let private = to_engine_handle(&jwk(), KeyPart::Private).unwrap();
        assert!(matches!(
            PublicKey::try_from(&private),
            Err(EcKeyError::KeyError(_))
        ));

        let p384 = CurveName::P384.context().key_from_private("01").unwrap();
        assert!(matches!(
            SecretKey::try_from(&p384),
            Err(EcKeyError::KeyError(_))
        ));
    }
}
