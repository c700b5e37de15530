//! Raw byte form of an EC key
//!
//! [`ObjectKey`] is the canonical in-memory value. Coordinate lengths are
//! checked against the curve when it is built, so every `ObjectKey` carries
//! well-sized material.

use std::fmt;

use serde_json::{Map, Value};
use zeroize::Zeroizing;

use crate::{EcKeyError, curve::CurveName, error::Result};

/// Which half of a key a conversion works on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPart {
    Public,
    Private,
}

/// Affine public point as big-endian coordinate bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EcPublicKey {
    x: Vec<u8>,
    y: Vec<u8>,
}

impl EcPublicKey {
    pub fn x(&self) -> &[u8] {
        &self.x
    }

    pub fn y(&self) -> &[u8] {
        &self.y
    }
}

/// Private scalar, optionally with its public point
#[derive(Clone, PartialEq, Eq)]
pub struct EcPrivateKey {
    d: Zeroizing<Vec<u8>>,
    public: Option<EcPublicKey>,
}

impl EcPrivateKey {
    pub fn d(&self) -> &[u8] {
        &self.d
    }

    pub fn public(&self) -> Option<&EcPublicKey> {
        self.public.as_ref()
    }
}

impl fmt::Debug for EcPrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("EcPrivateKey")
            .field("d", &"<redacted>")
            .field("public", &self.public)
            .finish()
    }
}

/// Key material, either a public point or a private scalar
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyMaterial {
    Public(EcPublicKey),
    Private(EcPrivateKey),
}

/// EC key with raw byte coordinates and its non-cryptographic members
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectKey {
    curve: CurveName,
    material: KeyMaterial,
    pub key_id: Option<String>,
    pub key_ops: Option<Vec<String>>,
    pub key_use: Option<String>,
    pub alg: Option<String>,
    pub extra: Map<String, Value>,
}

impl ObjectKey {
    /// Public key from big-endian x and y coordinates
    pub fn public(curve: CurveName, x: Vec<u8>, y: Vec<u8>) -> Result<Self> {
        let public = public_key(curve, x, y)?;
        Ok(Self::with_material(curve, KeyMaterial::Public(public)))
    }

    /// Private key from its big-endian scalar and, if known, its public point
    pub fn private(
        curve: CurveName,
        d: Vec<u8>,
        public: Option<(Vec<u8>, Vec<u8>)>,
    ) -> Result<Self> {
        let d = Zeroizing::new(d);
        check_len(curve, "d", &d)?;
        let public = public.map(|(x, y)| public_key(curve, x, y)).transpose()?;

        Ok(Self::with_material(
            curve,
            KeyMaterial::Private(EcPrivateKey { d, public }),
        ))
    }

    fn with_material(curve: CurveName, material: KeyMaterial) -> Self {
        ObjectKey {
            curve,
            material,
            key_id: None,
            key_ops: None,
            key_use: None,
            alg: None,
            extra: Map::new(),
        }
    }

    pub fn curve(&self) -> CurveName {
        self.curve
    }

    pub fn material(&self) -> &KeyMaterial {
        &self.material
    }

    pub fn is_private(&self) -> bool {
        matches!(self.material, KeyMaterial::Private(_))
    }

    /// Public point, whether held directly or alongside a private scalar
    pub fn public_key(&self) -> Option<&EcPublicKey> {
        match &self.material {
            KeyMaterial::Public(public) => Some(public),
            KeyMaterial::Private(private) => private.public(),
        }
    }

    pub fn private_key(&self) -> Option<&EcPrivateKey> {
        match &self.material {
            KeyMaterial::Private(private) => Some(private),
            KeyMaterial::Public(_) => None,
        }
    }

    /// Narrows the key to the requested part, keeping every other member
    pub fn select(&self, part: KeyPart) -> Result<ObjectKey> {
        let material = match part {
            KeyPart::Public => KeyMaterial::Public(
                self.public_key()
                    .cloned()
                    .ok_or(EcKeyError::MissingParameter("x"))?,
            ),
            KeyPart::Private => KeyMaterial::Private(
                self.private_key()
                    .cloned()
                    .ok_or(EcKeyError::MissingParameter("d"))?,
            ),
        };

        Ok(ObjectKey {
            material,
            ..self.clone()
        })
    }
}

fn public_key(curve: CurveName, x: Vec<u8>, y: Vec<u8>) -> Result<EcPublicKey> {
    check_len(curve, "x", &x)?;
    check_len(curve, "y", &y)?;
    Ok(EcPublicKey { x, y })
}

fn check_len(curve: CurveName, field: &'static str, value: &[u8]) -> Result<()> {
    let expected = curve.context().coordinate_len();
    if value.len() != expected {
        return Err(EcKeyError::InvalidLength {
            field,
            expected,
            actual: value.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_key_length_checked() {
        assert!(ObjectKey::public(CurveName::P256, vec![1; 32], vec![2; 32]).is_ok());
        assert!(matches!(
            ObjectKey::public(CurveName::P256, vec![1; 31], vec![2; 32]),
            Err(EcKeyError::InvalidLength {
                field: "x",
                expected: 32,
                actual: 31
            })
        ));
        assert!(matches!(
            ObjectKey::public(CurveName::P521, vec![1; 66], vec![2; 65]),
            Err(EcKeyError::InvalidLength { field: "y", .. })
        ));
    }

    #[test]
    fn private_key_length_checked() {
        assert!(ObjectKey::private(CurveName::P384, vec![7; 48], None).is_ok());
        assert!(matches!(
            ObjectKey::private(CurveName::P384, vec![7; 32], None),
            Err(EcKeyError::InvalidLength { field: "d", .. })
        ));
        assert!(matches!(
            ObjectKey::private(CurveName::P384, vec![7; 48], Some((vec![1; 48], vec![]))),
            Err(EcKeyError::InvalidLength { field: "y", .. })
        ));
    }

    #[test]
    fn select_public_from_private() {
        let mut key =
            ObjectKey::private(CurveName::P256, vec![9; 32], Some((vec![1; 32], vec![2; 32])))
                .unwrap();
        key.key_id = Some("kid-1".to_string());

        let public = key.select(KeyPart::Public).unwrap();
        assert!(!public.is_private());
        assert_eq!(public.public_key().unwrap().x(), &[1u8; 32]);
        assert_eq!(public.key_id.as_deref(), Some("kid-1"));

        // Source key is left as it was
        assert!(key.is_private());
    }

    #[test]
    fn select_missing_part() {
        let private_only = ObjectKey::private(CurveName::P256, vec![9; 32], None).unwrap();
        assert!(matches!(
            private_only.select(KeyPart::Public),
            Err(EcKeyError::MissingParameter("x"))
        ));

        let public_only = ObjectKey::public(CurveName::P256, vec![1; 32], vec![2; 32]).unwrap();
        assert!(matches!(
            public_only.select(KeyPart::Private),
            Err(EcKeyError::MissingParameter("d"))
        ));
    }

    #[test]
    fn private_debug_redacts_scalar() {
        let key = ObjectKey::private(CurveName::P256, vec![0xab; 32], None).unwrap();
        let printed = format!("{key:?}");
        assert!(printed.contains("redacted"));
        assert!(!printed.contains("171"));
    }
}
