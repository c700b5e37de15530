//! Conversions between JWK, raw object, SEC1 buffer and engine handle forms
//!
//! Every conversion builds a fresh value from the fields it needs and leaves
//! its input alone. The JWK export drops `key_ops`, `use` and `alg` since they
//! may not describe the converted key.

use base64::{Engine, prelude::BASE64_URL_SAFE_NO_PAD};
use tracing::{debug, warn};
use zeroize::Zeroizing;

use crate::{
    EcKeyError,
    curve::CurveName,
    engine::EngineKeyHandle,
    error::Result,
    jwk::{EC_KEY_TYPE, Jwk},
    key::{KeyMaterial, KeyPart, ObjectKey},
    validate::validate,
};

/// SEC1 marker byte for an uncompressed point
pub const UNCOMPRESSED_TAG: u8 = 0x04;

/// Any EC key form that can be normalised into an [`ObjectKey`]
pub trait EcKey {
    /// Raw byte form holding only the requested key part
    fn to_object(&self, part: KeyPart) -> Result<ObjectKey>;
}

impl EcKey for ObjectKey {
    fn to_object(&self, part: KeyPart) -> Result<ObjectKey> {
        self.select(part)
    }
}

impl EcKey for Jwk {
    fn to_object(&self, part: KeyPart) -> Result<ObjectKey> {
        if self.kty != EC_KEY_TYPE {
            return Err(EcKeyError::UnsupportedKeyType(self.kty.clone()));
        }
        let curve = self.curve_name()?;

        let mut object = match part {
            KeyPart::Public => ObjectKey::public(
                curve,
                decode_member("x", self.x.as_deref())?,
                decode_member("y", self.y.as_deref())?,
            )?,
            KeyPart::Private => ObjectKey::private(
                curve,
                decode_member("d", self.d.as_deref())?,
                self.public_coordinates(curve),
            )?,
        };

        object.key_id = self.key_id.clone();
        object.key_ops = self.key_ops.clone();
        object.key_use = self.key_use.clone();
        object.alg = self.alg.clone();
        object.extra = self.extra.clone();

        Ok(object)
    }
}

impl Jwk {
    /// Public point carried next to `d`, if both coordinates decode to the
    /// curve's width. The private part never fails on them.
    fn public_coordinates(&self, curve: CurveName) -> Option<(Vec<u8>, Vec<u8>)> {
        let len = curve.context().coordinate_len();
        let x = decode_member("x", self.x.as_deref()).ok()?;
        let y = decode_member("y", self.y.as_deref()).ok()?;
        (x.len() == len && y.len() == len).then_some((x, y))
    }
}

fn decode_member(field: &'static str, value: Option<&str>) -> Result<Vec<u8>> {
    let value = value.ok_or(EcKeyError::MissingParameter(field))?;
    BASE64_URL_SAFE_NO_PAD
        .decode(value)
        .map_err(|e| EcKeyError::Decoding(format!("Failed to decode {field}: {e}")))
}

/// Decodes the requested part of `key` into raw byte coordinates
///
/// Public: `x` and `y`. Private: `d`, plus `x` and `y` when the key has both
/// and they are well formed.
/// Members other than the coordinates are carried over unchanged.
pub fn to_object<K: EcKey + ?Sized>(key: &K, part: KeyPart) -> Result<ObjectKey> {
    key.to_object(part)
}

/// Encodes the requested part of `key` as a JWK
///
/// A public export never carries `d`. `key_ops`, `use` and `alg` are always
/// removed.
pub fn to_jwk<K: EcKey + ?Sized>(key: &K, part: KeyPart) -> Result<Jwk> {
    let object = key.to_object(part)?;
    debug!(curve = %object.curve(), ?part, "Exporting EC key as JWK");

    let mut jwk = Jwk::new(object.curve());
    jwk.key_id = object.key_id.clone();
    jwk.extra = object.extra.clone();

    if let Some(public) = object.public_key() {
        jwk.x = Some(BASE64_URL_SAFE_NO_PAD.encode(public.x()));
        jwk.y = Some(BASE64_URL_SAFE_NO_PAD.encode(public.y()));
    }
    if let KeyMaterial::Private(private) = object.material() {
        jwk.d = Some(BASE64_URL_SAFE_NO_PAD.encode(private.d()));
    }

    Ok(jwk)
}

/// Serializes the requested part of `key` into a single buffer
///
/// Public keys become the SEC1 uncompressed point `0x04 ‖ X ‖ Y`, private keys
/// the scalar `D` alone.
pub fn to_buffer<K: EcKey + ?Sized>(key: &K, part: KeyPart) -> Result<Vec<u8>> {
    let object = key.to_object(part)?;

    Ok(match object.material() {
        KeyMaterial::Public(public) => {
            let mut buffer = Vec::with_capacity(1 + public.x().len() + public.y().len());
            buffer.push(UNCOMPRESSED_TAG);
            buffer.extend_from_slice(public.x());
            buffer.extend_from_slice(public.y());
            buffer
        }
        KeyMaterial::Private(private) => private.d().to_vec(),
    })
}

/// Parses a buffer produced by [`to_buffer`] back into an [`ObjectKey`]
///
/// Only uncompressed points are accepted for public keys.
pub fn from_buffer(curve: CurveName, buffer: &[u8], part: KeyPart) -> Result<ObjectKey> {
    let len = curve.context().coordinate_len();

    match part {
        KeyPart::Public => {
            if buffer.len() != 1 + 2 * len {
                return Err(EcKeyError::InvalidLength {
                    field: "point",
                    expected: 1 + 2 * len,
                    actual: buffer.len(),
                });
            }
            let (tag, coordinates) = buffer.split_at(1);
            if tag[0] != UNCOMPRESSED_TAG {
                return Err(EcKeyError::Decoding(format!(
                    "Expected uncompressed point tag 0x04, got 0x{:02x}",
                    tag[0]
                )));
            }
            let (x, y) = coordinates.split_at(len);
            ObjectKey::public(curve, x.to_vec(), y.to_vec())
        }
        KeyPart::Private => ObjectKey::private(curve, buffer.to_vec(), None),
    }
}

/// Builds an engine handle for the requested part of `key`
///
/// Public points must satisfy the curve equation, otherwise no handle is
/// returned and the call fails with [`EcKeyError::InvalidPublicKey`].
pub fn to_engine_handle<K: EcKey + ?Sized>(key: &K, part: KeyPart) -> Result<EngineKeyHandle> {
    let object = key.to_object(part)?;
    let context = object.curve().context();
    debug!(curve = %object.curve(), ?part, "Building EC engine handle");

    match object.material() {
        KeyMaterial::Public(public) => {
            let handle =
                context.key_from_public(&hex::encode(public.x()), &hex::encode(public.y()))?;
            if !validate(&handle) {
                warn!(curve = %object.curve(), "EC public key is not on its curve");
                return Err(EcKeyError::InvalidPublicKey);
            }
            Ok(handle)
        }
        KeyMaterial::Private(private) => {
            let d = Zeroizing::new(hex::encode(private.d()));
            context.key_from_private(&d)
        }
    }
}
