//! Elliptic curve key conversion and public key validation for JWK based formats
//!
//! This crate provides:
//! - Conversion of P-256, P-384 and P-521 keys between JWK, raw byte and SEC1
//!   buffer forms
//! - Engine key handles, only issued for public keys that lie on their curve
//! - Curve size lookups for sizing signatures and coordinates
//!
//! ```
//! use affinidi_ec_keys::{Jwk, KeyPart, to_buffer, to_engine_handle};
//!
//! let jwk: Jwk = serde_json::from_str(r#"{
//!     "kty": "EC",
//!     "crv": "P-256",
//!     "x": "OqtR8tur0bXp3dpvHg8S4R_bjFEFGBfv4WKYU6o7llc",
//!     "y": "nPBTM3K9oYq4YyajBb7BTKCOZBWJIqvX0Cbokd03QK8"
//! }"#).unwrap();
//!
//! let point = to_buffer(&jwk, KeyPart::Public).unwrap();
//! assert_eq!(point.len(), 65);
//!
//! let handle = to_engine_handle(&jwk, KeyPart::Public).unwrap();
//! assert!(handle.is_public());
//! ```

mod convert;
mod curve;
mod engine;
mod error;
mod field;
mod jwk;
mod key;
mod validate;

#[cfg(feature = "p256")]
pub mod p256;

#[cfg(feature = "p384")]
pub mod p384;

#[cfg(feature = "p521")]
pub mod p521;

pub use convert::{
    EcKey, UNCOMPRESSED_TAG, from_buffer, to_buffer, to_engine_handle, to_jwk, to_object,
};
pub use curve::{CurveContext, CurveName, curve_size, lookup};
pub use engine::EngineKeyHandle;
pub use error::{EcKeyError, Result};
pub use field::FieldElement;
pub use jwk::Jwk;
pub use key::{EcPrivateKey, EcPublicKey, KeyMaterial, KeyPart, ObjectKey};
pub use validate::validate;
