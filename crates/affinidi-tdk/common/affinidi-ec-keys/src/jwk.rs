//! JWK (JSON Web Key) form of an EC key per RFC 7517 / RFC 7518

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use zeroize::Zeroize;

use crate::{curve::CurveName, error::Result};

pub(crate) const EC_KEY_TYPE: &str = "EC";

fn default_key_type() -> String {
    EC_KEY_TYPE.to_string()
}

/// EC JWK with base64url encoded coordinates
///
/// `key_ops`, `use` and `alg` are kept when parsing but never emitted by a
/// conversion. Any other members pass through untouched in `extra`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Jwk {
    #[serde(default = "default_key_type")]
    pub kty: String,

    #[serde(rename = "kid")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_id: Option<String>,

    #[serde(rename = "crv")]
    pub curve: String,

    // Public key co-ordinates
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<String>,

    // Private key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub d: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_ops: Option<Vec<String>>,
    #[serde(rename = "use")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_use: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alg: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Jwk {
    /// Empty EC JWK for the given curve
    pub fn new(curve: CurveName) -> Self {
        Jwk {
            kty: default_key_type(),
            key_id: None,
            curve: curve.to_string(),
            x: None,
            y: None,
            d: None,
            key_ops: None,
            key_use: None,
            alg: None,
            extra: Map::new(),
        }
    }

    /// Parsed `crv`, fails if the curve isn't supported
    pub fn curve_name(&self) -> Result<CurveName> {
        CurveName::try_from(self.curve.as_str())
    }
}

impl Drop for Jwk {
    fn drop(&mut self) {
        // Zeroize private key
        self.d.zeroize();
    }
}
