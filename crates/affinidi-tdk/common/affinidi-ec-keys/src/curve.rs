//! Curve registry and size oracle for the NIST prime curves
//!
//! The registry is a process-wide table built on first use and never mutated
//! afterwards, so lookups from any thread need no locking.

use std::{fmt, str::FromStr, sync::LazyLock};

use num_bigint::BigUint;
use num_traits::Num;
use serde::{Deserialize, Serialize};

use crate::{EcKeyError, error::Result};

/// Supported JWK `crv` identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CurveName {
    #[serde(rename = "P-256")]
    P256,
    #[serde(rename = "P-384")]
    P384,
    #[serde(rename = "P-521")]
    P521,
}

impl CurveName {
    /// JWK `crv` value for this curve
    pub fn as_str(&self) -> &'static str {
        match self {
            CurveName::P256 => "P-256",
            CurveName::P384 => "P-384",
            CurveName::P521 => "P-521",
        }
    }

    /// Arithmetic context for this curve from the registry
    pub fn context(self) -> &'static CurveContext {
        match self {
            CurveName::P256 => &REGISTRY[0],
            CurveName::P384 => &REGISTRY[1],
            CurveName::P521 => &REGISTRY[2],
        }
    }
}

impl TryFrom<&str> for CurveName {
    type Error = EcKeyError;

    fn try_from(value: &str) -> Result<Self> {
        match value {
            "P-256" => Ok(CurveName::P256),
            "P-384" => Ok(CurveName::P384),
            "P-521" => Ok(CurveName::P521),
            _ => Err(EcKeyError::UnsupportedCurve(value.to_string())),
        }
    }
}

impl FromStr for CurveName {
    type Err = EcKeyError;

    fn from_str(s: &str) -> Result<Self> {
        CurveName::try_from(s)
    }
}

impl fmt::Display for CurveName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Domain parameters of a short-Weierstrass curve `y² = x³ + a·x + b (mod p)`
#[derive(Debug)]
pub struct CurveContext {
    name: CurveName,
    p: BigUint,
    a: BigUint,
    b: BigUint,
    n: BigUint,
    generator: (BigUint, BigUint),
    coordinate_len: usize,
}

impl CurveContext {
    fn from_hex(name: CurveName, params: &DomainParams) -> Self {
        let p = parse_hex(params.p);
        let coordinate_len = (p.bits() as usize).div_ceil(8);

        CurveContext {
            name,
            a: parse_hex(params.a),
            b: parse_hex(params.b),
            n: parse_hex(params.n),
            generator: (parse_hex(params.gx), parse_hex(params.gy)),
            coordinate_len,
            p,
        }
    }

    pub fn name(&self) -> CurveName {
        self.name
    }

    /// Field prime
    pub fn p(&self) -> &BigUint {
        &self.p
    }

    pub fn a(&self) -> &BigUint {
        &self.a
    }

    pub fn b(&self) -> &BigUint {
        &self.b
    }

    /// Order of the base point
    pub fn n(&self) -> &BigUint {
        &self.n
    }

    /// Affine coordinates of the base point
    pub fn generator(&self) -> (&BigUint, &BigUint) {
        (&self.generator.0, &self.generator.1)
    }

    /// Byte width of a field element (x, y and d in JWK form)
    pub fn coordinate_len(&self) -> usize {
        self.coordinate_len
    }

    /// Bit length of the curve order n
    pub fn order_bits(&self) -> usize {
        self.n.bits() as usize
    }

    /// Byte length of the curve order n, rounded up
    pub fn order_bytes(&self) -> usize {
        self.order_bits().div_ceil(8)
    }
}

struct DomainParams {
    p: &'static str,
    a: &'static str,
    b: &'static str,
    n: &'static str,
    gx: &'static str,
    gy: &'static str,
}

// SEC 2 v2, sections 2.4.2, 2.5.1 and 2.6.1
const P256_PARAMS: DomainParams = DomainParams {
    p: "ffffffff00000001000000000000000000000000ffffffffffffffffffffffff",
    a: "ffffffff00000001000000000000000000000000fffffffffffffffffffffffc",
    b: "5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b",
    n: "ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551",
    gx: "6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296",
    gy: "4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5",
};

const P384_PARAMS: DomainParams = DomainParams {
    p: "fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffeffffffff0000000000000000ffffffff",
    a: "fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffeffffffff0000000000000000fffffffc",
    b: "b3312fa7e23ee7e4988e056be3f82d19181d9c6efe8141120314088f5013875ac656398d8a2ed19d2a85c8edd3ec2aef",
    n: "ffffffffffffffffffffffffffffffffffffffffffffffffc7634d81f4372ddf581a0db248b0a77aecec196accc52973",
    gx: "aa87ca22be8b05378eb1c71ef320ad746e1d3b628ba79b9859f741e082542a385502f25dbf55296c3a545e3872760ab7",
    gy: "3617de4a96262c6f5d9e98bf9292dc29f8f41dbd289a147ce9da3113b5f0b8c00a60b1ce1d7e819d7a431d7c90ea0e5f",
};

const P521_PARAMS: DomainParams = DomainParams {
    p: "01ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
    a: "01fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffc",
    b: "0051953eb9618e1c9a1f929a21a0b68540eea2da725b99b315f3b8b489918ef109e156193951ec7e937b1652c0bd3bb1bf073573df883d2c34f1ef451fd46b503f00",
    n: "01fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffa51868783bf2f966b7fcc0148f709a5d03bb5c9b8899c47aebb6fb71e91386409",
    gx: "00c6858e06b70404e9cd9e3ecb662395b4429c648139053fb521f828af606b4d3dbaa14b5e77efe75928fe1dc127a2ffa8de3348b3c1856a429bf97e7e31c2e5bd66",
    gy: "011839296a789a3bc0045c8a5fb42c7d1bd998f54449579b446817afbd17273e662c97ee72995ef42640c550b9013fad0761353c7086a272c24088be94769fd16650",
};

// Constants above are valid hex
fn parse_hex(value: &str) -> BigUint {
    BigUint::from_str_radix(value, 16).expect("curve constant is valid hex")
}

static REGISTRY: LazyLock<[CurveContext; 3]> = LazyLock::new(|| {
    [
        CurveContext::from_hex(CurveName::P256, &P256_PARAMS),
        CurveContext::from_hex(CurveName::P384, &P384_PARAMS),
        CurveContext::from_hex(CurveName::P521, &P521_PARAMS),
    ]
});

/// Resolves a JWK `crv` value to its arithmetic context
pub fn lookup(name: &str) -> Result<&'static CurveContext> {
    CurveName::try_from(name).map(CurveName::context)
}

/// Size of the curve order for `name`
///
/// Returns the bit length of n, or its byte length when `in_bytes` is set.
/// An unknown curve yields `None` rather than an error so callers can use this
/// as a soft check.
///
/// ```
/// use affinidi_ec_keys::curve_size;
///
/// assert_eq!(curve_size("P-256", false), Some(256));
/// assert_eq!(curve_size("P-521", true), Some(66));
/// assert_eq!(curve_size("unknown-curve", false), None);
/// ```
pub fn curve_size(name: &str, in_bytes: bool) -> Option<usize> {
    let context = lookup(name).ok()?;
    if in_bytes {
        Some(context.order_bytes())
    } else {
        Some(context.order_bits())
    }
}
