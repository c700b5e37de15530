//! Engine key handles
//!
//! An [`EngineKeyHandle`] is the arithmetic-side view of a key: a public point
//! or a private scalar bound to its curve context. Handles are built from hex
//! encoded coordinates and cannot be changed once constructed.
//!
//! The private scalar is held as fixed-width big-endian bytes and zeroized on
//! drop, in every clone of the handle.

use std::fmt;

use num_bigint::BigUint;
use num_traits::Num;
use zeroize::Zeroizing;

use crate::{
    EcKeyError,
    curve::{CurveContext, CurveName},
    error::Result,
};

#[derive(Clone)]
enum HandleKind {
    Public { x: BigUint, y: BigUint },
    Private { d: Zeroizing<Vec<u8>> },
}

/// Opaque key handle produced from a [`CurveContext`]
#[derive(Clone)]
pub struct EngineKeyHandle {
    context: &'static CurveContext,
    kind: HandleKind,
}

impl CurveContext {
    /// Builds a public point handle from hex encoded affine coordinates
    ///
    /// No curve membership check happens here, see [`crate::validate()`].
    pub fn key_from_public(&'static self, x: &str, y: &str) -> Result<EngineKeyHandle> {
        Ok(EngineKeyHandle {
            context: self,
            kind: HandleKind::Public {
                x: parse_hex("x", x)?,
                y: parse_hex("y", y)?,
            },
        })
    }

    /// Builds a private scalar handle from a hex encoded value
    ///
    /// Leading zeros are ignored. A scalar wider than the curve's coordinate
    /// width fails with [`EcKeyError::InvalidLength`].
    pub fn key_from_private(&'static self, d: &str) -> Result<EngineKeyHandle> {
        Ok(EngineKeyHandle {
            context: self,
            kind: HandleKind::Private {
                d: parse_scalar(d, self.coordinate_len())?,
            },
        })
    }
}

fn parse_hex(field: &str, value: &str) -> Result<BigUint> {
    BigUint::from_str_radix(value, 16)
        .map_err(|e| EcKeyError::Decoding(format!("Invalid hex for {field}: {e}")))
}

fn parse_scalar(value: &str, len: usize) -> Result<Zeroizing<Vec<u8>>> {
    if value.is_empty() {
        return Err(EcKeyError::Decoding("Invalid hex for d: empty".into()));
    }
    let padded = Zeroizing::new(if value.len() % 2 == 1 {
        format!("0{value}")
    } else {
        value.to_string()
    });
    let raw = Zeroizing::new(
        hex::decode(padded.as_str())
            .map_err(|e| EcKeyError::Decoding(format!("Invalid hex for d: {e}")))?,
    );

    let start = raw.iter().position(|b| *b != 0).unwrap_or(raw.len());
    let significant = &raw[start..];
    if significant.len() > len {
        return Err(EcKeyError::InvalidLength {
            field: "d",
            expected: len,
            actual: significant.len(),
        });
    }

    let mut d = Zeroizing::new(vec![0u8; len]);
    d[len - significant.len()..].copy_from_slice(significant);
    Ok(d)
}

impl EngineKeyHandle {
    pub fn curve(&self) -> CurveName {
        self.context.name()
    }

    pub fn context(&self) -> &'static CurveContext {
        self.context
    }

    pub fn is_public(&self) -> bool {
        matches!(self.kind, HandleKind::Public { .. })
    }

    /// Affine coordinates of a public handle
    pub fn public_point(&self) -> Option<(&BigUint, &BigUint)> {
        match &self.kind {
            HandleKind::Public { x, y } => Some((x, y)),
            HandleKind::Private { .. } => None,
        }
    }

    /// Big-endian scalar of a private handle, at the curve's coordinate width
    pub fn private_scalar(&self) -> Option<&[u8]> {
        match &self.kind {
            HandleKind::Private { d } => Some(d.as_slice()),
            HandleKind::Public { .. } => None,
        }
    }

    /// Big-endian x coordinate, left padded to the curve's coordinate width
    ///
    /// `None` for a private handle or an x too wide for the curve.
    pub fn x_bytes(&self) -> Option<Vec<u8>> {
        let (x, _) = self.public_point()?;
        to_fixed_bytes(x, self.context.coordinate_len())
    }

    /// Big-endian y coordinate, left padded to the curve's coordinate width
    ///
    /// `None` for a private handle or a y too wide for the curve.
    pub fn y_bytes(&self) -> Option<Vec<u8>> {
        let (_, y) = self.public_point()?;
        to_fixed_bytes(y, self.context.coordinate_len())
    }

    /// Copy of the private scalar, see [`EngineKeyHandle::private_scalar`]
    pub fn d_bytes(&self) -> Option<Zeroizing<Vec<u8>>> {
        self.private_scalar().map(|d| Zeroizing::new(d.to_vec()))
    }

    /// SEC1 uncompressed encoding (0x04 ‖ X ‖ Y) of a public handle
    pub fn to_sec1_uncompressed(&self) -> Option<Vec<u8>> {
        let (x, y) = (self.x_bytes()?, self.y_bytes()?);
        let mut out = Vec::with_capacity(1 + x.len() + y.len());
        out.push(crate::convert::UNCOMPRESSED_TAG);
        out.extend_from_slice(&x);
        out.extend_from_slice(&y);
        Some(out)
    }
}

fn to_fixed_bytes(value: &BigUint, len: usize) -> Option<Vec<u8>> {
    let raw = value.to_bytes_be();
    if raw.len() > len {
        return None;
    }
    let mut out = vec![0u8; len - raw.len()];
    out.extend_from_slice(&raw);
    Some(out)
}

// Never print the scalar
impl fmt::Debug for EngineKeyHandle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut s = f.debug_struct("EngineKeyHandle");
        s.field("curve", &self.curve());
        match &self.kind {
            HandleKind::Public { x, y } => s.field("x", x).field("y", y),
            HandleKind::Private { .. } => s.field("d", &"<redacted>"),
        };
        s.finish()
    }
}
