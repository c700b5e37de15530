//! Public key validation
//!
//! Recomputes the short-Weierstrass equation `y² = x³ + a·x + b (mod p)` for
//! the handle's point instead of trusting any arithmetic backend's own
//! validation.

use crate::{engine::EngineKeyHandle, field::FieldElement};

/// Returns true if the handle holds a public point that lies on its curve
///
/// Private handles and coordinates outside `[0, p)` are never valid.
pub fn validate(handle: &EngineKeyHandle) -> bool {
    let Some((x, y)) = handle.public_point() else {
        return false;
    };
    let ctx = handle.context();
    let p = ctx.p();

    let (Some(x), Some(y)) = (FieldElement::new(x, p), FieldElement::new(y, p)) else {
        return false;
    };
    // a and b come from the registry and are already reduced
    let (Some(a), Some(b)) = (FieldElement::new(ctx.a(), p), FieldElement::new(ctx.b(), p))
    else {
        return false;
    };

    let lhs = y.square();
    let rhs = &(&x.cube() + &(&a * &x)) + &b;

    lhs == rhs
}

#[cfg(test)]
mod tests {
    use num_bigint::BigUint;

    use super::*;
    use crate::curve::CurveName;

    fn hex(value: &BigUint) -> String {
        value.to_str_radix(16)
    }

    #[test]
    fn generators_are_valid() {
        for name in [CurveName::P256, CurveName::P384, CurveName::P521] {
            let ctx = name.context();
            let (gx, gy) = ctx.generator();
            let handle = ctx.key_from_public(&hex(gx), &hex(gy)).unwrap();
            assert!(validate(&handle), "{name} generator should validate");
        }
    }

    #[test]
    fn flipped_bit_is_invalid() {
        for name in [CurveName::P256, CurveName::P384, CurveName::P521] {
            let ctx = name.context();
            let (gx, gy) = ctx.generator();
            let bad_y = gy ^ &BigUint::from(1u32);
            let handle = ctx.key_from_public(&hex(gx), &hex(&bad_y)).unwrap();
            assert!(!validate(&handle), "{name} tampered point should fail");
        }
    }

    #[test]
    fn unreduced_coordinate_is_invalid() {
        let ctx = CurveName::P256.context();
        let (gx, gy) = ctx.generator();
        // y + p satisfies the equation mod p but is not a canonical coordinate
        let y_plus_p = gy + ctx.p();
        let handle = ctx.key_from_public(&hex(gx), &hex(&y_plus_p)).unwrap();
        assert!(!validate(&handle));
    }

    #[test]
    fn origin_is_invalid() {
        let ctx = CurveName::P384.context();
        let handle = ctx.key_from_public("00", "00").unwrap();
        assert!(!validate(&handle));
    }

    #[test]
    fn private_handle_is_not_a_public_key() {
        let handle = CurveName::P256.context().key_from_private("01").unwrap();
        assert!(!validate(&handle));
    }
}
