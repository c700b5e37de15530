//! Prime field elements used to evaluate the curve equation

use std::ops::{Add, Mul};

use num_bigint::BigUint;

/// An element of GF(p), always held reduced into `[0, p)`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldElement<'a> {
    value: BigUint,
    p: &'a BigUint,
}

impl<'a> FieldElement<'a> {
    /// Creates a field element, `None` if `value` is not below the modulus
    pub fn new(value: &BigUint, p: &'a BigUint) -> Option<Self> {
        if value >= p {
            return None;
        }

        Some(Self {
            value: value.clone(),
            p,
        })
    }

    pub fn value(&self) -> &BigUint {
        &self.value
    }

    pub fn square(&self) -> Self {
        self * self
    }

    pub fn cube(&self) -> Self {
        &self.square() * self
    }
}

impl<'a> Add for &FieldElement<'a> {
    type Output = FieldElement<'a>;

    fn add(self, other: &FieldElement<'a>) -> FieldElement<'a> {
        assert_eq!(
            self.p, other.p,
            "Cannot add field elements with different moduli"
        );

        FieldElement {
            value: (&self.value + &other.value) % self.p,
            p: self.p,
        }
    }
}

impl<'a> Mul for &FieldElement<'a> {
    type Output = FieldElement<'a>;

    fn mul(self, other: &FieldElement<'a>) -> FieldElement<'a> {
        assert_eq!(
            self.p, other.p,
            "Cannot multiply field elements with different moduli"
        );

        FieldElement {
            value: (&self.value * &other.value) % self.p,
            p: self.p,
        }
    }
}
