use std::ops::{Add, Mul, Neg, Sub};

use num_bigint::BigInt;
use num_traits::Zero;

/// 3D vector of arbitrary-precision integers.
///
/// Used interchangeably for positions, velocities and plane normals. The
/// components are `BigInt` rather than a fixed-width integer: cross products
/// of plane normals and their linear combinations grow far beyond 128 bits
/// for realistic inputs.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Vec3 {
    pub x: BigInt,
    pub y: BigInt,
    pub z: BigInt,
}

impl Vec3 {
    /// Create new vector
    pub fn new(x: impl Into<BigInt>, y: impl Into<BigInt>, z: impl Into<BigInt>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
            z: z.into(),
        }
    }

    /// Dot product of two vectors
    pub fn dot(&self, other: &Vec3) -> BigInt {
        &self.x * &other.x + &self.y * &other.y + &self.z * &other.z
    }

    /// Cross product of two vectors
    pub fn cross(&self, other: &Vec3) -> Self {
        Self {
            x: &self.y * &other.z - &self.z * &other.y,
            y: &self.z * &other.x - &self.x * &other.z,
            z: &self.x * &other.y - &self.y * &other.x,
        }
    }

    /// Whether all three components are zero
    pub fn is_zero(&self) -> bool {
        self.x.is_zero() && self.y.is_zero() && self.z.is_zero()
    }

    /// The sum of the three components
    pub fn component_sum(&self) -> BigInt {
        &self.x + &self.y + &self.z
    }
}

impl Neg for Vec3 {
    type Output = Self;
    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl Neg for &Vec3 {
    type Output = Vec3;
    fn neg(self) -> Vec3 {
        Vec3 {
            x: -&self.x,
            y: -&self.y,
            z: -&self.z,
        }
    }
}

impl Add for &Vec3 {
    type Output = Vec3;
    fn add(self, other: Self) -> Vec3 {
        Vec3 {
            x: &self.x + &other.x,
            y: &self.y + &other.y,
            z: &self.z + &other.z,
        }
    }
}

impl Sub for &Vec3 {
    type Output = Vec3;
    fn sub(self, other: Self) -> Vec3 {
        Vec3 {
            x: &self.x - &other.x,
            y: &self.y - &other.y,
            z: &self.z - &other.z,
        }
    }
}

impl Mul<&BigInt> for &Vec3 {
    type Output = Vec3;
    fn mul(self, other: &BigInt) -> Vec3 {
        Vec3 {
            x: &self.x * other,
            y: &self.y * other,
            z: &self.z * other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn vec3() -> impl Strategy<Value = Vec3> {
        (any::<i64>(), any::<i64>(), any::<i64>()).prop_map(|(x, y, z)| Vec3::new(x, y, z))
    }

    proptest! {
        #[test]
        fn cross_anti_commutes(a in vec3(), b in vec3()) {
            prop_assert_eq!(a.cross(&b), -&b.cross(&a));
        }

        #[test]
        fn cross_is_orthogonal_to_both_arguments(a in vec3(), b in vec3()) {
            let c = a.cross(&b);
            prop_assert!(a.dot(&c).is_zero());
            prop_assert!(b.dot(&c).is_zero());
        }

        #[test]
        fn cross_with_self_is_zero(a in vec3()) {
            prop_assert!(a.cross(&a).is_zero());
        }

        #[test]
        fn dot_commutes(a in vec3(), b in vec3()) {
            prop_assert_eq!(a.dot(&b), b.dot(&a));
        }
    }

    #[test]
    fn cross_of_axes() {
        let x = Vec3::new(1, 0, 0);
        let y = Vec3::new(0, 1, 0);
        let z = Vec3::new(0, 0, 1);
        assert_eq!(x.cross(&y), z);
        assert_eq!(y.cross(&z), x);
        assert_eq!(z.cross(&x), y);
    }

    #[test]
    fn component_sum() {
        assert_eq!(Vec3::new(24, 13, 10).component_sum(), BigInt::from(47));
        assert_eq!(Vec3::new(-5, 3, 2).component_sum(), BigInt::from(0));
    }
}
