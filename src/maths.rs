//! Some useful exact-integer functions

use num_bigint::BigInt;
use num_traits::Zero;

use crate::structs::Vec3;

/// Whether two vectors point along different lines through the origin
pub fn are_independent(a: &Vec3, b: &Vec3) -> bool {
    !a.cross(b).is_zero()
}

/// The scalar triple product `a . (b x c)`
pub fn triple_product(a: &Vec3, b: &Vec3, c: &Vec3) -> BigInt {
    a.dot(&b.cross(c))
}

/// `r*a + s*b + t*c`, computed component-wise
pub fn linear_combination(r: &BigInt, a: &Vec3, s: &BigInt, b: &Vec3, t: &BigInt, c: &Vec3) -> Vec3 {
    Vec3 {
        x: r * &a.x + s * &b.x + t * &c.x,
        y: r * &a.y + s * &b.y + t * &c.y,
        z: r * &a.z + s * &b.z + t * &c.z,
    }
}

/// Divide `n` by `d`, returning `None` unless the division is exact
pub fn exact_div(n: &BigInt, d: &BigInt) -> Option<BigInt> {
    if d.is_zero() || !(n % d).is_zero() {
        None
    } else {
        Some(n / d)
    }
}
