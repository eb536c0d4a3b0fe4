//! The implementation itself.
//!
//! Any velocity `w` of a rock whose line meets the trajectories of two
//! hailstones must satisfy `w . cross(p1 - p2, v1 - v2) = dot(p1 - p2,
//! cross(v1, v2))`: in the rock's rest frame both hailstones head straight
//! for the rock, so their relative motion is confined to a plane. Three
//! hailstones with pairwise independent velocities give three such planes,
//! whose intersection point in velocity space is the rock velocity. The
//! rock's position then falls out of one more linear solve in the rest
//! frame of the recovered velocity.
//!
//! Every step is exact integer arithmetic. The two divisions (normalizing
//! the velocity by the system determinant, and the caller's final division
//! of the position by the scale factor) are checked to leave no remainder;
//! anything else means the input was malformed.

use anyhow::{ensure, Context, Result};
use num_bigint::BigInt;
use num_traits::Zero;

use crate::data::{Data, Hailstone};
use crate::maths::*;
use crate::structs::Vec3;

/// Contains all necessary information to solve the problem
pub struct Solver {
    data: Data,
}

/// A linear constraint `w . normal = offset` on the rock velocity `w`,
/// derived from one pair of hailstones
struct PlaneConstraint {
    normal: Vec3,
    offset: BigInt,
}

/// The answer: the rock's trajectory
pub struct Solution {
    /// The rock's position at time zero, multiplied by `scale`
    pub scaled_position: Vec3,
    /// The rock's velocity, exact
    pub velocity: Vec3,
    /// The common factor to divide `scaled_position` by
    pub scale: BigInt,
}

impl Solution {
    /// The rock's position at time zero, with the scale factor divided out
    pub fn position(&self) -> Result<Vec3> {
        let div = |n| {
            exact_div(n, &self.scale).context("rock position is not divisible by the scale factor")
        };
        Ok(Vec3 {
            x: div(&self.scaled_position.x)?,
            y: div(&self.scaled_position.y)?,
            z: div(&self.scaled_position.z)?,
        })
    }

    /// The sum of the rock's starting coordinates
    pub fn position_sum(&self) -> Result<BigInt> {
        exact_div(&self.scaled_position.component_sum(), &self.scale)
            .context("rock position sum is not divisible by the scale factor")
    }
}

impl Solver {
    /// Construct new solver given the hailstone observations
    pub fn new(data: Data) -> Solver {
        Solver { data }
    }

    /// Find the rock trajectory that meets every hailstone
    pub fn solve(&self) -> Result<Solution> {
        let (h1, h2, h3) = self.select_stones()?;

        let pa = derive_plane(h1, h2);
        let pb = derive_plane(h1, h3);
        let pc = derive_plane(h2, h3);

        // The three normals are independent whenever the three velocities
        // are, so a zero determinant here means the selection failed us.
        let det = triple_product(&pa.normal, &pb.normal, &pc.normal);
        ensure!(
            !det.is_zero(),
            "selected hailstones yield a singular system"
        );

        let w_raw = linear_combination(
            &pa.offset,
            &pb.normal.cross(&pc.normal),
            &pb.offset,
            &pc.normal.cross(&pa.normal),
            &pc.offset,
            &pa.normal.cross(&pb.normal),
        );
        let velocity = exact_div_vec(&w_raw, &det)
            .context("rock velocity did not come out integral; the input is inconsistent")?;

        // Shift two hailstones into the rock's rest frame. Seen from the
        // rock, both head straight at it, so the rock sits where their
        // shifted lines cross.
        let w1 = &h1.velocity - &velocity;
        let w2 = &h2.velocity - &velocity;
        let ww = w1.cross(&w2);

        let scale = ww.dot(&ww);
        ensure!(
            !scale.is_zero(),
            "reference hailstones are parallel in the rock frame"
        );

        let e = ww.dot(&h2.position.cross(&w2));
        let f = ww.dot(&h1.position.cross(&w1));
        let g = h1.position.dot(&ww);

        let scaled_position = linear_combination(&e, &w1, &(-f), &w2, &g, &ww);

        Ok(Solution {
            scaled_position,
            velocity,
            scale,
        })
    }

    /// Pick the first three hailstones with pairwise independent velocities.
    ///
    /// The scan is deterministic: the first hailstone anchors the search,
    /// the second is the first one independent of it, and the third is the
    /// first one after that independent of both.
    fn select_stones(&self) -> Result<(&Hailstone, &Hailstone, &Hailstone)> {
        let stones = &self.data.hailstones;
        let h1 = stones.first().context("the input contains no hailstones")?;
        let (i, h2) = stones
            .iter()
            .enumerate()
            .skip(1)
            .find(|(_, h)| are_independent(&h1.velocity, &h.velocity))
            .context("no hailstone is velocity-independent of the first")?;
        let h3 = stones[i + 1..]
            .iter()
            .find(|h| {
                are_independent(&h1.velocity, &h.velocity)
                    && are_independent(&h2.velocity, &h.velocity)
            })
            .context("no three hailstones have pairwise independent velocities")?;
        Ok((h1, h2, h3))
    }
}

fn derive_plane(a: &Hailstone, b: &Hailstone) -> PlaneConstraint {
    let rel_pos = &a.position - &b.position;
    let rel_vel = &a.velocity - &b.velocity;
    PlaneConstraint {
        normal: rel_pos.cross(&rel_vel),
        offset: rel_pos.dot(&a.velocity.cross(&b.velocity)),
    }
}

fn exact_div_vec(v: &Vec3, d: &BigInt) -> Option<Vec3> {
    Some(Vec3 {
        x: exact_div(&v.x, d)?,
        y: exact_div(&v.y, d)?,
        z: exact_div(&v.z, d)?,
    })
}
