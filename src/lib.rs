//! This program reconstructs the trajectory of a rock that passes through
//! every hailstone in a storm, given each hailstone's starting position and
//! constant velocity.
//!
//! The reconstruction is purely algebraic: every pair of hailstones yields a
//! linear constraint on the rock's velocity, three such constraints pin the
//! velocity down exactly, and the position then follows from one more linear
//! solve. All intermediate arithmetic is carried out on arbitrary-precision
//! integers, so the only division in the whole pipeline is a final one that
//! is checked to be exact.

pub mod data;
pub mod maths;
pub mod params;
pub mod solver;
pub mod structs;
