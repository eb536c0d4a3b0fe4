//! Hailstone observations and the text format they are read from.
//!
//! Each input line holds one hailstone as `x,y,z @ vx,vy,vz`, where the
//! first triple is the position at time zero and the second is the constant
//! velocity. Coordinates are integers of arbitrary magnitude.

use std::fs;
use std::ops::Deref;
use std::path::Path;
use std::str::FromStr;

use anyhow::{bail, Context, Result};

use crate::structs::Vec3;

/// A single hailstone: where it was at time zero and how it moves
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hailstone {
    pub position: Vec3,
    pub velocity: Vec3,
}

impl FromStr for Hailstone {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self> {
        let (position, velocity) = line
            .split_once('@')
            .context("expected `x,y,z @ vx,vy,vz`")?;
        Ok(Self {
            position: parse_triple(position)?,
            velocity: parse_triple(velocity)?,
        })
    }
}

fn parse_triple(s: &str) -> Result<Vec3> {
    let mut fields = s.split(',').map(str::trim);
    let (Some(x), Some(y), Some(z), None) = (fields.next(), fields.next(), fields.next(), fields.next())
    else {
        bail!("expected three comma-separated integers, got {s:?}");
    };
    Ok(Vec3 {
        x: x.parse().with_context(|| format!("invalid integer {x:?}"))?,
        y: y.parse().with_context(|| format!("invalid integer {y:?}"))?,
        z: z.parse().with_context(|| format!("invalid integer {z:?}"))?,
    })
}

/// A collection of hailstones, in input order
#[derive(Debug, Clone)]
pub struct Data {
    pub hailstones: Vec<Hailstone>,
}

impl Data {
    pub fn from_file(path: &Path) -> Result<Self> {
        fs::read_to_string(path)
            .with_context(|| format!("could not read {}", path.display()))?
            .parse()
    }
}

impl FromStr for Data {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let hailstones = s
            .lines()
            .enumerate()
            .map(|(n, line)| {
                line.trim()
                    .parse()
                    .with_context(|| format!("line {}: could not parse hailstone", n + 1))
            })
            .collect::<Result<Vec<Hailstone>>>()?;
        Ok(Self { hailstones })
    }
}

impl Deref for Data {
    type Target = Vec<Hailstone>;

    fn deref(&self) -> &Self::Target {
        &self.hailstones
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_line() {
        let stone: Hailstone = "19, 13, 30 @ -2, 1, -2".parse().unwrap();
        assert_eq!(stone.position, Vec3::new(19, 13, 30));
        assert_eq!(stone.velocity, Vec3::new(-2, 1, -2));
    }

    #[test]
    fn accepts_irregular_spacing() {
        let stone: Hailstone = "  12,31,28@-1, -2,  -1\t".trim().parse().unwrap();
        assert_eq!(stone.position, Vec3::new(12, 31, 28));
        assert_eq!(stone.velocity, Vec3::new(-1, -2, -1));
    }

    #[test]
    fn parses_coordinates_beyond_64_bits() {
        let stone: Hailstone = "287838354624648, 284335343503076, 181128681512377 @ 21, -57, 8"
            .parse()
            .unwrap();
        assert_eq!(
            stone.position.x,
            "287838354624648".parse::<num_bigint::BigInt>().unwrap()
        );
    }

    #[test]
    fn rejects_malformed_lines() {
        assert!("19, 13, 30".parse::<Hailstone>().is_err());
        assert!("19, 13 @ -2, 1, -2".parse::<Hailstone>().is_err());
        assert!("19, 13, 30, 7 @ -2, 1, -2".parse::<Hailstone>().is_err());
        assert!("19, 13, 30 @ -2, one, -2".parse::<Hailstone>().is_err());
        assert!("19, 13, 3.5 @ -2, 1, -2".parse::<Hailstone>().is_err());
        assert!("".parse::<Hailstone>().is_err());
    }

    #[test]
    fn parses_a_whole_file() {
        let data: Data = "19, 13, 30 @ -2, 1, -2\n18, 19, 22 @ -1, -1, -2\n"
            .parse()
            .unwrap();
        assert_eq!(data.len(), 2);
    }

    #[test]
    fn reports_the_failing_line() {
        let err = "19, 13, 30 @ -2, 1, -2\nbogus\n"
            .parse::<Data>()
            .unwrap_err();
        assert!(format!("{err:#}").contains("line 2"));
    }
}
