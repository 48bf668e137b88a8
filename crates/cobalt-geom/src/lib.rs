//! Direction and axis primitives shared by the block codecs (no game-state dependency).
#![forbid(unsafe_code)]

use core::fmt;
use core::ops::{Add, AddAssign, Neg, Sub};
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Integer block-space offset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub struct Vec3i {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Vec3i {
    pub const ZERO: Vec3i = Vec3i { x: 0, y: 0, z: 0 };

    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Manhattan length; 1 for every face offset.
    #[inline]
    pub fn manhattan(self) -> i32 {
        self.x.abs() + self.y.abs() + self.z.abs()
    }
}

impl Add for Vec3i {
    type Output = Vec3i;
    #[inline]
    fn add(self, rhs: Vec3i) -> Vec3i {
        Vec3i::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Vec3i {
    #[inline]
    fn add_assign(&mut self, rhs: Vec3i) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl Sub for Vec3i {
    type Output = Vec3i;
    #[inline]
    fn sub(self, rhs: Vec3i) -> Vec3i {
        Vec3i::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for Vec3i {
    type Output = Vec3i;
    #[inline]
    fn neg(self) -> Vec3i {
        Vec3i::new(-self.x, -self.y, -self.z)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    pub fn name(self) -> &'static str {
        match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Axis {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Axis::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseError::new("axis", s))
    }
}

/// One of the six block faces. North is -Z, east is +X.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
#[serde(rename_all = "lowercase")]
pub enum Face {
    Down,
    Up,
    North,
    South,
    West,
    East,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::Down,
        Face::Up,
        Face::North,
        Face::South,
        Face::West,
        Face::East,
    ];
    pub const HORIZONTAL: [Face; 4] = [Face::North, Face::East, Face::South, Face::West];

    #[inline]
    pub fn opposite(self) -> Face {
        match self {
            Face::Down => Face::Up,
            Face::Up => Face::Down,
            Face::North => Face::South,
            Face::South => Face::North,
            Face::West => Face::East,
            Face::East => Face::West,
        }
    }

    #[inline]
    pub fn axis(self) -> Axis {
        match self {
            Face::Down | Face::Up => Axis::Y,
            Face::North | Face::South => Axis::Z,
            Face::West | Face::East => Axis::X,
        }
    }

    #[inline]
    pub fn is_horizontal(self) -> bool {
        self.axis() != Axis::Y
    }

    #[inline]
    pub fn offset(self) -> Vec3i {
        match self {
            Face::Down => Vec3i::new(0, -1, 0),
            Face::Up => Vec3i::new(0, 1, 0),
            Face::North => Vec3i::new(0, 0, -1),
            Face::South => Vec3i::new(0, 0, 1),
            Face::West => Vec3i::new(-1, 0, 0),
            Face::East => Vec3i::new(1, 0, 0),
        }
    }

    /// Quarter turn clockwise seen from above. Up and down are fixed points.
    #[inline]
    pub fn rotate_cw(self) -> Face {
        match self {
            Face::North => Face::East,
            Face::East => Face::South,
            Face::South => Face::West,
            Face::West => Face::North,
            vertical => vertical,
        }
    }

    #[inline]
    pub fn rotate_ccw(self) -> Face {
        match self {
            Face::North => Face::West,
            Face::West => Face::South,
            Face::South => Face::East,
            Face::East => Face::North,
            vertical => vertical,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Face::Down => "DOWN",
            Face::Up => "UP",
            Face::North => "NORTH",
            Face::South => "SOUTH",
            Face::West => "WEST",
            Face::East => "EAST",
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Face {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Face::ALL
            .into_iter()
            .find(|face| face.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseError::new("face", s))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    kind: &'static str,
    input: String,
}

impl ParseError {
    fn new(kind: &'static str, input: &str) -> Self {
        Self {
            kind,
            input: input.to_string(),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {}: {:?}", self.kind, self.input)
    }
}

impl std::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        // Stepping out through a face and back through its opposite lands on the origin
        #[test]
        fn face_offsets_cancel(
            face in any::<Face>(),
            x in -1_000_000i32..1_000_000,
            y in -512i32..512,
            z in -1_000_000i32..1_000_000,
        ) {
            let origin = Vec3i::new(x, y, z);
            prop_assert_eq!(origin + face.offset() + face.opposite().offset(), origin);
        }

        #[test]
        fn rotation_preserves_axis_class(face in any::<Face>()) {
            prop_assert_eq!(face.rotate_cw().is_horizontal(), face.is_horizontal());
        }

        #[test]
        fn axis_parse_roundtrip(axis in any::<Axis>()) {
            prop_assert_eq!(axis.name().to_lowercase().parse::<Axis>(), Ok(axis));
        }
    }
}
