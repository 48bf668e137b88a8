//! Typed attribute payloads carried by variants.

use std::fmt;
use std::str::FromStr;

use cobalt_geom::{Axis, Face};

/// The 16 dye colors in wire order: the color's index is its data value.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum DyeColor {
    White,
    Orange,
    Magenta,
    LightBlue,
    Yellow,
    Lime,
    Pink,
    Gray,
    Silver,
    Cyan,
    Purple,
    Blue,
    Brown,
    Green,
    Red,
    Black,
}

impl DyeColor {
    pub const ALL: [DyeColor; 16] = [
        DyeColor::White,
        DyeColor::Orange,
        DyeColor::Magenta,
        DyeColor::LightBlue,
        DyeColor::Yellow,
        DyeColor::Lime,
        DyeColor::Pink,
        DyeColor::Gray,
        DyeColor::Silver,
        DyeColor::Cyan,
        DyeColor::Purple,
        DyeColor::Blue,
        DyeColor::Brown,
        DyeColor::Green,
        DyeColor::Red,
        DyeColor::Black,
    ];

    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }

    #[inline]
    pub fn from_code(code: u8) -> Option<DyeColor> {
        Self::ALL.get(code as usize).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            DyeColor::White => "WHITE",
            DyeColor::Orange => "ORANGE",
            DyeColor::Magenta => "MAGENTA",
            DyeColor::LightBlue => "LIGHT_BLUE",
            DyeColor::Yellow => "YELLOW",
            DyeColor::Lime => "LIME",
            DyeColor::Pink => "PINK",
            DyeColor::Gray => "GRAY",
            DyeColor::Silver => "SILVER",
            DyeColor::Cyan => "CYAN",
            DyeColor::Purple => "PURPLE",
            DyeColor::Blue => "BLUE",
            DyeColor::Brown => "BROWN",
            DyeColor::Green => "GREEN",
            DyeColor::Red => "RED",
            DyeColor::Black => "BLACK",
        }
    }
}

impl fmt::Display for DyeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DyeColor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DyeColor::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown dye color: {s:?}"))
    }
}

/// Vertical placement of a slab. `Full` and `SmoothFull` only exist in double-slab families.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum SlabPosition {
    Bottom,
    Upper,
    Full,
    SmoothFull,
}

impl SlabPosition {
    pub const ALL: [SlabPosition; 4] = [
        SlabPosition::Bottom,
        SlabPosition::Upper,
        SlabPosition::Full,
        SlabPosition::SmoothFull,
    ];

    #[inline]
    pub fn is_double(self) -> bool {
        matches!(self, SlabPosition::Full | SlabPosition::SmoothFull)
    }

    /// Position bits OR'd into the kind flag.
    #[inline]
    pub(crate) fn flag(self) -> u8 {
        match self {
            SlabPosition::Bottom | SlabPosition::Full => 0,
            SlabPosition::Upper | SlabPosition::SmoothFull => 8,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SlabPosition::Bottom => "BOTTOM",
            SlabPosition::Upper => "UPPER",
            SlabPosition::Full => "FULL",
            SlabPosition::SmoothFull => "SMOOTH_FULL",
        }
    }
}

impl fmt::Display for SlabPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which physical half of a two-block door a variant describes.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum DoorPart {
    Bottom,
    Top,
}

impl fmt::Display for DoorPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DoorPart::Bottom => f.write_str("bottom"),
            DoorPart::Top => f.write_str("top"),
        }
    }
}

/// One material kind of a slab or log family.
///
/// `flag` is OR'd into the code; kinds marked `overflow` live on the family's
/// secondary block-type id.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct MaterialKind {
    pub name: &'static str,
    pub flag: u8,
    pub overflow: bool,
}

impl MaterialKind {
    pub const fn primary(name: &'static str, flag: u8) -> Self {
        Self {
            name,
            flag,
            overflow: false,
        }
    }

    pub const fn overflow(name: &'static str, flag: u8) -> Self {
        Self {
            name,
            flag,
            overflow: true,
        }
    }
}

/// Both halves of a door carry disjoint attribute sets.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum DoorHalf {
    Bottom { facing: Face, open: bool },
    Top { hinge_right: bool, powered: bool },
}

impl DoorHalf {
    #[inline]
    pub fn part(self) -> DoorPart {
        match self {
            DoorHalf::Bottom { .. } => DoorPart::Bottom,
            DoorHalf::Top { .. } => DoorPart::Top,
        }
    }
}

/// Decoded attribute tuple of one variant. Which shape applies is fixed by the family's codec rule.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Attributes {
    /// Families without per-variant state, and extension variants on codes
    /// the rule does not decode.
    None,
    /// Index into the family's cosmetic variant names.
    Variant(u8),
    Facing(Face),
    Color(DyeColor),
    Age(u8),
    Stairs {
        facing: Face,
        upside_down: bool,
    },
    /// `kind` indexes the family's material-kind table.
    Slab {
        position: SlabPosition,
        kind: u8,
    },
    Door(DoorHalf),
    Trapdoor {
        facing: Face,
        open: bool,
        on_top: bool,
    },
    Log {
        kind: u8,
        axis: Axis,
    },
}
