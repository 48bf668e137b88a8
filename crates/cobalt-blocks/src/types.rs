use std::fmt;

use serde::{Deserialize, Serialize};

/// Numeric block-type id as it appears on the wire and in storage.
pub type BlockId = u16;

/// Number of codes one block-type id can carry (the 4-bit data value).
pub const CODES_PER_SLOT: usize = 16;

/// A raw (block-type id, data value) pair, the storage/wire form of one block.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default, Debug, Serialize, Deserialize)]
pub struct RawBlock {
    pub id: BlockId,
    pub data: u8,
}

impl RawBlock {
    pub const AIR: RawBlock = RawBlock { id: 0, data: 0 };

    #[inline]
    pub const fn new(id: BlockId, data: u8) -> Self {
        Self { id, data }
    }
}

impl fmt::Display for RawBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.id, self.data)
    }
}

/// Which of a family's numeric ids a code belongs to.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdSlot {
    Primary,
    /// Overflow id used by families with more than 16 states.
    Secondary,
}

impl IdSlot {
    pub const ALL: [IdSlot; 2] = [IdSlot::Primary, IdSlot::Secondary];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for IdSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdSlot::Primary => f.write_str("primary"),
            IdSlot::Secondary => f.write_str("secondary"),
        }
    }
}

/// Position of a family in the registry's family table.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct FamilyId(pub u16);

/// Structural identity of a variant: equality and hashing of variants follow this key.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct VariantKey {
    pub family: FamilyId,
    pub slot: IdSlot,
    pub code: u8,
}

/// Capability contracts a family may implement.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Capability {
    Directional,
    Colorable,
    Ageable,
    Stairs,
    Slab,
    Door,
    Trapdoor,
    Attachable,
    Rotatable,
    Variantable,
}

impl Capability {
    pub const ALL: [Capability; 10] = [
        Capability::Directional,
        Capability::Colorable,
        Capability::Ageable,
        Capability::Stairs,
        Capability::Slab,
        Capability::Door,
        Capability::Trapdoor,
        Capability::Attachable,
        Capability::Rotatable,
        Capability::Variantable,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Capability::Directional => "directional",
            Capability::Colorable => "colorable",
            Capability::Ageable => "ageable",
            Capability::Stairs => "stairs",
            Capability::Slab => "slab",
            Capability::Door => "door",
            Capability::Trapdoor => "trapdoor",
            Capability::Attachable => "attachable",
            Capability::Rotatable => "rotatable",
            Capability::Variantable => "variantable",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
