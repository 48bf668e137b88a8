//! Attribute codecs: the per-family `combine`/`decombine` rules between an
//! attribute tuple and an (id slot, data value) pair.
//!
//! Every rule is total over its legal domain and injective within one slot, so
//! `decombine(combine(a)) == Some(a)` for every `a` in `domain()`. Codes a rule
//! never produces decode to `None`.

use cobalt_geom::{Axis, Face};

use crate::attrs::{Attributes, DoorHalf, DyeColor, MaterialKind, SlabPosition};
use crate::types::{Capability, IdSlot};

/// Face → code table for directional families.
pub type FaceTable = &'static [(Face, u8)];

/// Torches: wall faces 1-4, floor (Up) 5.
pub const TORCH_FACES: FaceTable = &[
    (Face::East, 1),
    (Face::West, 2),
    (Face::South, 3),
    (Face::North, 4),
    (Face::Up, 5),
];
/// Ladders, wall signs, furnaces and chests.
pub const WALL_FACES: FaceTable = &[
    (Face::North, 2),
    (Face::South, 3),
    (Face::West, 4),
    (Face::East, 5),
];
/// Dispensers and droppers can face any direction.
pub const ALL_FACES: FaceTable = &[
    (Face::Down, 0),
    (Face::Up, 1),
    (Face::North, 2),
    (Face::South, 3),
    (Face::West, 4),
    (Face::East, 5),
];
/// Pumpkins and jack o'lanterns.
pub const PUMPKIN_FACES: FaceTable = &[
    (Face::South, 0),
    (Face::West, 1),
    (Face::North, 2),
    (Face::East, 3),
];
/// Skulls: floor (Up) 1, walls 2-5.
pub const SKULL_FACES: FaceTable = &[
    (Face::Up, 1),
    (Face::North, 2),
    (Face::South, 3),
    (Face::West, 4),
    (Face::East, 5),
];

const STAIRS_FACES: FaceTable = &[
    (Face::East, 0),
    (Face::West, 1),
    (Face::South, 2),
    (Face::North, 3),
];
const DOOR_FACES: FaceTable = &[
    (Face::East, 0),
    (Face::South, 1),
    (Face::West, 2),
    (Face::North, 3),
];
const TRAPDOOR_FACES: FaceTable = &[
    (Face::North, 0),
    (Face::South, 1),
    (Face::West, 2),
    (Face::East, 3),
];

const UPSIDE_DOWN_BIT: u8 = 0x4;
const OPEN_BIT: u8 = 0x4;
const TOP_BIT: u8 = 0x8;
const HINGE_RIGHT_BIT: u8 = 0x1;
const POWERED_BIT: u8 = 0x2;

#[inline]
fn face_to_code(table: FaceTable, face: Face) -> Option<u8> {
    table.iter().find(|(f, _)| *f == face).map(|&(_, c)| c)
}

#[inline]
fn code_to_face(table: FaceTable, code: u8) -> Option<Face> {
    table.iter().find(|(_, c)| *c == code).map(|&(f, _)| f)
}

#[inline]
fn axis_bits(axis: Axis) -> u8 {
    match axis {
        Axis::Y => 0x0,
        Axis::X => 0x4,
        Axis::Z => 0x8,
    }
}

#[inline]
fn bits_axis(bits: u8) -> Option<Axis> {
    match bits {
        0x0 => Some(Axis::Y),
        0x4 => Some(Axis::X),
        0x8 => Some(Axis::Z),
        _ => None,
    }
}

#[inline]
fn slot_for(kind: &MaterialKind) -> IdSlot {
    if kind.overflow {
        IdSlot::Secondary
    } else {
        IdSlot::Primary
    }
}

/// Declarative combine rule of one block family.
#[derive(Clone, Copy, Debug)]
pub enum CodecRule {
    /// Exactly one state at code 0.
    Single,
    /// Cosmetic variants; the name's index is the code.
    Variants(&'static [&'static str]),
    Facing(FaceTable),
    /// The 16 dye colors 1:1 onto codes 0-15.
    Color,
    /// Code equals the growth stage (or cake bites), 0..=max.
    Age { max: u8, label: &'static str },
    /// {facing (4-way), upside down}.
    Stairs,
    /// Position flag OR'd with the kind flag; overflow kinds use the secondary id.
    /// `double` selects the Full/SmoothFull positions instead of Bottom/Upper;
    /// `partner` names the family holding the other positions.
    Slab {
        kinds: &'static [MaterialKind],
        double: bool,
        partner: &'static str,
    },
    /// Bottom part {facing, open}; top part {hinge right, powered}.
    Door,
    /// {facing, open, on top} in 4 bits.
    Trapdoor,
    /// Kind flag in the low two bits, axis in the high two; overflow kinds use the secondary id.
    Log { kinds: &'static [MaterialKind] },
}

impl CodecRule {
    /// Encodes an attribute tuple. `None` when the tuple is outside this rule's domain.
    pub fn combine(&self, attrs: Attributes) -> Option<(IdSlot, u8)> {
        let primary = |code: u8| Some((IdSlot::Primary, code));
        match (*self, attrs) {
            (CodecRule::Single, Attributes::None) => primary(0),
            (CodecRule::Variants(names), Attributes::Variant(i)) => {
                if (i as usize) < names.len() {
                    primary(i)
                } else {
                    None
                }
            }
            (CodecRule::Facing(table), Attributes::Facing(face)) => {
                face_to_code(table, face).and_then(primary)
            }
            (CodecRule::Color, Attributes::Color(color)) => primary(color.code()),
            (CodecRule::Age { max, .. }, Attributes::Age(age)) => {
                if age <= max {
                    primary(age)
                } else {
                    None
                }
            }
            (
                CodecRule::Stairs,
                Attributes::Stairs {
                    facing,
                    upside_down,
                },
            ) => {
                let face = face_to_code(STAIRS_FACES, facing)?;
                primary(face | if upside_down { UPSIDE_DOWN_BIT } else { 0 })
            }
            (CodecRule::Slab { kinds, double, .. }, Attributes::Slab { position, kind }) => {
                if position.is_double() != double {
                    return None;
                }
                let kind = kinds.get(kind as usize)?;
                Some((slot_for(kind), kind.flag | position.flag()))
            }
            (CodecRule::Door, Attributes::Door(DoorHalf::Bottom { facing, open })) => {
                let face = face_to_code(DOOR_FACES, facing)?;
                primary(face | if open { OPEN_BIT } else { 0 })
            }
            (
                CodecRule::Door,
                Attributes::Door(DoorHalf::Top {
                    hinge_right,
                    powered,
                }),
            ) => {
                let mut code = TOP_BIT;
                if hinge_right {
                    code |= HINGE_RIGHT_BIT;
                }
                if powered {
                    code |= POWERED_BIT;
                }
                primary(code)
            }
            (
                CodecRule::Trapdoor,
                Attributes::Trapdoor {
                    facing,
                    open,
                    on_top,
                },
            ) => {
                let mut code = face_to_code(TRAPDOOR_FACES, facing)?;
                if open {
                    code |= OPEN_BIT;
                }
                if on_top {
                    code |= TOP_BIT;
                }
                primary(code)
            }
            (CodecRule::Log { kinds }, Attributes::Log { kind, axis }) => {
                let kind = kinds.get(kind as usize)?;
                Some((slot_for(kind), kind.flag | axis_bits(axis)))
            }
            _ => None,
        }
    }

    /// Decodes a code previously produced by [`CodecRule::combine`]; foreign codes yield `None`.
    pub fn decombine(&self, slot: IdSlot, code: u8) -> Option<Attributes> {
        if code >= 16 {
            return None;
        }
        // Only kind-table rules have a secondary id.
        if slot == IdSlot::Secondary
            && !matches!(self, CodecRule::Slab { .. } | CodecRule::Log { .. })
        {
            return None;
        }
        match *self {
            CodecRule::Single => (code == 0).then_some(Attributes::None),
            CodecRule::Variants(names) => {
                ((code as usize) < names.len()).then_some(Attributes::Variant(code))
            }
            CodecRule::Facing(table) => code_to_face(table, code).map(Attributes::Facing),
            CodecRule::Color => DyeColor::from_code(code).map(Attributes::Color),
            CodecRule::Age { max, .. } => (code <= max).then_some(Attributes::Age(code)),
            CodecRule::Stairs => {
                let facing = code_to_face(STAIRS_FACES, code & 0x3)?;
                if code & 0x8 != 0 {
                    return None;
                }
                Some(Attributes::Stairs {
                    facing,
                    upside_down: code & UPSIDE_DOWN_BIT != 0,
                })
            }
            CodecRule::Slab { kinds, double, .. } => {
                let flag = code & 0x7;
                let kind = kinds
                    .iter()
                    .position(|k| k.flag == flag && slot_for(k) == slot)?;
                let position = match (double, code & 0x8 != 0) {
                    (false, false) => SlabPosition::Bottom,
                    (false, true) => SlabPosition::Upper,
                    (true, false) => SlabPosition::Full,
                    (true, true) => SlabPosition::SmoothFull,
                };
                Some(Attributes::Slab {
                    position,
                    kind: kind as u8,
                })
            }
            CodecRule::Door => {
                if code & TOP_BIT != 0 {
                    if code & 0x4 != 0 {
                        return None;
                    }
                    Some(Attributes::Door(DoorHalf::Top {
                        hinge_right: code & HINGE_RIGHT_BIT != 0,
                        powered: code & POWERED_BIT != 0,
                    }))
                } else {
                    Some(Attributes::Door(DoorHalf::Bottom {
                        facing: code_to_face(DOOR_FACES, code & 0x3)?,
                        open: code & OPEN_BIT != 0,
                    }))
                }
            }
            CodecRule::Trapdoor => Some(Attributes::Trapdoor {
                facing: code_to_face(TRAPDOOR_FACES, code & 0x3)?,
                open: code & OPEN_BIT != 0,
                on_top: code & TOP_BIT != 0,
            }),
            CodecRule::Log { kinds } => {
                let flag = code & 0x3;
                let kind = kinds
                    .iter()
                    .position(|k| k.flag == flag && slot_for(k) == slot)?;
                Some(Attributes::Log {
                    kind: kind as u8,
                    axis: bits_axis(code & 0xC)?,
                })
            }
        }
    }

    /// Every legal attribute tuple, in registration order.
    pub fn domain(&self) -> Vec<Attributes> {
        match *self {
            CodecRule::Single => vec![Attributes::None],
            CodecRule::Variants(names) => (0..names.len() as u8).map(Attributes::Variant).collect(),
            CodecRule::Facing(table) => table.iter().map(|&(f, _)| Attributes::Facing(f)).collect(),
            CodecRule::Color => DyeColor::ALL.into_iter().map(Attributes::Color).collect(),
            CodecRule::Age { max, .. } => (0..=max).map(Attributes::Age).collect(),
            CodecRule::Stairs => [false, true]
                .into_iter()
                .flat_map(|upside_down| {
                    STAIRS_FACES.iter().map(move |&(facing, _)| Attributes::Stairs {
                        facing,
                        upside_down,
                    })
                })
                .collect(),
            CodecRule::Slab { kinds, double, .. } => {
                let positions = if double {
                    [SlabPosition::Full, SlabPosition::SmoothFull]
                } else {
                    [SlabPosition::Bottom, SlabPosition::Upper]
                };
                positions
                    .into_iter()
                    .flat_map(|position| {
                        (0..kinds.len() as u8).map(move |kind| Attributes::Slab { position, kind })
                    })
                    .collect()
            }
            CodecRule::Door => {
                let mut out = Vec::with_capacity(12);
                for open in [false, true] {
                    for &(facing, _) in DOOR_FACES {
                        out.push(Attributes::Door(DoorHalf::Bottom { facing, open }));
                    }
                }
                for powered in [false, true] {
                    for hinge_right in [false, true] {
                        out.push(Attributes::Door(DoorHalf::Top {
                            hinge_right,
                            powered,
                        }));
                    }
                }
                out
            }
            CodecRule::Trapdoor => {
                let mut out = Vec::with_capacity(16);
                for on_top in [false, true] {
                    for open in [false, true] {
                        for &(facing, _) in TRAPDOOR_FACES {
                            out.push(Attributes::Trapdoor {
                                facing,
                                open,
                                on_top,
                            });
                        }
                    }
                }
                out
            }
            CodecRule::Log { kinds } => Axis::ALL
                .into_iter()
                .flat_map(|axis| {
                    (0..kinds.len() as u8).map(move |kind| Attributes::Log { kind, axis })
                })
                .collect(),
        }
    }

    /// Canonical enum-style name of a decoded tuple, e.g. `NORTH_UPSIDE_DOWN`.
    pub fn variant_name(&self, attrs: Attributes) -> String {
        match (*self, attrs) {
            (CodecRule::Variants(names), Attributes::Variant(i)) => names
                .get(i as usize)
                .map(|n| n.to_string())
                .unwrap_or_else(|| format!("VARIANT_{i}")),
            (_, Attributes::Facing(face)) => face.name().to_string(),
            (_, Attributes::Color(color)) => color.name().to_string(),
            (CodecRule::Age { label, .. }, Attributes::Age(age)) => format!("{label}_{age}"),
            (
                _,
                Attributes::Stairs {
                    facing,
                    upside_down,
                },
            ) => {
                if upside_down {
                    format!("{}_UPSIDE_DOWN", facing.name())
                } else {
                    facing.name().to_string()
                }
            }
            (CodecRule::Slab { kinds, .. }, Attributes::Slab { position, kind }) => {
                format!("{}_{}", kind_name(kinds, kind), position.name())
            }
            (_, Attributes::Door(DoorHalf::Bottom { facing, open })) => {
                let state = if open { "OPEN" } else { "CLOSED" };
                format!("BOTTOM_{}_{}", facing.name(), state)
            }
            (
                _,
                Attributes::Door(DoorHalf::Top {
                    hinge_right,
                    powered,
                }),
            ) => {
                let hinge = if hinge_right { "RIGHT" } else { "LEFT" };
                if powered {
                    format!("TOP_{hinge}_POWERED")
                } else {
                    format!("TOP_{hinge}")
                }
            }
            (
                _,
                Attributes::Trapdoor {
                    facing,
                    open,
                    on_top,
                },
            ) => {
                let mut name = facing.name().to_string();
                if open {
                    name.push_str("_OPEN");
                }
                if on_top {
                    name.push_str("_TOP");
                }
                name
            }
            (CodecRule::Log { kinds }, Attributes::Log { kind, axis }) => {
                if kinds.len() == 1 {
                    axis.name().to_string()
                } else {
                    format!("{}_{}", kind_name(kinds, kind), axis.name())
                }
            }
            _ => "DEFAULT".to_string(),
        }
    }

    /// Material kind table of slab and log rules.
    pub fn kinds(&self) -> &'static [MaterialKind] {
        match *self {
            CodecRule::Slab { kinds, .. } | CodecRule::Log { kinds } => kinds,
            _ => &[],
        }
    }

    pub fn capabilities(&self) -> &'static [Capability] {
        use Capability::*;
        match *self {
            CodecRule::Single => &[],
            CodecRule::Variants(_) => &[Variantable],
            CodecRule::Facing(_) => &[Directional],
            CodecRule::Color => &[Colorable],
            CodecRule::Age { .. } => &[Ageable],
            CodecRule::Stairs => &[Directional, Stairs],
            CodecRule::Slab { .. } => &[Slab, Variantable],
            CodecRule::Door => &[Directional, Door],
            CodecRule::Trapdoor => &[Directional, Trapdoor],
            CodecRule::Log { kinds } if kinds.len() > 1 => &[Rotatable, Variantable],
            CodecRule::Log { .. } => &[Rotatable],
        }
    }
}

fn kind_name(kinds: &[MaterialKind], kind: u8) -> &str {
    kinds.get(kind as usize).map(|k| k.name).unwrap_or("UNKNOWN")
}

#[cfg(test)]
mod tests {
    use super::*;

    const KINDS: &[MaterialKind] = &[
        MaterialKind::primary("STONE", 0),
        MaterialKind::primary("SANDSTONE", 1),
        MaterialKind::overflow("RED_SANDSTONE", 0),
    ];

    #[test]
    fn torch_floor_is_reserved_code() {
        let rule = CodecRule::Facing(TORCH_FACES);
        assert_eq!(
            rule.combine(Attributes::Facing(Face::Up)),
            Some((IdSlot::Primary, 5))
        );
        assert_eq!(rule.combine(Attributes::Facing(Face::Down)), None);
        assert_eq!(rule.decombine(IdSlot::Primary, 0), None);
    }

    #[test]
    fn slab_overflow_kind_rebases_into_secondary() {
        let rule = CodecRule::Slab {
            kinds: KINDS,
            double: false,
            partner: "DOUBLE",
        };
        let bottom = Attributes::Slab {
            position: SlabPosition::Bottom,
            kind: 2,
        };
        assert_eq!(rule.combine(bottom), Some((IdSlot::Secondary, 0)));
        assert_eq!(rule.decombine(IdSlot::Secondary, 0), Some(bottom));
        assert_eq!(
            rule.decombine(IdSlot::Primary, 0),
            Some(Attributes::Slab {
                position: SlabPosition::Bottom,
                kind: 0
            })
        );
        // Full only exists on the double-slab partner.
        let full = Attributes::Slab {
            position: SlabPosition::Full,
            kind: 0,
        };
        assert_eq!(rule.combine(full), None);
        assert_eq!(rule.decombine(IdSlot::Secondary, 1), None);
    }

    #[test]
    fn door_parts_split_on_top_bit() {
        let rule = CodecRule::Door;
        let top = Attributes::Door(DoorHalf::Top {
            hinge_right: true,
            powered: true,
        });
        assert_eq!(rule.combine(top), Some((IdSlot::Primary, 0xB)));
        assert_eq!(rule.decombine(IdSlot::Primary, 0xB), Some(top));
        assert_eq!(rule.decombine(IdSlot::Primary, 0xC), None);
        assert_eq!(
            rule.decombine(IdSlot::Primary, 0x7),
            Some(Attributes::Door(DoorHalf::Bottom {
                facing: Face::North,
                open: true
            }))
        );
    }

    #[test]
    fn mismatched_attribute_shape_is_rejected() {
        assert_eq!(CodecRule::Color.combine(Attributes::Age(3)), None);
        assert_eq!(CodecRule::Stairs.combine(Attributes::Facing(Face::North)), None);
        assert_eq!(CodecRule::Single.decombine(IdSlot::Secondary, 0), None);
    }

    #[test]
    fn log_bark_only_axis_is_unpopulated() {
        let rule = CodecRule::Log { kinds: KINDS };
        assert_eq!(rule.decombine(IdSlot::Primary, 0xC), None);
        assert_eq!(
            rule.combine(Attributes::Log {
                kind: 1,
                axis: Axis::Z
            }),
            Some((IdSlot::Primary, 0x9))
        );
    }
}
