//! Capability contracts over [`Variant`].
//!
//! Each trait pairs `try_*` accessors with panicking shorthands. Calling an
//! accessor a variant does not support (wrong family, or the other door part)
//! is a contract violation: the `try_*` form reports it as a [`VariantError`],
//! the shorthand panics with that error. Transformers (`with_*`) re-encode the
//! attributes and resolve the registered sibling; they never mint new variants.

use cobalt_geom::{Axis, Face};

use crate::attrs::{Attributes, DoorHalf, DoorPart, DyeColor, SlabPosition};
use crate::codec::CodecRule;
use crate::error::VariantError;
use crate::types::Capability;
use crate::variant::{Variant, clamp_age};

#[track_caller]
fn expect<T>(r: Result<T, VariantError>) -> T {
    r.unwrap_or_else(|e| panic!("{e}"))
}

fn wrong_part(v: &Variant<'_>, expected: DoorPart, actual: DoorPart) -> VariantError {
    VariantError::WrongPart {
        family: v.descriptor().key,
        expected,
        actual,
    }
}

pub trait Directional: Sized {
    fn try_facing(&self) -> Result<Face, VariantError>;
    fn with_facing(&self, face: Face) -> Result<Self, VariantError>;

    /// # Panics
    /// If the variant is not directional, or is a door's top part.
    #[track_caller]
    fn facing(&self) -> Face {
        expect(self.try_facing())
    }

    /// Sibling rotated a quarter turn clockwise around the vertical axis.
    fn rotated_cw(&self) -> Result<Self, VariantError> {
        let face = self.try_facing()?;
        self.with_facing(face.rotate_cw())
    }
}

impl<'r> Directional for Variant<'r> {
    fn try_facing(&self) -> Result<Face, VariantError> {
        self.require(Capability::Directional)?;
        match self.attributes() {
            Attributes::Facing(facing)
            | Attributes::Stairs { facing, .. }
            | Attributes::Trapdoor { facing, .. }
            | Attributes::Door(DoorHalf::Bottom { facing, .. }) => Ok(facing),
            Attributes::Door(DoorHalf::Top { .. }) => {
                Err(wrong_part(self, DoorPart::Bottom, DoorPart::Top))
            }
            _ => Err(self.missing("facing")),
        }
    }

    fn with_facing(&self, face: Face) -> Result<Self, VariantError> {
        self.require(Capability::Directional)?;
        let attrs = match self.attributes() {
            Attributes::Facing(_) => Attributes::Facing(face),
            Attributes::Stairs { upside_down, .. } => Attributes::Stairs {
                facing: face,
                upside_down,
            },
            Attributes::Trapdoor { open, on_top, .. } => Attributes::Trapdoor {
                facing: face,
                open,
                on_top,
            },
            Attributes::Door(DoorHalf::Bottom { open, .. }) => {
                Attributes::Door(DoorHalf::Bottom { facing: face, open })
            }
            Attributes::Door(DoorHalf::Top { .. }) => {
                return Err(wrong_part(self, DoorPart::Bottom, DoorPart::Top));
            }
            _ => return Err(self.missing("facing")),
        };
        self.resolve(attrs)
    }
}

/// Wall-mounted directional blocks: the block hangs on the face opposite its facing.
pub trait Attachable: Directional {
    fn try_attached_face(&self) -> Result<Face, VariantError>;
    fn with_attached_face(&self, face: Face) -> Result<Self, VariantError>;

    #[track_caller]
    fn attached_face(&self) -> Face {
        expect(self.try_attached_face())
    }
}

impl<'r> Attachable for Variant<'r> {
    fn try_attached_face(&self) -> Result<Face, VariantError> {
        self.require(Capability::Attachable)?;
        Ok(self.try_facing()?.opposite())
    }

    fn with_attached_face(&self, face: Face) -> Result<Self, VariantError> {
        self.require(Capability::Attachable)?;
        self.with_facing(face.opposite())
    }
}

pub trait Colorable: Sized {
    fn try_color(&self) -> Result<DyeColor, VariantError>;
    fn with_color(&self, color: DyeColor) -> Result<Self, VariantError>;

    #[track_caller]
    fn color(&self) -> DyeColor {
        expect(self.try_color())
    }
}

impl<'r> Colorable for Variant<'r> {
    fn try_color(&self) -> Result<DyeColor, VariantError> {
        self.require(Capability::Colorable)?;
        match self.attributes() {
            Attributes::Color(color) => Ok(color),
            _ => Err(self.missing("color")),
        }
    }

    fn with_color(&self, color: DyeColor) -> Result<Self, VariantError> {
        self.require(Capability::Colorable)?;
        self.resolve(Attributes::Color(color))
    }
}

pub trait Ageable: Sized {
    fn try_age(&self) -> Result<u8, VariantError>;
    fn max_age(&self) -> Result<u8, VariantError>;
    /// Ages outside `0..=max_age` resolve to the age-0 sibling.
    fn with_age(&self, age: i32) -> Result<Self, VariantError>;

    #[track_caller]
    fn age(&self) -> u8 {
        expect(self.try_age())
    }
}

impl<'r> Ageable for Variant<'r> {
    fn try_age(&self) -> Result<u8, VariantError> {
        self.require(Capability::Ageable)?;
        match self.attributes() {
            Attributes::Age(age) => Ok(age),
            _ => Err(self.missing("age")),
        }
    }

    fn max_age(&self) -> Result<u8, VariantError> {
        self.require(Capability::Ageable)?;
        match self.descriptor().rule {
            CodecRule::Age { max, .. } => Ok(max),
            _ => Err(self.missing("age")),
        }
    }

    fn with_age(&self, age: i32) -> Result<Self, VariantError> {
        let max = self.max_age()?;
        self.resolve(Attributes::Age(clamp_age(age, max)))
    }
}

pub trait Stairs: Directional {
    fn try_is_upside_down(&self) -> Result<bool, VariantError>;
    fn with_upside_down(&self, upside_down: bool) -> Result<Self, VariantError>;
    fn with_facing_and_upside_down(
        &self,
        facing: Face,
        upside_down: bool,
    ) -> Result<Self, VariantError>;

    #[track_caller]
    fn is_upside_down(&self) -> bool {
        expect(self.try_is_upside_down())
    }
}

impl<'r> Stairs for Variant<'r> {
    fn try_is_upside_down(&self) -> Result<bool, VariantError> {
        self.require(Capability::Stairs)?;
        match self.attributes() {
            Attributes::Stairs { upside_down, .. } => Ok(upside_down),
            _ => Err(self.missing("upside down")),
        }
    }

    fn with_upside_down(&self, upside_down: bool) -> Result<Self, VariantError> {
        let facing = self.try_facing()?;
        self.with_facing_and_upside_down(facing, upside_down)
    }

    fn with_facing_and_upside_down(
        &self,
        facing: Face,
        upside_down: bool,
    ) -> Result<Self, VariantError> {
        self.require(Capability::Stairs)?;
        self.resolve(Attributes::Stairs {
            facing,
            upside_down,
        })
    }
}

pub trait Slab: Sized {
    fn try_slab_position(&self) -> Result<SlabPosition, VariantError>;
    /// `Full`/`SmoothFull` resolve into the double-slab family and
    /// `Bottom`/`Upper` back into the single-slab family, keeping the kind.
    fn with_slab_position(&self, position: SlabPosition) -> Result<Self, VariantError>;

    #[track_caller]
    fn slab_position(&self) -> SlabPosition {
        expect(self.try_slab_position())
    }
}

impl<'r> Slab for Variant<'r> {
    fn try_slab_position(&self) -> Result<SlabPosition, VariantError> {
        self.require(Capability::Slab)?;
        match self.attributes() {
            Attributes::Slab { position, .. } => Ok(position),
            _ => Err(self.missing("slab position")),
        }
    }

    fn with_slab_position(&self, position: SlabPosition) -> Result<Self, VariantError> {
        self.require(Capability::Slab)?;
        let Attributes::Slab { kind, .. } = self.attributes() else {
            return Err(self.missing("slab position"));
        };
        let CodecRule::Slab {
            double, partner, ..
        } = self.descriptor().rule
        else {
            return Err(self.missing("slab position"));
        };
        let attrs = Attributes::Slab { position, kind };
        if position.is_double() == double {
            return self.resolve(attrs);
        }
        let family = self
            .family()
            .registry()
            .family(partner)
            .ok_or_else(|| VariantError::OutOfDomain {
                family: self.descriptor().key,
                detail: format!("partner family {partner}"),
            })?;
        family.resolve(attrs)
    }
}

/// Open/closed state shared by doors (bottom part only) and trapdoors.
pub trait Openable: Sized {
    fn try_is_open(&self) -> Result<bool, VariantError>;
    fn with_open(&self, open: bool) -> Result<Self, VariantError>;

    /// # Panics
    /// On a door's top part, or on a family that cannot open.
    #[track_caller]
    fn is_open(&self) -> bool {
        expect(self.try_is_open())
    }
}

impl<'r> Openable for Variant<'r> {
    fn try_is_open(&self) -> Result<bool, VariantError> {
        match self.attributes() {
            Attributes::Door(DoorHalf::Bottom { open, .. }) | Attributes::Trapdoor { open, .. } => {
                Ok(open)
            }
            Attributes::Door(DoorHalf::Top { .. }) => {
                Err(wrong_part(self, DoorPart::Bottom, DoorPart::Top))
            }
            _ => {
                if !self.supports(Capability::Door) {
                    self.require(Capability::Trapdoor)?;
                }
                Err(self.missing("open state"))
            }
        }
    }

    fn with_open(&self, open: bool) -> Result<Self, VariantError> {
        let attrs = match self.attributes() {
            Attributes::Door(DoorHalf::Bottom { facing, .. }) => {
                Attributes::Door(DoorHalf::Bottom { facing, open })
            }
            Attributes::Trapdoor { facing, on_top, .. } => Attributes::Trapdoor {
                facing,
                open,
                on_top,
            },
            _ => {
                self.try_is_open()?;
                return Err(self.missing("open state"));
            }
        };
        self.resolve(attrs)
    }
}

/// Two-part doors. The bottom part carries facing and open; the top part
/// carries hinge side and powered. The part is part of the variant, not derivable from the code.
pub trait Door: Directional + Openable {
    fn try_part(&self) -> Result<DoorPart, VariantError>;
    fn try_is_powered(&self) -> Result<bool, VariantError>;
    fn try_is_hinge_right(&self) -> Result<bool, VariantError>;
    fn with_powered(&self, powered: bool) -> Result<Self, VariantError>;
    fn with_hinge_right(&self, hinge_right: bool) -> Result<Self, VariantError>;
    fn with_bottom_part(&self, facing: Face, open: bool) -> Result<Self, VariantError>;
    fn with_top_part(&self, hinge_right: bool, powered: bool) -> Result<Self, VariantError>;

    #[track_caller]
    fn is_top_part(&self) -> bool {
        expect(self.try_part()) == DoorPart::Top
    }

    /// # Panics
    /// On a bottom-part variant.
    #[track_caller]
    fn is_powered(&self) -> bool {
        expect(self.try_is_powered())
    }

    /// # Panics
    /// On a bottom-part variant.
    #[track_caller]
    fn is_hinge_right(&self) -> bool {
        expect(self.try_is_hinge_right())
    }
}

impl<'r> Variant<'r> {
    fn door_half(&self) -> Result<DoorHalf, VariantError> {
        self.require(Capability::Door)?;
        match self.attributes() {
            Attributes::Door(half) => Ok(half),
            _ => Err(self.missing("door part")),
        }
    }

    fn top_half(&self) -> Result<(bool, bool), VariantError> {
        match self.door_half()? {
            DoorHalf::Top {
                hinge_right,
                powered,
            } => Ok((hinge_right, powered)),
            DoorHalf::Bottom { .. } => Err(wrong_part(self, DoorPart::Top, DoorPart::Bottom)),
        }
    }
}

impl<'r> Door for Variant<'r> {
    fn try_part(&self) -> Result<DoorPart, VariantError> {
        Ok(self.door_half()?.part())
    }

    fn try_is_powered(&self) -> Result<bool, VariantError> {
        Ok(self.top_half()?.1)
    }

    fn try_is_hinge_right(&self) -> Result<bool, VariantError> {
        Ok(self.top_half()?.0)
    }

    fn with_powered(&self, powered: bool) -> Result<Self, VariantError> {
        let (hinge_right, _) = self.top_half()?;
        self.with_top_part(hinge_right, powered)
    }

    fn with_hinge_right(&self, hinge_right: bool) -> Result<Self, VariantError> {
        let (_, powered) = self.top_half()?;
        self.with_top_part(hinge_right, powered)
    }

    fn with_bottom_part(&self, facing: Face, open: bool) -> Result<Self, VariantError> {
        self.door_half()?;
        self.resolve(Attributes::Door(DoorHalf::Bottom { facing, open }))
    }

    fn with_top_part(&self, hinge_right: bool, powered: bool) -> Result<Self, VariantError> {
        self.door_half()?;
        self.resolve(Attributes::Door(DoorHalf::Top {
            hinge_right,
            powered,
        }))
    }
}

pub trait Trapdoor: Directional + Openable {
    fn try_is_on_top(&self) -> Result<bool, VariantError>;
    fn with_on_top(&self, on_top: bool) -> Result<Self, VariantError>;

    #[track_caller]
    fn is_on_top(&self) -> bool {
        expect(self.try_is_on_top())
    }
}

impl<'r> Trapdoor for Variant<'r> {
    fn try_is_on_top(&self) -> Result<bool, VariantError> {
        self.require(Capability::Trapdoor)?;
        match self.attributes() {
            Attributes::Trapdoor { on_top, .. } => Ok(on_top),
            _ => Err(self.missing("trapdoor half")),
        }
    }

    fn with_on_top(&self, on_top: bool) -> Result<Self, VariantError> {
        self.require(Capability::Trapdoor)?;
        match self.attributes() {
            Attributes::Trapdoor { facing, open, .. } => self.resolve(Attributes::Trapdoor {
                facing,
                open,
                on_top,
            }),
            _ => Err(self.missing("trapdoor half")),
        }
    }
}

pub trait Rotatable: Sized {
    fn try_axis(&self) -> Result<Axis, VariantError>;
    fn with_axis(&self, axis: Axis) -> Result<Self, VariantError>;

    #[track_caller]
    fn axis(&self) -> Axis {
        expect(self.try_axis())
    }
}

impl<'r> Rotatable for Variant<'r> {
    fn try_axis(&self) -> Result<Axis, VariantError> {
        self.require(Capability::Rotatable)?;
        match self.attributes() {
            Attributes::Log { axis, .. } => Ok(axis),
            _ => Err(self.missing("axis")),
        }
    }

    fn with_axis(&self, axis: Axis) -> Result<Self, VariantError> {
        self.require(Capability::Rotatable)?;
        match self.attributes() {
            Attributes::Log { kind, .. } => self.resolve(Attributes::Log { kind, axis }),
            _ => Err(self.missing("axis")),
        }
    }
}

/// Cosmetic variants (stone types, wood kinds, slab materials), addressed by name.
pub trait Variantable: Sized {
    fn try_variant_name(&self) -> Result<&'static str, VariantError>;
    /// Sibling with the named cosmetic variant (case-insensitive), other attributes kept.
    fn with_variant(&self, name: &str) -> Result<Self, VariantError>;
    fn variant_names(&self) -> Vec<&'static str>;

    #[track_caller]
    fn variant_name(&self) -> &'static str {
        expect(self.try_variant_name())
    }
}

impl<'r> Variantable for Variant<'r> {
    fn try_variant_name(&self) -> Result<&'static str, VariantError> {
        self.require(Capability::Variantable)?;
        let rule = self.descriptor().rule;
        let index = match self.attributes() {
            Attributes::Variant(i) => i,
            Attributes::Slab { kind, .. } | Attributes::Log { kind, .. } => kind,
            _ => return Err(self.missing("variant")),
        };
        self.variant_names()
            .get(index as usize)
            .copied()
            .ok_or_else(|| VariantError::OutOfDomain {
                family: self.descriptor().key,
                detail: format!("variant index {index} under {rule:?}"),
            })
    }

    fn with_variant(&self, name: &str) -> Result<Self, VariantError> {
        self.require(Capability::Variantable)?;
        let index = self
            .variant_names()
            .iter()
            .position(|n| n.eq_ignore_ascii_case(name))
            .ok_or_else(|| VariantError::OutOfDomain {
                family: self.descriptor().key,
                detail: format!("variant {name:?}"),
            })? as u8;
        let attrs = match self.attributes() {
            Attributes::Variant(_) => Attributes::Variant(index),
            Attributes::Slab { position, .. } => Attributes::Slab {
                position,
                kind: index,
            },
            Attributes::Log { axis, .. } => Attributes::Log { kind: index, axis },
            _ => return Err(self.missing("variant")),
        };
        self.resolve(attrs)
    }

    fn variant_names(&self) -> Vec<&'static str> {
        match self.descriptor().rule {
            CodecRule::Variants(names) => names.to_vec(),
            rule => rule.kinds().iter().map(|k| k.name).collect(),
        }
    }
}
