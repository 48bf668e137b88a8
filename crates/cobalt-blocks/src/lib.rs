//! Block families, their data-value codecs, and the variant registry.
#![forbid(unsafe_code)]

pub mod attrs;
pub mod capability;
pub mod codec;
pub mod config;
pub mod error;
pub mod families;
pub mod family;
pub mod registry;
pub mod types;
pub mod validate;
pub mod variant;

pub use attrs::{Attributes, DoorHalf, DoorPart, DyeColor, SlabPosition};
pub use capability::{
    Ageable, Attachable, Colorable, Directional, Door, Openable, Rotatable, Slab, Stairs,
    Trapdoor, Variantable,
};
pub use error::{RegistryError, VariantError};
pub use family::FamilyDescriptor;
pub use registry::{BlockRegistry, VariantIndex, VariantSpec};
pub use types::{BlockId, Capability, FamilyId, IdSlot, RawBlock, VariantKey};
pub use variant::{Family, MaterialVariant, Variant};

pub use cobalt_geom::{Axis, Face};
