use std::fmt;
use std::hash::{Hash, Hasher};

use crate::attrs::Attributes;
use crate::error::VariantError;
use crate::family::FamilyDescriptor;
use crate::registry::{BlockRegistry, VariantIndex};
use crate::types::{BlockId, Capability, FamilyId, IdSlot, RawBlock, VariantKey};

/// Immutable flyweight payload stored once in the registry arena.
#[derive(Clone, Debug)]
pub struct MaterialVariant {
    pub(crate) key: VariantKey,
    pub(crate) name: String,
    pub(crate) hardness: f32,
    pub(crate) blast_resistance: f32,
    pub(crate) attrs: Attributes,
}

impl MaterialVariant {
    #[inline]
    pub fn key(&self) -> VariantKey {
        self.key
    }
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }
    #[inline]
    pub fn hardness(&self) -> f32 {
        self.hardness
    }
    #[inline]
    pub fn blast_resistance(&self) -> f32 {
        self.blast_resistance
    }
    #[inline]
    pub fn attributes(&self) -> Attributes {
        self.attrs
    }
}

/// Handle to one registered variant.
///
/// Equality and hashing follow the structural key (family, slot, code); use
/// [`Variant::ptr_eq`] to compare flyweight identity.
#[derive(Clone, Copy)]
pub struct Variant<'r> {
    registry: &'r BlockRegistry,
    index: VariantIndex,
    data: &'r MaterialVariant,
}

impl<'r> Variant<'r> {
    #[inline]
    pub(crate) fn new(
        registry: &'r BlockRegistry,
        index: VariantIndex,
        data: &'r MaterialVariant,
    ) -> Self {
        Self {
            registry,
            index,
            data,
        }
    }

    #[inline]
    pub fn index(&self) -> VariantIndex {
        self.index
    }
    #[inline]
    pub fn key(&self) -> VariantKey {
        self.data.key
    }
    #[inline]
    pub fn slot(&self) -> IdSlot {
        self.data.key.slot
    }
    /// The 4-bit data value within [`Variant::slot`].
    #[inline]
    pub fn code(&self) -> u8 {
        self.data.key.code
    }
    #[inline]
    pub fn name(&self) -> &'r str {
        &self.data.name
    }
    #[inline]
    pub fn hardness(&self) -> f32 {
        self.data.hardness
    }
    #[inline]
    pub fn blast_resistance(&self) -> f32 {
        self.data.blast_resistance
    }
    #[inline]
    pub fn attributes(&self) -> Attributes {
        self.data.attrs
    }
    #[inline]
    pub fn payload(&self) -> &'r MaterialVariant {
        self.data
    }

    pub fn family(&self) -> Family<'r> {
        Family::new(self.registry, self.data.key.family)
    }

    #[inline]
    pub fn descriptor(&self) -> &'static FamilyDescriptor {
        self.registry.descriptor(self.data.key.family)
    }

    pub fn display_name(&self) -> &'static str {
        self.descriptor().display_name
    }

    /// Numeric block-type id for this variant's slot.
    pub fn block_id(&self) -> BlockId {
        let desc = self.descriptor();
        desc.block_id(self.slot()).unwrap_or(desc.primary_id)
    }

    /// The (block id, data value) pair to persist or send.
    pub fn raw(&self) -> RawBlock {
        RawBlock::new(self.block_id(), self.code())
    }

    #[inline]
    pub fn supports(&self, capability: Capability) -> bool {
        self.descriptor().supports(capability)
    }

    /// Flyweight identity: both handles point at the same registered singleton.
    #[inline]
    pub fn ptr_eq(&self, other: &Variant<'_>) -> bool {
        std::ptr::eq(self.data, other.data)
    }

    /// Every sibling variant of this family.
    pub fn types(&self) -> Vec<Variant<'r>> {
        self.family().types()
    }

    pub fn get_type(&self, name: &str) -> Option<Variant<'r>> {
        self.family().get_by_enum_name(name)
    }

    pub fn get_type_by_id(&self, slot: IdSlot, code: u8) -> Option<Variant<'r>> {
        self.family().get_by_id(slot, code)
    }

    pub(crate) fn require(&self, capability: Capability) -> Result<(), VariantError> {
        if self.supports(capability) {
            Ok(())
        } else {
            Err(VariantError::Unsupported {
                family: self.descriptor().key,
                capability,
            })
        }
    }

    /// Error for variants whose payload does not carry the requested attribute.
    pub(crate) fn missing(&self, what: &str) -> VariantError {
        VariantError::OutOfDomain {
            family: self.descriptor().key,
            detail: format!("{what} of variant {}", self.name()),
        }
    }

    /// Sibling with the given attributes, within this family.
    pub(crate) fn resolve(&self, attrs: Attributes) -> Result<Variant<'r>, VariantError> {
        self.family().resolve(attrs)
    }
}

impl PartialEq for Variant<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Variant<'_> {}

impl Hash for Variant<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Debug for Variant<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{} ({})",
            self.descriptor().key,
            self.name(),
            self.raw()
        )
    }
}

impl fmt::Display for Variant<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.descriptor().key, self.name())
    }
}

/// Family-scoped view of the registry: the per-family code and name indices.
#[derive(Clone, Copy)]
pub struct Family<'r> {
    registry: &'r BlockRegistry,
    id: FamilyId,
}

impl<'r> Family<'r> {
    #[inline]
    pub(crate) fn new(registry: &'r BlockRegistry, id: FamilyId) -> Self {
        Self { registry, id }
    }

    #[inline]
    pub fn id(&self) -> FamilyId {
        self.id
    }
    #[inline]
    pub fn registry(&self) -> &'r BlockRegistry {
        self.registry
    }
    #[inline]
    pub fn descriptor(&self) -> &'static FamilyDescriptor {
        self.registry.descriptor(self.id)
    }
    #[inline]
    pub fn key(&self) -> &'static str {
        self.descriptor().key
    }

    /// Variant registered at `code` of `slot`. Absence is a normal outcome.
    pub fn get_by_id(&self, slot: IdSlot, code: u8) -> Option<Variant<'r>> {
        self.registry.lookup_code(self.id, slot, code)
    }

    /// Case-insensitive name lookup. Absence is a normal outcome.
    pub fn get_by_enum_name(&self, name: &str) -> Option<Variant<'r>> {
        self.registry.lookup_name(self.id, name)
    }

    /// Variants currently indexed by code, in (slot, code) order.
    pub fn types(&self) -> Vec<Variant<'r>> {
        IdSlot::ALL
            .into_iter()
            .flat_map(|slot| (0..16u8).map(move |code| (slot, code)))
            .filter_map(|(slot, code)| self.get_by_id(slot, code))
            .collect()
    }

    /// Variant at primary code 0, or the first registered one.
    pub fn default_variant(&self) -> Option<Variant<'r>> {
        self.get_by_id(IdSlot::Primary, 0)
            .or_else(|| self.types().into_iter().next())
    }

    #[inline]
    pub fn combine(&self, attrs: Attributes) -> Option<(IdSlot, u8)> {
        self.descriptor().rule.combine(attrs)
    }

    #[inline]
    pub fn decombine(&self, slot: IdSlot, code: u8) -> Option<Attributes> {
        self.descriptor().rule.decombine(slot, code)
    }

    /// Encodes `attrs` and resolves the registered variant at that code.
    pub fn resolve(&self, attrs: Attributes) -> Result<Variant<'r>, VariantError> {
        let family = self.key();
        let (slot, code) = self.combine(attrs).ok_or_else(|| VariantError::OutOfDomain {
            family,
            detail: format!("{attrs:?}"),
        })?;
        self.get_by_id(slot, code)
            .ok_or(VariantError::Unregistered { family, slot, code })
    }

    /// Growth stage (or cake bites) factory. Ages outside `0..=max` resolve to
    /// the canonical age-0 variant rather than failing.
    pub fn at_age(&self, age: i32) -> Result<Variant<'r>, VariantError> {
        let crate::codec::CodecRule::Age { max, .. } = self.descriptor().rule else {
            return Err(VariantError::Unsupported {
                family: self.key(),
                capability: Capability::Ageable,
            });
        };
        self.resolve(Attributes::Age(clamp_age(age, max)))
    }
}

/// Out-of-range ages fall back to 0.
#[inline]
pub(crate) fn clamp_age(age: i32, max: u8) -> u8 {
    if (0..=max as i32).contains(&age) {
        age as u8
    } else {
        0
    }
}

impl fmt::Debug for Family<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Family")
            .field("key", &self.key())
            .field("id", &self.id.0)
            .finish()
    }
}

impl PartialEq for Family<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
