use std::collections::HashMap;
use std::error::Error;
use std::fs;
use std::path::Path;

use super::attrs::Attributes;
use super::config::{ExtensionConfig, VariantDef};
use super::error::RegistryError;
use super::families::FAMILIES;
use super::family::FamilyDescriptor;
use super::types::{BlockId, CODES_PER_SLOT, FamilyId, IdSlot, RawBlock, VariantKey};
use super::variant::{Family, MaterialVariant, Variant};

/// Position of a variant in the registry arena. Stable for the registry's lifetime.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct VariantIndex(pub u32);

/// The code index and name index of one family.
#[derive(Clone, Debug)]
struct FamilyTable {
    descriptor: &'static FamilyDescriptor,
    // One dense table per id slot; entries may be sparse.
    codes: [[Option<VariantIndex>; CODES_PER_SLOT]; 2],
    // Keys are stored upper-cased.
    names: hashbrown::HashMap<String, VariantIndex>,
}

impl FamilyTable {
    fn new(descriptor: &'static FamilyDescriptor) -> Self {
        Self {
            descriptor,
            codes: [[None; CODES_PER_SLOT]; 2],
            names: hashbrown::HashMap::new(),
        }
    }
}

/// A custom variant registered on top of the canonical set.
#[derive(Clone, Debug)]
pub struct VariantSpec {
    pub family: String,
    pub slot: IdSlot,
    pub code: u8,
    pub name: String,
    /// Falls back to the family constant.
    pub hardness: Option<f32>,
    pub blast_resistance: Option<f32>,
}

/// Arena of every variant plus the per-family indices.
///
/// Populated once at startup from a descriptor table. [`BlockRegistry::register`]
/// needs `&mut self`, so once the registry is shared (e.g. behind an `Arc`) it is
/// read-only and lookups need no locking.
#[derive(Default, Clone, Debug)]
pub struct BlockRegistry {
    variants: Vec<MaterialVariant>,
    families: Vec<FamilyTable>,
    by_key: HashMap<String, FamilyId>,
    by_block_id: HashMap<BlockId, (FamilyId, IdSlot)>,
}

impl BlockRegistry {
    pub fn new() -> Self {
        Self {
            variants: Vec::new(),
            families: Vec::new(),
            by_key: HashMap::new(),
            by_block_id: HashMap::new(),
        }
    }

    /// Registry holding every canonical family of [`FAMILIES`].
    pub fn with_defaults() -> Self {
        Self::from_descriptors(FAMILIES)
    }

    /// Synthesizes all canonical variants of `descriptors`, in table order.
    pub fn from_descriptors(descriptors: &'static [FamilyDescriptor]) -> Self {
        let mut reg = BlockRegistry::new();
        for desc in descriptors {
            let family = reg.add_family(desc);
            for attrs in desc.rule.domain() {
                let Some((slot, code)) = desc.rule.combine(attrs) else {
                    log::warn!(
                        target: "registry",
                        "{}: domain value {:?} does not encode",
                        desc.key,
                        attrs
                    );
                    continue;
                };
                if desc.block_id(slot).is_none() {
                    log::warn!(
                        target: "registry",
                        "{}: {:?} needs a {} block id",
                        desc.key,
                        attrs,
                        slot
                    );
                    continue;
                }
                reg.insert(MaterialVariant {
                    key: VariantKey { family, slot, code },
                    name: desc.rule.variant_name(attrs),
                    hardness: desc.hardness,
                    blast_resistance: desc.blast_resistance,
                    attrs,
                });
            }
        }
        log::info!(
            target: "registry",
            "registered {} variants across {} families",
            reg.variants.len(),
            reg.families.len()
        );
        reg
    }

    fn add_family(&mut self, descriptor: &'static FamilyDescriptor) -> FamilyId {
        let id = FamilyId(self.families.len() as u16);
        self.families.push(FamilyTable::new(descriptor));
        self.by_key.insert(descriptor.key.to_ascii_uppercase(), id);
        for (slot, block_id) in descriptor.slots() {
            if let Some((prev, _)) = self.by_block_id.insert(block_id, (id, slot)) {
                log::warn!(
                    target: "registry",
                    "block id {} moved from {} to {}",
                    block_id,
                    self.descriptor(prev).key,
                    descriptor.key
                );
            }
        }
        id
    }

    /// Inserts into both indices. Last writer wins on a code or name collision;
    /// the displaced variant stays in the arena and keeps any other name entry.
    fn insert(&mut self, variant: MaterialVariant) -> VariantIndex {
        let index = VariantIndex(self.variants.len() as u32);
        let key = variant.key;
        let name = variant.name.to_ascii_uppercase();
        self.variants.push(variant);
        let table = &mut self.families[key.family.0 as usize];
        let slot = &mut table.codes[key.slot.index()][key.code as usize];
        if let Some(prev) = slot.replace(index) {
            log::debug!(
                target: "registry",
                "{} {} code {}: replacing {}",
                table.descriptor.key,
                key.slot,
                key.code,
                self.variants[prev.0 as usize].name
            );
        }
        table.names.insert(name, index);
        index
    }

    /// Adds a custom variant to an existing family. Attributes are decoded from
    /// the code when the family's rule recognizes it.
    pub fn register(&mut self, spec: VariantSpec) -> Result<VariantIndex, RegistryError> {
        let family = self
            .by_key
            .get(&spec.family.to_ascii_uppercase())
            .copied()
            .ok_or_else(|| RegistryError::UnknownFamily(spec.family.clone()))?;
        let desc = self.descriptor(family);
        if spec.code as usize >= CODES_PER_SLOT {
            return Err(RegistryError::CodeOutOfRange {
                family: desc.key.to_string(),
                code: spec.code,
            });
        }
        if desc.block_id(spec.slot).is_none() {
            return Err(RegistryError::SlotUnavailable {
                family: desc.key.to_string(),
                slot: spec.slot,
            });
        }
        let attrs = desc
            .rule
            .decombine(spec.slot, spec.code)
            .unwrap_or(Attributes::None);
        log::debug!(
            target: "registry",
            "register {}:{} at {} code {}",
            desc.key,
            spec.name,
            spec.slot,
            spec.code
        );
        Ok(self.insert(MaterialVariant {
            key: VariantKey {
                family,
                slot: spec.slot,
                code: spec.code,
            },
            name: spec.name,
            hardness: spec.hardness.unwrap_or(desc.hardness),
            blast_resistance: spec.blast_resistance.unwrap_or(desc.blast_resistance),
            attrs,
        }))
    }

    /// Registers every entry of an extension config, in file order.
    pub fn apply_extensions(&mut self, cfg: ExtensionConfig) -> Result<usize, RegistryError> {
        let mut count = 0;
        for def in cfg.variants {
            self.register(VariantSpec::from(def))?;
            count += 1;
        }
        Ok(count)
    }

    pub fn load_extensions_from_path(
        &mut self,
        path: impl AsRef<Path>,
    ) -> Result<usize, Box<dyn Error>> {
        let text = fs::read_to_string(path)?;
        let cfg: ExtensionConfig = toml::from_str(&text)?;
        Ok(self.apply_extensions(cfg)?)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    pub fn family_count(&self) -> usize {
        self.families.len()
    }

    #[inline]
    pub(crate) fn descriptor(&self, id: FamilyId) -> &'static FamilyDescriptor {
        self.families[id.0 as usize].descriptor
    }

    /// Case-insensitive family lookup by key.
    pub fn family(&self, key: &str) -> Option<Family<'_>> {
        self.by_key
            .get(&key.to_ascii_uppercase())
            .map(|&id| Family::new(self, id))
    }

    pub fn family_by_id(&self, id: FamilyId) -> Option<Family<'_>> {
        ((id.0 as usize) < self.families.len()).then(|| Family::new(self, id))
    }

    pub fn families(&self) -> impl Iterator<Item = Family<'_>> + '_ {
        (0..self.families.len()).map(move |i| Family::new(self, FamilyId(i as u16)))
    }

    pub fn family_for_block_id(&self, block_id: BlockId) -> Option<(Family<'_>, IdSlot)> {
        self.by_block_id
            .get(&block_id)
            .map(|&(id, slot)| (Family::new(self, id), slot))
    }

    /// Resolves a stored (block id, data value) pair. Unknown pairs yield `None`.
    pub fn get_by_raw(&self, block_id: BlockId, data: u8) -> Option<Variant<'_>> {
        let &(family, slot) = self.by_block_id.get(&block_id)?;
        self.lookup_code(family, slot, data)
    }

    #[inline]
    pub fn get_raw(&self, raw: RawBlock) -> Option<Variant<'_>> {
        self.get_by_raw(raw.id, raw.data)
    }

    pub fn variant(&self, index: VariantIndex) -> Option<Variant<'_>> {
        self.variants
            .get(index.0 as usize)
            .map(|data| Variant::new(self, index, data))
    }

    pub(crate) fn lookup_code(
        &self,
        family: FamilyId,
        slot: IdSlot,
        code: u8,
    ) -> Option<Variant<'_>> {
        let table = self.families.get(family.0 as usize)?;
        let index = (*table.codes[slot.index()].get(code as usize)?)?;
        self.variant(index)
    }

    pub(crate) fn lookup_name(&self, family: FamilyId, name: &str) -> Option<Variant<'_>> {
        let table = self.families.get(family.0 as usize)?;
        let index = *table.names.get(&name.to_ascii_uppercase())?;
        self.variant(index)
    }
}

impl From<VariantDef> for VariantSpec {
    fn from(def: VariantDef) -> Self {
        VariantSpec {
            family: def.family,
            slot: def.slot,
            code: def.code,
            name: def.name,
            hardness: def.hardness,
            blast_resistance: def.blast_resistance,
        }
    }
}
