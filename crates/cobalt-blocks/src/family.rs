use crate::codec::CodecRule;
use crate::types::{BlockId, Capability, IdSlot};

/// Compact, declarative description of one block family. The registry
/// synthesizes every canonical variant of the family from this row.
#[derive(Clone, Copy, Debug)]
pub struct FamilyDescriptor {
    /// Stable family key, e.g. `STONE_SLAB`.
    pub key: &'static str,
    pub display_name: &'static str,
    pub primary_id: BlockId,
    /// Overflow id for families with more than 16 states.
    pub secondary_id: Option<BlockId>,
    pub hardness: f32,
    pub blast_resistance: f32,
    pub rule: CodecRule,
    /// Directional families mounted against the face opposite their facing.
    pub attachable: bool,
}

impl FamilyDescriptor {
    pub const fn new(
        key: &'static str,
        display_name: &'static str,
        primary_id: BlockId,
        hardness: f32,
        blast_resistance: f32,
        rule: CodecRule,
    ) -> Self {
        Self {
            key,
            display_name,
            primary_id,
            secondary_id: None,
            hardness,
            blast_resistance,
            rule,
            attachable: false,
        }
    }

    pub const fn with_secondary(mut self, id: BlockId) -> Self {
        self.secondary_id = Some(id);
        self
    }

    pub const fn attachable(mut self) -> Self {
        self.attachable = true;
        self
    }

    /// Numeric block-type id backing `slot`, if the family has one.
    #[inline]
    pub fn block_id(&self, slot: IdSlot) -> Option<BlockId> {
        match slot {
            IdSlot::Primary => Some(self.primary_id),
            IdSlot::Secondary => self.secondary_id,
        }
    }

    pub fn slots(&self) -> impl Iterator<Item = (IdSlot, BlockId)> + '_ {
        IdSlot::ALL
            .into_iter()
            .filter_map(|slot| self.block_id(slot).map(|id| (slot, id)))
    }

    pub fn supports(&self, capability: Capability) -> bool {
        if capability == Capability::Attachable {
            return self.attachable;
        }
        self.rule.capabilities().contains(&capability)
    }

    pub fn capabilities(&self) -> Vec<Capability> {
        Capability::ALL
            .into_iter()
            .filter(|c| self.supports(*c))
            .collect()
    }
}
