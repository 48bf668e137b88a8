//! Structural checks over a populated registry.
//!
//! A healthy family satisfies: no two attribute tuples of the rule's domain
//! share a code within one slot (injectivity); every domain tuple `a` is
//! indexed at `combine(a)` by a variant carrying `a` (identity); and for every
//! variant `v` indexed by code, `decombine(v.slot, v.code) == v.attributes`
//! (round trip) and `get_by_enum_name(v.name)` is `v` itself.

use std::fmt;

use hashbrown::HashMap;

use crate::attrs::Attributes;
use crate::types::IdSlot;
use crate::variant::Family;

#[derive(Clone, Debug, PartialEq)]
pub enum ViolationKind {
    /// Decoding the stored code does not give back the stored attributes.
    RoundTrip {
        stored: Attributes,
        decoded: Option<Attributes>,
    },
    /// Two domain tuples encode to the same code.
    Collision { first: Attributes, second: Attributes },
    /// A domain tuple encodes to a code nothing is indexed at.
    Unindexed { attrs: Attributes },
    /// The variant indexed at a tuple's code carries other attributes.
    Identity {
        expected: Attributes,
        found: Attributes,
    },
    /// The variant's own name resolves to another variant, or to nothing.
    NameMismatch,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Violation {
    pub family: &'static str,
    pub slot: IdSlot,
    pub code: u8,
    pub kind: ViolationKind,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} code {}: ", self.family, self.slot, self.code)?;
        match &self.kind {
            ViolationKind::RoundTrip { stored, decoded } => {
                write!(f, "stored {stored:?} decodes as {decoded:?}")
            }
            ViolationKind::Collision { first, second } => {
                write!(f, "{first:?} and {second:?} share a code")
            }
            ViolationKind::Unindexed { attrs } => write!(f, "{attrs:?} has no variant"),
            ViolationKind::Identity { expected, found } => {
                write!(f, "expected {expected:?}, indexed variant carries {found:?}")
            }
            ViolationKind::NameMismatch => f.write_str("name resolves to a different variant"),
        }
    }
}

/// Checks one family. Extension variants whose code the rule cannot decode
/// (stored as [`Attributes::None`]) are exempt from the round-trip check.
pub fn check_family(family: Family<'_>) -> Vec<Violation> {
    let desc = family.descriptor();
    let rule = desc.rule;
    let mut out = Vec::new();
    let violation = |slot, code, kind| Violation {
        family: desc.key,
        slot,
        code,
        kind,
    };

    let mut seen: HashMap<(IdSlot, u8), Attributes> = HashMap::new();
    for attrs in rule.domain() {
        let Some((slot, code)) = rule.combine(attrs) else {
            continue;
        };
        if let Some(&first) = seen.get(&(slot, code)) {
            out.push(violation(
                slot,
                code,
                ViolationKind::Collision {
                    first,
                    second: attrs,
                },
            ));
            continue;
        }
        seen.insert((slot, code), attrs);
        match family.get_by_id(slot, code) {
            None => out.push(violation(slot, code, ViolationKind::Unindexed { attrs })),
            Some(found) if found.attributes() != attrs => out.push(violation(
                slot,
                code,
                ViolationKind::Identity {
                    expected: attrs,
                    found: found.attributes(),
                },
            )),
            Some(_) => {}
        }
    }

    for v in family.types() {
        let (slot, code) = (v.slot(), v.code());
        let stored = v.attributes();
        let decoded = rule.decombine(slot, code);
        let exempt = stored == Attributes::None && decoded.is_none();
        if decoded != Some(stored) && !exempt {
            out.push(violation(
                slot,
                code,
                ViolationKind::RoundTrip { stored, decoded },
            ));
        }
        match family.get_by_enum_name(v.name()) {
            Some(found) if found.ptr_eq(&v) => {}
            _ => out.push(violation(slot, code, ViolationKind::NameMismatch)),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attrs::MaterialKind;
    use crate::codec::CodecRule;
    use crate::family::FamilyDescriptor;
    use crate::registry::{BlockRegistry, VariantSpec};

    fn spec(family: &str, code: u8, name: &str) -> VariantSpec {
        VariantSpec {
            family: family.into(),
            slot: IdSlot::Primary,
            code,
            name: name.into(),
            hardness: None,
            blast_resistance: None,
        }
    }

    #[test]
    fn default_families_are_clean() {
        let reg = BlockRegistry::with_defaults();
        for family in reg.families() {
            let violations = check_family(family);
            assert!(violations.is_empty(), "{}: {violations:?}", family.key());
        }
    }

    #[test]
    fn undecodable_extension_is_exempt() {
        let mut reg = BlockRegistry::with_defaults();
        reg.register(spec("LADDER", 9, "ROPE")).unwrap();
        let ladder = reg.family("ladder").unwrap();
        assert!(check_family(ladder).is_empty());
        assert_eq!(ladder.types().len(), 5);
    }

    #[test]
    fn name_taken_over_by_another_code_is_reported() {
        let mut reg = BlockRegistry::with_defaults();
        reg.register(spec("WOOL", 14, "WHITE")).unwrap();
        let violations = check_family(reg.family("WOOL").unwrap());
        assert_eq!(
            violations,
            vec![Violation {
                family: "WOOL",
                slot: IdSlot::Primary,
                code: 0,
                kind: ViolationKind::NameMismatch,
            }]
        );
    }

    #[test]
    fn re_registering_the_same_name_stays_clean() {
        let mut reg = BlockRegistry::with_defaults();
        reg.register(spec("WOOL", 14, "RED")).unwrap();
        assert!(check_family(reg.family("WOOL").unwrap()).is_empty());
    }

    static HALF_SLAB_KINDS: &[MaterialKind] = &[
        MaterialKind::primary("STONE", 0),
        MaterialKind::overflow("RED_SANDSTONE", 0),
    ];
    // No secondary id, so the overflow kind cannot be populated.
    static NO_OVERFLOW_ID: &[FamilyDescriptor] = &[FamilyDescriptor::new(
        "HALF_SLAB",
        "Half Slab",
        900,
        2.0,
        6.0,
        CodecRule::Slab {
            kinds: HALF_SLAB_KINDS,
            double: false,
            partner: "HALF_SLAB",
        },
    )];

    #[test]
    fn unpopulated_domain_tuples_are_reported() {
        let reg = BlockRegistry::from_descriptors(NO_OVERFLOW_ID);
        let violations = check_family(reg.family("half_slab").unwrap());
        assert_eq!(violations.len(), 2);
        assert!(violations.iter().all(|v| {
            v.slot == IdSlot::Secondary && matches!(v.kind, ViolationKind::Unindexed { .. })
        }));
        assert_eq!(violations[0].code, 0);
        assert_eq!(violations[1].code, 8);
    }
}
