use std::sync::LazyLock;

use cobalt_blocks::{Ageable, Attributes, BlockRegistry, Family, Variant};
use proptest::prelude::*;

static REGISTRY: LazyLock<BlockRegistry> = LazyLock::new(BlockRegistry::with_defaults);

fn families() -> Vec<Family<'static>> {
    REGISTRY.families().collect()
}

fn arb_family() -> impl Strategy<Value = Family<'static>> {
    let all = families();
    (0..all.len()).prop_map(move |i| all[i])
}

fn arb_variant() -> impl Strategy<Value = Variant<'static>> {
    let all: Vec<Variant<'static>> = families().into_iter().flat_map(|f| f.types()).collect();
    (0..all.len()).prop_map(move |i| all[i])
}

proptest! {
    // Every legal tuple encodes, decodes back, and lands on a registered variant carrying it
    #[test]
    fn combine_decombine_roundtrip(family in arb_family(), pick in any::<prop::sample::Index>()) {
        let domain = family.descriptor().rule.domain();
        prop_assume!(!domain.is_empty());
        let attrs = domain[pick.index(domain.len())];
        let (slot, code) = family.combine(attrs).expect("domain tuple encodes");
        prop_assert!(code < 16);
        prop_assert_eq!(family.decombine(slot, code), Some(attrs));
        let v = family.get_by_id(slot, code).expect("canonical variant registered");
        prop_assert_eq!(v.attributes(), attrs);
    }

    // Distinct tuples never share a code within one family
    #[test]
    fn combine_is_injective(
        family in arb_family(),
        a in any::<prop::sample::Index>(),
        b in any::<prop::sample::Index>(),
    ) {
        let domain = family.descriptor().rule.domain();
        prop_assume!(!domain.is_empty());
        let (x, y) = (domain[a.index(domain.len())], domain[b.index(domain.len())]);
        prop_assume!(x != y);
        prop_assert_ne!(family.combine(x), family.combine(y));
    }

    // Name lookup ignores case
    #[test]
    fn name_lookup_is_case_insensitive(
        v in arb_variant(),
        mask in prop::collection::vec(any::<bool>(), 32),
    ) {
        let mixed: String = v
            .name()
            .chars()
            .zip(mask.iter().cycle())
            .map(|(c, &lower)| if lower { c.to_ascii_lowercase() } else { c })
            .collect();
        let found = v.get_type(&mixed).expect("name resolves");
        prop_assert!(found.ptr_eq(&v));
    }

    // Persisted (id, data) pairs resolve back to the same singleton
    #[test]
    fn raw_pair_resolves_to_singleton(v in arb_variant()) {
        let raw = v.raw();
        let back = REGISTRY.get_raw(raw).expect("raw resolves");
        prop_assert!(back.ptr_eq(&v));
        prop_assert_eq!(back, v);
    }

    // Any requested age lands inside the family's range; out-of-range requests give age 0
    #[test]
    fn ages_clamp_to_zero(age in -100i32..100) {
        for key in ["WHEAT", "CAKE", "FIRE", "NETHER_WART"] {
            let family = REGISTRY.family(key).unwrap();
            let seed = family.default_variant().unwrap();
            let max = seed.max_age().unwrap() as i32;
            let got = seed.with_age(age).unwrap();
            let expected = if (0..=max).contains(&age) { age as u8 } else { 0 };
            prop_assert_eq!(got.age(), expected);
            prop_assert_eq!(family.at_age(age).unwrap(), got);
            prop_assert_eq!(got.attributes(), Attributes::Age(expected));
        }
    }
}
