use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use cobalt_blocks::validate::check_family;
use cobalt_blocks::*;

fn reg() -> BlockRegistry {
    BlockRegistry::with_defaults()
}

#[test]
fn dual_id_slab_routing() {
    let reg = reg();
    let slabs = reg.family("STONE_SLAB").unwrap();
    let upper_red = slabs
        .resolve(Attributes::Slab {
            position: SlabPosition::Upper,
            kind: 8,
        })
        .unwrap();
    assert_eq!(upper_red.slot(), IdSlot::Secondary);
    assert_eq!(upper_red.code(), 8);
    assert_eq!(upper_red.raw(), RawBlock::new(182, 8));
    assert_eq!(upper_red.name(), "RED_SANDSTONE_UPPER");

    let bottom_red = upper_red.with_slab_position(SlabPosition::Bottom).unwrap();
    assert_eq!(bottom_red.raw(), RawBlock::new(182, 0));

    // Primary and secondary code 0 are different variants.
    let bottom_stone = slabs.get_by_id(IdSlot::Primary, 0).unwrap();
    assert_ne!(bottom_stone, bottom_red);
    assert_eq!(bottom_stone.variant_name(), "STONE");
    assert_eq!(bottom_red.variant_name(), "RED_SANDSTONE");
    assert_eq!(reg.get_by_raw(44, 8).unwrap().name(), "STONE_UPPER");
}

#[test]
fn slab_position_jumps_between_single_and_double_families() {
    let reg = reg();
    let quartz = reg.family("stone_slab").unwrap().get_by_enum_name("quartz_bottom").unwrap();
    let full = quartz.with_slab_position(SlabPosition::Full).unwrap();
    assert_eq!(full.family().key(), "DOUBLE_STONE_SLAB");
    assert_eq!(full.raw(), RawBlock::new(43, 7));
    assert_eq!(full.variant_name(), "QUARTZ");
    let smooth = full.with_slab_position(SlabPosition::SmoothFull).unwrap();
    assert_eq!(smooth.raw(), RawBlock::new(43, 15));
    let back = smooth.with_slab_position(SlabPosition::Upper).unwrap();
    assert_eq!(back.family().key(), "STONE_SLAB");
    assert_eq!(back.raw(), RawBlock::new(44, 15));

    let red_full = reg
        .family("STONE_SLAB")
        .unwrap()
        .get_by_id(IdSlot::Secondary, 0)
        .unwrap()
        .with_slab_position(SlabPosition::Full)
        .unwrap();
    assert_eq!(red_full.raw(), RawBlock::new(181, 0));
}

#[test]
fn logs_overflow_into_secondary_id() {
    let reg = reg();
    let log = reg.family("LOG").unwrap().default_variant().unwrap();
    assert_eq!(log.name(), "OAK_Y");
    let dark_oak_x = log.with_variant("dark_oak").unwrap().with_axis(Axis::X).unwrap();
    assert_eq!(dark_oak_x.raw(), RawBlock::new(162, 5));
    assert_eq!(dark_oak_x.axis(), Axis::X);
    assert_eq!(dark_oak_x.variant_name(), "DARK_OAK");
    assert_eq!(reg.get_by_raw(17, 9).unwrap().name(), "SPRUCE_Z");
    // Bark-only axis bits are not populated.
    assert!(reg.get_by_raw(17, 12).is_none());

    let hay = reg.family("HAY_BLOCK").unwrap().get_by_enum_name("z").unwrap();
    assert_eq!(hay.code(), 8);
    assert!(!hay.supports(Capability::Variantable));
}

#[test]
fn age_factory_resets_out_of_range() {
    let reg = reg();
    let wheat = reg.family("WHEAT").unwrap();
    assert_eq!(wheat.at_age(99).unwrap().age(), 0);
    assert_eq!(wheat.at_age(-3).unwrap().age(), 0);
    assert_eq!(wheat.at_age(7).unwrap().code(), 7);
    let cake = reg.family("CAKE").unwrap();
    assert_eq!(cake.at_age(6).unwrap().name(), "BITES_6");
    assert_eq!(cake.at_age(7).unwrap().age(), 0);
    assert!(matches!(
        reg.family("WOOL").unwrap().at_age(1),
        Err(VariantError::Unsupported { .. })
    ));
}

#[test]
fn door_accessors_are_part_gated() {
    let reg = reg();
    let door = reg.family("WOODEN_DOOR").unwrap();
    let top = door.get_by_id(IdSlot::Primary, 8).unwrap();
    assert!(top.is_top_part());
    assert_eq!(
        top.try_is_open(),
        Err(VariantError::WrongPart {
            family: "WOODEN_DOOR",
            expected: DoorPart::Bottom,
            actual: DoorPart::Top,
        })
    );
    assert!(matches!(top.try_facing(), Err(VariantError::WrongPart { .. })));
    assert!(!top.is_hinge_right());
    let powered = top.with_powered(true).unwrap().with_hinge_right(true).unwrap();
    assert_eq!(powered.code(), 0xB);
    assert_eq!(powered.name(), "TOP_RIGHT_POWERED");

    let bottom = door.default_variant().unwrap();
    assert_eq!(bottom.facing(), Face::East);
    assert!(!bottom.is_open());
    assert!(matches!(
        bottom.try_is_powered(),
        Err(VariantError::WrongPart {
            expected: DoorPart::Top,
            actual: DoorPart::Bottom,
            ..
        })
    ));
    let open_north = bottom.with_bottom_part(Face::North, true).unwrap();
    assert_eq!(open_north.code(), 7);
    assert_eq!(open_north.name(), "BOTTOM_NORTH_OPEN");
    assert_eq!(open_north.with_top_part(false, true).unwrap().code(), 0xA);
}

#[test]
#[should_panic(expected = "only defined on the bottom part")]
fn open_on_door_top_panics() {
    let reg = reg();
    let top = reg.get_by_raw(64, 9).unwrap();
    top.is_open();
}

#[test]
fn trapdoor_packs_three_attributes() {
    let reg = reg();
    let trapdoor = reg.family("IRON_TRAPDOOR").unwrap().default_variant().unwrap();
    assert_eq!(trapdoor.facing(), Face::North);
    let t = trapdoor
        .with_facing(Face::East)
        .unwrap()
        .with_open(true)
        .unwrap()
        .with_on_top(true)
        .unwrap();
    assert_eq!(t.raw(), RawBlock::new(167, 15));
    assert!(t.is_open() && t.is_on_top());
    assert_eq!(t.name(), "EAST_OPEN_TOP");
}

#[test]
fn stairs_encode_facing_and_upside_down() {
    let reg = reg();
    let stairs = reg.family("OAK_STAIRS").unwrap();
    let v = stairs.get_by_enum_name("north_upside_down").unwrap();
    assert_eq!(v.code(), 7);
    assert!(v.is_upside_down());
    assert_eq!(v.with_upside_down(false).unwrap().code(), 3);
    let east = stairs.default_variant().unwrap();
    assert_eq!(east.rotated_cw().unwrap().facing(), Face::South);
    assert!(matches!(
        east.with_facing(Face::Up),
        Err(VariantError::OutOfDomain { .. })
    ));
}

#[test]
fn attachable_faces_are_opposite_facing() {
    let reg = reg();
    let ladder = reg.family("LADDER").unwrap();
    let north = ladder.get_by_enum_name("north").unwrap();
    assert!(north.ptr_eq(&ladder.get_by_enum_name("NORTH").unwrap()));
    assert_eq!(north.code(), 2);
    assert_eq!(north.attached_face(), Face::South);
    assert_eq!(north.with_attached_face(Face::West).unwrap().facing(), Face::East);

    let standing = reg.family("TORCH").unwrap().get_by_enum_name("up").unwrap();
    assert_eq!(standing.code(), 5);
    assert_eq!(standing.attached_face(), Face::Down);

    let chest = reg.family("CHEST").unwrap().default_variant().unwrap();
    assert_eq!(
        chest.try_attached_face(),
        Err(VariantError::Unsupported {
            family: "CHEST",
            capability: Capability::Attachable,
        })
    );
}

#[test]
fn colors_and_cosmetic_variants() {
    let reg = reg();
    let wool = reg.family("WOOL").unwrap().default_variant().unwrap();
    let red = wool.with_color(DyeColor::Red).unwrap();
    assert_eq!(red.raw(), RawBlock::new(35, 14));
    assert_eq!(red.color(), DyeColor::Red);
    assert!(matches!(red.try_facing(), Err(VariantError::Unsupported { .. })));

    let stone = reg.family("STONE").unwrap().default_variant().unwrap();
    assert_eq!(stone.variant_names().len(), 7);
    let granite = stone.with_variant("Granite").unwrap();
    assert_eq!(granite.code(), 1);
    assert!(matches!(
        stone.with_variant("marble"),
        Err(VariantError::OutOfDomain { .. })
    ));
}

#[test]
fn equality_follows_key_identity_follows_arena() {
    let reg = reg();
    let a = reg.get_by_raw(35, 3).unwrap();
    let b = reg.family("wool").unwrap().get_by_enum_name("light_blue").unwrap();
    assert_eq!(a, b);
    assert!(a.ptr_eq(&b));
    let set: HashSet<Variant<'_>> = [a, b].into_iter().collect();
    assert_eq!(set.len(), 1);
}

#[test]
fn unknown_lookups_are_absent_not_errors() {
    let reg = reg();
    assert!(reg.family("NOT_A_BLOCK").is_none());
    assert!(reg.get_by_raw(35, 16).is_none());
    assert!(reg.get_by_raw(4000, 0).is_none());
    let wool = reg.family("WOOL").unwrap();
    assert!(wool.get_by_enum_name("chartreuse").is_none());
    assert!(wool.get_by_id(IdSlot::Secondary, 0).is_none());
}

#[test]
fn extensions_register_before_sharing() {
    let mut reg = reg();
    let cfg = cobalt_blocks::config::ExtensionConfig::from_toml_str(
        r#"
        [[variants]]
        family = "stone_slab"
        slot = "secondary"
        code = 1
        name = "PURPUR_BOTTOM"
        hardness = 2.5
    "#,
    )
    .unwrap();
    assert_eq!(reg.apply_extensions(cfg).unwrap(), 1);
    let purpur = reg.get_by_raw(182, 1).unwrap();
    assert_eq!(purpur.name(), "PURPUR_BOTTOM");
    assert_eq!(purpur.attributes(), Attributes::None);
    assert_eq!(purpur.hardness(), 2.5);
    assert!(check_family(purpur.family()).is_empty());
}

#[test]
fn concurrent_reads_see_the_same_singletons() {
    let reg = Arc::new(reg());
    let expected = reg.get_by_raw(53, 7).unwrap().index();
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let reg = Arc::clone(&reg);
            thread::spawn(move || {
                let stairs = reg.family("OAK_STAIRS").unwrap();
                let mut hits = 0;
                for _ in 0..200 {
                    let v = stairs.get_by_enum_name("NORTH_UPSIDE_DOWN").unwrap();
                    assert_eq!(v.index(), expected);
                    let w = reg.get_by_raw(35, (i % 16) as u8).unwrap();
                    assert_eq!(w.color().code(), (i % 16) as u8);
                    hits += 1;
                }
                hits
            })
        })
        .collect();
    let total: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();
    assert_eq!(total, 1600);
}
