//! Canonical family table. Block ids and data-value layouts follow the 1.8
//! storage format bit for bit; registry population walks this table in order.

use crate::attrs::MaterialKind;
use crate::codec::{
    ALL_FACES, CodecRule, PUMPKIN_FACES, SKULL_FACES, TORCH_FACES, WALL_FACES,
};
use crate::family::FamilyDescriptor as F;

const STONE_VARIANTS: &[&str] = &[
    "STONE",
    "GRANITE",
    "POLISHED_GRANITE",
    "DIORITE",
    "POLISHED_DIORITE",
    "ANDESITE",
    "POLISHED_ANDESITE",
];
const DIRT_VARIANTS: &[&str] = &["DIRT", "COARSE_DIRT", "PODZOL"];
const WOOD_VARIANTS: &[&str] = &["OAK", "SPRUCE", "BIRCH", "JUNGLE", "ACACIA", "DARK_OAK"];
const SAND_VARIANTS: &[&str] = &["SAND", "RED_SAND"];
const SANDSTONE_VARIANTS: &[&str] = &["DEFAULT", "CHISELED", "SMOOTH"];
const STONE_BRICK_VARIANTS: &[&str] = &["DEFAULT", "MOSSY", "CRACKED", "CHISELED"];
const FLOWER_VARIANTS: &[&str] = &[
    "POPPY",
    "BLUE_ORCHID",
    "ALLIUM",
    "AZURE_BLUET",
    "RED_TULIP",
    "ORANGE_TULIP",
    "WHITE_TULIP",
    "PINK_TULIP",
    "OXEYE_DAISY",
];
const QUARTZ_VARIANTS: &[&str] = &["DEFAULT", "CHISELED", "LINES_Y", "LINES_X", "LINES_Z"];
const PRISMARINE_VARIANTS: &[&str] = &["ROUGH", "BRICKS", "DARK"];

/// Stone slab kinds. Red sandstone does not fit in the primary id's 3-bit kind space.
pub const STONE_SLAB_KINDS: &[MaterialKind] = &[
    MaterialKind::primary("STONE", 0),
    MaterialKind::primary("SANDSTONE", 1),
    MaterialKind::primary("WOOD", 2),
    MaterialKind::primary("COBBLESTONE", 3),
    MaterialKind::primary("BRICK", 4),
    MaterialKind::primary("STONE_BRICK", 5),
    MaterialKind::primary("NETHER_BRICK", 6),
    MaterialKind::primary("QUARTZ", 7),
    MaterialKind::overflow("RED_SANDSTONE", 0),
];
pub const WOOD_SLAB_KINDS: &[MaterialKind] = &[
    MaterialKind::primary("OAK", 0),
    MaterialKind::primary("SPRUCE", 1),
    MaterialKind::primary("BIRCH", 2),
    MaterialKind::primary("JUNGLE", 3),
    MaterialKind::primary("ACACIA", 4),
    MaterialKind::primary("DARK_OAK", 5),
];
/// Log kinds: two bits of kind per id, so acacia and dark oak overflow.
pub const LOG_KINDS: &[MaterialKind] = &[
    MaterialKind::primary("OAK", 0),
    MaterialKind::primary("SPRUCE", 1),
    MaterialKind::primary("BIRCH", 2),
    MaterialKind::primary("JUNGLE", 3),
    MaterialKind::overflow("ACACIA", 0),
    MaterialKind::overflow("DARK_OAK", 1),
];
const HAY_KINDS: &[MaterialKind] = &[MaterialKind::primary("HAY", 0)];

const STONE_SLAB: CodecRule = CodecRule::Slab {
    kinds: STONE_SLAB_KINDS,
    double: false,
    partner: "DOUBLE_STONE_SLAB",
};
const DOUBLE_STONE_SLAB: CodecRule = CodecRule::Slab {
    kinds: STONE_SLAB_KINDS,
    double: true,
    partner: "STONE_SLAB",
};
const WOODEN_SLAB: CodecRule = CodecRule::Slab {
    kinds: WOOD_SLAB_KINDS,
    double: false,
    partner: "DOUBLE_WOODEN_SLAB",
};
const DOUBLE_WOODEN_SLAB: CodecRule = CodecRule::Slab {
    kinds: WOOD_SLAB_KINDS,
    double: true,
    partner: "WOODEN_SLAB",
};

const CROP: CodecRule = CodecRule::Age { max: 7, label: "AGE" };
const GROWTH_15: CodecRule = CodecRule::Age {
    max: 15,
    label: "AGE",
};

/// Every canonical family in registration order.
pub static FAMILIES: &[F] = &[
    F::new("AIR", "Air", 0, 0.0, 0.0, CodecRule::Single),
    F::new("STONE", "Stone", 1, 1.5, 6.0, CodecRule::Variants(STONE_VARIANTS)),
    F::new("GRASS", "Grass Block", 2, 0.6, 0.6, CodecRule::Single),
    F::new("DIRT", "Dirt", 3, 0.5, 0.5, CodecRule::Variants(DIRT_VARIANTS)),
    F::new("COBBLESTONE", "Cobblestone", 4, 2.0, 6.0, CodecRule::Single),
    F::new("PLANKS", "Wood Planks", 5, 2.0, 3.0, CodecRule::Variants(WOOD_VARIANTS)),
    F::new("SAPLING", "Sapling", 6, 0.0, 0.0, CodecRule::Variants(WOOD_VARIANTS)),
    F::new("BEDROCK", "Bedrock", 7, -1.0, 3_600_000.0, CodecRule::Single),
    F::new("SAND", "Sand", 12, 0.5, 0.5, CodecRule::Variants(SAND_VARIANTS)),
    F::new("GRAVEL", "Gravel", 13, 0.6, 0.6, CodecRule::Single),
    F::new("LOG", "Wood", 17, 2.0, 2.0, CodecRule::Log { kinds: LOG_KINDS }).with_secondary(162),
    F::new("GLASS", "Glass", 20, 0.3, 0.3, CodecRule::Single),
    F::new("DISPENSER", "Dispenser", 23, 3.5, 3.5, CodecRule::Facing(ALL_FACES)),
    F::new("SANDSTONE", "Sandstone", 24, 0.8, 0.8, CodecRule::Variants(SANDSTONE_VARIANTS)),
    F::new("WOOL", "Wool", 35, 0.8, 0.8, CodecRule::Color),
    F::new("RED_FLOWER", "Flower", 38, 0.0, 0.0, CodecRule::Variants(FLOWER_VARIANTS)),
    F::new("DOUBLE_STONE_SLAB", "Double Stone Slab", 43, 2.0, 6.0, DOUBLE_STONE_SLAB)
        .with_secondary(181),
    F::new("STONE_SLAB", "Stone Slab", 44, 2.0, 6.0, STONE_SLAB).with_secondary(182),
    F::new("BRICK_BLOCK", "Bricks", 45, 2.0, 6.0, CodecRule::Single),
    F::new("OBSIDIAN", "Obsidian", 49, 50.0, 1200.0, CodecRule::Single),
    F::new("TORCH", "Torch", 50, 0.0, 0.0, CodecRule::Facing(TORCH_FACES)).attachable(),
    F::new("FIRE", "Fire", 51, 0.0, 0.0, GROWTH_15),
    F::new("OAK_STAIRS", "Oak Wood Stairs", 53, 2.0, 3.0, CodecRule::Stairs),
    F::new("CHEST", "Chest", 54, 2.5, 2.5, CodecRule::Facing(WALL_FACES)),
    F::new("WHEAT", "Crops", 59, 0.0, 0.0, CROP),
    F::new("FURNACE", "Furnace", 61, 3.5, 3.5, CodecRule::Facing(WALL_FACES)),
    F::new("LIT_FURNACE", "Burning Furnace", 62, 3.5, 3.5, CodecRule::Facing(WALL_FACES)),
    F::new("WOODEN_DOOR", "Oak Door", 64, 3.0, 3.0, CodecRule::Door),
    F::new("LADDER", "Ladder", 65, 0.4, 0.4, CodecRule::Facing(WALL_FACES)).attachable(),
    F::new("STONE_STAIRS", "Cobblestone Stairs", 67, 2.0, 6.0, CodecRule::Stairs),
    F::new("WALL_SIGN", "Wall Sign", 68, 1.0, 1.0, CodecRule::Facing(WALL_FACES)).attachable(),
    F::new("IRON_DOOR", "Iron Door", 71, 5.0, 5.0, CodecRule::Door),
    F::new(
        "UNLIT_REDSTONE_TORCH",
        "Redstone Torch (off)",
        75,
        0.0,
        0.0,
        CodecRule::Facing(TORCH_FACES),
    )
    .attachable(),
    F::new("REDSTONE_TORCH", "Redstone Torch", 76, 0.0, 0.0, CodecRule::Facing(TORCH_FACES))
        .attachable(),
    F::new("CACTUS", "Cactus", 81, 0.4, 0.4, GROWTH_15),
    F::new("REEDS", "Sugar Cane", 83, 0.0, 0.0, GROWTH_15),
    F::new("PUMPKIN", "Pumpkin", 86, 1.0, 1.0, CodecRule::Facing(PUMPKIN_FACES)),
    F::new("LIT_PUMPKIN", "Jack o'Lantern", 91, 1.0, 1.0, CodecRule::Facing(PUMPKIN_FACES)),
    F::new("CAKE", "Cake", 92, 0.5, 0.5, CodecRule::Age { max: 6, label: "BITES" }),
    F::new("STAINED_GLASS", "Stained Glass", 95, 0.3, 0.3, CodecRule::Color),
    F::new("TRAPDOOR", "Trapdoor", 96, 3.0, 3.0, CodecRule::Trapdoor),
    F::new("STONEBRICK", "Stone Bricks", 98, 1.5, 6.0, CodecRule::Variants(STONE_BRICK_VARIANTS)),
    F::new("BRICK_STAIRS", "Brick Stairs", 108, 2.0, 6.0, CodecRule::Stairs),
    F::new("STONE_BRICK_STAIRS", "Stone Brick Stairs", 109, 1.5, 6.0, CodecRule::Stairs),
    F::new("NETHER_BRICK_STAIRS", "Nether Brick Stairs", 114, 2.0, 6.0, CodecRule::Stairs),
    F::new("NETHER_WART", "Nether Wart", 115, 0.0, 0.0, CodecRule::Age { max: 3, label: "AGE" }),
    F::new("DOUBLE_WOODEN_SLAB", "Double Wood Slab", 125, 2.0, 3.0, DOUBLE_WOODEN_SLAB),
    F::new("WOODEN_SLAB", "Wood Slab", 126, 2.0, 3.0, WOODEN_SLAB),
    F::new("SANDSTONE_STAIRS", "Sandstone Stairs", 128, 0.8, 0.8, CodecRule::Stairs),
    F::new("ENDER_CHEST", "Ender Chest", 130, 22.5, 600.0, CodecRule::Facing(WALL_FACES)),
    F::new("SPRUCE_STAIRS", "Spruce Wood Stairs", 134, 2.0, 3.0, CodecRule::Stairs),
    F::new("BIRCH_STAIRS", "Birch Wood Stairs", 135, 2.0, 3.0, CodecRule::Stairs),
    F::new("JUNGLE_STAIRS", "Jungle Wood Stairs", 136, 2.0, 3.0, CodecRule::Stairs),
    F::new("CARROTS", "Carrots", 141, 0.0, 0.0, CROP),
    F::new("POTATOES", "Potatoes", 142, 0.0, 0.0, CROP),
    F::new("SKULL", "Mob Head", 144, 1.0, 1.0, CodecRule::Facing(SKULL_FACES)),
    F::new("QUARTZ_BLOCK", "Block of Quartz", 155, 0.8, 0.8, CodecRule::Variants(QUARTZ_VARIANTS)),
    F::new("QUARTZ_STAIRS", "Quartz Stairs", 156, 0.8, 0.8, CodecRule::Stairs),
    F::new("DROPPER", "Dropper", 158, 3.5, 3.5, CodecRule::Facing(ALL_FACES)),
    F::new("STAINED_HARDENED_CLAY", "Stained Clay", 159, 1.25, 4.2, CodecRule::Color),
    F::new("STAINED_GLASS_PANE", "Stained Glass Pane", 160, 0.3, 0.3, CodecRule::Color),
    F::new("ACACIA_STAIRS", "Acacia Wood Stairs", 163, 2.0, 3.0, CodecRule::Stairs),
    F::new("DARK_OAK_STAIRS", "Dark Oak Wood Stairs", 164, 2.0, 3.0, CodecRule::Stairs),
    F::new("IRON_TRAPDOOR", "Iron Trapdoor", 167, 5.0, 5.0, CodecRule::Trapdoor),
    F::new("PRISMARINE", "Prismarine", 168, 1.5, 6.0, CodecRule::Variants(PRISMARINE_VARIANTS)),
    F::new("HAY_BLOCK", "Hay Bale", 170, 0.5, 0.5, CodecRule::Log { kinds: HAY_KINDS }),
    F::new("CARPET", "Carpet", 171, 0.1, 0.1, CodecRule::Color),
    F::new(
        "RED_SANDSTONE",
        "Red Sandstone",
        179,
        0.8,
        0.8,
        CodecRule::Variants(SANDSTONE_VARIANTS),
    ),
    F::new("RED_SANDSTONE_STAIRS", "Red Sandstone Stairs", 180, 0.8, 0.8, CodecRule::Stairs),
    F::new("SPRUCE_DOOR", "Spruce Door", 193, 3.0, 3.0, CodecRule::Door),
    F::new("BIRCH_DOOR", "Birch Door", 194, 3.0, 3.0, CodecRule::Door),
    F::new("JUNGLE_DOOR", "Jungle Door", 195, 3.0, 3.0, CodecRule::Door),
    F::new("ACACIA_DOOR", "Acacia Door", 196, 3.0, 3.0, CodecRule::Door),
    F::new("DARK_OAK_DOOR", "Dark Oak Door", 197, 3.0, 3.0, CodecRule::Door),
];
