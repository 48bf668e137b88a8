use serde::Deserialize;

use crate::types::IdSlot;

// Extension file: custom variants registered after the canonical families.
#[derive(Deserialize, Debug, Default)]
pub struct ExtensionConfig {
    #[serde(default)]
    pub variants: Vec<VariantDef>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct VariantDef {
    pub family: String,
    #[serde(default = "default_slot")]
    pub slot: IdSlot,
    pub code: u8,
    pub name: String,
    // Optional per-variant overrides of the family constants
    #[serde(default)]
    pub hardness: Option<f32>,
    #[serde(default)]
    pub blast_resistance: Option<f32>,
}

fn default_slot() -> IdSlot {
    IdSlot::Primary
}

impl ExtensionConfig {
    pub fn from_toml_str(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_variants_with_defaults() {
        let cfg = ExtensionConfig::from_toml_str(
            r#"
            [[variants]]
            family = "stone_slab"
            slot = "secondary"
            code = 1
            name = "PURPUR"
            hardness = 2.5

            [[variants]]
            family = "WOOL"
            code = 0
            name = "SNOW"
        "#,
        )
        .unwrap();
        assert_eq!(cfg.variants.len(), 2);
        assert_eq!(cfg.variants[0].slot, IdSlot::Secondary);
        assert_eq!(cfg.variants[0].hardness, Some(2.5));
        assert_eq!(cfg.variants[1].slot, IdSlot::Primary);
        assert_eq!(cfg.variants[1].blast_resistance, None);
    }

    #[test]
    fn empty_file_is_valid() {
        let cfg = ExtensionConfig::from_toml_str("").unwrap();
        assert!(cfg.variants.is_empty());
    }
}
