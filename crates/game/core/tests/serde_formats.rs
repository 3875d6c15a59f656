//! Serialized shapes used by content files.
#![cfg(feature = "serde")]

use rpg_core::{Amount, GameConfig, Item, ItemId};

#[test]
fn item_reads_type_field_and_decimal_amounts() {
    let json = r#"{
        "id": 4,
        "name": "Leather Vest",
        "type": "Armor",
        "defense": 3,
        "weight": 7.5,
        "value": "12.25"
    }"#;

    let item: Item = serde_json::from_str(json).unwrap();
    assert_eq!(item.id, ItemId(4));
    assert_eq!(item.kind, "Armor");
    assert_eq!(item.attack, 0);
    assert_eq!(item.weight, Amount::from_hundredths(750));
    assert_eq!(item.value, Amount::from_hundredths(1225));
}

#[test]
fn config_fills_missing_fields_with_defaults() {
    let config: GameConfig = serde_json::from_str(r#"{ "max_weight": 60 }"#).unwrap();
    assert_eq!(config.max_weight, Amount::from_units(60));
    assert_eq!(config.world_sample_size, GameConfig::DEFAULT_WORLD_SAMPLE_SIZE);
}
