use super::level_dat;
use crate::de::from_bytes;
use crate::error::{ErrorKind, Result};
use crate::level::{
    health, read_slots, set_health, set_slot, write_slots, GameMode, Slot, SlotList, World,
};
use crate::ser::to_bytes;
use crate::{Endian, Tag, Value};

#[test]
fn read_world() -> Result<()> {
    let doc = from_bytes(&level_dat(Endian::Little, 42, 36), Endian::Little)?;
    let world = World::read(&doc.root)?;

    assert_eq!(
        world,
        World {
            name: "World".to_owned(),
            seed: 42,
            time: 5000,
            mode: GameMode::Creative,
        }
    );
    Ok(())
}

#[test]
fn write_unchanged_world_is_byte_identical() -> Result<()> {
    let input = level_dat(Endian::Little, 42, 36);
    let mut doc = from_bytes(&input, Endian::Little)?;

    World::read(&doc.root)?.write(&mut doc.root);
    assert_eq!(to_bytes(&doc, Endian::Little)?, input);
    Ok(())
}

#[test]
fn write_world_keeps_tags() -> Result<()> {
    let mut doc = from_bytes(&level_dat(Endian::Little, 42, 36), Endian::Little)?;

    let mut world = World::read(&doc.root)?;
    world.name = "Renamed".to_owned();
    world.seed = -1;
    world.mode = GameMode::Survival;
    world.write(&mut doc.root);

    assert_eq!(doc.root["LevelName"], Value::String("Renamed".to_owned()));
    assert_eq!(doc.root["RandomSeed"], Value::Long(-1));
    assert_eq!(doc.root["GameType"], Value::Int(0));
    Ok(())
}

#[test]
fn unknown_game_mode() -> Result<()> {
    let mut doc = from_bytes(&level_dat(Endian::Little, 42, 36), Endian::Little)?;
    doc.root.insert("GameType", 2);

    assert_eq!(World::read(&doc.root).unwrap_err().kind(), ErrorKind::OutOfRange);
    Ok(())
}

#[test]
fn game_mode_parsing() {
    assert_eq!("creative".parse::<GameMode>().unwrap(), GameMode::Creative);
    assert_eq!("Survival".parse::<GameMode>().unwrap(), GameMode::Survival);
    assert_eq!("1".parse::<GameMode>().unwrap(), GameMode::Creative);
    assert_eq!(
        "adventure".parse::<GameMode>().unwrap_err().kind(),
        ErrorKind::OutOfRange
    );
    assert_eq!(GameMode::Creative.to_string(), "Creative");
    assert_eq!(i32::from(GameMode::Survival), 0);
}

#[test]
fn player_health() -> Result<()> {
    let mut doc = from_bytes(&level_dat(Endian::Little, 42, 36), Endian::Little)?;
    assert_eq!(health(&doc.root)?, 20);

    set_health(&mut doc.root, 7)?;
    assert_eq!(health(&doc.root)?, 7);
    assert_eq!(doc.root.get_compound("Player")?["Health"], Value::Short(7));
    Ok(())
}

#[test]
fn read_full_inventory() -> Result<()> {
    let doc = from_bytes(&level_dat(Endian::Little, 42, 36), Endian::Little)?;
    let slots = read_slots(doc.root.get_compound("Player")?, SlotList::Inventory)?;

    assert_eq!(slots.len(), 36);
    assert_eq!(slots[0], Slot { id: 256, count: 1, damage: 0 });
    assert_eq!(slots[35], Slot { id: 291, count: 36, damage: 0 });
    Ok(())
}

#[test]
fn short_inventory_is_padded() -> Result<()> {
    let doc = from_bytes(&level_dat(Endian::Little, 42, 3), Endian::Little)?;
    let slots = read_slots(doc.root.get_compound("Player")?, SlotList::Inventory)?;

    assert_eq!(slots.len(), 36);
    assert_eq!(slots[2].id, 258);
    assert!(slots[3..].iter().all(|s| *s == Slot::EMPTY));
    Ok(())
}

#[test]
fn long_armor_is_truncated() -> Result<()> {
    let mut doc = from_bytes(&level_dat(Endian::Little, 42, 36), Endian::Little)?;
    let player = doc.root.get_compound_mut("Player")?;

    let many = vec![Slot { id: 1, count: 1, damage: 0 }; 10];
    write_slots(player, SlotList::Armor, &many)?;
    assert_eq!(player.get_list("Armor")?.len(), 4);
    assert_eq!(read_slots(player, SlotList::Armor)?.len(), 4);
    Ok(())
}

#[test]
fn edit_one_slot() -> Result<()> {
    let mut doc = from_bytes(&level_dat(Endian::Little, 42, 3), Endian::Little)?;
    let player = doc.root.get_compound_mut("Player")?;

    let sword = Slot { id: 267, count: 1, damage: 5 };
    set_slot(player, SlotList::Inventory, 10, sword)?;

    let inventory = player.get_list("Inventory")?;
    assert_eq!(inventory.element_tag(), Tag::Compound);
    assert_eq!(inventory.len(), 36);
    assert_eq!(read_slots(player, SlotList::Inventory)?[10], sword);

    let err = set_slot(player, SlotList::Armor, 4, sword).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IndexOutOfRange);
    Ok(())
}

#[test]
fn slot_write_matches_game_layout() -> Result<()> {
    // Rewriting a full list of slots with their own values changes nothing.
    let input = level_dat(Endian::Little, 42, 36);
    let mut doc = from_bytes(&input, Endian::Little)?;
    let player = doc.root.get_compound_mut("Player")?;

    for list in [SlotList::Inventory, SlotList::Armor] {
        let slots = read_slots(player, list)?;
        write_slots(player, list, &slots)?;
    }

    assert_eq!(to_bytes(&doc, Endian::Little)?, input);
    Ok(())
}

#[test]
fn slot_list_names() {
    assert_eq!("armor".parse::<SlotList>().unwrap(), SlotList::Armor);
    assert_eq!("Inventory".parse::<SlotList>().unwrap(), SlotList::Inventory);
    assert_eq!(
        "chest".parse::<SlotList>().unwrap_err().kind(),
        ErrorKind::NotFound
    );
}
