//! Typed access to the fields Minecraft: Pi Edition keeps in `level.dat`.
//!
//! Only the fields an editor is interested in are modelled here. Everything
//! else in the document is left alone, and each field is written back with
//! the exact tag the game uses for it.
//!
//! ```
//! use pinbt::level::{GameMode, World};
//! use pinbt::{Compound, Value};
//!
//! let mut root = Compound::new();
//! root.insert("LevelName", "World");
//! root.insert("RandomSeed", 42_i64);
//! root.insert("Time", 0_i64);
//! root.insert("GameType", 1);
//!
//! let mut world = World::read(&root).unwrap();
//! assert_eq!(world.mode, GameMode::Creative);
//!
//! world.seed = 7;
//! world.write(&mut root);
//! assert_eq!(root["RandomSeed"], Value::Long(7));
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::{Compound, List, Tag, Value};

pub const LEVEL_NAME: &str = "LevelName";
pub const RANDOM_SEED: &str = "RandomSeed";
pub const TIME: &str = "Time";
pub const GAME_TYPE: &str = "GameType";
pub const PLAYER: &str = "Player";
pub const HEALTH: &str = "Health";

/// The `GameType` of a world, stored as an Int index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameMode {
    Survival = 0,
    Creative = 1,
}

impl GameMode {
    pub const ALL: [GameMode; 2] = [GameMode::Survival, GameMode::Creative];
}

impl TryFrom<i32> for GameMode {
    type Error = Error;

    fn try_from(value: i32) -> Result<Self> {
        match value {
            0 => Ok(GameMode::Survival),
            1 => Ok(GameMode::Creative),
            _ => Err(Error::out_of_range(Tag::Int, format!("{} (game mode)", value))),
        }
    }
}

impl From<GameMode> for i32 {
    fn from(mode: GameMode) -> Self {
        mode as i32
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameMode::Survival => f.write_str("Survival"),
            GameMode::Creative => f.write_str("Creative"),
        }
    }
}

/// Accepts the mode's name in any case, or its index.
impl FromStr for GameMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if let Ok(index) = s.parse::<i32>() {
            return GameMode::try_from(index);
        }

        GameMode::ALL
            .iter()
            .copied()
            .find(|mode| mode.to_string().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::out_of_range(Tag::Int, format!("'{}' (game mode)", s)))
    }
}

/// The world settings at the top level of `level.dat`.
#[derive(Debug, Clone, PartialEq)]
pub struct World {
    pub name: String,
    pub seed: i64,
    pub time: i64,
    pub mode: GameMode,
}

impl World {
    pub fn read(root: &Compound) -> Result<World> {
        Ok(World {
            name: root.get_string(LEVEL_NAME)?,
            seed: root.get_long(RANDOM_SEED)?,
            time: root.get_long(TIME)?,
            mode: GameMode::try_from(root.get_int(GAME_TYPE)?)?,
        })
    }

    /// Write every field back. Unchanged fields encode to the same bytes as
    /// before.
    pub fn write(&self, root: &mut Compound) {
        root.insert(LEVEL_NAME, self.name.as_str());
        root.insert(RANDOM_SEED, self.seed);
        root.insert(TIME, self.time);
        root.insert(GAME_TYPE, i32::from(self.mode));
    }
}

/// The player's health, a Short in the `Player` compound.
pub fn health(root: &Compound) -> Result<i16> {
    root.get_compound(PLAYER)?.get_short(HEALTH)
}

pub fn set_health(root: &mut Compound, health: i16) -> Result<()> {
    root.get_compound_mut(PLAYER)?.insert(HEALTH, health);
    Ok(())
}

/// One inventory or armor slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub id: i16,
    pub count: i8,
    pub damage: i16,
}

impl Slot {
    /// Stands in for slots missing from a short list. Id 255 with a count
    /// of -1 is what the game has been seen to use, not something the format
    /// defines.
    pub const EMPTY: Slot = Slot {
        id: 255,
        count: -1,
        damage: 0,
    };

    pub fn from_compound(c: &Compound) -> Result<Slot> {
        Ok(Slot {
            id: c.get_short("id")?,
            count: c.get_byte("Count")?,
            damage: c.get_short("Damage")?,
        })
    }

    pub fn to_compound(&self) -> Compound {
        let mut c = Compound::new();
        c.insert("id", self.id);
        c.insert("Count", self.count);
        c.insert("Damage", self.damage);
        c
    }
}

/// The slot lists in the `Player` compound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotList {
    Inventory,
    Armor,
}

impl SlotList {
    pub fn name(self) -> &'static str {
        match self {
            SlotList::Inventory => "Inventory",
            SlotList::Armor => "Armor",
        }
    }

    /// Number of slots the game shows.
    pub fn capacity(self) -> usize {
        match self {
            SlotList::Inventory => 36,
            SlotList::Armor => 4,
        }
    }
}

impl FromStr for SlotList {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "inventory" => Ok(SlotList::Inventory),
            "armor" => Ok(SlotList::Armor),
            _ => Err(Error::not_found(format!("slot list '{}'", s))),
        }
    }
}

/// Read exactly `list.capacity()` slots from the player compound. Extra
/// entries are ignored and missing ones are [`Slot::EMPTY`].
pub fn read_slots(player: &Compound, list: SlotList) -> Result<Vec<Slot>> {
    let mut slots = player
        .get_list(list.name())?
        .iter()
        .take(list.capacity())
        .map(|v| match v {
            Value::Compound(c) => Slot::from_compound(c),
            other => Err(Error::type_mismatch(Tag::Compound, other.tag())),
        })
        .collect::<Result<Vec<_>>>()?;

    slots.resize(list.capacity(), Slot::EMPTY);
    Ok(slots)
}

/// Replace a slot list with the given slots, at most `list.capacity()` of
/// them.
pub fn write_slots(player: &mut Compound, list: SlotList, slots: &[Slot]) -> Result<()> {
    let values = slots
        .iter()
        .take(list.capacity())
        .map(|slot| Value::Compound(slot.to_compound()))
        .collect();

    player.insert(list.name(), List::from_values(Tag::Compound, values)?);
    Ok(())
}

/// Change one slot. The whole list is rewritten padded to capacity, the
/// same as [`read_slots`] followed by [`write_slots`].
pub fn set_slot(player: &mut Compound, list: SlotList, index: usize, slot: Slot) -> Result<()> {
    let mut slots = read_slots(player, list)?;
    let len = slots.len();
    *slots
        .get_mut(index)
        .ok_or_else(|| Error::index_out_of_range(index, len))? = slot;
    write_slots(player, list, &slots)
}
