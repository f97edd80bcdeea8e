use std::convert::TryFrom;

use crate::{Endian, Tag};

use self::builder::Builder;

mod level;
mod path;
#[allow(clippy::float_cmp)]
mod value;

macro_rules! check_tags {
    {$($tag:ident = $val:literal),* $(,)?} => {
        $(
            assert_eq!(u8::from(Tag::$tag), $val);
        )*
    };
}

#[test]
fn exhaustive_tag_check() {
    check_tags! {
        End = 0,
        Byte = 1,
        Short = 2,
        Int = 3,
        Long = 4,
        Float = 5,
        Double = 6,
        ByteArray = 7,
        String = 8,
        List = 9,
        Compound = 10,
    }

    for value in 11..=u8::MAX {
        assert!(Tag::try_from(value).is_err())
    }
}

/// An inventory slot as the game writes it.
fn slot(b: Builder, id: i16, count: i8, damage: i16) -> Builder {
    b.start_anon_compound()
        .short("id", id)
        .byte("Count", count)
        .short("Damage", damage)
        .end_anon_compound()
}

/// A `level.dat` document shaped like the ones Pi edition writes, without
/// the file header. The inventory holds `inventory` slots.
pub(crate) fn level_dat(endian: Endian, seed: i64, inventory: i32) -> Vec<u8> {
    let mut b = Builder::with_endian(endian)
        .start_compound("")
        .int("GameType", 1)
        .long("LastPlayed", 1_600_000_000)
        .string("LevelName", "World")
        .int("Platform", 2)
        .long("RandomSeed", seed)
        .long("SizeOnDisk", 0)
        .int("SpawnX", 128)
        .int("SpawnY", 64)
        .int("SpawnZ", 128)
        .int("StorageVersion", 3)
        .long("Time", 5000)
        .start_compound("Player")
        .start_list("Armor", Tag::Compound, 4);

    for _ in 0..4 {
        b = slot(b, 255, -1, 0);
    }

    b = b
        .float("FallDistance", 0.0)
        .short("Health", 20)
        .start_list("Inventory", Tag::Compound, inventory);

    for i in 0..inventory {
        b = slot(b, 256 + i as i16, 1 + (i % 64) as i8, 0);
    }

    b.start_list("Pos", Tag::Float, 3)
        .float_payload(128.5)
        .float_payload(65.62)
        .float_payload(128.5)
        .byte("OnGround", 1)
        .end_compound()
        .end_compound()
        .build()
}
