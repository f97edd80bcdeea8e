//! This executable takes a path to a Pi edition level.dat file for a world,
//! and spits out a new level.dat file in the current directory. The data is
//! changed so that the world spawn is set to 0,0.
//!
//! This works on the bytes and the tree directly. The change-world-spawn
//! example does the same with a session.

use pinbt::{header, Endian, Value};

fn main() {
    let args: Vec<_> = std::env::args_os().collect();
    let file = std::fs::read(&args[1]).unwrap();

    let mut leveldat = pinbt::load(&header::strip(&file), Endian::Little).unwrap();

    *leveldat.root.get_mut("SpawnX").unwrap() = Value::Int(0);
    *leveldat.root.get_mut("SpawnY").unwrap() = Value::Int(100);
    *leveldat.root.get_mut("SpawnZ").unwrap() = Value::Int(0);

    let new_bytes = pinbt::dump(&leveldat, Endian::Little).unwrap();
    std::fs::write("level.dat", header::attach(&new_bytes).unwrap()).unwrap();
}
