//! This executable takes a path to a Pi edition level.dat file and moves the
//! world spawn to 0,0. The file is changed in place through an edit session,
//! so the header is taken care of.

use pinbt::{header::FileHeaderStore, session::Session, Endian, Path};

fn main() {
    let args: Vec<_> = std::env::args_os().collect();
    let mut session = Session::open(FileHeaderStore, &args[1], Endian::Little).unwrap();

    for (key, value) in [("SpawnX", 0), ("SpawnY", 100), ("SpawnZ", 0)] {
        session.set(&Path::new().key(key), value).unwrap();
    }

    session.save().unwrap();
}
