//! pinbt reads and writes the NBT data found in *Minecraft: Pi Edition*
//! `level.dat` files, with the aim of letting a tool change a handful of
//! fields while leaving every other byte of the file exactly as it was.
//!
//! * For the tag tree see [`Value`], [`Compound`] and [`List`].
//! * For decoding and encoding see [`de`] and [`ser`], or the [`load`] and
//!   [`dump`] shorthands.
//! * For the 8 byte container header of Pi `level.dat` files see [`header`].
//! * For an edit session tying a file, its header and its tree together see
//!   [`session`].
//! * For the fields the game keeps in `level.dat` see [`level`].
//!
//! Unlike Java edition NBT, the Pi edition writes its files in *little
//! endian*, so every entry point takes an [`Endian`].
//!
//! # Quick example
//!
//! Change the seed of a world, leaving everything else untouched.
//!
//! ```no_run
//! use pinbt::{header, Endian, Path, Value};
//!
//! # fn main() -> pinbt::error::Result<()> {
//! let file = std::fs::read("level.dat")?;
//! let mut doc = pinbt::load(&header::strip(&file), Endian::Little)?;
//!
//! doc.root.set_path(&Path::parse("RandomSeed")?, Value::Long(7))?;
//!
//! let bytes = pinbt::dump(&doc, Endian::Little)?;
//! std::fs::write("level.dat", header::attach(&bytes)?)?;
//! # Ok(())
//! # }
//! ```

pub mod de;
pub mod error;
pub mod header;
pub mod level;
pub mod ser;
pub mod session;

mod document;
mod endian;
mod input;
mod value;

pub use document::*;
pub use endian::Endian;
pub use value::*;

#[cfg(test)]
mod test;

use std::convert::TryFrom;

use serde::{Deserialize, Serialize};

/// An NBT tag id. This does not carry the value or the name of the data.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Hash, Clone, Copy)]
#[cfg_attr(feature = "arbitrary1", derive(arbitrary::Arbitrary))]
#[repr(u8)]
pub enum Tag {
    /// Represents the end of a Compound object.
    End = 0,
    /// Equivalent to i8.
    Byte = 1,
    /// Equivalent to i16.
    Short = 2,
    /// Equivalent to i32.
    Int = 3,
    /// Equivalent to i64
    Long = 4,
    /// Equivalent to f32.
    Float = 5,
    /// Equivalent to f64.
    Double = 6,
    /// Represents as array of Byte (i8).
    ByteArray = 7,
    /// Represents a UTF-8 string.
    String = 8,
    /// Represents a list of other objects, all of the same type.
    List = 9,
    /// Represents a struct-like structure.
    Compound = 10,
}

// The tags will very rarely change, so writing this out by hand is no real
// burden.
impl TryFrom<u8> for Tag {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, ()> {
        use Tag::*;
        Ok(match value {
            0 => End,
            1 => Byte,
            2 => Short,
            3 => Int,
            4 => Long,
            5 => Float,
            6 => Double,
            7 => ByteArray,
            8 => String,
            9 => List,
            10 => Compound,
            11..=u8::MAX => return Err(()),
        })
    }
}

impl From<Tag> for u8 {
    fn from(tag: Tag) -> Self {
        match tag {
            Tag::End => 0,
            Tag::Byte => 1,
            Tag::Short => 2,
            Tag::Int => 3,
            Tag::Long => 4,
            Tag::Float => 5,
            Tag::Double => 6,
            Tag::ByteArray => 7,
            Tag::String => 8,
            Tag::List => 9,
            Tag::Compound => 10,
        }
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Tag::End => "End",
            Tag::Byte => "Byte",
            Tag::Short => "Short",
            Tag::Int => "Int",
            Tag::Long => "Long",
            Tag::Float => "Float",
            Tag::Double => "Double",
            Tag::ByteArray => "ByteArray",
            Tag::String => "String",
            Tag::List => "List",
            Tag::Compound => "Compound",
        };
        f.write_str(name)
    }
}

/// Decode a complete document. Shorthand for [`de::from_bytes`].
pub fn load(bytes: &[u8], endian: Endian) -> error::Result<Document> {
    de::from_bytes(bytes, endian)
}

/// Encode a complete document. Shorthand for [`ser::to_bytes`].
pub fn dump(doc: &Document, endian: Endian) -> error::Result<Vec<u8>> {
    ser::to_bytes(doc, endian)
}
