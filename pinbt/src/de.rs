//! Decoding of NBT documents from bytes.
//!
//! The decoder works on an in-memory slice. It reads exactly one root
//! compound and insists that nothing follows it:
//!
//! ```
//! use pinbt::{de::from_bytes, Endian, Value};
//!
//! // A root compound named "" holding the byte `a = 1`, then the end tag.
//! let bytes = [10, 0, 0, 1, 1, 0, b'a', 1, 0];
//! let doc = from_bytes(&bytes, Endian::Little).unwrap();
//! assert_eq!(doc.root["a"], Value::Byte(1));
//! ```
//!
//! Any problem with the input, whether an unknown tag id, a length that runs
//! past the end, invalid UTF-8, or a root that is not a compound, is an
//! error of kind [`MalformedDocument`][crate::error::ErrorKind]. Nothing is
//! ever guessed or repaired.

use log::debug;

use crate::{
    error::{Error, Result},
    input::Slice,
    Compound, Document, Endian, List, Tag, Value,
};

/// Compounds and lists nested deeper than this are rejected rather than
/// risk exhausting the stack.
pub const MAX_DEPTH: usize = 512;

/// Decode a complete document from `input`, which must hold exactly one
/// root compound and nothing after it.
pub fn from_bytes(input: &[u8], endian: Endian) -> Result<Document> {
    let mut decoder = Decoder::new(input, endian);
    let doc = decoder.document()?;

    if decoder.remaining() != 0 {
        return Err(Error::malformed(format!(
            "{} trailing bytes after root compound",
            decoder.remaining()
        )));
    }

    debug!("decoded {} byte {} document", input.len(), endian);
    Ok(doc)
}

/// A decoder over a byte slice. [`from_bytes`] is the usual entry point;
/// this type is useful when more data may follow a document.
pub struct Decoder<'de> {
    input: Slice<'de>,
    depth: usize,
}

impl<'de> Decoder<'de> {
    pub fn new(input: &'de [u8], endian: Endian) -> Self {
        Self {
            input: Slice::new(input, endian),
            depth: 0,
        }
    }

    /// Number of bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.input.remaining()
    }

    /// Decode the next document: a compound tag id, its name, and its
    /// payload.
    pub fn document(&mut self) -> Result<Document> {
        let tag = self.input.consume_tag()?;
        if tag != Tag::Compound {
            return Err(Error::malformed(format!(
                "invalid nbt: root is {}, not a compound",
                tag
            )));
        }

        let name = self.input.consume_str()?;
        let root = self.compound()?;
        Ok(Document { name, root })
    }

    fn enter(&mut self) -> Result<()> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(Error::malformed(format!(
                "nesting deeper than {} levels",
                MAX_DEPTH
            )));
        }
        Ok(())
    }

    fn compound(&mut self) -> Result<Compound> {
        self.enter()?;
        let mut compound = Compound::new();

        loop {
            let tag = self.input.consume_tag()?;
            if tag == Tag::End {
                break;
            }

            let name = self.input.consume_str()?;
            let value = self.payload(tag)?;

            // Keeping either copy would change the bytes written back out.
            if compound.contains_key(&name) {
                return Err(Error::malformed(format!("duplicate key in compound: {}", name)));
            }
            compound.insert(name, value);
        }

        self.depth -= 1;
        Ok(compound)
    }

    fn list(&mut self) -> Result<List> {
        self.enter()?;

        let tag = self.input.consume_tag()?;
        let len = self.input.consume_len(min_payload_size(tag))?;
        if tag == Tag::End && len != 0 {
            return Err(Error::malformed(format!("list of {} end tags", len)));
        }

        // consume_len has checked `len` against the remaining input.
        let mut values = Vec::with_capacity(len);
        for _ in 0..len {
            values.push(self.payload(tag)?);
        }

        self.depth -= 1;
        Ok(List::from_parts(tag, values))
    }

    fn payload(&mut self, tag: Tag) -> Result<Value> {
        Ok(match tag {
            Tag::Byte => Value::Byte(self.input.consume_i8()?),
            Tag::Short => Value::Short(self.input.consume_i16()?),
            Tag::Int => Value::Int(self.input.consume_i32()?),
            Tag::Long => Value::Long(self.input.consume_i64()?),
            Tag::Float => Value::Float(self.input.consume_f32()?),
            Tag::Double => Value::Double(self.input.consume_f64()?),
            Tag::ByteArray => {
                let len = self.input.consume_len(1)?;
                let bs = self.input.consume_bytes(len)?;
                Value::ByteArray(bs.iter().map(|b| *b as i8).collect())
            }
            Tag::String => Value::String(self.input.consume_str()?),
            Tag::List => Value::List(self.list()?),
            Tag::Compound => Value::Compound(self.compound()?),
            Tag::End => return Err(Error::malformed("unexpected end tag")),
        })
    }
}

/// The fewest bytes a payload of `tag` can take.
fn min_payload_size(tag: Tag) -> usize {
    match tag {
        Tag::End => 0,
        Tag::Byte => 1,
        Tag::Short => 2,
        Tag::Int => 4,
        Tag::Long => 8,
        Tag::Float => 4,
        Tag::Double => 8,
        Tag::ByteArray => 4,
        Tag::String => 2,
        Tag::List => 5,
        Tag::Compound => 1,
    }
}
