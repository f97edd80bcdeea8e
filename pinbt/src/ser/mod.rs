//! Encoding of NBT documents to bytes.
//!
//! Encoding is the mirror of [decoding][crate::de]: compounds are written in
//! their insertion order, so a document that was decoded and not changed
//! encodes back to the identical bytes.
//!
//! ```
//! use pinbt::{de, ser, Endian};
//!
//! let bytes = [10, 0, 0, 1, 1, 0, b'a', 1, 0];
//! let doc = de::from_bytes(&bytes, Endian::Little).unwrap();
//! assert_eq!(ser::to_bytes(&doc, Endian::Little).unwrap(), bytes);
//! ```
//!
//! The only trees that cannot be encoded are ones the format cannot
//! express: a list holding an element of a type other than its declared
//! tag, a string or name over 65535 bytes, or a list or array with more
//! than `i32::MAX` elements. These fail with
//! [`InvalidTree`][crate::error::ErrorKind], as do trees nested deeper than
//! [`de::MAX_DEPTH`][crate::de::MAX_DEPTH], which could not be read back.

mod write_nbt;

use std::io::Write;

use byteorder::WriteBytesExt;
use log::debug;

use crate::{
    de::MAX_DEPTH,
    error::{Error, Result},
    Compound, Document, Endian, List, Tag, Value,
};

use self::write_nbt::WriteNbt;

/// Encode a document to a new buffer.
pub fn to_bytes(doc: &Document, endian: Endian) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    to_writer(&mut buf, doc, endian)?;
    debug!("encoded {} byte {} document", buf.len(), endian);
    Ok(buf)
}

/// Encode a document to a writer.
///
/// On error some of the document may already have been written. Use
/// [`to_bytes`] to get all or nothing.
pub fn to_writer<W: Write>(writer: W, doc: &Document, endian: Endian) -> Result<()> {
    let mut encoder = Encoder {
        writer,
        endian,
        depth: 0,
    };
    encoder.writer.write_tag(Tag::Compound)?;
    encoder.writer.write_size_prefixed_str(endian, &doc.name)?;
    encoder.compound(&doc.root)
}

struct Encoder<W: Write> {
    writer: W,
    endian: Endian,
    depth: usize,
}

impl<W: Write> Encoder<W> {
    /// Counts nesting the same way the decoder does.
    fn enter(&mut self) -> Result<()> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(Error::invalid_tree(format!(
                "nesting deeper than {} levels",
                MAX_DEPTH
            )));
        }
        Ok(())
    }

    fn compound(&mut self, compound: &Compound) -> Result<()> {
        self.enter()?;
        for (name, value) in compound {
            self.writer.write_tag(value.tag())?;
            self.writer.write_size_prefixed_str(self.endian, name)?;
            self.payload(value)?;
        }
        self.writer.write_tag(Tag::End)?;
        self.depth -= 1;
        Ok(())
    }

    fn list(&mut self, list: &List) -> Result<()> {
        self.enter()?;
        let tag = list.element_tag();
        if let Some(bad) = list.iter().find(|v| v.tag() != tag) {
            return Err(Error::invalid_tree(format!(
                "list of {} contains a {}",
                tag,
                bad.tag()
            )));
        }

        self.writer.write_tag(tag)?;
        self.writer.write_len(self.endian, list.len())?;
        for value in list {
            self.payload(value)?;
        }
        self.depth -= 1;
        Ok(())
    }

    fn payload(&mut self, value: &Value) -> Result<()> {
        let endian = self.endian;
        match value {
            Value::Byte(v) => {
                self.writer.write_i8(*v)?;
                Ok(())
            }
            Value::Short(v) => self.writer.write_nbt_short(endian, *v),
            Value::Int(v) => self.writer.write_nbt_int(endian, *v),
            Value::Long(v) => self.writer.write_nbt_long(endian, *v),
            Value::Float(v) => self.writer.write_nbt_float(endian, *v),
            Value::Double(v) => self.writer.write_nbt_double(endian, *v),
            Value::ByteArray(bs) => {
                self.writer.write_len(endian, bs.len())?;
                let bytes: Vec<u8> = bs.iter().map(|b| *b as u8).collect();
                self.writer.write_all(&bytes)?;
                Ok(())
            }
            Value::String(s) => self.writer.write_size_prefixed_str(endian, s),
            Value::List(l) => self.list(l),
            Value::Compound(c) => self.compound(c),
        }
    }
}
