use byteorder::{BigEndian, ByteOrder, LittleEndian};

use crate::{
    error::{Error, Result},
    Endian, Tag,
};

/// Reads a fixed width number in the input's byte order. The length has
/// already been checked by `consume`, so the byteorder call cannot panic.
macro_rules! consume_num {
    ($self:ident, $ty:ty, $read:ident) => {{
        let bs = $self.consume(std::mem::size_of::<$ty>())?;
        Ok::<_, Error>(match $self.endian {
            Endian::Little => LittleEndian::$read(bs),
            Endian::Big => BigEndian::$read(bs),
        })
    }};
}

/// A cursor over a borrowed byte slice. Every read is bounds checked and a
/// short read is a malformed document, never a panic.
pub(crate) struct Slice<'de> {
    data: &'de [u8],
    endian: Endian,
}

impl<'de> Slice<'de> {
    pub fn new(data: &'de [u8], endian: Endian) -> Self {
        Self { data, endian }
    }

    pub fn remaining(&self) -> usize {
        self.data.len()
    }

    fn consume(&mut self, n: usize) -> Result<&'de [u8]> {
        if n <= self.data.len() {
            let (ret, rest) = self.data.split_at(n);
            self.data = rest;
            Ok(ret)
        } else {
            Err(Error::unexpected_eof())
        }
    }

    pub fn consume_byte(&mut self) -> Result<u8> {
        Ok(self.consume(1)?[0])
    }

    pub fn consume_tag(&mut self) -> Result<Tag> {
        let tag = self.consume_byte()?;
        Tag::try_from(tag).map_err(|_| Error::invalid_tag(tag))
    }

    pub fn consume_i8(&mut self) -> Result<i8> {
        Ok(self.consume_byte()? as i8)
    }

    pub fn consume_i16(&mut self) -> Result<i16> {
        consume_num!(self, i16, read_i16)
    }

    pub fn consume_i32(&mut self) -> Result<i32> {
        consume_num!(self, i32, read_i32)
    }

    pub fn consume_i64(&mut self) -> Result<i64> {
        consume_num!(self, i64, read_i64)
    }

    pub fn consume_f32(&mut self) -> Result<f32> {
        consume_num!(self, f32, read_f32)
    }

    pub fn consume_f64(&mut self) -> Result<f64> {
        consume_num!(self, f64, read_f64)
    }

    pub fn consume_bytes(&mut self, n: usize) -> Result<&'de [u8]> {
        self.consume(n)
    }

    /// Consume a string prefixed by its length in bytes.
    pub fn consume_str(&mut self) -> Result<String> {
        let len = consume_num!(self, u16, read_u16)? as usize;
        let bs = self.consume(len)?;
        std::str::from_utf8(bs)
            .map(str::to_owned)
            .map_err(|_| Error::nonunicode_string(bs))
    }

    /// Consume the signed 4 byte count of a list or array. Every element
    /// takes at least `min_element_size` bytes, which lets a count larger
    /// than the remaining input be rejected before anything is allocated.
    pub fn consume_len(&mut self, min_element_size: usize) -> Result<usize> {
        let size = self.consume_i32()?;
        let size: usize = size
            .try_into()
            .map_err(|_| Error::malformed(format!("size was negative: {}", size)))?;

        let needed = size
            .checked_mul(min_element_size)
            .ok_or_else(|| Error::malformed("size too large"))?;

        if needed > self.remaining() {
            return Err(Error::malformed(format!(
                "size {} exceeds remaining input of {} bytes",
                size,
                self.remaining()
            )));
        }

        Ok(size)
    }
}
