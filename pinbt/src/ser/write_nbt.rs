use std::io::Write;

use byteorder::{BigEndian, LittleEndian, WriteBytesExt};

use crate::error::{Error, Result};
use crate::{Endian, Tag};

macro_rules! write_num {
    ($self:ident, $endian:ident, $write:ident, $v:expr) => {{
        match $endian {
            Endian::Little => $self.$write::<LittleEndian>($v)?,
            Endian::Big => $self.$write::<BigEndian>($v)?,
        }
        Ok::<(), Error>(())
    }};
}

pub(crate) trait WriteNbt: Write {
    fn write_tag(&mut self, tag: Tag) -> Result<()> {
        self.write_u8(tag as u8)?;
        Ok(())
    }

    fn write_nbt_short(&mut self, endian: Endian, v: i16) -> Result<()> {
        write_num!(self, endian, write_i16, v)
    }

    fn write_nbt_int(&mut self, endian: Endian, v: i32) -> Result<()> {
        write_num!(self, endian, write_i32, v)
    }

    fn write_nbt_long(&mut self, endian: Endian, v: i64) -> Result<()> {
        write_num!(self, endian, write_i64, v)
    }

    fn write_nbt_float(&mut self, endian: Endian, v: f32) -> Result<()> {
        write_num!(self, endian, write_f32, v)
    }

    fn write_nbt_double(&mut self, endian: Endian, v: f64) -> Result<()> {
        write_num!(self, endian, write_f64, v)
    }

    fn write_size_prefixed_str(&mut self, endian: Endian, s: &str) -> Result<()> {
        let len: u16 = s.len().try_into().map_err(|_| {
            Error::invalid_tree(format!("string of {} bytes is too long", s.len()))
        })?;
        write_num!(self, endian, write_u16, len)?;
        self.write_all(s.as_bytes())?;
        Ok(())
    }

    fn write_len(&mut self, endian: Endian, len: usize) -> Result<()> {
        let len: i32 = len
            .try_into()
            .map_err(|_| Error::invalid_tree(format!("len {} too large", len)))?;
        self.write_nbt_int(endian, len)
    }
}

impl<T> WriteNbt for T where T: Write {}
