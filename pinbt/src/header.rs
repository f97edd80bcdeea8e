//! The container header of Minecraft: Pi Edition `level.dat` files.
//!
//! Pi edition prefixes the NBT document with 8 bytes: the storage version
//! (`3`) and the length of the document that follows, both as little endian
//! `u32`. The header is not part of the NBT grammar, so it has to be removed
//! before decoding and put back after encoding.
//!
//! ```
//! use pinbt::header;
//!
//! let doc = [10, 0, 0, 0];
//! let file = header::attach(&doc).unwrap();
//! assert_eq!(file, [3, 0, 0, 0, 4, 0, 0, 0, 10, 0, 0, 0]);
//! assert_eq!(header::strip(&file), doc);
//! ```
//!
//! An NBT document always starts with the compound tag id `10`, so it can
//! never be mistaken for a header.

use std::path::Path;

use byteorder::{ByteOrder, LittleEndian};
use log::{info, warn};

use crate::error::{Error, Result};

/// The storage version written by the game.
pub const STORAGE_VERSION: u32 = 3;

/// Size of the header in bytes.
pub const HEADER_LEN: usize = 8;

/// Whether `bytes` starts with a Pi `level.dat` header.
pub fn has_header(bytes: &[u8]) -> bool {
    bytes.len() >= 4 && LittleEndian::read_u32(&bytes[..4]) == STORAGE_VERSION
}

/// The payload length recorded in the header, if there is a complete one.
pub fn declared_len(bytes: &[u8]) -> Option<u32> {
    if has_header(bytes) && bytes.len() >= HEADER_LEN {
        Some(LittleEndian::read_u32(&bytes[4..HEADER_LEN]))
    } else {
        None
    }
}

/// Remove the header from `bytes`. Input without a header is returned as
/// it is.
pub fn strip(bytes: &[u8]) -> Vec<u8> {
    if has_header(bytes) {
        bytes.get(HEADER_LEN..).unwrap_or(&[]).to_vec()
    } else {
        bytes.to_vec()
    }
}

/// Put a header in front of `doc`. Input that already has a header is
/// returned as it is.
pub fn attach(doc: &[u8]) -> Result<Vec<u8>> {
    if has_header(doc) {
        return Ok(doc.to_vec());
    }

    let len: u32 = doc
        .len()
        .try_into()
        .map_err(|_| Error::invalid_tree(format!("document of {} bytes is too long", doc.len())))?;

    let mut out = vec![0; HEADER_LEN];
    LittleEndian::write_u32(&mut out[..4], STORAGE_VERSION);
    LittleEndian::write_u32(&mut out[4..], len);
    out.extend_from_slice(doc);
    Ok(out)
}

/// Somewhere documents are loaded from and saved to, along with whatever
/// framing surrounds them.
///
/// The codec only ever sees bare document bytes. An edit
/// [`Session`][crate::session::Session] asks its store for those bytes on
/// open, and hands the re-encoded bytes back on save.
pub trait HeaderStore {
    /// Read the document stored at `path`, without its header.
    fn strip_header(&self, path: &Path) -> Result<Vec<u8>>;

    /// Store `doc` at `path`, adding its header.
    fn attach_header(&self, doc: &[u8], path: &Path) -> Result<()>;
}

impl<S: HeaderStore + ?Sized> HeaderStore for Box<S> {
    fn strip_header(&self, path: &Path) -> Result<Vec<u8>> {
        (**self).strip_header(path)
    }

    fn attach_header(&self, doc: &[u8], path: &Path) -> Result<()> {
        (**self).attach_header(doc, path)
    }
}

/// The game does not rely on the length field, so a mismatch is only
/// reported. Returns whether the field agrees with the payload.
pub(crate) fn check_declared_len(bytes: &[u8], path: &Path) -> bool {
    let actual = bytes.len().saturating_sub(HEADER_LEN);
    match declared_len(bytes) {
        Some(declared) if declared as usize == actual => true,
        Some(declared) => {
            warn!(
                "{}: header declares {} bytes but {} follow",
                path.display(),
                declared,
                actual
            );
            false
        }
        None => {
            warn!("{}: header is truncated", path.display());
            false
        }
    }
}

/// Pi `level.dat` files on disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileHeaderStore;

impl HeaderStore for FileHeaderStore {
    fn strip_header(&self, path: &Path) -> Result<Vec<u8>> {
        let bytes = std::fs::read(path)?;
        if has_header(&bytes) {
            info!("removing header from {}", path.display());
            check_declared_len(&bytes, path);
        } else {
            info!("{} has no header", path.display());
        }
        Ok(strip(&bytes))
    }

    fn attach_header(&self, doc: &[u8], path: &Path) -> Result<()> {
        info!("writing {} with header", path.display());
        std::fs::write(path, attach(doc)?)?;
        Ok(())
    }
}

/// Plain NBT files on disk with no header at all, such as the output of
/// `pi-nbt remove-header`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawFileStore;

impl HeaderStore for RawFileStore {
    fn strip_header(&self, path: &Path) -> Result<Vec<u8>> {
        Ok(std::fs::read(path)?)
    }

    fn attach_header(&self, doc: &[u8], path: &Path) -> Result<()> {
        std::fs::write(path, doc)?;
        Ok(())
    }
}
