use serde::Serialize;

use crate::{de, error::Result, ser, Compound, Endian, Path, Value};

/// A complete NBT document: the single named compound at the root of a file.
///
/// The root name is usually empty, but it is kept so that the document
/// encodes back to exactly the bytes it was decoded from.
#[derive(Serialize, Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "arbitrary1", derive(arbitrary::Arbitrary))]
pub struct Document {
    pub name: String,
    pub root: Compound,
}

impl Document {
    pub fn new(name: impl Into<String>, root: Compound) -> Self {
        Self {
            name: name.into(),
            root,
        }
    }

    /// Decode a document, see [`de::from_bytes`].
    pub fn load(bytes: &[u8], endian: Endian) -> Result<Self> {
        de::from_bytes(bytes, endian)
    }

    /// Encode this document, see [`ser::to_bytes`].
    pub fn dump(&self, endian: Endian) -> Result<Vec<u8>> {
        ser::to_bytes(self, endian)
    }

    pub fn get(&self, path: &Path) -> Result<&Value> {
        self.root.get_path(path)
    }

    pub fn get_mut(&mut self, path: &Path) -> Result<&mut Value> {
        self.root.get_path_mut(path)
    }

    pub fn set(&mut self, path: &Path, value: impl Into<Value>) -> Result<()> {
        self.root.set_path(path, value.into())
    }
}
