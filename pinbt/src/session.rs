//! An edit session: one document, where it came from, and how to put it
//! back.
//!
//! ```no_run
//! use pinbt::{header::FileHeaderStore, session::Session, Endian, Path, Value};
//!
//! # fn main() -> pinbt::error::Result<()> {
//! let mut session = Session::open(FileHeaderStore, "level.dat", Endian::Little)?;
//! session.set(&Path::parse("Player.Health")?, Value::short(20)?)?;
//! session.save()?;
//! # Ok(())
//! # }
//! ```
//!
//! A session owns its tree outright; nothing is shared between sessions.

use std::path::{Path as FsPath, PathBuf};

use log::info;

use crate::{
    de,
    error::Result,
    header::HeaderStore,
    ser, Compound, Document, Endian, Path, Value,
};

pub struct Session<S: HeaderStore> {
    store: S,
    path: PathBuf,
    endian: Endian,
    doc: Document,
}

impl<S: HeaderStore> Session<S> {
    /// Load and decode the document at `path` from `store`.
    pub fn open(store: S, path: impl Into<PathBuf>, endian: Endian) -> Result<Self> {
        let path = path.into();
        let doc = de::from_bytes(&store.strip_header(&path)?, endian)?;
        info!("opened {} ({})", path.display(), endian);

        Ok(Self {
            store,
            path,
            endian,
            doc,
        })
    }

    pub fn path(&self) -> &FsPath {
        &self.path
    }

    pub fn endian(&self) -> Endian {
        self.endian
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.doc
    }

    pub fn root(&self) -> &Compound {
        &self.doc.root
    }

    pub fn root_mut(&mut self) -> &mut Compound {
        &mut self.doc.root
    }

    pub fn get(&self, path: &Path) -> Result<&Value> {
        self.doc.get(path)
    }

    pub fn set(&mut self, path: &Path, value: impl Into<Value>) -> Result<()> {
        self.doc.set(path, value)
    }

    /// Encode the document and hand it to the store. Nothing is written if
    /// encoding fails.
    pub fn save(&self) -> Result<()> {
        let bytes = ser::to_bytes(&self.doc, self.endian)?;
        self.store.attach_header(&bytes, &self.path)?;
        info!("saved {} ({} bytes)", self.path.display(), bytes.len());
        Ok(())
    }

    /// Replace the document with what is currently in the store, dropping
    /// any unsaved changes. On error the current document is kept.
    pub fn reload(&mut self) -> Result<()> {
        self.doc = de::from_bytes(&self.store.strip_header(&self.path)?, self.endian)?;
        info!("reloaded {}", self.path.display());
        Ok(())
    }

    pub fn into_document(self) -> Document {
        self.doc
    }
}
