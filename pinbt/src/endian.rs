use serde::{Deserialize, Serialize};

/// Byte order of every multi-byte number and length in a document.
///
/// Java edition writes big endian, the Pi and Pocket editions write little
/// endian. A document never mixes the two.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endian {
    Little,
    Big,
}

impl Default for Endian {
    /// Little endian, as written by Minecraft: Pi Edition.
    fn default() -> Self {
        Endian::Little
    }
}

impl std::fmt::Display for Endian {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Endian::Little => f.write_str("little endian"),
            Endian::Big => f.write_str("big endian"),
        }
    }
}
