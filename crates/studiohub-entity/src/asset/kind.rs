//! Asset kind enumeration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Whether an asset is a leaf file or a folder that may hold children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    /// A single file reference.
    File,
    /// A folder reference.
    Folder,
}

impl AssetKind {
    /// Check if this kind may hold children.
    pub fn is_folder(&self) -> bool {
        matches!(self, Self::Folder)
    }

    /// Return the serialized name of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Folder => "folder",
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssetKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "file" => Ok(Self::File),
            "folder" => Ok(Self::Folder),
            other => Err(format!("Unknown asset kind: {other}")),
        }
    }
}
