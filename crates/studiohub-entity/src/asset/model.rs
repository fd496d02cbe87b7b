//! Asset node entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::id::AssetId;
use super::kind::AssetKind;

/// A file or folder reference attached to a project.
///
/// `parent` is the canonical form: `None` always means "root". Records that
/// come from storage go through [`AssetRecord`] and the engine's normalizer
/// before they become `AssetNode`s.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetNode {
    /// Unique asset identifier.
    pub id: AssetId,
    /// Display label.
    pub name: String,
    /// File or folder.
    pub kind: AssetKind,
    /// Parent asset (null for roots).
    #[serde(default)]
    pub parent: Option<AssetId>,
    /// Link into the external storage provider. Not interpreted.
    #[serde(default)]
    pub external_link: String,
    /// Attached preview resources, passed through unchanged.
    #[serde(default)]
    pub previews: Vec<Value>,
    /// When the asset reference was created.
    pub created_at: DateTime<Utc>,
}

impl AssetNode {
    /// Create a new root asset with a fresh identifier.
    pub fn new(kind: AssetKind, name: impl Into<String>) -> Self {
        Self {
            id: AssetId::new(),
            name: name.into(),
            kind,
            parent: None,
            external_link: String::new(),
            previews: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Create a new root folder.
    pub fn folder(name: impl Into<String>) -> Self {
        Self::new(AssetKind::Folder, name)
    }

    /// Create a new root file.
    pub fn file(name: impl Into<String>) -> Self {
        Self::new(AssetKind::File, name)
    }

    /// Replace the identifier.
    pub fn with_id(mut self, id: impl Into<AssetId>) -> Self {
        self.id = id.into();
        self
    }

    /// Set the parent reference.
    pub fn with_parent(mut self, parent: Option<AssetId>) -> Self {
        self.parent = parent;
        self
    }

    /// Set the external link.
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.external_link = link.into();
        self
    }

    /// Check if this is a root asset (no parent).
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Check if this asset may hold children.
    pub fn is_folder(&self) -> bool {
        self.kind.is_folder()
    }

    /// Check whether this asset's parent is `parent`.
    pub fn is_child_of(&self, parent: &str) -> bool {
        self.parent.as_ref().is_some_and(|p| p.as_str() == parent)
    }
}

/// An asset record as persisted, possibly predating the hierarchy feature.
///
/// `parent` keeps the difference between a missing field (`None`) and an
/// explicit `null` (`Some(None)`). Only the normalizer looks at that
/// difference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetRecord {
    /// Asset identifier.
    pub id: AssetId,
    /// Display label.
    pub name: String,
    /// File or folder.
    pub kind: AssetKind,
    /// Raw parent field.
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub parent: Option<Option<String>>,
    /// Link into the external storage provider.
    #[serde(default)]
    pub external_link: String,
    /// Attached preview resources.
    #[serde(default)]
    pub previews: Vec<Value>,
    /// When the asset reference was created.
    pub created_at: DateTime<Utc>,
}

impl AssetRecord {
    /// Check whether the record was stored before parents existed.
    pub fn is_legacy(&self) -> bool {
        self.parent.is_none()
    }
}

impl From<AssetNode> for AssetRecord {
    fn from(node: AssetNode) -> Self {
        Self {
            id: node.id,
            name: node.name,
            kind: node.kind,
            parent: Some(node.parent.map(String::from)),
            external_link: node.external_link,
            previews: node.previews,
            created_at: node.created_at,
        }
    }
}

/// Maps a present field (including `null`) to `Some(..)`; absent fields hit
/// `#[serde(default)]` and stay `None`.
fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}
