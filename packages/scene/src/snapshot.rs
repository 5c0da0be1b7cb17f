use crate::{SceneError, SceneNode, SceneResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The host's current selection, captured as a snapshot file
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub selection: Vec<SceneNode>,
}

impl Snapshot {
    pub fn new(selection: Vec<SceneNode>) -> Self {
        Self { selection }
    }

    /// Parse a snapshot of any nesting depth. The parser grows its stack
    /// on demand instead of stopping at a fixed recursion limit.
    pub fn from_json(source: &str) -> SceneResult<Self> {
        let mut deserializer = serde_json::Deserializer::from_str(source);
        deserializer.disable_recursion_limit();
        let snapshot = Self::deserialize(serde_stacker::Deserializer::new(&mut deserializer))?;
        deserializer.end()?;
        Ok(snapshot)
    }

    pub fn load(path: &Path) -> SceneResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn to_json(&self) -> SceneResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The one selected node; exporting requires exactly one
    pub fn single(&self) -> SceneResult<&SceneNode> {
        match self.selection.as_slice() {
            [node] => Ok(node),
            [] => Err(SceneError::EmptySelection),
            nodes => Err(SceneError::MultipleSelection(nodes.len())),
        }
    }
}
