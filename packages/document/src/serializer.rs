use crate::Blueprint;
use serde::ser::Error as _;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SerializeError {
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Encode a blueprint as JSON indented with one tab per level
pub fn to_json(blueprint: &Blueprint) -> Result<String, SerializeError> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"\t");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    blueprint.serialize(&mut serializer)?;
    String::from_utf8(buffer).map_err(|err| serde_json::Error::custom(err).into())
}
