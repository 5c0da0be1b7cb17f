use blueprint_document::SerializeError;
use thiserror::Error;

pub type ConvertResult<T> = Result<T, ConvertError>;

/// Reasons a selection produces no blueprint at all.
///
/// Nodes that individually have nothing to export are skipped, never reported
/// here.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Selected layer '{0}' is hidden")]
    HiddenRoot(String),

    #[error("Selected layer '{0}' does not render anything")]
    MissingRenderBounds(String),

    #[error("Nothing to export in the selected layer")]
    NothingToExport,

    #[error(transparent)]
    Serialize(#[from] SerializeError),
}
