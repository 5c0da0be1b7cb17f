use thiserror::Error;

pub type SceneResult<T> = Result<T, SceneError>;

/// Errors raised while loading a scene snapshot
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("Invalid snapshot: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Nothing selected. Please select a layer to output.")]
    EmptySelection,

    #[error("More than one layer selected. Please select a single layer to output.")]
    MultipleSelection(usize),
}
