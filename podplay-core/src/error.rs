use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlayerError {
    #[error("cannot play an empty episode list")]
    EmptyQueue,
    #[error("episode index {index} out of range for a list of {len}")]
    IndexOutOfRange { index: usize, len: usize },
}
