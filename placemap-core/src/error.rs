use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("The places are not loaded yet")]
    NotLoaded,
    #[error("Unknown place '{0}'")]
    UnknownPlace(String),
}
