//! Error types and result alias for the crate.
use thiserror::Error;

use crate::dom::ElementId;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown element {0:?}")]
    UnknownElement(ElementId),
}
