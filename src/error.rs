/// Errors raised while packing or validating tagged words.
use thiserror::Error;

use crate::word::MAX_TAG;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagError {
    #[error("address {0:#x} overlaps the reserved tag bits")]
    AddressOverflow(usize),

    #[error("tag {0} does not fit in the reserved tag bits (max {max})", max = MAX_TAG)]
    TagOverflow(u8),

    #[error("tag {tag} is out of range for a set of {len} variants")]
    TagOutOfRange { tag: u8, len: usize },
}

pub type Result<T, E = TagError> = std::result::Result<T, E>;
