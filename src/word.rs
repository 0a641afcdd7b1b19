//! The packed representation behind every tagged reference.
//!
//! A [TaggedWord] is a single pointer whose high bits hold a small tag:
//!
//! ```text
//! ┌───────┬───────────────────────────────────────────────────┐
//! │  tag  │                     address                       │
//! │(5 bit)│                     (59 bit)                      │
//! └───────┴───────────────────────────────────────────────────┘
//! ```
//!
//! Mainstream 64-bit platforms never hand out addresses that reach bit 59, so
//! the tag can live there without losing any information about the address.
use std::fmt::{self, Debug};
use std::hash::{Hash, Hasher};
use std::ptr;

use crate::error::{Result, TagError};

/// Number of high bits reserved for the tag.
pub const TAG_BITS: u32 = 5;

/// Position of the least significant tag bit.
pub const TAG_SHIFT: u32 = usize::BITS - TAG_BITS;

/// Bits of a word that belong to the address.
pub const ADDRESS_MASK: usize = (1 << TAG_SHIFT) - 1;

/// Bits of a word that belong to the tag.
pub const TAG_MASK: usize = !ADDRESS_MASK;

/// The largest tag the reserved bits can hold.
pub const MAX_TAG: u8 = (1 << TAG_BITS) - 1;

/// Tag 0 is null, so a set can declare at most this many variants.
pub const MAX_VARIANTS: usize = MAX_TAG as usize;

const _: () = assert!(
    usize::BITS >= 64,
    "tagged words need at least 64-bit pointers"
);
const _: () = assert!(TAG_SHIFT == 59);
const _: () = assert!(std::mem::size_of::<TaggedWord>() == std::mem::size_of::<usize>());

/// An address and a tag packed into one machine word.
///
/// Equality and hashing look at the full bit pattern, so two words with the
/// same address but different tags are different words.
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct TaggedWord {
    ptr: *mut (),
}

impl TaggedWord {
    /// The null word: tag 0, address 0.
    pub const NULL: Self = Self {
        ptr: ptr::null_mut(),
    };

    /// Packs `ptr` with `tag`.
    ///
    /// The pointer must come from a live reference (so its address leaves the
    /// tag bits clear) and `tag` must not exceed [MAX_TAG]. Both are checked in
    /// debug builds only; use [TaggedWord::from_raw_parts] for arbitrary input.
    #[inline]
    pub fn encode<T>(ptr: *const T, tag: u8) -> Self {
        debug_assert!(
            ptr.addr() & TAG_MASK == 0,
            "address {:#x} overlaps the tag bits",
            ptr.addr()
        );
        debug_assert!(tag <= MAX_TAG, "tag {tag} exceeds {MAX_TAG}");

        Self {
            ptr: ptr
                .cast_mut()
                .cast::<()>()
                .map_addr(|addr| addr | ((tag as usize) << TAG_SHIFT)),
        }
    }

    /// Packs `address` with `tag`, rejecting inputs that would not decode back
    /// to the same pair.
    pub fn from_raw_parts(address: *const (), tag: u8) -> Result<Self> {
        if address.addr() & TAG_MASK != 0 {
            return Err(TagError::AddressOverflow(address.addr()));
        }

        if tag > MAX_TAG {
            return Err(TagError::TagOverflow(tag));
        }

        Ok(Self::encode(address, tag))
    }

    /// Rebuilds a word from its bit pattern.
    ///
    /// The result carries no provenance: it compares and decodes like the
    /// original, but its address must not be dereferenced.
    #[inline]
    pub const fn from_bits(bits: usize) -> Self {
        Self {
            ptr: ptr::without_provenance_mut(bits),
        }
    }

    /// The raw bit pattern, tag included.
    #[inline]
    pub fn to_bits(self) -> usize {
        self.ptr.addr()
    }

    #[inline]
    pub fn tag(self) -> u8 {
        (self.ptr.addr() >> TAG_SHIFT) as u8
    }

    /// The address with the tag bits cleared.
    #[inline]
    pub fn address(self) -> *mut () {
        self.ptr.map_addr(|addr| addr & ADDRESS_MASK)
    }

    /// `true` when the word holds no value (tag 0).
    #[inline]
    pub fn is_null(self) -> bool {
        self.tag() == 0
    }
}

impl Default for TaggedWord {
    fn default() -> Self {
        Self::NULL
    }
}

impl PartialEq for TaggedWord {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.to_bits() == other.to_bits()
    }
}

impl Eq for TaggedWord {}

impl Hash for TaggedWord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_bits().hash(state);
    }
}

impl Debug for TaggedWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaggedWord")
            .field("tag", &self.tag())
            .field("address", &self.address())
            .finish()
    }
}
