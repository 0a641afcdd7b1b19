//! `thintag` provides word-sized references to a value whose type is one of a
//! fixed, ordered set of variant types.
//!
//! The usual way to refer to "one of several types" is a trait object, which
//! stores a vtable pointer next to every address. Here the variant is encoded
//! as a small tag in the unused high bits of the address instead, and calls
//! are routed to the concrete type by a generated `match` on that tag.
//!
//! ```
//! use thintag::{variant_set, TaggedRef, Visit};
//!
//! pub struct Circle { pub radius: f64 }
//! pub struct Square { pub side: f64 }
//!
//! variant_set! {
//!     pub Shapes = [Circle, Square];
//! }
//!
//! struct Area;
//!
//! impl<'a> Visit<'a, Circle> for Area {
//!     type Output = f64;
//!     fn visit(self, c: &'a Circle) -> f64 { std::f64::consts::PI * c.radius * c.radius }
//! }
//!
//! impl<'a> Visit<'a, Square> for Area {
//!     type Output = f64;
//!     fn visit(self, s: &'a Square) -> f64 { s.side * s.side }
//! }
//!
//! let square = Square { side: 3.0 };
//! let shape = TaggedRef::<Shapes>::new(&square);
//!
//! assert_eq!(shape.call(Area), 9.0);
//! assert!(shape.cast::<Circle>().is_none());
//! assert_eq!(std::mem::size_of_val(&shape), std::mem::size_of::<usize>());
//! ```
//!
//! # Layout
//! Tags live in the top [TAG_BITS] bits of the word, so a set holds at most
//! [MAX_VARIANTS] types. Tag 0 is reserved for the null reference.

mod macros;

pub mod dispatch;
pub mod error;
pub mod list;
pub mod tagged;
pub mod word;

pub use dispatch::{Apply, Dispatch, Exclusive, Shared, Visit, VisitMut};
pub use error::{Result, TagError};
pub use list::{AllSend, AllSync, Chunk, TypeList, Variant, VariantSet};
pub use tagged::{CallMutOutput, CallOutput, TaggedMut, TaggedRef};
pub use word::{TaggedWord, ADDRESS_MASK, MAX_TAG, MAX_VARIANTS, TAG_BITS, TAG_MASK, TAG_SHIFT};
