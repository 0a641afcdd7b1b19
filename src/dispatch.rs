//! The dispatch engine: given an untyped pointer, a zero-indexed selector and a
//! [TypeList], reinterpret the pointer as the selected type and run an
//! operation on it.
//!
//! Tuples of up to eight types are a single `match` on the selector whose last
//! arm is the catch-all, so the final type never needs its own comparison. A
//! [Chunk] checks whether the selector falls in its first eight types and
//! otherwise hands `selector - 8` to the rest of the list. Each generated
//! `match` stays small no matter how long the list gets.
//!
//! The engine never validates the selector beyond a debug assertion: callers
//! derive it from a tag that is in range by construction.
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::list::{Chunk, TypeList};

/// An operation over a shared reference to one variant type.
///
/// Implement it generically (`impl<'a, T: Trait> Visit<'a, T> for Op`) to get
/// the effect of a generic closure over every variant in a set.
pub trait Visit<'a, T> {
    type Output;

    fn visit(self, value: &'a T) -> Self::Output;
}

/// An operation over an exclusive reference to one variant type.
pub trait VisitMut<'a, T> {
    type Output;

    fn visit_mut(self, value: &'a mut T) -> Self::Output;
}

/// Engine-facing form of an operation: it receives the typed pointer.
pub trait Apply<T> {
    type Output;

    /// # Safety
    /// `ptr` must point to a live `T` that is valid for whatever access and
    /// lifetime the implementation hands out.
    unsafe fn apply(self, ptr: NonNull<T>) -> Self::Output;
}

/// Runs a [Visit] through the engine with `&'a T` access.
pub struct Shared<'a, V>(V, PhantomData<&'a ()>);

impl<'a, V> Shared<'a, V> {
    #[inline]
    pub fn new(visitor: V) -> Self {
        Self(visitor, PhantomData)
    }
}

impl<'a, T: 'a, V: Visit<'a, T>> Apply<T> for Shared<'a, V> {
    type Output = V::Output;

    #[inline(always)]
    unsafe fn apply(self, ptr: NonNull<T>) -> Self::Output {
        self.0.visit(unsafe { ptr.as_ref() })
    }
}

/// Runs a [VisitMut] through the engine with `&'a mut T` access.
pub struct Exclusive<'a, V>(V, PhantomData<&'a mut ()>);

impl<'a, V> Exclusive<'a, V> {
    #[inline]
    pub fn new(visitor: V) -> Self {
        Self(visitor, PhantomData)
    }
}

impl<'a, T: 'a, V: VisitMut<'a, T>> Apply<T> for Exclusive<'a, V> {
    type Output = V::Output;

    #[inline(always)]
    unsafe fn apply(self, mut ptr: NonNull<T>) -> Self::Output {
        self.0.visit_mut(unsafe { ptr.as_mut() })
    }
}

/// A type list that can route `Op` to any of its members.
///
/// Implemented only when `Op` applies to every member with one shared output
/// type, so a mismatched operation is rejected at compile time.
pub trait Dispatch<Op>: TypeList {
    type Output;

    /// Applies `op` to `ptr` reinterpreted as the `index`-th type of the list.
    ///
    /// # Safety
    /// `index` must be less than [TypeList::LEN] and `ptr` must point to a live
    /// value of the `index`-th type, valid for the access `Op` performs.
    unsafe fn dispatch(op: Op, ptr: NonNull<()>, index: usize) -> Self::Output;
}

macro_rules! tuple_dispatch {
    ([$($t:ident $i:literal),*] $last:ident) => {
        impl<Op, $($t,)* $last> Dispatch<Op> for ($($t,)* $last,)
        where
            Op: Apply<$last> $(+ Apply<$t, Output = <Op as Apply<$last>>::Output>)*,
        {
            type Output = <Op as Apply<$last>>::Output;

            #[inline]
            #[allow(clippy::match_single_binding)]
            unsafe fn dispatch(op: Op, ptr: NonNull<()>, index: usize) -> Self::Output {
                debug_assert!(
                    index < <Self as TypeList>::LEN,
                    "selector {index} out of range for {} types",
                    <Self as TypeList>::LEN
                );

                unsafe {
                    match index {
                        $($i => <Op as Apply<$t>>::apply(op, ptr.cast::<$t>()),)*
                        _ => <Op as Apply<$last>>::apply(op, ptr.cast::<$last>()),
                    }
                }
            }
        }
    };
}

tuple_dispatch!([] T0);
tuple_dispatch!([T0 0] T1);
tuple_dispatch!([T0 0, T1 1] T2);
tuple_dispatch!([T0 0, T1 1, T2 2] T3);
tuple_dispatch!([T0 0, T1 1, T2 2, T3 3] T4);
tuple_dispatch!([T0 0, T1 1, T2 2, T3 3, T4 4] T5);
tuple_dispatch!([T0 0, T1 1, T2 2, T3 3, T4 4, T5 5] T6);
tuple_dispatch!([T0 0, T1 1, T2 2, T3 3, T4 4, T5 5, T6 6] T7);

impl<Op, H, R> Dispatch<Op> for Chunk<H, R>
where
    H: Dispatch<Op>,
    R: Dispatch<Op, Output = H::Output>,
{
    type Output = H::Output;

    #[inline]
    unsafe fn dispatch(op: Op, ptr: NonNull<()>, index: usize) -> Self::Output {
        unsafe {
            if index < H::LEN {
                H::dispatch(op, ptr, index)
            } else {
                R::dispatch(op, ptr, index - H::LEN)
            }
        }
    }
}
