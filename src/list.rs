//! Ordered, closed lists of variant types.
//!
//! A list is a tuple of up to eight types. Longer lists are chained with
//! [Chunk], eight types per link, which is what [crate::variant_list] expands
//! to. The dispatch engine walks the same shape.
use std::marker::PhantomData;

/// A compile-time list of types.
pub trait TypeList {
    /// Number of types in the list.
    const LEN: usize;
}

/// Eight types from `H` followed by the rest of the list in `R`.
///
/// Never constructed; it only exists at the type level.
pub struct Chunk<H, R>(PhantomData<fn() -> (H, R)>);

impl<H: TypeList, R: TypeList> TypeList for Chunk<H, R> {
    const LEN: usize = H::LEN + R::LEN;
}

/// Every type in the list is [Send].
///
/// # Safety
/// Only implement for lists whose members are all `Send`.
pub unsafe trait AllSend: TypeList {}

/// Every type in the list is [Sync].
///
/// # Safety
/// Only implement for lists whose members are all `Sync`.
pub unsafe trait AllSync: TypeList {}

unsafe impl<H: AllSend, R: AllSend> AllSend for Chunk<H, R> {}
unsafe impl<H: AllSync, R: AllSync> AllSync for Chunk<H, R> {}

macro_rules! tuple_list {
    ($len:literal; $($t:ident),+) => {
        impl<$($t),+> TypeList for ($($t,)+) {
            const LEN: usize = $len;
        }

        unsafe impl<$($t: Send),+> AllSend for ($($t,)+) {}
        unsafe impl<$($t: Sync),+> AllSync for ($($t,)+) {}
    };
}

tuple_list!(1; T0);
tuple_list!(2; T0, T1);
tuple_list!(3; T0, T1, T2);
tuple_list!(4; T0, T1, T2, T3);
tuple_list!(5; T0, T1, T2, T3, T4);
tuple_list!(6; T0, T1, T2, T3, T4, T5);
tuple_list!(7; T0, T1, T2, T3, T4, T5, T6);
tuple_list!(8; T0, T1, T2, T3, T4, T5, T6, T7);

/// A closed, ordered set of variant types.
///
/// Usually declared with [crate::variant_set], which also implements
/// [Variant] for each member.
///
/// # Safety
/// The type at zero-indexed position `k` of `Types` must be exactly the type
/// whose [Variant::TAG] is `k + 1`, and `Types::LEN` must not exceed
/// [crate::MAX_VARIANTS].
pub unsafe trait VariantSet {
    type Types: TypeList;

    /// Number of variants, which is also the highest tag in use.
    const LEN: usize = <Self::Types as TypeList>::LEN;
}

/// Membership of `Self` in the variant set `S`.
///
/// # Safety
/// `TAG` must be the one-indexed position of `Self` in `S::Types`. Tagged
/// references trust it when they reinterpret their address.
pub unsafe trait Variant<S: VariantSet>: Sized {
    const TAG: u8;
}
