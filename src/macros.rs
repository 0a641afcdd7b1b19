/// Builds the chunked [TypeList](crate::TypeList) type for an ordered list of
/// types: up to eight types become a tuple, longer lists become a
/// [Chunk](crate::Chunk) of the first eight followed by the rest.
#[macro_export]
macro_rules! variant_list {
    ($t0:ty, $t1:ty, $t2:ty, $t3:ty, $t4:ty, $t5:ty, $t6:ty, $t7:ty, $($rest:ty),+) => {
        $crate::Chunk<($t0, $t1, $t2, $t3, $t4, $t5, $t6, $t7), $crate::variant_list!($($rest),+)>
    };
    ($($t:ty),+) => {
        ($($t,)+)
    };
}

/// Declares a closed, ordered variant set.
///
/// ```
/// pub struct Circle { pub radius: f64 }
/// pub struct Square { pub side: f64 }
///
/// thintag::variant_set! {
///     /// Everything a shape reference can point at.
///     pub ShapeKind = [Circle, Square];
/// }
///
/// let circle = Circle { radius: 1.0 };
/// let shape = thintag::TaggedRef::<ShapeKind>::new(&circle);
/// assert_eq!(shape.tag(), 1);
/// assert!(shape.holds::<Circle>());
/// ```
///
/// Each listed type gets a tag equal to its one-indexed position. Listing a
/// type twice or listing more than [MAX_VARIANTS](crate::MAX_VARIANTS) types
/// fails to compile.
///
/// ```compile_fail,E0119
/// struct Meters(f64);
/// struct Feet(f64);
///
/// thintag::variant_set! {
///     Length = [Meters, Feet, Meters];
/// }
/// ```
///
/// ```compile_fail,E0080
/// macro_rules! units {
///     ($($name:ident),+) => { $(pub struct $name;)+ };
/// }
///
/// units!(
///     U0, U1, U2, U3, U4, U5, U6, U7, U8, U9, U10, U11, U12, U13, U14, U15,
///     U16, U17, U18, U19, U20, U21, U22, U23, U24, U25, U26, U27, U28, U29, U30, U31
/// );
///
/// thintag::variant_set! {
///     Units = [
///         U0, U1, U2, U3, U4, U5, U6, U7, U8, U9, U10, U11, U12, U13, U14, U15,
///         U16, U17, U18, U19, U20, U21, U22, U23, U24, U25, U26, U27, U28, U29, U30, U31
///     ];
/// }
/// ```
#[macro_export]
macro_rules! variant_set {
    ($(#[$meta:meta])* $vis:vis $name:ident = [$($t:ty),+ $(,)?];) => {
        $(#[$meta])*
        $vis enum $name {}

        unsafe impl $crate::VariantSet for $name {
            type Types = $crate::variant_list!($($t),+);
        }

        const _: () = assert!(
            <$name as $crate::VariantSet>::LEN <= $crate::MAX_VARIANTS,
            "too many variants for the reserved tag bits"
        );

        $crate::__variant_tags!($name; 1; $($t),+);
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __variant_tags {
    ($set:ty; $tag:expr; $head:ty) => {
        unsafe impl $crate::Variant<$set> for $head {
            const TAG: u8 = $tag;
        }
    };
    ($set:ty; $tag:expr; $head:ty, $($rest:ty),+) => {
        unsafe impl $crate::Variant<$set> for $head {
            const TAG: u8 = $tag;
        }

        $crate::__variant_tags!($set; $tag + 1; $($rest),+);
    };
}
