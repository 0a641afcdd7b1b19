//! Word-sized references to one value out of a closed [VariantSet].
//!
//! [TaggedRef] behaves like `&'a T` and [TaggedMut] like `&'a mut T`, except
//! that `T` is chosen at runtime among the members of the set. The tag picks
//! the member, so neither type needs a vtable pointer next to the address.
use std::fmt::{self, Debug};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ptr::{self, NonNull};

use crate::dispatch::{Dispatch, Exclusive, Shared};
use crate::error::{Result, TagError};
use crate::list::{AllSend, AllSync, VariantSet};
use crate::word::TaggedWord;
use crate::Variant;

/// What [TaggedRef::call] returns for the visitor `V`.
pub type CallOutput<'a, S, V> = <<S as VariantSet>::Types as Dispatch<Shared<'a, V>>>::Output;

/// What [TaggedMut::call_mut] returns for the visitor `V`.
pub type CallMutOutput<'a, S, V> =
    <<S as VariantSet>::Types as Dispatch<Exclusive<'a, V>>>::Output;

/// Checks the tag of a word against the set before it is trusted.
fn check_tag<S: VariantSet>(word: TaggedWord) -> Result<TaggedWord> {
    let tag = word.tag();

    if tag as usize > S::LEN {
        return Err(TagError::TagOutOfRange { tag, len: S::LEN });
    }

    Ok(word)
}

/// Address of a non-null word as the dispatch engine wants it.
#[inline]
unsafe fn erased(word: TaggedWord) -> NonNull<()> {
    debug_assert!(!word.address().is_null());
    unsafe { NonNull::new_unchecked(word.address()) }
}

/// A shared, non-owning reference to a value of one of the types in `S`.
///
/// Copying is free and the referenced value is never dropped through it.
#[repr(transparent)]
pub struct TaggedRef<'a, S: VariantSet> {
    word: TaggedWord,
    marker: PhantomData<(&'a (), fn() -> S)>,
}

impl<'a, S: VariantSet> TaggedRef<'a, S> {
    /// A reference that holds nothing (tag 0).
    #[inline]
    pub const fn null() -> Self {
        Self {
            word: TaggedWord::NULL,
            marker: PhantomData,
        }
    }

    /// Refers to `value`, tagged with the position of `T` in the set.
    ///
    /// A type outside the set has no tag:
    ///
    /// ```compile_fail,E0277
    /// struct Meters(f64);
    /// struct Feet(f64);
    /// struct Inches(f64);
    ///
    /// thintag::variant_set! {
    ///     Length = [Meters, Feet];
    /// }
    ///
    /// let inches = Inches(3.0);
    /// let _ = thintag::TaggedRef::<Length>::new(&inches);
    /// ```
    #[inline]
    pub fn new<T: Variant<S>>(value: &'a T) -> Self {
        Self {
            word: TaggedWord::encode(ptr::from_ref(value), T::TAG),
            marker: PhantomData,
        }
    }

    /// Rebuilds a reference from a word produced by [TaggedRef::word].
    ///
    /// Tags outside the set are rejected; nothing else can be checked.
    ///
    /// # Safety
    /// Unless the word is null, its address must point to a live value of the
    /// type its tag selects, borrowed for `'a`.
    pub unsafe fn from_word(word: TaggedWord) -> Result<Self> {
        Ok(Self {
            word: check_tag::<S>(word)?,
            marker: PhantomData,
        })
    }

    /// Number of types this reference can point at.
    #[inline]
    pub const fn num_variants() -> usize {
        S::LEN
    }

    /// The tag a reference to `T` carries.
    #[inline]
    pub const fn tag_of<T: Variant<S>>() -> u8 {
        T::TAG
    }

    #[inline]
    pub fn word(self) -> TaggedWord {
        self.word
    }

    /// Current tag: 0 when null, otherwise the position of the held type.
    #[inline]
    pub fn tag(self) -> u8 {
        self.word.tag()
    }

    #[inline]
    pub fn is_null(self) -> bool {
        self.word.is_null()
    }

    /// The referenced address with the tag stripped.
    #[inline]
    pub fn address(self) -> *const () {
        self.word.address().cast_const()
    }

    /// `true` iff the reference currently points at a `T`.
    #[inline]
    pub fn holds<T: Variant<S>>(self) -> bool {
        self.tag() == T::TAG
    }

    /// The referenced value as a `T`, or `None` if it is something else.
    #[inline]
    pub fn cast<T: Variant<S>>(self) -> Option<&'a T> {
        if self.holds::<T>() {
            Some(unsafe { self.cast_unchecked() })
        } else {
            None
        }
    }

    /// The referenced value as a `T` without looking at the tag.
    ///
    /// # Safety
    /// The reference must hold a `T`, i.e. `self.holds::<T>()`.
    #[inline]
    pub unsafe fn cast_unchecked<T: Variant<S>>(self) -> &'a T {
        debug_assert!(self.holds::<T>(), "tag {} does not hold tag {}", self.tag(), T::TAG);
        unsafe { &*self.word.address().cast::<T>() }
    }

    /// Runs `visitor` on the referenced value at its concrete type.
    ///
    /// # Panics
    /// Panics if the reference is null. Use [TaggedRef::try_call] when null is
    /// a legitimate state.
    ///
    /// The visitor must produce one output type for every variant:
    ///
    /// ```compile_fail
    /// use thintag::{TaggedRef, Visit};
    ///
    /// struct Meters(f64);
    /// struct Count(u32);
    ///
    /// thintag::variant_set! {
    ///     Reading = [Meters, Count];
    /// }
    ///
    /// struct Raw;
    ///
    /// impl<'a> Visit<'a, Meters> for Raw {
    ///     type Output = u64;
    ///     fn visit(self, m: &'a Meters) -> u64 { m.0 as u64 }
    /// }
    ///
    /// impl<'a> Visit<'a, Count> for Raw {
    ///     type Output = u32;
    ///     fn visit(self, c: &'a Count) -> u32 { c.0 }
    /// }
    ///
    /// let count = Count(4);
    /// let _ = TaggedRef::<Reading>::new(&count).call(Raw);
    /// ```
    #[inline]
    pub fn call<V>(self, visitor: V) -> CallOutput<'a, S, V>
    where
        S::Types: Dispatch<Shared<'a, V>>,
    {
        assert!(!self.is_null(), "called a null tagged reference");
        unsafe { self.call_unchecked(visitor) }
    }

    /// Like [TaggedRef::call], returning `None` for a null reference.
    #[inline]
    pub fn try_call<V>(self, visitor: V) -> Option<CallOutput<'a, S, V>>
    where
        S::Types: Dispatch<Shared<'a, V>>,
    {
        if self.is_null() {
            return None;
        }

        Some(unsafe { self.call_unchecked(visitor) })
    }

    /// Runs `visitor` without checking for null.
    ///
    /// # Safety
    /// The reference must not be null.
    #[inline]
    pub unsafe fn call_unchecked<V>(self, visitor: V) -> CallOutput<'a, S, V>
    where
        S::Types: Dispatch<Shared<'a, V>>,
    {
        debug_assert!(!self.is_null(), "called a null tagged reference");
        let index = self.tag() as usize - 1;
        unsafe {
            <S::Types as Dispatch<Shared<'a, V>>>::dispatch(
                Shared::new(visitor),
                erased(self.word),
                index,
            )
        }
    }
}

impl<'a, S: VariantSet> Clone for TaggedRef<'a, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, S: VariantSet> Copy for TaggedRef<'a, S> {}

impl<'a, S: VariantSet> Default for TaggedRef<'a, S> {
    fn default() -> Self {
        Self::null()
    }
}

impl<'a, S: VariantSet, T: Variant<S>> From<&'a T> for TaggedRef<'a, S> {
    fn from(value: &'a T) -> Self {
        Self::new(value)
    }
}

impl<'a, S: VariantSet> PartialEq for TaggedRef<'a, S> {
    fn eq(&self, other: &Self) -> bool {
        self.word == other.word
    }
}

impl<'a, S: VariantSet> Eq for TaggedRef<'a, S> {}

impl<'a, S: VariantSet> Hash for TaggedRef<'a, S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.word.hash(state);
    }
}

impl<'a, S: VariantSet> Debug for TaggedRef<'a, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaggedRef")
            .field("tag", &self.tag())
            .field("address", &self.address())
            .finish()
    }
}

// Same rules as `&T`.
unsafe impl<'a, S: VariantSet> Send for TaggedRef<'a, S> where S::Types: AllSync {}
unsafe impl<'a, S: VariantSet> Sync for TaggedRef<'a, S> where S::Types: AllSync {}

/// An exclusive, non-owning reference to a value of one of the types in `S`.
#[repr(transparent)]
pub struct TaggedMut<'a, S: VariantSet> {
    word: TaggedWord,
    marker: PhantomData<(&'a mut (), fn() -> S)>,
}

impl<'a, S: VariantSet> TaggedMut<'a, S> {
    #[inline]
    pub const fn null() -> Self {
        Self {
            word: TaggedWord::NULL,
            marker: PhantomData,
        }
    }

    #[inline]
    pub fn new<T: Variant<S>>(value: &'a mut T) -> Self {
        Self {
            word: TaggedWord::encode(ptr::from_mut(value).cast_const(), T::TAG),
            marker: PhantomData,
        }
    }

    /// Rebuilds an exclusive reference from a word.
    ///
    /// # Safety
    /// Unless the word is null, its address must point to a live value of the
    /// type its tag selects, exclusively borrowed for `'a`.
    pub unsafe fn from_word(word: TaggedWord) -> Result<Self> {
        Ok(Self {
            word: check_tag::<S>(word)?,
            marker: PhantomData,
        })
    }

    #[inline]
    pub const fn num_variants() -> usize {
        S::LEN
    }

    #[inline]
    pub const fn tag_of<T: Variant<S>>() -> u8 {
        T::TAG
    }

    #[inline]
    pub fn word(&self) -> TaggedWord {
        self.word
    }

    #[inline]
    pub fn tag(&self) -> u8 {
        self.word.tag()
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        self.word.is_null()
    }

    #[inline]
    pub fn address(&self) -> *const () {
        self.word.address().cast_const()
    }

    #[inline]
    pub fn address_mut(&mut self) -> *mut () {
        self.word.address()
    }

    #[inline]
    pub fn holds<T: Variant<S>>(&self) -> bool {
        self.tag() == T::TAG
    }

    /// A shared view of the same value.
    #[inline]
    pub fn as_shared(&self) -> TaggedRef<'_, S> {
        TaggedRef {
            word: self.word,
            marker: PhantomData,
        }
    }

    /// A shorter exclusive borrow, leaving `self` usable afterwards.
    #[inline]
    pub fn reborrow(&mut self) -> TaggedMut<'_, S> {
        TaggedMut {
            word: self.word,
            marker: PhantomData,
        }
    }

    #[inline]
    pub fn cast<T: Variant<S>>(&self) -> Option<&T> {
        self.as_shared().cast()
    }

    #[inline]
    pub fn cast_mut<T: Variant<S>>(&mut self) -> Option<&mut T> {
        self.reborrow().into_mut()
    }

    /// Converts into a `&'a mut T`, or `None` if the value is something else.
    #[inline]
    pub fn into_mut<T: Variant<S>>(self) -> Option<&'a mut T> {
        if self.holds::<T>() {
            Some(unsafe { self.into_mut_unchecked() })
        } else {
            None
        }
    }

    /// # Safety
    /// The reference must hold a `T`.
    #[inline]
    pub unsafe fn cast_unchecked<T: Variant<S>>(&self) -> &T {
        unsafe { self.as_shared().cast_unchecked() }
    }

    /// # Safety
    /// The reference must hold a `T`.
    #[inline]
    pub unsafe fn cast_unchecked_mut<T: Variant<S>>(&mut self) -> &mut T {
        unsafe { self.reborrow().into_mut_unchecked() }
    }

    unsafe fn into_mut_unchecked<T: Variant<S>>(self) -> &'a mut T {
        debug_assert!(self.holds::<T>(), "tag {} does not hold tag {}", self.tag(), T::TAG);
        unsafe { &mut *self.word.address().cast::<T>() }
    }

    /// Runs `visitor` on a shared borrow of the value.
    ///
    /// # Panics
    /// Panics if the reference is null.
    #[inline]
    pub fn call<'b, V>(&'b self, visitor: V) -> CallOutput<'b, S, V>
    where
        S::Types: Dispatch<Shared<'b, V>>,
    {
        self.as_shared().call(visitor)
    }

    /// Runs `visitor` on an exclusive borrow of the value.
    ///
    /// # Panics
    /// Panics if the reference is null.
    #[inline]
    pub fn call_mut<'b, V>(&'b mut self, visitor: V) -> CallMutOutput<'b, S, V>
    where
        S::Types: Dispatch<Exclusive<'b, V>>,
    {
        self.reborrow().into_call(visitor)
    }

    /// Like [TaggedMut::call_mut], consuming the reference so the output can
    /// borrow for all of `'a`.
    #[inline]
    pub fn into_call<V>(self, visitor: V) -> CallMutOutput<'a, S, V>
    where
        S::Types: Dispatch<Exclusive<'a, V>>,
    {
        assert!(!self.is_null(), "called a null tagged reference");
        unsafe { self.into_call_unchecked(visitor) }
    }

    /// Runs `visitor` on an exclusive borrow without checking for null.
    ///
    /// # Safety
    /// The reference must not be null.
    #[inline]
    pub unsafe fn call_mut_unchecked<'b, V>(&'b mut self, visitor: V) -> CallMutOutput<'b, S, V>
    where
        S::Types: Dispatch<Exclusive<'b, V>>,
    {
        unsafe { self.reborrow().into_call_unchecked(visitor) }
    }

    unsafe fn into_call_unchecked<V>(self, visitor: V) -> CallMutOutput<'a, S, V>
    where
        S::Types: Dispatch<Exclusive<'a, V>>,
    {
        debug_assert!(!self.is_null(), "called a null tagged reference");
        let index = self.tag() as usize - 1;
        unsafe {
            <S::Types as Dispatch<Exclusive<'a, V>>>::dispatch(
                Exclusive::new(visitor),
                erased(self.word),
                index,
            )
        }
    }

    /// Like [TaggedMut::call_mut], returning `None` for a null reference.
    #[inline]
    pub fn try_call_mut<'b, V>(&'b mut self, visitor: V) -> Option<CallMutOutput<'b, S, V>>
    where
        S::Types: Dispatch<Exclusive<'b, V>>,
    {
        if self.is_null() {
            return None;
        }

        Some(self.call_mut(visitor))
    }
}

impl<'a, S: VariantSet> Default for TaggedMut<'a, S> {
    fn default() -> Self {
        Self::null()
    }
}

impl<'a, S: VariantSet, T: Variant<S>> From<&'a mut T> for TaggedMut<'a, S> {
    fn from(value: &'a mut T) -> Self {
        Self::new(value)
    }
}

impl<'a, S: VariantSet> PartialEq for TaggedMut<'a, S> {
    fn eq(&self, other: &Self) -> bool {
        self.word == other.word
    }
}

impl<'a, S: VariantSet> Eq for TaggedMut<'a, S> {}

impl<'a, S: VariantSet> Hash for TaggedMut<'a, S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.word.hash(state);
    }
}

impl<'a, S: VariantSet> Debug for TaggedMut<'a, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaggedMut")
            .field("tag", &self.tag())
            .field("address", &self.address())
            .finish()
    }
}

// Same rules as `&mut T`.
unsafe impl<'a, S: VariantSet> Send for TaggedMut<'a, S> where S::Types: AllSend {}
unsafe impl<'a, S: VariantSet> Sync for TaggedMut<'a, S> where S::Types: AllSync {}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::{Visit, VisitMut};

    #[derive(Debug, PartialEq)]
    struct Meters(f64);

    #[derive(Debug, PartialEq)]
    struct Label(&'static str);

    #[derive(Debug, PartialEq)]
    struct Count(u32);

    crate::variant_set! {
        Unit = [Meters, Label, Count];
    }

    trait Render {
        fn render(&self) -> String;
        fn bump(&mut self);
    }

    impl Render for Meters {
        fn render(&self) -> String {
            format!("{}m", self.0)
        }

        fn bump(&mut self) {
            self.0 += 1.0;
        }
    }

    impl Render for Label {
        fn render(&self) -> String {
            self.0.to_string()
        }

        fn bump(&mut self) {}
    }

    impl Render for Count {
        fn render(&self) -> String {
            format!("x{}", self.0)
        }

        fn bump(&mut self) {
            self.0 += 1;
        }
    }

    struct Rendered;

    impl<'a, T: Render> Visit<'a, T> for Rendered {
        type Output = String;

        fn visit(self, value: &'a T) -> String {
            value.render()
        }
    }

    struct AsRender;

    impl<'a, T: Render + 'a> Visit<'a, T> for AsRender {
        type Output = &'a dyn Render;

        fn visit(self, value: &'a T) -> &'a dyn Render {
            value
        }
    }

    struct Bump;

    impl<'a, T: Render> VisitMut<'a, T> for Bump {
        type Output = ();

        fn visit_mut(self, value: &'a mut T) {
            value.bump();
        }
    }

    struct AsRenderMut;

    impl<'a, T: Render + 'a> VisitMut<'a, T> for AsRenderMut {
        type Output = &'a mut dyn Render;

        fn visit_mut(self, value: &'a mut T) -> &'a mut dyn Render {
            value
        }
    }

    #[test]
    fn tags_follow_declaration_order() {
        assert_eq!(TaggedRef::<Unit>::num_variants(), 3);
        assert_eq!(TaggedRef::<Unit>::tag_of::<Meters>(), 1);
        assert_eq!(TaggedRef::<Unit>::tag_of::<Label>(), 2);
        assert_eq!(TaggedRef::<Unit>::tag_of::<Count>(), 3);
    }

    #[test]
    fn cast_round_trips_every_variant() {
        let meters = Meters(2.5);
        let label = Label("north");
        let count = Count(7);

        let a = TaggedRef::<Unit>::new(&meters);
        let b = TaggedRef::<Unit>::new(&label);
        let c = TaggedRef::<Unit>::new(&count);

        assert!(a.holds::<Meters>());
        assert!(b.holds::<Label>());
        assert!(c.holds::<Count>());

        assert!(std::ptr::eq(a.cast::<Meters>().unwrap(), &meters));
        assert!(std::ptr::eq(b.cast::<Label>().unwrap(), &label));
        assert!(std::ptr::eq(c.cast::<Count>().unwrap(), &count));
        assert_eq!(a.address(), &meters as *const Meters as *const ());
    }

    #[test]
    fn cast_to_another_variant_is_none() {
        let meters = Meters(1.0);
        let tagged = TaggedRef::<Unit>::from(&meters);

        assert!(!tagged.holds::<Label>());
        assert_eq!(tagged.cast::<Label>(), None);
        assert_eq!(tagged.cast::<Count>(), None);
    }

    #[test]
    fn null_is_the_default() {
        let null = TaggedRef::<Unit>::default();

        assert_eq!(null.tag(), 0);
        assert!(null.is_null());
        assert!(null.address().is_null());
        assert_eq!(null, TaggedRef::null());
        assert_eq!(null.cast::<Meters>(), None);
        assert_eq!(null.try_call(Rendered), None);
    }

    #[test]
    #[should_panic(expected = "called a null tagged reference")]
    fn call_on_null_panics() {
        TaggedRef::<Unit>::null().call(Rendered);
    }

    #[test]
    fn equality_is_tag_and_address() {
        let first = Count(1);
        let second = Count(1);

        let a = TaggedRef::<Unit>::new(&first);
        let b = a;
        let c = TaggedRef::<Unit>::new(&second);

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a == c, a.tag() == c.tag() && a.address() == c.address());

        let set: HashSet<_> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn same_address_with_another_tag_is_a_different_reference() {
        let count = Count(3);
        let real = TaggedRef::<Unit>::new(&count);

        let forged = TaggedWord::from_raw_parts(real.address(), 1).unwrap();
        let forged = unsafe { TaggedRef::<Unit>::from_word(forged) }.unwrap();

        assert_eq!(forged.address(), real.address());
        assert_ne!(forged, real);
    }

    #[test]
    fn from_word_rejects_tags_outside_the_set() {
        let word = TaggedWord::from_raw_parts(std::ptr::null(), 4).unwrap();

        assert_eq!(
            unsafe { TaggedRef::<Unit>::from_word(word) },
            Err(TagError::TagOutOfRange { tag: 4, len: 3 })
        );
    }

    #[test]
    fn word_round_trips() {
        let label = Label("east");
        let tagged = TaggedRef::<Unit>::new(&label);

        let back = unsafe { TaggedRef::<Unit>::from_word(tagged.word()) }.unwrap();

        assert_eq!(back, tagged);
        assert_eq!(back.call(Rendered), "east");
    }

    #[test]
    fn call_reaches_the_concrete_type() {
        let meters = Meters(4.0);
        let label = Label("west");
        let count = Count(9);

        let rendered: Vec<String> = [
            TaggedRef::<Unit>::new(&meters),
            TaggedRef::new(&label),
            TaggedRef::new(&count),
        ]
        .into_iter()
        .map(|tagged| tagged.call(Rendered))
        .collect();

        assert_eq!(rendered, ["4m", "west", "x9"]);
    }

    #[test]
    fn call_can_return_a_borrow_of_the_value() {
        let count = Count(5);

        let borrowed = {
            let tagged = TaggedRef::<Unit>::new(&count);
            tagged.call(AsRender)
        };

        assert_eq!(borrowed.render(), "x5");
    }

    #[test]
    fn tagged_mut_updates_in_place() {
        let mut meters = Meters(1.0);
        let mut count = Count(1);

        {
            let mut tagged = TaggedMut::<Unit>::new(&mut meters);
            tagged.call_mut(Bump);
            tagged.call_mut(Bump);
            assert_eq!(tagged.call(Rendered), "3m");

            tagged.cast_mut::<Meters>().unwrap().0 = 10.0;
            assert!(tagged.cast_mut::<Count>().is_none());
        }

        let render = TaggedMut::<Unit>::new(&mut count).into_call(AsRenderMut);
        render.bump();

        assert_eq!(meters, Meters(10.0));
        assert_eq!(count, Count(2));
    }

    #[test]
    fn tagged_mut_converts_to_a_shared_view() {
        let mut label = Label("south");
        let mut tagged = TaggedMut::<Unit>::from(&mut label);

        let shared = tagged.as_shared();
        assert_eq!(shared.tag(), 2);
        assert_eq!(shared.address(), tagged.address());

        let inner = tagged.reborrow().into_mut::<Label>().unwrap();
        inner.0 = "north";
        assert_eq!(tagged.cast::<Label>(), Some(&Label("north")));
    }

    #[test]
    fn null_tagged_mut_has_nothing_to_call() {
        let mut null = TaggedMut::<Unit>::default();

        assert!(null.is_null());
        assert_eq!(null.try_call_mut(Bump), None);
        assert_eq!(null, TaggedMut::null());
    }

    #[test]
    fn references_are_one_word() {
        assert_eq!(std::mem::size_of::<TaggedRef<'static, Unit>>(), std::mem::size_of::<usize>());
        assert_eq!(std::mem::size_of::<TaggedMut<'static, Unit>>(), std::mem::size_of::<usize>());
    }

    #[test]
    fn thread_safety_follows_the_variants() {
        fn send_sync<T: Send + Sync>() {}

        send_sync::<TaggedRef<'static, Unit>>();
        send_sync::<TaggedMut<'static, Unit>>();
    }

    #[test]
    fn unchecked_access_on_the_right_variant() {
        let mut count = Count(1);
        let mut tagged = TaggedMut::<Unit>::new(&mut count);

        unsafe { tagged.cast_unchecked_mut::<Count>() }.0 = 5;
        assert_eq!(unsafe { tagged.cast_unchecked::<Count>() }, &Count(5));
        assert_eq!(unsafe { tagged.as_shared().cast_unchecked::<Count>() }, &Count(5));

        unsafe { tagged.call_mut_unchecked(Bump) };
        assert_eq!(tagged.call(Rendered), "x6");

        let address = tagged.address_mut();
        assert_eq!(address.cast_const(), tagged.address());
        unsafe { (*address.cast::<Count>()).0 = 7 };

        assert_eq!(count, Count(7));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "does not hold")]
    fn unchecked_cast_to_another_variant_is_caught_in_debug() {
        let meters = Meters(1.0);
        let tagged = TaggedRef::<Unit>::new(&meters);

        let _ = unsafe { tagged.cast_unchecked::<Label>() };
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "does not hold")]
    fn unchecked_mut_cast_to_another_variant_is_caught_in_debug() {
        let mut label = Label("up");
        let mut tagged = TaggedMut::<Unit>::new(&mut label);

        let _ = unsafe { tagged.cast_unchecked_mut::<Count>() };
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "called a null tagged reference")]
    fn unchecked_call_on_null_is_caught_in_debug() {
        let mut null = TaggedMut::<Unit>::null();

        unsafe { null.call_mut_unchecked(Bump) };
    }
}
