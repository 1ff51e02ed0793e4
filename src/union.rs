use core::{
    any::TypeId,
    fmt,
    hash::{Hash, Hasher},
    marker::PhantomData,
    ops::{Deref, DerefMut},
};

use crate::{
    OptionalUnion,
    alternatives::{AlternativeSet, Member},
    convert::{self, Container, ContainerKind},
    error::{BadAlternativeAccess, InvalidConversion},
};

/// A container that always holds exactly one value out of a closed list of
/// alternatives, all of which are-a `B`.
///
/// The alternatives are stored in place; the size of a `Union` is that of its
/// largest alternative plus a discriminant. Any alternative can be viewed as
/// the common base `B` through [`as_base`](Union::as_base) or by dereferencing
/// the union.
///
/// Values of a listed type go in with [`Union::new`], [`Union::set`] and
/// [`Union::emplace`], which are checked at compile time. Values held by
/// another container go in with [`Union::try_from_container`] and
/// [`Union::try_assign`], which are checked at runtime against the
/// container's active alternative; see [`convert`](crate::convert) for the
/// rules.
///
/// # Examples
///
/// ```
/// use anyof::{Union, alternatives, impl_upcast};
///
/// #[derive(Default, Debug, PartialEq)]
/// struct Base {
///     id: u32,
/// }
///
/// #[derive(Debug, PartialEq)]
/// struct Named {
///     base: Base,
///     name: &'static str,
/// }
///
/// impl_upcast!(Base: Named => base);
///
/// type Entity = Union<Base, alternatives![Base, Named]>;
///
/// let mut entity = Entity::default();
/// assert!(entity.is::<Base, _>());
/// assert_eq!(entity.index(), 0);
///
/// entity.set(Named {
///     base: Base { id: 7 },
///     name: "seven",
/// });
/// assert!(entity.is::<Named, _>());
/// assert_eq!(entity.id, 7);
/// assert_eq!(entity.get::<Named, _>().map(|named| named.name), Ok("seven"));
/// assert!(entity.get_if::<Base, _>().is_none());
/// ```
pub struct Union<B: ?Sized, L> {
    alternatives: L,
    _base: PhantomData<fn(&B)>,
}

impl<B: ?Sized, L: AlternativeSet<B>> Union<B, L> {
    pub(crate) fn from_list(alternatives: L) -> Self {
        Self {
            alternatives,
            _base: PhantomData,
        }
    }

    /// Creates a union holding `value`.
    #[inline]
    pub fn new<T, I>(value: T) -> Self
    where
        L: Member<T, I>,
    {
        Self::from_list(L::from_member(value))
    }

    /// Creates a union by moving the active alternative out of another
    /// container of the same base.
    ///
    /// Fails if `source` is an empty [`OptionalUnion`], or if its active
    /// alternative is not listed in `L`. On failure, `source` is handed back
    /// unchanged inside the error.
    ///
    /// # Examples
    ///
    /// ```
    /// use anyof::{OptionalUnion, Union, alternatives};
    ///
    /// let source: Union<u8, alternatives![u8]> = Union::new(5u8);
    /// let copy: Union<u8, alternatives![u8]> = Union::try_from_container(source).unwrap();
    /// assert_eq!(*copy, 5);
    ///
    /// let empty: OptionalUnion<u8, alternatives![u8]> = OptionalUnion::empty();
    /// let error = Union::<u8, alternatives![u8]>::try_from_container(empty).unwrap_err();
    /// assert!(error.into_source().is_empty());
    /// ```
    pub fn try_from_container<S>(source: S) -> Result<Self, InvalidConversion<S>>
    where
        S: Container<B>,
    {
        convert::to_required(source).map(Self::from_list)
    }

    /// Creates a union holding a clone of the active alternative of another
    /// container of the same base.
    ///
    /// Fails under the same conditions as [`Union::try_from_container`]. The
    /// check happens before anything is cloned.
    pub fn try_from_container_ref<S>(source: &S) -> Result<Self, InvalidConversion>
    where
        S: Container<B>,
        S::Alternatives: Clone,
    {
        convert::to_required_cloned(source).map(Self::from_list)
    }

    /// Replaces the held value by the active alternative of `source`.
    ///
    /// On failure `self` is left untouched and `source` is handed back inside
    /// the error.
    pub fn try_assign<S>(&mut self, source: S) -> Result<(), InvalidConversion<S>>
    where
        S: Container<B>,
    {
        *self = Self::try_from_container(source)?;
        Ok(())
    }

    /// Replaces the held value by a clone of the active alternative of
    /// `source`.
    ///
    /// On failure `self` is left untouched.
    pub fn try_assign_ref<S>(&mut self, source: &S) -> Result<(), InvalidConversion>
    where
        S: Container<B>,
        S::Alternatives: Clone,
    {
        *self = Self::try_from_container_ref(source)?;
        Ok(())
    }

    /// Replaces the held value by `value`, dropping the previous one.
    #[inline]
    pub fn set<T, I>(&mut self, value: T)
    where
        L: Member<T, I>,
    {
        self.alternatives = L::from_member(value);
    }

    /// Drops the held value, builds a `T` from `value` in its place and
    /// returns a reference to it.
    ///
    /// # Examples
    ///
    /// ```
    /// use anyof::{Union, alternatives};
    ///
    /// let mut number: Union<u64, alternatives![u64]> = Union::default();
    /// *number.emplace::<u64, _>(7u32) += 1;
    /// assert_eq!(*number, 8);
    /// ```
    pub fn emplace<T, I>(&mut self, value: impl Into<T>) -> &mut T
    where
        L: Member<T, I>,
    {
        self.alternatives = L::from_member(value.into());
        match self.alternatives.get_member_mut() {
            Some(value) => value,
            None => unreachable!("the alternative was just emplaced"),
        }
    }

    /// Exchanges the held values of two unions with the same alternatives.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(&mut self.alternatives, &mut other.alternatives);
    }

    /// Returns `true` if the held value is exactly a `T`.
    #[inline]
    #[must_use]
    pub fn is<T, I>(&self) -> bool
    where
        L: Member<T, I>,
    {
        self.alternatives.active_index() == L::POSITION
    }

    /// Returns the held value if it is a `T`.
    pub fn get<T, I>(&self) -> Result<&T, BadAlternativeAccess>
    where
        L: Member<T, I>,
    {
        self.alternatives.get_member().ok_or_else(|| {
            BadAlternativeAccess::new(
                core::any::type_name::<T>(),
                Some(self.alternatives.active_type_name()),
            )
        })
    }

    /// Returns the held value mutably if it is a `T`.
    pub fn get_mut<T, I>(&mut self) -> Result<&mut T, BadAlternativeAccess>
    where
        L: Member<T, I>,
    {
        let found = self.alternatives.active_type_name();
        self.alternatives
            .get_member_mut()
            .ok_or_else(|| BadAlternativeAccess::new(core::any::type_name::<T>(), Some(found)))
    }

    /// Returns the held value if it is a `T`, or `None` otherwise.
    #[inline]
    pub fn get_if<T, I>(&self) -> Option<&T>
    where
        L: Member<T, I>,
    {
        self.alternatives.get_member()
    }

    /// Returns the held value mutably if it is a `T`, or `None` otherwise.
    #[inline]
    pub fn get_if_mut<T, I>(&mut self) -> Option<&mut T>
    where
        L: Member<T, I>,
    {
        self.alternatives.get_member_mut()
    }

    /// Moves the held value out if it is a `T`, or returns the union
    /// unchanged.
    pub fn into_inner<T, I>(self) -> Result<T, Self>
    where
        L: Member<T, I>,
    {
        self.alternatives.take_member().map_err(Self::from_list)
    }

    /// Returns the position of the held value's type in `L`.
    #[inline]
    #[must_use]
    pub fn index(&self) -> usize {
        self.alternatives.active_index()
    }

    /// Returns the [`TypeId`] of the held value.
    #[inline]
    #[must_use]
    pub fn active_type_id(&self) -> TypeId {
        self.alternatives.active_type_id()
    }

    /// Returns the type name of the held value.
    #[inline]
    #[must_use]
    pub fn active_type_name(&self) -> &'static str {
        self.alternatives.active_type_name()
    }

    /// Returns the held value as a `&B`.
    #[inline]
    #[must_use]
    pub fn as_base(&self) -> &B {
        self.alternatives.as_base()
    }

    /// Returns the held value as a `&mut B`.
    #[inline]
    #[must_use]
    pub fn as_base_mut(&mut self) -> &mut B {
        self.alternatives.as_base_mut()
    }

    /// Converts the union into an [`OptionalUnion`] holding the same value.
    #[inline]
    #[must_use]
    pub fn into_optional(self) -> OptionalUnion<B, L> {
        OptionalUnion::from_list(Some(self.alternatives))
    }

    pub(crate) fn into_list(self) -> L {
        self.alternatives
    }
}

impl<B: ?Sized, L: AlternativeSet<B>> Container<B> for Union<B, L> {
    type Alternatives = L;

    const KIND: ContainerKind = ContainerKind::Required;

    #[inline]
    fn alternatives(&self) -> Option<&L> {
        Some(&self.alternatives)
    }

    #[inline]
    fn into_alternatives(self) -> Result<L, Self> {
        Ok(self.alternatives)
    }

    #[inline]
    fn from_alternatives(alternatives: L) -> Self {
        Self::from_list(alternatives)
    }
}

impl<B: ?Sized, L: AlternativeSet<B> + Default> Default for Union<B, L> {
    /// Creates a union holding the default value of the first alternative.
    #[inline]
    fn default() -> Self {
        Self::from_list(L::default())
    }
}

impl<B: ?Sized, L: AlternativeSet<B>> Deref for Union<B, L> {
    type Target = B;

    #[inline]
    fn deref(&self) -> &B {
        self.as_base()
    }
}

impl<B: ?Sized, L: AlternativeSet<B>> DerefMut for Union<B, L> {
    #[inline]
    fn deref_mut(&mut self) -> &mut B {
        self.as_base_mut()
    }
}

impl<B: ?Sized, L: Clone> Clone for Union<B, L> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            alternatives: self.alternatives.clone(),
            _base: PhantomData,
        }
    }
}

impl<B: ?Sized, L: Copy> Copy for Union<B, L> {}

impl<B: ?Sized, L: PartialEq> PartialEq for Union<B, L> {
    /// Two unions are equal if they hold the same alternative with equal
    /// values.
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.alternatives == other.alternatives
    }
}

impl<B: ?Sized, L: Eq> Eq for Union<B, L> {}

impl<B: ?Sized, L: Hash> Hash for Union<B, L> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.alternatives.hash(state);
    }
}

impl<B: ?Sized, L: fmt::Debug> fmt::Debug for Union<B, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Union").field(&self.alternatives).finish()
    }
}

impl<B, L> fmt::Display for Union<B, L>
where
    B: ?Sized + fmt::Display,
    L: AlternativeSet<B>,
{
    /// Formats the held value through its base view.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_base(), f)
    }
}

#[cfg(test)]
mod tests {
    use alloc::{format, string::String};

    use super::*;
    use crate::{alternatives, impl_upcast};

    #[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Hash)]
    struct Base(u32);

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    struct Derived {
        base: Base,
        flag: bool,
    }

    impl_upcast!(Base: Derived => base);

    type Alternatives = alternatives![Base, Derived];
    type Family = Union<Base, Alternatives>;

    #[test]
    fn test_union_auto_traits() {
        static_assertions::assert_impl_all!(Family: Send, Sync, Copy, Clone, Default, Eq, Hash);
        static_assertions::assert_impl_all!(Union<dyn fmt::Debug, alternatives![u8]>: Send, Sync);
        static_assertions::assert_not_impl_any!(
            Union<Base, alternatives![Base, core::cell::Cell<u8>]>: Sync
        );
        static_assertions::assert_not_impl_any!(Union<String, alternatives![String]>: Copy);
    }

    #[test]
    fn test_union_is_as_large_as_its_list() {
        assert_eq!(
            core::mem::size_of::<Family>(),
            core::mem::size_of::<Alternatives>()
        );
    }

    #[test]
    fn test_union_index_and_type() {
        let union = Family::new(Derived {
            base: Base(1),
            flag: true,
        });
        assert_eq!(union.index(), 1);
        assert_eq!(union.active_type_id(), TypeId::of::<Derived>());
        assert_eq!(union.active_type_name(), core::any::type_name::<Derived>());
        assert_eq!(union.as_base(), &Base(1));
    }

    #[test]
    fn test_union_debug_forwards_to_active_value() {
        let union = Family::new(Base(4));
        assert_eq!(format!("{union:?}"), "Union(Base(4))");
    }

    #[test]
    fn test_union_equality() {
        let a = Family::new(Base(1));
        let b = Family::new(Derived {
            base: Base(1),
            flag: false,
        });
        assert_ne!(a, b);
        assert_eq!(a, Family::new(Base(1)));
    }
}
