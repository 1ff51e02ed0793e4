use core::{
    any::{Any, TypeId},
    fmt,
    hash::Hash,
    marker::PhantomData,
};

use crate::{
    Union,
    alternatives::{AlternativeSet, Cons, Member},
    convert::{self, Container, ContainerKind},
    error::{BadAlternativeAccess, InvalidConversion},
    markers::Empty,
};

/// A container that holds either nothing or exactly one value out of a
/// closed list of alternatives, all of which are-a `B`.
///
/// `OptionalUnion` is the optional counterpart of [`Union`]: it starts out
/// empty, and it can be left empty by conversions. The empty state is part of
/// the same flat storage as the alternatives, not a wrapper around a
/// [`Union`].
///
/// In the typed accessors, the [`Empty`] marker stands for the empty state,
/// as if it were an extra alternative placed before `L`.
///
/// Conversions from other containers follow the optional rules described in
/// [`convert`](crate::convert): an empty source gives an empty container, and
/// an alternative that is not listed in `L` leaves the container empty when
/// it comes from a [`Union`], but is refused when it comes from another
/// `OptionalUnion`.
///
/// # Examples
///
/// ```
/// use anyof::{OptionalUnion, Union, alternatives, impl_upcast, markers::Empty};
///
/// #[derive(Debug, PartialEq)]
/// struct Base(u8);
/// #[derive(Debug, PartialEq)]
/// struct Left {
///     base: Base,
/// }
/// #[derive(Debug, PartialEq)]
/// struct Right {
///     base: Base,
/// }
///
/// impl_upcast!(Base: Left => base, Right => base);
///
/// let mut slot: OptionalUnion<Base, alternatives![Base, Left]> = OptionalUnion::default();
/// assert!(slot.is::<Empty, _>());
/// assert_eq!(slot.index(), OptionalUnion::<Base, alternatives![Base, Left]>::NPOS);
///
/// // `Right` is not listed: a union holding it leaves the slot empty
/// let right: Union<Base, alternatives![Base, Right]> = Union::new(Right { base: Base(1) });
/// slot.try_assign(right).unwrap();
/// assert!(!slot.has_value());
///
/// let left: Union<Base, alternatives![Left, Right]> = Union::new(Left { base: Base(2) });
/// slot.try_assign(left).unwrap();
/// assert_eq!(slot.index(), 1);
/// assert_eq!(slot.as_base(), Some(&Base(2)));
/// ```
pub struct OptionalUnion<B: ?Sized, L> {
    alternatives: Option<L>,
    _base: PhantomData<fn(&B)>,
}

impl<B: ?Sized, L: AlternativeSet<B>> OptionalUnion<B, L> {
    /// The index reported by an empty container.
    pub const NPOS: usize = usize::MAX;

    pub(crate) fn from_list(alternatives: Option<L>) -> Self {
        Self {
            alternatives,
            _base: PhantomData,
        }
    }

    /// Creates an empty container.
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            alternatives: None,
            _base: PhantomData,
        }
    }

    /// Creates a container holding `value`.
    #[inline]
    pub fn new<T, I>(value: T) -> Self
    where
        L: Member<T, I>,
    {
        Self::from_list(Some(L::from_member(value)))
    }

    /// Creates a container by moving the active alternative out of another
    /// container of the same base.
    ///
    /// An empty `source` gives an empty container. If the active alternative
    /// of `source` is not listed in `L`, the result is empty when `source` is
    /// a [`Union`] (the alternative is dropped), and an error carrying
    /// `source` back when it is an `OptionalUnion`.
    ///
    /// # Examples
    ///
    /// ```
    /// use anyof::{OptionalUnion, Union, alternatives};
    ///
    /// type Bytes = OptionalUnion<u8, alternatives![u8]>;
    ///
    /// let source: OptionalUnion<u8, alternatives![u8]> = OptionalUnion::new(1u8);
    /// let moved = Bytes::try_from_container(source).unwrap();
    /// assert_eq!(moved.get::<u8, _>(), Ok(&1));
    ///
    /// let empty = Bytes::try_from_container(Bytes::empty()).unwrap();
    /// assert!(empty.is_empty());
    /// ```
    pub fn try_from_container<S>(source: S) -> Result<Self, InvalidConversion<S>>
    where
        S: Container<B>,
    {
        convert::to_optional(source).map(Self::from_list)
    }

    /// Creates a container holding a clone of the active alternative of
    /// another container of the same base.
    ///
    /// Follows the same rules as [`OptionalUnion::try_from_container`]. The
    /// check happens before anything is cloned.
    pub fn try_from_container_ref<S>(source: &S) -> Result<Self, InvalidConversion>
    where
        S: Container<B>,
        S::Alternatives: Clone,
    {
        convert::to_optional_cloned(source).map(Self::from_list)
    }

    /// Replaces the held value by the active alternative of `source`, or
    /// empties the container, following the rules of
    /// [`OptionalUnion::try_from_container`].
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
    /// `source`, or empties the container.
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

    /// Replaces the held value, if any, by `value`.
    #[inline]
    pub fn set<T, I>(&mut self, value: T)
    where
        L: Member<T, I>,
    {
        self.alternatives = Some(L::from_member(value));
    }

    /// Drops the held value, if any, builds a `T` from `value` in its place
    /// and returns a reference to it.
    pub fn emplace<T, I>(&mut self, value: impl Into<T>) -> &mut T
    where
        L: Member<T, I>,
    {
        let alternatives = self.alternatives.insert(L::from_member(value.into()));
        match alternatives.get_member_mut() {
            Some(value) => value,
            None => unreachable!("the alternative was just emplaced"),
        }
    }

    /// Exchanges the contents of two containers with the same alternatives.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(&mut self.alternatives, &mut other.alternatives);
    }

    /// Moves the held value out into a new container, leaving `self` empty.
    #[inline]
    #[must_use]
    pub fn take(&mut self) -> Self {
        Self::from_list(self.alternatives.take())
    }

    /// Drops the held value, if any.
    #[inline]
    pub fn clear(&mut self) {
        self.alternatives = None;
    }

    /// Returns `true` if the container holds a value.
    #[inline]
    #[must_use]
    pub fn has_value(&self) -> bool {
        self.alternatives.is_some()
    }

    /// Returns `true` if the container is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.alternatives.is_none()
    }

    /// Returns `true` if the held value is exactly a `T`. With `T = Empty`,
    /// returns `true` if the container is empty.
    #[inline]
    #[must_use]
    pub fn is<T, I>(&self) -> bool
    where
        Cons<Empty, L>: Member<T, I>,
    {
        let position = <Cons<Empty, L> as Member<T, I>>::POSITION;
        match &self.alternatives {
            None => position == 0,
            Some(alternatives) => alternatives.active_index() + 1 == position,
        }
    }

    /// Returns the held value if it is a `T`.
    ///
    /// With `T = Empty`, succeeds if the container is empty. Any other `T`
    /// fails on an empty container.
    pub fn get<T: 'static, I>(&self) -> Result<&T, BadAlternativeAccess>
    where
        Cons<Empty, L>: Member<T, I>,
    {
        self.get_if::<T, I>().ok_or_else(|| {
            BadAlternativeAccess::new(core::any::type_name::<T>(), self.active_type_name())
        })
    }

    /// Returns the held value mutably if it is a `T`.
    pub fn get_mut<T, I>(&mut self) -> Result<&mut T, BadAlternativeAccess>
    where
        L: Member<T, I>,
    {
        let found = self.active_type_name();
        self.get_if_mut::<T, I>()
            .ok_or_else(|| BadAlternativeAccess::new(core::any::type_name::<T>(), found))
    }

    /// Returns the held value if it is a `T`, or `None` otherwise.
    ///
    /// With `T = Empty`, returns `Some` if the container is empty.
    pub fn get_if<T: 'static, I>(&self) -> Option<&T>
    where
        Cons<Empty, L>: Member<T, I>,
    {
        static EMPTY: Empty = Empty;
        let active: &dyn Any = match &self.alternatives {
            None => &EMPTY,
            Some(alternatives) => alternatives.active_as_any(),
        };
        active.downcast_ref()
    }

    /// Returns the held value mutably if it is a `T`, or `None` otherwise.
    #[inline]
    pub fn get_if_mut<T, I>(&mut self) -> Option<&mut T>
    where
        L: Member<T, I>,
    {
        self.alternatives.as_mut()?.get_member_mut()
    }

    /// Moves the held value out if it is a `T`, or returns the container
    /// unchanged.
    pub fn into_inner<T, I>(self) -> Result<T, Self>
    where
        L: Member<T, I>,
    {
        match self.alternatives {
            Some(alternatives) => alternatives
                .take_member()
                .map_err(|alternatives| Self::from_list(Some(alternatives))),
            None => Err(self),
        }
    }

    /// Returns the position of the held value's type in `L`, or
    /// [`NPOS`](Self::NPOS) if the container is empty.
    #[inline]
    #[must_use]
    pub fn index(&self) -> usize {
        self.alternatives
            .as_ref()
            .map_or(Self::NPOS, |alternatives| alternatives.active_index())
    }

    /// Returns the [`TypeId`] of the held value, or `None` if the container
    /// is empty.
    #[inline]
    #[must_use]
    pub fn active_type_id(&self) -> Option<TypeId> {
        self.alternatives.as_ref().map(|alternatives| alternatives.active_type_id())
    }

    /// Returns the type name of the held value, or `None` if the container is
    /// empty.
    #[inline]
    #[must_use]
    pub fn active_type_name(&self) -> Option<&'static str> {
        self.alternatives.as_ref().map(|alternatives| alternatives.active_type_name())
    }

    /// Returns the held value as a `&B`, or `None` if the container is empty.
    #[inline]
    #[must_use]
    pub fn as_base(&self) -> Option<&B> {
        self.alternatives.as_ref().map(|alternatives| alternatives.as_base())
    }

    /// Returns the held value as a `&mut B`, or `None` if the container is
    /// empty.
    #[inline]
    #[must_use]
    pub fn as_base_mut(&mut self) -> Option<&mut B> {
        self.alternatives
            .as_mut()
            .map(|alternatives| alternatives.as_base_mut())
    }

    /// Converts the container into a [`Union`] holding the same value.
    ///
    /// Fails if the container is empty, handing it back inside the error.
    pub fn into_union(self) -> Result<Union<B, L>, InvalidConversion<Self>> {
        match self.alternatives {
            Some(alternatives) => Ok(Union::from_list(alternatives)),
            None => Err(InvalidConversion::empty_source(self)),
        }
    }
}

impl<B: ?Sized, L: AlternativeSet<B>> Container<B> for OptionalUnion<B, L> {
    type Alternatives = L;

    const KIND: ContainerKind = ContainerKind::Optional;

    #[inline]
    fn alternatives(&self) -> Option<&L> {
        self.alternatives.as_ref()
    }

    #[inline]
    fn into_alternatives(self) -> Result<L, Self> {
        match self.alternatives {
            Some(alternatives) => Ok(alternatives),
            None => Err(self),
        }
    }

    #[inline]
    fn from_alternatives(alternatives: L) -> Self {
        Self::from_list(Some(alternatives))
    }
}

impl<B: ?Sized, L: AlternativeSet<B>> Default for OptionalUnion<B, L> {
    /// Creates an empty container.
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<B: ?Sized, L: AlternativeSet<B>> From<Union<B, L>> for OptionalUnion<B, L> {
    #[inline]
    fn from(union: Union<B, L>) -> Self {
        Self::from_list(Some(union.into_list()))
    }
}

impl<B: ?Sized, L: AlternativeSet<B>> TryFrom<OptionalUnion<B, L>> for Union<B, L> {
    type Error = InvalidConversion<OptionalUnion<B, L>>;

    #[inline]
    fn try_from(optional: OptionalUnion<B, L>) -> Result<Self, Self::Error> {
        optional.into_union()
    }
}

impl<B: ?Sized, L: Clone> Clone for OptionalUnion<B, L> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            alternatives: self.alternatives.clone(),
            _base: PhantomData,
        }
    }
}

impl<B: ?Sized, L: Copy> Copy for OptionalUnion<B, L> {}

impl<B: ?Sized, L: PartialEq> PartialEq for OptionalUnion<B, L> {
    /// Two containers are equal if both are empty, or if they hold the same
    /// alternative with equal values.
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.alternatives == other.alternatives
    }
}

impl<B: ?Sized, L: Eq> Eq for OptionalUnion<B, L> {}

impl<B: ?Sized, L: Hash> Hash for OptionalUnion<B, L> {
    #[inline]
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.alternatives.hash(state);
    }
}

impl<B: ?Sized, L: fmt::Debug> fmt::Debug for OptionalUnion<B, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.alternatives {
            Some(alternatives) => f.debug_tuple("OptionalUnion").field(alternatives).finish(),
            None => f.write_str("OptionalUnion(Empty)"),
        }
    }
}
