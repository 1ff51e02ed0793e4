//! Type-level alternative lists.
//!
//! An alternative list is a cons list of types, `Cons<T0, Cons<T1, Nil>>`.
//! The same type is also a value type: a `Cons<H, T>` is either the head
//! alternative `H` or one of the alternatives of `T`, and [`Nil`] has no
//! values at all. A value of a list type therefore always holds exactly one
//! live alternative, stored in place.
//!
//! # Positions and type identity
//!
//! The position of the active alternative is its depth in the list. Two lists
//! may hold the same type at different positions; [`TypeList::transfer`]
//! preserves the *type* of the active alternative, never its position.
//! Membership compares exact types: a type is only found in a list if it
//! appears there verbatim.

use core::{
    any::{Any, TypeId},
    fmt,
};

use crate::util::cast;

/// The end of an alternative list.
///
/// `Nil` is uninhabited, so a list always holds one of the types listed
/// before it.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Nil {}

/// A non-empty alternative list: either the head alternative `H` or one of
/// the alternatives in `T`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Cons<H, T> {
    /// The active alternative is `H`.
    Head(H),
    /// The active alternative is somewhere in `T`.
    Tail(T),
}

impl<H: Default, T> Default for Cons<H, T> {
    /// Activates the first alternative of the list.
    #[inline]
    fn default() -> Self {
        Cons::Head(H::default())
    }
}

impl<H: fmt::Debug, T: fmt::Debug> fmt::Debug for Cons<H, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cons::Head(head) => head.fmt(f),
            Cons::Tail(tail) => tail.fmt(f),
        }
    }
}

/// Runtime queries on an alternative list.
///
/// This trait is implemented for [`Nil`] and for every [`Cons`] whose head
/// is `'static`. Each method dispatches on the active alternative by walking
/// the list, which the compiler flattens into a single match on the nested
/// discriminants.
pub trait TypeList: Sized + 'static {
    /// Number of alternatives in the list.
    const LEN: usize;

    /// Largest size among the alternatives.
    const MAX_SIZE: usize;

    /// Largest alignment among the alternatives.
    const MAX_ALIGN: usize;

    /// Returns the position of the active alternative.
    fn active_index(&self) -> usize;

    /// Returns the [`TypeId`] of the active alternative.
    fn active_type_id(&self) -> TypeId;

    /// Returns the name of the active alternative's type.
    fn active_type_name(&self) -> &'static str;

    /// Returns the active alternative as `&dyn Any`.
    fn active_as_any(&self) -> &dyn Any;

    /// Returns the active alternative as `&mut dyn Any`.
    fn active_as_any_mut(&mut self) -> &mut dyn Any;

    /// Returns the position of the first alternative with the given
    /// [`TypeId`], if any.
    fn position_of(type_id: TypeId) -> Option<usize>;

    /// Returns `true` if `V` appears in the list.
    #[inline]
    fn contains<V: 'static>() -> bool {
        Self::position_of(TypeId::of::<V>()).is_some()
    }

    /// Builds a list value holding `value`, or hands `value` back if `V` is
    /// not one of the alternatives.
    fn inject<V: 'static>(value: V) -> Result<Self, V>;

    /// Returns `true` if the active alternative's type appears in `D`.
    ///
    /// Each alternative's membership in `D` is resolved per type, so this
    /// is the check [`transfer`](Self::transfer) performs, without moving
    /// the value.
    fn fits<D: TypeList>(&self) -> bool;

    /// Moves the active alternative into the list `D`.
    ///
    /// Succeeds if the active alternative's type appears in `D`; the result
    /// then holds the same value at `D`'s position for that type. Otherwise
    /// `self` is returned unchanged.
    fn transfer<D: TypeList>(self) -> Result<D, Self>;
}

impl TypeList for Nil {
    const LEN: usize = 0;
    const MAX_SIZE: usize = 0;
    const MAX_ALIGN: usize = 1;

    fn active_index(&self) -> usize {
        match *self {}
    }

    fn active_type_id(&self) -> TypeId {
        match *self {}
    }

    fn active_type_name(&self) -> &'static str {
        match *self {}
    }

    fn active_as_any(&self) -> &dyn Any {
        match *self {}
    }

    fn active_as_any_mut(&mut self) -> &mut dyn Any {
        match *self {}
    }

    #[inline]
    fn position_of(_type_id: TypeId) -> Option<usize> {
        None
    }

    #[inline]
    fn inject<V: 'static>(value: V) -> Result<Self, V> {
        Err(value)
    }

    fn fits<D: TypeList>(&self) -> bool {
        match *self {}
    }

    fn transfer<D: TypeList>(self) -> Result<D, Self> {
        match self {}
    }
}

impl<H: 'static, T: TypeList> TypeList for Cons<H, T> {
    const LEN: usize = 1 + T::LEN;
    const MAX_SIZE: usize = max(core::mem::size_of::<H>(), T::MAX_SIZE);
    const MAX_ALIGN: usize = max(core::mem::align_of::<H>(), T::MAX_ALIGN);

    #[inline]
    fn active_index(&self) -> usize {
        match self {
            Cons::Head(_) => 0,
            Cons::Tail(tail) => 1 + tail.active_index(),
        }
    }

    #[inline]
    fn active_type_id(&self) -> TypeId {
        match self {
            Cons::Head(_) => TypeId::of::<H>(),
            Cons::Tail(tail) => tail.active_type_id(),
        }
    }

    #[inline]
    fn active_type_name(&self) -> &'static str {
        match self {
            Cons::Head(_) => core::any::type_name::<H>(),
            Cons::Tail(tail) => tail.active_type_name(),
        }
    }

    #[inline]
    fn active_as_any(&self) -> &dyn Any {
        match self {
            Cons::Head(head) => head,
            Cons::Tail(tail) => tail.active_as_any(),
        }
    }

    #[inline]
    fn active_as_any_mut(&mut self) -> &mut dyn Any {
        match self {
            Cons::Head(head) => head,
            Cons::Tail(tail) => tail.active_as_any_mut(),
        }
    }

    #[inline]
    fn position_of(type_id: TypeId) -> Option<usize> {
        if type_id == TypeId::of::<H>() {
            Some(0)
        } else {
            T::position_of(type_id).map(|position| position + 1)
        }
    }

    #[inline]
    fn inject<V: 'static>(value: V) -> Result<Self, V> {
        match cast::<V, H>(value) {
            Ok(head) => Ok(Cons::Head(head)),
            Err(value) => T::inject(value).map(Cons::Tail),
        }
    }

    #[inline]
    fn fits<D: TypeList>(&self) -> bool {
        match self {
            Cons::Head(_) => D::contains::<H>(),
            Cons::Tail(tail) => tail.fits::<D>(),
        }
    }

    #[inline]
    fn transfer<D: TypeList>(self) -> Result<D, Self> {
        match self {
            Cons::Head(head) => D::inject(head).map_err(Cons::Head),
            Cons::Tail(tail) => tail.transfer::<D>().map_err(Cons::Tail),
        }
    }
}

/// `const` replacement for [`Ord::max`] on `usize`.
const fn max(a: usize, b: usize) -> usize {
    if a > b { a } else { b }
}
