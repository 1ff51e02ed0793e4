//! Compile-time membership of a type in an alternative list.
//!
//! A list implements [`Member<T, I>`] for each alternative `T` it contains.
//! The second parameter is a position witness built from [`Here`] and
//! [`There`]; callers leave it as `_` and let the compiler find the unique
//! witness. Asking for a type that is not listed leaves the compiler without
//! a witness, which is a compile error rather than a runtime failure.
//!
//! ```
//! use anyof_internals::{Cons, Member, Nil};
//!
//! type List = Cons<u8, Cons<&'static str, Nil>>;
//!
//! fn position<T, I>() -> usize
//! where
//!     List: Member<T, I>,
//! {
//!     <List as Member<T, I>>::POSITION
//! }
//!
//! assert_eq!(position::<u8, _>(), 0);
//! assert_eq!(position::<&'static str, _>(), 1);
//! ```
//!
//! ```compile_fail
//! use anyof_internals::{Cons, Member, Nil};
//!
//! type List = Cons<u8, Cons<&'static str, Nil>>;
//!
//! // `u16` is not an alternative of `List`
//! let list = <List as Member<u16, _>>::from_member(1u16);
//! ```

use core::marker::PhantomData;

use crate::list::{Cons, TypeList};

/// Position witness: the alternative is the head of the list.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Default, Hash)]
pub struct Here;

/// Position witness: the alternative is found at position `I` of the tail.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Default, Hash)]
pub struct There<I>(PhantomData<I>);

/// Proof that `T` is one of the alternatives of `Self`, at the position
/// described by `I`.
pub trait Member<T, I>: TypeList {
    /// Position of `T` in the list.
    const POSITION: usize;

    /// Builds a list value holding `value`.
    fn from_member(value: T) -> Self;

    /// Returns the active alternative if it is a `T`.
    fn get_member(&self) -> Option<&T>;

    /// Returns the active alternative mutably if it is a `T`.
    fn get_member_mut(&mut self) -> Option<&mut T>;

    /// Moves the active alternative out if it is a `T`, otherwise hands the
    /// list back.
    fn take_member(self) -> Result<T, Self>;
}

impl<T: 'static, Tail: TypeList> Member<T, Here> for Cons<T, Tail> {
    const POSITION: usize = 0;

    #[inline]
    fn from_member(value: T) -> Self {
        Cons::Head(value)
    }

    #[inline]
    fn get_member(&self) -> Option<&T> {
        match self {
            Cons::Head(head) => Some(head),
            Cons::Tail(_) => None,
        }
    }

    #[inline]
    fn get_member_mut(&mut self) -> Option<&mut T> {
        match self {
            Cons::Head(head) => Some(head),
            Cons::Tail(_) => None,
        }
    }

    #[inline]
    fn take_member(self) -> Result<T, Self> {
        match self {
            Cons::Head(head) => Ok(head),
            tail @ Cons::Tail(_) => Err(tail),
        }
    }
}

impl<H: 'static, T, Tail, I> Member<T, There<I>> for Cons<H, Tail>
where
    Tail: Member<T, I>,
{
    const POSITION: usize = 1 + Tail::POSITION;

    #[inline]
    fn from_member(value: T) -> Self {
        Cons::Tail(Tail::from_member(value))
    }

    #[inline]
    fn get_member(&self) -> Option<&T> {
        match self {
            Cons::Head(_) => None,
            Cons::Tail(tail) => tail.get_member(),
        }
    }

    #[inline]
    fn get_member_mut(&mut self) -> Option<&mut T> {
        match self {
            Cons::Head(_) => None,
            Cons::Tail(tail) => tail.get_member_mut(),
        }
    }

    #[inline]
    fn take_member(self) -> Result<T, Self> {
        match self {
            head @ Cons::Head(_) => Err(head),
            Cons::Tail(tail) => tail.take_member().map_err(Cons::Tail),
        }
    }
}
