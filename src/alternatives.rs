//! Alternative lists and their compile-time descriptors.
//!
//! An alternative list is an ordered, compile-time list of types, written with
//! the [`alternatives!`](crate::alternatives!) macro:
//!
//! ```
//! use anyof::alternatives::{Cons, Nil};
//!
//! type Numbers = anyof::alternatives![u8, u16, u32];
//! let _: Option<Numbers> = None::<Cons<u8, Cons<u16, Cons<u32, Nil>>>>;
//! ```
//!
//! The first type is the *default alternative*. A value of the list type
//! holds exactly one live alternative in place, which makes the list the
//! storage of the [`Union`](crate::Union) and
//! [`OptionalUnion`](crate::OptionalUnion) containers; its size is the
//! largest alternative plus the discriminant.
//!
//! Three traits describe a list:
//!
//! - [`TypeList`]: runtime queries on the active alternative, the size and
//!   alignment of the largest alternative, and cross-list transfer.
//! - [`Member<T, I>`]: compile-time proof that `T` is listed.
//! - [`AlternativeSet<B>`]: every alternative is-a `B`, so the active one can
//!   be viewed as `&B`.

pub use anyof_internals::{Cons, Member, Nil, TypeList};

use crate::Upcast;

/// An alternative list whose every alternative upcasts to the base `B`.
///
/// Implemented for every [`Cons`] list whose alternatives all implement
/// [`Upcast<B>`]. A list with an alternative that is not related to `B` does
/// not implement `AlternativeSet<B>`, so it cannot be used as the list of a
/// [`Union<B, _>`](crate::Union):
///
/// ```compile_fail
/// use anyof::{Union, alternatives};
///
/// #[derive(Default)]
/// struct Base;
/// struct Unrelated;
///
/// let union: Union<Base, alternatives![Base, Unrelated]> = Union::default();
/// let _ = union.as_base(); // ❌ `Unrelated` does not upcast to `Base`
/// ```
pub trait AlternativeSet<B: ?Sized>: TypeList {
    /// Returns the base view of the active alternative.
    fn as_base(&self) -> &B;

    /// Returns the mutable base view of the active alternative.
    fn as_base_mut(&mut self) -> &mut B;
}

impl<B: ?Sized> AlternativeSet<B> for Nil {
    fn as_base(&self) -> &B {
        match *self {}
    }

    fn as_base_mut(&mut self) -> &mut B {
        match *self {}
    }
}

impl<B, H, T> AlternativeSet<B> for Cons<H, T>
where
    B: ?Sized,
    H: Upcast<B> + 'static,
    T: AlternativeSet<B>,
{
    #[inline]
    fn as_base(&self) -> &B {
        match self {
            Cons::Head(head) => head.upcast(),
            Cons::Tail(tail) => tail.as_base(),
        }
    }

    #[inline]
    fn as_base_mut(&mut self) -> &mut B {
        match self {
            Cons::Head(head) => head.upcast_mut(),
            Cons::Tail(tail) => tail.as_base_mut(),
        }
    }
}

#[cfg(test)]
mod tests {
    use core::mem::{align_of, size_of};

    use super::*;

    struct Base(u8);
    struct Wide {
        base: Base,
        _payload: [u64; 4],
    }

    impl Upcast<Base> for Wide {
        fn upcast(&self) -> &Base {
            &self.base
        }

        fn upcast_mut(&mut self) -> &mut Base {
            &mut self.base
        }
    }

    type List = crate::alternatives![Base, Wide];

    #[test]
    fn test_descriptor_constants() {
        assert_eq!(<List as TypeList>::LEN, 2);
        assert_eq!(<List as TypeList>::MAX_SIZE, size_of::<Wide>());
        assert_eq!(<List as TypeList>::MAX_ALIGN, align_of::<u64>());
        assert!(size_of::<List>() >= <List as TypeList>::MAX_SIZE);
    }

    #[test]
    fn test_base_view() {
        let mut list: List = Cons::Tail(Cons::Head(Wide {
            base: Base(9),
            _payload: [0; 4],
        }));
        assert_eq!(AlternativeSet::<Base>::as_base(&list).0, 9);
        AlternativeSet::<Base>::as_base_mut(&mut list).0 = 10;
        assert_eq!(AlternativeSet::<Base>::as_base(&list).0, 10);

        let list: List = Cons::Head(Base(1));
        assert_eq!(AlternativeSet::<Base>::as_base(&list).0, 1);
    }

    #[test]
    fn test_alternative_set_impls() {
        static_assertions::assert_impl_all!(List: AlternativeSet<Base>);
        static_assertions::assert_not_impl_any!(List: AlternativeSet<Wide>);
    }
}
