//! Conversions between union containers with different alternative lists.
//!
//! Every union container of base `B` implements [`Container<B>`], which is
//! what [`Union::try_from_container`](crate::Union::try_from_container) and
//! [`OptionalUnion::try_from_container`](crate::OptionalUnion::try_from_container)
//! (and their `_ref` and `try_assign` siblings) accept as a source. Whether a
//! conversion succeeds depends on the source's *active* alternative, so it is
//! checked at runtime:
//!
//! | source            | destination     | active type listed | not listed | empty source |
//! |-------------------|-----------------|--------------------|------------|--------------|
//! | `Union`           | `Union`         | converted          | error      |              |
//! | `OptionalUnion`   | `Union`         | converted          | error      | error        |
//! | `Union`           | `OptionalUnion` | converted          | **empty**  |              |
//! | `OptionalUnion`   | `OptionalUnion` | converted          | error      | empty        |
//!
//! Only exact types are looked up. An alternative that upcasts to a listed
//! type is not listed itself, and is never substituted for it.
//!
//! A converted value keeps its type, not its position: the destination
//! activates the position its own list assigns to that type.
//!
//! Conversions that move their source hand it back unchanged inside the
//! [`InvalidConversion`] error. Conversions that borrow their source check
//! the destination list before cloning, so a refused conversion clones
//! nothing.

use crate::{
    alternatives::{AlternativeSet, TypeList},
    error::InvalidConversion,
};

mod sealed {
    pub trait Sealed {}
}

/// Whether a container can be empty.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub enum ContainerKind {
    /// Always holds a value, like [`Union`](crate::Union).
    Required,
    /// May be empty, like [`OptionalUnion`](crate::OptionalUnion).
    Optional,
}

impl ContainerKind {
    /// Returns a lowercase name for the kind, used in log events.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ContainerKind::Required => "required",
            ContainerKind::Optional => "optional",
        }
    }
}

/// A union container that can be the source of a cross-list conversion.
///
/// This trait is sealed; it is implemented by [`Union<B, L>`](crate::Union)
/// and [`OptionalUnion<B, L>`](crate::OptionalUnion).
pub trait Container<B: ?Sized>: sealed::Sealed + Sized {
    /// The alternative list of the container.
    type Alternatives: AlternativeSet<B>;

    /// Whether the container can be empty.
    const KIND: ContainerKind;

    /// Returns the stored alternatives, or `None` if the container is empty.
    fn alternatives(&self) -> Option<&Self::Alternatives>;

    /// Moves the stored alternatives out, or returns the container unchanged
    /// if it is empty.
    fn into_alternatives(self) -> Result<Self::Alternatives, Self>;

    /// Rebuilds the container from its alternatives.
    fn from_alternatives(alternatives: Self::Alternatives) -> Self;
}

impl<B: ?Sized, L: AlternativeSet<B>> sealed::Sealed for crate::Union<B, L> {}
impl<B: ?Sized, L: AlternativeSet<B>> sealed::Sealed for crate::OptionalUnion<B, L> {}

/// Moves `source` into a list that must hold a value.
pub(crate) fn to_required<B, S, D>(source: S) -> Result<D, InvalidConversion<S>>
where
    B: ?Sized,
    S: Container<B>,
    D: AlternativeSet<B>,
{
    let alternatives = match source.into_alternatives() {
        Ok(alternatives) => alternatives,
        Err(source) => {
            trace_refused(S::KIND, None);
            return Err(InvalidConversion::empty_source(source));
        }
    };
    alternatives.transfer::<D>().map_err(|alternatives| {
        let type_name = alternatives.active_type_name();
        trace_refused(S::KIND, Some(type_name));
        InvalidConversion::not_listed(S::from_alternatives(alternatives), type_name)
    })
}

/// Moves `source` into a list that may be left empty.
///
/// An unlisted alternative of a required source is dropped and the
/// destination becomes empty.
pub(crate) fn to_optional<B, S, D>(source: S) -> Result<Option<D>, InvalidConversion<S>>
where
    B: ?Sized,
    S: Container<B>,
    D: AlternativeSet<B>,
{
    let Ok(alternatives) = source.into_alternatives() else {
        return Ok(None);
    };
    match alternatives.transfer::<D>() {
        Ok(alternatives) => Ok(Some(alternatives)),
        Err(alternatives) => {
            let type_name = alternatives.active_type_name();
            match S::KIND {
                ContainerKind::Required => {
                    trace_fallback(type_name);
                    Ok(None)
                }
                ContainerKind::Optional => {
                    trace_refused(S::KIND, Some(type_name));
                    Err(InvalidConversion::not_listed(
                        S::from_alternatives(alternatives),
                        type_name,
                    ))
                }
            }
        }
    }
}

/// Clones the active alternative of `source` into a list that must hold a
/// value.
pub(crate) fn to_required_cloned<B, S, D>(source: &S) -> Result<D, InvalidConversion>
where
    B: ?Sized,
    S: Container<B>,
    S::Alternatives: Clone,
    D: AlternativeSet<B>,
{
    let Some(alternatives) = source.alternatives() else {
        trace_refused(S::KIND, None);
        return Err(InvalidConversion::empty_source(()));
    };
    let type_name = alternatives.active_type_name();
    if !alternatives.fits::<D>() {
        trace_refused(S::KIND, Some(type_name));
        return Err(InvalidConversion::not_listed((), type_name));
    }
    alternatives
        .clone()
        .transfer::<D>()
        .map_err(|_| InvalidConversion::not_listed((), type_name))
}

/// Clones the active alternative of `source` into a list that may be left
/// empty.
pub(crate) fn to_optional_cloned<B, S, D>(source: &S) -> Result<Option<D>, InvalidConversion>
where
    B: ?Sized,
    S: Container<B>,
    S::Alternatives: Clone,
    D: AlternativeSet<B>,
{
    let Some(alternatives) = source.alternatives() else {
        return Ok(None);
    };
    let type_name = alternatives.active_type_name();
    if !alternatives.fits::<D>() {
        return match S::KIND {
            ContainerKind::Required => {
                trace_fallback(type_name);
                Ok(None)
            }
            ContainerKind::Optional => {
                trace_refused(S::KIND, Some(type_name));
                Err(InvalidConversion::not_listed((), type_name))
            }
        };
    }
    alternatives
        .clone()
        .transfer::<D>()
        .map(Some)
        .map_err(|_| InvalidConversion::not_listed((), type_name))
}

#[inline(always)]
fn trace_refused(kind: ContainerKind, type_name: Option<&'static str>) {
    #[cfg(feature = "tracing")]
    tracing::trace!(
        source_kind = kind.as_str(),
        alternative = type_name,
        "refused union conversion"
    );
    #[cfg(not(feature = "tracing"))]
    let _ = (kind, type_name);
}

#[inline(always)]
fn trace_fallback(type_name: &'static str) {
    #[cfg(feature = "tracing")]
    tracing::trace!(
        alternative = type_name,
        "alternative not listed in the optional destination, leaving it empty"
    );
    #[cfg(not(feature = "tracing"))]
    let _ = type_name;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{OptionalUnion, Union, alternatives, impl_upcast};

    #[derive(Clone, Debug, PartialEq)]
    struct Base(u8);

    #[derive(Clone, Debug, PartialEq)]
    struct Child {
        base: Base,
    }

    #[derive(Clone, Debug, PartialEq)]
    struct Other {
        base: Base,
    }

    #[derive(Debug)]
    struct PanicOnClone {
        base: Base,
    }

    impl Clone for PanicOnClone {
        fn clone(&self) -> Self {
            panic!("cloned an alternative that cannot be converted")
        }
    }

    impl_upcast!(Base: Child => base, Other => base, PanicOnClone => base);

    type Small = alternatives![Base, Child];
    type Large = alternatives![Other, Child, Base];
    type WithPanic = alternatives![Base, PanicOnClone];

    fn child() -> Child {
        Child { base: Base(1) }
    }

    fn other() -> Other {
        Other { base: Base(2) }
    }

    #[test]
    fn test_container_kinds() {
        assert_eq!(
            <Union<Base, Small> as Container<Base>>::KIND,
            ContainerKind::Required
        );
        assert_eq!(
            <OptionalUnion<Base, Small> as Container<Base>>::KIND,
            ContainerKind::Optional
        );
        assert_eq!(ContainerKind::Optional.as_str(), "optional");
    }

    #[test]
    fn test_to_required_keeps_type_not_position() {
        let source: Union<Base, Small> = Union::new(child());
        assert_eq!(source.index(), 1);

        let moved: Large = to_required::<Base, _, _>(source).unwrap();
        assert_eq!(moved.active_index(), 1);

        let source: Union<Base, Small> = Union::new(Base(3));
        let moved: Large = to_required::<Base, _, _>(source).unwrap();
        assert_eq!(moved.active_index(), 2);
    }

    #[test]
    fn test_to_required_hands_source_back() {
        let source: Union<Base, Large> = Union::new(other());
        let error = to_required::<Base, _, Small>(source).unwrap_err();
        assert_eq!(error.type_name(), Some(core::any::type_name::<Other>()));
        assert_eq!(error.into_source().get::<Other, _>(), Ok(&other()));

        let source: OptionalUnion<Base, Small> = OptionalUnion::empty();
        let error = to_required::<Base, _, Large>(source).unwrap_err();
        assert_eq!(error.reason(), crate::ConversionFailure::EmptySource);
        assert!(error.into_source().is_empty());
    }

    #[test]
    fn test_to_optional_policy() {
        // Required source: an unlisted alternative leaves the destination empty
        let source: Union<Base, Large> = Union::new(other());
        assert!(to_optional::<Base, _, Small>(source).unwrap().is_none());

        // Optional source: an unlisted alternative is refused
        let source: OptionalUnion<Base, Large> = OptionalUnion::new(other());
        let error = to_optional::<Base, _, Small>(source).unwrap_err();
        assert!(error.into_source().is::<Other, _>());

        // Empty source: always empty
        let source: OptionalUnion<Base, Large> = OptionalUnion::empty();
        assert!(to_optional::<Base, _, Small>(source).unwrap().is_none());
    }

    #[test]
    fn test_cloned_conversion_checks_before_cloning() {
        let source: Union<Base, WithPanic> = Union::new(PanicOnClone { base: Base(4) });
        assert!(to_required_cloned::<Base, _, Small>(&source).is_err());
        assert!(to_optional_cloned::<Base, _, Small>(&source).unwrap().is_none());

        let source: OptionalUnion<Base, WithPanic> = source.into_optional();
        assert!(to_optional_cloned::<Base, _, Small>(&source).is_err());
    }

    #[test]
    fn test_cloned_conversion_leaves_source_intact() {
        let source: Union<Base, Small> = Union::new(child());
        let copy: Large = to_required_cloned::<Base, _, _>(&source).unwrap();
        assert_eq!(copy.active_index(), 1);
        assert_eq!(source.get::<Child, _>(), Ok(&child()));
    }

    #[test]
    fn test_container_impls() {
        static_assertions::assert_impl_all!(Union<Base, Small>: Container<Base>);
        static_assertions::assert_impl_all!(OptionalUnion<Base, Small>: Container<Base>);
        static_assertions::assert_not_impl_any!(Small: Container<Base>);
    }
}
