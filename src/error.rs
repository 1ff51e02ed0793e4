//! Errors returned by the union containers.
//!
//! There are exactly two kinds of failure:
//!
//! - [`InvalidConversion`]: a cross-list construction or assignment was
//!   refused, either because the source's active alternative is not listed
//!   in the destination, or because an empty [`OptionalUnion`] was used to
//!   build a [`Union`].
//! - [`BadAlternativeAccess`]: a typed accessor asked for an alternative that
//!   is not the active one.
//!
//! Both are reported synchronously by the operation that failed. A failed
//! conversion never modifies its destination, and a conversion that consumed
//! its source hands it back through [`InvalidConversion::into_source`].
//!
//! [`OptionalUnion`]: crate::OptionalUnion
//! [`Union`]: crate::Union

use core::fmt;

/// Why a cross-list conversion was refused.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum ConversionFailure {
    /// The source was an empty [`OptionalUnion`](crate::OptionalUnion) and
    /// the destination is a [`Union`](crate::Union), which cannot be empty.
    EmptySource,
    /// The source's active alternative is not one of the destination's
    /// alternatives.
    NotListed {
        /// Name of the source's active alternative.
        type_name: &'static str,
    },
}

/// Error returned when a union cannot be built from, or assigned from,
/// another union container.
///
/// When the conversion consumed its source, the source is carried back
/// unchanged in `S` and can be recovered with [`into_source`]. Conversions
/// that only borrowed their source use the default `S = ()`.
///
/// # Examples
///
/// ```
/// use anyof::{ConversionFailure, Union, alternatives, impl_upcast};
///
/// #[derive(Debug, PartialEq)]
/// struct Base(u32);
///
/// #[derive(Debug, PartialEq)]
/// struct Extended {
///     base: Base,
/// }
///
/// impl_upcast!(Base: Extended => base);
///
/// type Narrow = Union<Base, alternatives![Base]>;
/// type Wide = Union<Base, alternatives![Base, Extended]>;
///
/// let wide = Wide::new(Extended { base: Base(7) });
/// let error = Narrow::try_from_container(wide).unwrap_err();
/// assert!(matches!(error.reason(), ConversionFailure::NotListed { .. }));
///
/// // The source is handed back untouched
/// let wide: Wide = error.into_source();
/// assert_eq!(wide.get::<Extended, _>(), Ok(&Extended { base: Base(7) }));
/// ```
///
/// [`into_source`]: InvalidConversion::into_source
pub struct InvalidConversion<S = ()> {
    /// The source of the refused conversion.
    source: S,
    /// Why the conversion was refused.
    reason: ConversionFailure,
}

impl<S> InvalidConversion<S> {
    pub(crate) fn empty_source(source: S) -> Self {
        Self {
            source,
            reason: ConversionFailure::EmptySource,
        }
    }

    pub(crate) fn not_listed(source: S, type_name: &'static str) -> Self {
        Self {
            source,
            reason: ConversionFailure::NotListed { type_name },
        }
    }

    /// Returns why the conversion was refused.
    #[must_use]
    pub fn reason(&self) -> ConversionFailure {
        self.reason
    }

    /// Returns the name of the alternative that could not be converted, or
    /// `None` if the source was empty.
    #[must_use]
    pub fn type_name(&self) -> Option<&'static str> {
        match self.reason {
            ConversionFailure::EmptySource => None,
            ConversionFailure::NotListed { type_name } => Some(type_name),
        }
    }

    /// Returns the source of the refused conversion.
    #[must_use]
    pub fn into_source(self) -> S {
        self.source
    }

    /// Drops the carried source, keeping only the failure reason.
    ///
    /// This is useful to propagate the error out of a scope that should not
    /// be generic over the source type.
    #[must_use]
    pub fn without_source(self) -> InvalidConversion {
        InvalidConversion {
            source: (),
            reason: self.reason,
        }
    }
}

impl<S> fmt::Debug for InvalidConversion<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InvalidConversion")
            .field("reason", &self.reason)
            .finish_non_exhaustive()
    }
}

impl<S> fmt::Display for InvalidConversion<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reason {
            ConversionFailure::EmptySource => {
                write!(f, "invalid conversion: an empty optional union cannot become a union")
            }
            ConversionFailure::NotListed { type_name } => write!(
                f,
                "invalid conversion: alternative `{type_name}` is not listed in the destination"
            ),
        }
    }
}

impl<S> core::error::Error for InvalidConversion<S> {}

/// Error returned by [`Union::get`](crate::Union::get) and
/// [`OptionalUnion::get`](crate::OptionalUnion::get) when the requested
/// alternative is not the active one.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub struct BadAlternativeAccess {
    /// Name of the requested alternative.
    expected: &'static str,
    /// Name of the active alternative, `None` when the container is empty.
    found: Option<&'static str>,
}

impl BadAlternativeAccess {
    pub(crate) fn new(expected: &'static str, found: Option<&'static str>) -> Self {
        Self { expected, found }
    }

    /// Returns the name of the requested alternative.
    #[must_use]
    pub fn expected(&self) -> &'static str {
        self.expected
    }

    /// Returns the name of the active alternative, or `None` if the
    /// container was empty.
    #[must_use]
    pub fn found(&self) -> Option<&'static str> {
        self.found
    }
}

impl fmt::Display for BadAlternativeAccess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.found {
            Some(found) => write!(
                f,
                "bad alternative access: requested `{}` but the active alternative is `{found}`",
                self.expected
            ),
            None => write!(
                f,
                "bad alternative access: requested `{}` but the container is empty",
                self.expected
            ),
        }
    }
}

impl core::error::Error for BadAlternativeAccess {}
