//! Marker types used in the typed accessor API.
//!
//! # Position witnesses
//!
//! Every typed accessor, such as [`Union::get`](crate::Union::get), takes two
//! type parameters: the requested alternative `T` and a position witness `I`.
//! The witness is built from [`Here`] and [`There`] and proves at compile
//! time that `T` is one of the container's alternatives. You never need to
//! name it; write `_` and the compiler infers the only witness that exists:
//!
//! ```
//! use anyof::{Union, alternatives};
//!
//! let union: Union<u8, alternatives![u8]> = Union::new(4u8);
//! assert!(union.is::<u8, _>());
//! ```
//!
//! Requesting a type that is not in the list leaves the compiler without a
//! witness:
//!
//! ```compile_fail
//! use anyof::{Union, alternatives};
//!
//! let union: Union<u8, alternatives![u8]> = Union::new(4u8);
//! union.is::<u16, _>(); // ❌ `u16` is not an alternative
//! ```
//!
//! # The empty state
//!
//! [`Empty`] stands for the empty state of an
//! [`OptionalUnion`](crate::OptionalUnion) in the same accessors that name
//! alternatives:
//!
//! ```
//! use anyof::{OptionalUnion, alternatives, markers::Empty};
//!
//! let optional: OptionalUnion<u8, alternatives![u8]> = OptionalUnion::empty();
//! assert!(optional.is::<Empty, _>());
//! assert!(!optional.is::<u8, _>());
//! ```

pub use anyof_internals::{Here, There};

/// Marker type for the empty state of an
/// [`OptionalUnion`](crate::OptionalUnion).
///
/// `Empty` is never stored. It can be requested through
/// [`OptionalUnion::is`](crate::OptionalUnion::is),
/// [`OptionalUnion::get`](crate::OptionalUnion::get) and
/// [`OptionalUnion::get_if`](crate::OptionalUnion::get_if), which report the
/// empty state as if it were an extra alternative placed before all others.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Default, Hash)]
pub struct Empty;
