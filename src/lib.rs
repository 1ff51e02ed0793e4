#![cfg_attr(not(doc), no_std)]
#![deny(
    missing_docs,
    unsafe_code,
    clippy::alloc_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::std_instead_of_core,
    clippy::missing_safety_doc,
    clippy::undocumented_unsafe_blocks,
    clippy::multiple_unsafe_ops_per_block,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::broken_intra_doc_links,
    missing_copy_implementations,
    unused_doc_comments
)]
// Extra checks on nightly
#![cfg_attr(nightly_extra_checks, feature(rustdoc_missing_doc_code_examples))]
#![cfg_attr(nightly_extra_checks, forbid(rustdoc::missing_doc_code_examples))]
// Make docs.rs generate better docs
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Closed-set unions over a common base type.
//!
//! ## Overview
//!
//! This crate provides two containers that hold one value out of an explicit
//! list of alternative types, where every alternative *is-a* common base type
//! `B`:
//!
//! - [`Union<B, L>`] always holds exactly one alternative. It starts out
//!   holding the default value of the first alternative.
//! - [`OptionalUnion<B, L>`] holds one alternative or nothing. It starts out
//!   empty.
//!
//! The alternatives are stored in place, with no allocation. Whatever the
//! active alternative is, the container can be viewed as a `&B`.
//!
//! ## Quick Example
//!
//! ```
//! use anyof::{OptionalUnion, Union, alternatives, impl_upcast};
//!
//! trait Shape {
//!     fn area(&self) -> f64;
//! }
//!
//! #[derive(Default, Clone)]
//! struct Circle(f64);
//! #[derive(Clone)]
//! struct Square(f64);
//! #[derive(Clone)]
//! struct Triangle(f64, f64);
//!
//! impl Shape for Circle {
//!     fn area(&self) -> f64 {
//!         3.0 * self.0 * self.0
//!     }
//! }
//!
//! impl Shape for Square {
//!     fn area(&self) -> f64 {
//!         self.0 * self.0
//!     }
//! }
//!
//! impl Shape for Triangle {
//!     fn area(&self) -> f64 {
//!         self.0 * self.1 / 2.0
//!     }
//! }
//!
//! impl_upcast!(dyn Shape: Circle, Square, Triangle);
//!
//! type Rounded = Union<dyn Shape, alternatives![Circle, Square]>;
//! type Pointy = Union<dyn Shape, alternatives![Square, Triangle]>;
//!
//! let mut shape = Rounded::default();
//! assert_eq!(shape.area(), 0.0);
//!
//! shape.set(Square(2.0));
//! assert_eq!(shape.area(), 4.0);
//!
//! // `Square` is listed in both: the conversion succeeds
//! let pointy = Pointy::try_from_container_ref(&shape).unwrap();
//! assert_eq!(pointy.index(), 0);
//!
//! // `Triangle` is not listed in `Rounded`: the conversion fails...
//! let triangle = Pointy::new(Triangle(2.0, 3.0));
//! assert!(Rounded::try_from_container_ref(&triangle).is_err());
//!
//! // ...unless the destination can be left empty
//! let maybe = OptionalUnion::<dyn Shape, alternatives![Circle, Square]>::try_from_container(triangle);
//! assert!(maybe.unwrap().is_empty());
//! ```
//!
//! ## Core Concepts
//!
//! An **alternative list** is written with [`alternatives!`] and names the
//! types a container may hold, in order. The first one is the *default
//! alternative*. A type that is not in the list cannot be stored, and asking
//! for it through the typed accessors ([`Union::is`], [`Union::get`],
//! [`Union::set`], ...) is a compile error.
//!
//! The **base** `B` is related to every alternative through [`Upcast<B>`].
//! The base can be a struct that the alternatives embed, or a trait object
//! that they implement; [`impl_upcast!`] covers both cases.
//!
//! Containers with **different alternative lists** over the same base can be
//! converted into each other. Whether such a conversion succeeds is decided at
//! runtime by the source's active alternative, and only its exact type
//! counts: an alternative that merely upcasts to a listed type is not
//! accepted in its place. The [`convert`] module describes the full rules,
//! including when an [`OptionalUnion`] is left empty instead of failing.
//!
//! ## Errors
//!
//! Refused conversions return an [`InvalidConversion`], which carries the
//! moved source back to the caller. Typed access to an inactive alternative
//! returns a [`BadAlternativeAccess`]. Both implement
//! [`core::error::Error`].
//!
//! ## Features
//!
//! - `tracing`: emits `trace`-level [`tracing`](https://docs.rs/tracing)
//!   events when a conversion is refused, or when an unlisted alternative
//!   leaves an [`OptionalUnion`] empty.
//!
//! ## Project Structure
//!
//! The type-level list machinery lives in the `anyof-internals` crate, which
//! holds the only `unsafe` code of the project. This crate builds the public
//! containers on top of it.

#[cfg(test)]
extern crate alloc;

#[macro_use]
mod macros;

pub mod alternatives;
pub mod convert;
pub mod markers;
pub mod prelude;

mod error;
mod optional_union;
mod union;
mod upcast;

pub use self::{
    convert::{Container, ContainerKind},
    error::{BadAlternativeAccess, ConversionFailure, InvalidConversion},
    optional_union::OptionalUnion,
    union::Union,
    upcast::Upcast,
};
