//! Commonly used items for convenient importing.
//!
//! The prelude module re-exports the containers, the traits whose methods
//! they rely on, and the macros that declare alternative lists. This allows
//! you to import everything you need with a single use statement.
//!
//! # Usage
//!
//! ```rust
//! use anyof::prelude::*;
//!
//! #[derive(Default, Debug, PartialEq)]
//! struct Base(u8);
//! #[derive(Debug, PartialEq)]
//! struct Child(Base);
//!
//! impl_upcast!(Base: Child => 0);
//!
//! let mut union: Union<Base, alternatives![Base, Child]> = Union::default();
//! union.set(Child(Base(3)));
//! assert_eq!(union.as_base(), &Base(3));
//! assert!(union.get::<Base, _>().is_err());
//! ```
//!
//! # What's Included
//!
//! - **[`Union`]** and **[`OptionalUnion`]**: The containers
//! - **[`Upcast`]**: The is-a relation between alternatives and their base
//! - **[`alternatives!`]** and **[`impl_upcast!`]**: Macros to declare
//!   alternative lists and their base
//! - **[`InvalidConversion`]** and **[`BadAlternativeAccess`]**: The errors
//! - **[`markers`]**: Position witnesses and the [`Empty`](markers::Empty)
//!   marker

pub use crate::{
    BadAlternativeAccess, InvalidConversion, OptionalUnion, Union, Upcast, alternatives,
    impl_upcast, markers,
};
