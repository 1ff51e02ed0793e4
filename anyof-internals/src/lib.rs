#![no_std]
#![forbid(
    missing_docs,
    clippy::alloc_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::std_instead_of_core,
    clippy::missing_safety_doc,
    clippy::missing_docs_in_private_items,
    clippy::undocumented_unsafe_blocks,
    clippy::multiple_unsafe_ops_per_block,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::broken_intra_doc_links,
    missing_copy_implementations,
    unused_doc_comments
)]
#![allow(rustdoc::private_intra_doc_links)]
//! Internal implementation crate for [`anyof`].
//!
//! # Overview
//!
//! This crate contains the type-level machinery that powers the [`anyof`]
//! union containers: the alternative list itself, the witnesses used to prove
//! at compile time that a type belongs to a list, and the runtime transfer of
//! a value between two lists that happen to share its type.
//!
//! **This crate is an implementation detail.** No semantic versioning
//! guarantees are provided. Users should depend on the [`anyof`] crate, not
//! this one.
//!
//! # Architecture
//!
//! - **[`list`]**: The alternative list and its storage
//!   - [`Cons`] / [`Nil`]: A cons list of types. A *value* of the list type
//!     holds exactly one live alternative, so the list doubles as the
//!     in-place storage of a union.
//!   - [`TypeList`]: Runtime queries on the active alternative and the
//!     cross-list [`transfer`](TypeList::transfer).
//!
//! - **[`member`]**: Compile-time membership
//!   - [`Member`]: Implemented by a list for every type it contains, keyed by
//!     an inferred position witness.
//!   - [`Here`] / [`There`]: The position witnesses.
//!
//! # Safety Strategy
//!
//! Moving a value from one list into another requires turning a `T` into a
//! `U` once we know they are the same type. This crate performs that step in
//! exactly one place, [`util::cast`], which compares [`TypeId`]s before
//! reinterpreting the value. Everything else in the crate is safe code built
//! on top of it.
//!
//! [`anyof`]: https://docs.rs/anyof/latest/anyof/
//! [`TypeId`]: core::any::TypeId

mod list;
mod member;
mod util;

pub use list::{Cons, Nil, TypeList};
pub use member::{Here, Member, There};
