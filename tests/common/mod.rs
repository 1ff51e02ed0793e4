//! Shared fixtures: a small family of types built around `Base`.
//!
//! ```text
//! Base
//! ├── Dep1
//! │   └── Dep11
//! ├── Dep2
//! └── Dep3
//! ```
//!
//! `Dep11` embeds a `Dep1`, so it upcasts to `Base` through `Dep1`, but it is
//! only listed in `AnyDep`.

#![allow(dead_code)]

use anyof::{OptionalUnion, Union, alternatives, impl_upcast};

#[derive(Clone, Debug, PartialEq, Eq, Hash, derive_more::Display)]
#[display("base({value})")]
pub struct Base {
    value: i32,
}

impl Base {
    pub fn new(value: i32) -> Self {
        Self { value }
    }

    pub fn value(&self) -> i32 {
        self.value
    }
}

impl Default for Base {
    fn default() -> Self {
        Self::new(0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Dep1 {
    base: Base,
}

impl Dep1 {
    pub fn value(&self) -> i32 {
        self.base.value()
    }
}

impl Default for Dep1 {
    fn default() -> Self {
        Self::from(1)
    }
}

impl From<i32> for Dep1 {
    fn from(value: i32) -> Self {
        Self {
            base: Base::new(value),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Dep11 {
    dep1: Dep1,
}

impl Dep11 {
    pub fn value(&self) -> i32 {
        self.dep1.value()
    }
}

impl Default for Dep11 {
    fn default() -> Self {
        Self::from(11)
    }
}

impl From<i32> for Dep11 {
    fn from(value: i32) -> Self {
        Self {
            dep1: Dep1::from(value),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Dep2 {
    base: Base,
}

impl Dep2 {
    pub fn value(&self) -> i32 {
        self.base.value()
    }
}

impl Default for Dep2 {
    fn default() -> Self {
        Self::from(2)
    }
}

impl From<i32> for Dep2 {
    fn from(value: i32) -> Self {
        Self {
            base: Base::new(value),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Dep3 {
    base: Base,
}

impl Dep3 {
    pub fn value(&self) -> i32 {
        self.base.value()
    }
}

impl Default for Dep3 {
    fn default() -> Self {
        Self::from(3)
    }
}

impl From<i32> for Dep3 {
    fn from(value: i32) -> Self {
        Self {
            base: Base::new(value),
        }
    }
}

impl_upcast!(
    Base: Dep1 => base,
    Dep11 => dep1.base,
    Dep2 => base,
    Dep3 => base,
);

impl_upcast!(Dep1: Dep11 => dep1);

pub type DepList = alternatives![Base, Dep1, Dep11, Dep2];
pub type OtherDepList = alternatives![Base, Dep1, Dep2, Dep3];

pub type AnyDep = Union<Base, DepList>;
pub type AnyOtherDep = Union<Base, OtherDepList>;
pub type OptDep = OptionalUnion<Base, DepList>;
pub type OptOtherDep = OptionalUnion<Base, OtherDepList>;

pub fn type_name<T>() -> &'static str {
    core::any::type_name::<T>()
}
