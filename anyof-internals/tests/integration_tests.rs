//! Integration tests for the alternative lists of anyof-internals.
//!
//! The tests cover:
//!
//! - Compile-time positions reported by [`Member`]
//! - Runtime queries on the active alternative ([`TypeList`])
//! - Cross-list transfer, including lists that share a type at different
//!   positions and types that are related only by composition
//! - Drop behavior: a value moved between lists is dropped exactly once, and
//!   a refused transfer hands the value back without dropping it

use std::{
    any::{TypeId, type_name},
    cell::Cell,
    rc::Rc,
};

use anyof_internals::{Cons, Here, Member, Nil, There, TypeList};

#[derive(Debug, PartialEq)]
struct Base(i32);

#[derive(Debug, PartialEq)]
struct Dep1(Base);

#[derive(Debug, PartialEq)]
struct Dep11(Dep1);

#[derive(Debug, PartialEq)]
struct Dep2(Base);

#[derive(Debug, PartialEq)]
struct Dep3(Base);

type Deps = Cons<Base, Cons<Dep1, Cons<Dep11, Cons<Dep2, Nil>>>>;
type OtherDeps = Cons<Base, Cons<Dep1, Cons<Dep2, Cons<Dep3, Nil>>>>;

fn position<L, T, I>() -> usize
where
    L: Member<T, I>,
{
    L::POSITION
}

#[test]
fn test_member_positions() {
    assert_eq!(position::<Deps, Base, _>(), 0);
    assert_eq!(position::<Deps, Dep1, _>(), 1);
    assert_eq!(position::<Deps, Dep11, _>(), 2);
    assert_eq!(position::<Deps, Dep2, _>(), 3);

    assert_eq!(position::<OtherDeps, Dep2, _>(), 2);
    assert_eq!(position::<OtherDeps, Dep3, _>(), 3);

    // The witness can also be spelled out
    assert_eq!(position::<OtherDeps, Dep1, There<Here>>(), 1);
}

#[test]
fn test_active_alternative_queries() {
    let list = <Deps as Member<Dep11, _>>::from_member(Dep11(Dep1(Base(11))));

    assert_eq!(list.active_index(), 2);
    assert_eq!(list.active_type_id(), TypeId::of::<Dep11>());
    assert_eq!(list.active_type_name(), type_name::<Dep11>());
    assert_eq!(
        list.active_as_any().downcast_ref::<Dep11>(),
        Some(&Dep11(Dep1(Base(11))))
    );
    assert!(list.active_as_any().downcast_ref::<Dep1>().is_none());

    assert_eq!(<Deps as Member<Dep11, _>>::get_member(&list).map(|d| &(d.0).0), Some(&Base(11)));
    assert!(<Deps as Member<Dep1, _>>::get_member(&list).is_none());
}

#[test]
fn test_get_member_mut_and_take() {
    let mut list = <Deps as Member<Dep2, _>>::from_member(Dep2(Base(2)));

    if let Some(dep2) = <Deps as Member<Dep2, _>>::get_member_mut(&mut list) {
        dep2.0 = Base(20);
    }

    let list = <Deps as Member<Base, _>>::take_member(list).unwrap_err();
    let dep2 = <Deps as Member<Dep2, _>>::take_member(list).unwrap();
    assert_eq!(dep2, Dep2(Base(20)));
}

#[test]
fn test_position_of_and_contains() {
    assert_eq!(Deps::position_of(TypeId::of::<Dep2>()), Some(3));
    assert_eq!(OtherDeps::position_of(TypeId::of::<Dep2>()), Some(2));
    assert_eq!(OtherDeps::position_of(TypeId::of::<Dep11>()), None);
    assert_eq!(Nil::position_of(TypeId::of::<Base>()), None);

    assert!(Deps::contains::<Dep11>());
    assert!(!OtherDeps::contains::<Dep11>());
    assert!(!Deps::contains::<u32>());
}

#[test]
fn test_inject() {
    let list = Deps::inject(Dep2(Base(4))).unwrap();
    assert_eq!(list.active_index(), 3);

    let refused = OtherDeps::inject(Dep11(Dep1(Base(11)))).unwrap_err();
    assert_eq!(refused, Dep11(Dep1(Base(11))));

    assert_eq!(Nil::inject(5u8).unwrap_err(), 5u8);
}

#[test]
fn test_transfer_compatible() {
    let list = <Deps as Member<Dep2, _>>::from_member(Dep2(Base(2)));
    assert_eq!(list.active_index(), 3);

    let other: OtherDeps = list.transfer().unwrap();
    assert_eq!(other.active_index(), 2);
    assert_eq!(
        <OtherDeps as Member<Dep2, _>>::get_member(&other),
        Some(&Dep2(Base(2)))
    );
}

#[test]
fn test_transfer_exact_type_only() {
    // `Dep11` wraps a `Dep1`, but only the exact type is looked up.
    let list = <Deps as Member<Dep11, _>>::from_member(Dep11(Dep1(Base(11))));
    let list = list.transfer::<OtherDeps>().unwrap_err();
    assert_eq!(list.active_index(), 2);
    assert_eq!(
        <Deps as Member<Dep11, _>>::get_member(&list),
        Some(&Dep11(Dep1(Base(11))))
    );
}

#[test]
fn test_fits_exact_type_only() {
    let dep11 = <Deps as Member<Dep11, _>>::from_member(Dep11(Dep1(Base(11))));
    assert!(!dep11.fits::<OtherDeps>());
    assert!(dep11.fits::<Deps>());

    let dep2 = <Deps as Member<Dep2, _>>::from_member(Dep2(Base(2)));
    assert!(dep2.fits::<OtherDeps>());
    assert_eq!(dep2.transfer::<OtherDeps>().unwrap().active_index(), 2);
}

#[test]
fn test_transfer_same_list() {
    let list = <Deps as Member<Dep1, _>>::from_member(Dep1(Base(1)));
    let same: Deps = list.transfer().unwrap();
    assert_eq!(same.active_index(), 1);
}

struct DropCounter(Rc<Cell<usize>>);

impl Drop for DropCounter {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}

type WithCounter = Cons<u8, Cons<DropCounter, Nil>>;
type CounterFirst = Cons<DropCounter, Nil>;
type WithoutCounter = Cons<u8, Cons<u16, Nil>>;

#[test]
fn test_transfer_drops_exactly_once() {
    let drops = Rc::new(Cell::new(0));

    let list = <WithCounter as Member<DropCounter, _>>::from_member(DropCounter(drops.clone()));
    let moved: CounterFirst = list.transfer().unwrap_or_else(|_| panic!("transfer failed"));
    assert_eq!(drops.get(), 0);
    assert_eq!(moved.active_index(), 0);

    drop(moved);
    assert_eq!(drops.get(), 1);
}

#[test]
fn test_refused_transfer_does_not_drop() {
    let drops = Rc::new(Cell::new(0));

    let list = <WithCounter as Member<DropCounter, _>>::from_member(DropCounter(drops.clone()));
    let list = match list.transfer::<WithoutCounter>() {
        Ok(_) => panic!("`DropCounter` is not listed in the destination"),
        Err(list) => list,
    };
    assert_eq!(drops.get(), 0);
    assert_eq!(list.active_index(), 1);

    drop(list);
    assert_eq!(drops.get(), 1);
}

#[test]
fn test_debug_forwards_to_active_alternative() {
    let list = <Deps as Member<Dep2, _>>::from_member(Dep2(Base(2)));
    assert_eq!(format!("{list:?}"), "Dep2(Base(2))");
}

#[test]
fn test_default_activates_first_alternative() {
    let list = <Cons<u32, Cons<String, Nil>>>::default();
    assert_eq!(list.active_index(), 0);
    assert_eq!(list, Cons::Head(0));
}
