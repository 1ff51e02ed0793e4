/// The is-a relation between an alternative and the common base `B`.
///
/// Every alternative of a [`Union<B, _>`](crate::Union) must implement
/// `Upcast<B>`, which lets the containers hand out a `&B` view of whatever
/// alternative is active. The relation is only used for that view: container
/// membership always compares exact types, so an alternative is never
/// substituted for another one it upcasts to.
///
/// Every type is its own base, so the base itself can always be listed as an
/// alternative. For other alternatives, use [`impl_upcast!`](crate::impl_upcast)
/// or implement the trait by hand.
///
/// # Examples
///
/// A trait-object base:
///
/// ```
/// use anyof::{Upcast, impl_upcast};
///
/// trait Shape {
///     fn area(&self) -> f64;
/// }
///
/// struct Square(f64);
///
/// impl Shape for Square {
///     fn area(&self) -> f64 {
///         self.0 * self.0
///     }
/// }
///
/// impl_upcast!(dyn Shape: Square);
///
/// let square = Square(2.0);
/// let shape: &dyn Shape = square.upcast();
/// assert_eq!(shape.area(), 4.0);
/// ```
///
/// A struct base reached through a field:
///
/// ```
/// use anyof::Upcast;
///
/// struct Base {
///     value: i32,
/// }
///
/// struct Derived {
///     base: Base,
///     extra: bool,
/// }
///
/// impl Upcast<Base> for Derived {
///     fn upcast(&self) -> &Base {
///         &self.base
///     }
///
///     fn upcast_mut(&mut self) -> &mut Base {
///         &mut self.base
///     }
/// }
///
/// let derived = Derived { base: Base { value: 3 }, extra: true };
/// let base: &Base = derived.upcast();
/// assert_eq!(base.value, 3);
/// ```
pub trait Upcast<B: ?Sized> {
    /// Returns the base view of `self`.
    fn upcast(&self) -> &B;

    /// Returns the mutable base view of `self`.
    fn upcast_mut(&mut self) -> &mut B;
}

impl<T> Upcast<T> for T {
    #[inline(always)]
    fn upcast(&self) -> &T {
        self
    }

    #[inline(always)]
    fn upcast_mut(&mut self) -> &mut T {
        self
    }
}
