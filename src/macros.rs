/// Builds an alternative list type from a list of types.
///
/// `alternatives![T0, T1, T2]` expands to
/// `Cons<T0, Cons<T1, Cons<T2, Nil>>>`. The first type is the default
/// alternative of a [`Union`](crate::Union). The macro is usable anywhere a
/// type is expected.
///
/// # Examples
///
/// ```
/// use anyof::{Union, alternatives};
///
/// type Number = Union<u64, alternatives![u64]>;
///
/// let number = Number::default();
/// assert_eq!(*number, 0);
/// ```
#[macro_export]
macro_rules! alternatives {
    () => {
        $crate::alternatives::Nil
    };
    ($head:ty $(, $tail:ty)* $(,)?) => {
        $crate::alternatives::Cons<$head, $crate::alternatives![$($tail),*]>
    };
}

/// Implements [`Upcast`](crate::Upcast) for a list of alternatives.
///
/// The macro has two forms.
///
/// ## Trait-object bases
///
/// `impl_upcast!(dyn Trait: A, B, C)` implements `Upcast<dyn Trait>` for each
/// listed type through an unsizing coercion. Each listed type must implement
/// `Trait`.
///
/// ```
/// use anyof::{Union, alternatives, impl_upcast};
///
/// trait Animal {
///     fn name(&self) -> &'static str;
/// }
///
/// #[derive(Default)]
/// struct Cat;
/// struct Dog;
///
/// impl Animal for Cat {
///     fn name(&self) -> &'static str {
///         "cat"
///     }
/// }
///
/// impl Animal for Dog {
///     fn name(&self) -> &'static str {
///         "dog"
///     }
/// }
///
/// impl_upcast!(dyn Animal: Cat, Dog);
///
/// let mut pet: Union<dyn Animal, alternatives![Cat, Dog]> = Union::default();
/// assert_eq!(pet.name(), "cat");
/// pet.set(Dog);
/// assert_eq!(pet.name(), "dog");
/// ```
///
/// ## Struct bases
///
/// `impl_upcast!(Base: A => base, B => a.base)` implements `Upcast<Base>` for
/// each listed type by projecting to the given field path.
///
/// ```
/// use anyof::{Upcast, impl_upcast};
///
/// struct Base(u8);
/// struct Child {
///     base: Base,
/// }
/// struct GrandChild {
///     child: Child,
/// }
///
/// impl_upcast!(Base: Child => base, GrandChild => child.base);
///
/// let grand_child = GrandChild { child: Child { base: Base(3) } };
/// let base: &Base = grand_child.upcast();
/// assert_eq!(base.0, 3);
/// ```
#[macro_export]
macro_rules! impl_upcast {
    (dyn $base:path: $($alternative:ty),+ $(,)?) => {
        $(
            impl $crate::Upcast<dyn $base> for $alternative {
                #[inline]
                fn upcast(&self) -> &(dyn $base + 'static) {
                    self
                }

                #[inline]
                fn upcast_mut(&mut self) -> &mut (dyn $base + 'static) {
                    self
                }
            }
        )+
    };
    ($base:ty: $($alternative:ty => $($field:tt).+),+ $(,)?) => {
        $(
            impl $crate::Upcast<$base> for $alternative {
                #[inline]
                fn upcast(&self) -> &$base {
                    &self $(.$field)+
                }

                #[inline]
                fn upcast_mut(&mut self) -> &mut $base {
                    &mut self $(.$field)+
                }
            }
        )+
    };
}
