//! Internal utility functions.

use core::{any::TypeId, mem::ManuallyDrop};

/// Moves `value` into a `U` if `T` and `U` are the same type.
///
/// Returns the untouched value in `Err` otherwise. The comparison is between
/// two [`TypeId`] constants, so after monomorphization the branch is resolved
/// at compile time and the successful path is a plain move.
#[inline]
pub(crate) fn cast<T: 'static, U: 'static>(value: T) -> Result<U, T> {
    if TypeId::of::<T>() != TypeId::of::<U>() {
        return Err(value);
    }

    let value = ManuallyDrop::new(value);

    // SAFETY:
    // 1. `T` and `U` have the same `TypeId`, so they are the same type and
    //    have the same size, alignment and validity invariants.
    // 2. `value` is wrapped in `ManuallyDrop`, so ownership moves into the
    //    returned `U` and the original is never dropped.
    let value = unsafe { core::mem::transmute_copy::<ManuallyDrop<T>, U>(&value) };
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cast_same_type() {
        assert_eq!(cast::<u32, u32>(7), Ok(7));
    }

    #[test]
    fn test_cast_different_type() {
        assert_eq!(cast::<u32, i32>(7), Err(7));
        assert_eq!(cast::<u8, u16>(1), Err(1));
    }
}
