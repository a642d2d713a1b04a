//! Checked size arithmetic for backing allocations.

use crate::error::ArrayError;

/// Maximum backing allocation in bytes: the platform's signed size limit.
pub const MAX_BYTE_SIZE: usize = isize::MAX as usize;

/// Multiply two size factors, failing when the product exceeds
/// [`MAX_BYTE_SIZE`].
///
/// Guards both capacity products: element count times per-element byte
/// size, and current capacity times growth factor. The failure carries the
/// operands and happens before any array state is touched.
pub fn checked_size_mul(count: usize, multiplier: usize) -> Result<usize, ArrayError> {
    match count.checked_mul(multiplier) {
        Some(total) if total <= MAX_BYTE_SIZE => Ok(total),
        _ => Err(ArrayError::CapacityOverflow { count, multiplier }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn small_products_pass_through() {
        assert_eq!(checked_size_mul(16, 8), Ok(128));
        assert_eq!(checked_size_mul(0, 8), Ok(0));
    }

    #[test]
    fn exactly_max_is_allowed() {
        assert_eq!(checked_size_mul(MAX_BYTE_SIZE, 1), Ok(MAX_BYTE_SIZE));
    }

    #[test]
    fn one_past_max_is_rejected() {
        let err = checked_size_mul(MAX_BYTE_SIZE / 2 + 1, 2).unwrap_err();
        assert!(matches!(err, ArrayError::CapacityOverflow { .. }));
    }

    #[test]
    fn wrapping_products_are_rejected() {
        let err = checked_size_mul(usize::MAX, 2).unwrap_err();
        assert_eq!(
            err,
            ArrayError::CapacityOverflow {
                count: usize::MAX,
                multiplier: 2,
            }
        );
    }

    proptest! {
        #[test]
        fn ok_iff_product_fits(count in any::<usize>(), multiplier in any::<usize>()) {
            let expected = count
                .checked_mul(multiplier)
                .filter(|&total| total <= MAX_BYTE_SIZE);
            prop_assert_eq!(checked_size_mul(count, multiplier).ok(), expected);
        }
    }
}
