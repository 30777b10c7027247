//! Index arithmetic for ordered window and tab collections.

/// Index at `shift` steps from `current`, wrapping around both ends.
/// Returns `None` for an empty collection.
#[must_use]
pub fn wrapping_index(len: usize, current: usize, shift: i64) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let len = len as i64;
    let shifted = (current as i64 + shift).rem_euclid(len);
    Some(shifted as usize)
}

/// Recompute a "current" index after removing `removed` from a collection
/// that now holds `len` items.
#[must_use]
pub fn index_after_removal(len: usize, current: Option<usize>, removed: usize) -> Option<usize> {
    let current = current?;
    if len == 0 {
        return None;
    }
    let shifted = if current > removed { current - 1 } else { current };
    Some(shifted.min(len - 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapping_index_wraps_both_directions() {
        assert_eq!(wrapping_index(3, 2, 1), Some(0));
        assert_eq!(wrapping_index(3, 0, -1), Some(2));
        assert_eq!(wrapping_index(3, 1, 0), Some(1));
        assert_eq!(wrapping_index(3, 0, 7), Some(1));
        assert_eq!(wrapping_index(0, 0, 1), None);
    }

    #[test]
    fn index_after_removal_tracks_the_gap() {
        // removing before the current item shifts it left
        assert_eq!(index_after_removal(3, Some(2), 0), Some(1));
        // removing after leaves it alone
        assert_eq!(index_after_removal(3, Some(0), 2), Some(0));
        // removing the last current clamps to the new end
        assert_eq!(index_after_removal(2, Some(2), 2), Some(1));
        assert_eq!(index_after_removal(0, Some(0), 0), None);
    }
}
