//! Ordered-collection removal utilities.
//!
//! Lore lines, book pages, firework effects and banner patterns are all
//! ordered sequences. Removal never leaves a sequence partially updated:
//! [`remove_indices`] works on a copy and only returns it when every index
//! was applied.

use std::collections::HashSet;

use crate::error::DomainError;

/// Returns true if `indices` contains the same value more than once.
///
/// # Examples
///
/// ```
/// use itemforge_domain::common::contains_duplicates;
///
/// assert!(contains_duplicates(&[1, 3, 1]));
/// assert!(!contains_duplicates(&[0, 2, 1]));
/// assert!(!contains_duplicates(&[]));
/// ```
pub fn contains_duplicates(indices: &[usize]) -> bool {
    let mut seen = HashSet::with_capacity(indices.len());
    indices.iter().any(|index| !seen.insert(*index))
}

/// Sorts indices largest first.
///
/// Removing in this order means no removal shifts the position of an index
/// that has not been processed yet.
pub fn sort_descending(indices: &mut [usize]) {
    indices.sort_unstable_by(|a, b| b.cmp(a));
}

/// Returns a copy of `entries` with the entries at `indices` removed.
///
/// Indices are zero-based and may be given in any order. The remaining
/// entries keep their relative order.
///
/// # Errors
///
/// Returns [`DomainError::Validation`] when `indices` contains a duplicate or
/// an index outside `entries`. `entries` is never modified.
///
/// # Examples
///
/// ```
/// use itemforge_domain::common::remove_indices;
///
/// let lore = vec!["a", "b", "c", "d"];
/// assert_eq!(remove_indices(&lore, &[3, 1]).unwrap(), vec!["a", "c"]);
/// assert!(remove_indices(&lore, &[1, 1]).is_err());
/// ```
pub fn remove_indices<T: Clone>(entries: &[T], indices: &[usize]) -> Result<Vec<T>, DomainError> {
    if contains_duplicates(indices) {
        return Err(DomainError::validation(
            "Index list cannot contain duplicate values",
        ));
    }
    if let Some(index) = indices.iter().find(|index| **index >= entries.len()) {
        return Err(DomainError::validation(format!(
            "Index {} is out of range for {} entries",
            index,
            entries.len()
        )));
    }

    let mut ordered = indices.to_vec();
    sort_descending(&mut ordered);

    let mut remaining = entries.to_vec();
    for index in ordered {
        remaining.remove(index);
    }
    Ok(remaining)
}

/// Removes every entry equal to one of `targets`, scanning from the end.
///
/// Returns the number of entries removed. Duplicates in `entries` are all
/// removed; unmatched targets are ignored.
pub fn remove_matching_from_end<T: PartialEq>(entries: &mut Vec<T>, targets: &[T]) -> usize {
    let mut removed = 0;
    for index in (0..entries.len()).rev() {
        if targets.contains(&entries[index]) {
            entries.remove(index);
            removed += 1;
        }
    }
    removed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    mod duplicates {
        use super::*;

        #[test]
        fn detects_adjacent_and_distant_duplicates() {
            assert!(contains_duplicates(&[2, 2]));
            assert!(contains_duplicates(&[5, 0, 9, 5]));
        }

        #[test]
        fn distinct_values_pass() {
            assert!(!contains_duplicates(&[4]));
            assert!(!contains_duplicates(&[3, 2, 1, 0]));
        }
    }

    mod ordering {
        use super::*;

        #[test]
        fn sorts_largest_first() {
            let mut indices = [1, 4, 0, 3];
            sort_descending(&mut indices);
            assert_eq!(indices, [4, 3, 1, 0]);
        }
    }

    mod removal {
        use super::*;

        #[test]
        fn removes_requested_positions() {
            let lore = lines(&["a", "b", "c", "d"]);
            assert_eq!(remove_indices(&lore, &[1, 3]).unwrap(), lines(&["a", "c"]));
        }

        #[test]
        fn order_of_indices_does_not_matter() {
            let entries = lines(&["a", "b", "c", "d", "e"]);
            let ascending = remove_indices(&entries, &[0, 2, 4]).unwrap();
            let shuffled = remove_indices(&entries, &[4, 0, 2]).unwrap();
            assert_eq!(ascending, lines(&["b", "d"]));
            assert_eq!(ascending, shuffled);
        }

        #[test]
        fn empty_index_list_is_identity() {
            let entries = lines(&["a", "b"]);
            assert_eq!(remove_indices(&entries, &[]).unwrap(), entries);
        }

        #[test]
        fn removing_everything_leaves_empty() {
            let entries = lines(&["a", "b", "c"]);
            assert!(remove_indices(&entries, &[2, 0, 1]).unwrap().is_empty());
        }

        #[test]
        fn duplicate_indices_rejected() {
            let entries = lines(&["a", "b", "c"]);
            let err = remove_indices(&entries, &[1, 1]).unwrap_err();
            assert!(err.is_validation());
            assert_eq!(entries, lines(&["a", "b", "c"]));
        }

        #[test]
        fn out_of_range_index_rejected() {
            let entries = lines(&["a", "b"]);
            let err = remove_indices(&entries, &[0, 2]).unwrap_err();
            assert!(err.is_validation());
            assert!(err.to_string().contains("out of range"));
        }

        #[test]
        fn every_subset_of_positions_is_removed_exactly() {
            let entries: Vec<usize> = (0..6).collect();
            for mask in 0u32..(1 << entries.len()) {
                let indices: Vec<usize> = (0..entries.len())
                    .filter(|i| mask & (1 << i) != 0)
                    .rev()
                    .collect();
                let remaining = remove_indices(&entries, &indices).unwrap();
                let expected: Vec<usize> = entries
                    .iter()
                    .copied()
                    .filter(|i| mask & (1 << i) == 0)
                    .collect();
                assert_eq!(remaining, expected, "mask {mask:#08b}");
            }
        }
    }

    mod matching {
        use super::*;

        #[test]
        fn removes_all_equal_entries() {
            let mut entries = vec![1, 2, 3, 2, 1];
            let removed = remove_matching_from_end(&mut entries, &[2]);
            assert_eq!(removed, 2);
            assert_eq!(entries, vec![1, 3, 1]);
        }

        #[test]
        fn adjacent_matches_are_not_skipped() {
            let mut entries = vec![7, 7, 7, 8];
            remove_matching_from_end(&mut entries, &[7]);
            assert_eq!(entries, vec![8]);
        }

        #[test]
        fn unmatched_targets_are_ignored() {
            let mut entries = vec![1, 2, 3];
            assert_eq!(remove_matching_from_end(&mut entries, &[9]), 0);
            assert_eq!(entries, vec![1, 2, 3]);
        }
    }
}
