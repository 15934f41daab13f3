//! Well-formedness checks for a pair of traversals.

use std::collections::HashSet;
use std::hash::Hash;

use tracing::{debug, instrument};

use crate::domain::error::{Sequence, ValidationError};

/// Checks that `preorder` and `inorder` can describe one binary tree.
///
/// Checks run in order and stop at the first failure:
/// 1. equal length
/// 2. equal element sets
/// 3. no repeated value in either sequence (preorder first)
#[instrument(level = "debug", skip_all, fields(len = preorder.len()))]
pub fn validate<T>(preorder: &[T], inorder: &[T]) -> Result<(), ValidationError>
where
    T: Eq + Hash,
{
    if preorder.len() != inorder.len() {
        debug!(preorder = preorder.len(), inorder = inorder.len(), "length mismatch");
        return Err(ValidationError::LengthMismatch {
            preorder: preorder.len(),
            inorder: inorder.len(),
        });
    }

    let pre_set: HashSet<&T> = preorder.iter().collect();
    let in_set: HashSet<&T> = inorder.iter().collect();
    if pre_set != in_set {
        debug!("element sets differ");
        return Err(ValidationError::ElementSetMismatch);
    }

    for (sequence, values, distinct) in [
        (Sequence::Preorder, preorder, pre_set.len()),
        (Sequence::Inorder, inorder, in_set.len()),
    ] {
        if distinct != values.len() {
            debug!(%sequence, "duplicate values");
            return Err(ValidationError::DuplicateValues { sequence });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_empty_sequences_when_validating_then_ok() {
        let empty: [char; 0] = [];
        assert_eq!(validate(&empty, &empty), Ok(()));
    }

    #[test]
    fn given_permutation_when_validating_then_ok() {
        assert_eq!(validate(&[3, 1, 2], &[1, 3, 2]), Ok(()));
    }

    #[test]
    fn given_duplicates_in_both_when_validating_then_reports_preorder_first() {
        let err = validate(&['a', 'a', 'b'], &['a', 'b', 'b']).unwrap_err();
        assert_eq!(
            err,
            ValidationError::DuplicateValues {
                sequence: Sequence::Preorder
            }
        );
    }
}
