//! Operation application.

use crate::error::{Result, StackError};
use crate::types::Operation;

/// Apply an operation to a content vector in place.
///
/// Returns the value removed by a `Pop`, which callers recording inverses
/// need. `Pop` on empty content fails with `EmptyStack` and leaves the
/// content untouched.
pub fn apply_operation<T: Clone>(
    content: &mut Vec<T>,
    operation: &Operation<T>,
) -> Result<Option<T>> {
    match operation {
        Operation::Push(value) => {
            content.push(value.clone());
            Ok(None)
        }
        Operation::Pop => content.pop().map(Some).ok_or(StackError::EmptyStack),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push() {
        let mut content = vec![1, 2];
        let removed = apply_operation(&mut content, &Operation::Push(3)).unwrap();
        assert_eq!(removed, None);
        assert_eq!(content, vec![1, 2, 3]);
    }

    #[test]
    fn test_pop_returns_removed() {
        let mut content = vec![1, 2, 3];
        let removed = apply_operation(&mut content, &Operation::Pop).unwrap();
        assert_eq!(removed, Some(3));
        assert_eq!(content, vec![1, 2]);
    }

    #[test]
    fn test_pop_empty() {
        let mut content: Vec<i32> = vec![];
        let result = apply_operation(&mut content, &Operation::Pop);
        assert_eq!(result, Err(StackError::EmptyStack));
        assert!(content.is_empty());
    }
}
