//! Lock-guarded wrapper for concurrent callers.
//!
//! The reversible design mutates its cursor and cached content on every
//! read, so sharing one instance across threads requires exclusive access
//! for all operations, reads included. `SharedStack` guards a
//! [`ReversibleStack`](crate::ReversibleStack) with a single-writer lock
//! and hands back owned snapshots, so the lock is never held across
//! caller code.

use crate::error::Result;
use crate::reversible::ReversibleStack;
use crate::types::{StackStats, Version};
use parking_lot::Mutex;

/// A reversible stack behind a `parking_lot::Mutex`, usable through
/// shared references.
pub struct SharedStack<T> {
    inner: Mutex<ReversibleStack<T>>,
}

impl<T> SharedStack<T> {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(ReversibleStack::new()),
        }
    }

    /// The most recent version.
    pub fn latest(&self) -> Version {
        self.inner.lock().latest()
    }

    /// Version of the currently materialized content.
    pub fn cursor(&self) -> Version {
        self.inner.lock().cursor()
    }
}

impl<T: Clone> SharedStack<T> {
    pub fn push(&self, value: T) {
        self.inner.lock().push(value);
    }

    pub fn pop(&self) -> Result<T> {
        self.inner.lock().pop()
    }

    pub fn read_version(&self, version: Version) -> Result<Vec<T>> {
        self.inner.lock().read_version(version)
    }

    pub fn read(&self, version: Version, index: usize) -> Result<T> {
        self.inner.lock().read(version, index)
    }

    pub fn stats(&self) -> StackStats {
        self.inner.lock().stats()
    }

    /// Consume the wrapper and return the guarded stack.
    pub fn into_inner(self) -> ReversibleStack<T> {
        self.inner.into_inner()
    }
}

impl<T> Default for SharedStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_shared_basic() {
        let stack = SharedStack::new();
        stack.push(1);
        stack.push(2);
        assert_eq!(stack.pop().unwrap(), 2);
        assert_eq!(stack.read_version(Version(2)).unwrap(), vec![1, 2]);
        assert_eq!(stack.latest(), Version(3));
    }

    #[test]
    fn test_concurrent_readers_agree() {
        let stack = Arc::new(SharedStack::new());
        for i in 0..32 {
            stack.push(i);
        }

        let handles: Vec<_> = (0..4)
            .map(|reader| {
                let stack = Arc::clone(&stack);
                thread::spawn(move || {
                    // Each reader walks a different direction over history.
                    let versions: Vec<u64> = if reader % 2 == 0 {
                        (0..=32).collect()
                    } else {
                        (0..=32).rev().collect()
                    };
                    for v in versions {
                        let content = stack.read_version(Version(v)).unwrap();
                        assert_eq!(content.len(), v as usize);
                        assert_eq!(content, (0..v as i32).collect::<Vec<_>>());
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
    }

    #[test]
    fn test_into_inner() {
        let stack = SharedStack::new();
        stack.push("a");
        let mut inner = stack.into_inner();
        assert_eq!(inner.read_version(Version(1)).unwrap(), vec!["a"]);
    }
}
