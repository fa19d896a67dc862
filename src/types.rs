//! Core types shared by all stack designs.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A point in the stack's history.
///
/// Version 0 is always the empty stack. Versions are dense: the latest
/// version equals the number of mutations applied so far, and version `v`
/// is reached from version `v - 1` by exactly one operation.
#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct Version(pub u64);

impl Version {
    pub fn next(self) -> Self {
        Version(self.0 + 1)
    }

    pub fn prev(self) -> Option<Self> {
        if self.0 > 0 {
            Some(Version(self.0 - 1))
        } else {
            None
        }
    }
}

impl fmt::Debug for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Version({})", self.0)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Version {
    fn from(v: u64) -> Self {
        Version(v)
    }
}

/// A single mutation of the stack.
///
/// The operation log is an append-only sequence of these; a tagged
/// variant rather than a closure, so the log stays inspectable and
/// serializable.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operation<T> {
    /// Push a value on top of the stack.
    Push(T),
    /// Remove the top value.
    Pop,
}

/// A logged operation together with its exact undo.
///
/// The inverse of `Push(v)` is `Pop`; the inverse of `Pop` is
/// `Push(removed)`, where `removed` is captured at the moment the pop is
/// recorded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry<T> {
    pub forward: Operation<T>,
    pub inverse: Operation<T>,
}

impl<T> LogEntry<T> {
    pub fn new(forward: Operation<T>, inverse: Operation<T>) -> Self {
        Self { forward, inverse }
    }
}

/// Shape and memory counters for a stack design.
///
/// `stored_values` counts element values the structure retains (snapshot
/// copies, logged pushes, inverse captures, cached content), making the
/// memory trade-off between the designs observable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StackStats {
    /// Number of readable versions, i.e. `latest + 1`.
    pub versions: u64,
    /// Number of operations recorded in the log, if the design keeps one.
    pub log_entries: u64,
    /// Number of element values held in memory.
    pub stored_values: u64,
}
