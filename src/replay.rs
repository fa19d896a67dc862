//! Log replay design: store only the mutations, reconstruct on read.
//!
//! Mutations are O(1) appends to the operation log; every read replays
//! the log from the empty state up to the requested version. Memory is
//! one log entry per mutation, nothing more.

use crate::error::{Result, StackError};
use crate::ops::apply_operation;
use crate::stack::PersistentStack;
use crate::types::{Operation, StackStats, Version};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A partially persistent stack storing only its operation log.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ReplayStack<T> {
    /// `log[i]` is the transition from version `i` to version `i + 1`.
    log: Vec<Operation<T>>,
}

impl<T> ReplayStack<T> {
    pub fn new() -> Self {
        Self { log: Vec::new() }
    }

    /// The most recent version.
    pub fn latest(&self) -> Version {
        Version(self.log.len() as u64)
    }

    /// Length of the latest content, derived from the log in O(v).
    pub fn len(&self) -> usize {
        self.log.iter().fold(0, |n, op| match op {
            Operation::Push(_) => n + 1,
            Operation::Pop => n - 1,
        })
    }

    /// Whether the latest content is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All versions, oldest to newest.
    pub fn versions(&self) -> impl Iterator<Item = Version> {
        (0..=self.latest().0).map(Version)
    }

    /// The recorded operations, oldest to newest.
    pub fn operations(&self) -> &[Operation<T>] {
        &self.log
    }

    fn ensure_version(&self, version: Version) -> Result<()> {
        if version > self.latest() {
            return Err(StackError::VersionOutOfRange {
                version,
                latest: self.latest(),
            });
        }
        Ok(())
    }
}

impl<T: Clone> ReplayStack<T> {
    /// Append a push to the log.
    pub fn push(&mut self, value: T) {
        self.log.push(Operation::Push(value));
        debug!(version = %self.latest(), "push");
    }

    /// Append a pop to the log and return the removed value.
    ///
    /// The latest content is re-derived on demand to check non-emptiness
    /// and recover the top value, so this costs a full replay. A failed
    /// pop appends nothing.
    pub fn pop(&mut self) -> Result<T> {
        let mut content = self.replay_to(self.latest())?;
        let value = content.pop().ok_or(StackError::EmptyStack)?;
        self.log.push(Operation::Pop);
        debug!(version = %self.latest(), "pop");
        Ok(value)
    }

    /// The content at `version`, reconstructed by replaying the log from
    /// the empty state. Cost O(v); nothing is cached between reads.
    pub fn read_version(&self, version: Version) -> Result<Vec<T>> {
        self.ensure_version(version)?;
        self.replay_to(version)
    }

    /// The element at `index` within the content at `version`.
    pub fn read(&self, version: Version, index: usize) -> Result<T> {
        let content = self.read_version(version)?;
        content
            .get(index)
            .cloned()
            .ok_or(StackError::IndexOutOfRange {
                index,
                len: content.len(),
            })
    }

    pub fn stats(&self) -> StackStats {
        StackStats {
            versions: self.log.len() as u64 + 1,
            log_entries: self.log.len() as u64,
            stored_values: self
                .log
                .iter()
                .filter(|op| matches!(op, Operation::Push(_)))
                .count() as u64,
        }
    }

    fn replay_to(&self, version: Version) -> Result<Vec<T>> {
        let mut content = Vec::new();
        for operation in &self.log[..version.0 as usize] {
            apply_operation(&mut content, operation)?;
        }
        Ok(content)
    }
}

impl<T> Default for ReplayStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> PersistentStack<T> for ReplayStack<T> {
    fn push(&mut self, value: T) {
        ReplayStack::push(self, value);
    }

    fn pop(&mut self) -> Result<T> {
        ReplayStack::pop(self)
    }

    fn latest(&self) -> Version {
        ReplayStack::latest(self)
    }

    fn read_version(&mut self, version: Version) -> Result<Vec<T>> {
        ReplayStack::read_version(self, version)
    }

    fn read(&mut self, version: Version, index: usize) -> Result<T> {
        ReplayStack::read(self, version, index)
    }

    fn stats(&self) -> StackStats {
        ReplayStack::stats(self)
    }
}
