//! # Strata
//!
//! Partially persistent stacks: after any sequence of push/pop mutations,
//! every past version of the stack stays readable, while only the latest
//! version can be mutated further.
//!
//! ## Core Concepts
//!
//! - **Versions**: Dense integers naming points in history; version 0 is
//!   always the empty stack, and every mutation creates the next version
//! - **Operation log**: Append-only sequence of `Push`/`Pop` operations,
//!   one per version transition
//! - **Designs**: Three implementations of one contract, trading memory
//!   for read latency:
//!   [`SnapshotStack`] copies the full content per version,
//!   [`ReplayStack`] stores only the log and replays it per read,
//!   [`ReversibleStack`] pairs each operation with its inverse and walks
//!   a cached cursor bidirectionally
//!
//! ## Example
//!
//! ```
//! use strata::{ReversibleStack, Version};
//!
//! let mut stack = ReversibleStack::new();
//! stack.push(1);
//! stack.push(2);
//! stack.push(3);
//! assert_eq!(stack.pop()?, 3);
//!
//! // Every past version stays readable.
//! assert_eq!(stack.read_version(Version(3))?, vec![1, 2, 3]);
//! assert_eq!(stack.read_version(Version(4))?, vec![1, 2]);
//! # Ok::<(), strata::StackError>(())
//! ```

pub mod error;
pub mod ops;
pub mod replay;
pub mod reversible;
pub mod shared;
pub mod snapshot;
pub mod stack;
pub mod types;

// Re-exports
pub use error::{Result, StackError};
pub use ops::apply_operation;
pub use replay::ReplayStack;
pub use reversible::ReversibleStack;
pub use shared::SharedStack;
pub use snapshot::SnapshotStack;
pub use stack::PersistentStack;
pub use types::{LogEntry, Operation, StackStats, Version};
