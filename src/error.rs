//! errors reported by [`crate::queue::Queue`].

use thiserror::Error;

/// why a queue operation did not go through.
///
/// every variant is recoverable: the queue is left exactly as it was before
/// the failed call.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  /// the allocator could not provide storage for a new element.
  #[error("failed to allocate a queue element")]
  ElementAlloc,

  /// the element was allocated, but its value copy was not. the element has
  /// already been released again.
  #[error("failed to allocate {len} bytes for an element value")]
  ValueAlloc { len: usize },

  /// there is nothing to remove.
  #[error("queue is empty")]
  Empty,
}
