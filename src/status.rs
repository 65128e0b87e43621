//! what shape a queue handle is in.

use allocator_api2::alloc::Allocator;

use crate::queue::Queue;

/// the state every queue operation branches on first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
  /// there is no queue behind the handle.
  Absent,
  /// a queue with no elements.
  Empty,
  /// a queue with at least one element.
  NonEmpty,
}

impl Status {
  /// classify a possibly absent queue.
  pub fn of<A>(queue: Option<&Queue<A>>) -> Self
  where
    A: Allocator,
  {
    match queue {
      None => Self::Absent,
      Some(queue) if queue.is_empty() => Self::Empty,
      Some(_) => Self::NonEmpty,
    }
  }
}
