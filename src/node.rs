//! elements in a [`crate::queue::Queue`].

use allocator_api2::alloc::Layout;

use crate::value::Value;

/// a queue element.
///
/// `next` owns the following element; the last element's `next` is null.
pub struct Node {
  pub next: *mut Self,
  pub value: Value,
}

impl Node {
  /// the memory layout of a node.
  pub const LAYOUT: Layout = Layout::new::<Self>();
}
