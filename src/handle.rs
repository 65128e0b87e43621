//! the surface an external harness drives.
//!
//! every operation accepts a possibly absent queue and degrades to a no-op,
//! `false` or `0` instead of failing loudly. queues live behind a [`Handle`]
//! boxed in the queue's own allocator.
//!
//! ```
//! use natqueue::handle;
//!
//! let mut q = handle::create();
//! handle::insert_tail(q.as_deref_mut(), "b");
//! handle::insert_tail(q.as_deref_mut(), "a");
//! handle::insert_head(q.as_deref_mut(), "c");
//! handle::sort(q.as_deref_mut());
//!
//! let mut buf = [0u8; 2];
//! assert!(handle::remove_head(q.as_deref_mut(), Some(&mut buf)));
//! assert_eq!(&buf, b"a\0");
//! assert_eq!(handle::size(q.as_deref()), 2);
//! handle::destroy(q);
//! ```

use allocator_api2::alloc::{Allocator, Global};
use allocator_api2::boxed::Box;
use tracing::{debug, trace};

use crate::queue::Queue;
use crate::status::Status;

/// an owned, heap-allocated queue.
pub type Handle<A = Global> = Box<Queue<A>, A>;

/// create an empty queue in the global allocator.
///
/// returns `None` if the queue itself could not be allocated.
pub fn create() -> Option<Handle> {
  create_in(Global)
}

/// create an empty queue whose handle and elements live in `alloc`.
///
/// returns `None` if the queue itself could not be allocated.
pub fn create_in<A>(alloc: A) -> Option<Handle<A>>
where
  A: Allocator + Clone,
{
  match Box::try_new_in(Queue::new_in(alloc.clone()), alloc) {
    Ok(queue) => Some(queue),
    Err(_) => {
      debug!("failed to allocate queue");
      None
    }
  }
}

/// release every element of the queue, then the queue itself.
pub fn destroy<A>(queue: Option<Handle<A>>)
where
  A: Allocator,
{
  if let Some(queue) = queue {
    trace!(len = queue.len(), "destroying queue");
    drop(queue);
  }
}

/// insert a copy of `s` at the head. `false` if there is no queue or no
/// storage for the copy.
pub fn insert_head<A>(queue: Option<&mut Queue<A>>, s: &str) -> bool
where
  A: Allocator,
{
  let status = Status::of(queue.as_deref());
  let (Status::Empty | Status::NonEmpty, Some(queue)) = (status, queue) else {
    return false;
  };
  queue.try_push_front(s).is_ok()
}

/// insert a copy of `s` at the tail. `false` if there is no queue or no
/// storage for the copy.
pub fn insert_tail<A>(queue: Option<&mut Queue<A>>, s: &str) -> bool
where
  A: Allocator,
{
  let status = Status::of(queue.as_deref());
  let (Status::Empty | Status::NonEmpty, Some(queue)) = (status, queue) else {
    return false;
  };
  queue.try_push_back(s).is_ok()
}

/// remove the head element, copying a truncated, zero-terminated prefix of it
/// into `out` if given. `false` if there is no queue or it is empty.
pub fn remove_head<A>(queue: Option<&mut Queue<A>>, out: Option<&mut [u8]>) -> bool
where
  A: Allocator,
{
  let status = Status::of(queue.as_deref());
  let (Status::NonEmpty, Some(queue)) = (status, queue) else {
    return false;
  };
  queue.pop_front_into(out).is_ok()
}

/// number of elements; `0` if there is no queue.
pub fn size<A>(queue: Option<&Queue<A>>) -> usize
where
  A: Allocator,
{
  match (Status::of(queue), queue) {
    (Status::NonEmpty, Some(queue)) => queue.len(),
    _ => 0,
  }
}

/// reverse the queue in place; no effect if there is no queue or it is
/// empty.
pub fn reverse<A>(queue: Option<&mut Queue<A>>)
where
  A: Allocator,
{
  let status = Status::of(queue.as_deref());
  if let (Status::NonEmpty, Some(queue)) = (status, queue) {
    queue.reverse();
  }
}

/// sort the queue in natural order; no effect if there is no queue or it
/// holds fewer than two elements.
pub fn sort<A>(queue: Option<&mut Queue<A>>)
where
  A: Allocator,
{
  let status = Status::of(queue.as_deref());
  if let (Status::NonEmpty, Some(queue)) = (status, queue) {
    queue.sort();
  }
}
