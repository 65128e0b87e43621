//! the underlying queue.

#[cfg(feature = "alloc")]
use alloc::string::String;
use core::fmt;
use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::ptr::{self, NonNull};

#[cfg(feature = "alloc")]
use allocator_api2::alloc::Global;
use allocator_api2::alloc::Allocator;
use tracing::{debug, trace};

use crate::error::Error;
use crate::node::Node;
use crate::sort;
use crate::status::Status;
use crate::value::Value;

/// a singly linked queue of strings.
#[cfg(not(feature = "alloc"))]
pub struct Queue<A>
where
  A: Allocator,
{
  alloc: A,
  head: *mut Node,
  tail: *mut Node,
  len: usize,
}

/// a singly linked queue of strings.
#[cfg(feature = "alloc")]
pub struct Queue<A = Global>
where
  A: Allocator,
{
  alloc: A,
  head: *mut Node,
  tail: *mut Node,
  len: usize,
}

// SAFETY: every node is owned by exactly one queue and never shared, so
// moving the queue moves its nodes along with it.
#[rustfmt::skip]
unsafe impl<A> Send for Queue<A>
where A: Allocator + Send {}

#[cfg(feature = "alloc")]
impl Queue<Global> {
  /// create a new queue.
  pub const fn new() -> Self {
    Self::new_in(Global)
  }
}

// public APIs
impl<A> Queue<A>
where
  A: Allocator,
{
  /// create a new queue with a given allocator.
  ///
  /// nothing is allocated until the first insertion.
  pub const fn new_in(alloc: A) -> Self {
    Self {
      alloc,
      head: ptr::null_mut(),
      tail: ptr::null_mut(),
      len: 0,
    }
  }

  /// get the allocator elements and values are stored in.
  pub const fn allocator(&self) -> &A {
    &self.alloc
  }

  /// get the number of elements.
  pub const fn len(&self) -> usize {
    self.len
  }

  /// check if the queue is empty.
  pub const fn is_empty(&self) -> bool {
    self.len == 0
  }

  /// classify the queue as [`Status::Empty`] or [`Status::NonEmpty`].
  pub fn status(&self) -> Status {
    Status::of(Some(self))
  }

  /// peek at the first element.
  pub fn front(&self) -> Option<&str> {
    // SAFETY: `head` is null or a node we own.
    unsafe { self.head.as_ref() }.map(|node| node.value.as_str())
  }

  /// peek at the last element.
  pub fn back(&self) -> Option<&str> {
    // SAFETY: `tail` is null or a node we own.
    unsafe { self.tail.as_ref() }.map(|node| node.value.as_str())
  }

  /// iterate over the elements, front to back.
  pub fn iter(&self) -> Iter<'_> {
    Iter {
      next: self.head,
      remaining: self.len,
      _queue: PhantomData,
    }
  }

  /// insert a copy of `s` at the front.
  ///
  /// for the non-panicking variant, see [`Queue::try_push_front`].
  pub fn push_front(&mut self, s: &str) {
    self.try_push_front(s).expect("push to queue failed");
  }

  /// insert a copy of `s` at the back.
  ///
  /// for the non-panicking variant, see [`Queue::try_push_back`].
  pub fn push_back(&mut self, s: &str) {
    self.try_push_back(s).expect("push to queue failed");
  }

  /// try to insert a copy of `s` at the front, returning an error on
  /// allocation failure.
  pub fn try_push_front(&mut self, s: &str) -> Result<(), Error> {
    let new_head = self.make_node(s)?.as_ptr();
    // SAFETY: `new_head` came from `self.make_node` and is not linked yet.
    unsafe { (*new_head).next = self.head };
    if self.status() == Status::Empty {
      self.tail = new_head;
    }
    self.head = new_head;
    self.len += 1;
    Ok(())
  }

  /// try to insert a copy of `s` at the back, returning an error on
  /// allocation failure.
  pub fn try_push_back(&mut self, s: &str) -> Result<(), Error> {
    let new_tail = self.make_node(s)?.as_ptr();
    match self.status() {
      // SAFETY: a non-empty queue has a valid `tail`.
      Status::NonEmpty => unsafe { (*self.tail).next = new_tail },
      Status::Empty | Status::Absent => self.head = new_tail,
    }
    self.tail = new_tail;
    self.len += 1;
    Ok(())
  }

  /// remove the first element, copying it into `out` if one is given.
  ///
  /// at most `out.len() - 1` bytes of the value are copied, followed by a zero
  /// byte; longer values are cut short without error. returns the number of
  /// value bytes written.
  pub fn pop_front_into(&mut self, out: Option<&mut [u8]>) -> Result<usize, Error> {
    self
      .pop_with(|value| out.map_or(0, |out| value.copy_out(out)))
      .ok_or(Error::Empty)
  }

  /// remove the first element and return it.
  #[cfg(feature = "alloc")]
  pub fn pop_front(&mut self) -> Option<String> {
    self.pop_with(|value| value.as_str().into())
  }

  /// remove every element.
  pub fn clear(&mut self) {
    while self.pop_with(|_| ()).is_some() {}
  }

  /// reverse the order of the elements in place.
  pub fn reverse(&mut self) {
    if self.status() != Status::NonEmpty {
      return;
    }
    trace!(len = self.len, "reversing queue");

    let mut prev = ptr::null_mut();
    let mut cur = self.head;
    while !cur.is_null() {
      // SAFETY: `cur` is a node of our chain.
      unsafe {
        let next = (*cur).next;
        (*cur).next = prev;
        prev = cur;
        cur = next;
      }
    }
    self.tail = self.head;
    self.head = prev;
  }

  /// sort the elements into ascending natural order (see [`crate::natural`]).
  ///
  /// the sort is stable, and only relinks existing elements.
  pub fn sort(&mut self) {
    if self.status() != Status::NonEmpty || self.len == 1 {
      return;
    }
    trace!(len = self.len, "sorting queue");

    // SAFETY: the chain is valid and we hold `&mut self`.
    self.head = unsafe { sort::merge_sort(self.head) };

    let mut tail = self.head;
    // SAFETY: the sorted chain is non-empty and null-terminated.
    unsafe {
      while !(*tail).next.is_null() {
        tail = (*tail).next;
      }
    }
    self.tail = tail;
  }
}

impl<A> Drop for Queue<A>
where
  A: Allocator,
{
  fn drop(&mut self) {
    self.clear();
  }
}

#[cfg(feature = "alloc")]
impl Default for Queue<Global> {
  fn default() -> Self {
    Self::new()
  }
}

impl<A> fmt::Debug for Queue<A>
where
  A: Allocator,
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list().entries(self.iter()).finish()
  }
}

impl<'s, A> Extend<&'s str> for Queue<A>
where
  A: Allocator,
{
  fn extend<I>(&mut self, iter: I)
  where
    I: IntoIterator<Item = &'s str>,
  {
    iter.into_iter().for_each(|s| self.push_back(s));
  }
}

impl<'q, A> IntoIterator for &'q Queue<A>
where
  A: Allocator,
{
  type Item = &'q str;
  type IntoIter = Iter<'q>;

  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}

/// private APIs.
impl<A> Queue<A>
where
  A: Allocator,
{
  /// allocate a new unlinked node holding a copy of `s`.
  ///
  /// if the value copy fails, the node is released before returning.
  fn make_node(&self, s: &str) -> Result<NonNull<Node>, Error> {
    let node = match self.alloc.allocate(Node::LAYOUT) {
      Ok(nn) => nn.cast::<Node>(),
      Err(_) => {
        debug!(len = s.len(), "failed to allocate queue element");
        return Err(Error::ElementAlloc);
      }
    };

    match Value::copy_in(&self.alloc, s) {
      // SAFETY: `node` is a successful, valid allocation.
      Ok(value) => unsafe {
        let ptr = node.as_ptr();
        (&raw mut (*ptr).next).write(ptr::null_mut());
        (&raw mut (*ptr).value).write(value);
        Ok(node)
      },
      Err(err) => {
        debug!(len = s.len(), "failed to copy element value, releasing element");
        // SAFETY: `node` came from our allocator and holds nothing yet.
        unsafe { self.alloc.deallocate(node.cast(), Node::LAYOUT) };
        Err(err)
      }
    }
  }

  /// unlink the first element, hand its value to `f`, then release both.
  fn pop_with<R>(&mut self, f: impl FnOnce(&Value) -> R) -> Option<R> {
    if self.status() != Status::NonEmpty {
      return None;
    }

    let old_head = self.head;
    // SAFETY: a non-empty queue has a valid `head`.
    self.head = unsafe { (*old_head).next };
    self.len -= 1;
    if self.status() == Status::Empty {
      self.tail = ptr::null_mut();
    }

    // SAFETY:
    //   - `old_head` came from our allocator.
    //   - it is no longer reachable from the queue.
    let value = unsafe { self.consume_node(old_head) };
    let out = f(&value);
    // SAFETY: `value` was copied in with our allocator, and is dropped here.
    unsafe { value.release(&self.alloc) };
    Some(out)
  }

  /// deallocate the node, and return the value it held.
  ///
  /// # safety
  ///
  /// `node` must be a valid pointer, and must have come from our allocator.
  /// this method also must not be called twice on the same pointer.
  unsafe fn consume_node(&self, node: *mut Node) -> Value {
    unsafe {
      let value = (&raw mut (*node).value).read();
      self
        .alloc
        .deallocate(NonNull::new_unchecked(node).cast(), Node::LAYOUT);
      value
    }
  }
}

/// an iterator over the elements of a [`Queue`], front to back.
pub struct Iter<'q> {
  next: *const Node,
  remaining: usize,
  _queue: PhantomData<&'q Node>,
}

impl<'q> Iterator for Iter<'q> {
  type Item = &'q str;

  fn next(&mut self) -> Option<Self::Item> {
    // SAFETY: the queue is borrowed for `'q`, so its nodes stay put.
    let node = unsafe { self.next.as_ref() }?;
    self.next = node.next;
    self.remaining -= 1;
    Some(node.value.as_str())
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    (self.remaining, Some(self.remaining))
  }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}
