//! merge sort over a chain of [`Node`]s.
//!
//! nodes are only relinked: nothing is allocated and no value is copied.

use core::ptr;

use crate::natural;
use crate::node::Node;

/// sort the chain starting at `head` into ascending natural order, returning
/// the new head. equal values keep their relative order.
///
/// # safety
///
/// `head` must be null or the first node of a valid, acyclic, null-terminated
/// chain that nothing else accesses during the call.
pub unsafe fn merge_sort(head: *mut Node) -> *mut Node {
  // SAFETY: every pointer followed below is a node of the chain, and the
  // chain is ours for the duration of the call.
  unsafe {
    if head.is_null() || (*head).next.is_null() {
      return head;
    }

    let mut slow = head;
    let mut fast = (*head).next;
    while !fast.is_null() && !(*fast).next.is_null() {
      slow = (*slow).next;
      fast = (*(*fast).next).next;
    }
    let right = (*slow).next;
    (*slow).next = ptr::null_mut();

    merge(merge_sort(head), merge_sort(right))
  }
}

/// merge two sorted chains into one, preferring `left` on ties.
///
/// # safety
///
/// see [`merge_sort`]; `left` and `right` must be disjoint.
unsafe fn merge(mut left: *mut Node, mut right: *mut Node) -> *mut Node {
  let mut head = ptr::null_mut();
  let mut link: *mut *mut Node = &raw mut head;

  // SAFETY: `left` and `right` are non-null when dereferenced, and `link`
  // always points at `head` or at the `next` field of a node we own.
  unsafe {
    while !left.is_null() && !right.is_null() {
      let taken = if natural::compare((*right).value.as_str(), (*left).value.as_str()).is_lt() {
        let node = right;
        right = (*node).next;
        node
      } else {
        let node = left;
        left = (*node).next;
        node
      };
      link.write(taken);
      link = &raw mut (*taken).next;
    }
    link.write(if left.is_null() { right } else { left });
  }

  head
}

#[cfg(test)]
mod tests {
  use allocator_api2::alloc::Global;

  use super::*;
  use crate::value::Value;

  fn chain(values: &[&str]) -> *mut Node {
    values.iter().rev().fold(ptr::null_mut(), |next, s| {
      let value = Value::copy_in(&Global, s).unwrap();
      Box::into_raw(Box::new(Node { next, value }))
    })
  }

  fn drain(mut head: *mut Node) -> Vec<String> {
    let mut out = Vec::new();
    while !head.is_null() {
      let node = unsafe { Box::from_raw(head) };
      head = node.next;
      out.push(node.value.as_str().to_owned());
      unsafe { node.value.release(&Global) };
    }
    out
  }

  #[test]
  fn empty_chain() {
    assert!(unsafe { merge_sort(ptr::null_mut()) }.is_null());
  }

  #[test]
  fn odd_and_even_lengths() {
    let sorted = drain(unsafe { merge_sort(chain(&["c", "a", "b"])) });
    assert_eq!(sorted, ["a", "b", "c"]);

    let sorted = drain(unsafe { merge_sort(chain(&["d", "c", "a", "b"])) });
    assert_eq!(sorted, ["a", "b", "c", "d"]);
  }

  #[test]
  fn natural_order() {
    let sorted = drain(unsafe { merge_sort(chain(&["item2", "item10", "item1"])) });
    assert_eq!(sorted, ["item1", "item2", "item10"]);
  }

  #[test]
  fn ties_keep_input_order() {
    // "x1" and "x 1" compare equal once whitespace is skipped.
    let sorted = drain(unsafe { merge_sort(chain(&["x 1", "b", "x1", "a"])) });
    assert_eq!(sorted, ["a", "b", "x 1", "x1"]);

    let sorted = drain(unsafe { merge_sort(chain(&["x1", "b", "x 1", "a"])) });
    assert_eq!(sorted, ["a", "b", "x1", "x 1"]);
  }
}
