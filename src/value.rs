//! owned copies of element text.

use core::ptr::{self, NonNull};
use core::{slice, str};

use allocator_api2::alloc::{Allocator, Layout};

use crate::error::Error;

/// a text value copied into storage obtained from a queue's allocator.
///
/// a `Value` does not know its allocator, so it cannot free itself; the queue
/// that owns it calls [`Value::release`] exactly once.
pub struct Value {
  ptr: NonNull<u8>,
  len: usize,
}

impl Value {
  /// copy `s` into fresh storage from `alloc`.
  pub fn copy_in<A>(alloc: &A, s: &str) -> Result<Self, Error>
  where
    A: Allocator,
  {
    let len = s.len();
    if len == 0 {
      return Ok(Self {
        ptr: NonNull::dangling(),
        len,
      });
    }

    let layout = Layout::array::<u8>(len).map_err(|_| Error::ValueAlloc { len })?;
    let ptr = alloc
      .allocate(layout)
      .map_err(|_| Error::ValueAlloc { len })?
      .cast::<u8>();
    // SAFETY: `ptr` is a fresh allocation of `len` bytes, disjoint from `s`.
    unsafe { ptr::copy_nonoverlapping(s.as_ptr(), ptr.as_ptr(), len) };
    Ok(Self { ptr, len })
  }

  /// the stored text.
  pub fn as_str(&self) -> &str {
    // SAFETY: the bytes were copied from a `&str` and are never written again.
    unsafe { str::from_utf8_unchecked(slice::from_raw_parts(self.ptr.as_ptr(), self.len)) }
  }

  /// copy as much of the value as fits into `out`, always leaving a
  /// terminating zero byte in the last written slot.
  ///
  /// returns the number of value bytes written. an empty `out` receives
  /// nothing.
  pub fn copy_out(&self, out: &mut [u8]) -> usize {
    let Some(room) = out.len().checked_sub(1) else {
      return 0;
    };
    let n = self.len.min(room);
    out[..n].copy_from_slice(&self.as_str().as_bytes()[..n]);
    out[n] = 0;
    n
  }

  /// return the storage to `alloc`.
  ///
  /// # safety
  ///
  /// `alloc` must be the allocator this value was copied in with, and this
  /// method must not be called twice on the same value.
  pub unsafe fn release<A>(self, alloc: &A)
  where
    A: Allocator,
  {
    if self.len == 0 {
      return;
    }
    // SAFETY: `copy_in` already built this layout once.
    let layout = unsafe { Layout::from_size_align_unchecked(self.len, 1) };
    // SAFETY: see the method's contract.
    unsafe { alloc.deallocate(self.ptr, layout) };
  }
}
