// shared test utilities

#![allow(dead_code)]

use std::cell::Cell;
use std::ptr::NonNull;

use allocator_api2::alloc::{AllocError, Allocator, Global, Layout};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// an allocator that counts live allocations and can be told to fail.
#[derive(Default)]
pub struct CountingAlloc {
  live: Cell<usize>,
  total: Cell<usize>,
  budget: Cell<Option<usize>>,
}

impl CountingAlloc {
  pub fn new() -> Self {
    Self::default()
  }

  /// allow `n` more successful allocations, then fail every request.
  pub fn with_budget(n: usize) -> Self {
    let alloc = Self::default();
    alloc.set_budget(Some(n));
    alloc
  }

  pub fn set_budget(&self, budget: Option<usize>) {
    self.budget.set(budget);
  }

  /// allocations not yet returned.
  pub fn live(&self) -> usize {
    self.live.get()
  }

  /// successful allocations ever made.
  pub fn total(&self) -> usize {
    self.total.get()
  }
}

unsafe impl Allocator for CountingAlloc {
  fn allocate(&self, layout: Layout) -> Result<NonNull<[u8]>, AllocError> {
    if let Some(left) = self.budget.get() {
      if left == 0 {
        return Err(AllocError);
      }
      self.budget.set(Some(left - 1));
    }
    let ptr = Global.allocate(layout)?;
    self.live.set(self.live.get() + 1);
    self.total.set(self.total.get() + 1);
    Ok(ptr)
  }

  unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
    self.live.set(self.live.get() - 1);
    unsafe { Global.deallocate(ptr, layout) }
  }
}

/// a seeded generator, so failures reproduce.
pub fn seeded(seed: u64) -> StdRng {
  StdRng::seed_from_u64(seed)
}

/// a short word, optionally carrying a number, e.g. `"item42"` or `"x07"`.
pub fn word(rng: &mut impl Rng) -> String {
  const STEMS: [&str; 5] = ["item", "x", "file", "", "a b"];
  let stem = STEMS[rng.gen_range(0..STEMS.len())];
  match rng.gen_range(0..3) {
    0 => stem.to_string(),
    1 => format!("{stem}{}", rng.gen_range(0..200)),
    _ => format!("{stem}0{}", rng.gen_range(0..20)),
  }
}
