//! natural ordering of text: digit runs compare by magnitude.
//!
//! `"item2" < "item10"`, where a plain byte comparison would say otherwise.
//! the rules are the ones of the classic `strnatcmp`:
//!
//! - whitespace in front of each compared position is skipped.
//! - two digit runs where neither starts with `0` compare as integers: the
//!   longer run is larger, and for equal lengths the first differing digit
//!   decides.
//! - a digit run starting with `0` on either side compares left-aligned, like
//!   the fractional part of a decimal number.
//! - anything else compares byte by byte; the end of the text sorts first.

use core::cmp::Ordering;

/// compare `a` and `b` in natural order.
pub fn compare(a: &str, b: &str) -> Ordering {
  compare_with(a.as_bytes(), b.as_bytes(), false)
}

/// like [`compare`], but ASCII letters compare without regard to case.
pub fn compare_ignore_ascii_case(a: &str, b: &str) -> Ordering {
  compare_with(a.as_bytes(), b.as_bytes(), true)
}

fn compare_with(a: &[u8], b: &[u8], fold_case: bool) -> Ordering {
  let (mut ai, mut bi) = (0, 0);
  loop {
    while at(a, ai).is_some_and(is_space) {
      ai += 1;
    }
    while at(b, bi).is_some_and(is_space) {
      bi += 1;
    }

    let (ca, cb) = (at(a, ai), at(b, bi));
    if let (Some(da), Some(db)) = (digit_at(a, ai), digit_at(b, bi)) {
      let run = if da == b'0' || db == b'0' {
        compare_left(&a[ai..], &b[bi..])
      } else {
        compare_right(&a[ai..], &b[bi..])
      };
      if run.is_ne() {
        return run;
      }
    }

    let (ca, cb) = match (ca, cb) {
      (None, None) => return Ordering::Equal,
      (None, Some(_)) => return Ordering::Less,
      (Some(_), None) => return Ordering::Greater,
      (Some(ca), Some(cb)) if fold_case => (ca.to_ascii_uppercase(), cb.to_ascii_uppercase()),
      (Some(ca), Some(cb)) => (ca, cb),
    };
    match ca.cmp(&cb) {
      Ordering::Equal => {}
      ord => return ord,
    }
    ai += 1;
    bi += 1;
  }
}

/// the byte at `i`, or `None` past the end.
fn at(s: &[u8], i: usize) -> Option<u8> {
  s.get(i).copied()
}

/// the C locale's `isspace`: ASCII whitespace plus vertical tab.
fn is_space(c: u8) -> bool {
  c.is_ascii_whitespace() || c == 0x0b
}

fn digit_at(s: &[u8], i: usize) -> Option<u8> {
  at(s, i).filter(u8::is_ascii_digit)
}

/// compare two integer digit runs: the longer one wins, and the first
/// difference decides between runs of equal length.
fn compare_right(a: &[u8], b: &[u8]) -> Ordering {
  let mut bias = Ordering::Equal;
  let mut i = 0;
  loop {
    match (digit_at(a, i), digit_at(b, i)) {
      (None, None) => return bias,
      (None, Some(_)) => return Ordering::Less,
      (Some(_), None) => return Ordering::Greater,
      (Some(da), Some(db)) => {
        if bias.is_eq() {
          bias = da.cmp(&db);
        }
      }
    }
    i += 1;
  }
}

/// compare two left-aligned (fractional) digit runs: the first difference
/// decides.
fn compare_left(a: &[u8], b: &[u8]) -> Ordering {
  let mut i = 0;
  loop {
    match (digit_at(a, i), digit_at(b, i)) {
      (None, None) => return Ordering::Equal,
      (None, Some(_)) => return Ordering::Less,
      (Some(_), None) => return Ordering::Greater,
      (Some(da), Some(db)) => match da.cmp(&db) {
        Ordering::Equal => {}
        ord => return ord,
      },
    }
    i += 1;
  }
}
