#![doc = include_str!("../README.md")]
#![cfg_attr(not(test), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod error;
#[cfg(feature = "alloc")]
pub mod handle;
pub mod natural;
mod node;
pub mod queue;
mod sort;
pub mod status;
mod value;

pub use error::Error;
pub use queue::{Iter, Queue};
pub use status::Status;
