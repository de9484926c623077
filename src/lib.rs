//! `static` friendly fixed-capacity binary min-heap that doesn't require
//! dynamic memory allocation
//!
//! The heap is generic over its element type but never compares elements
//! directly: a key-extraction function supplied at construction maps every
//! element to a `u32` comparison key. The element type stays fully opaque to
//! the container; it does not need to be `Ord`, and it may itself be a
//! reference into caller-owned data.
//!
//! # Examples
//!
//! Priority-queue usage:
//!
//! ```
//! use keyheap::MinHeap;
//!
//! let mut heap: MinHeap<u32, _, 8> = MinHeap::new(|x: &u32| *x);
//!
//! heap.push(14).unwrap();
//! heap.push(2).unwrap();
//! heap.push(22).unwrap();
//!
//! assert_eq!(heap.pop(), Some(2));
//! assert_eq!(heap.pop(), Some(14));
//! assert_eq!(heap.pop(), Some(22));
//! assert_eq!(heap.pop(), None);
//! ```
//!
//! Bulk-load and in-place heapsort:
//!
//! ```
//! use keyheap::MinHeap;
//!
//! let mut heap: MinHeap<u32, _, 8> = MinHeap::new(|x: &u32| *x);
//! for v in [14, 2, 22, 13, 23, 10, 90] {
//!     heap.push_unordered(v).unwrap();
//! }
//!
//! heap.sort_desc();
//! assert_eq!(heap.as_slice(), &[90, 23, 22, 14, 13, 10, 2]);
//! ```
//!
//! # Optional features
//!
//! - `alloc`: conversions into `alloc` collections
//!   ([`MinHeap::try_into_vec`]).
//! - `serde`: `serde::Serialize` implementation for the heap.
//! - `defmt`: `defmt::Format` implementation for the heap.
//!
//! # Minimum supported Rust version (MSRV)
//!
//! This crate is guaranteed to compile on stable Rust 1.81 and up with its
//! default feature set. It might compile with older versions but that may
//! change in any new patch release.

#![cfg_attr(not(test), no_std)]
#![deny(missing_docs)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub use min_heap::{Key, MinHeap, MinHeapView};

#[macro_use]
#[cfg(test)]
mod test_helpers;

#[cfg(feature = "defmt")]
mod defmt;
pub mod min_heap;
#[cfg(feature = "serde")]
mod ser;

/// Error raised when an operation needs more space than the fixed capacity
/// provides.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CapacityError;

impl core::fmt::Display for CapacityError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("insufficient capacity")
    }
}

impl core::error::Error for CapacityError {}
