//! An in-memory stand-in for a fixed-size character device: one bounded,
//! zero-initialized byte buffer behind POSIX-file-like
//! open/read/write/seek.
//!
//! The following implementation notes may be useful:
//! - All memory is allocated at construction; the buffer never grows.
//! - Short reads and writes at the capacity boundary are success, not
//!   errors. Callers must tolerate partial transfers.
//! - Every handle carries its own cursor; all handles share the same bytes.
//! - The only failure in the whole crate is a seek outside the buffer.
//! - Handles also implement the std io traits, for use as a simulated file.

pub mod copy;
mod io;
mod store;
#[cfg(test)]
mod test_utils;
pub mod unit;

pub use store::{Config, Handle, InvalidSeekTarget, Store, Whence};
