//! "Domain integers" - an attempt to bring something like F#s unit of measure.
use core::fmt;
use derive_more::*;

/// A quantity of bytes: a cursor position, a capacity, or the verified
/// length of a transfer.
#[repr(transparent)]
#[derive(
	Add, AddAssign, Clone, Copy, From, Into, PartialEq, PartialOrd, Sub,
)]
pub struct Byte(pub usize);

impl fmt::Display for Byte {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{} <byte>", self.0)
	}
}

impl fmt::Debug for Byte {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{:?}", self.0)
	}
}
