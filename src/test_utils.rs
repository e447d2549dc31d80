//! Faulty boundary peers, for exercising partial transfers.
use crate::copy::{Dst, Src};

/// Destination that takes only the first `good` bytes, like a peer whose
/// mapping vanished mid-copy.
pub struct VanishingDst {
	pub mem: Vec<u8>,
	pub good: usize,
}

impl Dst for VanishingDst {
	fn requested(&self) -> usize {
		self.mem.len()
	}

	fn copy_in(&mut self, src: &[u8]) -> usize {
		let landed = src.len().min(self.good);
		self.mem[..landed].copy_from_slice(&src[..landed]);
		src.len() - landed
	}
}

/// Source that supplies only the first `good` bytes.
pub struct VanishingSrc {
	pub mem: Vec<u8>,
	pub good: usize,
}

impl Src for VanishingSrc {
	fn offered(&self) -> usize {
		self.mem.len()
	}

	fn copy_out(&self, dst: &mut [u8]) -> usize {
		let landed = dst.len().min(self.good);
		dst[..landed].copy_from_slice(&self.mem[..landed]);
		dst.len() - landed
	}
}
