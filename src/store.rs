//! The store itself: one fixed, zero-initialized byte buffer behind
//! per-open cursors.
//!
//! Concurrency policy: the hardware-facing original applies no locking
//! around its copies, so racing callers could observe torn byte ranges.
//! Here the whole buffer sits behind a single mutex, held for the duration
//! of each read or write. Single-handle behaviour is unchanged; racing
//! transfers now land in some serial order instead of interleaving
//! mid-copy. The open counter is a relaxed atomic for the same reason.

use core::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::{debug, info};

use crate::copy::{Dst, Src};
use crate::unit;

/// The one tunable: how many bytes the store holds. Must be positive.
#[derive(Clone, Copy, Debug)]
pub struct Config {
	pub capacity: unit::Byte,
}

impl Default for Config {
	fn default() -> Self {
		Self { capacity: unit::Byte(1024) }
	}
}

/// How a seek target is computed from the supplied offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Whence {
	/// From the start of the buffer.
	Abs,
	/// From the cursor.
	Cur,
	/// From the end of the buffer - its capacity, not how much has been
	/// written.
	End,
}

/// The seek target fell outside `0..=capacity`. The cursor is untouched,
/// so the caller can retry with a corrected offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InvalidSeekTarget {
	pub offset: i64,
	pub whence: Whence,
	pub capacity: unit::Byte,
}

impl fmt::Display for InvalidSeekTarget {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"seek offset {} ({:?}) lands outside 0..={}",
			self.offset, self.whence, self.capacity
		)
	}
}

impl std::error::Error for InvalidSeekTarget {}

struct Shared {
	mem: Mutex<Box<[u8]>>,
	opens: AtomicU64,
	capacity: unit::Byte,
}

/// A bounded random-access byte store: fixed capacity, zero-initialized,
/// shared by every handle opened on it.
///
/// Plays the role a fixed kernel buffer plays for a character device, as an
/// owned value: construct one per test, per simulated device, per whatever.
pub struct Store {
	shared: Arc<Shared>,
}

impl Store {
	pub fn new(config: Config) -> Self {
		let unit::Byte(capacity) = config.capacity;
		let shared = Shared {
			mem: Mutex::new(vec![0; capacity].into_boxed_slice()),
			opens: AtomicU64::new(0),
			capacity: config.capacity,
		};
		Self { shared: Arc::new(shared) }
	}

	pub fn capacity(&self) -> unit::Byte {
		self.shared.capacity
	}

	/// Times the store has been opened over its lifetime. Diagnostic only;
	/// nothing gates on it.
	pub fn open_count(&self) -> u64 {
		self.shared.opens.load(Ordering::Relaxed)
	}

	/// Hand out a fresh cursor over the shared bytes. Cannot fail; any
	/// number of handles may be live at once.
	pub fn open(&self) -> Handle {
		let opens = self.shared.opens.fetch_add(1, Ordering::Relaxed) + 1;
		info!("device opened {} times", opens);
		Handle { shared: Arc::clone(&self.shared), pos: unit::Byte(0) }
	}
}

/// One open session: a cursor over the store's bytes.
///
/// Each handle owns its cursor outright; all handles read and write the
/// same underlying buffer. The handle keeps the store alive, so it can
/// outlive the [`Store`] value it came from. Dropping it is the release
/// operation.
pub struct Handle {
	shared: Arc<Shared>,
	pos: unit::Byte,
}

impl Handle {
	pub fn position(&self) -> unit::Byte {
		self.pos
	}

	pub fn capacity(&self) -> unit::Byte {
		self.shared.capacity
	}

	/// Copy out up to `dst.requested()` bytes at the cursor, advancing it
	/// by the bytes that actually landed. Short at the end of the buffer,
	/// zero once the cursor sits at capacity; neither is an error.
	pub fn read(&mut self, dst: &mut (impl Dst + ?Sized)) -> unit::Byte {
		let mem = lock(&self.shared.mem);
		let unit::Byte(pos) = self.pos;
		let available = mem.len() - pos;
		let to_copy = dst.requested().min(available);
		let not_copied = dst.copy_in(&mem[pos..pos + to_copy]);
		let transferred = to_copy - not_copied;
		self.pos += unit::Byte(transferred);
		debug!("read {} bytes", transferred);
		unit::Byte(transferred)
	}

	/// Copy in up to `src.offered()` bytes at the cursor, advancing it by
	/// the bytes that actually landed. Zero once the store is full at the
	/// cursor; the excess is silently not accepted.
	pub fn write(&mut self, src: &(impl Src + ?Sized)) -> unit::Byte {
		let mut mem = lock(&self.shared.mem);
		let unit::Byte(pos) = self.pos;
		let available = mem.len() - pos;
		let to_copy = src.offered().min(available);
		let not_copied = src.copy_out(&mut mem[pos..pos + to_copy]);
		let transferred = to_copy - not_copied;
		self.pos += unit::Byte(transferred);
		debug!("wrote {} bytes", transferred);
		unit::Byte(transferred)
	}

	/// Move the cursor. The target must land in `0..=capacity`; the bound
	/// is the full capacity, so seeking into the untouched tail is legal
	/// and reads back zeroes.
	pub fn seek(
		&mut self,
		offset: i64,
		whence: Whence,
	) -> Result<unit::Byte, InvalidSeekTarget> {
		let unit::Byte(capacity) = self.shared.capacity;
		let base = match whence {
			Whence::Abs => 0,
			Whence::Cur => self.pos.0,
			Whence::End => capacity,
		};
		// wide arithmetic, so no target can alias a legal one by wrapping
		let target = base as i128 + i128::from(offset);
		if target < 0 || target > capacity as i128 {
			return Err(InvalidSeekTarget {
				offset,
				whence,
				capacity: self.shared.capacity,
			});
		}
		self.pos = unit::Byte(target as usize);
		Ok(self.pos)
	}
}

impl Drop for Handle {
	fn drop(&mut self) {
		debug!("device closed");
	}
}

/// A poisoned lock means a peer panicked mid-copy. The contents are plain
/// bytes and every operation leaves them structurally valid, so carry on
/// with whatever is there.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
	mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
