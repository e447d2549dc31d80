//! A handle as a file: the standard io traits over the store's operations,
//! so a [`Handle`] drops in anywhere a seekable stream is expected.

use std::io;

use crate::store::{Handle, Whence};

impl io::Read for Handle {
	fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
		Ok(Handle::read(self, buf).into())
	}
}

impl io::Write for Handle {
	fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
		Ok(Handle::write(self, buf).into())
	}

	fn flush(&mut self) -> io::Result<()> {
		Ok(())
	}
}

impl io::Seek for Handle {
	fn seek(&mut self, pos: io::SeekFrom) -> io::Result<u64> {
		let (offset, whence) = match pos {
			io::SeekFrom::Start(n) => {
				let offset = i64::try_from(n).map_err(|_| {
					io::Error::new(
						io::ErrorKind::InvalidInput,
						"seek offset does not fit in i64",
					)
				})?;
				(offset, Whence::Abs)
			}
			io::SeekFrom::Current(n) => (n, Whence::Cur),
			io::SeekFrom::End(n) => (n, Whence::End),
		};

		let new_pos = Handle::seek(self, offset, whence)
			.map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

		Ok(usize::from(new_pos) as u64)
	}
}
