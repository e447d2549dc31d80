//! Replays the classic user-space exerciser against an in-memory device:
//! open, write a greeting, rewind, read it back. Run with RUST_LOG=debug
//! to watch the diagnostic events the driver would have printk'd.

use std::io::{Read, Seek, SeekFrom, Write};

use memdev::{Config, Store};

fn exercise(dev: &mut (impl Read + Write + Seek)) -> std::io::Result<()> {
	let greeting = b"Hello, Character Device!";

	dev.write_all(greeting)?;
	println!(
		"Data written to the device: {}",
		String::from_utf8_lossy(greeting)
	);

	dev.seek(SeekFrom::Start(0))?;

	let mut read_back = vec![0u8; greeting.len()];
	dev.read_exact(&mut read_back)?;
	println!(
		"Data read from the device: {}",
		String::from_utf8_lossy(&read_back)
	);

	Ok(())
}

fn main() -> std::io::Result<()> {
	env_logger::init();

	let store = Store::new(Config::default());
	exercise(&mut store.open())
}
