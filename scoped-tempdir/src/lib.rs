// Copyright 2020 Parity Technologies
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Scoped temporary directories.
//!
//! [`with_temporary_directory`] creates a uniquely named directory under the
//! system temp root, runs a closure with its path and removes the whole tree
//! afterwards, whether the closure returned `Ok`, `Err` or panicked.
//!
//! ```
//! use std::{fs, io};
//! use scoped_tempdir::with_temporary_directory;
//!
//! let len = with_temporary_directory(|dir| -> io::Result<u64> {
//! 	fs::write(dir.join("a.txt"), b"hello")?;
//! 	Ok(fs::metadata(dir.join("a.txt"))?.len())
//! })
//! .unwrap();
//! assert_eq!(len, 5);
//! ```

#![warn(missing_docs)]

mod dir;
mod error;

use std::path::Path;

pub use crate::{
	dir::TemporaryDirectory,
	error::{Error, Result, ScopeError},
};

/// Run `body` with the path of a fresh empty directory under the system temp
/// root, then remove the directory and everything in it.
///
/// A failure returned by `body` is reported as [`ScopeError::Body`] and takes
/// priority over a failure to remove the directory, which is kept as
/// `suppressed`. If `body` panics the directory is still removed while
/// unwinding.
pub fn with_temporary_directory<T, E, F>(body: F) -> std::result::Result<T, ScopeError<E>>
where
	F: FnOnce(&Path) -> std::result::Result<T, E>,
{
	run(TemporaryDirectory::new()?, body)
}

/// Same as [`with_temporary_directory`], creating the directory under `root`.
pub fn with_temporary_directory_in<P, T, E, F>(root: P, body: F) -> std::result::Result<T, ScopeError<E>>
where
	P: AsRef<Path>,
	F: FnOnce(&Path) -> std::result::Result<T, E>,
{
	run(TemporaryDirectory::new_in(root)?, body)
}

fn run<T, E, F>(dir: TemporaryDirectory, body: F) -> std::result::Result<T, ScopeError<E>>
where
	F: FnOnce(&Path) -> std::result::Result<T, E>,
{
	let outcome = body(dir.path());
	let cleanup = dir.close();
	match (outcome, cleanup) {
		(Ok(value), Ok(())) => Ok(value),
		(Ok(_), Err(err)) => Err(ScopeError::Directory(err)),
		(Err(error), cleanup) => Err(ScopeError::Body { error, suppressed: cleanup.err() }),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::{fs, io};

	#[test]
	fn returns_body_value() {
		let value = with_temporary_directory(|_| Ok::<_, io::Error>(42)).unwrap();
		assert_eq!(value, 42);
	}

	#[test]
	fn body_does_not_run_without_a_directory() {
		let root = tempfile::tempdir().unwrap();
		let mut ran = false;
		let err = with_temporary_directory_in(root.path().join("missing"), |_| {
			ran = true;
			Ok::<_, io::Error>(())
		})
		.unwrap_err();

		assert!(!ran);
		assert!(matches!(err.directory_error(), Some(Error::DirectoryCreation(_))));
		assert!(err.body_error().is_none());
	}

	#[test]
	fn early_return_removes_directory() {
		let mut seen = None;
		let found: std::result::Result<Option<u32>, ScopeError<io::Error>> = with_temporary_directory(|dir| {
			seen = Some(dir.to_path_buf());
			for n in 0..10 {
				fs::write(dir.join(n.to_string()), b"")?;
				if n == 3 {
					return Ok(Some(n));
				}
			}
			Ok(None)
		});

		assert_eq!(found.unwrap(), Some(3));
		assert!(!seen.unwrap().exists());
	}
}
