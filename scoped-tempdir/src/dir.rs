// Copyright 2020 Parity Technologies
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Owned temporary directory handle.

use std::{
	fmt, io,
	path::{Path, PathBuf},
};

use log::{debug, warn};
use tempfile::TempDir;

use crate::error::{Error, Result};

/// A uniquely named directory that is removed, with everything under it, when
/// the handle is closed or dropped.
pub struct TemporaryDirectory {
	// `None` only after `close` has taken it.
	inner: Option<TempDir>,
	path: PathBuf,
}

impl TemporaryDirectory {
	/// Create a new empty directory under the system temp root.
	pub fn new() -> Result<TemporaryDirectory> {
		TempDir::new().map(Self::from_tempdir).map_err(Error::DirectoryCreation)
	}

	/// Create a new empty directory under `root`, which must already exist.
	pub fn new_in<P: AsRef<Path>>(root: P) -> Result<TemporaryDirectory> {
		TempDir::new_in(root).map(Self::from_tempdir).map_err(Error::DirectoryCreation)
	}

	fn from_tempdir(inner: TempDir) -> TemporaryDirectory {
		let path = inner.path().to_path_buf();
		debug!(target: "tempdir", "created {}", path.display());
		TemporaryDirectory { inner: Some(inner), path }
	}

	/// Path of the directory. Valid as long as `self` is alive.
	pub fn path(&self) -> &Path {
		&self.path
	}

	/// Remove the directory tree, reporting any failure.
	///
	/// A tree that is already gone counts as removed.
	pub fn close(mut self) -> Result<()> {
		match self.inner.take() {
			Some(inner) => remove(inner, &self.path),
			None => Ok(()),
		}
	}
}

fn remove(inner: TempDir, path: &Path) -> Result<()> {
	match inner.close() {
		Ok(()) => {
			debug!(target: "tempdir", "removed {}", path.display());
			Ok(())
		},
		Err(ref err) if err.kind() == io::ErrorKind::NotFound => {
			debug!(target: "tempdir", "{} was already removed", path.display());
			Ok(())
		},
		Err(source) => Err(Error::DirectoryCleanup { path: path.to_path_buf(), source }),
	}
}

impl Drop for TemporaryDirectory {
	fn drop(&mut self) {
		if let Some(inner) = self.inner.take() {
			if let Err(err) = remove(inner, &self.path) {
				warn!(target: "tempdir", "{}", err);
			}
		}
	}
}

impl AsRef<Path> for TemporaryDirectory {
	fn as_ref(&self) -> &Path {
		self.path()
	}
}

impl fmt::Debug for TemporaryDirectory {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("TemporaryDirectory").field("path", &self.path).finish()
	}
}
