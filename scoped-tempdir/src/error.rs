// Copyright 2020 Parity Technologies
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Errors that can occur while acquiring or releasing a temporary directory.

use std::{error::Error as StdError, fmt, io, path::PathBuf, result};

/// Temporary directory result.
pub type Result<T> = result::Result<T, Error>;

/// An error raised by the directory itself, as opposed to the scope using it.
#[derive(Debug)]
pub enum Error {
	/// No unique directory could be created under the temp root.
	DirectoryCreation(io::Error),
	/// The directory tree could not be removed completely.
	DirectoryCleanup {
		/// Root of the tree that was being removed.
		path: PathBuf,
		/// Underlying I/O failure.
		source: io::Error,
	},
}

impl Error {
	/// Kind of the underlying I/O failure.
	pub fn kind(&self) -> io::ErrorKind {
		match self {
			Error::DirectoryCreation(err) => err.kind(),
			Error::DirectoryCleanup { source, .. } => source.kind(),
		}
	}
}

impl StdError for Error {
	fn source(&self) -> Option<&(dyn StdError + 'static)> {
		match self {
			Error::DirectoryCreation(err) => Some(err),
			Error::DirectoryCleanup { source, .. } => Some(source),
		}
	}
}

impl fmt::Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Error::DirectoryCreation(err) => write!(f, "failed to create temporary directory: {}", err),
			Error::DirectoryCleanup { path, source } =>
				write!(f, "failed to remove temporary directory {}: {}", path.display(), source),
		}
	}
}

impl From<Error> for io::Error {
	fn from(err: Error) -> io::Error {
		io::Error::new(err.kind(), err)
	}
}

/// Failure of a scope run by [`with_temporary_directory`](crate::with_temporary_directory).
///
/// A failure of the scope body always takes priority. A cleanup failure that
/// happens while unwinding from it is kept alongside as `suppressed`.
#[derive(Debug)]
pub enum ScopeError<E> {
	/// The directory could not be created, or the body succeeded and the
	/// directory could not be removed afterwards.
	Directory(Error),
	/// The body failed.
	Body {
		/// The original failure.
		error: E,
		/// Cleanup failure observed after the body failed.
		suppressed: Option<Error>,
	},
}

impl<E> ScopeError<E> {
	/// The failure returned by the body, if the body ran and failed.
	pub fn body_error(&self) -> Option<&E> {
		match self {
			ScopeError::Body { error, .. } => Some(error),
			ScopeError::Directory(_) => None,
		}
	}

	/// Consume `self` returning the body failure, if any.
	pub fn into_body_error(self) -> Option<E> {
		match self {
			ScopeError::Body { error, .. } => Some(error),
			ScopeError::Directory(_) => None,
		}
	}

	/// Cleanup failure hidden behind a body failure.
	pub fn suppressed(&self) -> Option<&Error> {
		match self {
			ScopeError::Body { suppressed, .. } => suppressed.as_ref(),
			ScopeError::Directory(_) => None,
		}
	}

	/// The directory failure, if it is the primary one.
	pub fn directory_error(&self) -> Option<&Error> {
		match self {
			ScopeError::Directory(err) => Some(err),
			ScopeError::Body { .. } => None,
		}
	}
}

impl<E: fmt::Display> fmt::Display for ScopeError<E> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ScopeError::Directory(err) => err.fmt(f),
			ScopeError::Body { error, suppressed: None } => error.fmt(f),
			ScopeError::Body { error, suppressed: Some(cleanup) } => write!(f, "{} (suppressed: {})", error, cleanup),
		}
	}
}

impl<E: StdError + 'static> StdError for ScopeError<E> {
	fn source(&self) -> Option<&(dyn StdError + 'static)> {
		match self {
			ScopeError::Directory(err) => Some(err),
			ScopeError::Body { error, .. } => Some(error),
		}
	}
}

impl<E> From<Error> for ScopeError<E> {
	fn from(err: Error) -> Self {
		ScopeError::Directory(err)
	}
}
