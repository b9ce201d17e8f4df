//! Error types for static asset fingerprinting.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for cachebuster operations.
pub type Result<T> = std::result::Result<T, CacheBusterError>;

/// Errors raised while scanning, hashing or resolving static assets.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CacheBusterError {
	/// Underlying file system error.
	#[error("file system error: {0}")]
	Io(#[from] std::io::Error),

	/// The directory scan failed part-way through.
	///
	/// Raised when a directory is unreadable or vanishes mid-walk. The
	/// whole build fails; a partial index is never published.
	#[error("directory scan failed: {0}")]
	Walk(#[from] walkdir::Error),

	/// A scanned file could not be read while computing its fingerprint.
	#[error("cannot fingerprint {}: {source}", path.display())]
	UnreadableFile {
		/// Path of the offending file.
		path: PathBuf,
		/// Underlying I/O error.
		source: std::io::Error,
	},

	/// A request path attempted to escape the configured root.
	#[error("path escapes static root: {0}")]
	PathTraversal(String),

	/// Manifest serialization failed.
	#[error("manifest error: {0}")]
	Manifest(#[from] serde_json::Error),
}
