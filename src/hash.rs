//! Content fingerprinting.
//!
//! The fingerprint is an MD5 digest of the file's raw bytes, hex-encoded
//! in lowercase. It is a change detector for cache busting, not a
//! security primitive; the truncated short form trades collision margin
//! for shorter URLs.

use md5::{Digest, Md5};
use std::fs;
use std::path::Path;

use crate::error::{CacheBusterError, Result};

/// Length in hex characters of the full digest.
pub const FULL_HASH_LEN: usize = 32;

/// Length in hex characters of the truncated short form.
pub const SHORT_HASH_LEN: usize = 7;

/// Computes the lowercase hex MD5 digest of `content`.
pub fn digest(content: &[u8]) -> String {
	hex::encode(Md5::digest(content))
}

/// Fingerprints the file at `path`, truncated to `hash_len` hex characters.
///
/// # Errors
///
/// Returns [`CacheBusterError::UnreadableFile`] when the file cannot be
/// read (permissions, deleted between listing and hashing). Callers treat
/// this as fatal for the whole build.
pub fn hash_file(path: &Path, hash_len: usize) -> Result<String> {
	let content = fs::read(path).map_err(|source| CacheBusterError::UnreadableFile {
		path: path.to_path_buf(),
		source,
	})?;

	let mut fingerprint = digest(&content);
	fingerprint.truncate(hash_len);

	Ok(fingerprint)
}
