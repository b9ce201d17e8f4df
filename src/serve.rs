//! Serve-path resolution.
//!
//! Decodes an incoming request path and chooses the cache lifetime the
//! external file-streaming mechanism should use. The streamer owns byte
//! ranges, conditional requests and 404 generation; this module only
//! decides which file and which lifetime.

use std::path::{Component, Path, PathBuf};
use std::time::Duration;

use crate::config::CacheBusterConfig;
use crate::error::{CacheBusterError, Result};
use crate::path::strip_version;

/// Everything the external file-streaming mechanism needs to serve one
/// request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServePlan {
	/// Absolute path of the file to stream. Existence is not checked
	/// here; a missing file surfaces as the streamer's own not-found
	/// signal and should fall through to the next handler.
	pub file_path: PathBuf,

	/// Cache lifetime for the response.
	pub max_age: Duration,

	/// Guessed MIME type, octet-stream when unknown.
	pub mime_type: String,

	/// Whether the request path carried a fingerprint segment.
	pub fingerprinted: bool,
}

/// Resolves a request path against `root`.
///
/// The query string and fragment are ignored for resolution. If stripping
/// the fingerprint changed the path, the asset is immutable for the
/// client and gets the long lifetime; otherwise the non-hashed default
/// applies (commonly zero, forcing revalidation).
///
/// # Errors
///
/// Returns [`CacheBusterError::PathTraversal`] when the decoded path
/// would escape `root`.
pub fn resolve(root: &Path, config: &CacheBusterConfig, request_path: &str) -> Result<ServePlan> {
	let path_portion = request_path
		.split(['?', '#'])
		.next()
		.unwrap_or(request_path);

	let stripped = strip_version(path_portion, config.hash_len());
	let fingerprinted = stripped != path_portion;

	let file_path = safe_join(root, &stripped)?;
	let mime_type = mime_guess::from_path(&file_path)
		.first_or_octet_stream()
		.to_string();

	let max_age = if fingerprinted {
		config.hashed_max_age
	} else {
		config.non_hashed_max_age
	};

	Ok(ServePlan {
		file_path,
		max_age,
		mime_type,
		fingerprinted,
	})
}

/// Joins `name` under `root`, rejecting components that would escape it.
fn safe_join(root: &Path, name: &str) -> Result<PathBuf> {
	let relative = name.trim_start_matches('/');
	let mut joined = root.to_path_buf();

	for component in Path::new(relative).components() {
		match component {
			Component::Normal(part) => joined.push(part),
			Component::CurDir => {}
			_ => {
				tracing::warn!(path = name, "path traversal attempt blocked");
				return Err(CacheBusterError::PathTraversal(name.to_string()));
			}
		}
	}

	Ok(joined)
}
