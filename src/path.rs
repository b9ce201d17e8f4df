//! Path codec: the encode/decode transforms between logical and
//! versioned paths.
//!
//! Encoding inserts the fingerprint as the second-to-last dot-segment of
//! the file name (`/index.js` → `/index.<hash>.js`); decoding strips a
//! segment that looks like a fingerprint of the configured length.
//! Decoding is purely syntactic — it never consults the index, because it
//! runs on the serve path before any lookup. A file whose name
//! legitimately carries a hex segment of exactly the configured length
//! (e.g. `data.abcdef0.html` with short hashes) is therefore stripped
//! even though it was never fingerprinted; this lossy heuristic is
//! deliberate and kept for compatibility.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::index::VersionIndex;

static HEX_SEGMENT: Lazy<Regex> = Lazy::new(|| {
	Regex::new("^[0-9a-fA-F]+$").expect("hex segment pattern is valid")
});

/// Encodes a logical path into its versioned form.
///
/// Unknown paths pass through unchanged: the caller must treat the result
/// as "this asset is not versioned", not as an error. For known paths the
/// fingerprint becomes the second-to-last dot-segment of the file name
/// and `prefix` is prepended to the directory portion.
///
/// A file name without a `.` is handled by the same rule — its whole name
/// is treated as the extension, so `/LICENSE` becomes
/// `/<fingerprint>.LICENSE`. Such paths cannot be recovered by
/// [`strip_version`], which requires at least three segments.
pub fn versioned_path(index: &VersionIndex, logical: &str, prefix: &str) -> String {
	let Some(record) = index.get(logical) else {
		return logical.to_string();
	};

	let (dir, file_name) = split_file_name(logical);
	let mut segments: Vec<&str> = file_name.split('.').collect();
	let extension = segments.pop().unwrap_or_default();
	segments.push(record.fingerprint.as_str());
	segments.push(extension);

	let prefix = prefix.trim_end_matches('/');
	format!("{prefix}{dir}/{}", segments.join("."))
}

/// Decodes a versioned path back to its logical form.
///
/// When the file name has at least three dot-segments and the
/// second-to-last one is exactly `hash_len` hex characters
/// (case-insensitive), that segment is removed; otherwise the input is
/// returned unchanged. Output keeps forward slashes.
pub fn strip_version(path: &str, hash_len: usize) -> String {
	let (dir, file_name) = split_file_name(path);
	let segments: Vec<&str> = file_name.split('.').collect();

	if segments.len() < 3 {
		return path.to_string();
	}

	let hash_position = segments.len() - 2;
	let candidate = segments[hash_position];
	if candidate.len() != hash_len || !HEX_SEGMENT.is_match(candidate) {
		return path.to_string();
	}

	let mut stripped: Vec<&str> = segments[..hash_position].to_vec();
	stripped.push(segments[segments.len() - 1]);
	let stripped_name = stripped.join(".");

	if path.contains('/') {
		format!("{dir}/{stripped_name}")
	} else {
		stripped_name
	}
}

/// Splits a slash-separated path into directory and file-name portions.
fn split_file_name(path: &str) -> (&str, &str) {
	match path.rfind('/') {
		Some(pos) => (&path[..pos], &path[pos + 1..]),
		None => ("", path),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::config::CacheBusterConfig;
	use crate::hash::{FULL_HASH_LEN, SHORT_HASH_LEN};
	use rstest::rstest;
	use std::fs;
	use tempfile::TempDir;

	fn indexed_root(config: &CacheBusterConfig) -> (TempDir, VersionIndex) {
		let temp_dir = TempDir::new().unwrap();
		fs::write(temp_dir.path().join("index.js"), "console.log('hi');").unwrap();
		fs::create_dir(temp_dir.path().join("css")).unwrap();
		fs::write(temp_dir.path().join("css/style.css"), "body { color: red; }").unwrap();
		fs::write(temp_dir.path().join("LICENSE"), "MIT").unwrap();

		let index = VersionIndex::build(temp_dir.path(), config).unwrap();
		(temp_dir, index)
	}

	#[rstest]
	fn test_versioned_path_inserts_hash_before_extension() {
		let config = CacheBusterConfig::new();
		let (_root, index) = indexed_root(&config);

		let versioned = versioned_path(&index, "/index.js", "/");
		let segments: Vec<&str> = versioned.split('.').collect();
		assert_eq!(segments.len(), 3);
		assert_eq!(segments[0], "/index");
		assert_eq!(segments[2], "js");
		assert_eq!(segments[1].len(), SHORT_HASH_LEN);
	}

	#[rstest]
	fn test_versioned_path_long_hash() {
		let config = CacheBusterConfig::new().with_short_hash(false);
		let (_root, index) = indexed_root(&config);

		let versioned = versioned_path(&index, "/index.js", "/");
		let segments: Vec<&str> = versioned.split('.').collect();
		assert_eq!(segments[1].len(), FULL_HASH_LEN);
	}

	#[rstest]
	fn test_versioned_path_applies_prefix_to_directory_only() {
		let config = CacheBusterConfig::new();
		let (_root, index) = indexed_root(&config);

		let versioned = versioned_path(&index, "/css/style.css", "/prefix");
		assert!(versioned.starts_with("/prefix/css/style."));
		assert!(versioned.ends_with(".css"));
	}

	#[rstest]
	fn test_versioned_path_unknown_passes_through() {
		let config = CacheBusterConfig::new();
		let (_root, index) = indexed_root(&config);

		assert_eq!(versioned_path(&index, "/unknown.js", "/"), "/unknown.js");
	}

	#[rstest]
	fn test_versioned_path_no_extension() {
		let config = CacheBusterConfig::new();
		let (_root, index) = indexed_root(&config);

		let versioned = versioned_path(&index, "/LICENSE", "/");
		let segments: Vec<&str> = versioned.split('.').collect();
		assert_eq!(segments.len(), 2);
		assert_eq!(segments[0].trim_start_matches('/').len(), SHORT_HASH_LEN);
		assert_eq!(segments[1], "LICENSE");
	}

	#[rstest]
	fn test_strip_version_round_trip() {
		let config = CacheBusterConfig::new();
		let (_root, index) = indexed_root(&config);

		for logical in ["/index.js", "/css/style.css"] {
			let versioned = versioned_path(&index, logical, "/");
			assert_eq!(strip_version(&versioned, SHORT_HASH_LEN), logical);
		}
	}

	#[rstest]
	#[case("/script.4e2502b.js", "/script.js")]
	#[case("/script.js", "/script.js")]
	#[case("/script.abcdefg.html", "/script.abcdefg.html")]
	#[case("/a/b/app.0123abc.min.css", "/a/b/app.0123abc.min.css")]
	#[case("/a/b/app.min.0123abc.css", "/a/b/app.min.css")]
	fn test_strip_version_short(#[case] input: &str, #[case] expected: &str) {
		assert_eq!(strip_version(input, SHORT_HASH_LEN), expected);
	}

	#[rstest]
	#[case("/script.4e2502b01a4c92b0a51b1a5a3271eab6.js", "/script.js")]
	#[case("/script.js", "/script.js")]
	#[case(
		"/script.abcdefgabcdefgabcdefgabcdefgabcd.html",
		"/script.abcdefgabcdefgabcdefgabcdefgabcd.html"
	)]
	fn test_strip_version_long(#[case] input: &str, #[case] expected: &str) {
		assert_eq!(strip_version(input, FULL_HASH_LEN), expected);
	}

	#[rstest]
	fn test_strip_version_case_insensitive_hex() {
		assert_eq!(strip_version("/script.4E2502B.js", SHORT_HASH_LEN), "/script.js");
	}

	#[rstest]
	fn test_strip_version_needs_three_segments() {
		// A two-segment name can never carry a fingerprint
		assert_eq!(strip_version("/4e2502b.js", SHORT_HASH_LEN), "/4e2502b.js");
	}
}
