//! Version index: the immutable snapshot produced by one directory scan.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::CacheBusterConfig;
use crate::error::Result;
use crate::hash;
use crate::path::versioned_path;

/// Record for a single scanned file.
#[derive(Debug, Clone)]
pub struct FileRecord {
	/// Absolute path of the file on disk.
	pub absolute_path: PathBuf,

	/// Lowercase hex content fingerprint, truncated per configuration.
	pub fingerprint: String,
}

/// Immutable mapping from logical paths to file records.
///
/// Keys are always forward-slash separated and rooted at `/`, regardless
/// of host path conventions. An index is built wholesale by one scan and
/// never mutated afterwards; a refresh produces a brand-new index.
#[derive(Debug)]
pub struct VersionIndex {
	root: PathBuf,
	hash_len: usize,
	entries: HashMap<String, FileRecord>,
}

impl VersionIndex {
	/// Scans `root` and builds the index.
	///
	/// Depth-first traversal; directories matched by the ignore policy are
	/// pruned at the directory-entry step unless `include_all` is set.
	/// Only plain files are recorded — symlinks and other non-regular
	/// entries are skipped. Fingerprints are computed eagerly, so content
	/// changes on disk are invisible until the next build.
	///
	/// # Errors
	///
	/// Any unreadable directory or file fails the whole build; a partial
	/// index is never returned.
	pub fn build(root: &Path, config: &CacheBusterConfig) -> Result<Self> {
		let hash_len = config.hash_len();
		let mut entries = HashMap::new();

		let walker = WalkDir::new(root).into_iter().filter_entry(|entry| {
			if config.include_all || !entry.file_type().is_dir() {
				return true;
			}
			!config.ignore.is_ignored(&logical_path(root, entry.path()))
		});

		for entry in walker {
			let entry = entry?;
			if !entry.file_type().is_file() {
				continue;
			}

			let fingerprint = hash::hash_file(entry.path(), hash_len)?;
			entries.insert(
				logical_path(root, entry.path()),
				FileRecord {
					absolute_path: entry.path().to_path_buf(),
					fingerprint,
				},
			);
		}

		tracing::debug!(
			files = entries.len(),
			root = %root.display(),
			"indexed static assets"
		);

		Ok(Self {
			root: root.to_path_buf(),
			hash_len,
			entries,
		})
	}

	/// The scanned root directory.
	pub fn root(&self) -> &Path {
		&self.root
	}

	/// Fingerprint length in hex characters, fixed for this index's lifetime.
	pub fn hash_len(&self) -> usize {
		self.hash_len
	}

	/// Looks up the record for a logical path.
	pub fn get(&self, logical: &str) -> Option<&FileRecord> {
		self.entries.get(logical)
	}

	/// Returns `true` when the logical path is indexed.
	pub fn contains(&self, logical: &str) -> bool {
		self.entries.contains_key(logical)
	}

	/// Fingerprint for a logical path, if indexed.
	pub fn fingerprint(&self, logical: &str) -> Option<&str> {
		self.entries.get(logical).map(|r| r.fingerprint.as_str())
	}

	/// Number of indexed files.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns `true` when no files were indexed.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Iterates over the indexed logical paths.
	pub fn logical_paths(&self) -> impl Iterator<Item = &str> {
		self.entries.keys().map(String::as_str)
	}

	/// Maps every logical path to its versioned form.
	pub fn manifest_paths(&self, prefix: &str) -> HashMap<String, String> {
		self.entries
			.keys()
			.map(|logical| (logical.clone(), versioned_path(self, logical, prefix)))
			.collect()
	}

	/// Writes the manifest as JSON under a `paths` key.
	///
	/// The shape matches the collectstatic-style manifest consumed by
	/// build tooling: `{"paths": {"/app.js": "/app.<hash>.js", ...}}`.
	///
	/// # Errors
	///
	/// Returns an error when serialization or the write fails.
	pub fn write_manifest(&self, manifest_path: &Path, prefix: &str) -> Result<()> {
		let manifest = serde_json::json!({
			"paths": self.manifest_paths(prefix),
		});
		let content = serde_json::to_string_pretty(&manifest)?;
		fs::write(manifest_path, content)?;
		Ok(())
	}
}

/// `/` + forward-slash path of `path` relative to `root`.
fn logical_path(root: &Path, path: &Path) -> String {
	let relative = path.strip_prefix(root).unwrap_or(path);
	let joined = relative
		.components()
		.map(|c| c.as_os_str().to_string_lossy())
		.collect::<Vec<_>>()
		.join("/");

	format!("/{joined}")
}
