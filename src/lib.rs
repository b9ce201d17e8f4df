//! # Cachebuster
//!
//! Content-hash fingerprinting and cache busting for static assets.
//!
//! This crate scans a directory of static files, fingerprints each file
//! by content hash, and provides the transforms web tooling needs around
//! those fingerprints:
//!
//! - **Versioned paths**: `/index.js` → `/index.<hash>.js`, for use in
//!   templates so clients can cache the asset indefinitely
//! - **Version stripping**: recover `/index.js` from an incoming
//!   `/index.<hash>.js` request before hitting the file system
//! - **Text rewriting**: substitute every known logical path inside an
//!   HTML/CSS payload with its versioned form, substring-safely
//! - **Serve planning**: pick the file path and cache lifetime to hand to
//!   an external file-streaming mechanism
//!
//! The hash is a change detector, not a security primitive. The index is
//! process-local and rebuilt wholesale on [`CacheBuster::refresh`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cachebuster::{CacheBuster, CacheBusterConfig};
//! use std::path::Path;
//!
//! fn main() -> cachebuster::Result<()> {
//!     let assets = CacheBuster::new(Path::new("static"), CacheBusterConfig::new())?;
//!
//!     // In templates
//!     let href = assets.versioned_path("/css/style.css");
//!
//!     // On the serve path
//!     let plan = assets.resolve("/css/style.4e2502b.css")?;
//!     // hand plan.file_path and plan.max_age to the file streamer
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`config`] - Recognized options with construction-time defaults
//! - [`hash`] - Content fingerprinting
//! - [`ignore`] - Directory pruning policy for the scan
//! - [`index`] - The immutable version index and its builder
//! - [`path`] - Versioned-path encode/decode transforms
//! - [`rewrite`] - Substring-safe text rewriting
//! - [`serve`] - Request resolution for the external streamer
//! - [`error`] - Error types

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod error;
pub mod hash;
pub mod ignore;
pub mod index;
pub mod path;
pub mod rewrite;
pub mod serve;

pub use config::CacheBusterConfig;
pub use error::{CacheBusterError, Result};
pub use ignore::IgnorePolicy;
pub use index::{FileRecord, VersionIndex};
pub use serve::ServePlan;

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, RwLock};

/// Fingerprinting front end for one static root.
///
/// Owns the configuration and the currently published [`VersionIndex`].
/// Construct one instance per root directory and share it by reference;
/// there is no process-wide singleton, so independent roots coexist in
/// one process and tests can point instances at fixture directories.
///
/// All read operations work against an immutable index snapshot and may
/// run concurrently without coordination. [`CacheBuster::refresh`] is the
/// only mutator: it builds a brand-new index and swaps the published
/// pointer atomically, so readers in flight see a fully consistent old or
/// new index, never a partially built one.
pub struct CacheBuster {
	root: PathBuf,
	config: CacheBusterConfig,
	index: RwLock<Arc<VersionIndex>>,
	refresh_guard: Mutex<()>,
}

impl CacheBuster {
	/// Scans `root` and publishes the initial index.
	///
	/// The scan is synchronous, blocking file-system work; run it at
	/// startup or from an administrative trigger, never per-request.
	///
	/// # Errors
	///
	/// Fails when the scan fails; see [`VersionIndex::build`].
	pub fn new(root: &Path, config: CacheBusterConfig) -> Result<Self> {
		let index = VersionIndex::build(root, &config)?;

		Ok(Self {
			root: root.to_path_buf(),
			config,
			index: RwLock::new(Arc::new(index)),
			refresh_guard: Mutex::new(()),
		})
	}

	/// Scans `root` with the default configuration.
	///
	/// # Errors
	///
	/// Fails when the scan fails; see [`VersionIndex::build`].
	pub fn with_defaults(root: &Path) -> Result<Self> {
		Self::new(root, CacheBusterConfig::new())
	}

	/// The configured static root.
	pub fn root(&self) -> &Path {
		&self.root
	}

	/// The active configuration.
	pub fn config(&self) -> &CacheBusterConfig {
		&self.config
	}

	/// Snapshot of the currently published index.
	pub fn index(&self) -> Arc<VersionIndex> {
		self.index.read().unwrap().clone()
	}

	/// Encodes a logical path into its versioned form.
	///
	/// An in-memory lookup against the current index; unknown paths pass
	/// through unchanged. See [`path::versioned_path`].
	pub fn versioned_path(&self, logical: &str) -> String {
		path::versioned_path(&self.index(), logical, &self.config.path_prefix)
	}

	/// Strips the fingerprint segment from a path, if one is present.
	///
	/// Purely syntactic; does not consult the index. See
	/// [`path::strip_version`].
	pub fn strip_version(&self, request_path: &str) -> String {
		path::strip_version(request_path, self.config.hash_len())
	}

	/// Rewrites every known logical path inside `text` to its versioned
	/// form. See [`rewrite::rewrite`].
	pub fn rewrite(&self, text: &str) -> String {
		rewrite::rewrite(text, &self.index(), &self.config.path_prefix)
	}

	/// Resolves a request path to a file path and cache lifetime for the
	/// external streamer. See [`serve::resolve`].
	///
	/// # Errors
	///
	/// Returns [`CacheBusterError::PathTraversal`] when the decoded path
	/// would escape the root.
	pub fn resolve(&self, request_path: &str) -> Result<ServePlan> {
		serve::resolve(&self.root, &self.config, request_path)
	}

	/// Rebuilds the index and atomically replaces the published one.
	///
	/// Serialized with respect to itself: at most one refresh runs at a
	/// time. The rebuild happens outside the reader lock, so readers are
	/// never blocked on file-system work and a failed rebuild leaves the
	/// previously published index untouched. Fingerprints are recomputed
	/// from file content, so every content change on disk is observed.
	///
	/// # Errors
	///
	/// Fails when the scan fails; the published index is unchanged.
	pub fn refresh(&self) -> Result<()> {
		let _serialized = self.refresh_guard.lock().unwrap();

		let next = VersionIndex::build(&self.root, &self.config)?;
		*self.index.write().unwrap() = Arc::new(next);

		tracing::debug!(root = %self.root.display(), "version index refreshed");
		Ok(())
	}
}
