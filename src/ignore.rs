//! Directory pruning policy for the index scan.

use serde::{Deserialize, Serialize};

/// Directories excluded from scanning, matched by substring.
///
/// A directory (and everything beneath it) is skipped when its
/// root-relative path contains any of the listed substrings. The default
/// set covers the conventional tooling directories nobody wants versioned
/// as a static asset; it can be swapped wholesale via
/// [`IgnorePolicy::new`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IgnorePolicy {
	directories: Vec<String>,
}

impl IgnorePolicy {
	/// Creates a policy from an explicit list of directory-name substrings.
	pub fn new<I, S>(directories: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			directories: directories.into_iter().map(Into::into).collect(),
		}
	}

	/// Creates a policy that ignores nothing.
	pub fn empty() -> Self {
		Self {
			directories: Vec::new(),
		}
	}

	/// Returns `true` when `relative_dir` matches any ignored substring.
	pub fn is_ignored(&self, relative_dir: &str) -> bool {
		self.directories
			.iter()
			.any(|name| relative_dir.contains(name.as_str()))
	}

	/// The configured substrings.
	pub fn directories(&self) -> &[String] {
		&self.directories
	}
}

impl Default for IgnorePolicy {
	fn default() -> Self {
		Self::new([
			".git",
			".nyc_output",
			".sass-cache",
			".vscode",
			"bower_components",
			"coverage",
			"node_modules",
		])
	}
}
