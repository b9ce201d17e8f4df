//! Configuration for asset fingerprinting and serving.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::hash::{FULL_HASH_LEN, SHORT_HASH_LEN};
use crate::ignore::IgnorePolicy;

const ONE_YEAR: Duration = Duration::from_secs(60 * 60 * 24 * 365);

/// Configuration for a [`CacheBuster`](crate::CacheBuster) instance.
///
/// All recognized options are enumerated here with their defaults applied
/// at construction; there is no dynamic option bag.
///
/// # Example
///
/// ```rust
/// use cachebuster::CacheBusterConfig;
///
/// let config = CacheBusterConfig::new()
///     .with_short_hash(false)
///     .with_path_prefix("/static");
/// assert_eq!(config.hash_len(), 32);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheBusterConfig {
	/// Scan ignored directories too.
	pub include_all: bool,

	/// Use the truncated 7-character fingerprint instead of the full
	/// 32-character one.
	pub short_hash: bool,

	/// Prefix prepended to the directory portion of versioned paths.
	pub path_prefix: String,

	/// Cache lifetime handed to the streamer for non-fingerprinted
	/// requests. Zero forces revalidation.
	pub non_hashed_max_age: Duration,

	/// Cache lifetime handed to the streamer for fingerprinted requests.
	pub hashed_max_age: Duration,

	/// Directory pruning policy applied during the scan.
	pub ignore: IgnorePolicy,
}

impl CacheBusterConfig {
	/// Creates a configuration with the default options.
	pub fn new() -> Self {
		Self {
			include_all: false,
			short_hash: true,
			path_prefix: "/".to_string(),
			non_hashed_max_age: Duration::ZERO,
			hashed_max_age: ONE_YEAR,
			ignore: IgnorePolicy::default(),
		}
	}

	/// Sets whether ignored directories are scanned too.
	pub fn with_include_all(mut self, include_all: bool) -> Self {
		self.include_all = include_all;
		self
	}

	/// Sets whether fingerprints are truncated to the short form.
	pub fn with_short_hash(mut self, short_hash: bool) -> Self {
		self.short_hash = short_hash;
		self
	}

	/// Sets the prefix prepended to versioned paths.
	pub fn with_path_prefix(mut self, path_prefix: impl Into<String>) -> Self {
		self.path_prefix = path_prefix.into();
		self
	}

	/// Sets the cache lifetime for non-fingerprinted requests.
	pub fn with_non_hashed_max_age(mut self, max_age: Duration) -> Self {
		self.non_hashed_max_age = max_age;
		self
	}

	/// Sets the cache lifetime for fingerprinted requests.
	pub fn with_hashed_max_age(mut self, max_age: Duration) -> Self {
		self.hashed_max_age = max_age;
		self
	}

	/// Replaces the directory pruning policy.
	pub fn with_ignore(mut self, ignore: IgnorePolicy) -> Self {
		self.ignore = ignore;
		self
	}

	/// Fingerprint length in hex characters for this configuration.
	pub fn hash_len(&self) -> usize {
		if self.short_hash {
			SHORT_HASH_LEN
		} else {
			FULL_HASH_LEN
		}
	}
}

impl Default for CacheBusterConfig {
	fn default() -> Self {
		Self::new()
	}
}
