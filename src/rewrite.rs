//! Substring-safe rewriting of logical paths inside text payloads.

use crate::index::VersionIndex;
use crate::path::versioned_path;

/// Replaces every occurrence of each indexed logical path in `text` with
/// its versioned form.
///
/// Paths are substituted longest-first: a path that is a prefix of
/// another (`/font.woff` inside `/font.woff2`) must not be rewritten
/// before the longer one, or its occurrences inside the longer path would
/// be corrupted by a partial replacement. Matching is literal — logical
/// paths may contain characters with special meaning in pattern
/// languages, so no pattern engine is involved.
///
/// The index is read-only for this operation; unknown text is left
/// untouched.
pub fn rewrite(text: &str, index: &VersionIndex, prefix: &str) -> String {
	let mut paths: Vec<&str> = index.logical_paths().collect();
	paths.sort_unstable_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

	let mut output = text.to_string();
	for logical in paths {
		if !output.contains(logical) {
			continue;
		}
		output = output.replace(logical, &versioned_path(index, logical, prefix));
	}

	output
}
