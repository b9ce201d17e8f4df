//! Shared test fixtures for cachebuster integration tests.
//!
//! Each fixture builds a temporary static root with a known file layout;
//! the `TempDir` guard keeps it alive for the test's duration.

use std::fs;
use tempfile::TempDir;

/// Creates a static root with a typical asset layout:
///
/// ```text
/// index.js
/// LICENSE
/// css/style.css
/// ```
pub fn asset_root() -> TempDir {
	let temp_dir = TempDir::new().unwrap();
	fs::write(temp_dir.path().join("index.js"), "console.log('hello');").unwrap();
	fs::write(temp_dir.path().join("LICENSE"), "MIT").unwrap();

	let css_dir = temp_dir.path().join("css");
	fs::create_dir(&css_dir).unwrap();
	fs::write(css_dir.join("style.css"), "body { color: red; }").unwrap();

	temp_dir
}

/// Creates a static root whose file names are substrings of one another.
pub fn font_root() -> TempDir {
	let temp_dir = TempDir::new().unwrap();

	let fonts_dir = temp_dir.path().join("fonts");
	fs::create_dir(&fonts_dir).unwrap();
	fs::write(fonts_dir.join("font.woff"), "woff bytes").unwrap();
	fs::write(fonts_dir.join("font.woff2"), "woff2 bytes").unwrap();

	temp_dir
}

/// Creates a static root containing conventionally ignored directories.
pub fn ignored_dirs_root() -> TempDir {
	let temp_dir = asset_root();

	let node_modules = temp_dir.path().join("node_modules");
	fs::create_dir(&node_modules).unwrap();
	fs::write(node_modules.join("dep.js"), "module.exports = 1;").unwrap();

	let git_dir = temp_dir.path().join(".git");
	fs::create_dir(&git_dir).unwrap();
	fs::write(git_dir.join("config"), "[core]").unwrap();

	temp_dir
}
