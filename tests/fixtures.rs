//! Shared test fixtures for cachebuster integration tests.

#[path = "fixtures/test_fixtures.rs"]
mod test_fixtures;

// Re-export public fixture functions
pub use test_fixtures::{asset_root, font_root, ignored_dirs_root};
