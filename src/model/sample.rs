//! Sample document pair
//!
//! Loaded into both panes by the "samples" action.

/// Original side of the sample pair
pub const SAMPLE_ORIGINAL: &str = "Release Notes - v2.3.1

Highlights
- Faster search for large files
- New inline diff panel
- Updated onboarding copy

Bug Fixes
- Fix crash when opening empty workspace
- Restore scroll position after refresh
- Correct typo in settings panel
";

/// Modified side of the sample pair
pub const SAMPLE_MODIFIED: &str = "Release Notes - v2.4.0

Highlights
- Faster search for large files
- New inline diff viewer
- Updated onboarding messaging
- Added keyboard shortcuts cheat sheet

Bug Fixes
- Fix crash when opening empty workspace
- Restore scroll position after refresh
- Correct typos in settings panel
- Improve tooltip contrast
";
