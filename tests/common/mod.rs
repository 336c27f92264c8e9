/*!
 * Common test utilities for the subtempo test suite
 */

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use tempfile::TempDir;

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &PathBuf, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// A small well-formed MicroDVD sample
pub const MICRODVD_SAMPLE: &str = "\
{10}{20}Hello|World
{30}{45}{y:i}Styled line
{50}{70}Plain
";

/// A small well-formed SBV sample
pub const SBV_SAMPLE: &str = "\
0:00:01.000,0:00:04.000
This is a test subtitle.

0:00:05.000,0:00:09.000
It contains
two text lines.

0:00:10.000,0:00:14.000
For testing purposes.
";

/// A small well-formed SubRip sample
pub const SUBRIP_SAMPLE: &str = "\
1
00:00:01,000 --> 00:00:04,000
This is a test subtitle.

2
00:00:05,000 --> 00:00:09,000
It contains multiple entries.

3
00:00:10,000 --> 00:00:14,000
For testing purposes.
";
