use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::ChainResult;

/// Reads a UTF-8 text file and returns all its lines as a `Vec<String>`.
///
/// - Reads the entire file into memory
/// - Splits on `\n` / `\r\n`
/// - Trims surrounding whitespace of each line
pub(crate) fn read_lines<P: AsRef<Path>>(filename: P) -> ChainResult<Vec<String>> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(contents.lines().map(|line| line.trim().to_owned()).collect())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::ChainError;
	use std::io::Write;

	#[test]
	fn test_read_lines_trims() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		write!(file, "  first line \r\nsecond\n\nthird").unwrap();

		let lines = read_lines(file.path()).unwrap();
		assert_eq!(lines, vec!["first line", "second", "", "third"]);
	}

	#[test]
	fn test_missing_file() {
		let dir = tempfile::tempdir().unwrap();
		let err = read_lines(dir.path().join("absent.txt")).unwrap_err();
		assert!(matches!(err, ChainError::Io(_)));
	}
}
