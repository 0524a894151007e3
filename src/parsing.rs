//! File parsing functionality for depth/size record data
//!
//! This module handles loading and parsing the plain-text record files
//! produced by the tree-statistics tool: one record per line, two
//! whitespace-separated base-10 integers `<depth> <size>`.

use indicatif::ProgressBar;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use thiserror::Error;

/// A single `(depth, size)` record parsed from one input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record {
    /// Tree depth, used purely as the filter key
    pub depth: u32,
    /// Subtree size, used as the histogram key
    pub size: u32,
}

/// Errors that can occur during record parsing
#[derive(Error, Debug)]
pub enum ParsingError {
    #[error("Failed to read input file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("Line {line}: expected exactly two integers, found {found} tokens")]
    TokenCount { line: usize, found: usize },

    #[error("Line {line}: invalid integer '{token}'")]
    InvalidInteger { line: usize, token: String },
}

type Result<T> = core::result::Result<T, ParsingError>;

/// Parse a record file into `(depth, size)` pairs
///
/// Every line must decompose into exactly two non-negative integers. The
/// first malformed line aborts the whole read; no partial results are
/// returned. A spinner reports progress while large files are ingested.
///
/// # Arguments
/// * `file_path` - Path to the record file
///
/// # Returns
/// * `Ok(Vec<Record>)` - All records, in file order
/// * `Err(ParsingError)` - If reading the file or parsing any line failed
pub fn parse_records(file_path: &Path) -> Result<Vec<Record>> {
    let file = File::open(file_path)?;
    let reader = BufReader::new(file);

    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Reading records...");

    let mut records = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        records.push(parse_line(&line, index + 1)?);
        spinner.inc(1);
    }

    spinner.finish_and_clear();
    Ok(records)
}

/// Parses one `<depth> <size>` line; `line_number` is 1-based for diagnostics
fn parse_line(line: &str, line_number: usize) -> Result<Record> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != 2 {
        return Err(ParsingError::TokenCount {
            line: line_number,
            found: tokens.len(),
        });
    }

    Ok(Record {
        depth: parse_token(tokens[0], line_number)?,
        size: parse_token(tokens[1], line_number)?,
    })
}

fn parse_token(token: &str, line_number: usize) -> Result<u32> {
    token.parse().map_err(|_| ParsingError::InvalidInteger {
        line: line_number,
        token: token.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_temp_file(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_parse_records_valid() {
        let path = write_temp_file("parse_records_valid.txt", "3 2\n3 7\n5 100\n");
        let records = parse_records(&path).unwrap();

        assert_eq!(
            records,
            vec![
                Record { depth: 3, size: 2 },
                Record { depth: 3, size: 7 },
                Record { depth: 5, size: 100 },
            ]
        );

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_parse_records_tolerates_extra_whitespace() {
        let path = write_temp_file("parse_records_whitespace.txt", "  3\t 2 \n");
        let records = parse_records(&path).unwrap();

        assert_eq!(records, vec![Record { depth: 3, size: 2 }]);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_parse_records_wrong_token_count() {
        let path = write_temp_file("parse_records_three_tokens.txt", "3 2\n1 2 3\n");
        let result = parse_records(&path);

        assert!(matches!(
            result,
            Err(ParsingError::TokenCount { line: 2, found: 3 })
        ));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_parse_records_empty_line_is_fatal() {
        let path = write_temp_file("parse_records_empty_line.txt", "3 2\n\n3 7\n");
        let result = parse_records(&path);

        assert!(matches!(
            result,
            Err(ParsingError::TokenCount { line: 2, found: 0 })
        ));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_parse_records_non_numeric() {
        let path = write_temp_file("parse_records_non_numeric.txt", "abc def\n");
        let result = parse_records(&path);

        match result {
            Err(ParsingError::InvalidInteger { line, token }) => {
                assert_eq!(line, 1);
                assert_eq!(token, "abc");
            }
            other => panic!("expected InvalidInteger, got {:?}", other),
        }

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_parse_records_negative_is_invalid() {
        let path = write_temp_file("parse_records_negative.txt", "3 -5\n");
        let result = parse_records(&path);

        assert!(matches!(result, Err(ParsingError::InvalidInteger { .. })));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_parse_records_missing_file() {
        let path = std::env::temp_dir().join("parse_records_does_not_exist.txt");
        let result = parse_records(&path);

        assert!(matches!(result, Err(ParsingError::FileRead(_))));
    }
}
