use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Lines};
use std::path::Path;

/// Streams raw transactions from a CSV-like input file.
///
/// Each input line is one transaction: comma-separated token fields, no
/// header row. The iterator yields the split fields untrimmed; the
/// itemizer is responsible for trimming and for skipping empty tokens, so
/// a line of only separators still comes through (as a transaction that
/// will shape to nothing) and still counts toward the transaction total.
///
/// I/O errors from the underlying reader are yielded unchanged and never
/// retried.
pub struct TransactionReader {
    lines: Lines<BufReader<File>>,
}

impl TransactionReader {
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Could not open input file: {}", path.display()))?;
        Ok(Self {
            lines: BufReader::new(file).lines(),
        })
    }
}

impl Iterator for TransactionReader {
    type Item = io::Result<Vec<String>>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = self.lines.next()?;
        Some(line.map(|l| l.split(',').map(str::to_owned).collect()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn input_file(contents: &str) -> NamedTempFile {
        let mut tmp = NamedTempFile::new().unwrap();
        tmp.write_all(contents.as_bytes()).unwrap();
        tmp.flush().unwrap();
        tmp
    }

    fn read_all(contents: &str) -> Vec<Vec<String>> {
        let tmp = input_file(contents);
        TransactionReader::open(tmp.path())
            .unwrap()
            .map(|line| line.unwrap())
            .collect()
    }

    #[test]
    fn splits_lines_on_commas() {
        let transactions = read_all("a,b,c\nd,e\n");
        assert_eq!(transactions, vec![vec!["a", "b", "c"], vec!["d", "e"]]);
    }

    #[test]
    fn yields_one_transaction_per_line() {
        assert_eq!(read_all("a\nb\nc\n").len(), 3);
    }

    #[test]
    fn empty_file_yields_nothing() {
        assert!(read_all("").is_empty());
    }

    #[test]
    fn blank_lines_still_count_as_transactions() {
        let transactions = read_all("a,b\n\n ,\n");
        assert_eq!(transactions.len(), 3);
        assert_eq!(transactions[1], vec![""]);
        assert_eq!(transactions[2], vec![" ", ""]);
    }

    #[test]
    fn missing_final_newline_is_tolerated() {
        assert_eq!(read_all("a,b"), vec![vec!["a", "b"]]);
    }

    #[test]
    fn nonexistent_file_returns_error() {
        assert!(TransactionReader::open(Path::new("/nonexistent/input.csv")).is_err());
    }
}
