//! Comma-separated text form of a [`Matrix`].
//!
//! One line per row, no header, no quoting:
//!
//! ```text
//! 0, 1, 2
//! 1, 0, 3
//! 2, 3, 0
//! ```
//!
//! Reading trims whitespace around each field and skips blank lines. Quotes
//! are not special, so a quoted value is a parse error.
//! Writing uses `", "` between values, `"\n"` between rows, no trailing
//! newline, and the shortest decimal form that parses back to the same `f64`.

use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use tracing::debug;

use super::Matrix;
use crate::error::{ConcordanceError, Result};

/// Parse a matrix from any byte source.
///
/// Every non-blank line becomes a row. All rows must hold the same number of
/// values, and every value must parse as `f64`.
pub fn from_reader<R: Read>(reader: R) -> Result<Matrix> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .quoting(false)
        .from_reader(reader);

    let mut data: Vec<f64> = Vec::new();
    let mut rows = 0usize;
    let mut cols = 0usize;

    for result in rdr.records() {
        let record = result?;
        // whitespace-only line; a row of empty fields still fails to parse below
        if record.len() == 1 && record[0].is_empty() {
            continue;
        }
        let line = record
            .position()
            .map_or(rows as u64 + 1, |pos| pos.line());

        if rows == 0 {
            cols = record.len();
        } else if record.len() != cols {
            return Err(ConcordanceError::RaggedRow {
                line,
                expected: cols,
                found: record.len(),
            });
        }

        for (j, field) in record.iter().enumerate() {
            let value = field.parse::<f64>().map_err(|_| ConcordanceError::Parse {
                line,
                column: j + 1,
                token: field.to_string(),
            })?;
            data.push(value);
        }
        rows += 1;
    }

    if rows == 0 {
        return Err(ConcordanceError::EmptyInput);
    }

    Matrix::new(data, rows, cols)
}

/// Parse a matrix from an in-memory string.
pub fn parse_csv(text: &str) -> Result<Matrix> {
    from_reader(text.as_bytes())
}

/// Read a matrix from a file on disk.
pub fn read_csv(path: impl AsRef<Path>) -> Result<Matrix> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ConcordanceError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let matrix = from_reader(file)?;
    debug!(
        path = %path.display(),
        rows = matrix.rows(),
        cols = matrix.cols(),
        "loaded matrix"
    );
    Ok(matrix)
}

/// Write the text form of `matrix` to `writer`.
pub fn write_to<W: Write>(mut writer: W, matrix: &Matrix) -> io::Result<()> {
    write!(writer, "{}", matrix)?;
    writer.flush()
}

/// Render `matrix` as a string.
///
/// A `0 × 0` matrix renders as the empty string, which [`parse_csv`] rejects
/// with [`ConcordanceError::EmptyInput`]. Every other matrix reads back with
/// the same shape and values.
pub fn to_csv_string(matrix: &Matrix) -> String {
    matrix.to_string()
}

/// Write `matrix` to a file, creating or truncating it.
pub fn write_csv(path: impl AsRef<Path>, matrix: &Matrix) -> Result<()> {
    let path = path.as_ref();
    let io_err = |source: io::Error| ConcordanceError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_err)?;
    write_to(BufWriter::new(file), matrix).map_err(io_err)?;
    debug!(path = %path.display(), rows = matrix.rows(), cols = matrix.cols(), "wrote matrix");
    Ok(())
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows() {
            if i > 0 {
                f.write_str("\n")?;
            }
            for (j, value) in self.row(i).iter().enumerate() {
                if j > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{}", value)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_rows() {
        let m = parse_csv("0,1,2\n1,0,3\n2,3,0\n").unwrap();
        assert_eq!(m.shape(), (3, 3));
        assert_eq!(m.as_slice(), &[0.0, 1.0, 2.0, 1.0, 0.0, 3.0, 2.0, 3.0, 0.0]);
    }

    #[test]
    fn trims_spaces_and_skips_blank_lines() {
        let m = parse_csv("  1.5, -2 ,3e2\n\n4,  5,6\n").unwrap();
        assert_eq!(m.shape(), (2, 3));
        assert_eq!(m.row(0), &[1.5, -2.0, 300.0]);
        assert_eq!(m.row(1), &[4.0, 5.0, 6.0]);
    }

    #[test]
    fn rejects_malformed_token_with_position() {
        let err = parse_csv("1,2\n3,abc\n").unwrap_err();
        match err {
            ConcordanceError::Parse {
                line,
                column,
                token,
            } => {
                assert_eq!(line, 2);
                assert_eq!(column, 2);
                assert_eq!(token, "abc");
            }
            other => panic!("expected Parse, got {:?}", other),
        }
    }

    #[test]
    fn rejects_empty_field() {
        let err = parse_csv("1,,3\n").unwrap_err();
        assert!(matches!(err, ConcordanceError::Parse { column: 2, .. }));
    }

    #[test]
    fn rejects_row_of_empty_fields() {
        let err = parse_csv("1,2,3\n,,\n4,5,6\n7,8,9\n").unwrap_err();
        assert!(
            matches!(
                err,
                ConcordanceError::Parse {
                    line: 2,
                    column: 1,
                    ref token,
                } if token.is_empty()
            ),
            "got {:?}",
            err
        );

        let err = parse_csv("1,2\n , \n").unwrap_err();
        assert!(matches!(err, ConcordanceError::Parse { line: 2, .. }));
    }

    #[test]
    fn skips_whitespace_only_lines() {
        let m = parse_csv("1,2\n   \n3,4\n").unwrap();
        assert_eq!(m.shape(), (2, 2));
    }

    #[test]
    fn quotes_are_not_special() {
        let err = parse_csv("\"1\",2\n3,4\n").unwrap_err();
        match err {
            ConcordanceError::Parse { line, column, token } => {
                assert_eq!((line, column), (1, 1));
                assert_eq!(token, "\"1\"");
            }
            other => panic!("expected Parse, got {:?}", other),
        }
    }

    #[test]
    fn rejects_ragged_rows() {
        let err = parse_csv("1,2,3\n4,5\n").unwrap_err();
        assert!(matches!(
            err,
            ConcordanceError::RaggedRow {
                expected: 3,
                found: 2,
                ..
            }
        ));
    }

    #[test]
    fn rejects_empty_input() {
        assert!(matches!(parse_csv(""), Err(ConcordanceError::EmptyInput)));
        assert!(matches!(parse_csv("\n\n"), Err(ConcordanceError::EmptyInput)));
    }

    #[test]
    fn does_not_require_square_input() {
        let m = parse_csv("1,2,3,4\n5,6,7,8\n").unwrap();
        assert_eq!(m.shape(), (2, 4));
    }

    #[test]
    fn renders_without_alignment_or_trailing_newline() {
        let m = Matrix::new(vec![0.0, 1.5, -2.0, 0.1], 2, 2).unwrap();
        assert_eq!(to_csv_string(&m), "0, 1.5\n-2, 0.1");
    }

    #[test]
    fn write_to_matches_display() {
        let m = Matrix::from_fn(3, 3, |i, j| i as f64 / (j as f64 + 3.0));
        let mut buf = Vec::new();
        write_to(&mut buf, &m).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), m.to_string());
    }

    #[test]
    fn read_csv_reports_missing_file() {
        let err = read_csv("/nonexistent/dir/reference.csv").unwrap_err();
        assert!(matches!(err, ConcordanceError::Io { .. }));
    }
}
