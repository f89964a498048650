//! CSV import engine.
//!
//! # Responsibility
//! - Validate the CSV header (`title`, `author`, `publishedYear`).
//! - Validate each data row and create accepted rows in the repository.
//! - Collect row-numbered errors in encounter order.
//!
//! # Invariants
//! - Blank lines are dropped before numbering; row 0 is the header and
//!   row `n` is the n-th non-blank data line.
//! - Structural failures (unreadable input, bad header) yield exactly one
//!   row-0 error and add nothing.
//! - Fields are split on `,` with no quoting or escaping support.
//!
//! # Column mapping
//! With the default `ColumnMapping::Positional`, header labels are only
//! checked for presence: values are read from columns 0, 1 and 2 whatever
//! the labels say. `ColumnMapping::ByHeader` reads each value from the
//! column carrying its label instead.

use crate::model::book::{BookFormData, BookValidationError};
use crate::repo::book_repo::BookRepository;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::num::IntErrorKind;

const COLUMN_TITLE: &str = "title";
const COLUMN_AUTHOR: &str = "author";
const COLUMN_PUBLISHED_YEAR: &str = "publishedyear";

/// Row number used for errors that concern the whole file.
pub const HEADER_ROW: usize = 0;

/// How data columns are matched to book fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnMapping {
    /// Columns 0, 1, 2 are title, author, published year.
    #[default]
    Positional,
    /// Columns are located by their normalized header label.
    ByHeader,
}

/// Caller-tunable import behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportOptions {
    pub columns: ColumnMapping,
}

/// Column layout derived from a valid header line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderLayout {
    /// Number of comma-separated header fields; every data row must match.
    pub field_count: usize,
    pub title: usize,
    pub author: usize,
    pub published_year: usize,
}

impl HeaderLayout {
    fn columns(&self, mapping: ColumnMapping) -> (usize, usize, usize) {
        match mapping {
            ColumnMapping::Positional => (0, 1, 2),
            ColumnMapping::ByHeader => (self.title, self.author, self.published_year),
        }
    }
}

/// Reason a file or row was rejected.
///
/// `Display` output is the user-facing message stored in `ImportRowError`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportFailure {
    ReadFailed,
    InvalidHeader,
    FieldCountMismatch { expected: usize, actual: usize },
    /// Year is a positive integer too large for `i32`.
    YearOutOfRange,
    Validation(BookValidationError),
}

impl ImportFailure {
    /// Key-value detail for diagnostic events.
    fn log_detail(&self) -> String {
        match self {
            Self::ReadFailed => "reason=read_failed".to_string(),
            Self::InvalidHeader => "reason=invalid_header".to_string(),
            Self::FieldCountMismatch { expected, actual } => {
                format!("reason=field_count expected={expected} actual={actual}")
            }
            Self::YearOutOfRange => "reason=year_out_of_range".to_string(),
            Self::Validation(err) => format!("reason=validation detail={err:?}"),
        }
    }
}

impl Display for ImportFailure {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ReadFailed => write!(f, "Failed to read file"),
            Self::InvalidHeader => write!(f, "Invalid CSV header"),
            Self::FieldCountMismatch { .. } => write!(f, "Invalid number of fields"),
            Self::YearOutOfRange => write!(f, "Published year is out of range"),
            Self::Validation(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ImportFailure {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<BookValidationError> for ImportFailure {
    fn from(value: BookValidationError) -> Self {
        Self::Validation(value)
    }
}

/// One rejected row (or the whole file, at row 0).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportRowError {
    pub row: usize,
    pub message: String,
    /// Raw offending line, when there is one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

impl ImportRowError {
    fn new(row: usize, failure: ImportFailure, data: Option<&str>) -> Self {
        Self {
            row,
            message: failure.to_string(),
            data: data.map(str::to_string),
        }
    }
}

/// Outcome of one import call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportResult {
    pub added_count: usize,
    /// Rejections in encounter order.
    pub errors: Vec<ImportRowError>,
}

impl ImportResult {
    /// Result for input that could not be read at all.
    pub fn read_failed() -> Self {
        Self::structural(ImportFailure::ReadFailed, None)
    }

    fn structural(failure: ImportFailure, data: Option<&str>) -> Self {
        Self {
            added_count: 0,
            errors: vec![ImportRowError::new(HEADER_ROW, failure, data)],
        }
    }

    /// Whether every row was accepted.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Checks a header line and returns its column layout.
///
/// Labels are trimmed and lowercased; `title`, `author` and `publishedyear`
/// must all be present, in any order. Extra columns are tolerated.
pub fn validate_header(line: &str) -> Option<HeaderLayout> {
    let labels: Vec<String> = line
        .split(',')
        .map(|label| label.trim().to_lowercase())
        .collect();
    let find = |name: &str| labels.iter().position(|label| label == name);

    Some(HeaderLayout {
        field_count: labels.len(),
        title: find(COLUMN_TITLE)?,
        author: find(COLUMN_AUTHOR)?,
        published_year: find(COLUMN_PUBLISHED_YEAR)?,
    })
}

/// Imports CSV text with default options.
pub fn import_csv<R: BookRepository + ?Sized>(repo: &mut R, text: &str) -> ImportResult {
    import_csv_with(repo, text, &ImportOptions::default())
}

/// Imports CSV text, creating one book per accepted data row.
pub fn import_csv_with<R: BookRepository + ?Sized>(
    repo: &mut R,
    text: &str,
    options: &ImportOptions,
) -> ImportResult {
    let mut lines = text.lines().filter(|line| !line.trim().is_empty());

    let Some(header) = lines.next() else {
        info!("event=csv_import module=import status=error reason=empty_input");
        return ImportResult::structural(ImportFailure::InvalidHeader, None);
    };
    let Some(layout) = validate_header(header) else {
        info!("event=csv_import module=import status=error reason=invalid_header");
        return ImportResult::structural(ImportFailure::InvalidHeader, Some(header));
    };

    let mut result = ImportResult::default();
    for (index, line) in lines.enumerate() {
        let row = index + 1;
        match parse_row(line, &layout, options.columns) {
            Ok(data) => {
                repo.create_book(&data);
                result.added_count += 1;
            }
            Err(failure) => {
                debug!(
                    "event=csv_row_rejected module=import row={row} {}",
                    failure.log_detail()
                );
                result
                    .errors
                    .push(ImportRowError::new(row, failure, Some(line)));
            }
        }
    }

    info!(
        "event=csv_import module=import status=ok added={} errors={}",
        result.added_count,
        result.errors.len()
    );
    result
}

fn parse_row(
    line: &str,
    layout: &HeaderLayout,
    mapping: ColumnMapping,
) -> Result<BookFormData, ImportFailure> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != layout.field_count {
        return Err(ImportFailure::FieldCountMismatch {
            expected: layout.field_count,
            actual: fields.len(),
        });
    }

    let (title, author, year) = layout.columns(mapping);
    let year = parse_year(fields[year]);
    // An out-of-range year stands in as 1 so title and author are checked first.
    let data = BookFormData::new(
        fields[title].trim(),
        fields[author].trim(),
        year.unwrap_or(1),
    );
    data.validate()?;
    year?;
    Ok(data)
}

// Unparseable years collapse to 0, which fails the positivity check.
// Positive values beyond `i32::MAX` are reported as out of range.
fn parse_year(raw: &str) -> Result<i32, ImportFailure> {
    match raw.trim().parse::<i32>() {
        Ok(year) => Ok(year),
        Err(err) if *err.kind() == IntErrorKind::PosOverflow => {
            Err(ImportFailure::YearOutOfRange)
        }
        Err(_) => Ok(0),
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_year, validate_header, HeaderLayout, ImportFailure};

    #[test]
    fn header_is_case_and_whitespace_insensitive() {
        let layout = validate_header(" Title , AUTHOR,publishedYear ").expect("header is valid");
        assert_eq!(
            layout,
            HeaderLayout {
                field_count: 3,
                title: 0,
                author: 1,
                published_year: 2,
            }
        );
    }

    #[test]
    fn header_accepts_reordered_and_extra_columns() {
        let layout =
            validate_header("isbn,publishedYear,author,title").expect("header is valid");
        assert_eq!(layout.field_count, 4);
        assert_eq!(layout.title, 3);
        assert_eq!(layout.author, 2);
        assert_eq!(layout.published_year, 1);
    }

    #[test]
    fn header_rejects_missing_column() {
        assert!(validate_header("title,publishedYear").is_none());
        assert!(validate_header("title,author,year").is_none());
    }

    #[test]
    fn year_parsing_is_strict_base_ten() {
        assert_eq!(parse_year(" 1965 "), Ok(1965));
        assert_eq!(parse_year("1965abc"), Ok(0));
        assert_eq!(parse_year("12.5"), Ok(0));
        assert_eq!(parse_year(""), Ok(0));
        assert_eq!(parse_year("-99999999999"), Ok(0));
    }

    #[test]
    fn year_parsing_flags_positive_overflow() {
        assert_eq!(
            parse_year("99999999999"),
            Err(ImportFailure::YearOutOfRange)
        );
        assert_eq!(
            ImportFailure::YearOutOfRange.to_string(),
            "Published year is out of range"
        );
    }

    #[test]
    fn field_count_message_hides_counts() {
        let failure = ImportFailure::FieldCountMismatch {
            expected: 3,
            actual: 4,
        };
        assert_eq!(failure.to_string(), "Invalid number of fields");
    }

    #[test]
    fn field_count_log_detail_carries_counts() {
        let failure = ImportFailure::FieldCountMismatch {
            expected: 3,
            actual: 4,
        };
        assert_eq!(
            failure.log_detail(),
            "reason=field_count expected=3 actual=4"
        );
    }
}
