use thiserror::Error;

/// Errors raised while building the airport lookup table.
///
/// The build is fail-fast: the first violation aborts the whole table, so a
/// partial lookup is never observable. Row numbers are 1-based and count the
/// header line.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The lookup data contains no records at all.
    #[error("airport lookup malformed: missing header row")]
    MissingHeader,

    /// A required column is absent from the header row.
    #[error("airport lookup malformed: missing required column `{0}`")]
    MissingColumn(&'static str),

    /// A data row has fewer fields than the header.
    #[error("airport lookup malformed: row {row} has {found} fields, expected at least {expected}")]
    ShortRow {
        row: usize,
        found: usize,
        expected: usize,
    },

    /// A required cell is blank.
    #[error("airport lookup malformed: row {row} has a blank `{column}` value")]
    BlankField { row: usize, column: &'static str },

    /// The lookup data could not be read.
    #[error("failed to read airport lookup: {0}")]
    Read(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, LookupError>;
