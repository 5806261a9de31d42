//! Airport code lookup table.
//!
//! Maps IATA and ICAO airport codes to the descriptive fields used when
//! rewriting itinerary text. The table is built once from comma-delimited
//! reference data and is read-only afterwards, so it can be shared freely
//! across any number of line-processing calls.

use std::collections::HashMap;
use std::io;

use csv::ReaderBuilder;
use tracing::debug;

use crate::error::LookupError;

const IATA_COLUMN: &str = "iata_code";
const ICAO_COLUMN: &str = "icao_code";
const NAME_COLUMN: &str = "name";
const CITY_COLUMN: &str = "municipality";

/// Descriptive fields for a single airport.
///
/// Both the IATA and ICAO code of a source row resolve to an equal record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AirportRecord {
    pub name: String,
    pub city: String,
}

/// Record field a code token resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    City,
}

/// Code → airport mapping built from the reference dataset.
#[derive(Debug, Clone, Default)]
pub struct LookupTable {
    entries: HashMap<String, AirportRecord>,
}

impl LookupTable {
    /// Build a table from a header row and data rows.
    ///
    /// The header must contain the `iata_code`, `icao_code`, `name`, and
    /// `municipality` columns (cells are trimmed and stripped of a leading
    /// BOM before matching). Each data row must be at least as wide as the
    /// header and must have non-blank values in those four columns. The
    /// first violation aborts the build; no partial table is usable.
    ///
    /// A code appearing in multiple rows keeps the last row's record.
    pub fn build(headers: &[String], rows: &[Vec<String>]) -> Result<Self, LookupError> {
        let headers: Vec<String> = headers.iter().map(|cell| normalize_header(cell)).collect();
        let columns = RequiredColumns::locate(&headers)?;
        let mut entries = HashMap::new();

        for (index, row) in rows.iter().enumerate() {
            if row.len() < headers.len() {
                return Err(LookupError::ShortRow {
                    row: index + 2,
                    found: row.len(),
                    expected: headers.len(),
                });
            }

            let iata = required_cell(row, columns.iata, index, IATA_COLUMN)?;
            let icao = required_cell(row, columns.icao, index, ICAO_COLUMN)?;
            let name = required_cell(row, columns.name, index, NAME_COLUMN)?;
            let city = required_cell(row, columns.city, index, CITY_COLUMN)?;

            let record = AirportRecord {
                name: name.to_string(),
                city: city.to_string(),
            };
            entries.insert(iata.to_string(), record.clone());
            entries.insert(icao.to_string(), record);
        }

        Ok(Self { entries })
    }

    /// Read comma-delimited lookup data and build a table from it.
    ///
    /// Quoting is disabled: values are split on every comma, so a value
    /// containing a literal comma is not supported. The first record is the
    /// header row; an input with no records fails with
    /// [`LookupError::MissingHeader`].
    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self, LookupError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .quoting(false)
            .flexible(true)
            .from_reader(reader);

        let mut records = reader.records();
        let headers: Vec<String> = match records.next() {
            Some(record) => record?.iter().map(str::to_string).collect(),
            None => return Err(LookupError::MissingHeader),
        };

        let mut rows: Vec<Vec<String>> = Vec::new();
        for record in records {
            rows.push(record?.iter().map(str::to_string).collect());
        }

        let table = Self::build(&headers, &rows)?;
        debug!(rows = rows.len(), codes = table.len(), "airport lookup parsed");
        Ok(table)
    }

    /// Look up a field for a code.
    ///
    /// `None` means the code has no record; the caller supplies its own
    /// fallback rather than receiving an empty string.
    pub fn get(&self, code: &str, field: Field) -> Option<&str> {
        let record = self.entries.get(code)?;
        Some(match field {
            Field::Name => record.name.as_str(),
            Field::City => record.city.as_str(),
        })
    }

    /// Number of codes in the table (IATA and ICAO keys counted separately).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Positions of the four required columns within the header.
struct RequiredColumns {
    iata: usize,
    icao: usize,
    name: usize,
    city: usize,
}

impl RequiredColumns {
    fn locate(headers: &[String]) -> Result<Self, LookupError> {
        Ok(Self {
            iata: column_index(headers, IATA_COLUMN)?,
            icao: column_index(headers, ICAO_COLUMN)?,
            name: column_index(headers, NAME_COLUMN)?,
            city: column_index(headers, CITY_COLUMN)?,
        })
    }
}

fn column_index(headers: &[String], column: &'static str) -> Result<usize, LookupError> {
    headers
        .iter()
        .position(|header| header == column)
        .ok_or(LookupError::MissingColumn(column))
}

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

fn required_cell<'a>(
    row: &'a [String],
    index: usize,
    row_index: usize,
    column: &'static str,
) -> Result<&'a str, LookupError> {
    let value = row[index].trim();
    if value.is_empty() {
        return Err(LookupError::BlankField {
            row: row_index + 2,
            column,
        });
    }
    Ok(value)
}
