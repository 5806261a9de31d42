//! End-to-end prettifying pipeline: load, rewrite, write.

use std::fs::{self, File};
use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::{debug, info};

use itin_core::{LinePrettifier, LookupTable};

/// Counts reported after a successful run.
#[derive(Debug, Clone, Copy)]
pub struct RunSummary {
    /// Codes in the lookup table (IATA and ICAO keys counted separately).
    pub codes: usize,
    /// Lines written to the output document.
    pub lines: usize,
}

/// Run the full pipeline: read `input`, resolve its tokens against the
/// airport data at `lookup`, and write the prettified text to `output`.
///
/// Fails before writing anything when the input or lookup file is missing,
/// the files cannot be read, or the lookup data is malformed. Unresolvable
/// tokens inside the document never fail the run.
pub fn run(input: &Path, output: &Path, lookup: &Path) -> Result<RunSummary> {
    if !input.exists() {
        bail!("input not found: {}", input.display());
    }
    if !lookup.exists() {
        bail!("airport lookup not found: {}", lookup.display());
    }

    let raw = fs::read_to_string(input)
        .with_context(|| format!("failed to read input {}", input.display()))?;
    let lookup_file = File::open(lookup)
        .with_context(|| format!("failed to open airport lookup {}", lookup.display()))?;
    let table = LookupTable::from_reader(lookup_file)?;
    debug!(codes = table.len(), "airport lookup loaded");

    let prettified = LinePrettifier::new(&table).process(&raw);
    let lines = prettified.matches('\n').count();
    fs::write(output, &prettified)
        .with_context(|| format!("failed to write output {}", output.display()))?;
    info!(lines, codes = table.len(), "itinerary prettified");

    Ok(RunSummary {
        codes: table.len(),
        lines,
    })
}
