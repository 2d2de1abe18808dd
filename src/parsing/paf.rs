//! Reader for minimap2 PAF output.
//!
//! Only the 12 mandatory columns are consumed; optional SAM-like tags after
//! column 12 are ignored. Rows with fewer than 12 fields or with non-numeric
//! coordinates are skipped rather than treated as errors, since truncated
//! aligner output is common and the remaining rows are still usable.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::core::record::AlignmentRecord;
use crate::utils::validation::{check_record_limit, is_stdin_path, MAX_RECORDS};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Too many alignment records: {0} exceeds maximum allowed ({MAX_RECORDS})")]
    TooManyRecords(usize),
}

/// Parse PAF text into alignment records, skipping malformed rows
///
/// # Errors
///
/// Returns `ParseError::TooManyRecords` if the record limit is exceeded.
pub fn parse_paf_text(text: &str) -> Result<Vec<AlignmentRecord>, ParseError> {
    parse_paf_reader(text.as_bytes())
}

/// Parse PAF records from any buffered reader, skipping malformed rows
///
/// # Errors
///
/// Returns `ParseError::Io` on read failure or `ParseError::TooManyRecords`
/// if the record limit is exceeded.
pub fn parse_paf_reader<R: BufRead>(reader: R) -> Result<Vec<AlignmentRecord>, ParseError> {
    let mut records = Vec::new();
    let mut skipped = 0usize;

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        // Only the terminator goes; an empty trailing column still counts
        let line = line.trim_end_matches(['\r', '\n']);

        match AlignmentRecord::parse_line(line) {
            Some(record) => {
                if check_record_limit(records.len()).is_some() {
                    return Err(ParseError::TooManyRecords(records.len()));
                }
                records.push(record);
            }
            None => {
                skipped += 1;
                debug!("Skipping malformed PAF line {}", i + 1);
            }
        }
    }

    if skipped > 0 {
        info!("Skipped {skipped} malformed PAF line(s)");
    }

    Ok(records)
}

/// Parse a PAF file (plain or gzip-compressed), or stdin when the path is `-`.
///
/// A missing file is not an error: the aligner writes no output when nothing
/// aligns, so it yields an empty record list.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file exists but cannot be read, or
/// `ParseError::TooManyRecords` if the record limit is exceeded.
pub fn parse_paf_file(path: &Path) -> Result<Vec<AlignmentRecord>, ParseError> {
    if is_stdin_path(path) {
        let stdin = std::io::stdin();
        return parse_paf_reader(stdin.lock());
    }

    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            warn!("Alignment file not found, treating as empty: {}", path.display());
            return Ok(Vec::new());
        }
        Err(e) => return Err(e.into()),
    };

    let reader: Box<dyn Read> = if is_gzipped(path) {
        Box::new(MultiGzDecoder::new(file))
    } else {
        Box::new(file)
    };

    let records = parse_paf_reader(BufReader::new(reader))?;
    info!("Read {} alignment records from {}", records.len(), path.display());
    Ok(records)
}

/// Check whether a path looks gzip-compressed by extension
#[must_use]
pub fn is_gzipped(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}
