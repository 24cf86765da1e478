// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier
// Modifications (c) 2026 Peter Carlton

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{info, warn};

use crate::errors::GcError;
use crate::seq::record::{FastaRecord, FastaRecords};

/// Reads the FastA file at `path`. The file is closed before this returns, whether or not parsing
/// succeeded.
pub fn parse_fasta<P: AsRef<Path>>(path: P) -> Result<FastaRecords, GcError> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| GcError::Input(format!("cannot open {}: {}", path.display(), e)))?;
    info!("Reading {}", path.display());
    let records = read_fasta(BufReader::new(file))?;
    info!("Read {} record(s) from {}", records.len(), path.display());
    Ok(records)
}

/// Parses FastA text. Headers lose their leading '>'s and surrounding whitespace; sequence lines
/// have all whitespace removed and are lowercased and concatenated. Blank lines are skipped.
pub fn read_fasta<R: BufRead>(reader: R) -> Result<FastaRecords, GcError> {
    let mut records = FastaRecords::new();
    let mut current: Option<FastaRecord> = None;

    for (lineno, line) in (1_usize..).zip(reader.lines()) {
        let l: String = line?;
        if let Some(hdr) = l.strip_prefix('>') {
            if let Some(done) = current.take() {
                push_record(&mut records, done);
            }
            let header = hdr.trim_start_matches('>').trim();
            if header.is_empty() {
                return Err(GcError::MalformedData(format!(
                    "empty header (line {})",
                    lineno
                )));
            }
            current = Some(FastaRecord::new(header));
        } else {
            let mut fragments = l.split_whitespace().peekable();
            if fragments.peek().is_none() {
                continue;
            }
            match current.as_mut() {
                Some(rec) => fragments.for_each(|f| rec.sequence.push_str(&f.to_lowercase())),
                None => {
                    return Err(GcError::MalformedData(format!(
                        "sequence data precedes first header (line {})",
                        lineno
                    )))
                }
            }
        }
    }
    if let Some(done) = current {
        push_record(&mut records, done);
    }
    Ok(records)
}

fn push_record(records: &mut FastaRecords, record: FastaRecord) {
    let header = record.header.clone();
    if records.insert(record).is_some() {
        warn!("Duplicate header '{}': keeping the last sequence", header);
    }
}
