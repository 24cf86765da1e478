// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier
// Modifications (c) 2026 Peter Carlton

use std::io::{self, Write};

use itertools::Itertools;
use log::info;

use crate::errors::GcError;
use crate::gc::GcResult;

/// The result with the highest GC percentage. Among equal maxima, the one that comes last in
/// `results` wins (as if `results` were stably sorted by ascending percentage and the last element
/// taken).
pub fn highest(results: &[GcResult]) -> Result<&GcResult, GcError> {
    results
        .iter()
        .max_by(|a, b| a.gc_percentage.total_cmp(&b.gc_percentage))
        .ok_or(GcError::EmptyResult)
}

/// Writes the header of the highest-GC record, then its percentage to six decimals.
pub fn write_highest<W: Write>(results: &[GcResult], out: &mut W) -> Result<(), GcError> {
    let best = highest(results)?;
    info!(
        "Highest GC: {} ({:.6}%, out of {} record(s))",
        best.header,
        best.gc_percentage,
        results.len()
    );
    writeln!(out, "{}\n{:.6}", best.header, best.gc_percentage)?;
    Ok(())
}

/// Writes one `header<TAB>percentage` line per result, in input order.
pub fn write_all<W: Write>(results: &[GcResult], out: &mut W) -> Result<(), GcError> {
    if results.is_empty() {
        return Err(GcError::EmptyResult);
    }
    let table = results
        .iter()
        .map(|r| format!("{}\t{:.6}", r.header, r.gc_percentage))
        .join("\n");
    writeln!(out, "{}", table)?;
    Ok(())
}

/// Prints the highest-GC record to stdout. Nothing is printed if there is no result.
pub fn highest_gc_percentage(results: &[GcResult]) -> Result<(), GcError> {
    let mut buf: Vec<u8> = Vec::new();
    write_highest(results, &mut buf)?;
    let mut out = io::stdout().lock();
    out.write_all(&buf)?;
    out.flush()?;
    Ok(())
}
