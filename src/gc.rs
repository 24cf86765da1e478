// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier
// Modifications (c) 2026 Peter Carlton

//! GC content of FastA records.

use log::{debug, warn};

use crate::errors::GcError;
use crate::seq::record::FastaRecords;

/// What to do with a record whose sequence is empty.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum EmptySequencePolicy {
    /// Fail with `GcError::MalformedData`.
    #[default]
    Reject,
    /// Score the record as 0% GC.
    Zero,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GcResult {
    pub header: String,
    /// In [0, 100].
    pub gc_percentage: f64,
}

/// Percentage of G and C (either case) among the characters of `sequence`, or `None` if it is
/// empty.
pub fn gc_percentage(sequence: &str) -> Option<f64> {
    let (len, gc) = sequence.chars().fold((0usize, 0usize), |(len, gc), c| match c {
        'G' | 'g' | 'C' | 'c' => (len + 1, gc + 1),
        _ => (len + 1, gc),
    });
    if len == 0 {
        None
    } else {
        Some(gc as f64 / len as f64 * 100.0)
    }
}

/// One result per record, in the records' iteration order.
pub fn calculate_gc_content(
    records: &FastaRecords,
    policy: EmptySequencePolicy,
) -> Result<Vec<GcResult>, GcError> {
    records
        .iter()
        .map(|rec| {
            let gc_percentage = match (gc_percentage(&rec.sequence), policy) {
                (Some(pct), _) => pct,
                (None, EmptySequencePolicy::Zero) => {
                    warn!("Empty sequence for header '{}', scoring it 0%", rec.header);
                    0.0
                }
                (None, EmptySequencePolicy::Reject) => {
                    return Err(GcError::MalformedData(format!(
                        "empty sequence for header {}",
                        rec.header
                    )))
                }
            };
            debug!("{}: {:.6}% GC", rec.header, gc_percentage);
            Ok(GcResult {
                header: rec.header.clone(),
                gc_percentage,
            })
        })
        .collect()
}
