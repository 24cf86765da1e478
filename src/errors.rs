// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier
// Modifications (c) 2026 Peter Carlton

use std::{fmt, io};

#[derive(Debug)]
pub enum GcError {
    /// Reading failed after the file was opened.
    Io(io::Error),
    /// The input file could not be opened.
    Input(String),
    /// The input is not usable FastA (data before any header, empty header or sequence).
    MalformedData(String),
    /// Nothing to report.
    EmptyResult,
}

// These allow conversion to GcError, required for run() to return Result<()> and for '?' to
// work.

impl From<io::Error> for GcError {
    fn from(e: io::Error) -> Self {
        GcError::Io(e)
    }
}

impl fmt::Display for GcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GcError::Io(e) => write!(f, "Input error: {}", e),
            GcError::Input(msg) => write!(f, "Input error: {}", msg),
            GcError::MalformedData(msg) => write!(f, "Malformed FASTA: {}", msg),
            GcError::EmptyResult => write!(f, "No sequences found in input"),
        }
    }
}

impl std::error::Error for GcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GcError::Io(e) => Some(e),
            _ => None,
        }
    }
}
