// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier
// Modifications (c) 2026 Peter Carlton

use std::collections::HashMap;

/// A FastA record: the header (without the '>' marker) and the full, lowercased sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaRecord {
    pub header: String,
    pub sequence: String,
}

impl FastaRecord {
    pub fn new(header: &str) -> Self {
        FastaRecord {
            header: String::from(header),
            sequence: String::new(),
        }
    }
}

/// Records keyed by header, iterated in order of first appearance.
///
/// Inserting a record whose header is already present replaces that record's sequence but keeps
/// its original position.
#[derive(Debug, Default)]
pub struct FastaRecords {
    records: Vec<FastaRecord>,
    index: HashMap<String, usize>,
}

impl FastaRecords {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `record`, returning the sequence it displaced if the header was already known.
    pub fn insert(&mut self, record: FastaRecord) -> Option<String> {
        match self.index.get(&record.header).copied() {
            Some(i) => Some(std::mem::replace(
                &mut self.records[i].sequence,
                record.sequence,
            )),
            None => {
                self.index.insert(record.header.clone(), self.records.len());
                self.records.push(record);
                None
            }
        }
    }

    pub fn get(&self, header: &str) -> Option<&str> {
        self.index
            .get(header)
            .map(|&i| self.records[i].sequence.as_str())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FastaRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a FastaRecords {
    type Item = &'a FastaRecord;
    type IntoIter = std::slice::Iter<'a, FastaRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
