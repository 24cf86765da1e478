// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier
// Modifications (c) 2026 Peter Carlton

use std::process::{Command, Output};

use gc_content::{
    errors::GcError,
    gc::{calculate_gc_content, EmptySequencePolicy},
    report::write_highest,
    seq::fasta,
};

/// Runs the whole pipeline on `path` and returns what would go to stdout.
#[allow(dead_code)]
pub fn report_for(path: &str, policy: EmptySequencePolicy) -> Result<String, GcError> {
    let records = fasta::parse_fasta(path)?;
    let results = calculate_gc_content(&records, policy)?;
    let mut buf: Vec<u8> = Vec::new();
    write_highest(&results, &mut buf)?;
    Ok(String::from_utf8(buf).expect("report is not UTF-8"))
}

#[allow(dead_code)]
pub fn run_binary(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_gc-content"))
        .args(args)
        .output()
        .expect("running gc-content")
}
