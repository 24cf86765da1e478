// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier
// Modifications (c) 2026 Peter Carlton

mod common;

use crate::common::utils;

#[test]
fn reports_highest() {
    let out = utils::run_binary(&["tests/data/two-records.fas"]);
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout), "seq2\n100.000000\n");
}

#[test]
fn lists_all_records() {
    let out = utils::run_binary(&["--all", "tests/data/two-records.fas"]);
    assert!(out.status.success());
    assert_eq!(
        String::from_utf8_lossy(&out.stdout),
        "seq1\t66.666667\nseq2\t100.000000\n\nseq2\n100.000000\n"
    );
}

#[test]
fn empty_as_zero_flag() {
    let out = utils::run_binary(&["-z", "tests/data/empty-seq.fas"]);
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout), "seq3\n100.000000\n");
}

#[test]
fn missing_argument() {
    let out = utils::run_binary(&[]);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
}

#[test]
fn missing_file() {
    let out = utils::run_binary(&["tests/data/nope.fas"]);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    let err = String::from_utf8_lossy(&out.stderr);
    assert!(err.contains("Input error"));
    assert!(err.contains("nope.fas"));
}

#[test]
fn failures_print_no_partial_report() {
    for (file, msg) in [
        ("tests/data/empty-seq.fas", "empty sequence for header seq2"),
        ("tests/data/empty.fas", "No sequences found in input"),
        ("tests/data/no-header.fas", "sequence data precedes first header"),
    ] {
        let out = utils::run_binary(&["--all", file]);
        assert!(!out.status.success(), "{} should fail", file);
        assert!(out.stdout.is_empty(), "{} printed a partial report", file);
        assert!(String::from_utf8_lossy(&out.stderr).contains(msg));
    }
}

#[test]
fn embedded_whitespace_not_counted() {
    let out = utils::run_binary(&["tests/data/spaced.fas"]);
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout), "spaced\n50.000000\n");
}
