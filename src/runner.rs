// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier
// Modifications (c) 2026 Peter Carlton

use std::{
    io::{stdout, Write},
    path::PathBuf,
};

use clap::Parser;
use log::info;

use crate::errors::GcError;
use crate::gc::{calculate_gc_content, EmptySequencePolicy};
use crate::report::{highest_gc_percentage, write_all, write_highest};
use crate::seq::fasta::parse_fasta;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None) ]
struct Cli {
    /// FastA file
    fasta_fname: PathBuf,

    /// Score records with an empty sequence as 0% GC instead of failing
    #[arg(short = 'z', long = "empty-as-zero")]
    empty_as_zero: bool,

    /// Also list the GC percentage of every record, in file order
    #[arg(short, long)]
    all: bool,
}

impl Cli {
    fn empty_policy(&self) -> EmptySequencePolicy {
        if self.empty_as_zero {
            EmptySequencePolicy::Zero
        } else {
            EmptySequencePolicy::Reject
        }
    }
}

pub fn run() -> Result<(), GcError> {
    env_logger::init();
    info!("Starting log");

    let cli = Cli::parse();
    let records = parse_fasta(&cli.fasta_fname)?;
    let results = calculate_gc_content(&records, cli.empty_policy())?;

    if !cli.all {
        return highest_gc_percentage(&results);
    }

    // Render the listing and the report together so that a failure leaves nothing on stdout.
    let mut buf: Vec<u8> = Vec::new();
    write_all(&results, &mut buf)?;
    writeln!(buf)?;
    write_highest(&results, &mut buf)?;

    let mut out = stdout().lock();
    out.write_all(&buf)?;
    out.flush()?;
    Ok(())
}
