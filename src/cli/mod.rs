// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the catfind command-line interface.
//!
//! Three subcommands: `search` to query a catalogue file, `inspect` to see
//! what the index built from it looks like, and `compare` to score two
//! strings against each other without any catalogue at all.

pub mod display;

use catfind::{DEFAULT_MAX_RESULTS, DEFAULT_NGRAM_LEN};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "catfind",
    about = "Approximate name search over JSON catalogues",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search a catalogue file and display the best matches
    Search {
        /// Path to a JSON catalogue (array of {id, name, event} objects)
        file: PathBuf,

        /// Search query
        query: String,

        /// Maximum number of results to return
        #[arg(short, long, default_value_t = DEFAULT_MAX_RESULTS)]
        limit: usize,

        /// Minimum score a result must reach, in [0, 1]
        #[arg(short, long, default_value = "0.0")]
        threshold: f64,

        /// Boost entries whose distinctive n-grams the query shares
        #[arg(long)]
        weighted: bool,

        /// N-gram length used to index names
        #[arg(long, default_value_t = DEFAULT_NGRAM_LEN)]
        ngram_len: usize,

        /// Print results as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Summarize a catalogue file and its n-gram index
    Inspect {
        /// Path to a JSON catalogue
        file: PathBuf,

        /// Number of most frequent n-grams to list
        #[arg(long, default_value = "10")]
        top: usize,

        /// N-gram length used to index names
        #[arg(long, default_value_t = DEFAULT_NGRAM_LEN)]
        ngram_len: usize,
    },

    /// Score two strings against each other
    Compare {
        /// First string
        a: String,

        /// Second string
        b: String,
    },
}
