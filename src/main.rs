// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use catfind::{
    composite_similarity, cosine_similarity, levenshtein_distance, normalize, Catalogue, Event,
    SearchOptions,
};
use clap::Parser;
use serde::Serialize;
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

mod cli;
use cli::display::{self, themed, BOLD, CYAN, GRAY};
use cli::{Cli, Commands};

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Search {
            file,
            query,
            limit,
            threshold,
            weighted,
            ngram_len,
            json,
        } => {
            let options = SearchOptions::new(limit, threshold).weighted(weighted);
            run_search(&file, &query, &options, ngram_len, json)
        }
        Commands::Inspect {
            file,
            top,
            ngram_len,
        } => run_inspect(&file, top, ngram_len),
        Commands::Compare { a, b } => {
            run_compare(&a, &b);
            Ok(())
        }
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", display::error_line("error:"), e);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr, filtered by `RUST_LOG` (default `warn`).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn open_catalogue(file: &Path, ngram_len: usize) -> Result<Catalogue> {
    let mut catalogue = Catalogue::with_ngram_len(ngram_len)?;
    let started = Instant::now();
    catalogue
        .load(file)
        .with_context(|| format!("failed to load catalogue {}", file.display()))?;
    debug!(
        entries = catalogue.size(),
        elapsed_ms = started.elapsed().as_secs_f64() * 1000.0,
        "catalogue ready"
    );
    Ok(catalogue)
}

#[derive(Serialize)]
struct JsonHit<'a> {
    id: i64,
    name: &'a str,
    score: f64,
    event: &'a Event,
}

fn run_search(
    file: &Path,
    query: &str,
    options: &SearchOptions,
    ngram_len: usize,
    json: bool,
) -> Result<()> {
    options.validate()?;
    if options.threshold > 1.0 {
        warn!(threshold = options.threshold, "threshold above 1.0 can never match");
    }

    let catalogue = open_catalogue(file, ngram_len)?;
    if normalize(query).is_empty() {
        warn!(query, "query has nothing to match on");
    }

    let started = Instant::now();
    let hits = catalogue.search_with(query, options);
    debug!(
        hits = hits.len(),
        elapsed_us = started.elapsed().as_secs_f64() * 1e6,
        "search finished"
    );

    if json {
        let rows: Vec<JsonHit<'_>> = hits
            .iter()
            .map(|hit| JsonHit {
                id: hit.entry.id,
                name: &hit.entry.name,
                score: hit.score,
                event: &hit.entry.event,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    display::section_top(&format!("\"{}\"", display::truncate(query, 40)));
    if hits.is_empty() {
        display::row(&format!(" {}", themed(GRAY, &[], "no matches")));
    }
    for (rank, hit) in hits.iter().enumerate() {
        let line = format!(
            " {:>3}. {}  {} {}",
            rank + 1,
            display::score_value(hit.score),
            display::pad_right(&display::truncate(&hit.entry.name, 48), 48),
            display::id_label(hit.entry.id)
        );
        display::row(&line);
    }
    display::section_bot();
    Ok(())
}

fn run_inspect(file: &Path, top: usize, ngram_len: usize) -> Result<()> {
    let catalogue = open_catalogue(file, ngram_len)?;
    let index = catalogue.index();
    let aggregate = index.aggregate();

    display::section_top("CATALOGUE");
    display::row(&format!(" {}", catalogue));
    display::row(&format!(" entries          {:>10}", catalogue.size()));
    display::row(&format!(" n-gram length    {:>10}", index.ngram_len()));
    display::row(&format!(" distinct n-grams {:>10}", aggregate.distinct()));
    display::row(&format!(" total n-grams    {:>10}", aggregate.total()));
    display::section_bot();

    let common = index.top_ngrams(top);
    if common.is_empty() {
        return Ok(());
    }
    display::section_top("MOST FREQUENT N-GRAMS");
    for (gram, count) in &common {
        let shown = format!("\"{}\"", gram);
        display::row(&format!(
            " {}  {:>8}  in {:>6} entries",
            display::pad_right(&themed(CYAN, &[BOLD], &shown), 10),
            count,
            aggregate.document_frequency(gram)
        ));
    }
    display::section_bot();
    Ok(())
}

fn run_compare(a: &str, b: &str) {
    let (na, nb) = (normalize(a), normalize(b));
    display::section_top("COMPARE");
    display::row(&format!(" a          {}", na));
    display::row(&format!(" b          {}", nb));
    display::row(&format!(" cosine     {}", display::score_value(cosine_similarity(&na, &nb))));
    display::row(&format!(" distance   {:>6}", levenshtein_distance(&na, &nb)));
    display::row(&format!(" composite  {}", display::score_value(composite_similarity(a, b))));
    display::section_bot();
}

