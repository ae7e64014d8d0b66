// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Custom cargo commands for catfind.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests (default and no-default features)
//!   cargo xtask check     - Quick check (check + test + clippy)
//!   cargo xtask bench     - Run benchmarks
//!   cargo xtask fuzz [S]  - Run every fuzz target for S seconds (default 30)

use anyhow::{bail, Context, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Fuzz targets under fuzz/fuzz_targets.
const FUZZ_TARGETS: &[&str] = &["levenshtein_matching", "search_queries", "top_k_selection"];

/// Debug contracts that must stay wired into the library.
const CONTRACT_CALLS: &[&str] = &["check_results_ranked(", "check_aggregate_consistent("];

fn main() -> Result<()> {
    let mut args = env::args().skip(1);
    let task = args.next();
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        Some("fuzz") => {
            let seconds = match args.next() {
                Some(s) => s.parse().with_context(|| format!("invalid seconds: {}", s))?,
                None => 30,
            };
            fuzz(seconds)?
        }
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify       Run full verification suite (contracts + tests + clippy + constants)
  test         Run all Rust tests, with and without default features
  check        Quick check (cargo check + test + clippy)
  bench        Run benchmarks
  fuzz [SECS]  Run each fuzz target for SECS seconds (needs cargo-fuzz, nightly)
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("catfind Verification Suite");
    println!("==========================================\n");

    println!("[1/4] Checking contract call sites...");
    check_contract_calls()?;
    println!("✓ Contracts wired in\n");

    println!("[2/4] Running Rust tests...");
    test()?;
    println!("✓ All Rust tests passed\n");

    println!("[3/4] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("[4/4] Verifying scoring constants...");
    verify_constants()?;
    println!("✓ Constants consistent\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

/// Run all tests, including the build without rayon or unicode-normalization
fn test() -> Result<()> {
    run_cargo(&["test", "--quiet"])?;
    run_cargo(&["test", "--quiet", "--no-default-features", "--lib"])
}

/// Quick check
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check", "--all-targets"])?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

/// Run every fuzz target for a fixed time budget
fn fuzz(seconds: u64) -> Result<()> {
    let root = project_root()?;
    let budget = format!("-max_total_time={}", seconds);

    for (i, target) in FUZZ_TARGETS.iter().enumerate() {
        println!("[{}/{}] fuzzing {} for {}s...", i + 1, FUZZ_TARGETS.len(), target, seconds);
        let status = Command::new("cargo")
            .args(["+nightly", "fuzz", "run", target, "--", &budget])
            .current_dir(&root)
            .status()
            .context("Failed to run cargo fuzz (is cargo-fuzz installed?)")?;
        if !status.success() {
            bail!("fuzz target {} failed", target);
        }
    }

    println!("\n✓ No fuzz failures");
    Ok(())
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}

/// Every `.rs` file under `dir`, recursively.
fn rust_sources(dir: &Path, out: &mut Vec<PathBuf>) -> Result<()> {
    for entry in fs::read_dir(dir).with_context(|| format!("Failed to read {}", dir.display()))? {
        let path = entry?.path();
        if path.is_dir() {
            rust_sources(&path, out)?;
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            out.push(path);
        }
    }
    Ok(())
}

/// Each contract must be called somewhere outside contracts.rs itself.
fn check_contract_calls() -> Result<()> {
    let root = project_root()?;
    let mut files = Vec::new();
    rust_sources(&root.join("src"), &mut files)?;

    for call in CONTRACT_CALLS {
        let mut sites = 0;
        for file in &files {
            if file.ends_with("contracts.rs") {
                continue;
            }
            let content = fs::read_to_string(file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            sites += content.matches(call).count();
        }
        if sites == 0 {
            bail!("Contract {} is no longer called from library code", call.trim_end_matches('('));
        }
        println!("  {} {} call site(s)", call.trim_end_matches('('), sites);
    }

    Ok(())
}

/// The composite weights live in src/scoring/core.rs and must sum to 1.
fn verify_constants() -> Result<()> {
    let root = project_root()?;
    let core_rs = fs::read_to_string(root.join("src/scoring/core.rs"))
        .context("Failed to read src/scoring/core.rs")?;

    let cosine = extract_const(&core_rs, "COSINE_WEIGHT")?;
    let edit = extract_const(&core_rs, "EDIT_WEIGHT")?;
    let max = extract_const(&core_rs, "MAX_SCORE")?;

    println!("  COSINE_WEIGHT={} EDIT_WEIGHT={} MAX_SCORE={}", cosine, edit, max);
    if cosine + edit != max {
        bail!("COSINE_WEIGHT + EDIT_WEIGHT = {} != MAX_SCORE {}", cosine + edit, max);
    }
    if cosine <= 0.0 || edit <= 0.0 {
        bail!("Both weights must be positive");
    }

    Ok(())
}

fn extract_const(content: &str, name: &str) -> Result<f64> {
    // Look for "pub const NAME: f64 = 0.75;"
    let prefix = format!("pub const {}: f64 =", name);
    for line in content.lines() {
        if let Some(rest) = line.trim().strip_prefix(&prefix) {
            let value = rest.trim().trim_end_matches(';').trim();
            return value
                .parse()
                .with_context(|| format!("{} is not a float literal: {}", name, value));
        }
    }
    bail!("{} not found in src/scoring/core.rs", name)
}
