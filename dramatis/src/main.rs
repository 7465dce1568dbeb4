//! # dramatis
//!
//! A CLI for analyzing script-like text: word frequencies plus speaking
//! characters.
//!
//! ## Overview
//!
//! dramatis is built on top of dramatislib and runs both analyses over one
//! input file, printing a combined report. The word half counts
//! whitespace-delimited tokens case-insensitively (punctuation kept); the
//! character half counts lines that open with an ALL-CAPS speaker label
//! before a period, classifies "main characters" against a threshold, and
//! answers an inclusive count-range query.
//!
//! An unreadable input is not fatal: the report still prints, with explicit
//! placeholder lines in both sections.
//!
//! ## Usage
//!
//! ```bash
//! # Analyze a play
//! dramatis hamlet.txt
//!
//! # Lower the main-character bar and widen the range query
//! dramatis hamlet.txt --threshold 5 --range 5..20
//!
//! # Structured output
//! dramatis hamlet.txt --output json
//! ```

use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Arg, ArgMatches, Command};
use console::Style;
use dramatislib::query::{DEFAULT_MAIN_THRESHOLD, DEFAULT_RANGE};
use dramatislib::{analyze_file, Report, ReportOptions};

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("dramatis")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Word frequency and speaking-character analyzer for script-like text")
        .arg(
            Arg::new("path")
                .required(true)
                .help("Text file to analyze"),
        )
        .arg(
            Arg::new("threshold")
                .short('t')
                .long("threshold")
                .value_parser(clap::value_parser!(u64))
                .default_value("10")
                .help("Minimum speaking parts for a main character"),
        )
        .arg(
            Arg::new("range")
                .short('r')
                .long("range")
                .default_value("10..15")
                .help("Inclusive count range for the range query (LOW..HIGH)"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_parser(["text", "json"])
                .default_value("text")
                .help("Output format"),
        )
}

/// Parse an inclusive `LOW..HIGH` range argument.
fn parse_range(spec: &str) -> Result<(u64, u64), anyhow::Error> {
    let parts: Vec<&str> = spec.split("..").collect();
    if parts.len() != 2 {
        return Err(anyhow::anyhow!(
            "Invalid range format '{spec}'. Use 'LOW..HIGH'"
        ));
    }
    let low: u64 = parts[0]
        .trim()
        .parse()
        .with_context(|| format!("invalid range lower bound '{}'", parts[0]))?;
    let high: u64 = parts[1]
        .trim()
        .parse()
        .with_context(|| format!("invalid range upper bound '{}'", parts[1]))?;
    if low > high {
        return Err(anyhow::anyhow!(
            "range lower bound {low} exceeds upper bound {high}"
        ));
    }
    Ok((low, high))
}

/// Extract report options from matches
fn build_options(matches: &ArgMatches) -> Result<ReportOptions, anyhow::Error> {
    let threshold = matches
        .get_one::<u64>("threshold")
        .copied()
        .unwrap_or(DEFAULT_MAIN_THRESHOLD);
    let (low, high) = match matches.get_one::<String>("range") {
        Some(spec) => parse_range(spec)?,
        None => DEFAULT_RANGE,
    };
    Ok(ReportOptions::new().threshold(threshold).range(low, high))
}

/// Print the text report, bolding section headers on terminals.
fn print_report(report: &Report) {
    let header = Style::new().bold();
    for line in report.to_text().lines() {
        if line.starts_with("--- ") {
            println!("{}", header.apply_to(line));
        } else {
            println!("{line}");
        }
    }
}

fn run(matches: &ArgMatches) -> Result<(), anyhow::Error> {
    let path = matches
        .get_one::<String>("path")
        .map(|s| s.as_str())
        .unwrap_or_default();
    let options = build_options(matches)?;

    let report = analyze_file(Path::new(path), options);

    match matches.get_one::<String>("output").map(|s| s.as_str()) {
        Some("json") => println!("{}", serde_json::to_string_pretty(&report)?),
        _ => print_report(&report),
    }
    Ok(())
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();
    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
