//! rslp — stem Brazilian Portuguese words from the command line.

use std::io::{self, BufRead, BufWriter, Write};

use anyhow::Context;
use rslp_analysis::analyze;
use rslp_core::AnalysisConfig;
use rslp_stem::{StemTrace, Stemmer};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("rslp — RSLP stemmer for Brazilian Portuguese");
    println!();
    println!("Usage: rslp <command> [args]");
    println!();
    println!("Commands:");
    println!("  stem [WORD...]           Print one stem per word (reads stdin if no words)");
    println!("  explain WORD [--json]    Show which stage and rule changed the word");
    println!("  help                     Show this help message");
    println!();
    println!("Environment:");
    println!("  RSLP_CONFIG              JSON file with {{\"keywords\": [..], \"ignore_case\": bool}}");
    println!("  RSLP_KEYWORDS            Extra comma-separated words to leave unstemmed");
    println!("  RUST_LOG                 Log filter (default: warn)");
}

fn stem_words(words: &[String], config: &AnalysisConfig) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if words.is_empty() {
        debug!("Reading words from stdin");
        for line in io::stdin().lock().lines() {
            let line = line.context("Failed to read stdin")?;
            let stems = analyze(line.split_whitespace(), config);
            if !stems.is_empty() {
                writeln!(out, "{}", stems.join(" "))?;
            }
        }
    } else {
        for stem in analyze(words.iter().map(String::as_str), config) {
            writeln!(out, "{}", stem)?;
        }
    }

    out.flush()?;
    Ok(())
}

fn format_trace(trace: &StemTrace) -> Vec<String> {
    let mut lines = vec![format!("{} -> {}", trace.word, trace.stem)];
    if trace.steps.is_empty() {
        lines.push("  (no stage applied)".to_string());
    }
    for step in &trace.steps {
        let rule = match (&step.suffix, &step.replacement) {
            (Some(suffix), Some(replacement)) => format!("-{} => -{}", suffix, replacement),
            (Some(suffix), None) => format!("-{}", suffix),
            (None, _) => String::new(),
        };
        lines.push(format!(
            "  {:<13}{:<14}{} -> {}",
            step.stage, rule, step.before, step.after
        ));
    }
    lines
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let command = args.get(1).map(String::as_str).unwrap_or("help");

    match command {
        "stem" => {
            let config = AnalysisConfig::from_env().context("Failed to load analysis config")?;
            stem_words(&args[2..], &config)?;
        }
        "explain" => {
            let Some(word) = args.get(2) else {
                eprintln!("Usage: rslp explain WORD [--json]");
                std::process::exit(1);
            };
            let trace = Stemmer::new().explain(word);
            if args.iter().skip(3).any(|a| a == "--json") {
                println!("{}", serde_json::to_string_pretty(&trace)?);
            } else {
                for line in format_trace(&trace) {
                    println!("{}", line);
                }
            }
        }
        "--help" | "-h" | "help" => print_usage(),
        _ => {
            eprintln!("Unknown command: {}. Use 'rslp help' for usage.", command);
            std::process::exit(1);
        }
    }

    Ok(())
}
