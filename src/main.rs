mod catalog;
mod config;
mod pipeline;
mod reader;
mod sql;

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use crate::catalog::validate_tle;
use crate::config::Config;
use crate::pipeline::ImportSummary;

#[derive(Parser)]
#[command(name = "satcat-import")]
#[command(about = "Turn Space-Track CSV exports into an SQL import script")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the SQL import script
    Generate { config: String },
    /// Read and normalize the inputs without writing anything
    Check {
        config: String,
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { config } => generate(&config),
        Commands::Check { config, json } => check(&config, json),
    }
}

fn load_config(path: &str) -> Option<Config> {
    match Config::from_file(path) {
        Ok(c) => Some(c),
        Err(e) => {
            eprintln!("Error reading config {}: {}", path, e);
            None
        }
    }
}

fn generate(path: &str) -> ExitCode {
    let Some(config) = load_config(path) else {
        return ExitCode::FAILURE;
    };

    match pipeline::run(&config, chrono::Utc::now()) {
        Ok(summary) => {
            print_summary(&summary);
            println!("SQL file generated: {}", config.output.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Import failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn check(path: &str, json: bool) -> ExitCode {
    let Some(config) = load_config(path) else {
        return ExitCode::FAILURE;
    };

    let (catalog, summary) = match pipeline::load(&config) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Check failed: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut issues = 0;
    for record in catalog.records() {
        if let Err(issue) = validate_tle(record) {
            log::warn!(
                "{} @ {}: {}",
                record.catalog_number,
                record.epoch.as_deref().unwrap_or("no epoch"),
                issue
            );
            issues += 1;
        }
    }

    if json {
        match serde_json::to_string_pretty(&summary) {
            Ok(s) => println!("{}", s),
            Err(e) => {
                eprintln!("Error serializing summary: {}", e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        print_summary(&summary);
        println!("  TLE issues:    {}", issues);
        for (i, entry) in catalog.entries().iter().take(10).enumerate() {
            println!("  {}: {} (NORAD {})", i + 1, entry.name, entry.catalog_number);
        }
    }

    ExitCode::SUCCESS
}

fn print_summary(summary: &ImportSummary) {
    println!(
        "Files: {} read, {} failed",
        summary.files_read, summary.files_failed
    );
    println!("  Rows:          {} ({} skipped)", summary.rows, summary.rows_skipped);
    println!("  Satellites:    {}", summary.entries);
    println!("  TLE records:   {}", summary.records);
    if summary.statements > 0 {
        println!("  Statements:    {}", summary.statements);
    }
}
