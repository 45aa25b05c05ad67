//! Top-level check execution: collect, fan out, report, persist.

use std::io::{self, BufReader};
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::warn;

use crate::application::{collector, reporter, runner};
use crate::cli::output;
use crate::cli::types::Cli;
use crate::domain::models::{mask_key, ValidationResult};
use crate::infrastructure::config::{Config, ConfigLoader};
use crate::infrastructure::openai::{OpenAiClient, OpenAiClientConfig};

/// Run a full check batch according to the CLI arguments.
pub async fn execute(cli: Cli) -> Result<()> {
    let config = resolve_config(&cli)?;

    if !cli.json && cli.input.is_none() {
        println!("{}", output::banner());
    }

    let collected = match &cli.input {
        Some(path) => {
            let file = std::fs::File::open(path)
                .with_context(|| format!("Failed to open input file {}", path.display()))?;
            collector::collect_keys(BufReader::new(file))?
        }
        None => collector::collect_keys(io::stdin().lock())?,
    };

    if !cli.json {
        for line in &collected.skipped {
            println!("{}", output::rejected_line(line));
        }
    }

    if collected.is_empty() {
        if cli.json {
            print_json_report(&[], &collected.skipped, &[], None);
        } else {
            println!("\nNo valid API keys provided!");
        }
        return Ok(());
    }

    if !cli.json {
        println!("\nChecking {} API keys...", collected.keys.len());
        println!("{}", output::separator());
    }

    let client = OpenAiClient::new(OpenAiClientConfig {
        base_url: config.base_url.clone(),
        timeout_secs: config.timeout_secs,
        rules: config.rules.clone(),
    })?;

    let results = runner::check_all(Arc::new(client), collected.keys, config.concurrency).await;

    let valid = reporter::valid_keys(&results);

    // A write failure is reported but never fails an otherwise complete run.
    let mut saved_to = None;
    let mut write_error = None;
    if !valid.is_empty() {
        match reporter::persist_valid_keys(Path::new(&config.output_file), &valid) {
            Ok(()) => saved_to = Some(config.output_file.clone()),
            Err(err) => {
                warn!("failed to write {}: {}", config.output_file, err);
                write_error = Some(err);
            }
        }
    }

    if cli.json {
        print_json_report(&results, &collected.skipped, &valid, saved_to.as_deref());
        if let Some(err) = write_error {
            eprintln!("\nError saving to file: {}", err);
        }
        return Ok(());
    }

    for result in &results {
        println!("{}", output::status_line(result));
    }

    println!("{}", output::separator());
    println!("\nFound {} valid API keys.", valid.len());

    if !valid.is_empty() {
        println!("\nValid API keys:");
        for key in &valid {
            println!("{}", key);
        }

        match (saved_to, write_error) {
            (Some(path), _) => println!("\nValid keys have been saved to '{}'", path),
            (None, Some(err)) => eprintln!("\nError saving to file: {}", err),
            (None, None) => {}
        }
    }

    Ok(())
}

/// Merge loaded configuration with CLI flag overrides and re-validate.
fn resolve_config(cli: &Cli) -> Result<Config> {
    let mut config = ConfigLoader::load().context("Failed to load configuration")?;

    if let Some(concurrency) = cli.concurrency {
        config.concurrency = concurrency;
    }
    if let Some(output_path) = &cli.output {
        config.output_file = output_path.display().to_string();
    }
    if let Some(base_url) = &cli.base_url {
        config.base_url = base_url.clone();
    }
    if let Some(timeout_secs) = cli.timeout_secs {
        config.timeout_secs = timeout_secs;
    }

    ConfigLoader::validate(&config)?;
    Ok(config)
}

/// Emit the whole run as a single JSON document on stdout.
///
/// Per-result keys are masked; the `valid` list is unmasked, mirroring the
/// output file contents.
fn print_json_report(
    results: &[ValidationResult],
    skipped: &[String],
    valid: &[String],
    saved_to: Option<&str>,
) {
    let results_json: Vec<_> = results
        .iter()
        .map(|result| {
            serde_json::json!({
                "key": mask_key(&result.key),
                "valid": result.is_valid(),
                "status": result.status.to_string(),
            })
        })
        .collect();

    let report = serde_json::json!({
        "results": results_json,
        "skipped": skipped.iter().map(|line| mask_key(line)).collect::<Vec<_>>(),
        "valid": valid,
        "saved_to": saved_to,
    });

    println!(
        "{}",
        serde_json::to_string_pretty(&report).unwrap_or_default()
    );
}
