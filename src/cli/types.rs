//! CLI type definitions
//!
//! This module contains the clap command structure that defines the CLI
//! interface. Flags override values loaded from `keycheck.yaml` and the
//! `KEYCHECK_*` environment.

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "keycheck")]
#[command(about = "Keycheck - Parallel OpenAI API key validator", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Maximum number of concurrent validation requests
    #[arg(short, long)]
    pub concurrency: Option<usize>,

    /// Read keys from a file instead of standard input
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Path of the file receiving valid keys
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override the provider API base URL
    #[arg(long)]
    pub base_url: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Output in JSON format
    #[arg(short, long)]
    pub json: bool,
}
