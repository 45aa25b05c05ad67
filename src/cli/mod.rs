//! Command-line interface for keycheck.

pub mod output;
pub mod types;

mod run;

pub use run::execute;
pub use types::Cli;

/// Print a top-level error and exit non-zero.
///
/// Every unhandled failure funnels through here so nothing is silently
/// dropped; in `--json` mode the error is emitted as a JSON document.
pub fn handle_error(err: &anyhow::Error, json: bool) -> ! {
    if json {
        let payload = serde_json::json!({ "error": format!("{:#}", err) });
        eprintln!(
            "{}",
            serde_json::to_string_pretty(&payload).unwrap_or_else(|_| format!("{:#}", err))
        );
    } else {
        eprintln!("\nAn error occurred: {:#}", err);
    }
    std::process::exit(1);
}
