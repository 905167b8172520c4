//! Output formatting utilities.

use factsign_core::SignVerdict;
use factsign_schemas::{FactSign, Operation};

/// Formats an operation as pretty JSON.
pub fn format_json(operation: &Operation) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(operation)
}

/// Formats one fact sign check as a table row.
pub fn format_verdict_row(fact_sign: &FactSign, verdict: SignVerdict) -> String {
    format!(
        "{:<48} {:<26} {:?}",
        truncate(&fact_sign.signer, 48),
        truncate(fact_sign.signed_at.as_str(), 26),
        verdict
    )
}

/// Prints table header.
#[allow(clippy::print_literal)]
pub fn print_verdict_header() {
    println!("{:<48} {:<26} {}", "SIGNER", "SIGNED_AT", "VERDICT");
    println!("{}", "-".repeat(90));
}

/// Shortens `s` to at most `max_len` characters, marking the cut with `...`.
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
    format!("{}...", kept)
}
