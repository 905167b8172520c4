//! Verify command implementation.

use factsign_core::{verify_fact_signs, verify_operation_hash, SignVerdict};
use serde_json::json;

use super::load_operation;
use crate::output::{format_verdict_row, print_verdict_header};

pub fn run(
    input: Option<String>,
    network_id: String,
    strict: bool,
    json_output: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let operation = load_operation(input)?;

    let hash_ok = verify_operation_hash(&operation)?;
    let verdicts = verify_fact_signs(&operation, &network_id)?;
    let all_ok = hash_ok && verdicts.iter().all(|v| *v == SignVerdict::Ok);

    if json_output {
        let fact_signs: Vec<_> = operation
            .fact_signs
            .iter()
            .zip(&verdicts)
            .map(|(fact_sign, verdict)| {
                json!({
                    "signer": fact_sign.signer,
                    "signed_at": fact_sign.signed_at,
                    "verdict": verdict,
                })
            })
            .collect();
        let report = json!({
            "hash": operation.hash,
            "hash_ok": hash_ok,
            "fact_signs": fact_signs,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "hash: {} ({})",
            operation.hash.as_ref().map(|h| h.as_str()).unwrap_or("<missing>"),
            if hash_ok { "ok" } else { "mismatch" }
        );
        print_verdict_header();
        for (fact_sign, verdict) in operation.fact_signs.iter().zip(&verdicts) {
            println!("{}", format_verdict_row(fact_sign, *verdict));
        }
    }

    if strict && !all_ok {
        std::process::exit(1);
    }

    Ok(())
}
