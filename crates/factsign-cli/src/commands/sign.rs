//! Sign command implementation.

use factsign_core::{KeyWithSuffix, OperationSigner, SignerConfig};

use super::read_input;
use crate::output::format_json;

pub fn run(
    input: Option<String>,
    network_id: String,
    key: String,
    output: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let signer = OperationSigner::new(SignerConfig::new(network_id), KeyWithSuffix::new(key));

    let signed = signer
        .sign_operation(read_input(input)?)?
        .ok_or("input does not hold an operation")?;
    let rendered = format_json(&signed)?;

    match output {
        Some(path) => std::fs::write(&path, rendered + "\n")
            .map_err(|e| format!("Failed to write {}: {}", path, e))?,
        None => println!("{}", rendered),
    }
    Ok(())
}
