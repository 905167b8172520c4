//! Hash command implementation.

use factsign_core::compute_operation_hash;

use super::load_operation;

pub fn run(input: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let operation = load_operation(input)?;
    println!("{}", compute_operation_hash(&operation)?);
    Ok(())
}
