pub mod hash;
pub mod sign;
pub mod verify;

use factsign_core::OperationInput;
use factsign_schemas::Operation;
use serde_json::Value;
use std::io::{self, Read};

/// Input from a file path, or the JSON document on stdin.
pub fn read_input(input: Option<String>) -> Result<OperationInput, Box<dyn std::error::Error>> {
    if let Some(path) = input {
        return Ok(OperationInput::FilePath(path.into()));
    }

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    let value: Value = serde_json::from_str(&buffer).map_err(|e| format!("Invalid JSON: {}", e))?;
    Ok(match value {
        Value::Object(map) => OperationInput::Record(map),
        _ => OperationInput::Unrecognized,
    })
}

/// Resolves input that must hold an operation.
pub fn load_operation(input: Option<String>) -> Result<Operation, Box<dyn std::error::Error>> {
    read_input(input)?
        .resolve()?
        .ok_or_else(|| "input does not hold an operation".into())
}
