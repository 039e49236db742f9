// src/infrastructure/json.rs
use crate::domain::error::{DomainError, DomainResult};
use serde::Serialize;
use std::io::Write;

/// Writes any serializable view as pretty JSON to standard output.
///
/// Standard output is used for pipeable content without colors or formatting
pub fn write_json<T: Serialize + ?Sized>(value: &T) -> DomainResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| DomainError::Serialization(format!("Failed to serialize to JSON: {}", e)))?;

    println!("{}", json);

    // Flush stdout to ensure immediate output
    std::io::stdout().flush()?;

    Ok(())
}
