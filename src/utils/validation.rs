use crate::utils::error::{GreetError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Parses a decimal port string, rejecting anything outside 1-65535.
pub fn validate_port(field_name: &str, value: &str) -> Result<u16> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Err(GreetError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Port cannot be empty".to_string(),
        });
    }

    let port: u16 = trimmed
        .parse()
        .map_err(|_| GreetError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Port must be a decimal number between 1 and 65535".to_string(),
        })?;

    if port == 0 {
        return Err(GreetError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Port 0 is reserved".to_string(),
        });
    }

    Ok(port)
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(GreetError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}
