use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("{value} is outside 1-{size}")]
    OutOfRange { value: usize, size: usize },
}

/// Parses a 1-based row or column typed by the player into a 0-based index.
pub fn parse_coordinate(text: &str, size: usize) -> Result<usize, InputError> {
    let trimmed = text.trim();
    let value: usize = trimmed
        .parse()
        .map_err(|_| InputError::NotANumber(trimmed.to_string()))?;

    if value == 0 || value > size {
        return Err(InputError::OutOfRange { value, size });
    }
    Ok(value - 1)
}
