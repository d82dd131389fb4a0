use serde::Deserialize;

/// Errors raised while loading configuration into a manager.
#[derive(Debug, thiserror::Error)]
pub enum ManagerError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("key '{0}' not found")]
    NameNotFound(String),

    #[error("invalid holiday '{name}': {reason}")]
    InvalidHoliday {
        name: String,
        reason: String
    }
}

impl ManagerError {
    pub fn name_not_found(name: &str) -> ManagerError {
        ManagerError::NameNotFound(name.to_owned())
    }

    pub fn invalid_holiday(name: &str, reason: impl Into<String>) -> ManagerError {
        ManagerError::InvalidHoliday { name: name.to_owned(), reason: reason.into() }
    }
}

pub fn parse_json_value<T>(json_value: serde_json::Value) -> Result<T, ManagerError>
    where T: for<'a> Deserialize<'a> {
    Ok(serde_json::from_value(json_value)?)
}
