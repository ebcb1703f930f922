use crate::utils::error::{Result, SantaError};
use std::fmt::Display;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_positive_number<T>(field_name: &str, value: T, min_value: T) -> Result<()>
where
    T: PartialOrd + Display,
{
    if value < min_value {
        return Err(SantaError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(SantaError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(SantaError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_extension(field_name: &str, path: &str, allowed_extensions: &[&str]) -> Result<()> {
    let extension = std::path::Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension {
        Some(ext) if allowed_extensions.contains(&ext.as_str()) => Ok(()),
        Some(ext) => Err(SantaError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: format!(
                "Unsupported file extension: {}. Allowed extensions: {}",
                ext,
                allowed_extensions.join(", ")
            ),
        }),
        None => Err(SantaError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "File has no extension or invalid filename".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("max_attempts", 5usize, 1).is_ok());
        assert!(validate_positive_number("max_attempts", 0usize, 1).is_err());
        assert!(validate_positive_number("step_limit", 0u64, 1).is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("session", "family.json").is_ok());
        assert!(validate_path("session", "").is_err());
        assert!(validate_path("session", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_extension() {
        assert!(validate_extension("session", "family.JSON", &["json", "toml"]).is_ok());
        assert!(validate_extension("session", "family.toml", &["json", "toml"]).is_ok());
        assert!(validate_extension("session", "family.yaml", &["json", "toml"]).is_err());
        assert!(validate_extension("session", "family", &["json", "toml"]).is_err());
    }
}
