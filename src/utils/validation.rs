use crate::utils::error::{Result, ServiceError};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ServiceError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(ServiceError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    // written so that NaN fails too
    if !(value >= min && value <= max) {
        return Err(ServiceError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_non_empty_list(field_name: &str, values: &[String]) -> Result<()> {
    if values.is_empty() {
        return Err(ServiceError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: "[]".to_string(),
            reason: "At least one entry is required".to_string(),
        });
    }
    for value in values {
        validate_non_empty_string(field_name, value)?;
    }
    Ok(())
}

fn invalid_origin(field_name: &str, origin: &str, reason: impl Into<String>) -> ServiceError {
    ServiceError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: origin.to_string(),
        reason: reason.into(),
    }
}

/// Parses a CORS origin and returns it the way browsers send it in the
/// `Origin` header (lowercase host, default port dropped, no trailing slash).
/// `*` is passed through unchanged.
pub fn normalize_origin(field_name: &str, origin: &str) -> Result<String> {
    if origin == "*" {
        return Ok(origin.to_string());
    }

    let url = Url::parse(origin)
        .map_err(|e| invalid_origin(field_name, origin, format!("Invalid origin format: {}", e)))?;

    match url.scheme() {
        "http" | "https" => {}
        scheme => {
            return Err(invalid_origin(
                field_name,
                origin,
                format!("Unsupported origin scheme: {}", scheme),
            ))
        }
    }

    if url.host().is_none() {
        return Err(invalid_origin(field_name, origin, "Origin must have a host"));
    }
    if !url.username().is_empty() || url.password().is_some() {
        return Err(invalid_origin(
            field_name,
            origin,
            "Origin must not contain user info",
        ));
    }
    if url.path() != "/" || origin.ends_with('/') {
        return Err(invalid_origin(field_name, origin, "Origin must not contain a path"));
    }
    if url.query().is_some() {
        return Err(invalid_origin(field_name, origin, "Origin must not contain a query"));
    }
    if url.fragment().is_some() {
        return Err(invalid_origin(
            field_name,
            origin,
            "Origin must not contain a fragment",
        ));
    }

    Ok(url.origin().ascii_serialization())
}

pub fn validate_origin(field_name: &str, origin: &str) -> Result<()> {
    normalize_origin(field_name, origin).map(|_| ())
}
