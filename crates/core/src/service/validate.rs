use super::ServiceError;

/// Characters that are not allowed in a catalog name.
pub const RESERVED_NAME_CHARS: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Longest catalog name accepted on rename.
pub const MAX_NAME_LEN: usize = 255;

/// Validate a volume identity, returning it trimmed.
///
/// A blank identity means the upstream volume probe failed.
pub fn validate_identity_key(identity_key: &str) -> Result<&str, ServiceError> {
    let trimmed = identity_key.trim();
    if trimmed.is_empty() {
        return Err(ServiceError::Validation(
            "volume identity is missing".to_string(),
        ));
    }
    if trimmed.chars().any(char::is_control) {
        return Err(ServiceError::Validation(
            "volume identity contains control characters".to_string(),
        ));
    }
    Ok(trimmed)
}

/// Validate a new catalog name, returning it trimmed.
pub fn validate_display_name(name: &str) -> Result<&str, ServiceError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ServiceError::Validation(
            "catalog name cannot be empty".to_string(),
        ));
    }
    if trimmed.chars().count() > MAX_NAME_LEN {
        return Err(ServiceError::Validation(format!(
            "catalog name cannot exceed {MAX_NAME_LEN} characters"
        )));
    }
    if let Some(c) = trimmed
        .chars()
        .find(|c| RESERVED_NAME_CHARS.contains(c) || c.is_control())
    {
        return Err(ServiceError::Validation(format!(
            "catalog name contains invalid character {c:?}"
        )));
    }
    Ok(trimmed)
}

/// Normalize an optional volume label: blank means absent.
pub fn optional_label(label: &str) -> Option<&str> {
    let trimmed = label.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
