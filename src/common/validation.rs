use validator::{ValidationError, ValidationErrors};

/// Rejects empty and whitespace-only strings.
pub fn non_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

/// Accepts only absolute http(s) URLs; blank input counts as missing.
pub fn http_url(value: &str) -> Result<(), ValidationError> {
    non_blank(value)?;
    match url::Url::parse(value.trim()) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(()),
        _ => Err(ValidationError::new("url")),
    }
}

/// Request bodies are camelCase on the wire; report fields the way callers
/// spelled them.
fn wire_name(field: &str) -> String {
    let mut name = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            name.extend(c.to_uppercase());
            upper = false;
        } else {
            name.push(c);
        }
    }
    name
}

/// Flattens validator output into one line, listing missing fields first.
pub fn describe(errors: &ValidationErrors) -> String {
    let mut missing = Vec::new();
    let mut invalid = Vec::new();

    for (field, field_errors) in errors.field_errors() {
        if field_errors.iter().any(|e| e.code == "required") {
            missing.push(wire_name(&field));
        } else {
            invalid.push(wire_name(&field));
        }
    }
    missing.sort();
    invalid.sort();

    let mut parts = Vec::new();
    if !missing.is_empty() {
        parts.push(format!("Missing required fields: {}", missing.join(", ")));
    }
    if !invalid.is_empty() {
        parts.push(format!("Invalid fields: {}", invalid.join(", ")));
    }
    parts.join("; ")
}
