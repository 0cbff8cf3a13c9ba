use crate::utils::error::{Result, StudentMarkError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(StudentMarkError::invalid_input(
            field_name,
            path,
            "Path cannot be empty",
        ));
    }

    if path.contains('\0') {
        return Err(StudentMarkError::invalid_input(
            field_name,
            path,
            "Path contains null bytes",
        ));
    }

    Ok(())
}

/// A file name that lives directly inside the data directory.
pub fn validate_file_name(field_name: &str, name: &str) -> Result<()> {
    validate_path(field_name, name)?;

    let path = std::path::Path::new(name);
    let is_bare = path.file_name().map(|f| f == path.as_os_str()).unwrap_or(false);
    if !is_bare || name == "." || name == ".." {
        return Err(StudentMarkError::invalid_input(
            field_name,
            name,
            "Must be a plain file name without directories",
        ));
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u32, min_value: u32) -> Result<()> {
    if value < min_value {
        return Err(StudentMarkError::invalid_input(
            field_name,
            value.to_string(),
            format!("Value must be at least {}", min_value),
        ));
    }
    Ok(())
}

/// Non-empty and free of whitespace, since records are space-delimited on disk.
pub fn validate_token(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(StudentMarkError::invalid_input(
            field_name,
            value,
            "Value cannot be empty or whitespace-only",
        ));
    }

    if value.chars().any(char::is_whitespace) {
        return Err(StudentMarkError::invalid_input(
            field_name,
            value,
            "Value cannot contain spaces",
        ));
    }

    Ok(())
}

pub fn parse_credit(field_name: &str, raw: &str) -> Result<u32> {
    let credit: u32 = raw.trim().parse().map_err(|_| {
        StudentMarkError::invalid_input(field_name, raw, "Expected a whole number")
    })?;
    validate_positive_number(field_name, credit, 1)?;
    Ok(credit)
}

pub fn parse_mark(field_name: &str, raw: &str) -> Result<f64> {
    let mark: f64 = raw
        .trim()
        .parse()
        .map_err(|_| StudentMarkError::invalid_input(field_name, raw, "Expected a number"))?;
    if !mark.is_finite() {
        return Err(StudentMarkError::invalid_input(
            field_name,
            raw,
            "Mark must be a finite number",
        ));
    }
    Ok(mark)
}
