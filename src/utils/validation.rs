use crate::utils::error::{EtlError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub const HTML_EXTENSIONS: &[&str] = &["html", "htm"];
pub const OUTPUT_FORMATS: &[&str] = &["csv", "tsv", "json"];

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_file_extensions(
    field_name: &str,
    files: &[String],
    allowed_extensions: &[&str],
) -> Result<()> {
    let allowed_set: HashSet<&str> = allowed_extensions.iter().copied().collect();

    for file in files {
        validate_path(field_name, file)?;

        match std::path::Path::new(file)
            .extension()
            .and_then(|ext| ext.to_str())
        {
            Some(extension) if allowed_set.contains(extension.to_ascii_lowercase().as_str()) => {}
            Some(extension) => {
                return Err(EtlError::InvalidConfigValueError {
                    field: field_name.to_string(),
                    value: file.clone(),
                    reason: format!(
                        "Unsupported file extension: {}. Allowed extensions: {}",
                        extension,
                        allowed_extensions.join(", ")
                    ),
                });
            }
            None => {
                return Err(EtlError::InvalidConfigValueError {
                    field: field_name.to_string(),
                    value: file.clone(),
                    reason: "File has no extension or invalid filename".to_string(),
                });
            }
        }
    }

    Ok(())
}

pub fn validate_output_formats(field_name: &str, formats: &[String]) -> Result<()> {
    for format in formats {
        if !OUTPUT_FORMATS.contains(&format.as_str()) {
            return Err(EtlError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: format.clone(),
                reason: format!(
                    "Unsupported format. Valid formats: {}",
                    OUTPUT_FORMATS.join(", ")
                ),
            });
        }
    }
    Ok(())
}

/// 至少要有一個輸入檔
pub fn validate_has_inputs(field_name: &str, apartments: &[String], houses: &[String]) -> Result<()> {
    if apartments.is_empty() && houses.is_empty() {
        return Err(EtlError::MissingConfigError {
            field: field_name.to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("output_path", "./output").is_ok());
        assert!(validate_path("output_path", "").is_err());
        assert!(validate_path("output_path", "out\0put").is_err());
    }

    #[test]
    fn test_validate_file_extensions() {
        let files = vec!["apartments.html".to_string(), "villas.HTM".to_string()];
        assert!(validate_file_extensions("apartment_files", &files, HTML_EXTENSIONS).is_ok());

        let invalid_files = vec!["listing.txt".to_string()];
        assert!(validate_file_extensions("apartment_files", &invalid_files, HTML_EXTENSIONS).is_err());

        let no_extension = vec!["listing".to_string()];
        assert!(validate_file_extensions("apartment_files", &no_extension, HTML_EXTENSIONS).is_err());
    }

    #[test]
    fn test_validate_output_formats() {
        assert!(validate_output_formats("formats", &["csv".to_string(), "json".to_string()]).is_ok());
        assert!(validate_output_formats("formats", &["xlsx".to_string()]).is_err());
    }

    #[test]
    fn test_validate_has_inputs() {
        let one = vec!["a.html".to_string()];
        assert!(validate_has_inputs("inputs", &one, &[]).is_ok());
        assert!(validate_has_inputs("inputs", &[], &one).is_ok());
        assert!(validate_has_inputs("inputs", &[], &[]).is_err());
    }
}
