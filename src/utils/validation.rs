use crate::utils::error::{CvError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(CvError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(CvError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CvError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// 輸入與輸出不可指向同一檔案，否則會覆蓋履歷資料
pub fn validate_distinct_paths(input: &str, output: &str) -> Result<()> {
    if std::path::Path::new(input) == std::path::Path::new(output) {
        return Err(CvError::ConfigValidationError {
            field: "paths.output".to_string(),
            message: format!("Output path '{}' would overwrite the input file", output),
        });
    }
    Ok(())
}
