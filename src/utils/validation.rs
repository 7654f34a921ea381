use crate::domain::model::{Document, Record};
use crate::utils::error::{EditorError, Result};
use serde_json::Value;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(EditorError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(EditorError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(EditorError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// 檢查文件是否含有 `list` 欄位，並轉成 [`Document`]
pub fn validate_document(raw: Value) -> Result<Document> {
    let Value::Object(mut object) = raw else {
        return Err(EditorError::Schema {
            message: "top-level JSON value must be an object".to_string(),
        });
    };

    let list = object.remove("list").ok_or_else(|| EditorError::Schema {
        message: "no 'list' field found".to_string(),
    })?;

    let list: Vec<Record> = serde_json::from_value(list).map_err(|e| EditorError::Schema {
        message: format!("'list' must be an array of objects: {}", e),
    })?;

    Ok(Document { list })
}
