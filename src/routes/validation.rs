use axum::Json;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::constants::{ALLOWED_ROLES, ERR_INVALID_ROLE, ERR_NO_DATA};
use crate::error::{AppError, Result};

/// Unwrap an optional JSON body, folding an absent or unparseable body into
/// null so `require_fields` reports it as missing data.
pub fn body_value(body: Option<Json<Value>>) -> Value {
    body.map(|Json(v)| v).unwrap_or(Value::Null)
}

/// Check that a request body is a JSON object carrying every required field,
/// reporting the first missing field by name.
///
/// A key that is present but null counts as present; no type or range checks
/// happen here.
pub fn require_fields(data: &Value, required: &[&str]) -> Result<()> {
    let Some(object) = data.as_object() else {
        return Err(AppError::Validation(ERR_NO_DATA.to_string()));
    };

    for field in required {
        if !object.contains_key(*field) {
            return Err(AppError::Validation(format!(
                "Missing required field: {field}"
            )));
        }
    }

    Ok(())
}

/// Check that a role value is one of the allowed role names
pub fn validate_role(value: &Value) -> Result<()> {
    let allowed = value
        .as_str()
        .map_or(false, |role| ALLOWED_ROLES.contains(&role));
    if !allowed {
        return Err(AppError::Validation(ERR_INVALID_ROLE.to_string()));
    }
    Ok(())
}

/// Deserialize a validated body into its typed payload
///
/// Runs after `require_fields`, so the only way this fails is a field of the
/// wrong JSON type.
pub fn parse_payload<T: DeserializeOwned>(data: Value) -> Result<T> {
    serde_json::from_value(data).map_err(|e| AppError::Validation(format!("Invalid field value: {e}")))
}
