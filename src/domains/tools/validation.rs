//! Argument validation against a tool's JSON Schema.
//!
//! The schema generated for a tool's parameter type is compiled once when the
//! tool is registered. Every offending field is reported, not just the first.

use jsonschema::{Draft, JSONSchema, ValidationError, error::ValidationErrorKind};
use rmcp::model::JsonObject;
use serde_json::Value;

use super::error::FieldError;

/// Field name used when an error is not tied to a single argument.
const ARGUMENTS_FIELD: &str = "arguments";

/// A compiled parameter schema.
pub struct ArgumentValidator {
    schema: JSONSchema,
}

impl ArgumentValidator {
    /// Compile `schema`. Fails when the schema itself is not valid JSON Schema.
    pub fn compile(schema: &JsonObject) -> Result<Self, String> {
        let schema = Value::Object(schema.clone());
        let compiled = JSONSchema::options()
            .with_draft(Draft::Draft7)
            .should_validate_formats(true)
            .compile(&schema)
            .map_err(|e| e.to_string())?;
        Ok(Self { schema: compiled })
    }

    /// Validate `arguments`, collecting one [`FieldError`] per violation.
    pub fn validate(&self, arguments: &JsonObject) -> Result<(), Vec<FieldError>> {
        let instance = Value::Object(arguments.clone());
        match self.schema.validate(&instance) {
            Ok(()) => Ok(()),
            Err(errors) => Err(errors.map(field_error).collect()),
        }
    }
}

impl std::fmt::Debug for ArgumentValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArgumentValidator").finish_non_exhaustive()
    }
}

fn field_error(error: ValidationError<'_>) -> FieldError {
    if let ValidationErrorKind::Required { property } = &error.kind {
        let name = property.as_str().map(str::to_string).unwrap_or_else(|| property.to_string());
        return FieldError::new(name, "is required");
    }

    // "/url" or "/items/0" -> top-level argument name
    let pointer = error.instance_path.to_string();
    let field = pointer
        .trim_start_matches('/')
        .split('/')
        .next()
        .filter(|segment| !segment.is_empty())
        .unwrap_or(ARGUMENTS_FIELD)
        .to_string();

    FieldError::new(field, error.to_string())
}
