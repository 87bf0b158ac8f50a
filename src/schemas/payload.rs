//! Field-by-field reader over a JSON object payload.

use serde_json::{Map, Value};
use validator::ValidationErrors;

use crate::errors::FieldErrors;

const MISSING_FIELD: &str = "Missing data for required field.";
const NOT_A_STRING: &str = "Not a valid string.";
const UNKNOWN_FIELD: &str = "Unknown field.";
const INVALID_INPUT_TYPE: &str = "Invalid input type.";

/// Key used for errors that concern the payload as a whole.
pub const SCHEMA_KEY: &str = "_schema";

/// Collects per-field errors while extracting values from a payload.
#[derive(Debug, Default)]
pub struct Payload {
    object: Map<String, Value>,
    errors: FieldErrors,
}

impl Payload {
    /// Start reading `payload`, flagging any key outside `accepted`.
    pub fn new(payload: Value, accepted: &[&str]) -> Self {
        let mut reader = Self::default();

        match payload {
            Value::Object(object) => {
                for key in object.keys().filter(|k| !accepted.contains(&k.as_str())) {
                    reader.push(key, UNKNOWN_FIELD);
                }
                reader.object = object;
            }
            _ => reader.push(SCHEMA_KEY, INVALID_INPUT_TYPE),
        }

        reader
    }

    /// Take a required string field. Missing or non-string values are
    /// recorded and yield `None`.
    pub fn required_string(&mut self, field: &str) -> Option<String> {
        match self.object.remove(field) {
            Some(Value::String(value)) => Some(value),
            Some(_) => {
                self.push(field, NOT_A_STRING);
                None
            }
            None => {
                // An invalid payload type is already reported once under _schema.
                if !self.errors.contains_key(SCHEMA_KEY) {
                    self.push(field, MISSING_FIELD);
                }
                None
            }
        }
    }

    /// Fold in rule failures from `validator`, skipping fields that
    /// already failed extraction. Nothing is added once the payload
    /// itself was rejected.
    pub fn merge(&mut self, errors: &ValidationErrors) {
        if self.errors.contains_key(SCHEMA_KEY) {
            return;
        }
        for (field, errs) in errors.field_errors() {
            let field = field.to_string();
            if self.errors.contains_key(&field) {
                continue;
            }
            let messages = errs
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{} is invalid", field))
                })
                .collect();
            self.errors.insert(field, messages);
        }
    }

    /// Whether any field has failed so far.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn into_errors(self) -> FieldErrors {
        self.errors
    }

    fn push(&mut self, field: &str, message: &str) {
        self.errors
            .entry(field.to_string())
            .or_default()
            .push(message.to_string());
    }
}
