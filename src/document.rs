//! Typed field access over untyped JSON documents.
//!
//! `DocumentReader` pulls declared fields out of a `serde_json` object while
//! recording every violation, so one pass over a document reports all of its
//! field errors at once.

use serde_json::{Map, Value};

use crate::entity::WireEnum;
use crate::error::{FieldError, ValidationError, ValidationResult};

/// Reads declared fields out of a JSON object, collecting field errors
/// instead of stopping at the first.
///
/// Getters for required fields return placeholder values once an error is
/// recorded; `finish` rejects the whole document before a caller can observe
/// them. Undeclared keys are ignored.
pub(crate) struct DocumentReader<'a> {
    entity: &'static str,
    map: &'a Map<String, Value>,
    errors: Vec<FieldError>,
}

impl<'a> DocumentReader<'a> {
    /// Opens a document for reading. The document itself must be an object.
    pub fn new(entity: &'static str, document: &'a Value) -> ValidationResult<Self> {
        match document.as_object() {
            Some(map) => Ok(Self {
                entity,
                map,
                errors: Vec::new(),
            }),
            None => Err(ValidationError::single(
                entity,
                FieldError::type_mismatch("$root", "object", json_type_name(document)),
            )),
        }
    }

    /// Required text field.
    pub fn required_text(&mut self, field: &str) -> String {
        match self.map.get(field) {
            Some(Value::String(value)) => value.clone(),
            Some(other) => {
                self.errors
                    .push(FieldError::type_mismatch(field, "string", json_type_name(other)));
                String::new()
            }
            None => {
                self.errors.push(FieldError::missing(field));
                String::new()
            }
        }
    }

    /// Optional text field; absent fields stay `None`.
    pub fn optional_text(&mut self, field: &str) -> Option<String> {
        match self.map.get(field) {
            Some(Value::String(value)) => Some(value.clone()),
            Some(other) => {
                self.errors
                    .push(FieldError::type_mismatch(field, "string", json_type_name(other)));
                None
            }
            None => None,
        }
    }

    /// Text field with a default factory, invoked only when the field is absent.
    pub fn text_or_else(&mut self, field: &str, default: impl FnOnce() -> String) -> String {
        match self.map.get(field) {
            Some(Value::String(value)) => value.clone(),
            Some(other) => {
                self.errors
                    .push(FieldError::type_mismatch(field, "string", json_type_name(other)));
                String::new()
            }
            None => default(),
        }
    }

    /// Boolean field with a constant default.
    pub fn flag_or(&mut self, field: &str, default: bool) -> bool {
        match self.map.get(field) {
            Some(Value::Bool(value)) => *value,
            Some(other) => {
                self.errors
                    .push(FieldError::type_mismatch(field, "bool", json_type_name(other)));
                default
            }
            None => default,
        }
    }

    /// Required field restricted to a closed set of wire strings.
    pub fn required_enum<E: WireEnum>(&mut self, field: &str) -> Option<E> {
        match self.map.get(field) {
            Some(Value::String(value)) => match E::from_wire(value) {
                Some(parsed) => Some(parsed),
                None => {
                    self.errors
                        .push(FieldError::unknown_variant(field, value, E::ALLOWED));
                    None
                }
            },
            Some(other) => {
                self.errors
                    .push(FieldError::type_mismatch(field, "string", json_type_name(other)));
                None
            }
            None => {
                self.errors.push(FieldError::missing(field));
                None
            }
        }
    }

    /// Optional list of text values; elements fail with indexed paths.
    pub fn optional_text_list(&mut self, field: &str) -> Option<Vec<String>> {
        let items = match self.map.get(field) {
            Some(Value::Array(items)) => items,
            Some(other) => {
                self.errors
                    .push(FieldError::type_mismatch(field, "array", json_type_name(other)));
                return None;
            }
            None => return None,
        };

        let mut values = Vec::with_capacity(items.len());
        let mut clean = true;
        for (index, item) in items.iter().enumerate() {
            match item {
                Value::String(value) => values.push(value.clone()),
                other => {
                    self.errors.push(FieldError::type_mismatch(
                        format!("{field}[{index}]"),
                        "string",
                        json_type_name(other),
                    ));
                    clean = false;
                }
            }
        }
        clean.then_some(values)
    }

    /// Required list field; element validation is the caller's job.
    pub fn required_array(&mut self, field: &str) -> Option<&'a [Value]> {
        match self.map.get(field) {
            Some(Value::Array(items)) => Some(items),
            Some(other) => {
                self.errors
                    .push(FieldError::type_mismatch(field, "array", json_type_name(other)));
                None
            }
            None => {
                self.errors.push(FieldError::missing(field));
                None
            }
        }
    }

    /// Folds a nested entity's failure into this document under a path prefix.
    pub fn nested_failure(&mut self, path: &str, failure: ValidationError) {
        for error in failure.errors {
            self.errors.push(FieldError {
                field: format!("{path}.{}", error.field),
                reason: error.reason,
            });
        }
    }

    /// Rejects the document if any field error was recorded.
    pub fn finish(self) -> ValidationResult<()> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(self.entity, self.errors))
        }
    }
}

/// JSON type name used in mismatch reasons.
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
