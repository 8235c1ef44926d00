//! Per-field validation messages keyed by dotted paths.
//!
//! Request DTOs derive `validator::Validate`; the nested error tree it produces
//! is flattened here into `{"benefits.parking": ["..."], "images[1].image": ["..."]}`
//! so clients can attach messages to the exact input that failed.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use validator::{ValidationError, ValidationErrors, ValidationErrorsKind};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message for `path`.
    pub fn add(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.0.entry(path.into()).or_default().push(message.into());
    }

    pub fn merge(&mut self, other: FieldErrors) {
        for (path, messages) in other.0 {
            self.0.entry(path).or_default().extend(messages);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, path: &str) -> Option<&[String]> {
        self.0.get(path).map(Vec::as_slice)
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// `Ok(())` when nothing was recorded.
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (path, messages) in &self.0 {
            if !first {
                write!(f, "; ")?;
            }
            first = false;
            write!(f, "{}: {}", path, messages.join(", "))?;
        }
        Ok(())
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut out = FieldErrors::new();
        flatten_into("", &errors, &mut out);
        out
    }
}

fn join(prefix: &str, field: &str) -> String {
    if prefix.is_empty() {
        field.to_string()
    } else {
        format!("{}.{}", prefix, field)
    }
}

fn flatten_into(prefix: &str, errors: &ValidationErrors, out: &mut FieldErrors) {
    for (field, kind) in errors.errors() {
        let path = join(prefix, &field.to_string());
        match kind {
            ValidationErrorsKind::Field(list) => {
                for error in list {
                    out.add(path.clone(), describe(error));
                }
            }
            ValidationErrorsKind::Struct(inner) => flatten_into(&path, inner, out),
            ValidationErrorsKind::List(items) => {
                for (index, inner) in items {
                    flatten_into(&format!("{}[{}]", path, index), inner, out);
                }
            }
        }
    }
}

fn describe(error: &ValidationError) -> String {
    if let Some(message) = &error.message {
        return message.to_string();
    }
    match error.code.as_ref() {
        "length" => "has an invalid length".to_string(),
        "range" => "is out of range".to_string(),
        "email" => "must be a valid email address".to_string(),
        "regex" => "has an invalid format".to_string(),
        code => format!("failed the {} check", code),
    }
}
