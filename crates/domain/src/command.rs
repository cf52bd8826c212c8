//! Control command — a validated request to set one state field.

use std::fmt;

use serde_json::Value;

use crate::error::ValidationError;

/// A `command = value` pair that passed presence validation.
///
/// Values are stored as text. Construction only succeeds when both the
/// command name and the value are present and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlCommand {
    command: String,
    value: String,
}

impl ControlCommand {
    /// Build a command from text fields.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingCommandOrValue`] if either field is empty.
    pub fn new(
        command: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let command = command.into();
        let value = value.into();
        if command.is_empty() || value.is_empty() {
            return Err(ValidationError::MissingCommandOrValue);
        }
        Ok(Self { command, value })
    }

    /// Build a command from raw JSON fields using loose truthiness.
    ///
    /// Absent fields, `null`, `false`, `0` and `""` count as missing.
    /// Non-empty strings are taken verbatim (so `"0"` is accepted), while
    /// `true` and non-zero numbers are kept as their text form, with
    /// integral floats printed without a fraction (`1e2` becomes `"100"`).
    ///
    /// Arrays and objects are present but have no text form; they are
    /// deliberately reported as missing too, so a client only ever sees the
    /// one validation error.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingCommandOrValue`] when either field
    /// is missing under the rules above.
    pub fn from_json(
        command: Option<&Value>,
        value: Option<&Value>,
    ) -> Result<Self, ValidationError> {
        match (truthy_text(command), truthy_text(value)) {
            (Some(command), Some(value)) => Ok(Self { command, value }),
            _ => Err(ValidationError::MissingCommandOrValue),
        }
    }

    /// Name of the state field to set.
    #[must_use]
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Value to store under [`command`](Self::command).
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for ControlCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.command, self.value)
    }
}

fn truthy_text(field: Option<&Value>) -> Option<String> {
    match field? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Bool(true) => Some("true".to_string()),
        Value::Number(n) if n.as_f64().is_some_and(|f| f.abs() > 0.0) => Some(number_text(n)),
        _ => None,
    }
}

fn number_text(n: &serde_json::Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    // f64's Display drops a zero fraction, unlike serde_json's own formatting
    n.as_f64().map_or_else(|| n.to_string(), |f| f.to_string())
}
