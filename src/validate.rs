use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::errors::{SlugError, SlugResult};

/// Declarative ruleset attached to the cache column at registration.
///
/// Plain data so hosts can declare it in their configuration files;
/// compiled once when the behavior is registered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlugValidations {
    /// Require a non-blank value.
    pub presence: bool,
    /// Character-count bounds, checked only when a value is present.
    pub length: Option<LengthRule>,
    /// Pattern the value must match.
    pub format: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LengthRule {
    pub min: Option<usize>,
    pub max: Option<usize>,
}

impl SlugValidations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn require_presence(mut self) -> Self {
        self.presence = true;
        self
    }

    pub fn min_length(mut self, min: usize) -> Self {
        self.length.get_or_insert_with(LengthRule::default).min = Some(min);
        self
    }

    pub fn max_length(mut self, max: usize) -> Self {
        self.length.get_or_insert_with(LengthRule::default).max = Some(max);
        self
    }

    pub fn length_between(self, min: usize, max: usize) -> Self {
        self.min_length(min).max_length(max)
    }

    pub fn matching(mut self, pattern: impl Into<String>) -> Self {
        self.format = Some(pattern.into());
        self
    }

    pub(crate) fn compile(&self) -> SlugResult<CompiledValidations> {
        let format = match &self.format {
            Some(pattern) => Some(Regex::new(pattern).map_err(|err| {
                SlugError::config(format!("bad format pattern {pattern:?}: {err}"))
            })?),
            None => None,
        };
        Ok(CompiledValidations {
            presence: self.presence,
            length: self.length,
            format,
        })
    }
}

/// [`SlugValidations`] with the format pattern compiled.
#[derive(Debug)]
pub(crate) struct CompiledValidations {
    presence: bool,
    length: Option<LengthRule>,
    format: Option<Regex>,
}

impl CompiledValidations {
    /// Evaluate the ruleset against `value`, collecting messages scoped to
    /// `column`. Bounds and format apply only to present values; presence
    /// alone reports absence.
    pub(crate) fn check(&self, column: &str, value: Option<&str>, errors: &mut ValidationErrors) {
        let value = value.unwrap_or("");
        if self.presence && value.trim().is_empty() {
            errors.add(column, "can't be blank");
        }
        if value.is_empty() {
            return;
        }
        if let Some(rule) = self.length {
            let count = value.chars().count();
            if let Some(min) = rule.min {
                if count < min {
                    errors.add(column, format!("is too short (minimum is {min} characters)"));
                }
            }
            if let Some(max) = rule.max {
                if count > max {
                    errors.add(column, format!("is too long (maximum is {max} characters)"));
                }
            }
        }
        if let Some(format) = &self.format {
            if !format.is_match(value) {
                errors.add(column, "is invalid");
            }
        }
    }
}

/// Field-scoped validation messages collected during a cycle.
#[derive(Debug, Clone, Default, PartialEq, Error)]
#[error("slug validation failed: {}", summarize(.entries))]
pub struct ValidationErrors {
    entries: Vec<FieldError>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub column: String,
    pub message: String,
}

impl ValidationErrors {
    pub fn add(&mut self, column: impl Into<String>, message: impl Into<String>) {
        self.entries.push(FieldError {
            column: column.into(),
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Messages recorded against one column, in insertion order.
    pub fn messages_for(&self, column: &str) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|entry| entry.column == column)
            .map(|entry| entry.message.as_str())
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.entries.iter()
    }
}

fn summarize(entries: &[FieldError]) -> String {
    entries
        .iter()
        .map(|entry| format!("{} {}", entry.column, entry.message))
        .collect::<Vec<_>>()
        .join(", ")
}
