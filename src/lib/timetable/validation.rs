//! Declarative checks for form input, evaluated once before any request is sent.
use std::collections::BTreeMap;

use super::error::ValidationError;

pub const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Named raw input fields, the way a submitted form hands them over.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Form {
    fields: BTreeMap<String, String>,
}

impl Form {
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self {
            fields: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Trimmed value, `None` when the field is absent or blank.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    pub fn reset(&mut self) {
        self.fields.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.fields.values().all(|v| v.trim().is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldFormat {
    Text,
    PositiveInt,
    /// `9`, `09` or `09:00`
    Hour,
    Weekday,
}

#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub name: &'static str,
    pub required: bool,
    pub format: FieldFormat,
}

impl FieldRule {
    pub const fn required(name: &'static str, format: FieldFormat) -> Self {
        Self {
            name,
            required: true,
            format,
        }
    }

    pub const fn optional(name: &'static str, format: FieldFormat) -> Self {
        Self {
            name,
            required: false,
            format,
        }
    }
}

pub type Schema = &'static [FieldRule];

/// Checks every rule in order and reports the first field that fails.
pub fn validate(schema: Schema, form: &Form) -> Result<(), ValidationError> {
    for rule in schema {
        match form.get(rule.name) {
            None if rule.required => return Err(ValidationError::missing(rule.name)),
            None => {}
            Some(value) => check_format(rule.name, rule.format, value)?,
        }
    }
    Ok(())
}

fn check_format(field: &str, format: FieldFormat, value: &str) -> Result<(), ValidationError> {
    match format {
        FieldFormat::Text => Ok(()),
        FieldFormat::PositiveInt => parse_positive_int(field, value).map(|_| ()),
        FieldFormat::Hour => parse_hour(field, value).map(|_| ()),
        FieldFormat::Weekday => parse_weekday(field, value).map(|_| ()),
    }
}

pub fn parse_positive_int(field: &str, value: &str) -> Result<i64, ValidationError> {
    match value.parse::<i64>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ValidationError::new(field, "must be a positive whole number")),
    }
}

/// Accepts a plain hour or `HH:MM` on the hour, returns the hour.
pub fn parse_hour(field: &str, value: &str) -> Result<u8, ValidationError> {
    let bad = || ValidationError::new(field, "must be an hour like 9 or 09:00");
    let (hour, minutes) = match value.split_once(':') {
        Some((h, m)) => (h, Some(m)),
        None => (value, None),
    };
    if hour.is_empty() || hour.len() > 2 || !hour.bytes().all(|b| b.is_ascii_digit()) {
        return Err(bad());
    }
    if let Some(m) = minutes {
        if m.len() != 2 || !m.bytes().all(|b| b.is_ascii_digit()) {
            return Err(bad());
        }
        if m != "00" {
            return Err(ValidationError::new(field, "must be on the hour"));
        }
    }
    match hour.parse::<u8>() {
        Ok(h) if h <= 23 => Ok(h),
        _ => Err(bad()),
    }
}

/// Case-insensitive day name, returned in its canonical spelling.
pub fn parse_weekday(field: &str, value: &str) -> Result<&'static str, ValidationError> {
    WEEKDAYS
        .iter()
        .find(|day| day.eq_ignore_ascii_case(value))
        .copied()
        .ok_or_else(|| ValidationError::new(field, "must be a day of the week"))
}

#[cfg(test)]
#[path = "tests/validation_tests.rs"]
mod tests;
