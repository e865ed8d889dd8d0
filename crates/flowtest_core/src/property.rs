//! Supported-property metadata and descriptor validation.

use crate::error::{HarnessError, Result};
use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

/// How a property value is interpreted by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
    /// Any string, including empty.
    Text,
    /// Must contain a non-whitespace character.
    NonBlank,
    /// `true` or `false`, case-insensitive.
    Boolean,
    /// Non-negative integer.
    UnsignedInt,
    /// Time period such as `"4 sec"`.
    TimePeriod,
}

/// Metadata for one supported processor property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub required: bool,
    pub default_value: Option<&'static str>,
    pub allowable_values: &'static [&'static str],
    pub kind: PropertyKind,
}

impl PropertyDefinition {
    /// Starts an optional free-text property with no default.
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            description: "",
            required: false,
            default_value: None,
            allowable_values: &[],
            kind: PropertyKind::Text,
        }
    }

    pub const fn description(mut self, description: &'static str) -> Self {
        self.description = description;
        self
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub const fn default_value(mut self, value: &'static str) -> Self {
        self.default_value = Some(value);
        self
    }

    pub const fn allowable_values(mut self, values: &'static [&'static str]) -> Self {
        self.allowable_values = values;
        self
    }

    pub const fn kind(mut self, kind: PropertyKind) -> Self {
        self.kind = kind;
        self
    }

    /// Checks a single value against this definition's kind and allowable set.
    fn check_value(&self, value: &str) -> Option<Violation> {
        let blank = value.trim().is_empty();
        if blank && (self.required || self.kind == PropertyKind::NonBlank) {
            return Some(Violation::Blank {
                property: self.name.to_string(),
            });
        }

        let expected = match self.kind {
            PropertyKind::Text | PropertyKind::NonBlank => None,
            PropertyKind::Boolean => {
                let value = value.trim();
                (!value.eq_ignore_ascii_case("true") && !value.eq_ignore_ascii_case("false"))
                    .then_some("a boolean")
            }
            PropertyKind::UnsignedInt => value
                .trim()
                .parse::<u64>()
                .is_err()
                .then_some("an unsigned integer"),
            PropertyKind::TimePeriod => parse_time_period(value)
                .is_err()
                .then_some("a time period"),
        };
        if let Some(expected) = expected {
            return Some(Violation::InvalidValue {
                property: self.name.to_string(),
                value: value.to_string(),
                expected,
            });
        }

        if !self.allowable_values.is_empty()
            && !self
                .allowable_values
                .iter()
                .any(|allowed| allowed.eq_ignore_ascii_case(value))
        {
            return Some(Violation::NotAllowable {
                property: self.name.to_string(),
                value: value.to_string(),
                allowed: self.allowable_values.to_vec(),
            });
        }

        None
    }
}

/// A single problem found while validating a descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// Required property is unset and has no default.
    Missing { property: String },
    /// Value must not be blank.
    Blank { property: String },
    /// Value does not parse as the property's kind.
    InvalidValue {
        property: String,
        value: String,
        expected: &'static str,
    },
    /// Value is not one of the allowable values.
    NotAllowable {
        property: String,
        value: String,
        allowed: Vec<&'static str>,
    },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { property } => write!(f, "required property '{}' is not set", property),
            Self::Blank { property } => write!(f, "property '{}' must not be blank", property),
            Self::InvalidValue {
                property,
                value,
                expected,
            } => write!(f, "property '{}' = {:?} is not {}", property, value, expected),
            Self::NotAllowable {
                property,
                value,
                allowed,
            } => write!(
                f,
                "property '{}' = {:?} is not one of [{}]",
                property,
                value,
                allowed.join(", ")
            ),
        }
    }
}

/// Outcome of validating a descriptor against its supported properties.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Problems with supported properties.
    pub violations: Vec<Violation>,
    /// Properties set on the descriptor that have no definition.
    pub dynamic_properties: Vec<String>,
}

impl ValidationReport {
    pub(crate) fn check(
        properties: &BTreeMap<String, String>,
        definitions: &[PropertyDefinition],
    ) -> Self {
        let mut report = Self::default();

        for def in definitions {
            let value = properties
                .get(def.name)
                .map(String::as_str)
                .or(def.default_value);

            match value {
                Some(value) => {
                    if let Some(violation) = def.check_value(value) {
                        report.violations.push(violation);
                    }
                }
                None if def.required => report.violations.push(Violation::Missing {
                    property: def.name.to_string(),
                }),
                None => {}
            }
        }

        report.dynamic_properties = properties
            .keys()
            .filter(|key| !definitions.iter().any(|def| def.name == key.as_str()))
            .cloned()
            .collect();

        report
    }

    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Parses a time period such as `"4 sec"`, `"60 seconds"` or `"100ms"`.
pub fn parse_time_period(input: &str) -> Result<Duration> {
    let invalid = || HarnessError::InvalidTimePeriod(input.to_string());

    let trimmed = input.trim();
    let split = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .ok_or_else(invalid)?;
    let (number, unit) = trimmed.split_at(split);
    if number.is_empty() {
        return Err(invalid());
    }
    let amount: u64 = number.parse().map_err(|_| invalid())?;

    let unit = unit.trim().to_ascii_lowercase();
    let duration = match unit.as_str() {
        "ns" | "nano" | "nanos" | "nanosecond" | "nanoseconds" => Duration::from_nanos(amount),
        "us" | "micro" | "micros" | "microsecond" | "microseconds" => {
            Duration::from_micros(amount)
        }
        "ms" | "msec" | "msecs" | "milli" | "millis" | "millisecond" | "milliseconds" => {
            Duration::from_millis(amount)
        }
        "s" | "sec" | "secs" | "second" | "seconds" => Duration::from_secs(amount),
        "m" | "min" | "mins" | "minute" | "minutes" => {
            Duration::from_secs(amount.checked_mul(60).ok_or_else(invalid)?)
        }
        "h" | "hr" | "hrs" | "hour" | "hours" => {
            Duration::from_secs(amount.checked_mul(3600).ok_or_else(invalid)?)
        }
        "d" | "day" | "days" => {
            Duration::from_secs(amount.checked_mul(86400).ok_or_else(invalid)?)
        }
        _ => return Err(invalid()),
    };
    Ok(duration)
}
