//! Processor configuration descriptors.
//!
//! A [`Processor`] is an immutable description of one named unit of work in
//! the system under test: its property values, the relationships that are
//! auto-terminated, and an optional schedule. The driver consumes it when
//! provisioning the flow.

use crate::error::{HarnessError, Result};
use crate::property::{PropertyDefinition, ValidationReport};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// How the engine triggers a processor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SchedulingStrategy {
    TimerDriven,
    EventDriven,
    CronDriven,
}

impl fmt::Display for SchedulingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TimerDriven => write!(f, "TIMER_DRIVEN"),
            Self::EventDriven => write!(f, "EVENT_DRIVEN"),
            Self::CronDriven => write!(f, "CRON_DRIVEN"),
        }
    }
}

impl std::str::FromStr for SchedulingStrategy {
    type Err = HarnessError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().replace('-', "_").as_str() {
            "TIMER_DRIVEN" => Ok(Self::TimerDriven),
            "EVENT_DRIVEN" => Ok(Self::EventDriven),
            "CRON_DRIVEN" => Ok(Self::CronDriven),
            _ => Err(HarnessError::ConfigError(format!(
                "unknown scheduling strategy: {}",
                s
            ))),
        }
    }
}

/// Scheduling settings carried by a descriptor without interpretation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Schedule {
    /// Scheduling strategy.
    pub strategy: SchedulingStrategy,

    /// Scheduling period (e.g. "1 sec", or a cron expression).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
}

impl Schedule {
    pub fn timer_driven(period: impl Into<String>) -> Self {
        Self {
            strategy: SchedulingStrategy::TimerDriven,
            period: Some(period.into()),
        }
    }
}

/// Immutable processor descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Processor {
    name: String,
    properties: BTreeMap<String, String>,
    auto_terminate: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    schedule: Option<Schedule>,
}

impl Processor {
    /// Creates a descriptor. Values are stored as given; nothing is validated.
    pub fn new<P, K, V, A, R>(
        name: impl Into<String>,
        properties: P,
        auto_terminate: A,
        schedule: Option<Schedule>,
    ) -> Self
    where
        P: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
        A: IntoIterator<Item = R>,
        R: Into<String>,
    {
        Self {
            name: name.into(),
            properties: properties
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            auto_terminate: auto_terminate.into_iter().map(Into::into).collect(),
            schedule,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn properties(&self) -> &BTreeMap<String, String> {
        &self.properties
    }

    /// Returns the value of a single property.
    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    pub fn auto_terminate(&self) -> &BTreeSet<String> {
        &self.auto_terminate
    }

    pub fn is_auto_terminated(&self, relationship: &str) -> bool {
        self.auto_terminate.contains(relationship)
    }

    pub fn schedule(&self) -> Option<&Schedule> {
        self.schedule.as_ref()
    }

    /// Checks the property values against the processor's supported properties.
    pub fn validate(&self, definitions: &[PropertyDefinition]) -> ValidationReport {
        ValidationReport::check(&self.properties, definitions)
    }

    /// Renders the descriptor as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| HarnessError::Serialization(e.to_string()))
    }

    /// Reads a descriptor previously rendered with [`Processor::to_json`].
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| HarnessError::Serialization(e.to_string()))
    }
}
