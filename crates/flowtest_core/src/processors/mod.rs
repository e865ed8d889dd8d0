//! Processor descriptors known to the harness.

pub mod consume_kafka;

pub use consume_kafka::ConsumeKafka;

use crate::error::{HarnessError, Result};
use crate::processor::{Processor, Schedule};
use crate::property::PropertyDefinition;

/// Names accepted by [`by_name`].
pub const KNOWN_PROCESSORS: &[&str] = &[consume_kafka::NAME];

/// Builds the default descriptor registered under `name`.
pub fn by_name(name: &str, schedule: Option<Schedule>) -> Result<Processor> {
    match name {
        consume_kafka::NAME => Ok(ConsumeKafka::new(schedule).into()),
        _ => Err(HarnessError::UnknownProcessor(name.to_string())),
    }
}

/// Supported-property metadata for the processor registered under `name`.
pub fn property_definitions(name: &str) -> Result<&'static [PropertyDefinition]> {
    match name {
        consume_kafka::NAME => Ok(ConsumeKafka::property_definitions()),
        _ => Err(HarnessError::UnknownProcessor(name.to_string())),
    }
}
