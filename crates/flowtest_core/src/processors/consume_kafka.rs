//! `ConsumeKafka` descriptor as provisioned by the docker integration tests.

use crate::processor::{Processor, Schedule};
use crate::property::{PropertyDefinition, PropertyKind};
use std::ops::Deref;

/// Processor name used by the engine.
pub const NAME: &str = "ConsumeKafka";

/// The only relationship `ConsumeKafka` routes to.
pub const SUCCESS: &str = "success";

/// Property values provisioned by default in the test environment.
pub const DEFAULT_PROPERTIES: [(&str, &str); 10] = [
    ("Kafka Brokers", "kafka-broker:9092"),
    ("Topic Names", "test"),
    ("Topic Name Format", "Names"),
    ("Honor Transactions", "true"),
    ("Group ID", "docker_test_group"),
    ("Offset Reset", "latest"),
    ("Key Attribute Encoding", "UTF-8"),
    ("Message Header Encoding", "UTF-8"),
    ("Max Poll Time", "4 sec"),
    ("Session Timeout", "60 sec"),
];

static PROPERTY_DEFINITIONS: &[PropertyDefinition] = &[
    PropertyDefinition::new("Kafka Brokers")
        .description("A comma-separated list of known Kafka Brokers in the format <host>:<port>.")
        .required()
        .default_value("localhost:9092")
        .kind(PropertyKind::NonBlank),
    PropertyDefinition::new("Security Protocol")
        .description("Protocol used to communicate with brokers. Corresponds to Kafka's 'security.protocol' property.")
        .required()
        .default_value("plaintext")
        .allowable_values(&["plaintext", "ssl", "sasl_plaintext", "sasl_ssl"]),
    PropertyDefinition::new("Topic Names")
        .description("The name of the Kafka Topic(s) to pull from. More than one can be supplied if comma separated.")
        .required(),
    PropertyDefinition::new("Topic Name Format")
        .description("Specifies whether the Topic(s) provided are a comma separated list of names or a single regular expression.")
        .default_value("Names")
        .allowable_values(&["Names", "Patterns"]),
    PropertyDefinition::new("Honor Transactions")
        .description("Specifies whether or not the consumer should only read committed transactional messages.")
        .required()
        .default_value("true")
        .kind(PropertyKind::Boolean),
    PropertyDefinition::new("Group ID")
        .description("A Group ID is used to identify consumers that are within the same consumer group. Corresponds to Kafka's 'group.id' property.")
        .required(),
    PropertyDefinition::new("Offset Reset")
        .description("Allows you to manage the condition when there is no initial offset in Kafka. Corresponds to Kafka's 'auto.offset.reset' property.")
        .required()
        .default_value("latest")
        .allowable_values(&["earliest", "latest", "none"]),
    PropertyDefinition::new("Key Attribute Encoding")
        .description("Encoding of the 'kafka.key' attribute on emitted flow files.")
        .required()
        .default_value("UTF-8")
        .allowable_values(&["UTF-8", "Hex"]),
    PropertyDefinition::new("Message Demarcator")
        .description("String used to join multiple Kafka messages of one batch into a single flow file."),
    PropertyDefinition::new("Message Header Encoding")
        .description("Character encoding used to deserialize message headers added as attributes.")
        .default_value("UTF-8")
        .allowable_values(&["UTF-8", "Hex"]),
    PropertyDefinition::new("Headers To Add As Attributes")
        .description("Regular expression matched against message header names; matches are added as attributes."),
    PropertyDefinition::new("Duplicate Header Handling")
        .description("How to combine multiple headers with the same key.")
        .default_value("Keep Latest")
        .allowable_values(&["Keep First", "Keep Latest", "Comma-separated Merge"]),
    PropertyDefinition::new("Max Poll Records")
        .description("Specifies the maximum number of records Kafka should return in a single poll.")
        .default_value("10000")
        .kind(PropertyKind::UnsignedInt),
    PropertyDefinition::new("Max Uncommitted Time")
        .description("Maximum time allowed to pass before offsets must be committed.")
        .default_value("1 second")
        .kind(PropertyKind::TimePeriod),
    PropertyDefinition::new("Communications Timeout")
        .description("Specifies the timeout that the consumer should use when communicating with the Kafka Broker.")
        .required()
        .default_value("60 seconds")
        .kind(PropertyKind::TimePeriod),
];

/// Kafka consumer descriptor with the test environment's fixed configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsumeKafka {
    processor: Processor,
}

impl ConsumeKafka {
    /// Builds the descriptor; `schedule` is carried through unchanged.
    pub fn new(schedule: Option<Schedule>) -> Self {
        Self {
            processor: Processor::new(NAME, DEFAULT_PROPERTIES, [SUCCESS], schedule),
        }
    }

    /// Properties the engine's `ConsumeKafka` supports.
    pub fn property_definitions() -> &'static [PropertyDefinition] {
        PROPERTY_DEFINITIONS
    }

    pub fn into_processor(self) -> Processor {
        self.processor
    }
}

impl Default for ConsumeKafka {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Deref for ConsumeKafka {
    type Target = Processor;

    fn deref(&self) -> &Processor {
        &self.processor
    }
}

impl AsRef<Processor> for ConsumeKafka {
    fn as_ref(&self) -> &Processor {
        &self.processor
    }
}

impl From<ConsumeKafka> for Processor {
    fn from(value: ConsumeKafka) -> Self {
        value.processor
    }
}
