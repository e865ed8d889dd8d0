//! flowtest core library
//!
//! Integration-test harness for a data-flow engine, providing:
//! - Scenario lifecycle hooks (setup, teardown, forced cleanup)
//! - Test sessions owned by a per-scenario context
//! - Processor configuration descriptors and property validation
//! - A suite runner that drives the hooks around each scenario
//!
//! # Quick Start
//!
//! ```
//! use flowtest_core::{IntegrationTestDriver, ScenarioContext, ScenarioHooks, ScenarioInfo};
//!
//! let hooks = ScenarioHooks::new(IntegrationTestDriver);
//! let scenario = ScenarioInfo::new("consume from kafka");
//! let mut ctx = ScenarioContext::new();
//!
//! hooks.before_scenario(&mut ctx, &scenario).unwrap();
//! assert!(ctx.has_test());
//!
//! hooks.after_scenario(Some(&mut ctx), &scenario).unwrap();
//! assert!(!ctx.has_test());
//! ```
//!
//! # Processor descriptors
//!
//! ```
//! use flowtest_core::ConsumeKafka;
//!
//! let kafka = ConsumeKafka::default();
//! assert_eq!(kafka.property("Kafka Brokers"), Some("kafka-broker:9092"));
//! assert!(kafka.validate(ConsumeKafka::property_definitions()).is_valid());
//! ```

mod config;
mod context;
mod error;
mod hooks;
pub mod logging;
mod processor;
pub mod processors;
mod property;
mod runner;
mod session;

pub use config::{HarnessConfig, LoggingConfig, SuiteConfig, CONFIG_FILE_NAME};
pub use context::{ContextId, ScenarioContext};
pub use error::{HarnessError, Result};
pub use hooks::{integration_test_cleanup, ScenarioHooks, ScenarioInfo};
pub use processor::{Processor, Schedule, SchedulingStrategy};
pub use processors::ConsumeKafka;
pub use property::{
    parse_time_period, PropertyDefinition, PropertyKind, ValidationReport, Violation,
};
pub use runner::{Scenario, ScenarioResult, Suite, SuiteReport};
pub use session::{IntegrationTest, IntegrationTestDriver, SessionFactory, TestSession};
