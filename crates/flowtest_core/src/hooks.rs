//! Scenario lifecycle hooks.
//!
//! The test runner calls [`ScenarioHooks::before_all`] once per run, then
//! [`ScenarioHooks::before_scenario`] and [`ScenarioHooks::after_scenario`]
//! around every scenario. Each hook runs to completion before the runner
//! continues.

use crate::config::LoggingConfig;
use crate::context::ScenarioContext;
use crate::error::{HarnessError, Result};
use crate::logging;
use crate::session::SessionFactory;
use chrono::Local;
use tracing::{info, warn};

/// Wall-clock format used in setup/teardown log lines.
const TIMESTAMP_FORMAT: &str = "%H:%M:%S:%6f";

/// Runner-supplied description of a scenario.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScenarioInfo {
    pub name: String,
    pub tags: Vec<String>,
}

impl ScenarioInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tags: Vec::new(),
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Lifecycle hooks bound to the factory that creates test sessions.
pub struct ScenarioHooks<F> {
    factory: F,
}

impl<F: SessionFactory> ScenarioHooks<F> {
    pub fn new(factory: F) -> Self {
        Self { factory }
    }

    /// Configures process-wide logging for the run.
    pub fn before_all(&self, config: &LoggingConfig) {
        logging::init(config);
    }

    /// Creates a test session bound to `context` and stores it there.
    ///
    /// Fails only if the factory fails.
    pub fn before_scenario(
        &self,
        context: &mut ScenarioContext,
        scenario: &ScenarioInfo,
    ) -> Result<()> {
        info!(
            scenario = %scenario.name,
            "Integration test setup at {}",
            Local::now().format(TIMESTAMP_FORMAT)
        );
        let test = self.factory.create(context)?;
        if let Some(previous) = context.set_test(test) {
            warn!(
                scenario = %scenario.name,
                "Replacing a test session that was never torn down"
            );
            integration_test_cleanup(previous);
        }
        Ok(())
    }

    /// Cleans up and releases the context's test session.
    ///
    /// A missing context or a context without a session is an error. If the
    /// session's cleanup fails, the error is returned and the session stays
    /// attached.
    pub fn after_scenario(
        &self,
        context: Option<&mut ScenarioContext>,
        scenario: &ScenarioInfo,
    ) -> Result<()> {
        info!(
            scenario = %scenario.name,
            "Integration test teardown at {}",
            Local::now().format(TIMESTAMP_FORMAT)
        );
        let context = context.ok_or(HarnessError::CleanupTargetMissing)?;
        let test = context
            .test_mut()
            .ok_or(HarnessError::CleanupTargetMissing)?;
        test.cleanup()?;
        if let Some(test) = context.take_test() {
            integration_test_cleanup(test);
        }
        Ok(())
    }
}

/// Releases a test session (or anything else) after logging the intent.
pub fn integration_test_cleanup<T>(test: T) {
    info!("Integration test cleanup...");
    drop(test);
}
