//! Test session contract and the default in-process session.
//!
//! A [`TestSession`] represents one running integration test. It is created
//! by a [`SessionFactory`] during scenario setup, owned by the
//! [`ScenarioContext`], and cleaned up during teardown.

use crate::context::{ContextId, ScenarioContext};
use crate::error::Result;
use crate::processor::Processor;
use std::fmt;
use std::time::Instant;
use tracing::{debug, info};

/// One running integration test, bound to the context that created it.
pub trait TestSession: fmt::Debug {
    /// The context this session was created for.
    fn context_id(&self) -> ContextId;

    /// Adds a processor to the system under test.
    fn provision(&mut self, processor: Processor) -> Result<()>;

    /// Processors provisioned so far.
    fn provisioned(&self) -> &[Processor];

    /// Tears down whatever the session stood up.
    fn cleanup(&mut self) -> Result<()>;
}

/// Constructs test sessions bound to a scenario context.
pub trait SessionFactory {
    /// Creates a new session for `context`.
    fn create(&self, context: &ScenarioContext) -> Result<Box<dyn TestSession>>;
}

impl<F> SessionFactory for F
where
    F: Fn(&ScenarioContext) -> Result<Box<dyn TestSession>>,
{
    fn create(&self, context: &ScenarioContext) -> Result<Box<dyn TestSession>> {
        self(context)
    }
}

/// Default session: tracks the processors provisioned for a scenario.
///
/// No engine or container is started; provisioning only records the
/// descriptors the scenario asked for.
pub struct IntegrationTest {
    context_id: ContextId,
    started_at: Instant,
    processors: Vec<Processor>,
    cleaned_up: bool,
}

impl IntegrationTest {
    /// Creates a session bound to `context`.
    pub fn new(context: &ScenarioContext) -> Self {
        debug!(context = %context.id(), "Creating integration test session");
        Self {
            context_id: context.id(),
            started_at: Instant::now(),
            processors: Vec::new(),
            cleaned_up: false,
        }
    }

    /// Whether `cleanup` has completed.
    pub fn is_cleaned_up(&self) -> bool {
        self.cleaned_up
    }
}

impl fmt::Debug for IntegrationTest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntegrationTest")
            .field("context_id", &self.context_id)
            .field("processors", &self.processors.len())
            .field("cleaned_up", &self.cleaned_up)
            .finish()
    }
}

impl TestSession for IntegrationTest {
    fn context_id(&self) -> ContextId {
        self.context_id
    }

    fn provision(&mut self, processor: Processor) -> Result<()> {
        debug!(processor = processor.name(), "Provisioning processor");
        self.processors.push(processor);
        Ok(())
    }

    fn provisioned(&self) -> &[Processor] {
        &self.processors
    }

    fn cleanup(&mut self) -> Result<()> {
        info!(
            context = %self.context_id,
            processors = self.processors.len(),
            elapsed_ms = self.started_at.elapsed().as_millis() as u64,
            "Cleaning up integration test"
        );
        self.processors.clear();
        self.cleaned_up = true;
        Ok(())
    }
}

/// Factory producing [`IntegrationTest`] sessions.
#[derive(Debug, Default, Clone, Copy)]
pub struct IntegrationTestDriver;

impl SessionFactory for IntegrationTestDriver {
    fn create(&self, context: &ScenarioContext) -> Result<Box<dyn TestSession>> {
        Ok(Box::new(IntegrationTest::new(context)))
    }
}
