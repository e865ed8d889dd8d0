//! Per-scenario state threaded through the lifecycle hooks.

use crate::session::TestSession;
use std::fmt;
use uuid::Uuid;

/// Identifier binding a test session to the context that created it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContextId(Uuid);

impl ContextId {
    /// Generates a fresh random id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ContextId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ContextId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Mutable per-scenario state.
///
/// The test session slot is an explicit `Option`: `None` is the "absent"
/// state that teardown refuses to treat as success.
#[derive(Debug, Default)]
pub struct ScenarioContext {
    id: ContextId,
    test: Option<Box<dyn TestSession>>,
}

impl ScenarioContext {
    /// Creates a context with no test session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns this context's id.
    pub fn id(&self) -> ContextId {
        self.id
    }

    /// Returns the current test session, if any.
    pub fn test(&self) -> Option<&dyn TestSession> {
        self.test.as_deref()
    }

    /// Returns the current test session mutably, if any.
    pub fn test_mut(&mut self) -> Option<&mut (dyn TestSession + 'static)> {
        self.test.as_deref_mut()
    }

    /// Whether a test session is attached.
    pub fn has_test(&self) -> bool {
        self.test.is_some()
    }

    /// Attaches a test session, returning the one it replaced.
    pub(crate) fn set_test(
        &mut self,
        test: Box<dyn TestSession>,
    ) -> Option<Box<dyn TestSession>> {
        self.test.replace(test)
    }

    /// Detaches and returns the test session.
    pub(crate) fn take_test(&mut self) -> Option<Box<dyn TestSession>> {
        self.test.take()
    }
}
