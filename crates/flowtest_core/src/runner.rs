//! Suite runner: drives the lifecycle hooks around each scenario.

use crate::config::HarnessConfig;
use crate::context::ScenarioContext;
use crate::error::Result;
use crate::hooks::{ScenarioHooks, ScenarioInfo};
use crate::session::SessionFactory;
use std::fmt;
use tracing::{info, warn};

type StepFn = Box<dyn Fn(&mut ScenarioContext) -> Result<()>>;

/// One described action in a scenario body.
pub struct Step {
    description: String,
    body: StepFn,
}

impl fmt::Debug for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Step({:?})", self.description)
    }
}

/// Fluent builder for a scenario.
#[derive(Debug)]
pub struct Scenario {
    info: ScenarioInfo,
    steps: Vec<Step>,
}

impl Scenario {
    /// Create a new scenario with the given name
    pub fn new(name: &str) -> Self {
        Self {
            info: ScenarioInfo::new(name),
            steps: Vec::new(),
        }
    }

    /// Attach a tag
    pub fn tag(mut self, tag: &str) -> Self {
        self.info.tags.push(tag.to_string());
        self
    }

    /// Append a step
    pub fn step<B>(mut self, description: &str, body: B) -> Self
    where
        B: Fn(&mut ScenarioContext) -> Result<()> + 'static,
    {
        self.steps.push(Step {
            description: description.to_string(),
            body: Box::new(body),
        });
        self
    }

    /// Runs setup, the steps, and teardown against a fresh context.
    fn execute<F: SessionFactory>(&self, hooks: &ScenarioHooks<F>) -> ScenarioResult {
        let mut ctx = ScenarioContext::new();
        let name = self.info.name.clone();

        if let Err(e) = hooks.before_scenario(&mut ctx, &self.info) {
            // No session was attached, so teardown is skipped as well.
            return ScenarioResult {
                name,
                success: false,
                steps_executed: 0,
                failure_step: None,
                error: Some(format!("setup: {}", e)),
            };
        }

        let mut steps_executed = 0;
        let mut failure_step = None;
        let mut error = None;
        for (i, step) in self.steps.iter().enumerate() {
            match (step.body)(&mut ctx) {
                Ok(()) => steps_executed += 1,
                Err(e) => {
                    failure_step = Some(i);
                    error = Some(format!("Step {}: {}: {}", i, step.description, e));
                    break;
                }
            }
        }

        if let Err(e) = hooks.after_scenario(Some(&mut ctx), &self.info) {
            warn!(scenario = %name, error = %e, "Teardown failed");
            if error.is_none() {
                error = Some(format!("teardown: {}", e));
            }
        }

        ScenarioResult {
            name,
            success: error.is_none(),
            steps_executed,
            failure_step,
            error,
        }
    }
}

/// Result of running a scenario
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioResult {
    pub name: String,
    pub success: bool,
    pub steps_executed: usize,
    pub failure_step: Option<usize>,
    pub error: Option<String>,
}

impl ScenarioResult {
    /// Expect the result to be successful
    pub fn expect(self, msg: &str) {
        if !self.success {
            panic!(
                "{}: Scenario '{}' failed at step {}: {}",
                msg,
                self.name,
                self.failure_step.unwrap_or(0),
                self.error.unwrap_or_else(|| "unknown error".to_string())
            );
        }
    }
}

/// Collected results of a suite run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuiteReport {
    pub results: Vec<ScenarioResult>,
}

impl SuiteReport {
    pub fn passed(&self) -> usize {
        self.results.iter().filter(|r| r.success).count()
    }

    pub fn failed(&self) -> usize {
        self.results.len() - self.passed()
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    /// One-line human-readable summary.
    pub fn summary(&self) -> String {
        format!(
            "{} scenarios: {} passed, {} failed",
            self.results.len(),
            self.passed(),
            self.failed()
        )
    }
}

/// Ordered collection of scenarios run under one set of hooks.
#[derive(Debug, Default)]
pub struct Suite {
    config: HarnessConfig,
    scenarios: Vec<Scenario>,
}

impl Suite {
    pub fn new(config: HarnessConfig) -> Self {
        Self {
            config,
            scenarios: Vec::new(),
        }
    }

    pub fn scenario(mut self, scenario: Scenario) -> Self {
        self.scenarios.push(scenario);
        self
    }

    /// Calls `before_all` once, then runs every scenario in order.
    pub fn run<F: SessionFactory>(&self, hooks: &ScenarioHooks<F>) -> SuiteReport {
        hooks.before_all(&self.config.logging);

        let mut report = SuiteReport::default();
        for scenario in &self.scenarios {
            let result = scenario.execute(hooks);
            let failed = !result.success;
            if failed {
                warn!(
                    scenario = %result.name,
                    error = result.error.as_deref().unwrap_or(""),
                    "Scenario failed"
                );
            }
            report.results.push(result);
            if failed && self.config.suite.fail_fast {
                info!("Stopping after first failure");
                break;
            }
        }

        info!("{}", report.summary());
        report
    }
}
