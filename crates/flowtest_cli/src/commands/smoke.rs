//! Built-in lifecycle smoke suite.

use anyhow::{bail, Result};
use console::style;
use flowtest_core::{
    ConsumeKafka, HarnessConfig, HarnessError, IntegrationTestDriver, Scenario, ScenarioContext,
    ScenarioHooks, Schedule, Suite,
};

fn provision(ctx: &mut ScenarioContext, schedule: Option<Schedule>) -> flowtest_core::Result<()> {
    let test = ctx
        .test_mut()
        .ok_or(HarnessError::CleanupTargetMissing)?;
    test.provision(ConsumeKafka::new(schedule).into())
}

fn smoke_suite(config: HarnessConfig) -> Suite {
    Suite::new(config)
        .scenario(
            Scenario::new("Session is attached during setup")
                .tag("lifecycle")
                .step("context carries a test session", |ctx| {
                    let bound = ctx.test().map(|t| t.context_id()) == Some(ctx.id());
                    if bound {
                        Ok(())
                    } else {
                        Err(HarnessError::StepFailed(
                            "session is not bound to this context".to_string(),
                        ))
                    }
                }),
        )
        .scenario(
            Scenario::new("ConsumeKafka is provisioned with its defaults")
                .tag("kafka")
                .step("provision ConsumeKafka", |ctx| provision(ctx, None))
                .step("defaults are valid", |ctx| {
                    let test = ctx
                        .test()
                        .ok_or(HarnessError::CleanupTargetMissing)?;
                    for processor in test.provisioned() {
                        let report = processor.validate(ConsumeKafka::property_definitions());
                        if let Some(violation) = report.violations.first() {
                            return Err(HarnessError::StepFailed(violation.to_string()));
                        }
                    }
                    Ok(())
                }),
        )
        .scenario(
            Scenario::new("Timer-driven ConsumeKafka keeps its schedule")
                .tag("kafka")
                .step("provision scheduled ConsumeKafka", |ctx| {
                    provision(ctx, Some(Schedule::timer_driven("1 sec")))
                }),
        )
}

/// Run the smoke suite and print per-scenario results.
pub fn run(config: HarnessConfig) -> Result<()> {
    let hooks = ScenarioHooks::new(IntegrationTestDriver);
    let report = smoke_suite(config).run(&hooks);

    for result in &report.results {
        if result.success {
            println!("  {} {}", style("✓").green(), result.name);
        } else {
            println!(
                "  {} {}: {}",
                style("×").red(),
                result.name,
                result.error.as_deref().unwrap_or("unknown error")
            );
        }
    }
    println!();

    if !report.is_success() {
        bail!(report.summary());
    }
    println!("{}", style(report.summary()).green());
    Ok(())
}
