use crate::harness::{Event, RecordingDriver};
use flowtest_core::{
    logging, ConsumeKafka, HarnessConfig, HarnessError, Scenario, ScenarioHooks, Suite,
};

fn kafka_scenario(name: &str) -> Scenario {
    Scenario::new(name)
        .tag("kafka")
        .step("provision ConsumeKafka", |ctx| {
            ctx.test_mut()
                .ok_or(HarnessError::CleanupTargetMissing)?
                .provision(ConsumeKafka::default().into())
        })
}

#[test]
fn test_suite_wraps_every_scenario() {
    let driver = RecordingDriver::new();
    let log = driver.log();
    let hooks = ScenarioHooks::new(driver);

    let report = Suite::default()
        .scenario(kafka_scenario("first"))
        .scenario(kafka_scenario("second"))
        .run(&hooks);

    assert!(report.is_success(), "{:?}", report);
    assert!(logging::is_initialized());
    assert_eq!(log.count(|e| matches!(e, Event::Created(_))), 2);
    assert_eq!(log.count(|e| matches!(e, Event::Provisioned { .. })), 2);
    assert_eq!(log.count(|e| matches!(e, Event::CleanedUp(_))), 2);
    assert_eq!(log.count(|e| matches!(e, Event::Dropped(_))), 2);
}

#[test]
fn test_failing_body_still_tears_down() {
    let driver = RecordingDriver::new();
    let log = driver.log();
    let hooks = ScenarioHooks::new(driver);

    let report = Suite::default()
        .scenario(
            kafka_scenario("broken").step("assert message arrived", |_| {
                Err(HarnessError::StepFailed("no flow file".to_string()))
            }),
        )
        .run(&hooks);

    let result = &report.results[0];
    assert!(!result.success);
    assert_eq!(result.failure_step, Some(1));
    assert_eq!(log.count(|e| matches!(e, Event::CleanedUp(_))), 1);
}

#[test]
fn test_failing_session_start_skips_body_and_teardown() {
    let driver = RecordingDriver::new().failing_create();
    let hooks = ScenarioHooks::new(driver);

    let report = Suite::default()
        .scenario(kafka_scenario("needs docker"))
        .run(&hooks);

    let result = &report.results[0];
    assert!(!result.success);
    assert_eq!(result.steps_executed, 0);
    assert!(result.error.as_deref().unwrap().contains("docker network unavailable"));
}

#[test]
fn test_failing_cleanup_fails_the_scenario() {
    let hooks = ScenarioHooks::new(RecordingDriver::new().failing_cleanup());

    let report = Suite::default()
        .scenario(kafka_scenario("stuck"))
        .run(&hooks);

    let result = &report.results[0];
    assert!(!result.success);
    assert_eq!(result.steps_executed, 1);
    assert!(result.error.as_deref().unwrap().starts_with("teardown:"));
}

#[test]
fn test_fail_fast_stops_the_suite() {
    let mut config = HarnessConfig::default();
    config.suite.fail_fast = true;
    let driver = RecordingDriver::new();
    let hooks = ScenarioHooks::new(driver);

    let report = Suite::new(config)
        .scenario(Scenario::new("fails").step("fail", |_| {
            Err(HarnessError::StepFailed("first".to_string()))
        }))
        .scenario(kafka_scenario("skipped"))
        .run(&hooks);

    assert_eq!(report.results.len(), 1);
    assert_eq!(report.summary(), "1 scenarios: 0 passed, 1 failed");
}
