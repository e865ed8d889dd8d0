use crate::harness::{Event, RecordingDriver};
use flowtest_core::{HarnessError, ScenarioContext, ScenarioHooks, ScenarioInfo};

#[test]
fn test_teardown_without_setup_is_an_error() {
    let hooks = ScenarioHooks::new(RecordingDriver::new());
    let mut ctx = ScenarioContext::new();

    let err = hooks
        .after_scenario(Some(&mut ctx), &ScenarioInfo::new("never set up"))
        .unwrap_err();

    assert!(matches!(err, HarnessError::CleanupTargetMissing));
    assert!(err.to_string().contains("Might already be deleted?"));
}

#[test]
fn test_teardown_without_context_is_an_error() {
    let hooks = ScenarioHooks::new(RecordingDriver::new());

    let err = hooks
        .after_scenario(None, &ScenarioInfo::new("no context"))
        .unwrap_err();

    assert!(matches!(err, HarnessError::CleanupTargetMissing));
}

#[test]
fn test_second_teardown_is_an_error() {
    let hooks = ScenarioHooks::new(RecordingDriver::new());
    let scenario = ScenarioInfo::new("released twice");
    let mut ctx = ScenarioContext::new();

    hooks.before_scenario(&mut ctx, &scenario).unwrap();
    hooks.after_scenario(Some(&mut ctx), &scenario).unwrap();

    assert!(matches!(
        hooks.after_scenario(Some(&mut ctx), &scenario),
        Err(HarnessError::CleanupTargetMissing)
    ));
}

#[test]
fn test_failed_session_start_propagates() {
    let driver = RecordingDriver::new().failing_create();
    let hooks = ScenarioHooks::new(driver);
    let mut ctx = ScenarioContext::new();

    let err = hooks
        .before_scenario(&mut ctx, &ScenarioInfo::new("no docker"))
        .unwrap_err();

    assert!(matches!(err, HarnessError::SessionStart(_)));
    assert!(!ctx.has_test());
}

#[test]
fn test_failed_cleanup_keeps_session_attached() {
    let driver = RecordingDriver::new().failing_cleanup();
    let log = driver.log();
    let hooks = ScenarioHooks::new(driver);
    let scenario = ScenarioInfo::new("stuck container");
    let mut ctx = ScenarioContext::new();

    hooks.before_scenario(&mut ctx, &scenario).unwrap();
    let err = hooks
        .after_scenario(Some(&mut ctx), &scenario)
        .unwrap_err();

    assert!(matches!(err, HarnessError::Cleanup(_)));
    assert!(ctx.has_test());
    assert_eq!(log.count(|e| matches!(e, Event::Dropped(_))), 0);
}
