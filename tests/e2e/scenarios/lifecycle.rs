use crate::harness::{Event, RecordingDriver};
use flowtest_core::{ScenarioContext, ScenarioHooks, ScenarioInfo};

#[test]
fn test_setup_binds_session_to_context() {
    let hooks = ScenarioHooks::new(RecordingDriver::new());
    let mut ctx = ScenarioContext::new();

    hooks
        .before_scenario(&mut ctx, &ScenarioInfo::new("bind"))
        .unwrap();

    let test = ctx.test().expect("session attached after setup");
    assert_eq!(test.context_id(), ctx.id());
}

#[test]
fn test_teardown_cleans_up_then_releases() {
    let driver = RecordingDriver::new();
    let log = driver.log();
    let hooks = ScenarioHooks::new(driver);
    let scenario = ScenarioInfo::new("cleanup order");
    let mut ctx = ScenarioContext::new();

    hooks.before_scenario(&mut ctx, &scenario).unwrap();
    hooks.after_scenario(Some(&mut ctx), &scenario).unwrap();

    assert!(!ctx.has_test());
    assert_eq!(
        log.for_context(ctx.id()),
        vec![
            Event::Created(ctx.id()),
            Event::CleanedUp(ctx.id()),
            Event::Dropped(ctx.id()),
        ]
    );
}

#[test]
fn test_each_scenario_gets_its_own_session() {
    let driver = RecordingDriver::new();
    let log = driver.log();
    let hooks = ScenarioHooks::new(driver);

    let mut ids = Vec::new();
    for name in ["first", "second", "third"] {
        let scenario = ScenarioInfo::new(name);
        let mut ctx = ScenarioContext::new();
        hooks.before_scenario(&mut ctx, &scenario).unwrap();
        hooks.after_scenario(Some(&mut ctx), &scenario).unwrap();
        ids.push(ctx.id());
    }

    for id in ids {
        assert_eq!(log.for_context(id).len(), 3);
    }
    assert_eq!(log.count(|e| matches!(e, Event::CleanedUp(_))), 3);
}

#[test]
fn test_repeated_setup_releases_previous_session() {
    let driver = RecordingDriver::new();
    let log = driver.log();
    let hooks = ScenarioHooks::new(driver);
    let scenario = ScenarioInfo::new("setup twice");
    let mut ctx = ScenarioContext::new();

    hooks.before_scenario(&mut ctx, &scenario).unwrap();
    hooks.before_scenario(&mut ctx, &scenario).unwrap();

    assert!(ctx.has_test());
    assert_eq!(log.count(|e| matches!(e, Event::Created(_))), 2);
    assert_eq!(log.count(|e| matches!(e, Event::Dropped(_))), 1);
}
