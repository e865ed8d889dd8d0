use crate::harness::{Event, RecordingDriver};
use flowtest_core::{
    ConsumeKafka, Processor, ScenarioContext, ScenarioHooks, ScenarioInfo, Schedule,
    SchedulingStrategy,
};

#[test]
fn test_consume_kafka_defaults() {
    let kafka = ConsumeKafka::default();

    assert_eq!(kafka.name(), "ConsumeKafka");
    assert_eq!(kafka.properties().len(), 10);
    assert_eq!(kafka.property("Kafka Brokers"), Some("kafka-broker:9092"));
    assert_eq!(kafka.property("Group ID"), Some("docker_test_group"));
    assert_eq!(kafka.property("Topic Names"), Some("test"));
    assert_eq!(kafka.property("Session Timeout"), Some("60 sec"));
    assert!(kafka.is_auto_terminated("success"));
    assert_eq!(kafka.auto_terminate().len(), 1);
    assert_eq!(kafka.schedule(), None);
}

#[test]
fn test_consume_kafka_with_schedule() {
    let schedule = Schedule {
        strategy: SchedulingStrategy::CronDriven,
        period: Some("0 0/5 * * * ?".to_string()),
    };

    let scheduled = ConsumeKafka::new(Some(schedule.clone()));
    let plain = ConsumeKafka::default();

    assert_eq!(scheduled.schedule(), Some(&schedule));
    assert_eq!(scheduled.properties(), plain.properties());
    assert_eq!(scheduled.auto_terminate(), plain.auto_terminate());
    assert_ne!(&*scheduled, &*plain);
}

#[test]
fn test_provisioned_descriptor_reaches_the_session() {
    let driver = RecordingDriver::new();
    let log = driver.log();
    let hooks = ScenarioHooks::new(driver);
    let scenario = ScenarioInfo::new("kafka to session");
    let mut ctx = ScenarioContext::new();

    hooks.before_scenario(&mut ctx, &scenario).unwrap();
    ctx.test_mut()
        .unwrap()
        .provision(ConsumeKafka::default().into())
        .unwrap();

    let provisioned: Vec<&Processor> = ctx.test().unwrap().provisioned().iter().collect();
    assert_eq!(provisioned.len(), 1);
    assert_eq!(provisioned[0], &*ConsumeKafka::default());

    hooks.after_scenario(Some(&mut ctx), &scenario).unwrap();
    assert!(log.events().contains(&Event::Provisioned {
        context: ctx.id(),
        processor: "ConsumeKafka".to_string(),
    }));
}

#[test]
fn test_descriptor_json_is_consumable() {
    let json = ConsumeKafka::new(Some(Schedule::timer_driven("1 sec")))
        .to_json()
        .unwrap();

    let parsed = Processor::from_json(&json).unwrap();

    assert_eq!(parsed.property("Offset Reset"), Some("latest"));
    assert_eq!(parsed.schedule().unwrap().period.as_deref(), Some("1 sec"));
    assert!(parsed
        .validate(ConsumeKafka::property_definitions())
        .is_valid());
}
