// Alert rule tests: strict thresholds, message format, ordering, no dedup

mod common;

use common::{GB, snapshot};
use hostwatch::alerts::{AlertRules, MEMORY_ALERT_MESSAGE};
use hostwatch::models::AlertKind;

#[test]
fn cpu_above_threshold_fires_with_value_in_message() {
    let events = AlertRules::default().evaluate(&snapshot(81.0, 0, 100));
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].severity, AlertKind::Cpu);
    assert!(events[0].message.contains("81"));
    assert_eq!(events[0].message, "High CPU usage: 81%");
}

#[test]
fn cpu_fractional_value_is_embedded() {
    let events = AlertRules::default().evaluate(&snapshot(92.5, 0, 100));
    assert_eq!(events[0].message, "High CPU usage: 92.5%");
}

#[test]
fn cpu_exactly_at_threshold_does_not_fire() {
    let events = AlertRules::default().evaluate(&snapshot(80.0, 0, 100));
    assert!(events.is_empty());
}

#[test]
fn memory_above_threshold_fires_fixed_message() {
    let events = AlertRules::default().evaluate(&snapshot(10.0, 91, 100));
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].severity, AlertKind::Memory);
    assert_eq!(events[0].message, MEMORY_ALERT_MESSAGE);
    assert!(!events[0].message.contains("91"));
}

#[test]
fn memory_exactly_at_threshold_does_not_fire() {
    let events = AlertRules::default().evaluate(&snapshot(10.0, 90, 100));
    assert!(events.is_empty());
    let events = AlertRules::default().evaluate(&snapshot(10.0, 9 * GB, 10 * GB));
    assert!(events.is_empty());
}

#[test]
fn memory_with_zero_total_does_not_fire() {
    let events = AlertRules::default().evaluate(&snapshot(10.0, 5, 0));
    assert!(events.is_empty());
}

#[test]
fn both_rules_fire_cpu_first() {
    let snap = snapshot(85.0, 95, 100);
    let events = AlertRules::default().evaluate(&snap);
    let kinds: Vec<AlertKind> = events.iter().map(|e| e.severity).collect();
    assert_eq!(kinds, vec![AlertKind::Cpu, AlertKind::Memory]);
    assert!(events.iter().all(|e| e.timestamp == snap.timestamp));
}

#[test]
fn repeated_evaluation_re_emits() {
    let rules = AlertRules::default();
    let snap = snapshot(99.0, 0, 100);
    assert_eq!(rules.evaluate(&snap).len(), 1);
    assert_eq!(rules.evaluate(&snap).len(), 1);
}

#[test]
fn custom_thresholds_apply() {
    let rules = AlertRules {
        cpu_threshold: 50.0,
        memory_threshold: 0.5,
    };
    assert_eq!(rules.evaluate(&snapshot(51.0, 51, 100)).len(), 2);
    assert!(rules.evaluate(&snapshot(50.0, 50, 100)).is_empty());
}
