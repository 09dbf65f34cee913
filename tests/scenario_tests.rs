// End-to-end scenario: one hot snapshot through ranker and alert rules

mod common;

use common::{GB, process};
use hostwatch::alerts::AlertRules;
use hostwatch::models::{AlertKind, Snapshot};
use hostwatch::ranker::rank;

#[test]
fn hot_snapshot_ranks_and_raises_both_alerts() {
    // 9.2 of 10 GB: the memory rule is strict, so exactly 9/10 would not fire.
    let snap = Snapshot {
        timestamp: 1,
        cpu_percent: 85.0,
        memory_used_bytes: 92 * GB / 10,
        memory_total_bytes: 10 * GB,
        processes: vec![process(1, "a", 85.0, 5.0), process(2, "b", 10.0, 1.0)],
    };

    let top: Vec<u32> = rank(&snap.processes, 2).iter().map(|p| p.pid).collect();
    assert_eq!(top, vec![1, 2]);

    let events = AlertRules::default().evaluate(&snap);
    let kinds: Vec<AlertKind> = events.iter().map(|e| e.severity).collect();
    assert_eq!(kinds, vec![AlertKind::Cpu, AlertKind::Memory]);
    assert!(events[0].message.contains("85"));
}
