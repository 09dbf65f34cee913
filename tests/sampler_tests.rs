// Sampler tests: window passthrough, vanished processes, sanitizing, source failure

mod common;

use common::{FakeSource, UnavailableSource, process};
use hostwatch::error::MonitorError;
use hostwatch::sampler::Sampler;
use hostwatch::source::ProcessRecord;
use std::sync::Arc;
use std::time::Duration;

#[tokio::test]
async fn collect_passes_configured_window_to_source() {
    let source = Arc::new(FakeSource::with_processes(10.0, 1, 2, vec![]));
    let sampler = Sampler::new(source.clone(), Duration::from_millis(250));
    sampler.collect().await.unwrap();
    assert_eq!(*source.windows.lock().unwrap(), vec![Duration::from_millis(250)]);
}

#[tokio::test]
async fn collect_drops_vanished_processes_and_keeps_order() {
    let source = Arc::new(FakeSource::with_processes(
        12.5,
        4,
        8,
        vec![
            ProcessRecord::Present(process(1, "init", 0.5, 0.1)),
            ProcessRecord::Vanished { pid: 2 },
            ProcessRecord::Present(process(3, "worker", 7.0, 2.0)),
        ],
    ));
    let snapshot = Sampler::new(source, Duration::from_millis(1))
        .collect()
        .await
        .unwrap();
    let pids: Vec<u32> = snapshot.processes.iter().map(|p| p.pid).collect();
    assert_eq!(pids, vec![1, 3]);
    assert_eq!(snapshot.cpu_percent, 12.5);
    assert_eq!(snapshot.memory_used_bytes, 4);
    assert_eq!(snapshot.memory_total_bytes, 8);
    assert!(snapshot.timestamp > 0);
}

#[tokio::test]
async fn collect_sanitizes_out_of_range_values() {
    let source = Arc::new(FakeSource::with_processes(
        f64::NAN,
        20,
        10,
        vec![ProcessRecord::Present(process(1, "odd", f64::INFINITY, -3.0))],
    ));
    let snapshot = Sampler::new(source, Duration::from_millis(1))
        .collect()
        .await
        .unwrap();
    assert_eq!(snapshot.cpu_percent, 0.0);
    assert_eq!(snapshot.memory_used_bytes, 10);
    assert_eq!(snapshot.processes[0].cpu_percent, 0.0);
    assert_eq!(snapshot.processes[0].memory_percent, 0.0);
}

#[tokio::test]
async fn collect_clamps_system_cpu_to_hundred() {
    let source = Arc::new(FakeSource::with_processes(140.0, 1, 2, vec![]));
    let snapshot = Sampler::new(source, Duration::from_millis(1))
        .collect()
        .await
        .unwrap();
    assert_eq!(snapshot.cpu_percent, 100.0);
}

#[tokio::test]
async fn collect_surfaces_source_unavailable() {
    let sampler = Sampler::new(Arc::new(UnavailableSource), Duration::from_millis(1));
    let err = sampler.collect().await.unwrap_err();
    assert!(matches!(err, MonitorError::SourceUnavailable(_)));
}

#[tokio::test]
async fn concurrent_collects_each_sample_once() {
    let source = Arc::new(FakeSource::with_processes(1.0, 1, 2, vec![]));
    let sampler = Sampler::new(source.clone(), Duration::from_millis(1));
    let tasks: Vec<_> = (0..8)
        .map(|_| {
            let sampler = sampler.clone();
            tokio::spawn(async move { sampler.collect().await })
        })
        .collect();
    for t in tasks {
        t.await.unwrap().unwrap();
    }
    assert_eq!(source.calls(), 8);
}
