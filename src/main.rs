use anyhow::Result;
use hostwatch::*;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::FormatTime;

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(
            w,
            "{}",
            chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z")
        )
    }
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        let mut sigterm =
            match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
                Ok(s) => s,
                Err(_) => {
                    let _ = tokio::signal::ctrl_c().await;
                    return;
                }
            };
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {}
            _ = sigterm.recv() => {}
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_timer(LocalTimer)
        .with_env_filter(filter)
        .init();

    let app_config = config::AppConfig::load()?;

    let repo = Arc::new(sysinfo_repo::SysinfoRepo::new());
    let sampler = sampler::Sampler::new(repo.clone(), app_config.sampling.cpu_window());
    let terminator = terminate::TerminationHandler::new(repo);
    let store = Arc::new(history::TimeSeriesStore::new());
    let alert_log = Arc::new(history::AlertLog::new(app_config.alerts.log_capacity));

    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();
    let recorder_handle = if app_config.recorder.enabled {
        Some(recorder::spawn(
            recorder::RecorderDeps {
                sampler: sampler.clone(),
                store: store.clone(),
                alert_log: alert_log.clone(),
                rules: app_config.alerts.rules(),
                shutdown_rx,
            },
            app_config.recorder.interval_ms,
        ))
    } else {
        tracing::info!("Recorder disabled; /history and /alerts will stay empty");
        None
    };

    let app = routes::app(sampler, terminator, store, alert_log, app_config.clone());
    let addr = format!("{}:{}", app_config.server.host, app_config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Received shutdown signal");
    let _ = shutdown_tx.send(());
    if let Some(handle) = recorder_handle {
        let _ = handle.await;
    }
    Ok(())
}
