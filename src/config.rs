use serde::Deserialize;
use std::time::Duration;

use crate::alerts::{AlertRules, DEFAULT_CPU_THRESHOLD, DEFAULT_MEMORY_THRESHOLD};
use crate::history::DEFAULT_ALERT_LOG_CAPACITY;
use crate::ranker::DEFAULT_TOP_K;
use crate::sampler::DEFAULT_CPU_WINDOW;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub sampling: SamplingConfig,
    #[serde(default)]
    pub alerts: AlertsConfig,
    #[serde(default)]
    pub recorder: RecorderConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_host")]
    pub host: String,
}

fn default_port() -> u16 {
    5000
}

fn default_host() -> String {
    "127.0.0.1".into()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SamplingConfig {
    /// Window over which CPU percent is measured. Every /metrics request blocks this long.
    #[serde(default = "default_cpu_window_ms")]
    pub cpu_window_ms: u64,
    /// Processes listed by /metrics.
    #[serde(default = "default_top_k")]
    pub top_k: usize,
}

fn default_cpu_window_ms() -> u64 {
    DEFAULT_CPU_WINDOW.as_millis() as u64
}

fn default_top_k() -> usize {
    DEFAULT_TOP_K
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            cpu_window_ms: default_cpu_window_ms(),
            top_k: default_top_k(),
        }
    }
}

impl SamplingConfig {
    pub fn cpu_window(&self) -> Duration {
        Duration::from_millis(self.cpu_window_ms)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AlertsConfig {
    /// Percent above which a CPU alert fires.
    #[serde(default = "default_cpu_threshold")]
    pub cpu_threshold: f64,
    /// Used/total fraction above which a memory alert fires.
    #[serde(default = "default_memory_threshold")]
    pub memory_threshold: f64,
    #[serde(default = "default_log_capacity")]
    pub log_capacity: usize,
}

fn default_cpu_threshold() -> f64 {
    DEFAULT_CPU_THRESHOLD
}

fn default_memory_threshold() -> f64 {
    DEFAULT_MEMORY_THRESHOLD
}

fn default_log_capacity() -> usize {
    DEFAULT_ALERT_LOG_CAPACITY
}

impl Default for AlertsConfig {
    fn default() -> Self {
        Self {
            cpu_threshold: default_cpu_threshold(),
            memory_threshold: default_memory_threshold(),
            log_capacity: default_log_capacity(),
        }
    }
}

impl AlertsConfig {
    pub fn rules(&self) -> AlertRules {
        AlertRules {
            cpu_threshold: self.cpu_threshold,
            memory_threshold: self.memory_threshold,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecorderConfig {
    /// When false, nothing fills /history or /alerts.
    #[serde(default = "default_recorder_enabled")]
    pub enabled: bool,
    #[serde(default = "default_recorder_interval_ms")]
    pub interval_ms: u64,
}

fn default_recorder_enabled() -> bool {
    true
}

fn default_recorder_interval_ms() -> u64 {
    2000
}

impl Default for RecorderConfig {
    fn default() -> Self {
        Self {
            enabled: default_recorder_enabled(),
            interval_ms: default_recorder_interval_ms(),
        }
    }
}

impl AppConfig {
    /// Reads `$CONFIG_FILE` if set, else `config.toml` if present, else defaults.
    pub fn load() -> anyhow::Result<Self> {
        let path = match std::env::var("CONFIG_FILE") {
            Ok(p) => p,
            Err(_) if std::path::Path::new("config.toml").exists() => "config.toml".into(),
            Err(_) => {
                tracing::info!("no config file; using defaults");
                let config = Self::default();
                config.validate()?;
                return Ok(config);
            }
        };
        let s = std::fs::read_to_string(&path)
            .map_err(|e| anyhow::anyhow!("reading config {}: {}", path, e))?;
        Self::load_from_str(&s)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.server.port > 0,
            "server.port must be between 1 and 65535, got {}",
            self.server.port
        );
        anyhow::ensure!(!self.server.host.is_empty(), "server.host must be non-empty");
        anyhow::ensure!(
            self.sampling.cpu_window_ms > 0,
            "sampling.cpu_window_ms must be > 0, got {}",
            self.sampling.cpu_window_ms
        );
        anyhow::ensure!(
            self.sampling.top_k > 0,
            "sampling.top_k must be > 0, got {}",
            self.sampling.top_k
        );
        anyhow::ensure!(
            (0.0..=100.0).contains(&self.alerts.cpu_threshold),
            "alerts.cpu_threshold must be within 0..=100, got {}",
            self.alerts.cpu_threshold
        );
        anyhow::ensure!(
            self.alerts.memory_threshold > 0.0 && self.alerts.memory_threshold <= 1.0,
            "alerts.memory_threshold must be within (0, 1], got {}",
            self.alerts.memory_threshold
        );
        anyhow::ensure!(
            self.alerts.log_capacity > 0,
            "alerts.log_capacity must be > 0, got {}",
            self.alerts.log_capacity
        );
        anyhow::ensure!(
            self.recorder.interval_ms > 0,
            "recorder.interval_ms must be > 0, got {}",
            self.recorder.interval_ms
        );
        Ok(())
    }
}
