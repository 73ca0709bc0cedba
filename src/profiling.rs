// Run profiler: wall-clock timings for the stages of one CLI invocation.
//
// Wraps the binary's entry point only. The library pipeline never touches
// it; stages are recorded by the caller around whole operations and written
// out as a JSON stats file when the run finishes.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

#[derive(Debug, Clone, Serialize)]
pub struct StageTiming {
    pub name: String,
    pub micros: u128,
}

#[derive(Debug, Serialize)]
pub struct RunProfile {
    pub started_at: DateTime<Utc>,
    pub total_micros: u128,
    pub stages: Vec<StageTiming>,
}

pub struct Profiler {
    output: PathBuf,
    started_at: DateTime<Utc>,
    start: Instant,
    stages: Vec<StageTiming>,
}

impl Profiler {
    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self {
            output: output.into(),
            started_at: Utc::now(),
            start: Instant::now(),
            stages: Vec::new(),
        }
    }

    /// Record how long `stage` takes to run.
    pub async fn time<T, F>(&mut self, name: &str, stage: F) -> T
    where
        F: std::future::Future<Output = T>,
    {
        let start = Instant::now();
        let out = stage.await;
        self.stages.push(StageTiming {
            name: name.to_string(),
            micros: start.elapsed().as_micros(),
        });
        out
    }

    pub fn stages(&self) -> &[StageTiming] {
        &self.stages
    }

    /// Write the collected timings to the stats file and return them.
    pub fn finish(self) -> Result<RunProfile> {
        let profile = RunProfile {
            started_at: self.started_at,
            total_micros: self.start.elapsed().as_micros(),
            stages: self.stages,
        };

        let json = serde_json::to_string_pretty(&profile)?;
        std::fs::write(&self.output, json)
            .with_context(|| format!("failed to write profile to {}", self.output.display()))?;

        info!(
            path = %self.output.display(),
            total_micros = profile.total_micros,
            "Wrote run profile"
        );
        Ok(profile)
    }
}
