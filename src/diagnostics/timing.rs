use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Wall-clock time spent in one labelled stage.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub label: String,
    pub elapsed_ms: f64,
}

/// Stage timings plus their total.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

impl TimingBreakdown {
    /// Add `elapsed_ms` to the stage named `label`, creating it on first use.
    pub fn push(&mut self, label: impl Into<String>, elapsed_ms: f64) {
        let label = label.into();
        self.total_ms += elapsed_ms;
        match self.stages.iter_mut().find(|s| s.label == label) {
            Some(stage) => stage.elapsed_ms += elapsed_ms,
            None => self.stages.push(StageTiming { label, elapsed_ms }),
        }
    }

    /// Run `f`, record its duration under `label`, and pass its result through.
    pub fn time<T>(&mut self, label: impl Into<String>, f: impl FnOnce() -> T) -> T {
        let start = Instant::now();
        let out = f();
        self.push(label, elapsed_ms(start));
        out
    }

    pub fn stage_ms(&self, label: &str) -> Option<f64> {
        self.stages
            .iter()
            .find(|s| s.label == label)
            .map(|s| s.elapsed_ms)
    }
}

pub(crate) fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}
