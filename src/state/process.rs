// Per-process status record

use serde_json::Value;

use crate::models::{ProcessSnapshot, ProcessStatus};
use crate::observe::{Listeners, SubscriptionId};

use super::trim_oldest;

/// Field-level change on a [`ProcessState`]. A status replace is one event
/// covering all three fields, not three events.
#[derive(Debug, Clone)]
pub enum ProcessChange {
    Status {
        error_code: i64,
        last_goal_version_achieved: i64,
        plan: Option<Value>,
    },
    CpuSample {
        sample: Value,
    },
}

/// Status snapshot for one process on the monitored host. Created lazily on
/// first reference by name and kept for the rest of the dashboard session.
#[derive(Debug)]
pub struct ProcessState {
    name: String,
    error_code: i64,
    last_goal_version_achieved: i64,
    plan: Option<Value>,
    cpu_metrics: Vec<Value>,
    max_cpu_samples: Option<usize>,
    listeners: Listeners<ProcessChange>,
}

impl ProcessState {
    pub(crate) fn new(name: impl Into<String>, max_cpu_samples: Option<usize>) -> Self {
        Self {
            name: name.into(),
            error_code: 0,
            last_goal_version_achieved: -1,
            plan: None,
            cpu_metrics: Vec::new(),
            max_cpu_samples,
            listeners: Listeners::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn error_code(&self) -> i64 {
        self.error_code
    }

    pub fn last_goal_version_achieved(&self) -> i64 {
        self.last_goal_version_achieved
    }

    pub fn plan(&self) -> Option<&Value> {
        self.plan.as_ref()
    }

    /// CPU samples in arrival order, oldest first.
    pub fn cpu_metrics(&self) -> &[Value] {
        &self.cpu_metrics
    }

    pub fn on_change(&self, listener: impl Fn(&ProcessChange) + 'static) -> SubscriptionId {
        self.listeners.subscribe(listener)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }

    /// Replaces error code, goal-version progress and plan in one step and
    /// returns the combined change. The caller notifies once the record is no
    /// longer exclusively borrowed, so callbacks may read the record.
    pub fn handle_status(&mut self, status: ProcessStatus) -> ProcessChange {
        self.error_code = status.error_code;
        self.last_goal_version_achieved = status.last_goal_version_achieved;
        self.plan = status.plan;
        ProcessChange::Status {
            error_code: self.error_code,
            last_goal_version_achieved: self.last_goal_version_achieved,
            plan: self.plan.clone(),
        }
    }

    /// Appends one CPU sample to the per-process series.
    pub fn handle_cpu_metrics(&mut self, sample: Value) -> ProcessChange {
        self.cpu_metrics.push(sample.clone());
        trim_oldest(&mut self.cpu_metrics, self.max_cpu_samples);
        ProcessChange::CpuSample { sample }
    }

    pub fn notify(&self, change: &ProcessChange) {
        self.listeners.emit(change);
    }

    pub fn snapshot(&self) -> ProcessSnapshot {
        ProcessSnapshot {
            name: self.name.clone(),
            error_code: self.error_code,
            last_goal_version_achieved: self.last_goal_version_achieved,
            plan: self.plan.clone(),
            cpu_metrics: self.cpu_metrics.clone(),
        }
    }
}
