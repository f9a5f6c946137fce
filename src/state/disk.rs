// Per-disk metric record

use serde_json::Value;

use crate::models::DiskSnapshot;
use crate::observe::{Listeners, SubscriptionId};

#[derive(Debug, Clone)]
pub enum DiskChange {
    Metrics { metrics: Value },
}

/// Metric snapshot for one disk on the monitored host. The payload shape is
/// owned by the transport; the whole payload is replaced atomically on each
/// update, so observers always see one coherent sample.
#[derive(Debug)]
pub struct DiskState {
    name: String,
    metrics: Value,
    listeners: Listeners<DiskChange>,
}

impl DiskState {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            metrics: Value::Null,
            listeners: Listeners::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Latest metric payload; `Null` until the first update arrives.
    pub fn metrics(&self) -> &Value {
        &self.metrics
    }

    pub fn on_change(&self, listener: impl Fn(&DiskChange) + 'static) -> SubscriptionId {
        self.listeners.subscribe(listener)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }

    /// Replaces the whole metric payload and returns the change for the
    /// caller to notify with.
    pub fn handle_metrics(&mut self, metrics: Value) -> DiskChange {
        self.metrics = metrics;
        DiskChange::Metrics {
            metrics: self.metrics.clone(),
        }
    }

    pub fn notify(&self, change: &DiskChange) {
        self.listeners.emit(change);
    }

    pub fn snapshot(&self) -> DiskSnapshot {
        DiskSnapshot {
            name: self.name.clone(),
            metrics: self.metrics.clone(),
        }
    }
}
