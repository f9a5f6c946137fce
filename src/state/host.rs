// Top-level aggregate for one monitored host: message dispatch and
// lookup-or-create of the per-process and per-disk records.

use chrono::{SecondsFormat, Utc};
use serde_json::Value;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::config::RetentionConfig;
use crate::models::{Envelope, HostSnapshot, MessageKind, MetricsPayload, ProcessStatus};
use crate::observe::{Listeners, SubscriptionId};

use super::{DiskState, ProcessState, StateError, trim_oldest};

/// Field-level change on a [`HostState`]. Append events carry what was
/// appended, not the whole series.
#[derive(Debug, Clone)]
pub enum HostChange {
    Hostname { hostname: String },
    Ping { last_ping: String },
    Logs { appended: usize },
    Platform { platform: Value },
    CpuSample { sample: Value },
    ProcessAdded { name: String },
    DiskAdded { name: String },
}

/// One monitored host as the dashboard sees it. The transport feeds push
/// messages in through [`HostState::handle_message`]; the rendering layer
/// subscribes through [`HostState::on_change`] and the per-record
/// registries. All mutation is synchronous and single-threaded.
#[derive(Debug)]
pub struct HostState {
    hostname: Option<String>,
    last_ping: Option<String>,
    logs: Vec<Value>,
    processes_by_name: HashMap<String, Rc<RefCell<ProcessState>>>,
    processes: Vec<Rc<RefCell<ProcessState>>>,
    disks_by_name: HashMap<String, Rc<RefCell<DiskState>>>,
    disks: Vec<Rc<RefCell<DiskState>>>,
    platform: Value,
    cpu_metrics: Vec<Value>,
    retention: RetentionConfig,
    listeners: Listeners<HostChange>,
}

impl HostState {
    /// Fresh host with unbounded history.
    pub fn new() -> Self {
        Self::with_retention(RetentionConfig::default())
    }

    pub fn with_retention(retention: RetentionConfig) -> Self {
        Self {
            hostname: None,
            last_ping: None,
            logs: Vec::new(),
            processes_by_name: HashMap::new(),
            processes: Vec::new(),
            disks_by_name: HashMap::new(),
            disks: Vec::new(),
            platform: Value::Object(serde_json::Map::new()),
            cpu_metrics: Vec::new(),
            retention,
            listeners: Listeners::new(),
        }
    }

    pub fn hostname(&self) -> Option<&str> {
        self.hostname.as_deref()
    }

    pub fn set_hostname(&mut self, hostname: impl Into<String>) {
        let hostname = hostname.into();
        self.hostname = Some(hostname.clone());
        self.listeners.emit(&HostChange::Hostname { hostname });
    }

    /// ISO-8601 time of the most recent inbound message, any kind.
    pub fn last_ping(&self) -> Option<&str> {
        self.last_ping.as_deref()
    }

    pub fn logs(&self) -> &[Value] {
        &self.logs
    }

    pub fn platform(&self) -> &Value {
        &self.platform
    }

    /// System-level CPU samples in arrival order, oldest first.
    pub fn cpu_metrics(&self) -> &[Value] {
        &self.cpu_metrics
    }

    /// Process records sorted by name ascending.
    pub fn processes(&self) -> &[Rc<RefCell<ProcessState>>] {
        &self.processes
    }

    pub fn process(&self, name: &str) -> Option<Rc<RefCell<ProcessState>>> {
        self.processes_by_name.get(name).cloned()
    }

    /// Disk records sorted by name ascending.
    pub fn disks(&self) -> &[Rc<RefCell<DiskState>>] {
        &self.disks
    }

    pub fn disk(&self, name: &str) -> Option<Rc<RefCell<DiskState>>> {
        self.disks_by_name.get(name).cloned()
    }

    pub fn on_change(&self, listener: impl Fn(&HostChange) + 'static) -> SubscriptionId {
        self.listeners.subscribe(listener)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }

    /// Routes one inbound push message. `lastPing` is refreshed first, for
    /// every kind; unhandled kinds then fall through as no-ops. A malformed
    /// content error leaves everything applied up to the failing element.
    pub fn handle_message(&mut self, kind: MessageKind, content: Value) -> Result<(), StateError> {
        let now = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        self.last_ping = Some(now.clone());
        self.listeners.emit(&HostChange::Ping { last_ping: now });

        match kind {
            MessageKind::Status => self.handle_status_message(content),
            MessageKind::Log => self.handle_log_message(content),
            MessageKind::Metrics => self.handle_metrics_message(content),
            MessageKind::Unknown => {
                tracing::debug!(operation = "handle_message", "unhandled message kind ignored");
                Ok(())
            }
        }
    }

    /// Convenience for feeds that deliver `{type, content}` objects.
    pub fn handle_envelope(&mut self, envelope: Envelope) -> Result<(), StateError> {
        self.handle_message(envelope.kind, envelope.content)
    }

    fn handle_status_message(&mut self, content: Value) -> Result<(), StateError> {
        let statuses: Vec<ProcessStatus> =
            serde_json::from_value(content).map_err(|source| StateError::MalformedContent {
                kind: "status",
                source,
            })?;
        for status in statuses {
            let record = self.find_or_create_process(&status.name);
            let change = record.borrow_mut().handle_status(status);
            record.borrow().notify(&change);
        }
        Ok(())
    }

    fn handle_log_message(&mut self, content: Value) -> Result<(), StateError> {
        let entries: Vec<Value> =
            serde_json::from_value(content).map_err(|source| StateError::MalformedContent {
                kind: "log",
                source,
            })?;
        let appended = entries.len();
        self.logs.extend(entries);
        trim_oldest(&mut self.logs, self.retention.max_log_entries);
        self.listeners.emit(&HostChange::Logs { appended });
        Ok(())
    }

    fn handle_metrics_message(&mut self, content: Value) -> Result<(), StateError> {
        let payload: MetricsPayload =
            serde_json::from_value(content).map_err(|source| StateError::MalformedContent {
                kind: "metrics",
                source,
            })?;

        self.platform = payload.platform;
        self.listeners.emit(&HostChange::Platform {
            platform: self.platform.clone(),
        });

        self.cpu_metrics.push(payload.system_cpu_metrics.clone());
        trim_oldest(&mut self.cpu_metrics, self.retention.max_cpu_samples);
        self.listeners.emit(&HostChange::CpuSample {
            sample: payload.system_cpu_metrics,
        });

        for (name, sample) in payload.process_cpu_metrics {
            let record = self.find_or_create_process(&name);
            let change = record.borrow_mut().handle_cpu_metrics(sample);
            record.borrow().notify(&change);
        }

        for (name, metrics) in payload.disk_metrics {
            let record = self.find_or_create_disk(&name);
            let change = record.borrow_mut().handle_metrics(metrics);
            record.borrow().notify(&change);
        }

        Ok(())
    }

    /// Returns the record for `name`, creating it on first reference. A new
    /// record lands in the name map and at the position that keeps the
    /// collection name-sorted; both always reference the same instance.
    fn find_or_create_process(&mut self, name: &str) -> Rc<RefCell<ProcessState>> {
        if let Some(existing) = self.processes_by_name.get(name) {
            return existing.clone();
        }
        tracing::debug!(process = name, "new process record");
        let record = Rc::new(RefCell::new(ProcessState::new(
            name,
            self.retention.max_process_cpu_samples,
        )));
        self.processes_by_name
            .insert(name.to_string(), record.clone());
        let at = self
            .processes
            .partition_point(|p| p.borrow().name() < name);
        self.processes.insert(at, record.clone());
        self.listeners.emit(&HostChange::ProcessAdded {
            name: name.to_string(),
        });
        record
    }

    fn find_or_create_disk(&mut self, name: &str) -> Rc<RefCell<DiskState>> {
        if let Some(existing) = self.disks_by_name.get(name) {
            return existing.clone();
        }
        tracing::debug!(disk = name, "new disk record");
        let record = Rc::new(RefCell::new(DiskState::new(name)));
        self.disks_by_name.insert(name.to_string(), record.clone());
        let at = self.disks.partition_point(|d| d.borrow().name() < name);
        self.disks.insert(at, record.clone());
        self.listeners.emit(&HostChange::DiskAdded {
            name: name.to_string(),
        });
        record
    }

    /// Plain serializable copy of the whole record tree. Pure read; emits
    /// nothing.
    pub fn snapshot(&self) -> HostSnapshot {
        HostSnapshot {
            hostname: self.hostname.clone(),
            last_ping: self.last_ping.clone(),
            logs: self.logs.clone(),
            platform: self.platform.clone(),
            cpu_metrics: self.cpu_metrics.clone(),
            processes: self.processes.iter().map(|p| p.borrow().snapshot()).collect(),
            disks: self.disks.iter().map(|d| d.borrow().snapshot()).collect(),
        }
    }
}

impl Default for HostState {
    fn default() -> Self {
        Self::new()
    }
}
