// Point-in-time copy of the record tree for render hand-off and dumps

use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HostSnapshot {
    pub hostname: Option<String>,
    pub last_ping: Option<String>,
    pub logs: Vec<Value>,
    pub platform: Value,
    pub cpu_metrics: Vec<Value>,
    /// Sorted by name ascending, same order as the live collection.
    pub processes: Vec<ProcessSnapshot>,
    /// Sorted by name ascending.
    pub disks: Vec<DiskSnapshot>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessSnapshot {
    pub name: String,
    pub error_code: i64,
    pub last_goal_version_achieved: i64,
    pub plan: Option<Value>,
    pub cpu_metrics: Vec<Value>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiskSnapshot {
    pub name: String,
    pub metrics: Value,
}
