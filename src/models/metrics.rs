// Metrics message content

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Content of a `metrics` message. The platform descriptor and the samples
/// are opaque by contract; only the envelope around them is typed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsPayload {
    #[serde(default)]
    pub platform: Value,
    pub system_cpu_metrics: Value,
    /// Process name -> one CPU sample for that process.
    #[serde(default)]
    pub process_cpu_metrics: BTreeMap<String, Value>,
    /// Disk name -> latest metric payload for that disk.
    #[serde(default)]
    pub disk_metrics: BTreeMap<String, Value>,
}
