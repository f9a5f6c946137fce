// Shared test helpers

use serde_json::{Value, json};

pub fn status_record(name: &str, error_code: i64, goal_version: i64, plan: Value) -> Value {
    json!({
        "name": name,
        "errorCode": error_code,
        "lastGoalVersionAchieved": goal_version,
        "plan": plan,
    })
}

/// Metrics content with empty process and disk maps.
pub fn metrics_content(platform: Value, system_sample: Value) -> Value {
    json!({
        "platform": platform,
        "systemCpuMetrics": system_sample,
        "processCpuMetrics": {},
        "diskMetrics": {},
    })
}

pub fn metrics_content_full(
    platform: Value,
    system_sample: Value,
    process_cpu: Value,
    disks: Value,
) -> Value {
    json!({
        "platform": platform,
        "systemCpuMetrics": system_sample,
        "processCpuMetrics": process_cpu,
        "diskMetrics": disks,
    })
}
