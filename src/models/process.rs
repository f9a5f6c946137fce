// Per-process status record as pushed by the host agent

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessStatus {
    pub name: String,
    pub error_code: i64,
    pub last_goal_version_achieved: i64,
    /// Opaque descriptor of the actions the process is running to reach its
    /// goal version; absent when the process is converged.
    #[serde(default)]
    pub plan: Option<Value>,
}
