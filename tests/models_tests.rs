// Wire shape tests (JSON camelCase, kind parsing)

use hostwatch::models::*;
use serde_json::json;

#[test]
fn test_message_kind_parses_lowercase() {
    let kind: MessageKind = serde_json::from_str("\"status\"").unwrap();
    assert_eq!(kind, MessageKind::Status);
    let kind: MessageKind = serde_json::from_str("\"metrics\"").unwrap();
    assert_eq!(kind, MessageKind::Metrics);
}

#[test]
fn test_message_kind_unknown_is_tolerated() {
    let kind: MessageKind = serde_json::from_str("\"foo\"").unwrap();
    assert_eq!(kind, MessageKind::Unknown);
    assert_eq!(MessageKind::from_wire("foo"), MessageKind::Unknown);
    assert_eq!(MessageKind::from_wire("log"), MessageKind::Log);
}

#[test]
fn test_envelope_roundtrip_uses_type_field() {
    let envelope: Envelope =
        serde_json::from_value(json!({"type": "log", "content": ["a", "b"]})).unwrap();
    assert_eq!(envelope.kind, MessageKind::Log);
    assert_eq!(envelope.content, json!(["a", "b"]));

    let json = serde_json::to_string(&envelope).unwrap();
    assert!(json.contains("\"type\":\"log\""));
}

#[test]
fn test_process_status_camel_case_roundtrip() {
    let status: ProcessStatus = serde_json::from_value(json!({
        "name": "svc1",
        "errorCode": 2,
        "lastGoalVersionAchieved": 7,
        "plan": {"step": "fetch"},
    }))
    .unwrap();
    assert_eq!(status.name, "svc1");
    assert_eq!(status.error_code, 2);
    assert_eq!(status.last_goal_version_achieved, 7);
    assert_eq!(status.plan, Some(json!({"step": "fetch"})));

    let json = serde_json::to_string(&status).unwrap();
    assert!(json.contains("\"errorCode\""));
    assert!(json.contains("\"lastGoalVersionAchieved\""));
}

#[test]
fn test_process_status_plan_defaults_to_none() {
    let status: ProcessStatus = serde_json::from_value(json!({
        "name": "svc1",
        "errorCode": 0,
        "lastGoalVersionAchieved": -1,
    }))
    .unwrap();
    assert!(status.plan.is_none());

    let null_plan: ProcessStatus = serde_json::from_value(json!({
        "name": "svc1",
        "errorCode": 0,
        "lastGoalVersionAchieved": -1,
        "plan": null,
    }))
    .unwrap();
    assert!(null_plan.plan.is_none());
}

#[test]
fn test_metrics_payload_maps_default_to_empty() {
    let payload: MetricsPayload =
        serde_json::from_value(json!({"systemCpuMetrics": {"load": 0.5}})).unwrap();
    assert_eq!(payload.system_cpu_metrics, json!({"load": 0.5}));
    assert!(payload.platform.is_null());
    assert!(payload.process_cpu_metrics.is_empty());
    assert!(payload.disk_metrics.is_empty());
}

#[test]
fn test_metrics_payload_requires_system_cpu_metrics() {
    let result: Result<MetricsPayload, _> = serde_json::from_value(json!({"platform": {}}));
    assert!(result.is_err());
}

#[test]
fn test_metrics_payload_camel_case_roundtrip() {
    let payload: MetricsPayload = serde_json::from_value(json!({
        "platform": {"os": "linux"},
        "systemCpuMetrics": {"load": 0.5},
        "processCpuMetrics": {"svc1": {"cpu": 1.5}},
        "diskMetrics": {"sda": {"readBytes": 10}},
    }))
    .unwrap();
    assert_eq!(payload.process_cpu_metrics["svc1"], json!({"cpu": 1.5}));
    assert_eq!(payload.disk_metrics["sda"], json!({"readBytes": 10}));

    let json = serde_json::to_string(&payload).unwrap();
    assert!(json.contains("\"systemCpuMetrics\""));
    assert!(json.contains("\"processCpuMetrics\""));
    assert!(json.contains("\"diskMetrics\""));
}
