//! Decodes payloads captured from a running controller.

use api::{BatchRecord, Notification, NotificationKind, SystemStatus};

const BATCHES: &str = r#"[
  {"id": 9, "batch_number": 2, "total": 70, "large": 20, "medium": 30, "small": 20,
   "quality_good": 60, "quality_bad": 10, "timestamp": "2024-03-06 11:30:00"},
  {"id": 8, "batch_number": 1, "total": 50, "large": 10, "medium": 25, "small": 10,
   "quality_good": 45, "quality_bad": 5, "timestamp": "2024-03-05 10:00:00"},
  {"id": 7, "batch_number": null, "total": 12, "timestamp": "not-a-date"}
]"#;

const STATUS: &str = r#"{"cpu": 3.1, "memory": 27.4, "storage": 41.0, "temperature": 52.6}"#;

const NOTIFICATIONS: &str = r#"[
  {"id": 1, "type": "info", "title": "Sorter online", "message": "Camera ready", "timestamp": "2024-03-06 08:00"},
  {"id": 2, "type": "warning", "title": "High temperature", "message": "CPU above 80C", "timestamp": "2024-03-06 09:12"}
]"#;

#[test]
fn batch_list_keeps_every_row() {
    let rows: Vec<BatchRecord> = serde_json::from_str(BATCHES).unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[2].label(), "#?");
    assert_eq!(rows[2].quality_good, 0);
    assert_eq!(rows[0].small + rows[0].medium + rows[0].large, 70);
}

#[test]
fn status_from_flask_backend() {
    let status: SystemStatus = serde_json::from_str(STATUS).unwrap();
    assert_eq!(status.cpu_percent, 3.1);
    assert_eq!(status.cpu_temp, 52.6);
    assert!(!status.counts.running);
}

#[test]
fn notification_feed() {
    let feed: Vec<Notification> = serde_json::from_str(NOTIFICATIONS).unwrap();
    assert_eq!(feed[1].kind, NotificationKind::Warning);
    assert_eq!(feed[1].kind.as_str(), "warning");
}
