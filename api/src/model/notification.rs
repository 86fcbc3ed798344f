use serde::{Deserialize, Deserializer};

use super::nullable;

/// Alert raised by the controller, as listed by `GET /api/notifications`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Notification {
    #[serde(default, deserialize_with = "id_string")]
    pub id: String,
    #[serde(rename = "type", default, deserialize_with = "nullable")]
    pub kind: NotificationKind,
    #[serde(default, deserialize_with = "nullable")]
    pub title: String,
    #[serde(default, deserialize_with = "nullable")]
    pub message: String,
    #[serde(default, deserialize_with = "nullable")]
    pub timestamp: String,
}

/// Severity of a notification. Unknown tags are shown as `Info`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum NotificationKind {
    #[default]
    Info,
    Warning,
    Success,
}

impl NotificationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NotificationKind::Info => "info",
            NotificationKind::Warning => "warning",
            NotificationKind::Success => "success",
        }
    }
}

impl From<String> for NotificationKind {
    fn from(tag: String) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "warning" => NotificationKind::Warning,
            "success" => NotificationKind::Success,
            _ => NotificationKind::Info,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(i64),
    Text(String),
}

fn id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<RawId>::deserialize(deserializer)? {
        Some(RawId::Number(n)) => n.to_string(),
        Some(RawId::Text(s)) => s,
        None => String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_feed() {
        let feed: Vec<Notification> = serde_json::from_value(json!([
            { "id": 1, "type": "warning", "title": "Hopper low", "message": "Refill beans", "timestamp": "10:02" },
            { "id": "n-2", "type": "success", "title": "Batch saved", "message": "", "timestamp": "10:05" }
        ]))
        .unwrap();
        assert_eq!(feed.len(), 2);
        assert_eq!(feed[0].id, "1");
        assert_eq!(feed[0].kind, NotificationKind::Warning);
        assert_eq!(feed[1].id, "n-2");
        assert_eq!(feed[1].kind, NotificationKind::Success);
    }

    #[test]
    fn unknown_or_missing_kind_is_info() {
        let feed: Vec<Notification> = serde_json::from_value(json!([
            { "id": 3, "type": "critical", "title": "?" },
            { "id": 4, "type": null },
            { "id": 5 }
        ]))
        .unwrap();
        assert!(feed.iter().all(|n| n.kind == NotificationKind::Info));
        assert!(feed[1].title.is_empty());
    }
}
