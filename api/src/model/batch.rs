use serde::{Deserialize, Serialize};

use super::nullable;

/// One completed sorting run as stored by the controller.
///
/// `small + medium + large` is not guaranteed to equal `total`; the controller
/// counts them independently and nothing here reconciles them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchRecord {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub batch_number: Option<i64>,
    /// Naive `YYYY-MM-DD HH:MM:SS` wall-clock string, kept raw.
    #[serde(default, deserialize_with = "nullable")]
    pub timestamp: String,
    #[serde(default, deserialize_with = "nullable")]
    pub total: u64,
    #[serde(default, deserialize_with = "nullable")]
    pub small: u64,
    #[serde(default, deserialize_with = "nullable")]
    pub medium: u64,
    #[serde(default, deserialize_with = "nullable")]
    pub large: u64,
    #[serde(default, deserialize_with = "nullable")]
    pub quality_good: u64,
    #[serde(default, deserialize_with = "nullable")]
    pub quality_bad: u64,
}

impl BatchRecord {
    /// Zero-valued record used when there is nothing to show.
    pub const EMPTY: BatchRecord = BatchRecord {
        id: 0,
        batch_number: None,
        timestamp: String::new(),
        total: 0,
        small: 0,
        medium: 0,
        large: 0,
        quality_good: 0,
        quality_bad: 0,
    };

    /// Label shown in batch lists, `#?` when the controller did not number it.
    pub fn label(&self) -> String {
        match self.batch_number {
            Some(number) => format!("#{number}"),
            None => "#?".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_controller_row() {
        let row = json!({
            "id": 12,
            "batch_number": 3,
            "total": 120,
            "large": 40,
            "medium": 50,
            "small": 30,
            "quality_good": 100,
            "quality_bad": 20,
            "timestamp": "2024-03-05 10:00:00"
        });
        let record: BatchRecord = serde_json::from_value(row).unwrap();
        assert_eq!(record.id, 12);
        assert_eq!(record.batch_number, Some(3));
        assert_eq!(record.total, 120);
        assert_eq!(record.quality_bad, 20);
        assert_eq!(record.timestamp, "2024-03-05 10:00:00");
    }

    #[test]
    fn missing_and_null_fields_fall_back_to_zero() {
        let row = json!({ "id": 4, "total": null, "timestamp": null });
        let record: BatchRecord = serde_json::from_value(row).unwrap();
        assert_eq!(record.total, 0);
        assert_eq!(record.small, 0);
        assert_eq!(record.batch_number, None);
        assert!(record.timestamp.is_empty());
    }

    #[test]
    fn label_handles_missing_number() {
        let mut record = BatchRecord::EMPTY;
        assert_eq!(record.label(), "#?");
        record.batch_number = Some(7);
        assert_eq!(record.label(), "#7");
    }
}
