use serde::de::IgnoredAny;
use serde::Deserialize;

use super::nullable;

/// Hardware health and live counters reported by `GET /api/system_status`.
///
/// Every field has a defined value even when the controller omits it, so views can
/// read them directly.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "StatusWire")]
pub struct SystemStatus {
    pub cpu_percent: f64,
    pub cpu_temp: f64,
    pub memory_percent: f64,
    pub storage_percent: f64,
    pub counts: SortingCounts,
}

/// Count/status sub-object of the status payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SortingCounts {
    #[serde(default, alias = "is_sorting", deserialize_with = "nullable")]
    pub running: bool,
    #[serde(default, deserialize_with = "nullable")]
    pub total: u64,
    #[serde(default, deserialize_with = "nullable")]
    pub small: u64,
    #[serde(default, deserialize_with = "nullable")]
    pub medium: u64,
    #[serde(default, deserialize_with = "nullable")]
    pub large: u64,
}

impl SystemStatus {
    /// Temperature above which the gauge is drawn in the warning colour.
    pub const HOT_CELSIUS: f64 = 80.0;

    pub fn is_hot(&self) -> bool {
        self.cpu_temp > Self::HOT_CELSIUS
    }
}

// Older firmware sends flat percentages (`"cpu": 12.5`), newer firmware nests them
// (`"cpu": {"percent": 12.5, "temp": 48.0}`). Both decode through this shape.
#[derive(Debug, Default, Deserialize)]
struct StatusWire {
    #[serde(default)]
    cpu: Option<Gauge>,
    #[serde(default)]
    memory: Option<Gauge>,
    #[serde(default)]
    storage: Option<Gauge>,
    #[serde(default, alias = "temp")]
    temperature: Option<Gauge>,
    #[serde(default, alias = "counts")]
    status: Option<CountsWire>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Gauge {
    Flat(f64),
    Nested {
        #[serde(default)]
        percent: Option<f64>,
        #[serde(default)]
        temp: Option<f64>,
    },
    Unknown(IgnoredAny),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CountsWire {
    Counts(SortingCounts),
    Unknown(IgnoredAny),
}

impl Gauge {
    fn percent(&self) -> Option<f64> {
        match self {
            Gauge::Flat(value) => Some(*value),
            Gauge::Nested { percent, .. } => *percent,
            Gauge::Unknown(_) => None,
        }
    }

    fn temp(&self) -> Option<f64> {
        match self {
            Gauge::Nested { temp, .. } => *temp,
            _ => None,
        }
    }
}

fn finite_or_zero(value: Option<f64>) -> f64 {
    value.filter(|v| v.is_finite()).unwrap_or(0.0)
}

impl From<StatusWire> for SystemStatus {
    fn from(wire: StatusWire) -> Self {
        let cpu_temp = wire
            .cpu
            .as_ref()
            .and_then(Gauge::temp)
            .or_else(|| wire.temperature.as_ref().and_then(Gauge::percent));

        let counts = match wire.status {
            Some(CountsWire::Counts(counts)) => counts,
            _ => SortingCounts::default(),
        };

        Self {
            cpu_percent: finite_or_zero(wire.cpu.as_ref().and_then(Gauge::percent)),
            cpu_temp: finite_or_zero(cpu_temp),
            memory_percent: finite_or_zero(wire.memory.as_ref().and_then(Gauge::percent)),
            storage_percent: finite_or_zero(wire.storage.as_ref().and_then(Gauge::percent)),
            counts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_flat_payload() {
        let status: SystemStatus = serde_json::from_value(json!({
            "cpu": 12.5,
            "memory": 40,
            "storage": 61.2,
            "temperature": 48.3
        }))
        .unwrap();
        assert_eq!(status.cpu_percent, 12.5);
        assert_eq!(status.memory_percent, 40.0);
        assert_eq!(status.storage_percent, 61.2);
        assert_eq!(status.cpu_temp, 48.3);
        assert_eq!(status.counts, SortingCounts::default());
    }

    #[test]
    fn decodes_nested_payload_with_counts() {
        let status: SystemStatus = serde_json::from_value(json!({
            "cpu": { "percent": 33.0, "temp": 81.5 },
            "memory": { "percent": 52.0, "used": 2048, "total": 4096 },
            "storage": { "percent": 10.0, "used": 3, "total": 30 },
            "status": { "running": true, "total": 1234, "small": 246, "medium": 370, "large": 617 }
        }))
        .unwrap();
        assert_eq!(status.cpu_percent, 33.0);
        assert_eq!(status.cpu_temp, 81.5);
        assert!(status.is_hot());
        assert_eq!(status.memory_percent, 52.0);
        assert!(status.counts.running);
        assert_eq!(status.counts.total, 1234);
        assert_eq!(status.counts.large, 617);
    }

    #[test]
    fn partial_and_odd_fields_default_to_zero() {
        let status: SystemStatus = serde_json::from_value(json!({
            "cpu": null,
            "memory": "n/a",
            "storage": {},
            "counts": { "total": null, "small": 5 }
        }))
        .unwrap();
        assert_eq!(status.cpu_percent, 0.0);
        assert_eq!(status.memory_percent, 0.0);
        assert_eq!(status.storage_percent, 0.0);
        assert_eq!(status.cpu_temp, 0.0);
        assert_eq!(status.counts.total, 0);
        assert_eq!(status.counts.small, 5);
        assert!(!status.is_hot());
    }

    #[test]
    fn empty_object_is_all_zero() {
        let status: SystemStatus = serde_json::from_str("{}").unwrap();
        assert_eq!(status, SystemStatus::default());
    }
}
