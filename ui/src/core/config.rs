//! Device address and polling intervals, resolved once at startup.
//!
//! Nothing about the device is compiled in. Each launcher calls
//! [`provide_device_context`] from its root component; screens then pull the
//! [`DeviceConfig`] and a ready [`DeviceClient`] out of the Dioxus context.
//!
//! Sources, lowest precedence first:
//! - native: built-in defaults, `cacaosort.toml` in the platform config directory
//!   (or the file named by `CACAOSORT_CONFIG`), then `CACAOSORT_*` environment variables;
//! - web: `http://<page host>:5000`, the address remembered in `localStorage`,
//!   then a `?device=` query parameter (which is also remembered).

use api::DeviceClient;
use dioxus::prelude::*;
use serde::Deserialize;
use tracing::{info, warn, Level};

use super::platform::Platform;

/// Port the controller listens on when only a host is known.
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_STATUS_POLL_MS: u64 = 2_000;
pub const DEFAULT_NOTIFICATION_POLL_MS: u64 = 5_000;
/// Poll intervals below this are raised to it.
pub const MIN_POLL_MS: u64 = 250;

const LOCAL_DEVICE_URL: &str = "http://127.0.0.1:5000";

const ENV_DEVICE_URL: &str = "CACAOSORT_DEVICE_URL";
const ENV_STATUS_POLL_MS: &str = "CACAOSORT_STATUS_POLL_MS";
const ENV_NOTIFICATION_POLL_MS: &str = "CACAOSORT_NOTIFICATION_POLL_MS";
#[cfg(not(target_arch = "wasm32"))]
const ENV_CONFIG_FILE: &str = "CACAOSORT_CONFIG";
#[cfg(not(target_arch = "wasm32"))]
const ENV_LOG: &str = "CACAOSORT_LOG";
#[cfg(not(target_arch = "wasm32"))]
const CONFIG_FILE: &str = "cacaosort.toml";

#[cfg(target_arch = "wasm32")]
const STORAGE_KEY: &str = "cacaosort.device_url";
#[cfg(target_arch = "wasm32")]
const QUERY_PARAM: &str = "device";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceConfig {
    /// Validated controller base address.
    pub device_url: String,
    pub status_poll_ms: u64,
    pub notification_poll_ms: u64,
}

/// One configuration layer. Unset fields leave lower layers untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConfigOverrides {
    pub device_url: Option<String>,
    pub status_poll_ms: Option<u64>,
    pub notification_poll_ms: Option<u64>,
}

#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("couldn't read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigOverrides {
    /// Layer `higher` on top of `self`.
    pub fn merge(self, higher: ConfigOverrides) -> ConfigOverrides {
        ConfigOverrides {
            device_url: higher.device_url.or(self.device_url),
            status_poll_ms: higher.status_poll_ms.or(self.status_poll_ms),
            notification_poll_ms: higher.notification_poll_ms.or(self.notification_poll_ms),
        }
    }

    /// Read the `CACAOSORT_*` variables through `lookup`. Unparseable numbers are
    /// ignored with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ConfigOverrides {
        let number = |key: &str| {
            let raw = lookup(key)?;
            match raw.trim().parse::<u64>() {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!(key, value = %raw, "ignoring non-numeric poll interval");
                    None
                }
            }
        };

        ConfigOverrides {
            device_url: lookup(ENV_DEVICE_URL).filter(|url| !url.trim().is_empty()),
            status_poll_ms: number(ENV_STATUS_POLL_MS),
            notification_poll_ms: number(ENV_NOTIFICATION_POLL_MS),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_toml(text: &str, path: &str) -> Result<ConfigOverrides, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_string(),
            source,
        })
    }
}

impl DeviceConfig {
    /// Combine `overrides` with defaults. An address that doesn't parse falls
    /// back to `fallback_url`, then to the local loopback controller.
    pub fn from_overrides(fallback_url: &str, overrides: ConfigOverrides) -> DeviceConfig {
        let device_url = overrides
            .device_url
            .into_iter()
            .chain([fallback_url.to_string(), LOCAL_DEVICE_URL.to_string()])
            .find_map(|candidate| match DeviceClient::new(&candidate) {
                Ok(client) => Some(client.base_url().to_string()),
                Err(err) => {
                    warn!(%err, "ignoring device address");
                    None
                }
            })
            .unwrap_or_else(|| LOCAL_DEVICE_URL.to_string());

        DeviceConfig {
            device_url,
            status_poll_ms: clamp_poll(overrides.status_poll_ms, DEFAULT_STATUS_POLL_MS),
            notification_poll_ms: clamp_poll(
                overrides.notification_poll_ms,
                DEFAULT_NOTIFICATION_POLL_MS,
            ),
        }
    }

    /// Resolve configuration for the running platform.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn resolve() -> DeviceConfig {
        let mut layers = ConfigOverrides::default();
        match load_config_file() {
            Ok(Some(file)) => layers = layers.merge(file),
            Ok(None) => {}
            Err(err) => warn!(%err, "ignoring config file"),
        }
        layers = layers.merge(ConfigOverrides::from_lookup(|key| std::env::var(key).ok()));

        let config = DeviceConfig::from_overrides(LOCAL_DEVICE_URL, layers);
        config.log_resolved();
        config
    }

    /// Resolve configuration for the running platform.
    #[cfg(target_arch = "wasm32")]
    pub fn resolve() -> DeviceConfig {
        let window = web_sys::window();
        let hostname = window
            .as_ref()
            .and_then(|w| w.location().hostname().ok())
            .filter(|host| !host.is_empty())
            .unwrap_or_else(|| "127.0.0.1".to_string());
        let fallback = format!("http://{hostname}:{DEFAULT_PORT}");

        let storage = window
            .as_ref()
            .and_then(|w| w.local_storage().ok().flatten());
        let from_query = window
            .as_ref()
            .and_then(|w| w.location().search().ok())
            .and_then(|search| web_sys::UrlSearchParams::new_with_str(&search).ok())
            .and_then(|params| params.get(QUERY_PARAM))
            .filter(|url| DeviceClient::new(url).is_ok());

        if let (Some(url), Some(storage)) = (from_query.as_ref(), storage.as_ref()) {
            if storage.set_item(STORAGE_KEY, url).is_err() {
                warn!("couldn't remember device address");
            }
        }
        let remembered = storage.and_then(|s| s.get_item(STORAGE_KEY).ok().flatten());

        let layers = ConfigOverrides {
            device_url: remembered,
            ..ConfigOverrides::default()
        }
        .merge(ConfigOverrides {
            device_url: from_query,
            ..ConfigOverrides::default()
        });

        let config = DeviceConfig::from_overrides(&fallback, layers);
        config.log_resolved();
        config
    }

    /// Client for the configured controller.
    pub fn client(&self) -> DeviceClient {
        DeviceClient::new(&self.device_url).unwrap_or_else(|err| {
            warn!(%err, "configured device address rejected; using loopback");
            DeviceClient::new(LOCAL_DEVICE_URL).expect("loopback device address is valid")
        })
    }

    fn log_resolved(&self) {
        info!(
            platform = Platform::current().as_str(),
            device = %self.device_url,
            status_poll_ms = self.status_poll_ms,
            notification_poll_ms = self.notification_poll_ms,
            "device configuration resolved"
        );
    }
}

fn clamp_poll(value: Option<u64>, default: u64) -> u64 {
    value.unwrap_or(default).max(MIN_POLL_MS)
}

#[cfg(not(target_arch = "wasm32"))]
fn config_path() -> Option<std::path::PathBuf> {
    if let Ok(explicit) = std::env::var(ENV_CONFIG_FILE) {
        return Some(explicit.into());
    }
    directories::ProjectDirs::from("org", "cacaosort", "cacaosort")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
}

#[cfg(not(target_arch = "wasm32"))]
fn load_config_file() -> Result<Option<ConfigOverrides>, ConfigError> {
    let Some(path) = config_path() else {
        return Ok(None);
    };
    let display = path.display().to_string();
    match std::fs::read_to_string(&path) {
        Ok(text) => ConfigOverrides::from_toml(&text, &display).map(Some),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(ConfigError::Read {
            path: display,
            source,
        }),
    }
}

/// Log level for the launcher's subscriber (`CACAOSORT_LOG` on native).
#[cfg(not(target_arch = "wasm32"))]
pub fn log_level() -> Level {
    std::env::var(ENV_LOG)
        .ok()
        .and_then(|raw| raw.trim().parse::<Level>().ok())
        .unwrap_or(Level::INFO)
}

/// Log level for the launcher's subscriber (debug builds log more).
#[cfg(target_arch = "wasm32")]
pub fn log_level() -> Level {
    if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    }
}

/// Resolve the configuration once and share it, together with a client, with
/// every screen below the calling component.
pub fn provide_device_context() -> DeviceConfig {
    let config = use_hook(DeviceConfig::resolve);
    let shared = config.clone();
    use_context_provider(move || shared.client());
    use_context_provider(move || config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_overrides() {
        let config = DeviceConfig::from_overrides("http://sorter.local:5000", ConfigOverrides::default());
        assert_eq!(config.device_url, "http://sorter.local:5000/");
        assert_eq!(config.status_poll_ms, DEFAULT_STATUS_POLL_MS);
        assert_eq!(config.notification_poll_ms, DEFAULT_NOTIFICATION_POLL_MS);
    }

    #[test]
    fn higher_layers_win() {
        let file = ConfigOverrides::from_toml(
            "device_url = \"http://10.0.0.5:5000\"\nstatus_poll_ms = 1000\n",
            "cacaosort.toml",
        )
        .unwrap();
        let environment = ConfigOverrides::from_lookup(env(&[
            (ENV_DEVICE_URL, "http://10.0.0.9:5000"),
            (ENV_NOTIFICATION_POLL_MS, "7000"),
        ]));
        let merged = file.merge(environment);
        assert_eq!(merged.device_url.as_deref(), Some("http://10.0.0.9:5000"));
        assert_eq!(merged.status_poll_ms, Some(1000));
        assert_eq!(merged.notification_poll_ms, Some(7000));

        let config = DeviceConfig::from_overrides(LOCAL_DEVICE_URL, merged);
        assert_eq!(config.device_url, "http://10.0.0.9:5000/");
        assert_eq!(config.status_poll_ms, 1000);
    }

    #[test]
    fn invalid_address_falls_back() {
        let overrides = ConfigOverrides {
            device_url: Some("192.168.1.4".into()),
            ..ConfigOverrides::default()
        };
        let config = DeviceConfig::from_overrides("http://pi.local:5000", overrides);
        assert_eq!(config.device_url, "http://pi.local:5000/");

        let config = DeviceConfig::from_overrides("", ConfigOverrides::default());
        assert_eq!(config.device_url, "http://127.0.0.1:5000/");
        assert_eq!(config.client().base_url(), "http://127.0.0.1:5000/");
    }

    #[test]
    fn bad_numbers_and_blank_urls_are_ignored() {
        let overrides = ConfigOverrides::from_lookup(env(&[
            (ENV_DEVICE_URL, "   "),
            (ENV_STATUS_POLL_MS, "fast"),
        ]));
        assert_eq!(overrides, ConfigOverrides::default());
    }

    #[test]
    fn poll_intervals_have_a_floor() {
        let overrides = ConfigOverrides {
            status_poll_ms: Some(10),
            notification_poll_ms: Some(0),
            ..ConfigOverrides::default()
        };
        let config = DeviceConfig::from_overrides(LOCAL_DEVICE_URL, overrides);
        assert_eq!(config.status_poll_ms, MIN_POLL_MS);
        assert_eq!(config.notification_poll_ms, MIN_POLL_MS);
    }

    #[test]
    fn malformed_toml_is_reported() {
        let err = ConfigOverrides::from_toml("status_poll_ms = \"soon\"", "x.toml").unwrap_err();
        assert!(err.to_string().starts_with("invalid config file x.toml"));
    }
}
