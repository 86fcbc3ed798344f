//! HTTP transport to the device controller.

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::ApiError;
use crate::model::{BatchRecord, Command, ControlRequest, Notification, SystemStatus};

const BATCHES: &str = "api/batches";
const SYSTEM_STATUS: &str = "api/system_status";
const CONTROL: &str = "api/control";
const NOTIFICATIONS: &str = "api/notifications";
const VIDEO_FEED: &str = "video_feed";

/// Cheap-to-clone handle on one device controller.
#[derive(Debug, Clone)]
pub struct DeviceClient {
    base: Url,
    http: Client,
}

impl DeviceClient {
    /// Build a client for `base_url` (for example `http://192.168.1.20:5000`).
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Ok(Self {
            base: normalize_base(base_url)?,
            http: Client::new(),
        })
    }

    pub fn base_url(&self) -> &str {
        self.base.as_str()
    }

    pub async fn batches(&self) -> Result<Vec<BatchRecord>, ApiError> {
        self.get_json(BATCHES).await
    }

    pub async fn system_status(&self) -> Result<SystemStatus, ApiError> {
        self.get_json(SYSTEM_STATUS).await
    }

    pub async fn notifications(&self) -> Result<Vec<Notification>, ApiError> {
        self.get_json(NOTIFICATIONS).await
    }

    /// Forward a button press. The response body is ignored.
    pub async fn send_command(&self, command: Command) -> Result<(), ApiError> {
        let url = self.endpoint(CONTROL)?;
        debug!(command = command.as_str(), "posting control command");
        let response = self
            .http
            .post(url)
            .json(&ControlRequest { command })
            .send()
            .await?;
        check_status(CONTROL, response.status().as_u16())
    }

    /// URL of the MJPEG camera stream. `nonce` defeats caches when the stream
    /// is reloaded after a failure.
    pub fn video_feed_url(&self, nonce: u64) -> String {
        let mut url = self
            .base
            .join(VIDEO_FEED)
            .unwrap_or_else(|_| self.base.clone());
        url.query_pairs_mut().append_pair("t", &nonce.to_string());
        url.into()
    }

    fn endpoint(&self, path: &'static str) -> Result<Url, ApiError> {
        self.base
            .join(path)
            .map_err(|_| ApiError::InvalidBaseUrl(self.base.to_string()))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &'static str) -> Result<T, ApiError> {
        let url = self.endpoint(path)?;
        let response = self.http.get(url).send().await?;
        check_status(path, response.status().as_u16())?;
        let body = response.json::<T>().await?;
        debug!(endpoint = path, "decoded response");
        Ok(body)
    }
}

fn check_status(endpoint: &'static str, status: u16) -> Result<(), ApiError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ApiError::Status { endpoint, status })
    }
}

/// Parse the configured address and make sure relative joins land under it.
fn normalize_base(raw: &str) -> Result<Url, ApiError> {
    let trimmed = raw.trim();
    let mut url =
        Url::parse(trimmed).map_err(|_| ApiError::InvalidBaseUrl(trimmed.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return Err(ApiError::InvalidBaseUrl(trimmed.to_string()));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url.set_query(None);
    url.set_fragment(None);
    Ok(url)
}
