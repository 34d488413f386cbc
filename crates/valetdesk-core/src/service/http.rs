//! reqwest-backed implementation of [`ItemService`].

use async_trait::async_trait;
use log::debug;
use reqwest::{Client, Response, StatusCode, Url};
use serde::de::DeserializeOwned;

use super::{
    envelope::{ApiResponse, Health, StatusUpdate},
    ItemService,
};
use crate::{
    config::ClientConfig,
    error::{Result, TransportResultExt, ValetError},
    models::{Item, ItemId, ItemStatus},
    params::CreateItem,
};

/// HTTP client for the item service.
///
/// No timeout or retry policy is configured; the transport defaults apply
/// and every failure is handed back to the caller.
#[derive(Debug, Clone)]
pub struct HttpItemService {
    http: Client,
    base_url: Url,
}

impl HttpItemService {
    /// Creates a client for the configured service.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let http = Client::builder()
            .user_agent(concat!("valetdesk/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ValetError::configuration(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    /// The service base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `GET /health`: liveness probe exposed by the backend.
    pub async fn health(&self) -> Result<Health> {
        let url = self.endpoint(&["health"])?;
        debug!("GET {url}");
        let response = self
            .http
            .get(url)
            .send()
            .await
            .transport_context("Could not connect to server")?;
        let status = response.status();
        let body = response
            .text()
            .await
            .transport_context("Failed to read health response")?;
        serde_json::from_str(&body).map_err(|source| ValetError::InvalidResponse {
            status: status.as_u16(),
            source,
        })
    }

    /// Build `<base>/<segments...>`, percent-encoding each segment.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                ValetError::configuration(format!(
                    "Base URL '{}' cannot carry a path",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn item_endpoint(&self, id: &ItemId) -> Result<Url> {
        self.endpoint(&["items", id.as_str()])
    }
}

/// Decode an envelope regardless of HTTP status; the backend reports
/// failures in-band with `success: false`.
async fn read_envelope<T: DeserializeOwned>(response: Response) -> Result<(StatusCode, ApiResponse<T>)> {
    let status = response.status();
    let body = response
        .text()
        .await
        .transport_context("Failed to read response")?;
    let envelope = serde_json::from_str(&body).map_err(|source| ValetError::InvalidResponse {
        status: status.as_u16(),
        source,
    })?;
    Ok((status, envelope))
}

/// Map a 404 failure envelope to `NotFound`, leave everything else alone.
fn not_found<T>(status: StatusCode, envelope: &ApiResponse<T>, id: &ItemId) -> Option<ValetError> {
    (status == StatusCode::NOT_FOUND && !envelope.success)
        .then(|| ValetError::NotFound { id: id.clone() })
}

#[async_trait]
impl ItemService for HttpItemService {
    async fn list(&self) -> Result<Vec<Item>> {
        let url = self.endpoint(&["items"])?;
        debug!("GET {url}");
        let response = self
            .http
            .get(url)
            .send()
            .await
            .transport_context("Could not connect to server")?;
        let (_, envelope) = read_envelope::<Vec<Item>>(response).await?;
        envelope.into_data()
    }

    async fn get(&self, id: &ItemId) -> Result<Item> {
        let url = self.item_endpoint(id)?;
        debug!("GET {url}");
        let response = self
            .http
            .get(url)
            .send()
            .await
            .transport_context("Could not connect to server")?;
        let (status, envelope) = read_envelope::<Item>(response).await?;
        if let Some(err) = not_found(status, &envelope, id) {
            return Err(err);
        }
        envelope.into_data()
    }

    async fn create(&self, item: &CreateItem) -> Result<Item> {
        let url = self.endpoint(&["items"])?;
        debug!("POST {url}");
        let response = self
            .http
            .post(url)
            .json(item)
            .send()
            .await
            .transport_context("Could not connect to server")?;
        let (_, envelope) = read_envelope::<Item>(response).await?;
        envelope.into_data()
    }

    async fn update_status(&self, id: &ItemId, status: ItemStatus) -> Result<Option<Item>> {
        let url = self.item_endpoint(id)?;
        debug!("PATCH {url} status={}", status.as_str());
        let response = self
            .http
            .patch(url)
            .json(&StatusUpdate { status })
            .send()
            .await
            .transport_context("Could not update status")?;
        let (http_status, envelope) = read_envelope::<Item>(response).await?;
        if let Some(err) = not_found(http_status, &envelope, id) {
            return Err(err);
        }
        envelope.into_optional_data()
    }

    async fn delete(&self, id: &ItemId) -> Result<()> {
        let url = self.item_endpoint(id)?;
        debug!("DELETE {url}");
        let response = self
            .http
            .delete(url)
            .send()
            .await
            .transport_context("Could not delete item")?;
        let (status, envelope) = read_envelope::<serde_json::Value>(response).await?;
        if let Some(err) = not_found(status, &envelope, id) {
            return Err(err);
        }
        envelope.into_unit()
    }
}
