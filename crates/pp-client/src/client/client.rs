use crate::{ClientError, ClientResult};

use std::time::Duration;

use log::debug;
use pp_core::{Profile, ProfileDraft, ProfileUpdate};
use reqwest::{Client as ReqwestClient, Method, Response};
use serde::de::DeserializeOwned;
use uuid::Uuid;

/// HTTP client for the profile service REST API
pub struct Client {
    pub base_url: String,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Service URL (e.g., "http://127.0.0.1:8000")
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: ReqwestClient::new(),
        }
    }

    /// Create a client with a per-request timeout
    pub fn with_timeout(base_url: &str, timeout: Duration) -> ClientResult<Self> {
        let client = ReqwestClient::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Build a request for a service path
    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!("{} {}", method, url);
        self.client.request(method, &url)
    }

    /// Send a request, converting non-success statuses into typed errors.
    ///
    /// The service reports rejections as a JSON body with a `detail`
    /// message; it is surfaced verbatim when present.
    async fn send(&self, req: reqwest::RequestBuilder) -> ClientResult<Response> {
        let response = req.send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let detail = response
            .json::<serde_json::Value>()
            .await
            .ok()
            .and_then(|body| {
                body.get("detail")
                    .and_then(|v| v.as_str())
                    .map(String::from)
            })
            .unwrap_or_else(|| format!("request failed with status {}", status));

        Err(ClientError::api(status.as_u16(), detail))
    }

    /// Send a request and decode the success body
    async fn execute<T: DeserializeOwned>(&self, req: reqwest::RequestBuilder) -> ClientResult<T> {
        let response = self.send(req).await?;
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(ClientError::from_json)
    }

    /// List all profiles
    pub async fn list_profiles(&self) -> ClientResult<Vec<Profile>> {
        let req = self.request(Method::GET, "/api/profiles");
        self.execute(req).await
    }

    /// Get a profile by ID
    pub async fn get_profile(&self, id: Uuid) -> ClientResult<Profile> {
        let req = self.request(Method::GET, &format!("/api/profiles/{}", id));
        self.execute(req).await.map_err(|err| match err {
            ClientError::Api { status: 404, .. } => ClientError::not_found(id),
            other => other,
        })
    }

    /// Create a new profile; the service assigns id and timestamps
    pub async fn create_profile(&self, draft: &ProfileDraft) -> ClientResult<Profile> {
        let req = self.request(Method::POST, "/api/profiles").json(draft);
        self.execute(req).await
    }

    /// Update a profile; unset fields are left untouched
    pub async fn update_profile(&self, id: Uuid, update: &ProfileUpdate) -> ClientResult<Profile> {
        let req = self
            .request(Method::PUT, &format!("/api/profiles/{}", id))
            .json(update);
        self.execute(req).await.map_err(|err| match err {
            ClientError::Api { status: 404, .. } => ClientError::not_found(id),
            other => other,
        })
    }

    /// Delete a profile. Irreversible; callers confirm first.
    pub async fn delete_profile(&self, id: Uuid) -> ClientResult<()> {
        let req = self.request(Method::DELETE, &format!("/api/profiles/{}", id));
        match self.send(req).await {
            Ok(_) => Ok(()),
            Err(ClientError::Api { status: 404, .. }) => Err(ClientError::not_found(id)),
            Err(other) => Err(other),
        }
    }

    /// Check service reachability
    pub async fn health(&self) -> ClientResult<()> {
        let req = self.request(Method::GET, "/api/health");
        self.send(req).await.map(|_| ())
    }
}
