// src/modules/portfolio/adapter/outgoing/content_store_http.rs

use async_trait::async_trait;
use reqwest::Url;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::modules::portfolio::adapter::outgoing::content_store_config::ContentStoreConfig;
use crate::modules::portfolio::application::ports::outgoing::content_store::{
    Collection, ContentStore, ContentStoreError, ListOptions, Singleton,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ContentStoreSetupError {
    #[error("Invalid content store url: {0}")]
    InvalidBaseUrl(String),

    #[error("Failed to build http client: {0}")]
    Client(String),
}

/// Raw response as seen by the adapter.
#[derive(Debug, Clone)]
struct TransportResponse {
    status: u16,
    body: Vec<u8>,
}

/// Internal seam so the adapter can be tested without a live store.
#[async_trait]
trait HttpTransport: Send + Sync {
    async fn get(
        &self,
        url: &Url,
        authorization: Option<&str>,
    ) -> Result<TransportResponse, String>;
}

struct ReqwestTransport {
    client: reqwest::Client,
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(
        &self,
        url: &Url,
        authorization: Option<&str>,
    ) -> Result<TransportResponse, String> {
        let mut request = self.client.get(url.clone());
        if let Some(value) = authorization {
            request = request.header(reqwest::header::AUTHORIZATION, value);
        }

        let response = request.send().await.map_err(|e| e.to_string())?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(|e| e.to_string())?;

        Ok(TransportResponse {
            status,
            body: body.to_vec(),
        })
    }
}

#[derive(Deserialize)]
struct ListEnvelope {
    docs: Vec<Value>,
}

// ============================================================================
// Adapter
// ============================================================================

/// Content store over a headless CMS REST API
/// (`/api/globals/{slug}` and `/api/{collection}` returning `{ "docs": [...] }`).
#[derive(Clone)]
pub struct ContentStoreHttp {
    transport: Arc<dyn HttpTransport>,
    base_url: Url,
    authorization: Option<String>,
}

impl ContentStoreHttp {
    pub fn new(config: &ContentStoreConfig) -> Result<Self, ContentStoreSetupError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ContentStoreSetupError::Client(e.to_string()))?;

        Self::with_transport(Arc::new(ReqwestTransport { client }), config)
    }

    fn with_transport(
        transport: Arc<dyn HttpTransport>,
        config: &ContentStoreConfig,
    ) -> Result<Self, ContentStoreSetupError> {
        Ok(Self {
            transport,
            base_url: normalize_base_url(&config.base_url)?,
            authorization: config.authorization(),
        })
    }

    async fn get_json(&self, url: Url) -> Result<Value, ContentStoreError> {
        debug!(url = %url, "Querying content store");

        let response = self
            .transport
            .get(&url, self.authorization.as_deref())
            .await
            .map_err(|e| {
                warn!(url = %url, error = %e, "Content store request failed");
                ContentStoreError::Unreachable(e)
            })?;

        if !(200..300).contains(&response.status) {
            return Err(ContentStoreError::QueryFailed(format!(
                "GET {} returned status {}",
                url.path(),
                response.status
            )));
        }

        serde_json::from_slice(&response.body)
            .map_err(|e| ContentStoreError::MalformedResponse(e.to_string()))
    }
}

#[async_trait]
impl ContentStore for ContentStoreHttp {
    async fn find_singleton(&self, singleton: Singleton) -> Result<Value, ContentStoreError> {
        let url = global_url(&self.base_url, singleton, None)?;
        self.get_json(url).await
    }

    async fn list(
        &self,
        collection: Collection,
        options: ListOptions,
    ) -> Result<Vec<Value>, ContentStoreError> {
        let url = collection_url(&self.base_url, collection, &options)?;
        let body = self.get_json(url).await?;

        let envelope: ListEnvelope = serde_json::from_value(body)
            .map_err(|e| ContentStoreError::MalformedResponse(e.to_string()))?;

        Ok(envelope.docs)
    }

    async fn ping(&self) -> Result<(), ContentStoreError> {
        let options = ListOptions {
            limit: 1,
            sort: None,
            depth: Some(0),
        };
        let url = collection_url(&self.base_url, Collection::SkillCategories, &options)?;
        self.get_json(url).await.map(|_| ())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// `Url::join` replaces the last path segment unless the base ends with a slash.
fn normalize_base_url(raw: &str) -> Result<Url, ContentStoreSetupError> {
    let mut url =
        Url::parse(raw.trim()).map_err(|e| ContentStoreSetupError::InvalidBaseUrl(e.to_string()))?;

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}

fn join(base: &Url, path: &str) -> Result<Url, ContentStoreError> {
    base.join(path)
        .map_err(|e| ContentStoreError::QueryFailed(format!("Invalid query path {path}: {e}")))
}

fn global_url(base: &Url, singleton: Singleton, depth: Option<u8>) -> Result<Url, ContentStoreError> {
    let mut url = join(base, &format!("api/globals/{}", singleton.slug()))?;
    if let Some(depth) = depth {
        url.query_pairs_mut()
            .append_pair("depth", &depth.to_string());
    }
    Ok(url)
}

fn collection_url(
    base: &Url,
    collection: Collection,
    options: &ListOptions,
) -> Result<Url, ContentStoreError> {
    let mut url = join(base, &format!("api/{}", collection.slug()))?;
    {
        let mut query = url.query_pairs_mut();
        query.append_pair("limit", &options.limit.to_string());
        if let Some(sort) = &options.sort {
            query.append_pair("sort", &sort.to_string());
        }
        if let Some(depth) = options.depth {
            query.append_pair("depth", &depth.to_string());
        }
    }
    Ok(url)
}

// ============================================================================
// Tests
// ============================================================================
