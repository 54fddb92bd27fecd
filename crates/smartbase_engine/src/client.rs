use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use smartbase_logging::smartbase_debug;
use url::Url;

use crate::{ApiError, FailureKind, ListFilter, ListResponse, SnippetId, SnippetRecord, WriteResponse};

#[derive(Debug, Clone)]
pub struct ApiSettings {
    /// API root, e.g. `http://127.0.0.1:8000/api`.
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000/api".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// Snippet endpoints of the backend service.
#[async_trait::async_trait]
pub trait SnippetApi: Send + Sync {
    async fn list(&self, filter: &ListFilter) -> Result<ListResponse, ApiError>;

    async fn create(&self, content: &str) -> Result<WriteResponse, ApiError>;

    async fn update(&self, id: SnippetId, content: &str) -> Result<WriteResponse, ApiError>;

    async fn delete(&self, id: SnippetId) -> Result<(), ApiError>;
}

#[derive(Deserialize)]
struct ListEnvelope {
    results: Option<Vec<SnippetRecord>>,
}

#[derive(Deserialize)]
struct WriteEnvelope {
    data: SnippetRecord,
}

#[derive(Deserialize, Default)]
struct ErrorEnvelope {
    #[serde(default)]
    errors: Option<FieldErrors>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Deserialize, Default)]
struct FieldErrors {
    #[serde(default)]
    content: Vec<String>,
}

impl ErrorEnvelope {
    fn into_message(self) -> Option<String> {
        self.errors
            .and_then(|errors| errors.content.into_iter().next())
            .or(self.error)
    }
}

#[derive(Serialize)]
struct ContentBody<'a> {
    content: &'a str,
}

#[derive(Debug, Clone)]
pub struct ReqwestSnippetApi {
    client: reqwest::Client,
    base: Url,
}

impl ReqwestSnippetApi {
    pub fn new(settings: &ApiSettings) -> Result<Self, ApiError> {
        // A trailing slash makes `join` append instead of replacing the last segment.
        let root = format!("{}/", settings.base_url.trim_end_matches('/'));
        let base = Url::parse(&root)
            .map_err(|err| ApiError::new(FailureKind::InvalidUrl, err.to_string()))?;
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ApiError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { client, base })
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base
            .join(path)
            .map_err(|err| ApiError::new(FailureKind::InvalidUrl, err.to_string()))
    }

    fn list_url(&self, filter: &ListFilter) -> Result<Url, ApiError> {
        let mut url = self.endpoint("snippets/")?;
        if filter.tag.is_some() || filter.search.is_some() {
            let mut pairs = url.query_pairs_mut();
            if let Some(tag) = &filter.tag {
                pairs.append_pair("tag", tag);
            }
            if let Some(search) = &filter.search {
                pairs.append_pair("search", search);
            }
        }
        Ok(url)
    }

    async fn send_write(
        &self,
        method: reqwest::Method,
        url: Url,
        content: &str,
    ) -> Result<WriteResponse, ApiError> {
        let body = serde_json::to_vec(&ContentBody { content })
            .map_err(|err| ApiError::new(FailureKind::Decode, err.to_string()))?;
        let response = self
            .client
            .request(method, url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(map_reqwest_error)?;
        if status.is_success() {
            let envelope: WriteEnvelope = serde_json::from_slice(&bytes)
                .map_err(|err| ApiError::new(FailureKind::Decode, err.to_string()))?;
            return Ok(WriteResponse::Saved(envelope.data));
        }

        let message = serde_json::from_slice::<ErrorEnvelope>(&bytes)
            .unwrap_or_default()
            .into_message();
        Ok(WriteResponse::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait::async_trait]
impl SnippetApi for ReqwestSnippetApi {
    async fn list(&self, filter: &ListFilter) -> Result<ListResponse, ApiError> {
        let url = self.list_url(filter)?;
        smartbase_debug!("GET {}", url);
        let response = self.client.get(url).send().await.map_err(map_reqwest_error)?;
        let status = response.status();
        let bytes = response.bytes().await.map_err(map_reqwest_error)?;

        // Error bodies (e.g. an unknown tag) carry no `results` and count as malformed.
        match serde_json::from_slice::<ListEnvelope>(&bytes) {
            Ok(ListEnvelope {
                results: Some(results),
            }) => Ok(ListResponse::Results(results)),
            Ok(ListEnvelope { results: None }) => {
                smartbase_debug!("list response status {} without results", status);
                Ok(ListResponse::Malformed)
            }
            Err(err) => {
                smartbase_debug!("list response status {} not decodable: {}", status, err);
                Ok(ListResponse::Malformed)
            }
        }
    }

    async fn create(&self, content: &str) -> Result<WriteResponse, ApiError> {
        let url = self.endpoint("snippets/")?;
        self.send_write(reqwest::Method::POST, url, content).await
    }

    async fn update(&self, id: SnippetId, content: &str) -> Result<WriteResponse, ApiError> {
        let url = self.endpoint(&format!("snippets/{id}/"))?;
        self.send_write(reqwest::Method::PUT, url, content).await
    }

    async fn delete(&self, id: SnippetId) -> Result<(), ApiError> {
        let url = self.endpoint(&format!("snippets/{id}/"))?;
        let response = self
            .client
            .delete(url)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }
        Ok(())
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_decode() {
        return ApiError::new(FailureKind::Decode, err.to_string());
    }
    ApiError::new(FailureKind::Network, err.to_string())
}
