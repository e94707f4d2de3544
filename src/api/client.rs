use async_trait::async_trait;
use color_eyre::{eyre::eyre, Result};
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use super::api_types::{parse_page, Page};
use super::filters::Filter;
use super::resource::{Resource, ResourceApi};
use crate::config::{ApiConfig, Config};
use crate::error::ApiError;

/// REST client for the admin backend
#[derive(Clone)]
pub struct HttpClient {
  http: reqwest::Client,
  base_url: String,
  token: Option<String>,
}

impl HttpClient {
  /// Create a client, taking the bearer token from the environment.
  pub fn new(config: &ApiConfig) -> Result<Self> {
    Self::with_token(config, Config::get_api_token())
  }

  pub fn with_token(config: &ApiConfig, token: Option<String>) -> Result<Self> {
    Url::parse(&config.base_url)
      .map_err(|e| eyre!("Invalid API base URL '{}': {}", config.base_url, e))?;

    let http = reqwest::Client::builder()
      .timeout(config.timeout())
      .build()
      .map_err(|e| eyre!("Failed to create HTTP client: {}", e))?;

    Ok(Self {
      http,
      base_url: config.base_url.trim_end_matches('/').to_string(),
      token,
    })
  }

  fn url(&self, path: &str) -> Result<Url, ApiError> {
    let raw = format!("{}{}", self.base_url, path);
    Url::parse(&raw).map_err(|e| ApiError::Network(format!("invalid URL '{}': {}", raw, e)))
  }

  fn request(&self, method: Method, url: Url) -> RequestBuilder {
    debug!(%method, %url, "sending request");
    let request = self.http.request(method, url);
    match &self.token {
      Some(token) => request.bearer_auth(token),
      None => request,
    }
  }

  /// Send a request, turning transport failures and non-2xx statuses into errors.
  async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
    let response = request
      .send()
      .await
      .map_err(|e| ApiError::Network(e.to_string()))?;

    let status = response.status();
    if status.is_success() {
      return Ok(response);
    }

    let url = response.url().clone();
    let body = response.text().await.unwrap_or_default();
    let message = error_message(status, &body);
    warn!(%url, status = status.as_u16(), %message, "request failed");

    Err(ApiError::Status {
      status: status.as_u16(),
      message,
    })
  }

  async fn list_page<R: Resource>(
    &self,
    page: u32,
    size: u32,
    filter: &R::Filter,
  ) -> Result<Page<R>, ApiError> {
    let mut url = self.url(R::PATH)?;
    {
      let mut query = url.query_pairs_mut();
      query.append_pair("page", &page.to_string());
      query.append_pair("size", &size.to_string());
      for (key, value) in filter.query_pairs() {
        query.append_pair(key, &value);
      }
    }

    let response = self.send(self.request(Method::GET, url)).await?;
    let body: Value = response.json().await?;
    parse_page(body)
  }

  fn item_url<R: Resource>(&self, id: i64) -> Result<Url, ApiError> {
    self.url(&format!("{}/{}", R::PATH, id))
  }
}

/// Pull a human-readable message out of an error response.
///
/// Prefers the backend's `message` or `error` field, then the status reason.
fn error_message(status: StatusCode, body: &str) -> String {
  let from_body = serde_json::from_str::<Value>(body).ok().and_then(|v| {
    ["message", "error"]
      .iter()
      .find_map(|field| v.get(field).and_then(Value::as_str).map(String::from))
  });

  from_body
    .filter(|m| !m.trim().is_empty())
    .unwrap_or_else(|| {
      status
        .canonical_reason()
        .unwrap_or("Unknown error")
        .to_string()
    })
}

#[async_trait]
impl<R: Resource> ResourceApi<R> for HttpClient {
  async fn list(&self, page: u32, size: u32, filter: &R::Filter) -> Result<Page<R>, ApiError> {
    self.list_page::<R>(page, size, filter).await
  }

  async fn get(&self, id: i64) -> Result<R, ApiError> {
    let url = self.item_url::<R>(id)?;
    let response = self.send(self.request(Method::GET, url)).await?;
    Ok(response.json().await?)
  }

  async fn create(&self, payload: &R::Payload) -> Result<R, ApiError> {
    let url = self.url(R::PATH)?;
    let response = self
      .send(self.request(Method::POST, url).json(payload))
      .await?;
    Ok(response.json().await?)
  }

  async fn update(&self, id: i64, payload: &R::Payload) -> Result<Option<R>, ApiError> {
    let url = self.item_url::<R>(id)?;
    let response = self
      .send(self.request(Method::PUT, url).json(payload))
      .await?;

    if response.status() == StatusCode::NO_CONTENT {
      return Ok(None);
    }
    let bytes = response.bytes().await?;
    if bytes.iter().all(u8::is_ascii_whitespace) {
      return Ok(None);
    }
    Ok(Some(serde_json::from_slice(&bytes)?))
  }

  async fn delete(&self, id: i64) -> Result<(), ApiError> {
    let url = self.item_url::<R>(id)?;
    self.send(self.request(Method::DELETE, url)).await?;
    Ok(())
  }
}
