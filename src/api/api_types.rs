//! Wire shape of paginated list responses.
//!
//! The backend returns Spring-style pages. [`ApiPage`] mirrors that shape for
//! deserialization; [`Page`] is what the rest of the crate works with.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;

use crate::error::ApiError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiPage<T> {
  pub content: Vec<T>,
  #[serde(default)]
  pub total_elements: u64,
  #[serde(default)]
  pub total_pages: u32,
  #[serde(default)]
  pub number: u32,
  #[serde(default)]
  pub size: u32,
  #[serde(default)]
  pub first: bool,
  #[serde(default)]
  pub last: bool,
  #[serde(default)]
  pub empty: bool,
}

/// One page of a list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
  pub content: Vec<T>,
  pub total_elements: u64,
  pub total_pages: u32,
  pub number: u32,
  pub size: u32,
  pub first: bool,
  pub last: bool,
  pub empty: bool,
}

impl<T> From<ApiPage<T>> for Page<T> {
  fn from(page: ApiPage<T>) -> Self {
    Self {
      content: page.content,
      total_elements: page.total_elements,
      total_pages: page.total_pages,
      number: page.number,
      size: page.size,
      first: page.first,
      last: page.last,
      empty: page.empty,
    }
  }
}

impl<T> Page<T> {
  /// Build a page from a full item list, for backends and tests that do not paginate.
  pub fn from_items(content: Vec<T>, number: u32, size: u32, total_elements: u64) -> Self {
    let total_pages = if size == 0 {
      0
    } else {
      total_elements.div_ceil(size as u64) as u32
    };
    Self {
      empty: content.is_empty(),
      first: number == 0,
      last: number.saturating_add(1) >= total_pages,
      content,
      total_elements,
      total_pages,
      number,
      size,
    }
  }
}

/// Parse a list response, rejecting bodies without a `content` array.
pub fn parse_page<T: DeserializeOwned>(body: Value) -> Result<Page<T>, ApiError> {
  match body.get("content") {
    Some(Value::Array(_)) => {}
    Some(_) => {
      return Err(ApiError::UnexpectedShape(
        "'content' is not an array".to_string(),
      ))
    }
    None => {
      return Err(ApiError::UnexpectedShape(
        "missing 'content' array".to_string(),
      ))
    }
  }

  let page: ApiPage<T> = serde_json::from_value(body)?;
  Ok(page.into())
}
