//! Typed list filters and their query-string serialization.
//!
//! Each entity has its own filter struct with explicit optional fields.
//! [`QueryPairs`] is the only way filters become query parameters, and it
//! drops `None`, blank strings and empty lists, so an unset field can never
//! reach the backend as `name=` or `name=undefined`.

use chrono::NaiveDate;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt::{Debug, Display};

/// A list filter for one resource.
pub trait Filter:
  Clone + Debug + Default + PartialEq + Send + Sync + Serialize + DeserializeOwned + 'static
{
  /// Flat `key=value` pairs in a stable order.
  fn query_pairs(&self) -> Vec<(&'static str, String)>;

  /// Short stable digest of the serialized filter, used in cache keys.
  fn digest(&self) -> String {
    let encoded = self
      .query_pairs()
      .iter()
      .map(|(k, v)| format!("{}={}", k, v))
      .collect::<Vec<_>>()
      .join("&");

    let mut hasher = Sha256::new();
    hasher.update(encoded.as_bytes());
    let mut digest = hex::encode(hasher.finalize());
    digest.truncate(16);
    digest
  }
}

/// Builder for query pairs that omits unset values.
#[derive(Debug, Default)]
pub struct QueryPairs(Vec<(&'static str, String)>);

impl QueryPairs {
  pub fn new() -> Self {
    Self::default()
  }

  /// Add a text field unless it is `None` or blank. The value is trimmed.
  pub fn text(mut self, key: &'static str, value: &Option<String>) -> Self {
    if let Some(v) = value.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
      self.0.push((key, v.to_string()));
    }
    self
  }

  pub fn value<T: Display>(mut self, key: &'static str, value: Option<T>) -> Self {
    if let Some(v) = value {
      self.0.push((key, v.to_string()));
    }
    self
  }

  /// Add a multi-valued field as one comma-joined value, skipping blanks.
  pub fn list<T: Display>(mut self, key: &'static str, values: &[T]) -> Self {
    let joined = values
      .iter()
      .map(|v| v.to_string())
      .filter(|v| !v.trim().is_empty())
      .collect::<Vec<_>>()
      .join(",");
    if !joined.is_empty() {
      self.0.push((key, joined));
    }
    self
  }

  pub fn finish(self) -> Vec<(&'static str, String)> {
    self.0
  }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CityFilter {
  pub name: Option<String>,
  pub region: Option<String>,
}

impl Filter for CityFilter {
  fn query_pairs(&self) -> Vec<(&'static str, String)> {
    QueryPairs::new()
      .text("name", &self.name)
      .text("region", &self.region)
      .finish()
  }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SportClubFilter {
  pub name: Option<String>,
  pub city_id: Option<i64>,
  pub sport_type_ids: Vec<i64>,
  pub active: Option<bool>,
}

impl Filter for SportClubFilter {
  fn query_pairs(&self) -> Vec<(&'static str, String)> {
    QueryPairs::new()
      .text("name", &self.name)
      .value("cityId", self.city_id)
      .list("sportTypeIds", &self.sport_type_ids)
      .value("active", self.active)
      .finish()
  }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SportTypeFilter {
  pub name: Option<String>,
}

impl Filter for SportTypeFilter {
  fn query_pairs(&self) -> Vec<(&'static str, String)> {
    QueryPairs::new().text("name", &self.name).finish()
  }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TournamentCategoryFilter {
  pub name: Option<String>,
  pub sport_type_id: Option<i64>,
  pub age: Option<u32>,
}

impl Filter for TournamentCategoryFilter {
  fn query_pairs(&self) -> Vec<(&'static str, String)> {
    QueryPairs::new()
      .text("name", &self.name)
      .value("sportTypeId", self.sport_type_id)
      .value("age", self.age)
      .finish()
  }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FavoriteFilter {
  pub user_id: Option<i64>,
  pub sport_club_id: Option<i64>,
}

impl Filter for FavoriteFilter {
  fn query_pairs(&self) -> Vec<(&'static str, String)> {
    QueryPairs::new()
      .value("userId", self.user_id)
      .value("sportClubId", self.sport_club_id)
      .finish()
  }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewsFilter {
  pub title: Option<String>,
  pub author: Option<String>,
  pub tags: Vec<String>,
  pub published_after: Option<NaiveDate>,
}

impl Filter for NewsFilter {
  fn query_pairs(&self) -> Vec<(&'static str, String)> {
    QueryPairs::new()
      .text("title", &self.title)
      .text("author", &self.author)
      .list("tags", &self.tags)
      .value("publishedAfter", self.published_after)
      .finish()
  }
}
