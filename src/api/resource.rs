//! Binding between an entity type and its REST endpoint, cache keys and
//! loading keys, plus the network seam stores call through.

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use std::fmt::Debug;

use super::api_types::Page;
use super::filters::{
  CityFilter, FavoriteFilter, Filter, NewsFilter, SportClubFilter, SportTypeFilter,
  TournamentCategoryFilter,
};
use super::types::{
  City, CityRequest, Favorite, FavoriteRequest, News, NewsRequest, SportClub, SportClubRequest,
  SportType, SportTypeRequest, TournamentCategory, TournamentCategoryRequest,
};
use crate::error::ApiError;

/// An entity managed by a [`ResourceStore`](crate::store::ResourceStore).
pub trait Resource:
  Clone + Debug + PartialEq + Send + Sync + Serialize + DeserializeOwned + 'static
{
  type Filter: Filter;
  type Payload: Clone + Debug + Send + Sync + Serialize + DeserializeOwned + 'static;

  /// Short name used for loading keys and logs (e.g. "sport_clubs")
  const NAME: &'static str;
  /// Endpoint path relative to the API base URL
  const PATH: &'static str;
  /// Cache key prefix for list queries
  const LIST_KEY: &'static str;
  /// Cache key prefix for single-entity reads, followed by the id
  const DETAIL_KEY: &'static str;

  fn id(&self) -> i64;

  fn list_cache_key(page: u32, size: u32, filter: &Self::Filter) -> String {
    format!("{}_p{}_s{}_{}", Self::LIST_KEY, page, size, filter.digest())
  }

  fn detail_cache_key(id: i64) -> String {
    format!("{}{}", Self::DETAIL_KEY, id)
  }
}

/// Network operations for one resource. Stores only talk to the backend
/// through this trait.
#[async_trait]
pub trait ResourceApi<R: Resource>: Send + Sync {
  async fn list(&self, page: u32, size: u32, filter: &R::Filter) -> Result<Page<R>, ApiError>;

  async fn get(&self, id: i64) -> Result<R, ApiError>;

  async fn create(&self, payload: &R::Payload) -> Result<R, ApiError>;

  /// Returns `None` when the backend does not echo the updated entity.
  async fn update(&self, id: i64, payload: &R::Payload) -> Result<Option<R>, ApiError>;

  async fn delete(&self, id: i64) -> Result<(), ApiError>;
}

macro_rules! resource {
  ($ty:ty, filter = $filter:ty, payload = $payload:ty, name = $name:literal, path = $path:literal, list = $list:literal, detail = $detail:literal) => {
    impl Resource for $ty {
      type Filter = $filter;
      type Payload = $payload;

      const NAME: &'static str = $name;
      const PATH: &'static str = $path;
      const LIST_KEY: &'static str = $list;
      const DETAIL_KEY: &'static str = $detail;

      fn id(&self) -> i64 {
        self.id
      }
    }
  };
}

resource!(City, filter = CityFilter, payload = CityRequest,
  name = "cities", path = "/cities", list = "fetchCities", detail = "fetchCity_");
resource!(SportClub, filter = SportClubFilter, payload = SportClubRequest,
  name = "sport_clubs", path = "/sport-clubs", list = "fetchSportClubs", detail = "fetchSportClub_");
resource!(SportType, filter = SportTypeFilter, payload = SportTypeRequest,
  name = "sport_types", path = "/sport-types", list = "fetchSportTypes", detail = "fetchSportType_");
resource!(TournamentCategory, filter = TournamentCategoryFilter, payload = TournamentCategoryRequest,
  name = "tournament_categories", path = "/tournament-categories",
  list = "fetchTournamentCategories", detail = "fetchTournamentCategory_");
resource!(Favorite, filter = FavoriteFilter, payload = FavoriteRequest,
  name = "favorites", path = "/favorites", list = "fetchFavorites", detail = "fetchFavorite_");
resource!(News, filter = NewsFilter, payload = NewsRequest,
  name = "news", path = "/news", list = "fetchNewsList", detail = "fetchNews_");
