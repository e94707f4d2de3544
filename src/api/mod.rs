//! REST backend collaborator: wire types, entities and the HTTP client.

pub mod api_types;
mod client;
pub mod filters;
mod resource;
pub mod types;

pub use api_types::Page;
pub use client::HttpClient;
pub use filters::{
  CityFilter, FavoriteFilter, Filter, NewsFilter, QueryPairs, SportClubFilter, SportTypeFilter,
  TournamentCategoryFilter,
};
pub use resource::{Resource, ResourceApi};
pub use types::{
  City, CityRequest, Favorite, FavoriteRequest, News, NewsRequest, SportClub, SportClubRequest,
  SportType, SportTypeRequest, TournamentCategory, TournamentCategoryRequest,
};
