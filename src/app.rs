use color_eyre::Result;
use std::sync::Arc;

use crate::api::{
  City, Favorite, HttpClient, News, Resource, ResourceApi, SportClub, SportType, TournamentCategory,
};
use crate::cache::RequestCache;
use crate::config::Config;
use crate::loading::LoadingManager;
use crate::store::ResourceStore;

/// One store per entity type, all sharing a single request cache and
/// loading registry.
pub struct Stores {
  pub cache: RequestCache,
  pub loading: LoadingManager,
  pub cities: ResourceStore<City>,
  pub sport_clubs: ResourceStore<SportClub>,
  pub sport_types: ResourceStore<SportType>,
  pub tournament_categories: ResourceStore<TournamentCategory>,
  pub favorites: ResourceStore<Favorite>,
  pub news: ResourceStore<News>,
}

impl Stores {
  /// Build every store against the configured backend.
  pub fn new(config: &Config) -> Result<Self> {
    let client = Arc::new(HttpClient::new(&config.api)?);
    let cache = RequestCache::new().with_default_ttl(config.cache.ttl());
    Ok(Self::with_client(client, cache, config.page_size))
  }

  /// Build every store against any client that serves all six resources.
  pub fn with_client<C>(client: Arc<C>, cache: RequestCache, page_size: u32) -> Self
  where
    C: ResourceApi<City>
      + ResourceApi<SportClub>
      + ResourceApi<SportType>
      + ResourceApi<TournamentCategory>
      + ResourceApi<Favorite>
      + ResourceApi<News>
      + 'static,
  {
    let loading = LoadingManager::new();

    Self {
      cities: store(&client, &cache, &loading, page_size),
      sport_clubs: store(&client, &cache, &loading, page_size),
      sport_types: store(&client, &cache, &loading, page_size),
      tournament_categories: store(&client, &cache, &loading, page_size),
      favorites: store(&client, &cache, &loading, page_size),
      news: store(&client, &cache, &loading, page_size),
      cache,
      loading,
    }
  }
}

fn store<R, C>(
  client: &Arc<C>,
  cache: &RequestCache,
  loading: &LoadingManager,
  page_size: u32,
) -> ResourceStore<R>
where
  R: Resource,
  C: ResourceApi<R> + 'static,
{
  let api: Arc<dyn ResourceApi<R>> = Arc::clone(client) as Arc<dyn ResourceApi<R>>;
  ResourceStore::new(api, cache.clone(), page_size).with_loading(loading.clone())
}
